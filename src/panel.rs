use crate::constants::{CONFIRMATION_HTML, SHAKE_ANIMATION, SHAKE_KEYFRAMES};
use crate::dom;
use web_sys as web;

/// Register the `shake` keyframes used by the dodge interaction.
pub fn inject_shake_keyframes(document: &web::Document) {
    let Some(head) = document.head() else {
        log::warn!("[panel] no <head>; shake animation unavailable");
        return;
    };
    if let Ok(style) = document.create_element("style") {
        style.set_text_content(Some(SHAKE_KEYFRAMES));
        _ = head.append_child(&style);
    }
}

#[inline]
pub fn start_shake(panel: &web::HtmlElement) {
    dom::set_style(panel, "animation", SHAKE_ANIMATION);
}

#[inline]
pub fn clear_shake(panel: &web::HtmlElement) {
    dom::set_style(panel, "animation", "");
}

#[inline]
pub fn set_tilt(panel: &web::HtmlElement, transform: &str) {
    dom::set_style(panel, "transform", transform);
}

/// Swap the question for the fixed confirmation message.
pub fn show_confirmation(panel: &web::HtmlElement) {
    panel.set_inner_html(CONFIRMATION_HTML);
}

/// Centre of the panel in viewport coordinates.
pub fn center(panel: &web::HtmlElement) -> (f64, f64) {
    let rect = panel.get_bounding_client_rect();
    (
        rect.left() + rect.width() / 2.0,
        rect.top() + rect.height() / 2.0,
    )
}
