use crate::dom;
use crate::fx::FxContext;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// The declining control jumps away on hover while the confirming one grows.
pub fn wire_dodge(
    decline: &web::HtmlElement,
    confirm: &web::HtmlElement,
    fx: Rc<RefCell<FxContext>>,
) {
    let decline_el = decline.clone();
    let confirm_el = confirm.clone();
    dom::on_event(decline, "mouseover", move || {
        let d = fx.borrow_mut().dodge();
        dom::set_style(&decline_el, "transform", &d.control_transform());
        dom::set_style(&confirm_el, "transform", &d.companion_transform());
        log::debug!(
            "[dodge] count={} max={:.0} scale={:.1}",
            d.count,
            d.max_movement,
            d.companion_scale
        );
    });
}

pub fn wire_confirm(confirm: &web::HtmlElement, fx: Rc<RefCell<FxContext>>) {
    dom::on_event(confirm, "click", move || {
        if fx.borrow_mut().confirm() {
            log::info!("[confirm] accepted");
        } else {
            log::debug!("[confirm] already accepted; ignoring");
        }
    });
}
