use crate::constants::PHOTO_FRAME_SELECTOR;
use crate::core::interact::{
    panel_perspective_transform, parallax_offset, tilt_angles, tilt_transform, NEUTRAL_TILT,
};
use crate::core::Scene;
use crate::dom;
use crate::fx::FxContext;
use crate::panel;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub document: web::Document,
    pub scene: Rc<RefCell<Scene>>,
    pub fx: Rc<RefCell<FxContext>>,
    pub panel: web::HtmlElement,
    pub photo_cards: Vec<web::HtmlElement>,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    // Registration order matters: parallax runs before the trail on each move.
    wire_parallax(&w);
    wire_cursor_trail(&w);
    for card in &w.photo_cards {
        wire_tilt(card);
    }
}

fn wire_parallax(w: &PointerWiring) {
    let scene = w.scene.clone();
    let panel = w.panel.clone();
    dom::on_mouse(&w.document, "mousemove", move |ev| {
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let offset = parallax_offset(client, dom::viewport_size());
        scene.borrow_mut().apply_parallax(offset);
        panel::set_tilt(&panel, &panel_perspective_transform(offset));
    });
}

fn wire_cursor_trail(w: &PointerWiring) {
    let fx = w.fx.clone();
    dom::on_mouse(&w.document, "mousemove", move |ev| {
        fx.borrow_mut().trail_dot(ev.client_x(), ev.client_y());
    });
}

fn wire_tilt(card: &web::HtmlElement) {
    let frame = match card.query_selector(PHOTO_FRAME_SELECTOR) {
        Ok(Some(el)) => match el.dyn_into::<web::HtmlElement>() {
            Ok(f) => f,
            Err(_) => return,
        },
        _ => {
            log::warn!("[tilt] photo card without {}", PHOTO_FRAME_SELECTOR);
            return;
        }
    };

    let card_move = card.clone();
    let frame_move = frame.clone();
    dom::on_mouse(card, "mousemove", move |ev| {
        let rect = card_move.get_bounding_client_rect();
        let local = Vec2::new(
            (ev.client_x() as f64 - rect.left()) as f32,
            (ev.client_y() as f64 - rect.top()) as f32,
        );
        let size = Vec2::new(rect.width() as f32, rect.height() as f32);
        let (rx, ry) = tilt_angles(local, size);
        dom::set_style(&frame_move, "transform", &tilt_transform(rx, ry));
    });

    dom::on_event(card, "mouseleave", move || {
        dom::set_style(&frame, "transform", NEUTRAL_TILT);
    });
}
