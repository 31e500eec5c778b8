use crate::constants::{FADE_SHOWN_CLASS, SPARKLE_SHADOW};
use crate::core::interact::RevealTracker;
use crate::dom;
use crate::frame::{self, FrameContext};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Fade-marked elements and which of them are already shown.
pub struct FadeReveal {
    elements: Vec<web::HtmlElement>,
    tracker: RevealTracker,
}

impl FadeReveal {
    pub fn new(elements: Vec<web::HtmlElement>) -> Self {
        Self {
            elements,
            tracker: RevealTracker::default(),
        }
    }

    /// Show every element that has entered the viewport. Never hides.
    pub fn check(&mut self) {
        if self.tracker.shown_count() == self.elements.len() {
            return;
        }
        let viewport_h = dom::viewport_size().y as f64;
        for (i, el) in self.elements.iter().enumerate() {
            if self.tracker.is_shown(i) {
                continue;
            }
            let rect = el.get_bounding_client_rect();
            if self.tracker.observe(i, rect.top(), rect.bottom(), viewport_h) {
                _ = el.class_list().add_1(FADE_SHOWN_CLASS);
            }
        }
    }
}

pub fn wire_scroll_reveal(window: &web::Window, reveal: Rc<RefCell<FadeReveal>>) {
    reveal.borrow_mut().check();
    for event in ["scroll", "load"] {
        let reveal = reveal.clone();
        dom::on_event(window, event, move || reveal.borrow_mut().check());
    }
}

pub fn wire_heading_sparkle(headings: &[web::HtmlElement]) {
    for heading in headings {
        let enter = heading.clone();
        dom::on_event(heading, "mouseenter", move || {
            dom::set_style(&enter, "text-shadow", SPARKLE_SHADOW);
        });
        let leave = heading.clone();
        dom::on_event(heading, "mouseleave", move || {
            dom::set_style(&leave, "text-shadow", "");
        });
    }
}

pub fn wire_canvas_resize(window: &web::Window, canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    dom::on_event(window, "resize", move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    });
}

/// Pause the scene when the page is hidden and pick it back up if the
/// browser restores it from its back/forward cache.
pub fn wire_page_lifecycle(window: &web::Window, frame_ctx: Rc<RefCell<FrameContext>>) {
    let hide_ctx = frame_ctx.clone();
    dom::on_page_transition(window, "pagehide", move |ev| {
        hide_ctx.borrow().scene.borrow_mut().stop();
        log::info!("[loop] pagehide persisted={}; stopping", ev.persisted());
    });
    dom::on_page_transition(window, "pageshow", move |ev| {
        if !ev.persisted() {
            return;
        }
        let was_stopped = {
            let ctx = frame_ctx.borrow();
            let mut scene = ctx.scene.borrow_mut();
            let was_stopped = !scene.is_running();
            scene.resume();
            was_stopped
        };
        if was_stopped {
            log::info!("[loop] restored from cache; resuming");
        }
        frame::start_loop(frame_ctx.clone());
    });
}
