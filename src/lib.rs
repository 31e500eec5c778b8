#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use crate::core::{Scene, SceneParams};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod fx;
mod panel;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("valentine-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        log::warn!("[init] already started; ignoring");
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let hearts_container = dom::require_element(&document, HEARTS_CONTAINER_ID)?;
    let panel_el = dom::require_element(&document, PANEL_ID)?;
    let confirm = dom::require_element(&document, CONFIRM_ID)?;
    let decline = dom::require_element(&document, DECLINE_ID)?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    events::wire_canvas_resize(&window, &canvas);
    panel::inject_shake_keyframes(&document);

    let params = SceneParams::default();
    let heart_capacity = params.heart_count;
    let scene = Rc::new(RefCell::new(Scene::new(
        params,
        &mut StdRng::from_entropy(),
    )));
    log::info!("[scene] hearts={}", scene.borrow().hearts.len());

    let fx = Rc::new(RefCell::new(fx::FxContext::new(
        document.clone(),
        hearts_container,
        panel_el.clone(),
    )?));

    events::wire_dodge(&decline, &confirm, fx.clone());
    events::wire_confirm(&confirm, fx.clone());
    events::wire_pointer_handlers(events::PointerWiring {
        document: document.clone(),
        scene: scene.clone(),
        fx: fx.clone(),
        panel: panel_el,
        photo_cards: dom::query_all(&document, PHOTO_CARD_SELECTOR),
    });
    let reveal = Rc::new(RefCell::new(events::FadeReveal::new(dom::query_all(
        &document,
        FADE_SELECTOR,
    ))));
    events::wire_scroll_reveal(&window, reveal);
    events::wire_heading_sparkle(&dom::query_all(&document, HEADING_SELECTOR));

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        scene,
        fx,
        canvas.clone(),
    )));
    events::wire_page_lifecycle(&window, frame_ctx.clone());
    frame::start_loop(frame_ctx.clone());

    // The GPU comes up asynchronously; until then the loop runs DOM effects only.
    spawn_local(async move {
        if let Some(gpu) = frame::init_gpu(&canvas, heart_capacity).await {
            frame_ctx.borrow_mut().gpu = Some(gpu);
        }
    });

    Ok(())
}
