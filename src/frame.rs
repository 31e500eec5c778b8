use crate::core::Scene;
use crate::fx::FxContext;
use crate::render;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const STATS_EVERY_TICKS: u64 = 600;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub fx: Rc<RefCell<FxContext>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState>,
    looping: bool,
}

impl FrameContext {
    /// The 3D layer is installed later, once the GPU is ready.
    pub fn new(
        scene: Rc<RefCell<Scene>>,
        fx: Rc<RefCell<FxContext>>,
        canvas: web::HtmlCanvasElement,
    ) -> Self {
        Self {
            scene,
            fx,
            canvas,
            gpu: None,
            looping: false,
        }
    }

    /// One display refresh: sweep effect lifetimes, animate, draw.
    /// Returns `false` once the scene has been stopped.
    pub fn frame(&mut self) -> bool {
        let now = js_sys::Date::now();
        // Effects run on their own clock, independent of the scene.
        self.fx.borrow_mut().pump();

        let ticks = {
            let mut scene = self.scene.borrow_mut();
            if !scene.tick(now) {
                return false;
            }
            scene
                .camera
                .set_viewport(self.canvas.width(), self.canvas.height());
            scene.ticks()
        };

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(&self.scene.borrow()) {
                log::error!("render error: {:?}", e);
            }
        }

        if ticks % STATS_EVERY_TICKS == 0 {
            let fx = self.fx.borrow();
            log::debug!(
                "[loop] ticks={} pending={} next_in={:?} trail={}",
                ticks,
                fx.pending(),
                fx.next_due_in(),
                fx.live_trail()
            );
        }
        true
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    heart_capacity: usize,
) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, heart_capacity).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("GPU init error (continuing without 3D layer): {:?}", e);
            None
        }
    }
}

/// Drive `frame_ctx` from requestAnimationFrame until it reports a stop.
/// Does nothing if a loop is already running.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    {
        let mut ctx = frame_ctx.borrow_mut();
        if ctx.looping {
            return;
        }
        ctx.looping = true;
    }
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let keep_going = {
            let mut ctx = frame_ctx.borrow_mut();
            let keep_going = ctx.frame();
            if !keep_going {
                ctx.looping = false;
            }
            keep_going
        };
        if !keep_going {
            log::info!("[loop] stopped");
            return;
        }
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
