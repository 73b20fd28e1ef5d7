use spring_core::{FrameCallback, Scheduler};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `requestAnimationFrame`-backed scheduler. Each request allocates a
/// one-shot closure that JS frees after it runs.
pub struct RafScheduler {
    window: web::Window,
}

impl RafScheduler {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

impl Scheduler for RafScheduler {
    fn request_frame(&self, callback: FrameCallback) {
        let tick = Closure::once_into_js(move |timestamp: f64| callback(timestamp));
        if let Err(e) = self
            .window
            .request_animation_frame(tick.unchecked_ref::<js_sys::Function>())
        {
            log::error!("[raf] request_animation_frame failed: {:?}", e);
        }
    }
}
