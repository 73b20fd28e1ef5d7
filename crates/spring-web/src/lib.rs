#![cfg(target_arch = "wasm32")]
use spring_core::{FrameDriver, RenderLoop, SceneConfig};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("spring-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = dom::find_canvas(&document)?;
    let inputs = dom::ParamInputs::find(&document)?;
    let surface = dom::prepare_canvas(&window, &canvas)?;

    let render_loop = RenderLoop::new(SceneConfig::default())?;
    let controls = render_loop.controls();
    let box_size = render_loop.shape().size();
    inputs.apply_initial_values(&controls);

    events::wire_pointer_move(&canvas, controls.clone(), box_size);
    events::wire_param_inputs(&inputs, controls);

    let renderer = render::CanvasRenderer::new(surface);
    let driver = FrameDriver::new(render_loop, renderer, frame::RafScheduler::new(window));
    // the pending animation-frame callback owns the driver state from here on
    driver.start();
    Ok(())
}
