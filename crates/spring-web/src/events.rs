use crate::dom::ParamInputs;
use spring_core::{Controls, Point};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer_move(canvas: &web::HtmlCanvasElement, controls: Rc<Controls>, box_size: Point) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pointer = Point::new(ev.offset_x() as f64, ev.offset_y() as f64);
        // rejected targets are logged by Controls and the previous one kept
        _ = controls.set_target_centered_on(pointer, box_size);
    }) as Box<dyn FnMut(web::PointerEvent)>);
    if let Err(e) =
        canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref())
    {
        log::error!("[events] pointermove listener failed: {:?}", e);
    }
    closure.forget();
}

pub fn wire_param_inputs(inputs: &ParamInputs, controls: Rc<Controls>) {
    for (field, el) in &inputs.fields {
        let field = *field;
        let el_read = el.clone();
        let controls = controls.clone();
        let closure = Closure::wrap(Box::new(move || {
            field.apply_text(&controls, &el_read.value());
        }) as Box<dyn FnMut()>);
        if let Err(e) = el.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref()) {
            log::error!("[events] change listener for #{} failed: {:?}", field.element_id(), e);
        }
        closure.forget();
    }
}
