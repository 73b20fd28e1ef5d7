use crate::input::ParamField;
use spring_core::Controls;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn find_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .query_selector("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("missing <canvas>"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

fn find_input(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlInputElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlInputElement>()
        .map_err(|_| anyhow::anyhow!("#{} is not an <input>", id))
}

/// The three parameter inputs, in `ParamField::ALL` order.
pub struct ParamInputs {
    pub fields: Vec<(ParamField, web::HtmlInputElement)>,
}

impl ParamInputs {
    pub fn find(document: &web::Document) -> anyhow::Result<Self> {
        let fields = ParamField::ALL
            .iter()
            .map(|&field| find_input(document, field.element_id()).map(|el| (field, el)))
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(Self { fields })
    }

    pub fn apply_initial_values(&self, controls: &Controls) {
        for (field, el) in &self.fields {
            field.apply_text(controls, &el.value());
        }
    }
}

/// A 2D context whose backing store is scaled to the device pixel ratio.
/// `width`/`height` are the CSS (logical) size drawing happens in.
pub struct Surface {
    pub ctx: web::CanvasRenderingContext2d,
    pub width: f64,
    pub height: f64,
}

pub fn prepare_canvas(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<Surface> {
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("canvas 2d not supported"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let dpr = window.device_pixel_ratio().max(1.0);
    canvas.set_width((width * dpr) as u32);
    canvas.set_height((height * dpr) as u32);
    let style = canvas.style();
    style
        .set_property("width", &format!("{}px", width))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    style
        .set_property("height", &format!("{}px", height))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    ctx.scale(dpr, dpr).map_err(|e| anyhow::anyhow!("{:?}", e))?;
    log::info!("[canvas] {}x{} css px at dpr {:.2}", width, height, dpr);

    Ok(Surface { ctx, width, height })
}
