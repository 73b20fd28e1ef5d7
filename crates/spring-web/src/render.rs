use crate::dom::Surface;
use spring_core::{Color, Point, Renderer};

pub struct CanvasRenderer {
    surface: Surface,
}

impl CanvasRenderer {
    pub fn new(surface: Surface) -> Self {
        Self { surface }
    }
}

impl Renderer for CanvasRenderer {
    fn clear(&mut self) {
        let s = &self.surface;
        s.ctx.clear_rect(0.0, 0.0, s.width, s.height);
    }

    fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &Color) {
        let ctx = &self.surface.ctx;
        ctx.set_fill_style_str(&color.to_string());
        ctx.fill_rect(x, y, width, height);
    }

    fn draw_line(&mut self, from: Point, to: Point, color: &Color) {
        let ctx = &self.surface.ctx;
        ctx.begin_path();
        ctx.move_to(from.x, from.y);
        ctx.line_to(to.x, to.y);
        ctx.set_stroke_style_str(&color.to_string());
        ctx.stroke();
    }
}
