use crate::shape::{Color, Point};

/// Stateless drawing primitives the render loop paints with.
pub trait Renderer {
    fn clear(&mut self);
    fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &Color);
    fn draw_line(&mut self, from: Point, to: Point, color: &Color);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    },
    Line {
        from: Point,
        to: Point,
        color: Color,
    },
}

/// Renderer that only remembers what it was asked to draw.
#[derive(Clone, Debug, Default)]
pub struct CommandRecorder {
    pub commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear))
            .map_or(0, |i| i + 1);
        &self.commands[start..]
    }

    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Renderer for CommandRecorder {
    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &Color) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
            color: *color,
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, color: &Color) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color: *color,
        });
    }
}
