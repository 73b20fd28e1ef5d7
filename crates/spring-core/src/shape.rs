use crate::constants::{SHAPE_COLOR, SHAPE_SIZE, SHAPE_START};
use crate::error::{ConfigIssue, Result};
use std::fmt;

pub type Point = glam::DVec2;

/// Opaque color token handed to the renderer. `Display` yields the CSS form.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Named(&'static str),
    Hsl {
        hue: f64,
        saturation: f64,
        lightness: f64,
    },
}

impl Color {
    pub fn hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        Color::Hsl {
            hue,
            saturation,
            lightness,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(name) => f.write_str(name),
            Color::Hsl {
                hue,
                saturation,
                lightness,
            } => write!(f, "hsl({}, {}%, {}%)", hue, saturation, lightness),
        }
    }
}

/// The moving box. Size is fixed at creation; only the position moves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shape {
    pub position: Point,
    size: Point,
    pub color: Color,
}

impl Shape {
    pub fn new(position: Point, width: f64, height: f64, color: Color) -> Result<Self> {
        let ok = |v: f64| v.is_finite() && v >= 0.0;
        if !ok(width) || !ok(height) {
            return Err(ConfigIssue::BadShapeSize { width, height }.into());
        }
        Ok(Self {
            position,
            size: Point::new(width, height),
            color,
        })
    }

    pub fn size(&self) -> Point {
        self.size
    }

    pub fn width(&self) -> f64 {
        self.size.x
    }

    pub fn height(&self) -> f64 {
        self.size.y
    }

    pub fn center(&self) -> Point {
        self.position + self.size * 0.5
    }
}

impl Default for Shape {
    fn default() -> Self {
        Self {
            position: Point::from_array(SHAPE_START),
            size: Point::from_array(SHAPE_SIZE),
            color: Color::Named(SHAPE_COLOR),
        }
    }
}
