use crate::constants::{TARGET_LINE_COLOR, TRAIL_CAPACITY};
use crate::controls::SpringParams;
use crate::error::{ConfigIssue, Result};
use crate::shape::{Color, Shape};

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub shape: Shape,
    pub trail_capacity: usize,
    pub line_color: Color,
    pub params: SpringParams,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            shape: Shape::default(),
            trail_capacity: TRAIL_CAPACITY,
            line_color: Color::Named(TARGET_LINE_COLOR),
            params: SpringParams::default(),
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<()> {
        if self.trail_capacity == 0 {
            return Err(ConfigIssue::ZeroCapacity.into());
        }
        self.params.validate()
    }
}
