//! Shared, single-threaded input state.
//!
//! The pointer handler and the parameter inputs write here; the render loop
//! reads a snapshot at the start of every frame. Writes are last-write-wins
//! and become visible on the next frame. Everything is `Rc` + `Cell`, so the
//! types are `!Send` and cannot be shared across threads by accident.

use crate::constants::{DEFAULT_DAMPING, DEFAULT_MASS, DEFAULT_STIFFNESS};
use crate::error::{ensure_finite, ConfigIssue, Result};
use crate::shape::Point;
use std::cell::Cell;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: DEFAULT_STIFFNESS,
            damping: DEFAULT_DAMPING,
            mass: DEFAULT_MASS,
        }
    }
}

impl SpringParams {
    pub fn validate(&self) -> Result<()> {
        ensure_finite("stiffness", self.stiffness)?;
        ensure_finite("damping", self.damping)?;
        validate_mass(self.mass)?;
        Ok(())
    }
}

fn validate_mass(mass: f64) -> Result<f64> {
    ensure_finite("mass", mass)?;
    if mass <= 0.0 {
        return Err(ConfigIssue::NonPositiveMass(mass).into());
    }
    Ok(mass)
}

#[derive(Debug)]
pub struct Controls {
    params: Cell<SpringParams>,
    target: Cell<Point>,
}

impl Controls {
    pub fn new(params: SpringParams, target: Point) -> Result<Self> {
        params.validate()?;
        ensure_finite("target.x", target.x)?;
        ensure_finite("target.y", target.y)?;
        Ok(Self {
            params: Cell::new(params),
            target: Cell::new(target),
        })
    }

    pub fn params(&self) -> SpringParams {
        self.params.get()
    }

    pub fn target(&self) -> Point {
        self.target.get()
    }

    pub fn set_target(&self, x: f64, y: f64) -> Result<()> {
        let x = log_rejection("target", ensure_finite("target.x", x))?;
        let y = log_rejection("target", ensure_finite("target.y", y))?;
        self.target.set(Point::new(x, y));
        Ok(())
    }

    /// Aim so the box of `size` ends up centered on `pointer`.
    pub fn set_target_centered_on(&self, pointer: Point, size: Point) -> Result<()> {
        let top_left = pointer - size * 0.5;
        self.set_target(top_left.x, top_left.y)
    }

    pub fn set_stiffness(&self, value: f64) -> Result<()> {
        let stiffness = log_rejection("stiffness", ensure_finite("stiffness", value))?;
        self.update(|p| p.stiffness = stiffness);
        Ok(())
    }

    pub fn set_damping(&self, value: f64) -> Result<()> {
        let damping = log_rejection("damping", ensure_finite("damping", value))?;
        self.update(|p| p.damping = damping);
        Ok(())
    }

    pub fn set_mass(&self, value: f64) -> Result<()> {
        let mass = log_rejection("mass", validate_mass(value))?;
        self.update(|p| p.mass = mass);
        Ok(())
    }

    pub fn set_params(&self, params: SpringParams) -> Result<()> {
        log_rejection("params", params.validate())?;
        self.params.set(params);
        log::debug!("[controls] params={:?}", params);
        Ok(())
    }

    fn update(&self, apply: impl FnOnce(&mut SpringParams)) {
        let mut params = self.params.get();
        apply(&mut params);
        self.params.set(params);
        log::debug!("[controls] params={:?}", params);
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            params: Cell::new(SpringParams::default()),
            target: Cell::new(Point::ZERO),
        }
    }
}

fn log_rejection<T>(what: &str, result: Result<T>) -> Result<T> {
    if let Err(e) = &result {
        log::warn!("[controls] rejected {}: {}", what, e);
    }
    result
}
