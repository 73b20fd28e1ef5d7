use crate::controls::SpringParams;
use crate::error::Result;

/// One axis of a damped spring-mass system.
///
/// Each instance owns the velocity of its axis, so the x and y integrators
/// must only ever be fed their own axis' position, target and delta.
#[derive(Clone, Debug, Default)]
pub struct SpringIntegrator {
    velocity: f64,
}

impl SpringIntegrator {
    pub fn new() -> Self {
        Self { velocity: 0.0 }
    }

    pub fn advance(
        &mut self,
        params: &SpringParams,
        current: f64,
        target: f64,
        dt_ms: f64,
    ) -> Result<f64> {
        params.validate()?;
        let dt = dt_ms / 1000.0;
        let spring_accel = -params.stiffness * (current - target);
        let damping_accel = -params.damping * self.velocity;
        let accel = (spring_accel + damping_accel) / params.mass;
        self.velocity += accel * dt;
        Ok(current + self.velocity * dt)
    }

    #[cfg(test)]
    pub(crate) fn velocity(&self) -> f64 {
        self.velocity
    }
}
