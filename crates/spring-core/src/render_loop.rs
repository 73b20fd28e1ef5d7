use crate::clock::FrameClock;
use crate::config::SceneConfig;
use crate::constants::{MAX_STEP_MS, TRAIL_LIGHTNESS, TRAIL_SATURATION};
use crate::controls::Controls;
use crate::error::Result;
use crate::renderer::Renderer;
use crate::ring::RingBuffer;
use crate::shape::{Color, Shape};
use crate::spring::SpringIntegrator;
use std::rc::Rc;

/// One simulation + paint step per animation frame.
pub struct RenderLoop {
    clock: FrameClock,
    shape: Shape,
    stepper_x: SpringIntegrator,
    stepper_y: SpringIntegrator,
    trail: RingBuffer<Shape>,
    controls: Rc<Controls>,
    line_color: Color,
    frames: u64,
}

impl RenderLoop {
    /// Build a loop whose target starts on the shape itself, so nothing moves
    /// until the pointer does.
    pub fn new(config: SceneConfig) -> Result<Self> {
        config.validate()?;
        let controls = Controls::new(config.params, config.shape.position)?;
        Ok(Self {
            clock: FrameClock::new(),
            shape: config.shape,
            stepper_x: SpringIntegrator::new(),
            stepper_y: SpringIntegrator::new(),
            trail: RingBuffer::new(config.trail_capacity)?,
            controls: Rc::new(controls),
            line_color: config.line_color,
            frames: 0,
        })
    }

    pub fn controls(&self) -> Rc<Controls> {
        Rc::clone(&self.controls)
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn trail(&self) -> &RingBuffer<Shape> {
        &self.trail
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    // params are checked before anything mutates, so an error changes nothing
    pub fn frame<R: Renderer + ?Sized>(&mut self, timestamp: f64, renderer: &mut R) -> Result<()> {
        let params = self.controls.params();
        params.validate()?;
        let target = self.controls.target();
        let dt = self.clock.delta(timestamp);

        renderer.clear();

        // Trail colors follow the slot index, so they are recomputed each frame.
        self.trail.push(self.shape);
        let capacity = self.trail.capacity() as f64;
        self.trail.for_each(|entry, index| {
            let hue = index as f64 * 360.0 / capacity;
            let color = Color::hsl(hue, TRAIL_SATURATION, TRAIL_LIGHTNESS);
            renderer.draw_rect(
                entry.position.x,
                entry.position.y,
                entry.width(),
                entry.height(),
                &color,
            );
        });

        // explicit Euler diverges on long steps; split them to stay stable
        let steps = (dt / MAX_STEP_MS).ceil().max(1.0);
        let step_dt = dt / steps;
        let mut position = self.shape.position;
        for _ in 0..steps as u32 {
            position.x = self.stepper_x.advance(&params, position.x, target.x, step_dt)?;
            position.y = self.stepper_y.advance(&params, position.y, target.y, step_dt)?;
        }
        self.shape.position = position;

        let shape = &self.shape;
        renderer.draw_rect(
            shape.position.x,
            shape.position.y,
            shape.width(),
            shape.height(),
            &shape.color,
        );
        let half = shape.size() * 0.5;
        renderer.draw_line(shape.center(), target + half, &self.line_color);

        self.clock.record(timestamp);
        self.frames += 1;
        log::trace!(
            "[frame] #{} dt={:.2}ms steps={} pos=({:.2},{:.2}) target=({:.2},{:.2})",
            self.frames,
            dt,
            steps,
            position.x,
            position.y,
            target.x,
            target.y
        );
        Ok(())
    }
}
