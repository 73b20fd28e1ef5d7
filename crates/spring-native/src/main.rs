use std::f64::consts::TAU;
use std::rc::Rc;

use anyhow::bail;
use glam::DVec2;
use instant::Instant;
use spring_core::{
    CommandRecorder, DrawCommand, FrameDriver, ManualScheduler, RenderLoop, SceneConfig,
    SpringParams,
};

// Replay settings
const FRAMES: u32 = 600;
const FRAME_MS: f64 = 1000.0 / 60.0;
const REPORT_EVERY: u32 = 60;

// Synthetic pointer: a slow orbit around the middle of a 400x300 canvas
const ORBIT_CENTER: [f64; 2] = [200.0, 150.0];
const ORBIT_RADIUS: f64 = 100.0;
const ORBIT_TURNS_PER_SEC: f64 = 0.25;

// Switched to halfway through, the way a user would edit the inputs
const LIVELY: SpringParams = SpringParams {
    stiffness: 2.0,
    damping: 1.5,
    mass: 1.0,
};

#[derive(Default)]
struct Tally {
    rects: usize,
    lines: usize,
    clears: usize,
}

impl Tally {
    fn add(&mut self, commands: &[DrawCommand]) {
        for c in commands {
            match c {
                DrawCommand::Clear => self.clears += 1,
                DrawCommand::Rect { .. } => self.rects += 1,
                DrawCommand::Line { .. } => self.lines += 1,
            }
        }
    }
}

fn pointer_at(t_ms: f64) -> DVec2 {
    let angle = t_ms / 1000.0 * ORBIT_TURNS_PER_SEC * TAU;
    DVec2::from_array(ORBIT_CENTER) + ORBIT_RADIUS * DVec2::new(angle.cos(), angle.sin())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let render_loop = RenderLoop::new(SceneConfig::default())?;
    let scheduler = Rc::new(ManualScheduler::new());
    let driver = FrameDriver::new(render_loop, CommandRecorder::new(), Rc::clone(&scheduler));
    let controls = driver.controls();
    let box_size = driver.with_loop(|rl| rl.shape().size());
    log::info!(
        "[native] replaying {} frames, params={:?}",
        FRAMES,
        controls.params()
    );

    let started = Instant::now();
    let mut tally = Tally::default();
    driver.start();
    for frame in 0..FRAMES {
        let t = frame as f64 * FRAME_MS;
        let pointer = pointer_at(t);
        controls.set_target_centered_on(pointer, box_size)?;
        if frame == FRAMES / 2 {
            controls.set_params(LIVELY)?;
            log::info!("[native] frame {}: params -> {:?}", frame, LIVELY);
        }
        if !scheduler.fire(t) {
            bail!("driver stopped before frame {}", frame);
        }
        driver.with_renderer(|r| tally.add(&r.take()));

        if frame % REPORT_EVERY == 0 {
            let (pos, center, trail) =
                driver.with_loop(|rl| (rl.shape().position, rl.shape().center(), rl.trail().len()));
            log::info!(
                "[native] t={:7.1}ms pos=({:6.2},{:6.2}) lag={:6.2} trail={}",
                t,
                pos.x,
                pos.y,
                center.distance(pointer),
                trail
            );
        }
    }
    driver.stop();

    let frames = driver.with_loop(|rl| rl.frames());
    log::info!(
        "[native] done: frames={} clears={} rects={} lines={} wall={:?}",
        frames,
        tally.clears,
        tally.rects,
        tally.lines,
        started.elapsed()
    );
    Ok(())
}
