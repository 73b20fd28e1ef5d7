use crate::controls::Controls;
use crate::render_loop::RenderLoop;
use crate::renderer::Renderer;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// Arranges for `callback` to run once at the next display refresh with the
/// frame timestamp in milliseconds (`requestAnimationFrame` on the web).
pub trait Scheduler {
    fn request_frame(&self, callback: FrameCallback);
}

impl<S: Scheduler + ?Sized> Scheduler for Rc<S> {
    fn request_frame(&self, callback: FrameCallback) {
        (**self).request_frame(callback);
    }
}

#[derive(Default)]
pub struct ManualScheduler {
    pending: RefCell<VecDeque<FrameCallback>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn fire(&self, timestamp: f64) -> bool {
        let next = self.pending.borrow_mut().pop_front();
        match next {
            Some(callback) => {
                callback(timestamp);
                true
            }
            None => false,
        }
    }
}

impl Scheduler for ManualScheduler {
    fn request_frame(&self, callback: FrameCallback) {
        self.pending.borrow_mut().push_back(callback);
    }
}

struct DriverState<R, S> {
    render_loop: RefCell<RenderLoop>,
    renderer: RefCell<R>,
    scheduler: S,
    running: Cell<bool>,
    // bumped on start/stop so callbacks from an earlier run are ignored
    generation: Cell<u64>,
}

/// Runs a [`RenderLoop`] once per scheduled frame until stopped.
pub struct FrameDriver<R, S> {
    state: Rc<DriverState<R, S>>,
}

impl<R, S> FrameDriver<R, S>
where
    R: Renderer + 'static,
    S: Scheduler + 'static,
{
    pub fn new(render_loop: RenderLoop, renderer: R, scheduler: S) -> Self {
        Self {
            state: Rc::new(DriverState {
                render_loop: RefCell::new(render_loop),
                renderer: RefCell::new(renderer),
                scheduler,
                running: Cell::new(false),
                generation: Cell::new(0),
            }),
        }
    }

    pub fn start(&self) {
        if self.state.running.replace(true) {
            log::warn!("[driver] already running; ignoring start");
            return;
        }
        self.state.generation.set(self.state.generation.get() + 1);
        log::info!("[driver] started");
        request_next(&self.state);
    }

    pub fn stop(&self) {
        if self.state.running.replace(false) {
            self.state.generation.set(self.state.generation.get() + 1);
            log::info!("[driver] stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }

    pub fn controls(&self) -> Rc<Controls> {
        self.state.render_loop.borrow().controls()
    }

    pub fn scheduler(&self) -> &S {
        &self.state.scheduler
    }

    pub fn with_loop<T>(&self, f: impl FnOnce(&RenderLoop) -> T) -> T {
        f(&*self.state.render_loop.borrow())
    }

    pub fn with_renderer<T>(&self, f: impl FnOnce(&mut R) -> T) -> T {
        f(&mut *self.state.renderer.borrow_mut())
    }
}

fn request_next<R, S>(state: &Rc<DriverState<R, S>>)
where
    R: Renderer + 'static,
    S: Scheduler + 'static,
{
    let next = Rc::clone(state);
    let generation = state.generation.get();
    state
        .scheduler
        .request_frame(Box::new(move |timestamp| on_frame(next, generation, timestamp)));
}

fn on_frame<R, S>(state: Rc<DriverState<R, S>>, generation: u64, timestamp: f64)
where
    R: Renderer + 'static,
    S: Scheduler + 'static,
{
    if !state.running.get() || state.generation.get() != generation {
        return;
    }
    let result = {
        let mut render_loop = state.render_loop.borrow_mut();
        let mut renderer = state.renderer.borrow_mut();
        render_loop.frame(timestamp, &mut *renderer)
    };
    if let Err(e) = result {
        log::error!("[driver] frame failed, stopping: {}", e);
        state.running.set(false);
        return;
    }
    request_next(&state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SceneConfig;
    use crate::renderer::CommandRecorder;

    fn driver() -> FrameDriver<CommandRecorder, Rc<ManualScheduler>> {
        let rl = RenderLoop::new(SceneConfig::default()).unwrap();
        FrameDriver::new(rl, CommandRecorder::new(), Rc::new(ManualScheduler::new()))
    }

    #[test]
    fn each_frame_requests_exactly_one_more() {
        let d = driver();
        assert_eq!(d.scheduler().pending(), 0);
        d.start();
        for i in 0..5 {
            assert_eq!(d.scheduler().pending(), 1);
            assert!(d.scheduler().fire(i as f64 * 16.0));
        }
        assert_eq!(d.with_loop(|rl| rl.frames()), 5);
    }

    #[test]
    fn stop_turns_pending_frame_into_noop() {
        let d = driver();
        d.start();
        d.scheduler().fire(0.0);
        d.stop();
        assert!(d.scheduler().fire(16.0));
        assert_eq!(d.scheduler().pending(), 0);
        assert_eq!(d.with_loop(|rl| rl.frames()), 1);
    }

    #[test]
    fn restart_does_not_double_schedule() {
        let d = driver();
        d.start();
        d.stop();
        d.start();
        assert_eq!(d.scheduler().pending(), 2);
        d.scheduler().fire(0.0); // stale
        d.scheduler().fire(0.0);
        assert_eq!(d.with_loop(|rl| rl.frames()), 1);
        assert_eq!(d.scheduler().pending(), 1);
    }

    #[test]
    fn double_start_is_ignored() {
        let d = driver();
        d.start();
        d.start();
        assert_eq!(d.scheduler().pending(), 1);
    }
}
