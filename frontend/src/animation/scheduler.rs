use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

use super::error::AnimationError;

/// A pending timer or frame callback. Dropping the handle cancels the task as
/// well, so whoever owns the handle owns the callback's lifetime.
pub trait TaskHandle {
    fn cancel(self);
}

/// Single-threaded cooperative scheduler the animation drivers run on.
///
/// Timestamps are milliseconds on one monotonic timeline: `now()` and the
/// value passed to frame callbacks must be comparable.
pub trait Scheduler: Clone + 'static {
    type Handle: TaskHandle + 'static;

    fn now(&self) -> f64;

    /// Run `task` once after `delay_ms`.
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;

    /// Run `task` on the next display refresh with the frame timestamp.
    fn next_frame(&self, task: Box<dyn FnOnce(f64)>) -> Result<Self::Handle, AnimationError>;
}

/// Scheduler backed by the browser event loop.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserScheduler;

pub enum BrowserHandle {
    Timeout(Timeout),
    Frame(AnimationFrame),
}

impl TaskHandle for BrowserHandle {
    fn cancel(self) {
        // Timeout clears itself on drop, AnimationFrame cancels in Drop below
        drop(self);
    }
}

/// A requested animation frame. Keeps the JS closure alive until the frame
/// fires or the handle is dropped.
pub struct AnimationFrame {
    id: i32,
    _closure: Closure<dyn FnMut(f64)>,
}

impl Drop for AnimationFrame {
    fn drop(&mut self) {
        if let Some(window) = window() {
            let _ = window.cancel_animation_frame(self.id);
        }
    }
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserHandle;

    fn now(&self) -> f64 {
        window()
            .and_then(|window| window.performance())
            .map(|performance| performance.now())
            .unwrap_or(0.0)
    }

    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> BrowserHandle {
        BrowserHandle::Timeout(Timeout::new(delay_ms, move || task()))
    }

    fn next_frame(&self, task: Box<dyn FnOnce(f64)>) -> Result<BrowserHandle, AnimationError> {
        let window = window().ok_or(AnimationError::NoWindow)?;
        let closure: Closure<dyn FnMut(f64)> = Closure::once(move |timestamp: f64| task(timestamp));
        let id = window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .map_err(|err| AnimationError::FrameRequest(format!("{:?}", err)))?;

        Ok(BrowserHandle::Frame(AnimationFrame { id, _closure: closure }))
    }
}
