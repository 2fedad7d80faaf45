//! Runs the animation state machines on a [`Scheduler`].
//!
//! A driver owns exactly one pending task at a time. Stopping or dropping the
//! driver cancels that task, and every task re-checks `alive` before touching
//! state, so nothing is mutated or emitted after teardown.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, warn};

use super::count_up::{CountUpConfig, CountUpState};
use super::error::AnimationError;
use super::scheduler::{Scheduler, TaskHandle};
use super::typewriter::{Frame, TypewriterConfig, WordCycleState};

pub type Observer<T> = Rc<dyn Fn(T)>;

struct TypewriterInner<S: Scheduler> {
    scheduler: S,
    state: WordCycleState,
    observer: Observer<Frame>,
    pending: Option<S::Handle>,
    alive: bool,
}

pub struct TypewriterDriver<S: Scheduler> {
    inner: Rc<RefCell<TypewriterInner<S>>>,
}

impl<S: Scheduler> TypewriterDriver<S> {
    pub fn start(
        scheduler: S,
        config: &TypewriterConfig,
        observer: Observer<Frame>,
    ) -> Result<Self, AnimationError> {
        let state = WordCycleState::new(config)?;
        let delay = state.initial_delay_ms();
        let inner = Rc::new(RefCell::new(TypewriterInner {
            scheduler,
            state,
            observer,
            pending: None,
            alive: true,
        }));
        debug!("typewriter started with {} words", config.words.len());
        schedule_advance(&inner, delay);
        Ok(Self { inner })
    }

    /// Start over from the first word with a new configuration.
    pub fn restart(&self, config: &TypewriterConfig) -> Result<(), AnimationError> {
        let state = WordCycleState::new(config)?;
        let delay = state.initial_delay_ms();
        let (observer, frame) = {
            let mut inner = self.inner.borrow_mut();
            if let Some(handle) = inner.pending.take() {
                handle.cancel();
            }
            inner.state = state;
            inner.alive = true;
            (inner.observer.clone(), inner.state.frame())
        };
        observer(frame);
        if self.inner.borrow().alive {
            schedule_advance(&self.inner, delay);
        }
        Ok(())
    }

    pub fn stop(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.alive = false;
        if let Some(handle) = inner.pending.take() {
            handle.cancel();
        }
    }

    #[cfg(test)]
    pub fn frame(&self) -> Frame {
        self.inner.borrow().state.frame()
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.inner.borrow().alive
    }
}

impl<S: Scheduler> Drop for TypewriterDriver<S> {
    fn drop(&mut self) {
        debug!("typewriter stopped");
        self.stop();
    }
}

fn schedule_advance<S: Scheduler>(inner: &Rc<RefCell<TypewriterInner<S>>>, delay_ms: u32) {
    let weak: Weak<RefCell<TypewriterInner<S>>> = Rc::downgrade(inner);
    let scheduler = inner.borrow().scheduler.clone();
    let handle = scheduler.after(
        delay_ms,
        Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                advance(&inner);
            }
        }),
    );
    inner.borrow_mut().pending = Some(handle);
}

fn advance<S: Scheduler>(inner: &Rc<RefCell<TypewriterInner<S>>>) {
    let (step, frame, observer) = {
        let mut guard = inner.borrow_mut();
        if !guard.alive {
            return;
        }
        let step = guard.state.advance();
        (step, guard.state.frame(), guard.observer.clone())
    };

    // No borrow held: the observer may stop the driver.
    if step.changed {
        observer(frame);
    }
    if inner.borrow().alive {
        schedule_advance(inner, step.next_delay_ms);
    }
}

struct CountUpInner<S: Scheduler> {
    scheduler: S,
    config: CountUpConfig,
    state: CountUpState,
    observer: Observer<String>,
    pending: Option<S::Handle>,
    alive: bool,
}

pub struct CountUpDriver<S: Scheduler> {
    inner: Rc<RefCell<CountUpInner<S>>>,
}

impl<S: Scheduler> CountUpDriver<S> {
    pub fn start(
        scheduler: S,
        config: &CountUpConfig,
        observer: Observer<String>,
    ) -> Result<Self, AnimationError> {
        let state = CountUpState::new(config, scheduler.now())?;
        let inner = Rc::new(RefCell::new(CountUpInner {
            scheduler,
            config: config.clone(),
            state,
            observer,
            pending: None,
            alive: true,
        }));
        debug!("count-up started: {} -> {}", config.start, config.end);
        request_tick(&inner);
        Ok(Self { inner })
    }

    /// Reset the start timestamp and count again from the new `start`.
    pub fn restart(&self, config: &CountUpConfig) -> Result<(), AnimationError> {
        let (observer, text) = {
            let mut inner = self.inner.borrow_mut();
            let state = CountUpState::new(config, inner.scheduler.now())?;
            if let Some(handle) = inner.pending.take() {
                handle.cancel();
            }
            inner.reset(config.clone(), state);
            (inner.observer.clone(), inner.config.format(inner.state.value()))
        };
        observer(text);
        if self.inner.borrow().alive {
            request_tick(&self.inner);
        }
        Ok(())
    }

    pub fn stop(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.alive = false;
        if let Some(handle) = inner.pending.take() {
            handle.cancel();
        }
    }

    #[cfg(test)]
    pub fn text(&self) -> String {
        let inner = self.inner.borrow();
        inner.config.format(inner.state.value())
    }

    #[cfg(test)]
    pub fn is_finished(&self) -> bool {
        self.inner.borrow().state.is_finished()
    }
}

impl<S: Scheduler> CountUpInner<S> {
    fn reset(&mut self, config: CountUpConfig, state: CountUpState) {
        self.config = config;
        self.state = state;
        self.alive = true;
    }
}

impl<S: Scheduler> Drop for CountUpDriver<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_tick<S: Scheduler>(inner: &Rc<RefCell<CountUpInner<S>>>) {
    let weak: Weak<RefCell<CountUpInner<S>>> = Rc::downgrade(inner);
    let scheduler = inner.borrow().scheduler.clone();
    let requested = scheduler.next_frame(Box::new(move |timestamp| {
        if let Some(inner) = weak.upgrade() {
            tick(&inner, timestamp);
        }
    }));

    match requested {
        Ok(handle) => inner.borrow_mut().pending = Some(handle),
        Err(err) => {
            warn!("count-up can't animate, showing final value: {}", err);
            let (changed, observer, text) = {
                let mut guard = inner.borrow_mut();
                if !guard.alive {
                    return;
                }
                let changed = guard.state.finish().is_some();
                (changed, guard.observer.clone(), guard.config.format(guard.state.value()))
            };
            if changed {
                observer(text);
            }
        }
    }
}

fn tick<S: Scheduler>(inner: &Rc<RefCell<CountUpInner<S>>>, timestamp: f64) {
    let (outcome, observer, text) = {
        let mut guard = inner.borrow_mut();
        if !guard.alive {
            return;
        }
        let outcome = guard.state.tick(timestamp);
        let text = outcome.value.map(|value| guard.config.format(value));
        (outcome, guard.observer.clone(), text)
    };

    if let Some(text) = text {
        observer(text);
    }
    if outcome.finished {
        debug!("count-up finished");
        inner.borrow_mut().pending = None;
    } else if inner.borrow().alive {
        request_tick(inner);
    }
}
