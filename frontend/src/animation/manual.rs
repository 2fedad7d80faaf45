//! Deterministic scheduler for driving animations in tests.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::error::AnimationError;
use super::scheduler::{Scheduler, TaskHandle};

#[derive(Default)]
struct Queue {
    now: f64,
    next_id: u64,
    timers: Vec<Timer>,
    frames: Vec<(u64, Box<dyn FnOnce(f64)>)>,
    fail_frames: bool,
}

struct Timer {
    id: u64,
    due: f64,
    task: Box<dyn FnOnce()>,
}

impl Queue {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn remove(&mut self, id: u64) {
        self.timers.retain(|timer| timer.id != id);
        self.frames.retain(|(frame_id, _)| *frame_id != id);
    }

    /// Earliest timer due at or before `deadline`, ties broken by schedule order.
    fn pop_due(&mut self, deadline: f64) -> Option<Timer> {
        let position = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due <= deadline)
            .min_by(|(_, a), (_, b)| a.due.total_cmp(&b.due).then(a.id.cmp(&b.id)))
            .map(|(position, _)| position)?;
        Some(self.timers.remove(position))
    }
}

#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<Queue>>,
}

pub struct ManualHandle {
    id: u64,
    queue: Weak<RefCell<Queue>>,
}

impl TaskHandle for ManualHandle {
    fn cancel(self) {}
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        if let Some(queue) = self.queue.upgrade() {
            queue.borrow_mut().remove(self.id);
        }
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward, firing every timer that comes due on the way.
    /// Tasks scheduled by a firing task are picked up in the same call.
    pub fn advance(&self, ms: f64) {
        let deadline = self.queue.borrow().now + ms;
        loop {
            // Release the borrow before running: tasks schedule and cancel.
            let timer = self.queue.borrow_mut().pop_due(deadline);
            let Some(timer) = timer else { break };
            self.queue.borrow_mut().now = timer.due;
            (timer.task)();
        }
        self.queue.borrow_mut().now = deadline;
    }

    /// Fire the frame callbacks queued so far at `timestamp`. Frames requested
    /// while these run wait for the next call.
    pub fn run_frame(&self, timestamp: f64) {
        let frames = {
            let mut queue = self.queue.borrow_mut();
            queue.now = timestamp;
            std::mem::take(&mut queue.frames)
        };
        for (_, task) in frames {
            task(timestamp);
        }
    }

    pub fn pending_timers(&self) -> usize {
        self.queue.borrow().timers.len()
    }

    pub fn pending_frames(&self) -> usize {
        self.queue.borrow().frames.len()
    }

    pub fn fail_frames(&self, fail: bool) {
        self.queue.borrow_mut().fail_frames = fail;
    }

    fn handle(&self, id: u64) -> ManualHandle {
        ManualHandle {
            id,
            queue: Rc::downgrade(&self.queue),
        }
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn now(&self) -> f64 {
        self.queue.borrow().now
    }

    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
        let id = {
            let mut queue = self.queue.borrow_mut();
            let id = queue.next_id();
            let due = queue.now + f64::from(delay_ms);
            queue.timers.push(Timer { id, due, task });
            id
        };
        self.handle(id)
    }

    fn next_frame(&self, task: Box<dyn FnOnce(f64)>) -> Result<ManualHandle, AnimationError> {
        let id = {
            let mut queue = self.queue.borrow_mut();
            if queue.fail_frames {
                return Err(AnimationError::FrameRequest("frames disabled".to_string()));
            }
            let id = queue.next_id();
            queue.frames.push((id, task));
            id
        };
        Ok(self.handle(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn timers_fire_in_due_order() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(RefCell::new(Vec::new()));

        let log = fired.clone();
        let _late = scheduler.after(30, Box::new(move || log.borrow_mut().push("late")));
        let log = fired.clone();
        let _early = scheduler.after(10, Box::new(move || log.borrow_mut().push("early")));

        scheduler.advance(20.0);
        assert_eq!(*fired.borrow(), vec!["early"]);
        scheduler.advance(20.0);
        assert_eq!(*fired.borrow(), vec!["early", "late"]);
        assert_eq!(scheduler.now(), 40.0);
    }

    #[test]
    fn dropped_handle_never_fires() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(false));

        let flag = fired.clone();
        let handle = scheduler.after(5, Box::new(move || flag.set(true)));
        handle.cancel();

        scheduler.advance(100.0);
        assert!(!fired.get());
        assert_eq!(scheduler.pending_timers(), 0);
    }

    #[test]
    fn frames_requested_during_a_frame_wait_for_the_next() {
        let scheduler = ManualScheduler::new();
        let stamps = Rc::new(RefCell::new(Vec::new()));
        let keep = Rc::new(RefCell::new(Vec::new()));

        let inner_scheduler = scheduler.clone();
        let inner_stamps = stamps.clone();
        let inner_keep = keep.clone();
        let handle = scheduler
            .next_frame(Box::new(move |ts| {
                inner_stamps.borrow_mut().push(ts);
                let stamps = inner_stamps.clone();
                let next = inner_scheduler
                    .next_frame(Box::new(move |ts| stamps.borrow_mut().push(ts)))
                    .unwrap();
                inner_keep.borrow_mut().push(next);
            }))
            .unwrap();

        scheduler.run_frame(16.0);
        assert_eq!(*stamps.borrow(), vec![16.0]);
        assert_eq!(scheduler.pending_frames(), 1);

        scheduler.run_frame(32.0);
        assert_eq!(*stamps.borrow(), vec![16.0, 32.0]);
        drop(handle);
    }
}
