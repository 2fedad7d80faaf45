//! Frame-driven count-up from `start` to `end`.

use crate::config::DEFAULT_COUNT_UP_DURATION_SECS;

use super::error::AnimationError;

#[derive(Debug, Clone, PartialEq)]
pub struct CountUpConfig {
    pub start: f64,
    pub end: f64,
    pub duration_secs: f64,
    pub prefix: String,
    pub suffix: String,
}

impl Default for CountUpConfig {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: 100.0,
            duration_secs: DEFAULT_COUNT_UP_DURATION_SECS,
            prefix: String::new(),
            suffix: String::new(),
        }
    }
}

impl CountUpConfig {
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            ..Self::default()
        }
    }

    pub fn duration(mut self, secs: f64) -> Self {
        self.duration_secs = secs;
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Value shown before the first frame runs.
    pub fn initial_value(&self) -> i64 {
        if self.start.is_finite() {
            self.start.floor() as i64
        } else {
            0
        }
    }

    pub fn format(&self, value: i64) -> String {
        format!("{}{}{}", self.prefix, value, self.suffix)
    }
}

/// Result of one [`CountUpState::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Set only when the displayed value changed on this tick.
    pub value: Option<i64>,
    pub finished: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CountUpState {
    start: f64,
    end: f64,
    duration_ms: f64,
    start_timestamp: f64,
    last_value: i64,
    finished: bool,
}

impl CountUpState {
    pub fn new(config: &CountUpConfig, now: f64) -> Result<Self, AnimationError> {
        for bound in [config.start, config.end] {
            if !bound.is_finite() {
                return Err(AnimationError::NonFiniteBound(bound));
            }
        }
        Ok(Self {
            start: config.start,
            end: config.end,
            duration_ms: config.duration_secs * 1000.0,
            start_timestamp: now,
            last_value: config.initial_value(),
            finished: false,
        })
    }

    pub fn value(&self) -> i64 {
        self.last_value
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Progress in `[0, 1]`. A zero, negative or NaN duration is already done.
    pub fn fraction(&self, now: f64) -> f64 {
        if !(self.duration_ms > 0.0) || !self.duration_ms.is_finite() {
            return 1.0;
        }
        ((now - self.start_timestamp) / self.duration_ms).clamp(0.0, 1.0)
    }

    fn value_at(&self, fraction: f64) -> i64 {
        if fraction >= 1.0 {
            // start + (end - start) can miss `end` by an ulp
            self.end.floor() as i64
        } else {
            (self.start + fraction * (self.end - self.start)).floor() as i64
        }
    }

    pub fn tick(&mut self, now: f64) -> TickOutcome {
        if self.finished {
            return TickOutcome { value: None, finished: true };
        }
        let fraction = self.fraction(now);
        let value = self.value_at(fraction);
        self.finished = fraction >= 1.0;

        let changed = value != self.last_value;
        self.last_value = value;
        TickOutcome {
            value: changed.then_some(value),
            finished: self.finished,
        }
    }

    /// Jump straight to `end`; returns the value if it changed.
    pub fn finish(&mut self) -> Option<i64> {
        self.finished = true;
        let value = self.value_at(1.0);
        let changed = value != self.last_value;
        self.last_value = value;
        changed.then_some(value)
    }
}
