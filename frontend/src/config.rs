use log::Level;

// Typewriter timings, in milliseconds.
pub const DEFAULT_TYPING_SPEED_MS: u32 = 100;
pub const DEFAULT_DELETING_SPEED_MS: u32 = 50;
pub const DEFAULT_DELAY_BETWEEN_WORDS_MS: u32 = 2000;
pub const NEXT_WORD_PAUSE_MS: u32 = 200;
pub const CURSOR_BLINK_MS: u32 = 400;

/// Smallest delay a timer is ever scheduled with. Zero or unset speeds fall
/// back to this so a misconfigured widget can't spin the event loop.
pub const MIN_INTERVAL_MS: u32 = 16;

pub const DEFAULT_COUNT_UP_DURATION_SECS: f64 = 2.0;
pub const STAT_COUNT_UP_DURATION_SECS: f64 = 2.5;

/// Fraction of a stat card that must be on screen before it starts counting.
pub const IN_VIEW_THRESHOLD: f64 = 0.1;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose animation lifecycle logs when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
