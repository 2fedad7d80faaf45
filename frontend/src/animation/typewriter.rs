//! Word-cycling typewriter: types a word one character at a time, holds it,
//! deletes it, pauses with the text hidden, then moves on to the next word.

use crate::config::{
    CURSOR_BLINK_MS, DEFAULT_DELAY_BETWEEN_WORDS_MS, DEFAULT_DELETING_SPEED_MS,
    DEFAULT_TYPING_SPEED_MS, MIN_INTERVAL_MS, NEXT_WORD_PAUSE_MS,
};

use super::error::AnimationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    PausedFull,
    Deleting,
    PausedEmpty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypewriterConfig {
    pub words: Vec<String>,
    pub typing_speed_ms: u32,
    pub deleting_speed_ms: u32,
    pub delay_between_words_ms: u32,
    pub next_word_pause_ms: u32,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            words: Vec::new(),
            typing_speed_ms: DEFAULT_TYPING_SPEED_MS,
            deleting_speed_ms: DEFAULT_DELETING_SPEED_MS,
            delay_between_words_ms: DEFAULT_DELAY_BETWEEN_WORDS_MS,
            next_word_pause_ms: NEXT_WORD_PAUSE_MS,
        }
    }
}

impl TypewriterConfig {
    pub fn new<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn typing_speed(mut self, ms: u32) -> Self {
        self.typing_speed_ms = ms;
        self
    }

    pub fn deleting_speed(mut self, ms: u32) -> Self {
        self.deleting_speed_ms = ms;
        self
    }

    pub fn delay_between_words(mut self, ms: u32) -> Self {
        self.delay_between_words_ms = ms;
        self
    }

    pub fn next_word_pause(mut self, ms: u32) -> Self {
        self.next_word_pause_ms = ms;
        self
    }
}

/// Delays with zeros replaced by [`MIN_INTERVAL_MS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Timing {
    typing: u32,
    deleting: u32,
    hold_full: u32,
    hold_empty: u32,
}

impl Timing {
    fn from_config(config: &TypewriterConfig) -> Self {
        let floor = |ms: u32| ms.max(MIN_INTERVAL_MS);
        Self {
            typing: floor(config.typing_speed_ms),
            deleting: floor(config.deleting_speed_ms),
            hold_full: floor(config.delay_between_words_ms),
            hold_empty: floor(config.next_word_pause_ms),
        }
    }
}

/// What the rendering side needs to draw the typewriter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub visible: bool,
    pub word_index: usize,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            text: String::new(),
            visible: true,
            word_index: 0,
        }
    }
}

/// Outcome of a single [`WordCycleState::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Whether the frame (text or visibility) differs from before the step.
    pub changed: bool,
    /// How long to wait before the next `advance`.
    pub next_delay_ms: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WordCycleState {
    words: Vec<String>,
    timing: Timing,
    current_index: usize,
    // counted in chars, not bytes
    displayed_len: usize,
    phase: Phase,
}

impl WordCycleState {
    pub fn new(config: &TypewriterConfig) -> Result<Self, AnimationError> {
        if config.words.is_empty() {
            return Err(AnimationError::EmptyWords);
        }
        Ok(Self {
            words: config.words.clone(),
            timing: Timing::from_config(config),
            current_index: 0,
            displayed_len: 0,
            phase: Phase::Typing,
        })
    }

    pub fn reset(&mut self) {
        self.current_index = 0;
        self.displayed_len = 0;
        self.phase = Phase::Typing;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_word(&self) -> &str {
        &self.words[self.current_index]
    }

    pub fn displayed_text(&self) -> &str {
        let word = self.current_word();
        match word.char_indices().nth(self.displayed_len) {
            Some((end, _)) => &word[..end],
            None => word,
        }
    }

    /// The text is hidden between finishing a deletion and starting the next word.
    pub fn is_visible(&self) -> bool {
        self.phase != Phase::PausedEmpty
    }

    /// Delay before the first `advance` after creation or `reset`.
    pub fn initial_delay_ms(&self) -> u32 {
        self.timing.typing
    }

    pub fn frame(&self) -> Frame {
        Frame {
            text: self.displayed_text().to_string(),
            visible: self.is_visible(),
            word_index: self.current_index,
        }
    }

    pub fn advance(&mut self) -> Step {
        let word_len = self.current_word().chars().count();
        match self.phase {
            Phase::Typing => {
                let typed = self.displayed_len < word_len;
                if typed {
                    self.displayed_len += 1;
                }
                if self.displayed_len == word_len {
                    self.phase = Phase::PausedFull;
                    Step { changed: typed, next_delay_ms: self.timing.hold_full }
                } else {
                    Step { changed: typed, next_delay_ms: self.timing.typing }
                }
            }
            Phase::PausedFull => {
                self.phase = Phase::Deleting;
                Step { changed: false, next_delay_ms: self.timing.deleting }
            }
            Phase::Deleting => {
                if self.displayed_len > 0 {
                    self.displayed_len -= 1;
                }
                if self.displayed_len == 0 {
                    // Hiding counts as a change even for an empty word.
                    self.phase = Phase::PausedEmpty;
                    Step { changed: true, next_delay_ms: self.timing.hold_empty }
                } else {
                    Step { changed: true, next_delay_ms: self.timing.deleting }
                }
            }
            Phase::PausedEmpty => {
                self.current_index = (self.current_index + 1) % self.words.len();
                self.phase = Phase::Typing;
                Step { changed: true, next_delay_ms: self.timing.typing }
            }
        }
    }

    /// Every distinct frame from the current state onwards, forever. This is
    /// the same sequence a `TypewriterDriver` emits, without the timers.
    pub fn frames(&self) -> Frames {
        Frames { state: self.clone() }
    }
}

/// Infinite iterator over the frames a [`WordCycleState`] goes through,
/// paired with how long each one stays on screen.
#[derive(Debug, Clone)]
pub struct Frames {
    state: WordCycleState,
}

impl Iterator for Frames {
    type Item = (Frame, u32);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let step = self.state.advance();
            if step.changed {
                let mut hold = step.next_delay_ms;
                // Fold silent steps (PausedFull -> Deleting) into the hold time.
                let mut peek = self.state.clone();
                loop {
                    let silent = peek.clone().advance();
                    if silent.changed {
                        break;
                    }
                    peek.advance();
                    hold += silent.next_delay_ms;
                }
                return Some((self.state.frame(), hold));
            }
        }
    }
}

/// Blinking cursor, toggled on its own fixed period regardless of phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorBlink {
    visible: bool,
}

impl Default for CursorBlink {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl CursorBlink {
    pub const PERIOD_MS: u32 = CURSOR_BLINK_MS;

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }
}
