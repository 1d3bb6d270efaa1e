//! Typewriter phrase cycle.
//!
//! [`TypingCycle`] is the bare state machine: each [`TypingCycle::step`]
//! types or deletes one character and returns how long to wait before the
//! next step. [`TypingTicker`] adapts it to a frame loop by spending elapsed
//! time against those waits.

use crate::config::TypingTiming;
use crate::constants::TYPING_MAX_STEPS_PER_FRAME;
use crate::error::{FxError, FxResult};
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct TypingCycle {
    phrases: Vec<String>,
    lengths: Vec<usize>,
    index: usize,
    chars: usize,
    deleting: bool,
    timing: TypingTiming,
}

impl TypingCycle {
    pub fn new(phrases: Vec<String>, timing: TypingTiming) -> FxResult<Self> {
        if phrases.is_empty() {
            return Err(FxError::EmptyPhrases);
        }
        timing.validate()?;
        let lengths = phrases.iter().map(|p| p.chars().count()).collect();
        Ok(Self {
            phrases,
            lengths,
            index: 0,
            chars: 0,
            deleting: false,
            timing,
        })
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    pub fn char_count(&self) -> usize {
        self.chars
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.index]
    }

    /// The visible prefix of the current phrase.
    pub fn text(&self) -> &str {
        let phrase = self.current_phrase();
        match phrase.char_indices().nth(self.chars) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    /// Type or delete one character and return the delay before the next step.
    pub fn step(&mut self) -> Duration {
        let len = self.lengths[self.index];
        if self.deleting {
            self.chars = self.chars.saturating_sub(1);
        } else if self.chars < len {
            self.chars += 1;
        }

        if !self.deleting && self.chars == len {
            self.deleting = true;
            self.timing.pause
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.index = (self.index + 1) % self.phrases.len();
            self.timing.next_phrase_delay
        } else if self.deleting {
            self.timing.delete_interval
        } else {
            self.timing.type_interval
        }
    }
}

/// Drives a [`TypingCycle`] from frame deltas.
#[derive(Clone, Debug)]
pub struct TypingTicker {
    cycle: TypingCycle,
    wait: Duration,
    carry: Duration,
}

impl TypingTicker {
    /// The first step fires on the first call to [`TypingTicker::advance`].
    pub fn new(cycle: TypingCycle) -> Self {
        Self {
            cycle,
            wait: Duration::ZERO,
            carry: Duration::ZERO,
        }
    }

    pub fn cycle(&self) -> &TypingCycle {
        &self.cycle
    }

    pub fn text(&self) -> &str {
        self.cycle.text()
    }

    /// Spend `dt` on pending steps. Returns `true` if at least one step ran.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let mut budget = self.carry + dt;
        let mut steps = 0;
        while budget >= self.wait {
            budget -= self.wait;
            self.wait = self.cycle.step();
            steps += 1;
            if steps >= TYPING_MAX_STEPS_PER_FRAME {
                // Large gaps (backgrounded tab) resume from here instead of replaying.
                budget = Duration::ZERO;
                break;
            }
        }
        self.carry = budget;
        steps > 0
    }
}
