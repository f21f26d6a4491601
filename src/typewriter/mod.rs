//! Title typewriter - the rotating headline in the hero section.
//!
//! A four-state machine over a phrase list: type one character per tick,
//! hold, delete one per tick, advance to the next phrase and wrap. The
//! displayed text is always a prefix of the current phrase. `TypewriterCore`
//! is pure; the DOM driver lives in `facade` (wasm32 only).

mod config;

#[cfg(target_arch = "wasm32")]
mod facade;

pub use config::{TypewriterOverrides, TypewriterSettings};

#[cfg(target_arch = "wasm32")]
pub use facade::Typewriter;

use crate::rng::{seed_or_default, xorshift32};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Growing the prefix one character per tick
    Typing,
    /// Full phrase shown; the long hold before deletion starts
    Pausing,
    /// Shrinking the prefix one character per tick
    Deleting,
    /// Prefix empty, index already advanced; the short hold before typing
    Advancing,
}

/// Whether the display element should gain or lose its cursor class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    Show,
    Hide,
    Keep,
}

/// One scheduled update: the text to display and when to tick next.
#[derive(Debug, Clone)]
pub struct Tick {
    pub text: String,
    pub delay_ms: u32,
    pub cursor: CursorHint,
}

pub struct TypewriterCore {
    settings: TypewriterSettings,
    index: usize,
    prefix_len: usize,
    phase: Phase,
    rng_state: u32,
}

impl TypewriterCore {
    pub fn new(settings: TypewriterSettings) -> Self {
        Self::with_seed(settings, crate::rng::DEFAULT_SEED)
    }

    pub fn with_seed(settings: TypewriterSettings, seed: u32) -> Self {
        Self {
            settings,
            index: 0,
            prefix_len: 0,
            phase: Phase::Typing,
            rng_state: seed_or_default(seed),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn settings(&self) -> &TypewriterSettings {
        &self.settings
    }

    /// The displayed prefix. Counted in characters, so multi-byte phrases
    /// never split mid-character.
    pub fn current_text(&self) -> String {
        self.current_title().chars().take(self.prefix_len).collect()
    }

    /// Advance the state machine one tick.
    pub fn tick(&mut self) -> Tick {
        match self.phase {
            Phase::Typing | Phase::Advancing => self.type_step(),
            // The pause was the delay before this tick fired; it performs
            // the first deletion.
            Phase::Pausing | Phase::Deleting => self.delete_step(),
        }
    }

    /// Replace the phrase list and restart from the first phrase. An empty
    /// list is rejected and the current animation state is untouched.
    pub fn set_titles(&mut self, titles: Vec<String>) -> Result<(), String> {
        if titles.is_empty() {
            return Err("title list must not be empty".to_string());
        }
        self.settings.titles = titles;
        self.index = 0;
        self.prefix_len = 0;
        self.phase = Phase::Typing;
        Ok(())
    }

    /// Merge a partial settings document. Speeds and delays apply from the
    /// next tick; a titles entry resets the animation like `set_titles`.
    pub fn apply_overrides(&mut self, overrides: &TypewriterOverrides) -> Result<(), String> {
        if let Some(titles) = &overrides.titles {
            self.set_titles(titles.clone())?;
        }
        if let Some(v) = overrides.type_speed_ms {
            self.settings.type_speed_ms = v;
        }
        if let Some(v) = overrides.delete_speed_ms {
            self.settings.delete_speed_ms = v;
        }
        if let Some(v) = overrides.pause_delay_ms {
            self.settings.pause_delay_ms = v;
        }
        if let Some(v) = overrides.next_delay_ms {
            self.settings.next_delay_ms = v;
        }
        if let Some(v) = overrides.type_jitter_ms {
            self.settings.type_jitter_ms = v;
        }
        if let Some(v) = overrides.delete_jitter_ms {
            self.settings.delete_jitter_ms = v;
        }
        Ok(())
    }

    fn current_title(&self) -> &str {
        self.settings
            .titles
            .get(self.index)
            .map(String::as_str)
            .unwrap_or("")
    }

    fn type_step(&mut self) -> Tick {
        self.phase = Phase::Typing;
        let title_len = self.current_title().chars().count();
        if self.prefix_len < title_len {
            self.prefix_len += 1;
        }
        let text = self.current_text();
        if self.prefix_len >= title_len {
            self.phase = Phase::Pausing;
            let cursor = if title_len > 0 {
                CursorHint::Show
            } else {
                CursorHint::Hide
            };
            Tick {
                text,
                delay_ms: self.settings.pause_delay_ms,
                cursor,
            }
        } else {
            let delay_ms = self.settings.type_speed_ms + self.jitter(self.settings.type_jitter_ms);
            Tick {
                text,
                delay_ms,
                cursor: CursorHint::Show,
            }
        }
    }

    fn delete_step(&mut self) -> Tick {
        self.phase = Phase::Deleting;
        if self.prefix_len > 0 {
            self.prefix_len -= 1;
        }
        let text = self.current_text();
        if self.prefix_len == 0 {
            self.phase = Phase::Advancing;
            self.index = (self.index + 1) % self.settings.titles.len().max(1);
            Tick {
                text,
                delay_ms: self.settings.next_delay_ms,
                cursor: CursorHint::Hide,
            }
        } else {
            let delay_ms =
                self.settings.delete_speed_ms + self.jitter(self.settings.delete_jitter_ms);
            Tick {
                text,
                delay_ms,
                cursor: CursorHint::Keep,
            }
        }
    }

    fn jitter(&mut self, range_ms: u32) -> u32 {
        if range_ms == 0 {
            return 0;
        }
        xorshift32(&mut self.rng_state) % range_ms
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
