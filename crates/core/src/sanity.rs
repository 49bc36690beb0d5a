//! Sanity resource and the perception effects it gates.
//! This module exists to keep costs, silence decay and effect thresholds together.
//! It does not own spawning hallucinations or choosing whisper text.

use crate::consts::*;

/// Coarse reading of the current sanity value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SanityBand {
    Stable,
    Uneasy,
    Critical,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sanity {
    value: f32,
    silence_ticks: u32,
}

impl Default for Sanity {
    fn default() -> Self {
        Self::new(SANITY_MAX)
    }
}

impl Sanity {
    pub fn new(value: f32) -> Self {
        Self { value: value.clamp(0.0, SANITY_MAX), silence_ticks: 0 }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn silence_ticks(&self) -> u32 {
        self.silence_ticks
    }

    /// Applies `delta` and clamps to `[0, SANITY_MAX]`.
    pub fn adjust(&mut self, delta: f32) {
        self.value = (self.value + delta).clamp(0.0, SANITY_MAX);
    }

    /// A footstep or clap: pays `cost` and breaks the silence.
    pub fn record_action(&mut self, cost: f32) {
        self.adjust(-cost);
        self.silence_ticks = 0;
    }

    /// Advances the silence counter. Returns true when a silence penalty was paid.
    pub fn tick_silence(&mut self) -> bool {
        self.silence_ticks += 1;
        if self.silence_ticks < SILENCE_PERIOD_TICKS {
            return false;
        }
        self.adjust(-SILENCE_SANITY_COST);
        self.silence_ticks = 0;
        true
    }

    pub fn band(&self) -> SanityBand {
        if self.value > WHISPER_THRESHOLD {
            SanityBand::Stable
        } else if self.value >= HALLUCINATION_THRESHOLD {
            SanityBand::Uneasy
        } else {
            SanityBand::Critical
        }
    }

    pub fn whispers_active(&self) -> bool {
        self.value < WHISPER_THRESHOLD
    }

    pub fn hallucinations_active(&self) -> bool {
        self.value < HALLUCINATION_THRESHOLD
    }

    pub fn distortion_active(&self) -> bool {
        self.value < DISTORTION_THRESHOLD
    }

    pub fn is_depleted(&self) -> bool {
        self.value <= 0.0
    }
}
