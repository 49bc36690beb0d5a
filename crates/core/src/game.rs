//! Run orchestration: owns the world state, randomness and outcome.
//! This module exists to sequence every per-tick subsystem in one fixed order.
//! It does not own rendering, input capture or frame pacing.

use crate::config::GameConfig;
use crate::random::{RandomSource, SeededRandom};
use crate::state::GameState;
use crate::types::*;

mod bootstrap;
mod hash;
mod tick;

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tests;

pub struct Game {
    seed: u64,
    tick: u64,
    config: GameConfig,
    rng: Box<dyn RandomSource>,
    state: GameState,
    phase: Phase,
    events: Vec<GameEvent>,
}

impl Game {
    /// Builds a run whose every random draw derives from `seed`.
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        Self::with_random(config, seed, Box::new(SeededRandom::new(seed)))
    }

    /// Builds a run drawing from `rng`. `seed` is recorded for hashing only.
    pub fn with_random(config: &GameConfig, seed: u64, mut rng: Box<dyn RandomSource>) -> Self {
        let state = bootstrap::initial_state(config, rng.as_mut());
        Self::from_state(config, seed, rng, state)
    }

    pub(crate) fn from_state(
        config: &GameConfig,
        seed: u64,
        rng: Box<dyn RandomSource>,
        state: GameState,
    ) -> Self {
        Self { seed, tick: 0, config: *config, rng, state, phase: Phase::Playing, events: Vec::new() }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn outcome(&self) -> Option<RunOutcome> {
        match self.phase {
            Phase::Playing => None,
            Phase::Finished(outcome) => Some(outcome),
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished(_))
    }

    /// Events produced by the most recent tick only.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }
}
