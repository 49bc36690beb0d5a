//! Shared fixtures for the `game` test suites.
//! This module exists to avoid repeating world and randomness setup across tests.
//! It does not own production gameplay logic.

use glam::Vec2;

use super::*;
use crate::consts::*;
use crate::entity::Enemy;
use crate::level::Level;

/// Replays a fixed list of raw draws, cycling when exhausted.
pub(super) struct ScriptedRandom {
    values: Vec<u64>,
    cursor: usize,
}

impl ScriptedRandom {
    pub(super) fn constant(value: u64) -> Self {
        Self { values: vec![value], cursor: 0 }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_u64(&mut self) -> u64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

/// Draws that fail every 1% roll and keep wandering enemies in place.
pub(super) fn quiet_rng() -> Box<dyn RandomSource> {
    Box::new(ScriptedRandom::constant(u64::MAX / 2))
}

/// Draws that pass every roll and always pick the lowest value of a range.
pub(super) fn eager_rng() -> Box<dyn RandomSource> {
    Box::new(ScriptedRandom::constant(0))
}

/// Boundary-only level, no enemies, player at spawn.
pub(super) fn open_state() -> GameState {
    GameState::new(Level::empty(Vec2::new(LEVEL_WIDTH, LEVEL_HEIGHT)))
}

pub(super) fn game_from(state: GameState, rng: Box<dyn RandomSource>) -> Game {
    Game::from_state(&GameConfig::default(), 0, rng, state)
}

pub(super) fn open_game() -> Game {
    game_from(open_state(), quiet_rng())
}

pub(super) fn add_enemy(state: &mut GameState, position: Vec2) -> EnemyId {
    state.enemies.insert(Enemy::new(position, GameConfig::default().settings.enemy_speed))
}

pub(super) fn idle() -> TickInput {
    TickInput::default()
}

pub(super) fn clap() -> TickInput {
    TickInput { clap: true, ..Default::default() }
}

pub(super) fn right() -> TickInput {
    TickInput { right: true, ..Default::default() }
}

pub(super) fn run_ticks(game: &mut Game, input: TickInput, ticks: u32) {
    for _ in 0..ticks {
        game.tick(&input);
    }
}

pub(super) fn assert_close(actual: f32, expected: f32) {
    assert!((actual - expected).abs() < 1e-4, "expected {expected}, got {actual}");
}
