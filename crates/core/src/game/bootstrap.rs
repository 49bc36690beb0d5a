//! Starting world construction for a new run.
//! This module exists to isolate level and enemy placement from the tick flow.
//! It does not own anything that happens after the first tick.

use std::iter;

use glam::Vec2;

use crate::config::GameConfig;
use crate::consts::*;
use crate::entity::Enemy;
use crate::geometry::Rect;
use crate::level::Level;
use crate::random::RandomSource;
use crate::state::GameState;

/// Areas obstacles must not cover: spawn, exit and every note.
fn landmark_zones(state: &GameState) -> Vec<Rect> {
    iter::once(state.player.rect)
        .chain(iter::once(state.exit.rect))
        .chain(state.notes.iter().map(|note| note.rect))
        .map(|zone| zone.inflated(LANDMARK_CLEARANCE))
        .collect()
}

pub(super) fn initial_state(config: &GameConfig, rng: &mut dyn RandomSource) -> GameState {
    let mut state = GameState::new(Level::empty(Vec2::new(LEVEL_WIDTH, LEVEL_HEIGHT)));
    let keep_clear = landmark_zones(&state);
    state.level = Level::generate(rng, &keep_clear);

    for _ in 0..ENEMY_COUNT {
        let x = rng.range_inclusive(ENEMY_SPAWN_MIN, ENEMY_SPAWN_MAX);
        let y = rng.range_inclusive(ENEMY_SPAWN_MIN, ENEMY_SPAWN_MAX);
        state.enemies.insert(Enemy::new(Vec2::new(x as f32, y as f32), config.settings.enemy_speed));
    }

    log::debug!(
        "Run ready: {} enemies at speed {}, clap cooldown {} ticks",
        state.enemies.len(),
        config.settings.enemy_speed,
        config.settings.clap_cooldown_ticks
    );
    state
}
