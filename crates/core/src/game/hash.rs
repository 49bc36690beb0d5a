//! Stable snapshot hashing for deterministic verification.
//! This module exists to keep hashing concerns separate from simulation code.
//! It does not cover render-only state such as the camera or HUD text.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;
use crate::geometry::Rect;

fn write_rect(hasher: &mut Xxh3, rect: &Rect) {
    for value in [rect.x, rect.y, rect.w, rect.h] {
        hasher.write_u32(value.to_bits());
    }
}

impl Game {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        let state = &self.state;
        hasher.write_u64(self.seed);
        hasher.write_u64(self.tick);
        hasher.write_u8(match self.phase {
            Phase::Playing => 0,
            Phase::Finished(RunOutcome::LevelComplete) => 1,
            Phase::Finished(RunOutcome::GameOver(LossCause::Caught)) => 2,
            Phase::Finished(RunOutcome::GameOver(LossCause::SanityDepleted)) => 3,
        });

        hasher.write_usize(state.level.walls().len());
        for wall in state.level.walls() {
            write_rect(&mut hasher, wall);
        }
        write_rect(&mut hasher, &state.player.rect);
        hasher.write_u32(state.player.step_ticks());
        for enemy in state.enemies.values() {
            write_rect(&mut hasher, &enemy.rect);
            hasher.write_u8(enemy.alert());
            if let Some(target) = enemy.target() {
                hasher.write_u32(target.x.to_bits());
                hasher.write_u32(target.y.to_bits());
            }
        }

        hasher.write_u32(state.sanity.value().to_bits());
        hasher.write_u32(state.sanity.silence_ticks());
        hasher.write_u32(state.clap_cooldown);
        hasher.write_usize(state.pulses.len());
        for pulse in &state.pulses {
            hasher.write_u32(pulse.radius().to_bits());
        }
        hasher.write_usize(state.blips.len());
        hasher.write_usize(state.fake_enemies.len());
        for note in &state.notes {
            hasher.write_u8(u8::from(note.is_read()));
        }
        hasher.finish()
    }
}
