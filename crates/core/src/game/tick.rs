//! Fixed-order per-tick simulation.
//! This module exists to keep the subsystem ordering in one readable place.
//! It does not own entity rules; each entity updates itself.
//!
//! Order: player, footstep, clap, silence, enemies, pulses, blips, camera,
//! hallucinations, notes, exit, HUD timers, outcome. Changing it changes
//! replays, so the determinism tests pin it.

use glam::Vec2;

use super::*;
use crate::consts::*;
use crate::content::WHISPER_LINES;
use crate::entity::FakeEnemy;
use crate::pulse::Pulse;
use crate::state::NoteDisplay;

impl Game {
    /// Advances one fixed step. A finished run ignores further ticks.
    pub fn tick(&mut self, input: &TickInput) {
        self.events.clear();
        if self.is_finished() {
            return;
        }
        self.tick += 1;

        self.move_player(input);
        self.clap(input);
        self.decay_silence();
        let caught = self.update_enemies();
        self.propagate_pulses();
        self.state.blips.retain_mut(|blip| blip.fade());
        self.state.camera.update(&self.state.player.rect);
        self.update_hallucinations();
        self.read_notes();
        let exit_reached = self.state.exit.reached_by(&self.state.player.rect);
        self.update_hud();
        self.resolve_outcome(caught, exit_reached);
    }

    fn move_player(&mut self, input: &TickInput) {
        let state = &mut self.state;
        if let Some(step) = state.player.move_with(input, state.level.walls()) {
            state.pulses.push(Pulse::footstep(step.origin));
            state.sanity.record_action(FOOTSTEP_SANITY_COST);
            self.events.push(GameEvent::Footstep { origin: step.origin });
        }
    }

    fn clap(&mut self, input: &TickInput) {
        let state = &mut self.state;
        if input.clap && state.clap_cooldown == 0 {
            let origin = state.player.center();
            state.pulses.push(Pulse::clap(origin));
            state.clap_cooldown = self.config.settings.clap_cooldown_ticks;
            state.sanity.record_action(CLAP_SANITY_COST);
            self.events.push(GameEvent::Clap { origin });
            log::debug!(
                "Clap at ({}, {}) on tick {}, sanity {}",
                origin.x,
                origin.y,
                self.tick,
                state.sanity.value()
            );
        }
        state.clap_cooldown = state.clap_cooldown.saturating_sub(1);
    }

    fn decay_silence(&mut self) {
        if self.state.sanity.tick_silence() {
            self.events.push(GameEvent::SilenceDecay { sanity: self.state.sanity.value() });
        }
    }

    /// Moves every enemy; returns the first one overlapping the player.
    fn update_enemies(&mut self) -> Option<EnemyId> {
        let state = &mut self.state;
        let bounds = state.level.bounds();
        let mut caught = None;
        for (id, enemy) in &mut state.enemies {
            enemy.update(self.rng.as_mut(), &bounds);
            if caught.is_none() && enemy.rect.intersects(&state.player.rect) {
                caught = Some(id);
            }
        }
        caught
    }

    fn propagate_pulses(&mut self) {
        let state = &mut self.state;
        for pulse in &mut state.pulses {
            pulse.expand();
            for (id, enemy) in &mut state.enemies {
                if pulse.wavefront_reaches(enemy.center()) {
                    enemy.hear_sound(pulse.origin);
                    log::trace!("Enemy {id:?} heard {:?} at radius {}", pulse.kind(), pulse.radius());
                    self.events.push(GameEvent::EnemyAlerted { enemy: id, source: pulse.origin });
                }
            }
            pulse.reveal(&state.level, &mut state.blips);
        }
        state.pulses.retain(Pulse::is_active);
    }

    fn update_hallucinations(&mut self) {
        let state = &mut self.state;
        if state.sanity.hallucinations_active() && self.rng.chance(HALLUCINATION_CHANCE) {
            let anchor = Vec2::new(state.player.rect.x, state.player.rect.y);
            let fake = FakeEnemy::spawn_near(anchor, self.rng.as_mut());
            log::debug!("Hallucination at ({:.0}, {:.0})", fake.pos.x, fake.pos.y);
            self.events.push(GameEvent::HallucinationSpawned { pos: fake.pos });
            state.fake_enemies.push(fake);
        }
        for fake in &mut state.fake_enemies {
            fake.fade();
        }
        state.fake_enemies.retain(|fake| !fake.is_gone());
    }

    /// Ages the note on screen, then shows any note the player just touched.
    fn read_notes(&mut self) {
        let state = &mut self.state;
        state.hud.note = state
            .hud
            .note
            .map(|note| NoteDisplay { ticks_left: note.ticks_left.saturating_sub(1), ..note })
            .filter(|note| note.ticks_left > 0);

        for (index, note) in state.notes.iter_mut().enumerate() {
            if let Some(text) = note.check_read(&state.player.rect) {
                note.mark_read();
                state.hud.note = Some(NoteDisplay { text, ticks_left: NOTE_DISPLAY_TICKS });
                self.events.push(GameEvent::NoteRead { note: index });
                log::debug!("Note {index} read: {text}");
            }
        }
    }

    fn update_hud(&mut self) {
        let state = &mut self.state;
        let hud = &mut state.hud;

        hud.whisper_timer = hud.whisper_timer.saturating_sub(1);
        if hud.whisper_timer <= 0 && state.sanity.whispers_active() {
            let line = WHISPER_LINES[self.rng.index(WHISPER_LINES.len())];
            hud.whisper = Some(line);
            hud.whisper_timer = self.rng.range_inclusive(WHISPER_MIN_TICKS, WHISPER_MAX_TICKS);
            self.events.push(GameEvent::WhisperChanged { line });
        }

        hud.distortion = state.sanity.distortion_active().then(|| {
            let shift_x = self.rng.range_inclusive(-1, 1) as i8;
            let shift_y = self.rng.range_inclusive(-1, 1) as i8;
            let red = self.rng.range_inclusive(0, DISTORTION_MAX_TINT) as u8;
            let blue = self.rng.range_inclusive(0, DISTORTION_MAX_TINT) as u8;
            Distortion { shift_x, shift_y, tint: [red, 0, blue], alpha: DISTORTION_ALPHA }
        });
    }

    /// A loss on the same tick as reaching the exit still loses.
    fn resolve_outcome(&mut self, caught: Option<EnemyId>, exit_reached: bool) {
        let outcome = if let Some(enemy) = caught {
            self.events.push(GameEvent::PlayerCaught { enemy });
            RunOutcome::GameOver(LossCause::Caught)
        } else if self.state.sanity.is_depleted() {
            self.events.push(GameEvent::SanityDepleted);
            RunOutcome::GameOver(LossCause::SanityDepleted)
        } else if exit_reached {
            self.events.push(GameEvent::ExitReached);
            RunOutcome::LevelComplete
        } else {
            return;
        };
        log::info!("Run finished on tick {}: {outcome:?}", self.tick);
        self.phase = Phase::Finished(outcome);
    }
}
