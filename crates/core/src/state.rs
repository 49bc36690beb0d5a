//! World state read by renderers and mutated by the tick loop.
//! This module exists to give frontends one borrowable view of the run.
//! It does not own tick ordering or random draws.

use glam::Vec2;
use slotmap::SlotMap;

use crate::camera::Camera;
use crate::consts::*;
use crate::content::NOTES;
use crate::entity::{Blip, Enemy, ExitPoint, FakeEnemy, Note, Player};
use crate::level::Level;
use crate::pulse::Pulse;
use crate::sanity::Sanity;
use crate::types::{Distortion, EnemyId};

/// Note text currently shown at the bottom of the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoteDisplay {
    pub text: &'static str,
    pub ticks_left: u32,
}

#[derive(Clone, Debug, Default)]
pub struct HudState {
    pub note: Option<NoteDisplay>,
    pub whisper: Option<&'static str>,
    pub whisper_timer: i32,
    pub distortion: Option<Distortion>,
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub level: Level,
    pub player: Player,
    pub enemies: SlotMap<EnemyId, Enemy>,
    pub pulses: Vec<Pulse>,
    pub blips: Vec<Blip>,
    pub fake_enemies: Vec<FakeEnemy>,
    pub notes: Vec<Note>,
    pub exit: ExitPoint,
    pub camera: Camera,
    pub sanity: Sanity,
    pub clap_cooldown: u32,
    pub hud: HudState,
}

impl GameState {
    /// Fresh run on `level` with no enemies placed yet.
    pub fn new(level: Level) -> Self {
        let player = Player::new(Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y));
        let mut camera = Camera::new(Vec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT), level.size());
        camera.update(&player.rect);
        let notes = NOTES.iter().map(|&(x, y, text)| Note::new(Vec2::new(x, y), text)).collect();
        Self {
            level,
            player,
            enemies: SlotMap::with_key(),
            pulses: Vec::new(),
            blips: Vec::new(),
            fake_enemies: Vec::new(),
            notes,
            exit: ExitPoint::new(Vec2::new(EXIT_X, EXIT_Y)),
            camera,
            sanity: Sanity::default(),
            clap_cooldown: 0,
            hud: HudState::default(),
        }
    }

    /// Remaining clap cooldown in whole seconds, rounded down.
    pub fn cooldown_seconds(&self) -> u32 {
        self.clap_cooldown / TICK_RATE_HZ
    }
}
