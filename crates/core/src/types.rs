use glam::Vec2;
use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct EnemyId;
}

/// Key state sampled once per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub clap: bool,
}

impl TickInput {
    /// Unit-per-axis direction. Down beats up and right beats left.
    pub fn direction(&self) -> Vec2 {
        let axis = |negative: bool, positive: bool| match (negative, positive) {
            (_, true) => 1.0,
            (true, false) => -1.0,
            (false, false) => 0.0,
        };
        Vec2::new(axis(self.left, self.right), axis(self.up, self.down))
    }

    pub fn any_direction(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossCause {
    Caught,
    SanityDepleted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    LevelComplete,
    GameOver(LossCause),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Playing,
    Finished(RunOutcome),
}

/// Gameplay event produced during the most recent tick.
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    Footstep { origin: Vec2 },
    Clap { origin: Vec2 },
    EnemyAlerted { enemy: EnemyId, source: Vec2 },
    SilenceDecay { sanity: f32 },
    NoteRead { note: usize },
    WhisperChanged { line: &'static str },
    HallucinationSpawned { pos: Vec2 },
    PlayerCaught { enemy: EnemyId },
    SanityDepleted,
    ExitReached,
}

/// Screen jitter and tint applied while sanity is critically low.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Distortion {
    pub shift_x: i8,
    pub shift_y: i8,
    pub tint: [u8; 3],
    pub alpha: u8,
}
