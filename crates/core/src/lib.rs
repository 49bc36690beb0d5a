pub mod camera;
pub mod config;
pub mod consts;
pub mod content;
pub mod entity;
pub mod game;
pub mod geometry;
pub mod level;
pub mod pulse;
pub mod random;
pub mod sanity;
pub mod state;
pub mod types;

pub use camera::Camera;
pub use config::{ConfigError, Difficulty, DifficultySettings, GameConfig};
pub use game::Game;
pub use geometry::Rect;
pub use glam::Vec2;
pub use level::Level;
pub use pulse::{Pulse, PulseKind};
pub use random::{RandomSource, SeededRandom};
pub use sanity::{Sanity, SanityBand};
pub use state::{GameState, HudState, NoteDisplay};
pub use types::*;
