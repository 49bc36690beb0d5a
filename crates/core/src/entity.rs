//! Per-entity state and update rules.
//! This module exists to keep each actor's behaviour local and unit-testable.
//! It does not own tick ordering; the game loop decides who updates when.

mod blip;
mod enemy;
mod fake_enemy;
mod landmark;
mod player;

pub use blip::Blip;
pub use enemy::Enemy;
pub use fake_enemy::FakeEnemy;
pub use landmark::{ExitPoint, Note};
pub use player::{Footstep, Player};
