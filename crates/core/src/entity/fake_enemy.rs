use glam::Vec2;

use crate::consts::*;
use crate::random::RandomSource;

/// Hallucinated enemy. Drawn only; never collides or hears anything.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FakeEnemy {
    pub pos: Vec2,
    life: i32,
}

impl FakeEnemy {
    pub fn new(pos: Vec2, life: i32) -> Self {
        Self { pos, life }
    }

    /// Spawns within `HALLUCINATION_SPREAD` of `anchor` on each axis.
    pub fn spawn_near(anchor: Vec2, rng: &mut dyn RandomSource) -> Self {
        let dx = rng.range_inclusive(-HALLUCINATION_SPREAD, HALLUCINATION_SPREAD);
        let dy = rng.range_inclusive(-HALLUCINATION_SPREAD, HALLUCINATION_SPREAD);
        let life = rng.range_inclusive(HALLUCINATION_MIN_LIFE, HALLUCINATION_MAX_LIFE);
        Self::new(anchor + Vec2::new(dx as f32, dy as f32), life)
    }

    pub fn life(&self) -> i32 {
        self.life
    }

    pub fn fade(&mut self) {
        self.life -= 1;
    }

    pub fn is_gone(&self) -> bool {
        self.life <= 0
    }

    pub fn color(&self) -> [u8; 3] {
        let level = (self.life * 2).clamp(0, 255) as u8;
        [level, 0, level]
    }
}
