use glam::Vec2;

use crate::consts::{BLIP_FADE, BLIP_LIFE};

/// Fading marker left where a wavefront touched a wall.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Blip {
    pub pos: Vec2,
    life: i32,
}

impl Blip {
    pub fn new(pos: Vec2) -> Self {
        Self { pos, life: BLIP_LIFE }
    }

    pub fn life(&self) -> i32 {
        self.life
    }

    /// Fades one tick. Returns false once the blip should be removed.
    pub fn fade(&mut self) -> bool {
        self.life -= BLIP_FADE;
        self.life > 0
    }

    /// Display color: green fading to black, with a blue tint while bright.
    pub fn color(&self) -> [u8; 3] {
        let life = self.life.clamp(0, 255);
        [0, life as u8, (life - 100).max(0) as u8]
    }
}
