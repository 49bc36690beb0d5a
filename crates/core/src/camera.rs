//! World-to-screen offset tracking for the player-centred viewport.

use glam::Vec2;

use crate::geometry::Rect;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    offset: Vec2,
    viewport: Vec2,
    level: Vec2,
}

impl Camera {
    pub fn new(viewport: Vec2, level: Vec2) -> Self {
        Self { offset: Vec2::ZERO, viewport, level }
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Centres the viewport on `target`, then clamps it inside the level.
    ///
    /// When the level is no larger than the viewport on an axis the clamp
    /// range collapses to `[0, 0]`.
    pub fn update(&mut self, target: &Rect) {
        let centred = (target.center() - self.viewport / 2.0).floor();
        let max = (self.level - self.viewport).max(Vec2::ZERO);
        self.offset = centred.clamp(Vec2::ZERO, max);
    }

    pub fn apply_to_point(&self, world: Vec2) -> Vec2 {
        world - self.offset
    }

    pub fn apply_to_rect(&self, world: &Rect) -> Rect {
        world.translated(-self.offset)
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen + self.offset
    }
}
