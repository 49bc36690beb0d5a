//! Axis-aligned rectangles and axis-separated collision resolution.
//! This module exists to keep overlap rules in one place for walls, actors and triggers.
//! It does not own movement speeds or input handling.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A rectangle in world units. `x`/`y` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Overlap test. Rectangles that only share an edge do not overlap.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Half-open containment: left/top edges are inside, right/bottom are not.
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    pub fn translated(&self, offset: Vec2) -> Rect {
        Rect { x: self.x + offset.x, y: self.y + offset.y, ..*self }
    }

    /// Grows the rectangle by `margin` on every side.
    pub fn inflated(&self, margin: f32) -> Rect {
        Rect::new(self.x - margin, self.y - margin, self.w + 2.0 * margin, self.h + 2.0 * margin)
    }
}

/// Moves `body` by `delta`, resolving each axis against `walls` in turn.
///
/// The horizontal step is applied and resolved first, then the vertical one.
/// A collision clamps the body flush against the nearest wall edge facing the
/// direction of travel; there is no sliding beyond that separation.
pub fn move_and_collide(body: &mut Rect, delta: Vec2, walls: &[Rect]) {
    if delta.x != 0.0 {
        body.x += delta.x;
        resolve_horizontal(body, delta.x, walls);
    }
    if delta.y != 0.0 {
        body.y += delta.y;
        resolve_vertical(body, delta.y, walls);
    }
}

fn resolve_horizontal(body: &mut Rect, dx: f32, walls: &[Rect]) {
    let colliding = walls.iter().filter(|wall| body.intersects(wall));
    if dx > 0.0 {
        if let Some(edge) = colliding.map(|wall| wall.x).reduce(f32::min) {
            body.x = edge - body.w;
        }
    } else if let Some(edge) = colliding.map(Rect::right).reduce(f32::max) {
        body.x = edge;
    }
}

fn resolve_vertical(body: &mut Rect, dy: f32, walls: &[Rect]) {
    let colliding = walls.iter().filter(|wall| body.intersects(wall));
    if dy > 0.0 {
        if let Some(edge) = colliding.map(|wall| wall.y).reduce(f32::min) {
            body.y = edge - body.h;
        }
    } else if let Some(edge) = colliding.map(Rect::bottom).reduce(f32::max) {
        body.y = edge;
    }
}
