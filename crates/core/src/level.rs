//! Wall geometry for a level: fixed boundary plus uniformly placed obstacles.

use glam::Vec2;

use crate::consts::*;
use crate::geometry::Rect;
use crate::random::RandomSource;

/// Immutable wall set. Built once per level and never mutated.
#[derive(Clone, Debug)]
pub struct Level {
    size: Vec2,
    walls: Vec<Rect>,
}

impl Level {
    pub fn new(size: Vec2, walls: Vec<Rect>) -> Self {
        debug_assert!(walls.iter().all(|wall| wall.w > 0.0 && wall.h > 0.0));
        Self { size, walls }
    }

    /// Boundary walls only.
    pub fn empty(size: Vec2) -> Self {
        Self::new(size, boundary_walls(size))
    }

    /// Boundary walls plus `OBSTACLE_COUNT` random obstacles.
    ///
    /// An obstacle that would cover any rectangle in `keep_clear` is re-rolled,
    /// up to `OBSTACLE_PLACEMENT_ATTEMPTS` times, then dropped.
    pub fn generate(rng: &mut dyn RandomSource, keep_clear: &[Rect]) -> Self {
        let size = Vec2::new(LEVEL_WIDTH, LEVEL_HEIGHT);
        let mut walls = boundary_walls(size);
        let mut dropped = 0usize;

        for _ in 0..OBSTACLE_COUNT {
            let placed = (0..OBSTACLE_PLACEMENT_ATTEMPTS)
                .map(|_| roll_obstacle(rng, size))
                .find(|obstacle| !keep_clear.iter().any(|zone| zone.intersects(obstacle)));
            match placed {
                Some(obstacle) => walls.push(obstacle),
                None => dropped += 1,
            }
        }

        log::info!(
            "Generated level {}x{}: {} walls ({} obstacles dropped)",
            size.x,
            size.y,
            walls.len(),
            dropped
        );
        Self::new(size, walls)
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn walls(&self) -> &[Rect] {
        &self.walls
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.size.x, self.size.y)
    }

    pub fn in_bounds(&self, point: Vec2) -> bool {
        self.bounds().contains_point(point)
    }

    /// First wall containing `point`, in wall order.
    pub fn wall_at(&self, point: Vec2) -> Option<&Rect> {
        self.walls.iter().find(|wall| wall.contains_point(point))
    }
}

fn boundary_walls(size: Vec2) -> Vec<Rect> {
    let t = BOUNDARY_THICKNESS;
    vec![
        Rect::new(0.0, 0.0, size.x, t),
        Rect::new(0.0, size.y - t, size.x, t),
        Rect::new(0.0, 0.0, t, size.y),
        Rect::new(size.x - t, 0.0, t, size.y),
    ]
}

fn roll_obstacle(rng: &mut dyn RandomSource, size: Vec2) -> Rect {
    let w = rng.range_inclusive(OBSTACLE_MIN_SIZE, OBSTACLE_MAX_SIZE);
    let h = rng.range_inclusive(OBSTACLE_MIN_SIZE, OBSTACLE_MAX_SIZE);
    let x = rng.range_inclusive(OBSTACLE_EDGE_MARGIN, size.x as i32 - w - OBSTACLE_EDGE_MARGIN);
    let y = rng.range_inclusive(OBSTACLE_EDGE_MARGIN, size.y as i32 - h - OBSTACLE_EDGE_MARGIN);
    Rect::new(x as f32, y as f32, w as f32, h as f32)
}
