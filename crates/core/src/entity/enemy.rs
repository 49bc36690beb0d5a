use glam::Vec2;

use crate::consts::*;
use crate::geometry::Rect;
use crate::random::RandomSource;

#[derive(Clone, Debug)]
pub struct Enemy {
    pub rect: Rect,
    speed: f32,
    target: Option<Vec2>,
    alert: u8,
}

impl Enemy {
    pub fn new(position: Vec2, speed: f32) -> Self {
        Self {
            rect: Rect::new(position.x, position.y, ENEMY_SIZE, ENEMY_SIZE),
            speed,
            target: None,
            alert: 0,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }

    pub fn target(&self) -> Option<Vec2> {
        self.target
    }

    /// Render brightness and "recently heard something" flag in one value.
    pub fn alert(&self) -> u8 {
        self.alert
    }

    pub fn is_alerted(&self) -> bool {
        self.alert > 0
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Pursues the last heard sound, or wanders one unit per axis when idle.
    ///
    /// Enemies pass through walls but never leave `bounds`.
    pub fn update(&mut self, rng: &mut dyn RandomSource, bounds: &Rect) {
        let step = match self.target {
            Some(target) => {
                let to_target = target - self.center();
                if to_target.length() < ENEMY_ARRIVAL_DISTANCE {
                    self.target = None;
                }
                let heading = to_target.y.atan2(to_target.x);
                Vec2::new(heading.cos(), heading.sin()) * self.speed
            }
            None => Vec2::new(rng.range_inclusive(-1, 1) as f32, rng.range_inclusive(-1, 1) as f32),
        };

        self.rect.x = (self.rect.x + step.x).clamp(bounds.x, bounds.right() - self.rect.w);
        self.rect.y = (self.rect.y + step.y).clamp(bounds.y, bounds.bottom() - self.rect.h);
        self.alert = self.alert.saturating_sub(ALERT_DECAY);
    }

    pub fn hear_sound(&mut self, source: Vec2) {
        self.target = Some(source);
        self.alert = ALERT_MAX;
    }
}
