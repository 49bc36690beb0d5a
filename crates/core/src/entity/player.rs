use glam::Vec2;

use crate::consts::*;
use crate::geometry::{Rect, move_and_collide};
use crate::types::TickInput;

/// Emitted every `STEP_INTERVAL_TICKS` moving ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Footstep {
    pub origin: Vec2,
}

#[derive(Clone, Debug)]
pub struct Player {
    pub rect: Rect,
    speed: f32,
    step_ticks: u32,
}

impl Player {
    pub fn new(position: Vec2) -> Self {
        Self {
            rect: Rect::new(position.x, position.y, PLAYER_SIZE, PLAYER_SIZE),
            speed: PLAYER_SPEED,
            step_ticks: 0,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }

    pub fn step_ticks(&self) -> u32 {
        self.step_ticks
    }

    /// Moves against `walls` and reports a footstep when the step counter rolls over.
    ///
    /// Down and right win over their opposites. Diagonals move `speed` on both
    /// axes. Any held direction key counts as a moving tick, blocked or not;
    /// with no direction key the step counter is untouched.
    pub fn move_with(&mut self, input: &TickInput, walls: &[Rect]) -> Option<Footstep> {
        if !input.any_direction() {
            return None;
        }

        move_and_collide(&mut self.rect, input.direction() * self.speed, walls);

        self.step_ticks += 1;
        if self.step_ticks < STEP_INTERVAL_TICKS {
            return None;
        }
        self.step_ticks = 0;
        Some(Footstep { origin: self.center() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn right() -> TickInput {
        TickInput { right: true, ..Default::default() }
    }

    #[test]
    fn footstep_every_twenty_moving_ticks() {
        let mut player = Player::new(Vec2::new(100.0, 100.0));
        let mut steps = Vec::new();
        for tick in 1..=60 {
            if player.move_with(&right(), &[]).is_some() {
                steps.push(tick);
            }
        }
        assert_eq!(steps, vec![20, 40, 60]);
    }

    #[test]
    fn standing_still_keeps_counter() {
        let mut player = Player::new(Vec2::new(100.0, 100.0));
        for _ in 0..7 {
            player.move_with(&right(), &[]);
        }
        assert!(player.move_with(&TickInput::default(), &[]).is_none());
        assert_eq!(player.step_ticks(), 7);
    }

    #[test]
    fn down_and_right_win_over_their_opposites() {
        let mut player = Player::new(Vec2::new(100.0, 100.0));
        let input = TickInput { left: true, right: true, up: true, ..Default::default() };
        player.move_with(&input, &[]);
        assert_eq!(player.rect.x, 103.0);
        assert_eq!(player.rect.y, 97.0);
    }

    #[test]
    fn holding_up_and_down_walks_down_with_footsteps() {
        let mut player = Player::new(Vec2::new(100.0, 100.0));
        let input = TickInput { up: true, down: true, ..Default::default() };
        let steps = (0..42).filter(|_| player.move_with(&input, &[]).is_some()).count();
        assert_eq!(player.rect.y, 226.0);
        assert_eq!(steps, 2);
        assert_eq!(player.step_ticks(), 2);
    }

    #[test]
    fn pushing_against_a_wall_still_counts_steps() {
        let wall = Rect::new(110.0, 0.0, 50.0, 300.0);
        let mut player = Player::new(Vec2::new(100.0, 100.0));
        let steps = (0..20).filter(|_| player.move_with(&right(), &[wall]).is_some()).count();
        assert_eq!(player.rect.x, 100.0);
        assert_eq!(steps, 1);
    }

    #[test]
    fn walking_into_wall_stays_outside() {
        let wall = Rect::new(112.0, 0.0, 50.0, 300.0);
        let mut player = Player::new(Vec2::new(100.0, 100.0));
        let input = TickInput { right: true, down: true, ..Default::default() };
        for _ in 0..30 {
            player.move_with(&input, &[wall]);
            assert!(!player.rect.intersects(&wall));
        }
        assert_eq!(player.rect.right(), 112.0);
    }

    #[test]
    fn footstep_origin_is_player_centre() {
        let mut player = Player::new(Vec2::new(100.0, 100.0));
        let mut footstep = None;
        for _ in 0..20 {
            footstep = player.move_with(&right(), &[]);
        }
        assert_eq!(footstep, Some(Footstep { origin: Vec2::new(165.0, 105.0) }));
    }
}
