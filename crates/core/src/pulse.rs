//! Expanding sound rings: enemy alerting and wall revelation.
//! This module exists to isolate the wavefront math shared by footsteps and claps.
//! It does not own pulse creation policy, sanity costs or cooldowns.
//!
//! A pulse is a ring, not a disc. Each tick its radius grows by `PULSE_GROWTH`.
//! An enemy hears it while the ring sits within `WAVEFRONT_BAND` of the enemy's
//! centre. While the ring is below its maximum radius, `RAY_COUNT` evenly spaced
//! points on the ring are tested against the walls; each point inside a wall
//! leaves a `Blip`. Once the radius reaches the maximum the pulse goes inactive
//! for good.

use std::f32::consts::TAU;

use glam::Vec2;

use crate::consts::*;
use crate::entity::Blip;
use crate::level::Level;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PulseKind {
    Footstep,
    Clap,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Pulse {
    pub origin: Vec2,
    radius: f32,
    max_radius: f32,
    power: u8,
    kind: PulseKind,
    active: bool,
}

impl Pulse {
    pub fn new(origin: Vec2, max_radius: f32, power: u8, kind: PulseKind) -> Self {
        Self { origin, radius: PULSE_START_RADIUS, max_radius, power, kind, active: true }
    }

    pub fn footstep(origin: Vec2) -> Self {
        Self::new(origin, FOOTSTEP_MAX_RADIUS, FOOTSTEP_POWER, PulseKind::Footstep)
    }

    pub fn clap(origin: Vec2) -> Self {
        Self::new(origin, CLAP_MAX_RADIUS, CLAP_POWER, PulseKind::Clap)
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn max_radius(&self) -> f32 {
        self.max_radius
    }

    pub fn power(&self) -> u8 {
        self.power
    }

    pub fn kind(&self) -> PulseKind {
        self.kind
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn expand(&mut self) {
        if self.active {
            self.radius += PULSE_GROWTH;
        }
    }

    /// True while the ring lies within `WAVEFRONT_BAND` of `point`.
    pub fn wavefront_reaches(&self, point: Vec2) -> bool {
        (point.distance(self.origin) - self.radius).abs() < WAVEFRONT_BAND
    }

    /// Samples the ring against `level` walls, appending at most one blip per ray.
    ///
    /// Deactivates instead once the radius has reached the maximum. Returns the
    /// number of blips added.
    pub fn reveal(&mut self, level: &Level, blips: &mut Vec<Blip>) -> usize {
        if !self.active {
            return 0;
        }
        if self.radius >= self.max_radius {
            self.active = false;
            return 0;
        }

        let before = blips.len();
        let angle_step = TAU / RAY_COUNT as f32;
        for ray in 0..RAY_COUNT {
            let angle = ray as f32 * angle_step;
            let point = self.origin + Vec2::new(angle.cos(), angle.sin()) * self.radius;
            if level.in_bounds(point) && level.wall_at(point).is_some() {
                blips.push(Blip::new(point));
            }
        }
        blips.len() - before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    fn open_level() -> Level {
        Level::new(Vec2::new(2000.0, 2000.0), Vec::new())
    }

    #[test]
    fn radius_grows_until_max_then_stays_inactive() {
        let level = open_level();
        let mut blips = Vec::new();
        let mut pulse = Pulse::footstep(Vec2::new(500.0, 500.0));
        let mut previous = pulse.radius();
        let mut active_ticks = 0;
        while pulse.is_active() {
            pulse.expand();
            assert!(pulse.radius() > previous);
            previous = pulse.radius();
            pulse.reveal(&level, &mut blips);
            active_ticks += 1;
        }
        // 10 -> 100 in steps of 6 is 15 ticks; the 15th reaches 100 and deactivates.
        assert_eq!(active_ticks, 15);
        assert!(pulse.radius() >= pulse.max_radius());
        pulse.expand();
        pulse.reveal(&level, &mut blips);
        assert!(!pulse.is_active());
        assert_eq!(pulse.radius(), previous);
    }

    #[test]
    fn enemy_at_fifty_hears_the_ring_at_radius_forty_six() {
        let origin = Vec2::new(500.0, 500.0);
        let listener = origin + Vec2::new(50.0, 0.0);
        let mut pulse = Pulse::clap(origin);
        let mut first_heard = None;
        for _ in 0..20 {
            pulse.expand();
            if pulse.wavefront_reaches(listener) {
                first_heard = Some(pulse.radius());
                break;
            }
        }
        assert_eq!(first_heard, Some(46.0));
        assert!(pulse.radius() > 40.0 && pulse.radius() < 60.0);
    }

    #[test]
    fn wavefront_over_wall_adds_at_most_ray_count_blips_on_the_ring() {
        let origin = Vec2::new(1000.0, 1000.0);
        let wall = Rect::new(1000.0, 900.0, 300.0, 300.0);
        let level = Level::new(Vec2::new(2000.0, 2000.0), vec![wall]);
        let mut pulse = Pulse::clap(origin);
        let mut blips = Vec::new();
        for _ in 0..10 {
            pulse.expand();
            let added = pulse.reveal(&level, &mut blips);
            assert!(added <= RAY_COUNT);
            for blip in &blips[blips.len() - added..] {
                assert!(wall.contains_point(blip.pos));
                assert!((blip.pos.distance(origin) - pulse.radius()).abs() < 1e-2);
            }
        }
        assert!(!blips.is_empty());
    }

    #[test]
    fn points_outside_level_are_skipped() {
        let wall = Rect::new(-100.0, -100.0, 50.0, 4000.0);
        let level = Level::new(Vec2::new(2000.0, 2000.0), vec![wall]);
        let mut pulse = Pulse::clap(Vec2::new(20.0, 1000.0));
        let mut blips = Vec::new();
        for _ in 0..20 {
            pulse.expand();
            pulse.reveal(&level, &mut blips);
        }
        assert!(blips.is_empty());
    }
}
