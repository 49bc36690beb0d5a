//! Fixed-timestep accumulator that turns frame time into whole simulation ticks.
//! This module exists to decouple tick rate from display refresh rate.
//! It does not own what a tick does.

/// Longest frame time credited at once; longer stalls are dropped.
const MAX_FRAME_SECONDS: f32 = 0.1;
/// Upper bound on ticks run for a single rendered frame.
const MAX_SUBSTEPS: u32 = 4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedStep {
    step_seconds: f32,
    accumulator: f32,
}

impl FixedStep {
    pub fn new(rate_hz: u32) -> Self {
        Self { step_seconds: 1.0 / rate_hz.max(1) as f32, accumulator: 0.0 }
    }

    /// Credits `frame_seconds` and returns how many ticks are due now.
    pub fn advance(&mut self, frame_seconds: f32) -> u32 {
        self.accumulator += frame_seconds.clamp(0.0, MAX_FRAME_SECONDS);
        let mut steps = 0;
        while self.accumulator >= self.step_seconds && steps < MAX_SUBSTEPS {
            self.accumulator -= self.step_seconds;
            steps += 1;
        }
        if steps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(self.step_seconds);
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_hz_frames_yield_one_tick_each() {
        let mut pacing = FixedStep::new(60);
        let total: u32 = (0..60).map(|_| pacing.advance(1.0 / 60.0 + 1e-6)).sum();
        assert_eq!(total, 60);
    }

    #[test]
    fn fast_frames_accumulate() {
        let mut pacing = FixedStep::new(60);
        assert_eq!(pacing.advance(1.0 / 240.0), 0);
        assert_eq!(pacing.advance(1.0 / 240.0), 0);
        assert_eq!(pacing.advance(1.0 / 240.0), 0);
        assert_eq!(pacing.advance(1.0 / 240.0 + 1e-5), 1);
    }

    #[test]
    fn long_stall_is_capped() {
        let mut pacing = FixedStep::new(60);
        assert_eq!(pacing.advance(5.0), MAX_SUBSTEPS);
        assert!(pacing.advance(0.0) <= 1);
    }
}
