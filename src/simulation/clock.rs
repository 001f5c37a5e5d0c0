//! Fixed-timestep accumulator
//!
//! Decouples the simulation step from the render frame time: frame time is
//! banked and paid out in whole `dt` steps. Step size and substep cap are
//! passed on every call so they always follow the current `Parameters`.

use log::debug;

#[derive(Debug, Clone, Default)]
pub struct FixedClock {
    accumulator: f64,
}

impl FixedClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bank `frame_dt` seconds and return how many `dt` steps to run now.
    /// Anything beyond `max_substeps` steps is dropped so a slow frame
    /// cannot snowball into ever longer catch-up frames.
    pub fn advance(&mut self, frame_dt: f64, dt: f64, max_substeps: u32) -> u32 {
        if frame_dt.is_finite() && frame_dt > 0.0 {
            self.accumulator += frame_dt;
        }

        let mut steps = 0;
        while self.accumulator >= dt && steps < max_substeps {
            self.accumulator -= dt;
            steps += 1;
        }

        if self.accumulator >= dt {
            debug!("dropping {:.4}s of simulation time after {steps} substeps", self.accumulator);
            self.accumulator = 0.0;
        }
        steps
    }

    pub fn accumulated(&self) -> f64 {
        self.accumulator
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banks_partial_frames() {
        let mut clock = FixedClock::new();
        assert_eq!(clock.advance(0.1, 0.25, 8), 0);
        assert_eq!(clock.advance(0.1, 0.25, 8), 0);
        assert_eq!(clock.advance(0.1, 0.25, 8), 1);
        assert!((clock.accumulated() - 0.05).abs() < 1e-12);
    }

    #[test]
    fn caps_substeps_and_drops_backlog() {
        let mut clock = FixedClock::new();
        assert_eq!(clock.advance(10.0, 0.25, 2), 2);
        assert_eq!(clock.accumulated(), 0.0);
    }

    #[test]
    fn ignores_bogus_frame_times() {
        let mut clock = FixedClock::new();
        assert_eq!(clock.advance(-1.0, 0.25, 2), 0);
        assert_eq!(clock.advance(f64::NAN, 0.25, 2), 0);
        assert_eq!(clock.accumulated(), 0.0);
    }

    #[test]
    fn step_size_can_change_between_frames() {
        let mut clock = FixedClock::new();
        assert_eq!(clock.advance(0.3, 0.25, 8), 1);
        // 0.05 banked + 0.05 pays out two 0.05 steps
        assert_eq!(clock.advance(0.05, 0.05, 8), 2);
    }
}
