//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed step size `dt` and the substep cap per frame,
//! - gravity acceleration,
//! - restitution and settling speed for floor bounces

use log::warn;

use crate::error::SimError;
use crate::simulation::states::NVec2;

pub const DEFAULT_DT: f64 = 1.0 / 60.0;
pub const DEFAULT_GRAVITY: f64 = 1200.0; // units/s^2, pointing towards -Y
pub const DEFAULT_RESTITUTION: f64 = 0.7;
pub const DEFAULT_SETTLE_SPEED: f64 = 5.0;
pub const DEFAULT_MAX_SUBSTEPS: u32 = 8;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64,           // fixed step size
    pub gravity: NVec2,    // gravity acceleration
    pub restitution: f64,  // fraction of vertical speed kept after a bounce
    pub settle_speed: f64, // post-bounce |v.y| below this snaps to 0
    pub max_substeps: u32, // most steps run for a single frame
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            gravity: NVec2::new(0.0, -DEFAULT_GRAVITY),
            restitution: DEFAULT_RESTITUTION,
            settle_speed: DEFAULT_SETTLE_SPEED,
            max_substeps: DEFAULT_MAX_SUBSTEPS,
        }
    }
}

impl Parameters {
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.dt > 0.0) || !self.dt.is_finite() {
            return Err(invalid("dt", format!("must be positive and finite, got {}", self.dt)));
        }
        if !self.gravity.iter().all(|g| g.is_finite()) {
            return Err(invalid("gravity", format!("must be finite, got {:?}", self.gravity)));
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(invalid("restitution", format!("must be within [0, 1], got {}", self.restitution)));
        }
        if !(self.settle_speed >= 0.0) {
            return Err(invalid("settle_speed", format!("must be non-negative, got {}", self.settle_speed)));
        }
        if self.max_substeps == 0 {
            return Err(invalid("max_substeps", "must be at least 1".to_string()));
        }

        if !self.rest_is_stable() {
            warn!(
                "gravity * dt * restitution = {:.3} >= settle_speed {:.3}: resting bodies will hop every other step",
                self.gravity.y.abs() * self.dt * self.restitution,
                self.settle_speed
            );
        }
        Ok(())
    }

    /// Whether a body resting on a floor stays exactly at rest. One step of
    /// gravity pushes it into the floor; the bounce only snaps to zero when the
    /// reflected speed is under the settle threshold.
    pub fn rest_is_stable(&self) -> bool {
        self.gravity.y.abs() * self.dt * self.restitution < self.settle_speed
    }
}

fn invalid(name: &'static str, reason: String) -> SimError {
    SimError::InvalidParameter { name, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid_but_not_rest_stable() {
        let p = Parameters::default();
        assert!(p.validate().is_ok());
        // 1200 / 60 * 0.7 = 14 > 5
        assert!(!p.rest_is_stable());
    }

    #[test]
    fn smaller_step_is_rest_stable() {
        let p = Parameters { dt: 1.0 / 240.0, ..Parameters::default() };
        assert!(p.rest_is_stable());
    }

    #[test]
    fn rejects_bad_values() {
        let bad = [
            Parameters { dt: 0.0, ..Parameters::default() },
            Parameters { dt: f64::NAN, ..Parameters::default() },
            Parameters { restitution: 1.5, ..Parameters::default() },
            Parameters { settle_speed: -1.0, ..Parameters::default() },
            Parameters { max_substeps: 0, ..Parameters::default() },
            Parameters { gravity: NVec2::new(0.0, f64::INFINITY), ..Parameters::default() },
        ];
        for p in bad {
            assert!(matches!(p.validate(), Err(SimError::InvalidParameter { .. })), "{p:?} accepted");
        }
    }
}
