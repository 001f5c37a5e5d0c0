//! Acceleration contributors for the stepper
//!
//! Defines the `Acceleration` trait for extra terms on top of gravity.
//! Gravity itself is read from `Parameters` by the stepper; terms registered
//! here are summed per body by `AccelSet` and added to it.

use crate::simulation::states::{Body, NVec2};

/// Collection of extra acceleration terms (wind, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all `bodies`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, t: f64, bodies: &[Body], out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        for term in &self.terms {
            term.acceleration(t, bodies, out);
        }
    }
}

/// Acceleration source. Implementations add their contribution into `out[i]`
/// for each body
pub trait Acceleration {
    fn acceleration(&self, t: f64, bodies: &[Body], out: &mut [NVec2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::states::Rgba;

    struct Wind(f64);

    impl Acceleration for Wind {
        fn acceleration(&self, _t: f64, _bodies: &[Body], out: &mut [NVec2]) {
            for a in out.iter_mut() {
                a.x += self.0;
            }
        }
    }

    /// Pulls harder on bigger bodies
    struct Lift;

    impl Acceleration for Lift {
        fn acceleration(&self, _t: f64, bodies: &[Body], out: &mut [NVec2]) {
            for (a, b) in out.iter_mut().zip(bodies) {
                a.y += b.radius();
            }
        }
    }

    #[test]
    fn terms_are_summed_and_buffer_reset() {
        let bodies = vec![
            Body::new(NVec2::zeros(), 1.0, Rgba::WHITE).unwrap(),
            Body::new(NVec2::new(3.0, 4.0), 2.0, Rgba::WHITE).unwrap(),
        ];
        let set = AccelSet::new().with(Wind(2.0)).with(Lift);

        let mut out = vec![NVec2::new(99.0, 99.0); 2];
        set.accumulate_accels(0.0, &bodies, &mut out);

        assert_eq!(out[0], NVec2::new(2.0, 1.0));
        assert_eq!(out[1], NVec2::new(2.0, 2.0));
    }
}
