//! Fixed-step time integration for the scene
//!
//! Semi-implicit (symplectic) Euler with no substepping: velocity is kicked
//! first, then position drifts with the new velocity, then the body is
//! resolved against the floors. At large `dt` or high speed a body can pass
//! through a floor within a single step.

use super::collision::{resolve_body, ResolutionPolicy};
use super::forces::AccelSet;
use super::params::Parameters;
use super::scene::Scene;
use super::states::NVec2;

/// What happened during one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    pub contacts: usize,
}

/// Advance the scene by one step of `params.dt`, mutating bodies in place
/// and in list order. Every body feels `params.gravity` plus whatever the
/// terms in `forces` add. Updates `scene.t` and `scene.steps`.
pub fn step(scene: &mut Scene, forces: &AccelSet, params: &Parameters, policy: ResolutionPolicy) -> StepReport {
    let dt = params.dt;
    let n = scene.len();

    // extra terms a_n for every body at the current time
    let mut accels = vec![NVec2::zeros(); n];
    forces.accumulate_accels(scene.t, scene.bodies(), &mut accels);

    let mut report = StepReport::default();
    let (bodies, obstacles) = scene.split_mut();
    for (b, a) in bodies.iter_mut().zip(accels.iter()) {
        // Kick: v_n+1 = v_n + dt * (g + a_n)
        b.v += dt * (params.gravity + *a);
        // Drift: x_n+1 = x_n + dt * v_n+1
        b.x += dt * b.v;

        report.contacts += resolve_body(b, obstacles, params, policy);
    }

    scene.t += dt;
    scene.steps += 1;
    report
}
