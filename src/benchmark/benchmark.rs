use std::time::Instant;

use crate::error::SimError;
use crate::simulation::collision::ResolutionPolicy;
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{NVec2, Rgba};

const STEPS: u32 = 600;

/// Build a scene of `n` bodies over `m` stacked floors, deterministic positions
fn bench_scenario(n: usize, m: usize, policy: ResolutionPolicy) -> Result<Scenario, SimError> {
    let engine = Engine {
        resolution: policy,
        ..Engine::default()
    };
    let mut scenario = Scenario::new(engine, Parameters::default())?;

    for j in 0..m {
        let y = 20.0 + j as f64 * 5.0;
        scenario.scene.spawn_obstacle(0.0, y, 1600.0, y, Rgba::WHITE);
    }

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec2::new(800.0 + (i_f * 0.37).sin() * 700.0, 400.0 + (i_f * 0.13).cos() * 300.0);
        let radius = 5.0 + (i % 7) as f64;
        scenario.scene.spawn_body(x, radius, Rgba::WHITE)?;
    }

    Ok(scenario)
}

pub fn bench_step() -> Result<(), SimError> {
    // Different scene sizes to test
    let ns = [100, 1_000, 10_000];
    let ms = [1, 4, 16];

    for n in ns {
        for m in ms {
            let mut last_wins = bench_scenario(n, m, ResolutionPolicy::LastWins)?;
            let mut deepest = bench_scenario(n, m, ResolutionPolicy::Deepest)?;

            // Warm up
            last_wins.step_once();
            deepest.step_once();

            let t0 = Instant::now();
            for _ in 0..STEPS {
                last_wins.step_once();
            }
            let dt_last = t0.elapsed().as_secs_f64() / STEPS as f64;

            let t1 = Instant::now();
            for _ in 0..STEPS {
                deepest.step_once();
            }
            let dt_deep = t1.elapsed().as_secs_f64() / STEPS as f64;

            println!(
                "N = {n:6}, M = {m:3}, last_wins = {:10.3} us/step, deepest = {:10.3} us/step",
                dt_last * 1e6,
                dt_deep * 1e6
            );
        }
    }
    Ok(())
}
