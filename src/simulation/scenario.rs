//! Build a fully-initialized simulation context from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a `Scenario` containing:
//! - engine settings (`Engine`): resolution policy, pause flag, world size
//! - numerical parameters (`Parameters`)
//! - the scene store (`Scene`) with every configured body and obstacle
//! - extra force terms (`AccelSet`), empty by default; gravity lives in `Parameters`
//! - the fixed-step clock (`FixedClock`)
//!
//! The caller (frame loop, viewer, headless runner) owns the `Scenario` for
//! one run and drives it through [`Scenario::advance`] or [`Scenario::step_once`].

use log::{debug, info};

use crate::configuration::config::ScenarioConfig;
use crate::error::SimError;
use crate::simulation::clock::FixedClock;
use crate::simulation::engine::Engine;
use crate::simulation::forces::AccelSet;
use crate::simulation::integrator::{step, StepReport};
use crate::simulation::params::Parameters;
use crate::simulation::scene::Scene;
use crate::simulation::states::NVec2;

pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub scene: Scene,
    pub forces: AccelSet,
    pub clock: FixedClock,
}

impl Scenario {
    /// Empty scene with the given settings and no extra force terms
    pub fn new(engine: Engine, parameters: Parameters) -> Result<Self, SimError> {
        parameters.validate()?;

        Ok(Self {
            engine,
            parameters,
            scene: Scene::new(),
            forces: AccelSet::new(),
            clock: FixedClock::new(),
        })
    }

    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        let engine = Engine {
            resolution: e_cfg.resolution.into(),
            paused: e_cfg.paused,
            width: e_cfg.width,
            height: e_cfg.height,
        };

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            dt: p_cfg.dt,
            gravity: NVec2::new(0.0, -p_cfg.gravity),
            restitution: p_cfg.restitution,
            settle_speed: p_cfg.settle_speed,
            max_substeps: p_cfg.max_substeps,
        };

        let mut scenario = Self::new(engine, parameters)?;

        for bc in &cfg.bodies {
            scenario
                .scene
                .spawn_body(NVec2::new(bc.x[0], bc.x[1]), bc.radius, bc.color.into())?;
        }
        for oc in &cfg.obstacles {
            scenario.scene.spawn_obstacle_of(
                oc.kind.into(),
                oc.from[0],
                oc.from[1],
                oc.to[0],
                oc.to[1],
                oc.color.into(),
            );
        }

        info!(
            "scenario: {} bodies, {} obstacles, dt = {:.5}s, {:?}",
            scenario.scene.len(),
            scenario.scene.obstacles().len(),
            scenario.parameters.dt,
            scenario.engine.resolution
        );
        Ok(scenario)
    }

    /// Run exactly one step, ignoring the pause flag and the clock
    pub fn step_once(&mut self) -> StepReport {
        let Scenario {
            engine,
            parameters,
            scene,
            forces,
            ..
        } = self;
        step(scene, forces, parameters, engine.resolution)
    }

    /// Feed one frame's wall time. Runs as many fixed steps as the clock pays
    /// out, or none while paused. Returns the number of steps taken.
    pub fn advance(&mut self, frame_dt: f64) -> u32 {
        if self.engine.paused {
            return 0;
        }

        let n = self.clock.advance(frame_dt, self.parameters.dt, self.parameters.max_substeps);
        let mut contacts = 0;
        for _ in 0..n {
            contacts += self.step_once().contacts;
        }
        if contacts > 0 {
            debug!("t = {:.3}: {n} steps, {contacts} contacts", self.scene.t);
        }
        n
    }

    pub fn is_paused(&self) -> bool {
        self.engine.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        if paused != self.engine.paused {
            info!("simulation {}", if paused { "paused" } else { "resumed" });
        }
        self.engine.paused = paused;
        // no catch-up burst after resuming
        self.clock.reset();
    }

    pub fn toggle_pause(&mut self) {
        self.set_paused(!self.engine.paused);
    }
}
