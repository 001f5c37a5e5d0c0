pub mod error;
pub mod simulation;
pub mod configuration;
#[cfg(feature = "viewer")]
pub mod visualization;
pub mod benchmark;

pub use error::SimError;

pub use simulation::states::{Body, NVec2, Obstacle, ObstacleKind, Rgba};
pub use simulation::scene::{BodyHandle, ObstacleHandle, Scene};
pub use simulation::forces::{Acceleration, AccelSet};
pub use simulation::collision::{resolve_body, ResolutionPolicy};
pub use simulation::integrator::{step, StepReport};
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;
pub use simulation::clock::FixedClock;
pub use simulation::scenario::Scenario;

pub use configuration::config::{BodyConfig, EngineConfig, ObstacleConfig, ParametersConfig, ScenarioConfig};

#[cfg(feature = "viewer")]
pub use visualization::vis2d::run_2d;

pub use benchmark::benchmark::bench_step;
