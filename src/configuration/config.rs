//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – collision policy, start paused, world size
//! - [`ParametersConfig`] – step size and physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ObstacleConfig`]   – each static floor line
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! Every section except `bodies` and `obstacles` may be left out entirely:
//!
//! ```yaml
//! engine:
//!   resolution: "last_wins"   # or "deepest"
//!   paused: false
//!   width: 1600.0
//!   height: 800.0
//!
//! parameters:
//!   dt: 0.016666666666666666  # fixed step size
//!   gravity: 1200.0           # downward acceleration
//!   restitution: 0.7
//!   settle_speed: 5.0
//!   max_substeps: 8
//!
//! bodies:
//!   - x: [ 300.0, 600.0 ]
//!     radius: 40.0
//!     color: [ 1.0, 0.0, 0.0, 1.0 ]
//!
//! obstacles:
//!   - from: [ 0.0, 100.0 ]
//!     to: [ 1600.0, 100.0 ]
//!     color: [ 0.5, 1.0, 0.3, 1.0 ]
//!     kind: "floor"           # or "segment"
//! ```

use serde::Deserialize;

use crate::simulation::collision::ResolutionPolicy;
use crate::simulation::engine::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::simulation::params::{
    DEFAULT_DT, DEFAULT_GRAVITY, DEFAULT_MAX_SUBSTEPS, DEFAULT_RESTITUTION, DEFAULT_SETTLE_SPEED,
};
use crate::simulation::states::ObstacleKind;

/// How bodies overlapping several floors in one step are resolved
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResolutionConfig {
    #[default]
    #[serde(rename = "last_wins")] // every overlapping floor in list order, last one wins
    LastWins,

    #[serde(rename = "deepest")] // only the floor with the largest penetration
    Deepest,
}

impl From<ResolutionConfig> for ResolutionPolicy {
    fn from(c: ResolutionConfig) -> Self {
        match c {
            ResolutionConfig::LastWins => ResolutionPolicy::LastWins,
            ResolutionConfig::Deepest => ResolutionPolicy::Deepest,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ObstacleKindConfig {
    #[default]
    #[serde(rename = "floor")] // infinite horizontal floor at the first endpoint's y
    Floor,

    #[serde(rename = "segment")] // floor limited to the segment's x span
    Segment,
}

impl From<ObstacleKindConfig> for ObstacleKind {
    fn from(c: ObstacleKindConfig) -> Self {
        match c {
            ObstacleKindConfig::Floor => ObstacleKind::InfiniteFloor,
            ObstacleKindConfig::Segment => ObstacleKind::Segment,
        }
    }
}

/// High-level engine configuration
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub resolution: ResolutionConfig, // collision resolution policy
    pub paused: bool, // start with the simulation paused
    pub width: f64, // world / window width
    pub height: f64, // world / window height
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            resolution: ResolutionConfig::default(),
            paused: false,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub dt: f64,           // fixed step size in seconds
    pub gravity: f64,      // downward acceleration magnitude
    pub restitution: f64,  // vertical speed kept after a bounce
    pub settle_speed: f64, // slower bounces come to rest
    pub max_substeps: u32, // most steps per rendered frame
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            gravity: DEFAULT_GRAVITY,
            restitution: DEFAULT_RESTITUTION,
            settle_speed: DEFAULT_SETTLE_SPEED,
            max_substeps: DEFAULT_MAX_SUBSTEPS,
        }
    }
}

fn default_color() -> [f32; 4] {
    [1.0, 1.0, 1.0, 1.0]
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: [f64; 2], // initial position
    pub radius: f64, // must be positive
    #[serde(default = "default_color")]
    pub color: [f32; 4], // rgba in [0, 1]
}

/// Configuration for a static line
#[derive(Deserialize, Debug, Clone)]
pub struct ObstacleConfig {
    pub from: [f64; 2], // (x1, y1); y1 is the floor height
    pub to: [f64; 2], // (x2, y2)
    #[serde(default = "default_color")]
    pub color: [f32; 4],
    #[serde(default)]
    pub kind: ObstacleKindConfig,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>, // spawned in file order
    #[serde(default)]
    pub obstacles: Vec<ObstacleConfig>, // spawned in file order
}
