//! High-level runtime engine settings
//!
//! Collision resolution policy, pause flag and the world bounds the viewer
//! opens its window with

use crate::simulation::collision::ResolutionPolicy;

pub const DEFAULT_WIDTH: f64 = 1600.0;
pub const DEFAULT_HEIGHT: f64 = 800.0;

#[derive(Debug, Clone)]
pub struct Engine {
    pub resolution: ResolutionPolicy, // how overlapping floors are resolved
    pub paused: bool, // checked by the caller before stepping
    pub width: f64, // world width, also the window width in pixels
    pub height: f64, // world height
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            resolution: ResolutionPolicy::default(),
            paused: false,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}
