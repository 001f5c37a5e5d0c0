//! Error type shared by the scene store and scenario building.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    /// A body was spawned with a radius that is not a positive, finite number
    #[error("invalid geometry: body radius must be positive and finite, got {radius}")]
    InvalidGeometry { radius: f64 },

    /// A simulation parameter is out of its allowed range
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}
