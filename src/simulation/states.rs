//! Core state types for the bouncing simulation.
//!
//! - `Body`: a dynamic circle (position, velocity, radius, color)
//! - `Obstacle`: a static line, used as a horizontal floor at `y1`
//!
//! World units are pixels with Y pointing up, origin at the bottom-left.

use nalgebra::Vector2;

use crate::error::SimError;

pub type NVec2 = Vector2<f64>;

/// Display color, each channel in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl From<[f32; 4]> for Rgba {
    fn from(c: [f32; 4]) -> Self {
        Rgba::new(c[0], c[1], c[2], c[3])
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    radius: f64,
    pub color: Rgba,
}

impl Body {
    /// New body at rest. The radius must be positive and finite.
    pub fn new(x: NVec2, radius: f64, color: Rgba) -> Result<Self, SimError> {
        // `!(r > 0)` also catches NaN
        if !(radius > 0.0) || !radius.is_finite() {
            return Err(SimError::InvalidGeometry { radius });
        }
        Ok(Self {
            x,
            v: NVec2::zeros(),
            radius,
            color,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Y of the lowest point of the circle
    pub fn bottom(&self) -> f64 {
        self.x.y - self.radius
    }

    pub fn contains(&self, p: NVec2) -> bool {
        (p - self.x).norm_squared() <= self.radius * self.radius
    }
}

/// How an obstacle's extent is taken into account by collision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObstacleKind {
    /// Infinite horizontal floor at `y1`; endpoints are only drawn
    #[default]
    InfiniteFloor,
    /// Floor at `y1` that only catches bodies above its horizontal span
    Segment,
}

#[derive(Debug, Clone)]
pub struct Obstacle {
    pub a: NVec2, // (x1, y1)
    pub b: NVec2, // (x2, y2)
    pub color: Rgba,
    pub kind: ObstacleKind,
}

impl Obstacle {
    /// Collision threshold. Only the first endpoint's Y is used, whatever the
    /// line's orientation.
    pub fn floor_y(&self) -> f64 {
        self.a.y
    }

    /// Whether the obstacle can catch `body` horizontally
    pub fn covers(&self, body: &Body) -> bool {
        match self.kind {
            ObstacleKind::InfiniteFloor => true,
            ObstacleKind::Segment => {
                let lo = self.a.x.min(self.b.x) - body.radius;
                let hi = self.a.x.max(self.b.x) + body.radius;
                (lo..=hi).contains(&body.x.x)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_radius() {
        for r in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = Body::new(NVec2::zeros(), r, Rgba::WHITE).unwrap_err();
            assert!(matches!(err, SimError::InvalidGeometry { .. }), "radius {r} accepted");
        }
    }

    #[test]
    fn segment_covers_only_its_span() {
        let body = |x: f64| Body::new(NVec2::new(x, 50.0), 5.0, Rgba::WHITE).unwrap();
        let seg = Obstacle {
            a: NVec2::new(100.0, 0.0),
            b: NVec2::new(20.0, 0.0),
            color: Rgba::WHITE,
            kind: ObstacleKind::Segment,
        };

        assert!(seg.covers(&body(60.0)));
        assert!(seg.covers(&body(104.0))); // rim still over the end
        assert!(!seg.covers(&body(106.0)));
        assert!(!seg.covers(&body(10.0)));

        let floor = Obstacle { kind: ObstacleKind::InfiniteFloor, ..seg };
        assert!(floor.covers(&body(-1.0e6)));
    }
}
