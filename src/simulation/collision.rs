//! Floor collision detection and response.
//!
//! Every obstacle acts as a horizontal floor at its `y1`. A body whose lowest
//! point is strictly below a floor is clamped on top of it and its vertical
//! velocity is reflected with the restitution coefficient. X is never touched.
//!
//! Which floors a body is resolved against in a step is decided by
//! [`ResolutionPolicy`]; [`resolve_body`] is the only entry point the stepper uses.

use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, Obstacle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolutionPolicy {
    /// Resolve against each overlapping obstacle in list order. A later floor
    /// overwrites an earlier one in the same step, and each contact reflects.
    #[default]
    LastWins,
    /// Resolve once against the obstacle with the largest penetration.
    /// Ties go to the earliest obstacle.
    Deepest,
}

/// How far the body's lowest point sits below the obstacle's floor, if at all
pub fn penetration(body: &Body, obstacle: &Obstacle) -> Option<f64> {
    let depth = obstacle.floor_y() - body.bottom();
    (depth > 0.0 && obstacle.covers(body)).then_some(depth)
}

/// Clamp onto `floor_y`, reflect v.y, snap slow bounces to rest
pub fn bounce(body: &mut Body, floor_y: f64, params: &Parameters) {
    body.x.y = floor_y + body.radius();
    body.v.y *= -params.restitution;
    if body.v.y.abs() < params.settle_speed {
        body.v.y = 0.0;
    }
}

/// Resolve `body` against `obstacles`. Returns the number of contacts applied.
pub fn resolve_body(body: &mut Body, obstacles: &[Obstacle], params: &Parameters, policy: ResolutionPolicy) -> usize {
    match policy {
        ResolutionPolicy::LastWins => resolve_in_order(body, obstacles, params),
        ResolutionPolicy::Deepest => resolve_deepest(body, obstacles, params),
    }
}

fn resolve_in_order(body: &mut Body, obstacles: &[Obstacle], params: &Parameters) -> usize {
    let mut contacts = 0;
    for obstacle in obstacles {
        // re-tested after every clamp, so a higher floor later in the list wins
        if penetration(body, obstacle).is_some() {
            bounce(body, obstacle.floor_y(), params);
            contacts += 1;
        }
    }
    contacts
}

/// Index and depth of the obstacle `body` penetrates most. Ties go to the
/// earliest obstacle in the list.
pub fn deepest_contact(body: &Body, obstacles: &[Obstacle]) -> Option<(usize, f64)> {
    let mut deepest: Option<(usize, f64)> = None;
    for (i, obstacle) in obstacles.iter().enumerate() {
        if let Some(depth) = penetration(body, obstacle) {
            if deepest.map_or(true, |(_, d)| depth > d) {
                deepest = Some((i, depth));
            }
        }
    }
    deepest
}

fn resolve_deepest(body: &mut Body, obstacles: &[Obstacle], params: &Parameters) -> usize {
    match deepest_contact(body, obstacles) {
        Some((i, _)) => {
            bounce(body, obstacles[i].floor_y(), params);
            1
        }
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::states::{NVec2, ObstacleKind, Rgba};

    fn floor(y: f64) -> Obstacle {
        Obstacle {
            a: NVec2::new(0.0, y),
            b: NVec2::new(100.0, y),
            color: Rgba::WHITE,
            kind: ObstacleKind::InfiniteFloor,
        }
    }

    fn body_at(y: f64, vy: f64) -> Body {
        let mut b = Body::new(NVec2::new(10.0, y), 10.0, Rgba::WHITE).unwrap();
        b.v = NVec2::new(3.0, vy);
        b
    }

    #[test]
    fn touching_is_not_penetrating() {
        let b = body_at(60.0, 0.0);
        assert_eq!(penetration(&b, &floor(50.0)), None);
        assert_eq!(penetration(&b, &floor(55.0)), Some(5.0));
    }

    #[test]
    fn bounce_clamps_and_reflects() {
        let mut b = body_at(45.0, -100.0);
        bounce(&mut b, 50.0, &Parameters::default());

        assert_eq!(b.x.y, 60.0);
        assert!((b.v.y - 70.0).abs() < 1e-12);
        assert_eq!(b.v.x, 3.0);
    }

    #[test]
    fn policies_disagree_on_stacked_floors() {
        let floors = [floor(100.0), floor(200.0)];
        let p = Parameters::default();

        let mut last = body_at(90.0, -20.0);
        assert_eq!(resolve_body(&mut last, &floors, &p, ResolutionPolicy::LastWins), 2);
        // reflected twice: -20 -> 14 -> -9.8
        assert_eq!(last.x.y, 210.0);
        assert!((last.v.y + 9.8).abs() < 1e-12);

        let mut deep = body_at(90.0, -20.0);
        assert_eq!(resolve_body(&mut deep, &floors, &p, ResolutionPolicy::Deepest), 1);
        assert_eq!(deep.x.y, 210.0);
        assert!((deep.v.y - 14.0).abs() < 1e-12);
    }

    #[test]
    fn deepest_is_order_independent() {
        let p = Parameters::default();
        let mut a = body_at(90.0, -20.0);
        let mut b = body_at(90.0, -20.0);
        resolve_body(&mut a, &[floor(100.0), floor(200.0)], &p, ResolutionPolicy::Deepest);
        resolve_body(&mut b, &[floor(200.0), floor(100.0)], &p, ResolutionPolicy::Deepest);

        assert_eq!(a.x, b.x);
        assert_eq!(a.v, b.v);
    }

    #[test]
    fn deepest_tie_goes_to_earliest_obstacle() {
        let segment = Obstacle {
            a: NVec2::new(0.0, 100.0),
            b: NVec2::new(20.0, 100.0),
            color: Rgba::WHITE,
            kind: ObstacleKind::Segment,
        };
        let b = body_at(95.0, -20.0);

        assert_eq!(deepest_contact(&b, &[floor(100.0), segment.clone()]), Some((0, 15.0)));
        assert_eq!(deepest_contact(&b, &[segment.clone(), floor(100.0)]), Some((0, 15.0)));
        // a strictly deeper floor later in the list still beats the tie
        assert_eq!(deepest_contact(&b, &[segment.clone(), floor(100.0), floor(101.0)]), Some((2, 16.0)));
        assert_eq!(deepest_contact(&body_at(200.0, 0.0), &[segment]), None);
    }
}
