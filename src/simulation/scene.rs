//! Scene store: owns the bodies and obstacles of one simulation run.
//!
//! Both lists are append-only. Views are handed out as slices so callers can
//! mutate elements (the stepper, the viewer's drag) but never insert or remove,
//! which keeps handles valid and iteration in insertion order.

use crate::error::SimError;
use crate::simulation::states::{Body, NVec2, Obstacle, ObstacleKind, Rgba};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyHandle(usize);

impl BodyHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObstacleHandle(usize);

impl ObstacleHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Default)]
pub struct Scene {
    bodies: Vec<Body>,
    obstacles: Vec<Obstacle>,
    pub t: f64,     // simulated time
    pub steps: u64, // completed steps
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a body at rest. Fails with `InvalidGeometry` for a non-positive radius.
    pub fn spawn_body(&mut self, x: NVec2, radius: f64, color: Rgba) -> Result<BodyHandle, SimError> {
        let body = Body::new(x, radius, color)?;
        self.bodies.push(body);
        Ok(BodyHandle(self.bodies.len() - 1))
    }

    /// Append an infinite floor at `y1`
    pub fn spawn_obstacle(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Rgba) -> ObstacleHandle {
        self.spawn_obstacle_of(ObstacleKind::InfiniteFloor, x1, y1, x2, y2, color)
    }

    pub fn spawn_obstacle_of(
        &mut self,
        kind: ObstacleKind,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Rgba,
    ) -> ObstacleHandle {
        self.obstacles.push(Obstacle {
            a: NVec2::new(x1, y1),
            b: NVec2::new(x2, y2),
            color,
            kind,
        });
        ObstacleHandle(self.obstacles.len() - 1)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Disjoint borrows for the stepper: bodies mutably, obstacles shared
    pub fn split_mut(&mut self) -> (&mut [Body], &[Obstacle]) {
        (&mut self.bodies, &self.obstacles)
    }

    pub fn body(&self, h: BodyHandle) -> Option<&Body> {
        self.bodies.get(h.0)
    }

    pub fn body_mut(&mut self, h: BodyHandle) -> Option<&mut Body> {
        self.bodies.get_mut(h.0)
    }

    pub fn obstacle(&self, h: ObstacleHandle) -> Option<&Obstacle> {
        self.obstacles.get(h.0)
    }

    /// Handles of every body, in insertion order
    pub fn handles(&self) -> impl Iterator<Item = BodyHandle> {
        (0..self.bodies.len()).map(BodyHandle)
    }

    /// Topmost (most recently spawned) body whose disc contains `p`
    pub fn pick(&self, p: NVec2) -> Option<BodyHandle> {
        self.bodies.iter().rposition(|b| b.contains(p)).map(BodyHandle)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_preserves_insertion_order() {
        let mut scene = Scene::new();
        let a = scene.spawn_body(NVec2::new(1.0, 1.0), 1.0, Rgba::WHITE).unwrap();
        let b = scene.spawn_body(NVec2::new(2.0, 2.0), 2.0, Rgba::WHITE).unwrap();

        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(scene.bodies()[1].radius(), 2.0);
        assert_eq!(scene.body(a).unwrap().v, NVec2::zeros());
    }

    #[test]
    fn rejected_spawn_leaves_scene_untouched() {
        let mut scene = Scene::new();
        assert!(scene.spawn_body(NVec2::zeros(), 0.0, Rgba::WHITE).is_err());
        assert!(scene.is_empty());
    }

    #[test]
    fn pick_prefers_latest_body() {
        let mut scene = Scene::new();
        scene.spawn_body(NVec2::new(0.0, 0.0), 10.0, Rgba::WHITE).unwrap();
        let top = scene.spawn_body(NVec2::new(5.0, 0.0), 10.0, Rgba::WHITE).unwrap();

        assert_eq!(scene.pick(NVec2::new(2.0, 0.0)), Some(top));
        assert_eq!(scene.pick(NVec2::new(-9.0, 0.0)).map(BodyHandle::index), Some(0));
        assert_eq!(scene.pick(NVec2::new(100.0, 100.0)), None);
    }

    #[test]
    fn spawn_obstacle_defaults_to_infinite_floor() {
        let mut scene = Scene::new();
        let first = scene.spawn_obstacle(0.0, 0.0, 10.0, 0.0, Rgba::WHITE);
        let h = scene.spawn_obstacle(0.0, 100.0, 50.0, 300.0, Rgba::WHITE);
        assert_eq!((first.index(), h.index()), (0, 1));

        let o = scene.obstacle(h).unwrap();
        assert_eq!(o.kind, ObstacleKind::InfiniteFloor);
        assert_eq!(o.floor_y(), 100.0);
    }
}
