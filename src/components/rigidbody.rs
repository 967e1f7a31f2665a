//! Kinematic body.
//!
//! Velocity plus named accelerations. The player carries `"gravity"`;
//! memories, spikes and the goal have no body at all and never move.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;
use rustc_hash::FxHashMap;

/// Name of the force used for world gravity.
pub const GRAVITY_FORCE: &str = "gravity";

/// Integrated by the movement system; contacts rewrite the velocity.
#[derive(Component, Clone, Debug, Default)]
pub struct RigidBody {
    /// px/s
    pub velocity: Vector2,
    /// Named accelerations in px/s², summed every step.
    pub forces: FxHashMap<String, Vector2>,
    /// Share of the speed kept, reversed, on hitting a solid or the bounds.
    pub bounce: f32,
}

impl RigidBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bounce(mut self, bounce: f32) -> Self {
        self.bounce = bounce.max(0.0);
        self
    }

    /// Downward acceleration of `gravity` px/s².
    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.add_force(GRAVITY_FORCE, Vector2::new(0.0, gravity));
        self
    }

    /// Insert or replace a force.
    pub fn add_force(&mut self, name: &str, value: Vector2) {
        self.forces.insert(name.to_string(), value);
    }

    pub fn total_acceleration(&self) -> Vector2 {
        self.forces
            .values()
            .fold(Vector2::zero(), |acc, f| acc + *f)
    }

    pub fn stop(&mut self) {
        self.velocity = Vector2::zero();
    }
}
