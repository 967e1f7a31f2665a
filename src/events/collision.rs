//! Collision event type.
//!
//! The collision detector emits [`CollisionEvent`] whenever two entities with
//! colliders overlap. The rule observer in
//! [`crate::systems::collision::collision_observer`] reacts to it by running
//! the matching [`CollisionRule`](crate::components::collision::CollisionRule)
//! callbacks.
use bevy_ecs::prelude::*;

/// Event fired when two entities with BoxCollider overlap.
///
/// The two fields, [`CollisionEvent::a`] and [`CollisionEvent::b`], are the
/// entity IDs of the participants. No ordering guarantees are provided.
#[derive(Event, Debug, Clone, Copy)]
pub struct CollisionEvent {
    pub a: Entity,
    pub b: Entity,
}
