//! Contact resolution for moving bodies.
//!
//! [`solid_collision_system`] pushes bodies out of [`Solid`] colliders and
//! [`world_bounds_system`] keeps bodies tagged [`CollideWorldBounds`] inside
//! [`WorldBounds`]. Both record the touched side in [`Blocked`] and reflect
//! the velocity on that axis through the body's bounce.
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::blocked::{Blocked, CollideWorldBounds};
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::solid::Solid;
use crate::resources::physics::{PhysicsState, WorldBounds};

/// Rebounds slower than this (px/s) come to rest.
pub const REST_SPEED: f32 = 60.0;

/// Velocity after hitting a surface head-on.
pub fn rebound(velocity: f32, bounce: f32) -> f32 {
    let v = -velocity * bounce;
    if v.abs() < REST_SPEED { 0.0 } else { v }
}

/// Apply a separating push to a body and record the contact.
fn resolve(
    push: Vector2,
    position: &mut MapPosition,
    rigidbody: &mut RigidBody,
    blocked: Option<&mut Blocked>,
) {
    position.pos += push;
    let bounce = rigidbody.bounce;
    let mut sides = Blocked::default();

    if push.y < 0.0 {
        sides.down = true;
        if rigidbody.velocity.y > 0.0 {
            rigidbody.velocity.y = rebound(rigidbody.velocity.y, bounce);
        }
    } else if push.y > 0.0 {
        sides.up = true;
        if rigidbody.velocity.y < 0.0 {
            rigidbody.velocity.y = rebound(rigidbody.velocity.y, bounce);
        }
    }
    if push.x < 0.0 {
        sides.right = true;
        if rigidbody.velocity.x > 0.0 {
            rigidbody.velocity.x = rebound(rigidbody.velocity.x, bounce);
        }
    } else if push.x > 0.0 {
        sides.left = true;
        if rigidbody.velocity.x < 0.0 {
            rigidbody.velocity.x = rebound(rigidbody.velocity.x, bounce);
        }
    }

    if let Some(blocked) = blocked {
        blocked.up |= sides.up;
        blocked.down |= sides.down;
        blocked.left |= sides.left;
        blocked.right |= sides.right;
    }
}

pub fn solid_collision_system(
    mut bodies: Query<
        (
            &mut MapPosition,
            &mut RigidBody,
            &BoxCollider,
            Option<&mut Blocked>,
        ),
        Without<Solid>,
    >,
    solids: Query<(&MapPosition, &BoxCollider), With<Solid>>,
    physics: Res<PhysicsState>,
) {
    if physics.is_paused() {
        return;
    }
    for (mut position, mut rigidbody, collider, mut blocked) in bodies.iter_mut() {
        for (solid_position, solid_collider) in solids.iter() {
            if let Some(push) = collider.separation(position.pos, solid_collider, solid_position.pos)
            {
                resolve(
                    push,
                    &mut position,
                    &mut rigidbody,
                    blocked.as_deref_mut(),
                );
            }
        }
    }
}

pub fn world_bounds_system(
    mut bodies: Query<
        (
            &mut MapPosition,
            &mut RigidBody,
            &BoxCollider,
            Option<&mut Blocked>,
        ),
        With<CollideWorldBounds>,
    >,
    bounds: Res<WorldBounds>,
    physics: Res<PhysicsState>,
) {
    if physics.is_paused() {
        return;
    }
    for (mut position, mut rigidbody, collider, mut blocked) in bodies.iter_mut() {
        let (min, max) = collider.aabb(position.pos);
        let push = bounds.correction(min, max);
        if push != Vector2::zero() {
            resolve(
                push,
                &mut position,
                &mut rigidbody,
                blocked.as_deref_mut(),
            );
        }
    }
}
