use bevy_ecs::prelude::*;

use crate::components::blocked::Blocked;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::physics::PhysicsState;
use crate::resources::worldtime::WorldTime;

/// Integrate forces into velocity, then velocity into position.
///
/// Contact flags are cleared here and set again by the separation systems
/// that run right after.
pub fn movement(
    mut query: Query<(&mut MapPosition, &mut RigidBody, Option<&mut Blocked>)>,
    time: Res<WorldTime>,
    physics: Res<PhysicsState>,
) {
    let dt = time.delta;
    if physics.is_paused() || dt <= 0.0 {
        return;
    }
    for (mut position, mut rigidbody, blocked) in query.iter_mut() {
        if let Some(mut blocked) = blocked {
            blocked.reset();
        }
        let acceleration = rigidbody.total_acceleration();
        rigidbody.velocity += acceleration * dt;
        let delta = rigidbody.velocity * dt;
        position.pos += delta;
    }
}
