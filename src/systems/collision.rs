//! Overlap detection and rule dispatch.
//!
//! [`collision_detector`] reports every overlapping pair of non-solid
//! colliders where at least one side can move, as a [`CollisionEvent`].
//! [`collision_observer`] looks the pair up in the [`CollisionRule`] entities
//! and runs the matching callbacks.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::boxcollider::BoxCollider;
use crate::components::collision::{CollisionCallback, CollisionContext, CollisionRule};
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::solid::Solid;
use crate::events::collision::CollisionEvent;
use crate::resources::physics::PhysicsState;

pub fn collision_detector(
    query: Query<(Entity, &MapPosition, &BoxCollider, Has<RigidBody>), Without<Solid>>,
    physics: Res<PhysicsState>,
    mut commands: Commands,
) {
    if physics.is_paused() {
        return;
    }
    for [(entity_a, position_a, collider_a, dynamic_a), (entity_b, position_b, collider_b, dynamic_b)] in
        query.iter_combinations()
    {
        if !dynamic_a && !dynamic_b {
            continue;
        }
        if collider_a.overlaps(position_a.pos, collider_b, position_b.pos) {
            commands.trigger(CollisionEvent {
                a: entity_a,
                b: entity_b,
            });
        }
    }
}

pub fn collision_observer(
    trigger: On<CollisionEvent>,
    rules: Query<&CollisionRule>,
    mut ctx: CollisionContext,
) {
    let CollisionEvent { a, b } = *trigger.event();

    let (Ok(group_a), Ok(group_b)) = (ctx.groups.get(a), ctx.groups.get(b)) else {
        return;
    };
    let (group_a, group_b) = (group_a.name().to_string(), group_b.name().to_string());

    let matched: Vec<(CollisionCallback, bool)> = rules
        .iter()
        .filter_map(|rule| {
            rule.match_order(&group_a, &group_b)
                .map(|swapped| (rule.callback, swapped))
        })
        .collect();

    for (callback, swapped) in matched {
        debug!("Collision rule {} x {} fired", group_a, group_b);
        if swapped {
            callback(b, a, &mut ctx);
        } else {
            callback(a, b, &mut ctx);
        }
    }
}
