//! Collision rules and the context handed to their callbacks.
//!
//! A [`CollisionRule`] pairs two [`Group`] names with a plain function. When
//! the collision detector reports an overlap between members of both groups,
//! the collision observer calls the function with the `group_a` entity first
//! and a [`CollisionContext`] giving access to the world.

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemParam;

use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::gamestate::NextGameState;
use crate::resources::physics::PhysicsState;
use crate::resources::worldsignals::WorldSignals;

/// Everything a collision callback may read or change.
#[derive(SystemParam)]
pub struct CollisionContext<'w, 's> {
    pub commands: Commands<'w, 's>,
    pub groups: Query<'w, 's, &'static Group>,
    pub positions: Query<'w, 's, &'static mut MapPosition>,
    pub rigidbodies: Query<'w, 's, &'static mut RigidBody>,
    pub signals: ResMut<'w, WorldSignals>,
    pub physics: ResMut<'w, PhysicsState>,
    pub next_state: ResMut<'w, NextGameState>,
}

/// Callback signature for collision rules.
///
/// `a` belongs to the rule's `group_a`, `b` to its `group_b`.
pub type CollisionCallback = for<'a, 'w, 's> fn(Entity, Entity, &'a mut CollisionContext<'w, 's>);

#[derive(Component)]
pub struct CollisionRule {
    pub group_a: String,
    pub group_b: String,
    pub callback: CollisionCallback,
}

impl CollisionRule {
    pub fn new(
        group_a: impl Into<String>,
        group_b: impl Into<String>,
        callback: CollisionCallback,
    ) -> Self {
        Self {
            group_a: group_a.into(),
            group_b: group_b.into(),
            callback,
        }
    }

    /// Match two group names in either order.
    ///
    /// Returns `Some(false)` when they match as given, `Some(true)` when they
    /// match swapped, `None` otherwise.
    pub fn match_order(&self, group_a: &str, group_b: &str) -> Option<bool> {
        if self.group_a == group_a && self.group_b == group_b {
            Some(false)
        } else if self.group_a == group_b && self.group_b == group_a {
            Some(true)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_a: Entity, _b: Entity, _ctx: &mut CollisionContext) {}

    #[test]
    fn test_match_order() {
        let rule = CollisionRule::new("player", "memory", noop);
        assert_eq!(rule.match_order("player", "memory"), Some(false));
        assert_eq!(rule.match_order("memory", "player"), Some(true));
        assert_eq!(rule.match_order("player", "spike"), None);
        assert_eq!(rule.match_order("memory", "memory"), None);
    }
}
