//! Contact flags for dynamic bodies.
//!
//! [`Blocked`] records on which sides a body touched a solid or the world
//! bounds during the latest physics step. The movement system clears it, and
//! the separation systems set it. The player controller reads `down` to allow
//! jumping.
//!
//! [`CollideWorldBounds`] marks bodies that must stay inside the play area.

use bevy_ecs::prelude::Component;

/// Sides on which the body is in contact with something solid.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Blocked {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Blocked {
    /// Clear all contact flags.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when any side is in contact.
    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// Marker: clamp this body inside [`WorldBounds`](crate::resources::physics::WorldBounds).
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct CollideWorldBounds;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_free() {
        let b = Blocked::default();
        assert!(!b.any());
    }

    #[test]
    fn test_reset_clears_all_sides() {
        let mut b = Blocked {
            up: true,
            down: true,
            left: false,
            right: true,
        };
        assert!(b.any());
        b.reset();
        assert_eq!(b, Blocked::default());
    }
}
