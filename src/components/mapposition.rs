//! World-space position component.
//!
//! The [`MapPosition`] component stores the centre of an entity in world
//! (play area) pixels. Colliders, shapes and sprites are laid out around it.
//!
//! For UI elements fixed to the screen, see
//! [`ScreenPosition`](super::screenposition::ScreenPosition).

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// World-space position (centre) of an entity.
#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    /// 2D coordinates in world pixels.
    pub pos: Vector2,
}

impl MapPosition {
    /// Create a MapPosition from x and y.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }

    /// Create a MapPosition from an existing Vector2.
    pub fn from_vec(pos: Vector2) -> Self {
        Self { pos }
    }

    /// Move the entity to a new position.
    pub fn set_pos(&mut self, pos: Vector2) {
        self.pos = pos;
    }
}
