//! Platformer movement intent.
//!
//! Entities carrying [`PlatformerControlled`] are driven by
//! [`platformer_controller`](crate::systems::platformer::platformer_controller):
//! horizontal velocity follows the left/right input and a jump sets an
//! upward velocity when the body stands on something.

use bevy_ecs::prelude::Component;

/// Horizontal speed and jump impulse applied from player input.
#[derive(Component, Clone, Copy, Debug)]
pub struct PlatformerControlled {
    /// Horizontal speed in world units per second while left/right is held.
    pub speed: f32,
    /// Upward speed set when jumping from the ground.
    pub jump_speed: f32,
}

impl PlatformerControlled {
    pub fn new(speed: f32, jump_speed: f32) -> Self {
        Self { speed, jump_speed }
    }
}
