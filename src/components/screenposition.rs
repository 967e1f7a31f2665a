//! Position of HUD and control-strip elements, in render-target pixels.
//!
//! Unlike [`MapPosition`](super::mapposition::MapPosition) this covers the
//! whole 960×720 target, strip included.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Copy, Debug, Default)]
pub struct ScreenPosition {
    pub pos: Vector2,
}

impl ScreenPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2::new(x, y),
        }
    }
}
