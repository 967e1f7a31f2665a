//! Physics world resources.
//!
//! [`PhysicsState`] gates every physics system; the win screen pauses it.
//! [`WorldBounds`] is the rectangle bodies with
//! [`CollideWorldBounds`](crate::components::blocked::CollideWorldBounds)
//! are kept inside.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

/// Global on/off switch for movement, separation and overlap detection.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhysicsState {
    paused: bool,
}

impl PhysicsState {
    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

/// Axis-aligned play area in world pixels.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub min: Vector2,
    pub max: Vector2,
}

impl WorldBounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vector2::new(x, y),
            max: Vector2::new(x + width, y + height),
        }
    }

    /// Translation that brings the box `[min, max]` back inside the bounds.
    ///
    /// A box larger than the bounds is aligned to the top/left edge.
    pub fn correction(&self, min: Vector2, max: Vector2) -> Vector2 {
        let mut push = Vector2::zero();
        if max.x > self.max.x {
            push.x = self.max.x - max.x;
        }
        if min.x + push.x < self.min.x {
            push.x = self.min.x - min.x;
        }
        if max.y > self.max.y {
            push.y = self.max.y - max.y;
        }
        if min.y + push.y < self.min.y {
            push.y = self.min.y - min.y;
        }
        push
    }
}
