//! Flat-colored primitive shapes.
//!
//! Level pieces have no image assets: platforms, spikes, memories and the
//! goal door are drawn from a [`Shape`] centred on the entity position.
//! Shapes also back the win screen overlay.

use bevy_ecs::prelude::Component;
use raylib::prelude::{Color, Vector2};

/// Primitive drawn centred on the entity's position.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// Rectangle with corners rounded by `radius` pixels.
    RoundedRect {
        width: f32,
        height: f32,
        radius: f32,
        color: Color,
    },
    /// Plain rectangle.
    Rect {
        width: f32,
        height: f32,
        color: Color,
    },
    /// Filled circle.
    Circle { radius: f32, color: Color },
    /// Upward-pointing isosceles triangle inscribed in `width` x `height`.
    Triangle {
        width: f32,
        height: f32,
        color: Color,
    },
}

impl Shape {
    /// Bounding size of the shape.
    pub fn size(&self) -> Vector2 {
        match *self {
            Shape::RoundedRect { width, height, .. }
            | Shape::Rect { width, height, .. }
            | Shape::Triangle { width, height, .. } => Vector2::new(width, height),
            Shape::Circle { radius, .. } => Vector2::new(radius * 2.0, radius * 2.0),
        }
    }

    pub fn color(&self) -> Color {
        match *self {
            Shape::RoundedRect { color, .. }
            | Shape::Rect { color, .. }
            | Shape::Circle { color, .. }
            | Shape::Triangle { color, .. } => color,
        }
    }

    /// Triangle vertices around `center`, counter-clockwise as raylib expects:
    /// apex, bottom-left, bottom-right.
    pub fn triangle_points(center: Vector2, width: f32, height: f32) -> [Vector2; 3] {
        [
            Vector2::new(center.x, center.y - height * 0.5),
            Vector2::new(center.x - width * 0.5, center.y + height * 0.5),
            Vector2::new(center.x + width * 0.5, center.y + height * 0.5),
        ]
    }
}
