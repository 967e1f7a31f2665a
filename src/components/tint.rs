//! Per-entity colour modulation.
//!
//! Shapes, sprites and text are drawn with their own colour multiplied by
//! the entity's [`Tint`]. In practice only the alpha is ever changed: the
//! popup fades through it and the win overlay is a 75% black.

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

/// Defaults to opaque white, which leaves colours untouched.
#[derive(Component, Clone, Debug, Copy)]
pub struct Tint {
    pub color: Color,
}

impl Tint {
    /// White at `alpha` opacity.
    pub fn transparent(alpha: f32) -> Self {
        let mut tint = Self::default();
        tint.set_alpha(alpha);
        tint
    }

    /// Opacity in `[0.0, 1.0]`, clamped.
    pub fn set_alpha(&mut self, alpha: f32) {
        self.color.a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    }

    /// Component-wise product with `other`.
    pub fn multiply(&self, other: Color) -> Color {
        let mul = |a: u8, b: u8| ((a as u16 * b as u16) / 255) as u8;
        Color::new(
            mul(self.color.r, other.r),
            mul(self.color.g, other.g),
            mul(self.color.b, other.b),
            mul(self.color.a, other.a),
        )
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_white() {
        let t = Tint::default();
        assert_eq!(t.color.r, 255);
        assert_eq!(t.color.g, 255);
        assert_eq!(t.color.b, 255);
        assert_eq!(t.color.a, 255);
    }

    #[test]
    fn test_transparent_and_alpha_roundtrip() {
        let t = Tint::transparent(0.0);
        assert_eq!(t.color.a, 0);
        let mut t = Tint::transparent(1.0);
        assert_eq!(t.color.a, 255);
        t.set_alpha(0.5);
        assert_eq!(t.color.a, 128);
    }

    #[test]
    fn test_set_alpha_clamps() {
        let mut t = Tint::default();
        t.set_alpha(3.0);
        assert_eq!(t.color.a, 255);
        t.set_alpha(-1.0);
        assert_eq!(t.color.a, 0);
    }

    #[test]
    fn test_multiply_with_white_is_identity() {
        let t = Tint {
            color: Color::new(100, 150, 200, 255),
        };
        let result = t.multiply(Color::WHITE);
        assert_eq!(result.r, 100);
        assert_eq!(result.g, 150);
        assert_eq!(result.b, 200);
        assert_eq!(result.a, 255);
    }

    #[test]
    fn test_multiply_scales_alpha_only_for_white_tint() {
        let t = Tint::transparent(0.0);
        let result = t.multiply(Color::new(128, 64, 32, 255));
        assert_eq!(result.r, 128);
        assert_eq!(result.g, 64);
        assert_eq!(result.b, 32);
        assert_eq!(result.a, 0);
    }
}
