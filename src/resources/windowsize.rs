//! OS window size and the mapping between window and render target.
//!
//! The 960×720 target is scaled uniformly to fit the window, with bars on
//! the sides or above and below. Pointer positions go the other way through
//! [`WindowSize::window_to_game_pos`].

use bevy_ecs::prelude::Resource;
use raylib::prelude::*;

/// Window dimensions in pixels, refreshed every frame.
#[derive(Resource, Debug, Clone, Copy)]
pub struct WindowSize {
    pub w: i32,
    pub h: i32,
}

impl WindowSize {
    /// Uniform scale that fits a `game_width`×`game_height` image inside the window.
    fn fit_scale(&self, game_width: f32, game_height: f32) -> f32 {
        (self.w as f32 / game_width).min(self.h as f32 / game_height)
    }

    /// Where the render target lands in the window, centred.
    pub fn calculate_letterbox(&self, game_width: u32, game_height: u32) -> Rectangle {
        let (gw, gh) = (game_width as f32, game_height as f32);
        let scale = self.fit_scale(gw, gh);
        let (width, height) = (gw * scale, gh * scale);
        Rectangle {
            x: (self.w as f32 - width) * 0.5,
            y: (self.h as f32 - height) * 0.5,
            width,
            height,
        }
    }

    /// Window pixel to render-target pixel. Points on the bars clamp to the edge.
    pub fn window_to_game_pos(
        &self,
        window_pos: Vector2,
        game_width: u32,
        game_height: u32,
    ) -> Vector2 {
        let area = self.calculate_letterbox(game_width, game_height);
        let (gw, gh) = (game_width as f32, game_height as f32);
        Vector2::new(
            ((window_pos.x - area.x) * gw / area.width).clamp(0.0, gw),
            ((window_pos.y - area.y) * gh / area.height).clamp(0.0, gh),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_same_size_is_identity() {
        let ws = WindowSize { w: 960, h: 720 };
        let lb = ws.calculate_letterbox(960, 720);
        assert!(approx_eq(lb.x, 0.0) && approx_eq(lb.y, 0.0));
        assert!(approx_eq(lb.width, 960.0) && approx_eq(lb.height, 720.0));
        let p = ws.window_to_game_pos(Vector2::new(123.0, 456.0), 960, 720);
        assert!(approx_eq(p.x, 123.0) && approx_eq(p.y, 456.0));
    }

    #[test]
    fn test_wide_window_pillarboxes() {
        // 1920x720 window, 960x720 game: 480px bars each side
        let ws = WindowSize { w: 1920, h: 720 };
        let lb = ws.calculate_letterbox(960, 720);
        assert!(approx_eq(lb.x, 480.0));
        assert!(approx_eq(lb.width, 960.0));
        let p = ws.window_to_game_pos(Vector2::new(500.0, 100.0), 960, 720);
        assert!(approx_eq(p.x, 20.0) && approx_eq(p.y, 100.0));
        // Inside the left bar clamps to the edge
        let p = ws.window_to_game_pos(Vector2::new(10.0, 100.0), 960, 720);
        assert!(approx_eq(p.x, 0.0));
    }

    #[test]
    fn test_tall_window_letterboxes_and_scales() {
        // Portrait phone-like window 480x1000: game scaled by 0.5
        let ws = WindowSize { w: 480, h: 1000 };
        let lb = ws.calculate_letterbox(960, 720);
        assert!(approx_eq(lb.width, 480.0));
        assert!(approx_eq(lb.height, 360.0));
        assert!(approx_eq(lb.y, 320.0));
        let p = ws.window_to_game_pos(Vector2::new(240.0, 500.0), 960, 720);
        assert!(approx_eq(p.x, 480.0) && approx_eq(p.y, 360.0));
    }
}
