//! Offscreen framebuffer the game draws into.
//!
//! Everything is rendered at a fixed 960×720 (the play area plus the control
//! strip) and the result is scaled into the window by the render system.

use raylib::ffi::{self, TextureFilter};
use raylib::prelude::*;

/// Non-send: holds a GPU texture owned by the main thread.
pub struct RenderTarget {
    pub texture: RenderTexture2D,
    pub game_width: u32,
    pub game_height: u32,
}

impl RenderTarget {
    pub fn new(
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        width: u32,
        height: u32,
    ) -> Result<Self, String> {
        let texture = load(rl, th, width, height)?;
        Ok(Self {
            texture,
            game_width: width,
            game_height: height,
        })
    }

    /// Whole texture, flipped vertically (render textures are stored upside down).
    pub fn source_rect(&self) -> Rectangle {
        Rectangle::new(
            0.0,
            0.0,
            self.game_width as f32,
            -(self.game_height as f32),
        )
    }
}

/// Load a render texture with bilinear scaling.
fn load(
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    width: u32,
    height: u32,
) -> Result<RenderTexture2D, String> {
    let texture = rl
        .load_render_texture(th, width, height)
        .map_err(|e| format!("Failed to create {}x{} render texture: {}", width, height, e))?;
    unsafe {
        ffi::SetTextureFilter(
            texture.texture,
            TextureFilter::TEXTURE_FILTER_BILINEAR as i32,
        );
    }
    Ok(texture)
}
