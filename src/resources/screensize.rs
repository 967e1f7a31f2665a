//! Render resolution resource.
//!
//! Stores the size of the fixed render target in pixels. Layout code reads
//! it to place UI relative to the play area and the control strip.

use bevy_ecs::prelude::Resource;

/// Render target size in pixels.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
