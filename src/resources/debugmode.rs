//! Debug toggle resource.
//!
//! The mere presence of this resource indicates that the collider overlay
//! should be drawn. Remove it to disable debug behavior.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the renderer draws collider outlines and
/// the frame rate.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct DebugMode;
