//! Simulation clock.

use bevy_ecs::prelude::Resource;

/// Elapsed and per-frame time in seconds.
///
/// `delta` is already multiplied by `time_scale`.
#[derive(Resource, Debug, Clone, Copy)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
        }
    }
}
