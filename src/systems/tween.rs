//! Tween animation system.
//!
//! [`tween_alpha_system`] advances every [`TweenAlpha`] by the frame delta
//! from [`WorldTime`] and writes the eased opacity into the entity's
//! [`Tint`].

use crate::components::tint::Tint;
use crate::components::tween::TweenAlpha;
use crate::resources::worldtime::WorldTime;
use bevy_ecs::prelude::*;
use std::f32::consts::PI;

/// Sine ease-in-out of `t`, clamped to `[0.0, 1.0]`.
pub(crate) fn sine_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    -((PI * t).cos() - 1.0) / 2.0
}

/// Linearly interpolate between two floats.
pub(crate) fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Animate tint opacity based on [`TweenAlpha`] components.
pub fn tween_alpha_system(
    world_time: Res<WorldTime>,
    mut query: Query<(&mut Tint, &mut TweenAlpha)>,
) {
    let dt = world_time.delta.max(0.0);
    for (mut tint, mut tw) in query.iter_mut() {
        if !tw.playing {
            continue;
        }
        tw.advance(dt);
        let t = sine_in_out(tw.progress());
        tint.set_alpha(lerp_f32(tw.from, tw.to, t));
    }
}
