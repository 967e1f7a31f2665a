//! Bridge between the on-screen control buttons and [`TouchInput`].
//!
//! [`bind_touch_controls`] runs once when the level is entered and tags each
//! control button with the key it drives. [`touch_controls_system`] then
//! mirrors the pressed state of tagged buttons into [`TouchInput`] every
//! frame, so the player controller sees touch and keyboard the same way.
use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::components::button::{Button, TouchBinding};
use crate::resources::touch::{PointerState, TouchInput, TouchKey};

/// Control button ids and the key each one drives.
pub const CONTROL_BUTTONS: [(&str, TouchKey); 3] = [
    ("btnLeft", TouchKey::Left),
    ("btnRight", TouchKey::Right),
    ("btnJump", TouchKey::Jump),
];

/// Attach a [`TouchBinding`] to every control button found by id.
///
/// A missing button is reported and skipped.
pub fn bind_touch_controls(mut commands: Commands, buttons: Query<(Entity, &Button)>) {
    for (id, key) in CONTROL_BUTTONS {
        match buttons.iter().find(|(_, button)| button.id == id) {
            Some((entity, _)) => {
                commands.entity(entity).insert(TouchBinding(key));
            }
            None => warn!("Control button not found: {}", id),
        }
    }
    info!("Controls ready");
}

/// Copy bound button states into [`TouchInput`].
///
/// Without window focus every key is released.
pub fn touch_controls_system(
    buttons: Query<(&Button, &TouchBinding)>,
    pointer: Res<PointerState>,
    mut touch: ResMut<TouchInput>,
) {
    if !pointer.focused {
        if touch.left || touch.right || touch.jump {
            touch.reset();
        }
        return;
    }
    for (button, binding) in buttons.iter() {
        if touch.get(binding.0) != button.pressed {
            touch.set(binding.0, button.pressed);
        }
    }
}
