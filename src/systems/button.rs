//! On-screen button interaction.
//!
//! Updates [`Button::hovered`] and [`Button::pressed`] from the frame's
//! [`PointerState`], and triggers [`ButtonPressedEvent`] on the frame a
//! pointer goes down on a button.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::button::Button;
use crate::components::screenposition::ScreenPosition;
use crate::events::button::ButtonPressedEvent;
use crate::resources::touch::PointerState;

pub fn button_system(
    mut buttons: Query<(Entity, &mut Button, &ScreenPosition)>,
    pointer: Res<PointerState>,
    mut commands: Commands,
) {
    for (entity, mut button, position) in buttons.iter_mut() {
        let center = position.pos;
        let hovered = pointer
            .hover
            .is_some_and(|p| button.contains(center, p));
        let pressed =
            pointer.focused && pointer.active.iter().any(|p| button.contains(center, *p));

        if pressed && !button.pressed {
            debug!("Button '{}' pressed", button.id);
            commands.trigger(ButtonPressedEvent { entity });
        }

        if button.hovered != hovered {
            button.hovered = hovered;
        }
        if button.pressed != pressed {
            button.pressed = pressed;
        }
    }
}
