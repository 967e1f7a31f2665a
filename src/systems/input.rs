//! Input systems.
//!
//! - [`update_input_state`] reads the keyboard from Raylib each frame and
//!   writes the results into [`InputState`]. F11 toggles debug mode via
//!   [`SwitchDebugEvent`].
//! - [`update_pointer_state`] snapshots the mouse and every touch point in
//!   render-target coordinates into [`PointerState`].
use bevy_ecs::prelude::*;
use raylib::prelude::{MouseButton, RaylibHandle};

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::resources::touch::PointerState;
use crate::resources::windowsize::WindowSize;

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<RaylibHandle>,
    mut commands: Commands,
) {
    for state in input.states_mut() {
        let key = state.key_binding;
        state.update(
            rl.is_key_down(key),
            rl.is_key_pressed(key),
            rl.is_key_released(key),
        );
    }

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
}

/// Poll the mouse and touch points, mapped through the letterbox.
pub fn update_pointer_state(
    mut pointer: ResMut<PointerState>,
    rl: NonSend<RaylibHandle>,
    window: Res<WindowSize>,
    screen: Res<ScreenSize>,
) {
    let (w, h) = (screen.w as u32, screen.h as u32);

    pointer.focused = rl.is_window_focused();
    pointer.active.clear();

    let mouse = window.window_to_game_pos(rl.get_mouse_position(), w, h);
    pointer.hover = Some(mouse);
    if rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT) {
        pointer.active.push(mouse);
    }
    for i in 0..rl.get_touch_point_count() {
        let touch = rl.get_touch_position(i as _);
        pointer.active.push(window.window_to_game_pos(touch, w, h));
    }
}
