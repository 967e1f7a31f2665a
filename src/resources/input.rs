//! Keyboard state for the frame.
//!
//! Left/right arrows run, up arrow jumps, Escape quits and F11 toggles the
//! collider overlay. Touch input lives apart in
//! [`TouchInput`](super::touch::TouchInput).
use bevy_ecs::prelude::*;
use raylib::prelude::*;

/// One bound key and what it did this frame.
#[derive(Debug, Clone, Copy)]
pub struct BoolState {
    /// Held down.
    pub active: bool,
    pub just_pressed: bool,
    pub just_released: bool,
    pub key_binding: KeyboardKey,
}

impl BoolState {
    /// Inactive state bound to `key`.
    pub fn bound(key: KeyboardKey) -> Self {
        Self {
            key_binding: key,
            ..Self::default()
        }
    }

    /// Record this frame's key state.
    pub fn update(&mut self, down: bool, pressed: bool, released: bool) {
        self.active = down;
        self.just_pressed = pressed;
        self.just_released = released;
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: KeyboardKey::KEY_NULL,
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub left: BoolState,
    pub right: BoolState,
    pub jump: BoolState,
    pub action_back: BoolState,
    pub mode_debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            left: BoolState::bound(KeyboardKey::KEY_LEFT),
            right: BoolState::bound(KeyboardKey::KEY_RIGHT),
            jump: BoolState::bound(KeyboardKey::KEY_UP),
            action_back: BoolState::bound(KeyboardKey::KEY_ESCAPE),
            mode_debug: BoolState::bound(KeyboardKey::KEY_F11),
        }
    }
}

impl InputState {
    /// All bindings, for polling in one pass.
    pub fn states_mut(&mut self) -> [&mut BoolState; 5] {
        [
            &mut self.left,
            &mut self.right,
            &mut self.jump,
            &mut self.action_back,
            &mut self.mode_debug,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.active);
        assert!(!bs.just_pressed);
        assert!(!bs.just_released);
        assert_eq!(bs.key_binding, KeyboardKey::KEY_NULL);
    }

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.left.key_binding, KeyboardKey::KEY_LEFT);
        assert_eq!(input.right.key_binding, KeyboardKey::KEY_RIGHT);
        assert_eq!(input.jump.key_binding, KeyboardKey::KEY_UP);
        assert_eq!(input.action_back.key_binding, KeyboardKey::KEY_ESCAPE);
        assert_eq!(input.mode_debug.key_binding, KeyboardKey::KEY_F11);
        assert!(!input.left.active);
        assert!(!input.jump.just_pressed);
    }

    #[test]
    fn test_update_records_frame_state() {
        let mut input = InputState::default();
        input.jump.update(true, true, false);
        assert!(input.jump.active);
        assert!(input.jump.just_pressed);
        input.jump.update(true, false, false);
        assert!(input.jump.active);
        assert!(!input.jump.just_pressed);
    }
}
