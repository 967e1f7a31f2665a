//! Touch/pointer control state.
//!
//! [`TouchInput`] is the on-screen button counterpart of
//! [`InputState`](super::input::InputState): three held flags mirrored from
//! the control buttons, plus the previous jump state so a held jump button
//! only fires once.
//!
//! [`PointerState`] is the raw pointer snapshot of the frame (mouse and touch
//! points already mapped to render coordinates), written by the input system
//! and consumed by the button system.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

/// Keys the on-screen control buttons can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchKey {
    Left,
    Right,
    Jump,
}

/// Held state of the on-screen controls.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TouchInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Jump state seen by the last [`TouchInput::just_pressed_jump`] call.
    pub prev_jump: bool,
}

impl TouchInput {
    pub fn set(&mut self, key: TouchKey, down: bool) {
        match key {
            TouchKey::Left => self.left = down,
            TouchKey::Right => self.right = down,
            TouchKey::Jump => self.jump = down,
        }
    }

    pub fn get(&self, key: TouchKey) -> bool {
        match key {
            TouchKey::Left => self.left,
            TouchKey::Right => self.right,
            TouchKey::Jump => self.jump,
        }
    }

    /// Release every control (focus lost).
    pub fn reset(&mut self) {
        self.left = false;
        self.right = false;
        self.jump = false;
    }

    /// Rising edge of the jump button. Call once per frame.
    pub fn just_pressed_jump(&mut self) -> bool {
        let now = self.jump;
        let pressed = now && !self.prev_jump;
        self.prev_jump = now;
        pressed
    }
}

/// Pointer snapshot for the current frame.
#[derive(Resource, Debug, Clone)]
pub struct PointerState {
    /// Mouse position, used for hover.
    pub hover: Option<Vector2>,
    /// Positions of every pointer currently pressed (mouse button or finger).
    pub active: Vec<Vector2>,
    /// Whether the window has input focus.
    pub focused: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            hover: None,
            active: Vec::new(),
            focused: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut t = TouchInput::default();
        t.set(TouchKey::Left, true);
        assert!(t.get(TouchKey::Left));
        assert!(!t.get(TouchKey::Right));
        t.set(TouchKey::Left, false);
        assert!(!t.left);
    }

    #[test]
    fn test_jump_is_edge_triggered() {
        let mut t = TouchInput::default();
        assert!(!t.just_pressed_jump());
        t.set(TouchKey::Jump, true);
        assert!(t.just_pressed_jump());
        // Held: no repeat
        assert!(!t.just_pressed_jump());
        assert!(!t.just_pressed_jump());
        t.set(TouchKey::Jump, false);
        assert!(!t.just_pressed_jump());
        t.set(TouchKey::Jump, true);
        assert!(t.just_pressed_jump());
    }

    #[test]
    fn test_reset_releases_keys_but_keeps_edge_memory() {
        let mut t = TouchInput {
            left: true,
            right: true,
            jump: true,
            prev_jump: true,
        };
        t.reset();
        assert!(!t.left && !t.right && !t.jump);
        assert!(t.prev_jump);
        assert!(!t.just_pressed_jump());
        assert!(!t.prev_jump);
    }

    #[test]
    fn test_pointer_default_is_focused_and_idle() {
        let p = PointerState::default();
        assert!(p.focused);
        assert!(p.active.is_empty());
        assert!(p.hover.is_none());
    }
}
