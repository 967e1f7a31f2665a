//! Clickable/touchable on-screen buttons.
//!
//! A [`Button`] is a rectangle centred on its
//! [`ScreenPosition`](super::screenposition::ScreenPosition). The pointer
//! system keeps `hovered` and `pressed` up to date every frame and fires a
//! [`ButtonPressedEvent`](crate::events::button::ButtonPressedEvent) on the
//! press edge.
//!
//! The three control buttons are identified by id (`btnLeft`, `btnRight`,
//! `btnJump`) and receive a [`TouchBinding`] once the scene is up.

use bevy_ecs::prelude::Component;
use raylib::prelude::{Color, Vector2};

use crate::resources::touch::TouchKey;

/// What happens when a button is pressed, besides its touch binding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    /// Open the URL in the system browser.
    OpenUrl(String),
}

#[derive(Component, Clone, Debug)]
pub struct Button {
    /// Identifier used to look the button up (like an element id).
    pub id: String,
    pub size: Vector2,
    pub fill: Color,
    /// Fill used while a pointer hovers or presses the button.
    pub hover_fill: Color,
    pub hovered: bool,
    /// True while any active pointer is inside the button.
    pub pressed: bool,
    pub action: Option<ButtonAction>,
}

impl Button {
    pub fn new(id: impl Into<String>, width: f32, height: f32, fill: Color) -> Self {
        Self {
            id: id.into(),
            size: Vector2::new(width, height),
            fill,
            hover_fill: fill,
            hovered: false,
            pressed: false,
            action: None,
        }
    }

    pub fn with_hover_fill(mut self, hover_fill: Color) -> Self {
        self.hover_fill = hover_fill;
        self
    }

    pub fn with_action(mut self, action: ButtonAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Point containment for a button centred at `center`, edges included.
    pub fn contains(&self, center: Vector2, point: Vector2) -> bool {
        let half = Vector2::new(self.size.x * 0.5, self.size.y * 0.5);
        point.x >= center.x - half.x
            && point.x <= center.x + half.x
            && point.y >= center.y - half.y
            && point.y <= center.y + half.y
    }

    /// Fill to draw this frame.
    pub fn current_fill(&self) -> Color {
        if self.hovered || self.pressed {
            self.hover_fill
        } else {
            self.fill
        }
    }
}

/// Links a button to a key of the [`TouchInput`](crate::resources::touch::TouchInput) resource.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TouchBinding(pub TouchKey);
