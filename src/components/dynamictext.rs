use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

/// Where the text is placed relative to its position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAnchor {
    /// Position is the top-left corner of the text.
    #[default]
    TopLeft,
    /// Position is the centre of the text block.
    Center,
}

#[derive(Component, Clone, Debug)]
/// Dynamic text component for rendering variable strings on screen.
pub struct DynamicText {
    /// The text content to render. May contain `\n`.
    pub content: String,
    /// Font size in pixels.
    pub font_size: f32,
    /// Color of the text.
    pub color: Color,
    /// Placement relative to the entity position.
    pub anchor: TextAnchor,
}

impl DynamicText {
    /// Creates a new DynamicText component anchored at its top-left corner.
    pub fn new(content: impl Into<String>, font_size: f32, color: Color) -> Self {
        Self {
            content: content.into(),
            font_size,
            color,
            anchor: TextAnchor::TopLeft,
        }
    }

    /// Builder: centre the text on its position.
    pub fn centered(mut self) -> Self {
        self.anchor = TextAnchor::Center;
        self
    }

    /// Updates the text content.
    pub fn set_content(&mut self, new_content: impl Into<String>) {
        self.content = new_content.into();
    }
}
