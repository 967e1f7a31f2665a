//! Signal binding component for reactive UI updates.
//!
//! Binds a [`DynamicText`](super::dynamictext::DynamicText) to an integer in
//! [`WorldSignals`](crate::resources::worldsignals::WorldSignals). The
//! collected-memories counter uses it:
//!
//! ```ignore
//! commands.spawn((
//!     DynamicText::new("Souvenirs: 0/3", 20.0, Color::WHITE),
//!     SignalBinding::new("collected").with_format("Souvenirs: {}/3"),
//! ));
//! ```

use bevy_ecs::prelude::Component;

/// Keeps a text in sync with a world signal.
#[derive(Component, Clone, Debug)]
pub struct SignalBinding {
    /// Key of the integer signal to display.
    pub signal_key: String,
    /// Optional format; `{}` is replaced by the value.
    pub format: Option<String>,
}

impl SignalBinding {
    pub fn new(signal_key: impl Into<String>) -> Self {
        Self {
            signal_key: signal_key.into(),
            format: None,
        }
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Render `value` through the format string.
    pub fn render(&self, value: impl ToString) -> String {
        let value = value.to_string();
        match &self.format {
            Some(format) => format.replace("{}", &value),
            None => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_without_format() {
        assert_eq!(SignalBinding::new("collected").render(2), "2");
    }

    #[test]
    fn test_render_with_format() {
        let b = SignalBinding::new("collected").with_format("Souvenirs: {}/3");
        assert_eq!(b.render(1), "Souvenirs: 1/3");
    }
}
