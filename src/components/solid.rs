use bevy_ecs::prelude::Component;

/// Static body that dynamic bodies are separated from (platforms, ground).
///
/// Solids never move and never take part in overlap events.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Solid;
