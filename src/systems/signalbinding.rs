//! HUD text bound to world signals.
use bevy_ecs::prelude::*;

use crate::components::dynamictext::DynamicText;
use crate::components::signalbinding::SignalBinding;
use crate::resources::worldsignals::WorldSignals;

/// Rewrite each bound text from its integer signal.
///
/// An unset signal leaves the text as spawned. Text is only written when it
/// changes.
pub fn update_world_signals_binding_system(
    mut query: Query<(&mut DynamicText, &SignalBinding)>,
    world_signals: Res<WorldSignals>,
) {
    for (mut dynamic_text, binding) in query.iter_mut() {
        let Some(value) = world_signals.get_integer(&binding.signal_key) else {
            continue;
        };
        let new_content = binding.render(value);
        if dynamic_text.content != new_content {
            dynamic_text.set_content(new_content);
        }
    }
}
