//! F11 collider overlay toggle.
//!
//! The overlay is on while the [`DebugMode`] resource exists.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::debugmode::DebugMode;

#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchDebugEvent {}

pub fn switch_debug_observer(
    _trigger: On<SwitchDebugEvent>,
    mut commands: Commands,
    debug_mode: Option<Res<DebugMode>>,
) {
    let enable = debug_mode.is_none();
    if enable {
        commands.insert_resource(DebugMode);
    } else {
        commands.remove_resource::<DebugMode>();
    }
    info!("Collider overlay {}", if enable { "on" } else { "off" });
}
