//! Pushes [`GameConfig`] changes to the window.

use bevy_ecs::prelude::*;
use log::info;
use raylib::RaylibHandle;
use raylib::ffi;

use crate::resources::gameconfig::GameConfig;

/// Runs on the first frame and whenever the config resource is modified.
pub fn apply_gameconfig_changes(config: Res<GameConfig>, mut rl: NonSendMut<RaylibHandle>) {
    if !config.is_changed() {
        return;
    }

    if config.fullscreen != rl.is_window_fullscreen() {
        rl.toggle_fullscreen();
    }

    let vsync = ffi::ConfigFlags::FLAG_VSYNC_HINT as u32;
    unsafe {
        if config.vsync {
            ffi::SetWindowState(vsync);
        } else {
            ffi::ClearWindowState(vsync);
        }
    }
    rl.set_target_fps(config.target_fps);

    info!(
        "Config applied: fps={} vsync={} fullscreen={}",
        config.target_fps, config.vsync, config.fullscreen
    );
}
