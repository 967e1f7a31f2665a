//! Game configuration, stored as INI.
//!
//! A missing file or key falls back to the defaults below. `--write-config`
//! writes the effective values back out. The framebuffer size is fixed by the
//! level layout and is not configurable.
//!
//! # File format
//!
//! ```ini
//! [window]
//! width = 960
//! height = 720
//! fullscreen = false
//! vsync = true
//! target_fps = 60
//!
//! [gameplay]
//! gravity = 1100
//! move_speed = 260
//! jump_speed = 520
//! player_texture = ./assets/player.png
//! gift_url = https://estebanbolot.github.io/Bon-p-re-fils/
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

const DEFAULT_CONFIG_PATH: &str = "./config.ini";
const DEFAULT_PLAYER_TEXTURE: &str = "./assets/player.png";
pub const DEFAULT_GIFT_URL: &str = "https://estebanbolot.github.io/Bon-p-re-fils/";

/// Settings read from `config.ini`.
///
/// Runtime changes are picked up by [`apply_gameconfig_changes`]; gameplay
/// values only take effect the next time the level is entered.
///
/// [`apply_gameconfig_changes`]: crate::systems::gameconfig::apply_gameconfig_changes
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub target_fps: u32,
    pub vsync: bool,
    pub fullscreen: bool,
    /// Downward acceleration applied to the player, px/s².
    pub gravity: f32,
    /// Horizontal player speed, px/s.
    pub move_speed: f32,
    /// Initial upward speed of a jump, px/s.
    pub jump_speed: f32,
    pub player_texture: String,
    /// Page opened by the gift button on the win screen.
    pub gift_url: String,
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self {
            window_width: 960,
            window_height: 720,
            target_fps: 60,
            vsync: true,
            fullscreen: false,
            gravity: 1100.0,
            move_speed: 260.0,
            jump_speed: 520.0,
            player_texture: DEFAULT_PLAYER_TEXTURE.to_string(),
            gift_url: DEFAULT_GIFT_URL.to_string(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Defaults, to be loaded from and saved to `path`.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Overlay the values found in the file on the current ones.
    ///
    /// Missing or malformed keys keep their value. Fails only when the file
    /// cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut ini = Ini::new();
        ini.load(&self.config_path)
            .map_err(|e| format!("Failed to load {:?}: {}", self.config_path, e))?;

        self.load_display(&ini);
        self.load_gameplay(&ini);

        info!(
            "Loaded {:?}: window {}x{}, fps={}",
            self.config_path,
            self.window_width,
            self.window_height,
            self.target_fps
        );
        Ok(())
    }

    fn load_display(&mut self, ini: &Ini) {
        let uint = |key: &str| ini.getuint("window", key).ok().flatten();
        let boolean = |key: &str| ini.getbool("window", key).ok().flatten();

        if let Some(v) = uint("width") {
            self.window_width = v as u32;
        }
        if let Some(v) = uint("height") {
            self.window_height = v as u32;
        }
        if let Some(v) = uint("target_fps") {
            self.target_fps = v as u32;
        }
        if let Some(v) = boolean("vsync") {
            self.vsync = v;
        }
        if let Some(v) = boolean("fullscreen") {
            self.fullscreen = v;
        }
    }

    fn load_gameplay(&mut self, ini: &Ini) {
        let float = |key: &str| ini.getfloat("gameplay", key).ok().flatten();

        for (key, field) in [
            ("gravity", &mut self.gravity),
            ("move_speed", &mut self.move_speed),
            ("jump_speed", &mut self.jump_speed),
        ] {
            if let Some(v) = float(key) {
                *field = v as f32;
            }
        }
        if let Some(v) = ini.get("gameplay", "player_texture") {
            self.player_texture = v;
        }
        if let Some(v) = ini.get("gameplay", "gift_url") {
            self.gift_url = v;
        }
    }

    /// Write every setting to `config_path`, creating the file if needed.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut ini = Ini::new();
        let entries: [(&str, &str, String); 10] = [
            ("window", "width", self.window_width.to_string()),
            ("window", "height", self.window_height.to_string()),
            ("window", "fullscreen", self.fullscreen.to_string()),
            ("window", "vsync", self.vsync.to_string()),
            ("window", "target_fps", self.target_fps.to_string()),
            ("gameplay", "gravity", self.gravity.to_string()),
            ("gameplay", "move_speed", self.move_speed.to_string()),
            ("gameplay", "jump_speed", self.jump_speed.to_string()),
            ("gameplay", "player_texture", self.player_texture.clone()),
            ("gameplay", "gift_url", self.gift_url.clone()),
        ];
        for (section, key, value) in entries {
            ini.set(section, key, Some(value));
        }

        ini.write(&self.config_path)
            .map_err(|e| format!("Failed to save {:?}: {}", self.config_path, e))?;
        info!("Saved config to {:?}", self.config_path);
        Ok(())
    }

    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults() {
        let c = GameConfig::new();
        assert_eq!(c.target_fps, 60);
        assert_eq!(c.gravity, 1100.0);
        assert_eq!(c.move_speed, 260.0);
        assert_eq!(c.jump_speed, 520.0);
        assert_eq!(c.gift_url, DEFAULT_GIFT_URL);
        assert_eq!(c.window_size(), (960, 720));
    }

    #[test]
    fn test_missing_file_is_an_error_and_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut c = GameConfig::with_path(dir.path().join("absent.ini"));
        assert!(c.load_from_file().is_err());
        assert_eq!(c.window_size(), (960, 720));
        assert_eq!(c.gravity, 1100.0);
    }

    #[test]
    fn test_partial_file_overrides_only_present_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        fs::write(
            &path,
            "[window]\nwidth = 1920\nfullscreen = true\n\n[gameplay]\njump_speed = 600\ngift_url = https://example.org/\n",
        )
        .unwrap();

        let mut c = GameConfig::with_path(&path);
        c.load_from_file().unwrap();
        assert_eq!(c.window_width, 1920);
        assert_eq!(c.window_height, 720);
        assert!(c.fullscreen);
        assert_eq!(c.jump_speed, 600.0);
        assert_eq!(c.move_speed, 260.0);
        assert_eq!(c.gift_url, "https://example.org/");
    }

    #[test]
    fn test_render_section_is_ignored_and_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("old.ini");
        fs::write(&path, "[render]\nwidth = 640\nheight = 360\n").unwrap();

        let mut c = GameConfig::with_path(&path);
        c.load_from_file().unwrap();
        assert_eq!(c, GameConfig::with_path(&path));

        c.save_to_file().unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(!written.contains("[render]"));
        assert!(written.contains("[window]"));
    }

    #[test]
    fn test_save_then_load_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.ini");

        let mut saved = GameConfig::with_path(&path);
        saved.target_fps = 144;
        saved.vsync = false;
        saved.gravity = 900.5;
        saved.player_texture = "hero.png".to_string();
        saved.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        assert_eq!(loaded, saved);
    }
}
