//! Named values shared between systems and collision callbacks.
//!
//! Keys used by the game:
//! - `"collected"`: memories picked up (integer), shown by the HUD through
//!   [`SignalBinding`](crate::components::signalbinding::SignalBinding)
//! - `"quit_game"`: raised when the main loop should exit (flag)
//! - `"player"`, `"popup"`: entities spawned by `enter_play`

use bevy_ecs::prelude::{Entity, Resource};
use rustc_hash::{FxHashMap, FxHashSet};

#[derive(Debug, Clone, Default, Resource)]
pub struct WorldSignals {
    integers: FxHashMap<String, i32>,
    /// A present key means the flag is raised.
    flags: FxHashSet<String>,
    entities: FxHashMap<String, Entity>,
}

impl WorldSignals {
    pub fn set_integer(&mut self, key: impl Into<String>, value: i32) {
        self.integers.insert(key.into(), value);
    }

    pub fn get_integer(&self, key: &str) -> Option<i32> {
        self.integers.get(key).copied()
    }

    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.flags.insert(key.into());
    }

    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains(key)
    }

    pub fn set_entity(&mut self, key: impl Into<String>, entity: Entity) {
        self.entities.insert(key.into(), entity);
    }

    pub fn get_entity(&self, key: &str) -> Option<&Entity> {
        self.entities.get(key)
    }
}
