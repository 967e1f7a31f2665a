//! Named one-shot systems.
//!
//! `main` registers the state enter hooks (`"setup"`, `"enter_play"`,
//! `"bind_touch_controls"`, `"enter_won"`, `"quit_game"`) under their names;
//! the game state observer looks them up and queues them with
//! `Commands::run_system`.

use bevy_ecs::prelude::Resource;
use bevy_ecs::system::SystemId;
use rustc_hash::FxHashMap;

#[derive(Resource, Default)]
pub struct SystemsStore {
    by_name: FxHashMap<String, SystemId>,
}

impl SystemsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `id` as `name`, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, id: SystemId) {
        self.by_name.insert(name.into(), id);
    }

    pub fn get(&self, name: impl AsRef<str>) -> Option<&SystemId> {
        self.by_name.get(name.as_ref())
    }
}
