//! Souvenirs library.
//!
//! Exposes the game's ECS components, resources, systems and events for use
//! by the binary and the integration tests.

pub mod components;
pub mod events;
pub mod game;
pub mod level;
pub mod resources;
pub mod systems;
