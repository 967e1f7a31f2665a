//! ECS systems.
//!
//! Systems run once per frame in the order set up in `main`:
//! input → state → buttons → touch bridge → controller → physics →
//! overlaps → tweens → bindings → render.
//!
//! - [`button`] – pointer hover/press on on-screen buttons
//! - [`collision`] – overlap detection and collision rule dispatch
//! - [`gameconfig`] – apply [`GameConfig`](crate::resources::gameconfig::GameConfig) changes
//! - [`gamestate`] – pending state checks and run conditions
//! - [`input`] – keyboard and pointer polling
//! - [`movement`] – force and velocity integration
//! - [`physics`] – separation from solids and world bounds
//! - [`platformer`] – run and jump from keyboard or touch
//! - [`render`] – draw the frame
//! - [`signalbinding`] – UI text from world signals
//! - [`time`] – frame delta
//! - [`touchcontrols`] – on-screen buttons to [`TouchInput`](crate::resources::touch::TouchInput)
//! - [`tween`] – opacity tweens
pub mod button;
pub mod collision;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod movement;
pub mod physics;
pub mod platformer;
pub mod render;
pub mod signalbinding;
pub mod time;
pub mod touchcontrols;
pub mod tween;
