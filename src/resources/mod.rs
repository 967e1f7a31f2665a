//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input state, timing, rendering
//! handles and configuration.
//!
//! Overview
//! - `debugmode` – presence toggles the collider overlay
//! - `gameconfig` – INI-backed render, window and gameplay settings
//! - `gamestate` – authoritative and pending high-level game state
//! - `input` – per-frame keyboard state of keys relevant to the game
//! - `physics` – physics pause switch and world bounds
//! - `rendertarget` – fixed-resolution framebuffer scaled to the window
//! - `screensize` – render resolution in pixels
//! - `systemsstore` – registry of dynamically-lookup-able systems by name
//! - `texturestore` – loaded textures keyed by string IDs
//! - `touch` – on-screen control state and pointer snapshot
//! - `windowsize` – OS window size and letterbox math
//! - `worldsignals` – global integers, flags and entities shared across systems
//! - `worldtime` – simulation time and delta
pub mod debugmode;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod physics;
pub mod rendertarget;
pub mod screensize;
pub mod systemsstore;
pub mod texturestore;
pub mod touch;
pub mod windowsize;
pub mod worldsignals;
pub mod worldtime;
