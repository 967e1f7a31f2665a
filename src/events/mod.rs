//! Event types and observers.
//!
//! Events provide a decoupled way for systems to communicate without direct
//! dependencies.
//!
//! Submodules:
//! - [`button`] – activation of on-screen buttons and their actions
//! - [`collision`] – overlap notifications emitted by the collision detector
//! - [`gamestate`] – state transition notifications for the high-level game flow
//! - [`popup`] – show a transient message
//! - [`switchdebug`] – toggle debug rendering on/off
pub mod button;
pub mod collision;
pub mod gamestate;
pub mod popup;
pub mod switchdebug;
