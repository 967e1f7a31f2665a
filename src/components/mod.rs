//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world. Components define data and behaviors such as position,
//! physics, collision, drawing and UI.
//!
//! Submodules overview:
//! - [`blocked`] – per-side contact flags and the world-bounds marker
//! - [`boxcollider`] – axis-aligned rectangular collider and separation math
//! - [`button`] – on-screen buttons and their touch bindings
//! - [`collision`] – collision callback rules and context for collision observers
//! - [`dynamictext`] – text component for rendering variable strings
//! - [`group`] – tag component for grouping entities by name
//! - [`mapposition`] – world-space position (centre) for an entity
//! - [`platformer`] – run/jump intent driven by player input
//! - [`popup`] – marker for the transient message text
//! - [`rigidbody`] – kinematic body storing velocity, forces and bounce
//! - [`screenposition`] – screen-space position for UI elements
//! - [`shape`] – flat-colored primitives for level pieces and overlays
//! - [`signalbinding`] – binds a text to a world signal
//! - [`solid`] – marker for static bodies dynamic bodies cannot enter
//! - [`sprite`] – image-based rendering component
//! - [`tint`] – color/alpha modulation at draw time
//! - [`tween`] – animated interpolation of opacity
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod blocked;
pub mod boxcollider;
pub mod button;
pub mod collision;
pub mod dynamictext;
pub mod group;
pub mod mapposition;
pub mod platformer;
pub mod popup;
pub mod rigidbody;
pub mod screenposition;
pub mod shape;
pub mod signalbinding;
pub mod solid;
pub mod sprite;
pub mod tint;
pub mod tween;
pub mod zindex;
