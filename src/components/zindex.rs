//! Draw order.

use bevy_ecs::prelude::Component;

/// Larger values draw on top. Entities without one draw at 0.
///
/// Level pieces use 0..5, the HUD 10..11, the control strip 8..10 and the
/// win screen 20..22.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);
