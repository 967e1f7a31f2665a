use bevy_ecs::prelude::Component;

/// Marker for the transient message text shown by
/// [`ShowPopupEvent`](crate::events::popup::ShowPopupEvent).
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Popup;
