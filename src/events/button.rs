//! Button activation event.
//!
//! The button system triggers [`ButtonPressedEvent`] when a pointer goes
//! down on a button. [`button_action_observer`]
//! carries out the button's [`ButtonAction`].
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{error, info, warn};

use crate::components::button::{Button, ButtonAction};

#[derive(Event, Debug, Clone, Copy)]
pub struct ButtonPressedEvent {
    pub entity: Entity,
}

/// Observer running the action attached to the activated button.
pub fn button_action_observer(trigger: On<ButtonPressedEvent>, buttons: Query<&Button>) {
    let entity = trigger.event().entity;
    let Ok(button) = buttons.get(entity) else {
        warn!("Pressed button {:?} no longer exists", entity);
        return;
    };
    match &button.action {
        Some(ButtonAction::OpenUrl(url)) => {
            info!("Opening {}", url);
            if let Err(e) = webbrowser::open(url) {
                error!("Failed to open {}: {}", url, e);
            }
        }
        None => {}
    }
}
