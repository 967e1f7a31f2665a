//! Transient message popup.
//!
//! Triggering [`ShowPopupEvent`] replaces the text of the [`Popup`] entity
//! and restarts its fade: alpha 0 → 1 in [`POPUP_FADE`] seconds, a
//! [`POPUP_HOLD`] pause, then back to 0.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::dynamictext::DynamicText;
use crate::components::popup::Popup;
use crate::components::tint::Tint;
use crate::components::tween::TweenAlpha;

/// Fade-in (and fade-out) duration in seconds.
pub const POPUP_FADE: f32 = 0.14;
/// Time fully visible, in seconds.
pub const POPUP_HOLD: f32 = 0.9;

#[derive(Event, Debug, Clone)]
pub struct ShowPopupEvent {
    pub text: String,
}

impl ShowPopupEvent {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// The tween every popup message plays.
pub fn popup_tween() -> TweenAlpha {
    TweenAlpha::new(0.0, 1.0, POPUP_FADE)
        .with_hold(POPUP_HOLD)
}

/// Observer showing a popup message.
///
/// The same text arriving while its fade is still running keeps the running
/// fade.
pub fn popup_observer(
    trigger: On<ShowPopupEvent>,
    mut query: Query<(&mut DynamicText, &mut Tint, &mut TweenAlpha), With<Popup>>,
) {
    let text = &trigger.event().text;
    for (mut dyntext, mut tint, mut tween) in query.iter_mut() {
        if tween.playing && dyntext.content == *text {
            continue;
        }
        debug!("Popup: {}", text);
        dyntext.set_content(text.clone());
        tint.set_alpha(0.0);
        *tween = popup_tween();
    }
}
