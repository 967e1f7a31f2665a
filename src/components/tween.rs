//! Opacity fade component.
//!
//! [`TweenAlpha`] moves an entity's [`Tint`](super::tint::Tint) alpha from
//! `from` to `to`, waits `hold` seconds, then comes back to `from` and stops.
//! This is how popup messages fade in, stay and fade out.
//! See [`crate::systems::tween`] for the update system.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Debug)]
pub struct TweenAlpha {
    /// Starting opacity (0.0 to 1.0).
    pub from: f32,
    /// Opacity held in the middle (0.0 to 1.0).
    pub to: f32,
    /// Duration of one direction in seconds.
    pub duration: f32,
    /// Seconds to stay at `to` before reversing.
    pub hold: f32,
    pub playing: bool,
    /// Current time within one direction.
    pub time: f32,
    /// Direction of playback (true = towards `to`).
    pub forward: bool,
    holding: bool,
    held: f32,
}

impl TweenAlpha {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        TweenAlpha {
            from,
            to,
            duration,
            hold: 0.0,
            playing: true,
            time: 0.0,
            forward: true,
            holding: false,
            held: 0.0,
        }
    }

    pub fn with_hold(mut self, hold: f32) -> Self {
        self.hold = hold.max(0.0);
        self
    }

    /// Builder: start paused.
    pub fn stopped(mut self) -> Self {
        self.playing = false;
        self
    }

    /// True while waiting at `to`.
    pub fn is_holding(&self) -> bool {
        self.holding
    }

    /// Normalized position in `[0.0, 1.0]`, 1.0 being `to`.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return if self.time > 0.0 || !self.forward { 1.0 } else { 0.0 };
        }
        (self.time / self.duration).clamp(0.0, 1.0)
    }

    /// Advance by `dt` seconds: forward, hold, back, stop.
    pub fn advance(&mut self, dt: f32) {
        if !self.playing {
            return;
        }
        let mut dt = dt.max(0.0);

        if self.holding {
            self.held += dt;
            if self.held < self.hold {
                return;
            }
            // Carry the leftover into the way back
            dt = self.held - self.hold;
            self.holding = false;
            self.held = 0.0;
            self.forward = false;
        }

        if self.forward {
            self.time += dt;
            if self.time >= self.duration {
                self.time = self.duration;
                if self.hold > 0.0 {
                    self.holding = true;
                    self.held = 0.0;
                } else {
                    self.forward = false;
                }
            }
        } else {
            self.time -= dt;
            if self.time <= 0.0 {
                self.time = 0.0;
                self.playing = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_holds_then_returns_and_stops() {
        let mut tw = TweenAlpha::new(0.0, 1.0, 0.14).with_hold(0.9);

        tw.advance(0.07);
        assert!(approx_eq(tw.progress(), 0.5));

        tw.advance(0.07);
        assert!(tw.playing);
        assert!(tw.is_holding());
        assert!(approx_eq(tw.progress(), 1.0));

        // Still holding after most of the hold time
        tw.advance(0.8);
        assert!(tw.is_holding());
        assert!(approx_eq(tw.progress(), 1.0));

        // Hold ends with 0.05s left over, applied to the way back
        tw.advance(0.15);
        assert!(!tw.is_holding());
        assert!(!tw.forward);
        assert!(approx_eq(tw.time, 0.09));

        tw.advance(0.2);
        assert!(!tw.playing);
        assert!(approx_eq(tw.progress(), 0.0));
    }

    #[test]
    fn test_without_hold_reverses_immediately() {
        let mut tw = TweenAlpha::new(0.0, 1.0, 1.0);
        tw.advance(1.0);
        assert!(!tw.is_holding());
        assert!(!tw.forward);
        tw.advance(1.0);
        assert!(!tw.playing);
    }

    #[test]
    fn test_stopped_tween_ignores_time() {
        let mut tw = TweenAlpha::new(0.0, 1.0, 1.0).stopped();
        tw.advance(0.5);
        assert!(approx_eq(tw.time, 0.0));
    }
}
