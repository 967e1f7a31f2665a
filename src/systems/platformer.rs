//! Player controller.
//!
//! Keyboard and touch are merged here: either source can run or jump. Runs
//! before movement, so the ground check reads the contacts of the previous
//! physics step.
use bevy_ecs::prelude::*;

use crate::components::blocked::Blocked;
use crate::components::platformer::PlatformerControlled;
use crate::components::rigidbody::RigidBody;
use crate::resources::input::InputState;
use crate::resources::physics::PhysicsState;
use crate::resources::touch::TouchInput;

pub fn platformer_controller(
    mut query: Query<(&PlatformerControlled, &mut RigidBody, Option<&Blocked>)>,
    input: Res<InputState>,
    mut touch: ResMut<TouchInput>,
    physics: Res<PhysicsState>,
) {
    // Sampled every frame so a held button cannot fire twice
    let touch_jump = touch.just_pressed_jump();

    if physics.is_paused() {
        return;
    }

    let left = input.left.active || touch.left;
    let right = input.right.active || touch.right;
    let jump = input.jump.just_pressed || touch_jump;

    for (controlled, mut rigidbody, blocked) in query.iter_mut() {
        rigidbody.velocity.x = if left {
            -controlled.speed
        } else if right {
            controlled.speed
        } else {
            0.0
        };

        let on_ground = blocked.is_some_and(|b| b.down);
        if jump && on_ground {
            rigidbody.velocity.y = -controlled.jump_speed;
        }
    }
}
