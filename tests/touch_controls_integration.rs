//! The on-screen control strip driving the player like the keyboard does.

mod common;

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use bevy_ecs::system::RunSystemOnce;
use raylib::prelude::{Color, Vector2};

use common::*;
use souvenirs::components::blocked::Blocked;
use souvenirs::components::button::{Button, TouchBinding};
use souvenirs::components::screenposition::ScreenPosition;
use souvenirs::events::button::ButtonPressedEvent;
use souvenirs::level::{PLAY_HEIGHT, PLAYER_SPAWN, UI_BOTTOM};
use souvenirs::resources::touch::{PointerState, TouchInput, TouchKey};
use souvenirs::systems::touchcontrols::bind_touch_controls;

const STRIP_Y: f32 = PLAY_HEIGHT + UI_BOTTOM * 0.5;
const LEFT: Vector2 = Vector2 { x: 100.0, y: STRIP_Y };
const RIGHT: Vector2 = Vector2 { x: 270.0, y: STRIP_Y };
const JUMP: Vector2 = Vector2 { x: 850.0, y: STRIP_Y };

fn hold(world: &mut World, points: &[Vector2]) {
    world.resource_mut::<PointerState>().active = points.to_vec();
}

/// Start the level and let the player settle on the ground.
fn grounded_world() -> (World, Schedule) {
    let mut world = make_world();
    start_playing(&mut world);
    let mut schedule = gameplay_schedule();
    step(&mut world, &mut schedule, 120);
    assert!(world.get::<Blocked>(player(&world)).unwrap().down);
    (world, schedule)
}

#[test]
fn control_buttons_are_bound_on_enter() {
    let mut world = make_world();
    start_playing(&mut world);

    let mut query = world.query::<(&Button, &TouchBinding)>();
    let mut bound: Vec<(String, TouchKey)> = query
        .iter(&world)
        .map(|(b, t)| (b.id.clone(), t.0))
        .collect();
    bound.sort_by(|a, b| a.0.cmp(&b.0));
    assert_eq!(
        bound,
        vec![
            ("btnJump".to_string(), TouchKey::Jump),
            ("btnLeft".to_string(), TouchKey::Left),
            ("btnRight".to_string(), TouchKey::Right),
        ]
    );
}

#[test]
fn missing_control_buttons_are_skipped() {
    let mut world = World::new();
    world.spawn((
        Button::new("btnLeft", 150.0, 110.0, Color::GRAY),
        ScreenPosition::new(LEFT.x, LEFT.y),
    ));
    world.spawn((
        Button::new("somethingElse", 10.0, 10.0, Color::GRAY),
        ScreenPosition::new(0.0, 0.0),
    ));

    world.run_system_once(bind_touch_controls).unwrap();

    let mut query = world.query::<(&Button, &TouchBinding)>();
    let bound: Vec<_> = query.iter(&world).map(|(b, t)| (b.id.clone(), t.0)).collect();
    assert_eq!(bound, vec![("btnLeft".to_string(), TouchKey::Left)]);
}

#[test]
fn holding_left_runs_left_until_released() {
    let (mut world, mut schedule) = grounded_world();

    hold(&mut world, &[LEFT]);
    step(&mut world, &mut schedule, 1);
    assert!(world.resource::<TouchInput>().left);
    assert!(approx_eq(player_velocity(&world).x, -260.0, 1e-4));

    step(&mut world, &mut schedule, 9);
    assert!(player_pos(&world).x < PLAYER_SPAWN.0 - 30.0);

    hold(&mut world, &[]);
    step(&mut world, &mut schedule, 1);
    assert!(!world.resource::<TouchInput>().left);
    assert!(approx_eq(player_velocity(&world).x, 0.0, 1e-4));
}

#[test]
fn two_fingers_run_and_jump_together() {
    let (mut world, mut schedule) = grounded_world();

    hold(&mut world, &[RIGHT, JUMP]);
    step(&mut world, &mut schedule, 1);

    let touch = world.resource::<TouchInput>();
    assert!(touch.right && touch.jump);
    let vel = player_velocity(&world);
    assert!(approx_eq(vel.x, 260.0, 1e-4));
    assert!(vel.y < -400.0);
}

#[test]
fn held_jump_button_jumps_once() {
    let (mut world, mut schedule) = grounded_world();

    hold(&mut world, &[JUMP]);
    step(&mut world, &mut schedule, 1);
    assert!(player_velocity(&world).y < -400.0);

    // Still held after landing again: no second jump
    step(&mut world, &mut schedule, 120);
    assert!(world.get::<Blocked>(player(&world)).unwrap().down);
    assert!(approx_eq(player_velocity(&world).y, 0.0, 1e-4));

    // Release and press again
    hold(&mut world, &[]);
    step(&mut world, &mut schedule, 1);
    hold(&mut world, &[JUMP]);
    step(&mut world, &mut schedule, 1);
    assert!(player_velocity(&world).y < -400.0);
}

#[test]
fn jump_needs_ground() {
    let (mut world, mut schedule) = grounded_world();

    teleport_player(&mut world, PLAYER_SPAWN.0, 300.0);
    step(&mut world, &mut schedule, 1);
    hold(&mut world, &[JUMP]);
    step(&mut world, &mut schedule, 1);
    assert!(player_velocity(&world).y > 0.0);
}

#[test]
fn losing_focus_releases_every_key() {
    let (mut world, mut schedule) = grounded_world();

    hold(&mut world, &[LEFT]);
    step(&mut world, &mut schedule, 1);
    assert!(world.resource::<TouchInput>().left);

    world.resource_mut::<PointerState>().focused = false;
    step(&mut world, &mut schedule, 1);
    let touch = world.resource::<TouchInput>();
    assert!(!touch.left && !touch.right && !touch.jump);
    assert!(approx_eq(player_velocity(&world).x, 0.0, 1e-4));
}

#[derive(Resource, Default)]
struct Pressed(Vec<Entity>);

fn record_press(trigger: On<ButtonPressedEvent>, mut pressed: ResMut<Pressed>) {
    pressed.0.push(trigger.event().entity);
}

#[test]
fn button_press_event_fires_on_the_press_only() {
    let (mut world, mut schedule) = grounded_world();
    world.init_resource::<Pressed>();
    world.add_observer(record_press);

    hold(&mut world, &[JUMP]);
    step(&mut world, &mut schedule, 5);
    assert_eq!(world.resource::<Pressed>().0.len(), 1);

    let mut buttons = world.query::<(Entity, &Button)>();
    let jump = buttons
        .iter(&world)
        .find(|(_, b)| b.id == "btnJump")
        .map(|(e, _)| e)
        .unwrap();
    assert_eq!(world.resource::<Pressed>().0, vec![jump]);
    assert!(world.get::<Button>(jump).unwrap().pressed);

    hold(&mut world, &[]);
    step(&mut world, &mut schedule, 1);
    assert!(!world.get::<Button>(jump).unwrap().pressed);
}
