//! Headless world shared by the integration tests.
//!
//! Everything except window-bound systems (input polling, config apply,
//! rendering, asset loading) is wired the way `main` wires it.

#![allow(dead_code)]

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use souvenirs::components::mapposition::MapPosition;
use souvenirs::components::rigidbody::RigidBody;
use souvenirs::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use souvenirs::events::popup::popup_observer;
use souvenirs::game;
use souvenirs::level::{PLAY_HEIGHT, PLAY_WIDTH};
use souvenirs::resources::gameconfig::GameConfig;
use souvenirs::resources::gamestate::{GameState, GameStates, NextGameState};
use souvenirs::resources::input::InputState;
use souvenirs::resources::physics::{PhysicsState, WorldBounds};
use souvenirs::resources::systemsstore::SystemsStore;
use souvenirs::resources::touch::{PointerState, TouchInput};
use souvenirs::resources::worldsignals::WorldSignals;
use souvenirs::resources::worldtime::WorldTime;
use souvenirs::systems::button::button_system;
use souvenirs::systems::collision::{collision_detector, collision_observer};
use souvenirs::systems::gamestate::{check_pending_state, state_is_playing};
use souvenirs::systems::movement::movement;
use souvenirs::systems::physics::{solid_collision_system, world_bounds_system};
use souvenirs::systems::platformer::platformer_controller;
use souvenirs::systems::signalbinding::update_world_signals_binding_system;
use souvenirs::systems::time::update_world_time;
use souvenirs::systems::touchcontrols::{bind_touch_controls, touch_controls_system};
use souvenirs::systems::tween::tween_alpha_system;

pub const FRAME: f32 = 1.0 / 60.0;

pub fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(WorldSignals::default());
    world.insert_resource(InputState::default());
    world.insert_resource(TouchInput::default());
    world.insert_resource(PointerState::default());
    world.insert_resource(PhysicsState::default());
    world.insert_resource(WorldBounds::new(0.0, 0.0, PLAY_WIDTH, PLAY_HEIGHT));
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.insert_resource(GameConfig::new());

    world.spawn(Observer::new(observe_gamestate_change_event));
    world.spawn(Observer::new(collision_observer));
    world.spawn(Observer::new(popup_observer));

    let mut store = SystemsStore::new();
    store.insert("enter_play", world.register_system(game::enter_play));
    store.insert(
        "bind_touch_controls",
        world.register_system(bind_touch_controls),
    );
    store.insert("enter_won", world.register_system(game::enter_won));
    store.insert("quit_game", world.register_system(game::quit_game));
    world.insert_resource(store);
    world.flush();
    world
}

/// Go straight to the level, skipping asset loading.
pub fn start_playing(world: &mut World) {
    world
        .resource_mut::<NextGameState>()
        .set(GameStates::Playing);
    world.trigger(GameStateChangedEvent {});
    world.flush();
}

pub fn gameplay_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            check_pending_state,
            button_system,
            touch_controls_system,
            platformer_controller.run_if(state_is_playing),
            movement,
            solid_collision_system,
            world_bounds_system,
            collision_detector,
            tween_alpha_system,
            update_world_signals_binding_system,
        )
            .chain(),
    );
    schedule
}

pub fn step(world: &mut World, schedule: &mut Schedule, frames: usize) {
    for _ in 0..frames {
        update_world_time(world, FRAME);
        schedule.run(world);
    }
}

pub fn player(world: &World) -> Entity {
    *world
        .resource::<WorldSignals>()
        .get_entity("player")
        .expect("player spawned")
}

pub fn player_pos(world: &World) -> Vector2 {
    world.get::<MapPosition>(player(world)).unwrap().pos
}

pub fn player_velocity(world: &World) -> Vector2 {
    world.get::<RigidBody>(player(world)).unwrap().velocity
}

/// Move the player and stop it, as if it had walked there.
pub fn teleport_player(world: &mut World, x: f32, y: f32) {
    let p = player(world);
    world.get_mut::<MapPosition>(p).unwrap().pos = Vector2::new(x, y);
    world.get_mut::<RigidBody>(p).unwrap().stop();
}

pub fn collected(world: &World) -> i32 {
    world
        .resource::<WorldSignals>()
        .get_integer("collected")
        .unwrap_or(0)
}

pub fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() < eps
}
