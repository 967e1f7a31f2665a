//! Souvenirs main entry point.
//!
//! A one-level 2D platformer written in Rust using:
//! - **raylib** for windowing, input and drawing
//! - **bevy_ecs** for entity-component-system architecture
//!
//! Collect the three memories, avoid the spikes and reach the door to unlock
//! the gift. Arrow keys or the on-screen buttons move and jump, Escape quits
//! and F11 toggles the collider overlay.
//!
//! # Main Loop
//!
//! 1. Parse the command line and load `config.ini`
//! 2. Open the window and build the ECS world, resources and observers
//! 3. Enter the Setup state, which loads the player image and starts play
//! 4. Run the update schedule once per frame until quit
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config ./config.ini
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemId;
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

use souvenirs::events::button::button_action_observer;
use souvenirs::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use souvenirs::events::popup::popup_observer;
use souvenirs::events::switchdebug::switch_debug_observer;
use souvenirs::game;
use souvenirs::level::{PLAY_HEIGHT, PLAY_WIDTH, RENDER_HEIGHT, RENDER_WIDTH};
use souvenirs::resources::debugmode::DebugMode;
use souvenirs::resources::gameconfig::GameConfig;
use souvenirs::resources::gamestate::{GameState, GameStates, NextGameState};
use souvenirs::resources::input::InputState;
use souvenirs::resources::physics::{PhysicsState, WorldBounds};
use souvenirs::resources::rendertarget::RenderTarget;
use souvenirs::resources::screensize::ScreenSize;
use souvenirs::resources::systemsstore::SystemsStore;
use souvenirs::resources::texturestore::TextureStore;
use souvenirs::resources::touch::{PointerState, TouchInput};
use souvenirs::resources::windowsize::WindowSize;
use souvenirs::resources::worldsignals::WorldSignals;
use souvenirs::resources::worldtime::WorldTime;
use souvenirs::systems::button::button_system;
use souvenirs::systems::collision::{collision_detector, collision_observer};
use souvenirs::systems::gameconfig::apply_gameconfig_changes;
use souvenirs::systems::gamestate::{check_pending_state, quit_on_back, state_is_playing};
use souvenirs::systems::input::{update_input_state, update_pointer_state};
use souvenirs::systems::movement::movement;
use souvenirs::systems::physics::{solid_collision_system, world_bounds_system};
use souvenirs::systems::platformer::platformer_controller;
use souvenirs::systems::render::render_system;
use souvenirs::systems::signalbinding::update_world_signals_binding_system;
use souvenirs::systems::time::update_world_time;
use souvenirs::systems::touchcontrols::{bind_touch_controls, touch_controls_system};
use souvenirs::systems::tween::tween_alpha_system;

/// Souvenirs, a small platformer with a gift at the end
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Start with the collider overlay on (F11 toggles it).
    #[arg(long)]
    debug: bool,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    write_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}, using defaults", e);
    }

    // Early-exit: write the config and quit (no window needed)
    if cli.write_config {
        if let Err(e) = config.save_to_file() {
            error!("{}", e);
            std::process::exit(1);
        }
        return;
    }

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("Souvenirs")
        .build();
    rl.set_target_fps(config.target_fps);
    // Escape is handled by quit_on_back
    rl.set_exit_key(None);

    let render_target = match RenderTarget::new(&mut rl, &thread, RENDER_WIDTH, RENDER_HEIGHT) {
        Ok(target) => target,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(WorldSignals::default());
    // ScreenSize is the game's fixed internal render resolution
    world.insert_resource(ScreenSize {
        w: RENDER_WIDTH as i32,
        h: RENDER_HEIGHT as i32,
    });
    // WindowSize is the actual window dimensions (updated each frame)
    world.insert_resource(WindowSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.insert_resource(InputState::default());
    world.insert_resource(TouchInput::default());
    world.insert_resource(PointerState::default());
    world.insert_resource(PhysicsState::default());
    world.insert_resource(WorldBounds::new(0.0, 0.0, PLAY_WIDTH, PLAY_HEIGHT));
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    if cli.debug {
        world.insert_resource(DebugMode);
    }
    world.insert_resource(config);

    world.insert_non_send_resource(render_target);
    world.insert_non_send_resource(TextureStore::new());
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn(Observer::new(observe_gamestate_change_event));

    // Game state enter hooks
    let mut systems_store = SystemsStore::new();
    let hooks: [(&str, SystemId); 5] = [
        ("setup", world.register_system(game::setup)),
        ("enter_play", world.register_system(game::enter_play)),
        ("bind_touch_controls", world.register_system(bind_touch_controls)),
        ("enter_won", world.register_system(game::enter_won)),
        ("quit_game", world.register_system(game::quit_game)),
    ];
    for (name, id) in hooks {
        systems_store.insert(name, id);
    }
    world.insert_resource(systems_store);

    world.spawn(Observer::new(collision_observer));
    world.spawn(Observer::new(popup_observer));
    world.spawn(Observer::new(button_action_observer));
    world.spawn(Observer::new(switch_debug_observer));
    // Ensure the observers are registered before anything triggers events.
    world.flush();

    world.resource_mut::<NextGameState>().set(GameStates::Setup);
    world.trigger(GameStateChangedEvent {}); // Enter Setup immediately

    let mut update = Schedule::default();
    update.add_systems(
        (
            apply_gameconfig_changes,
            update_input_state,
            update_pointer_state,
            check_pending_state,
            quit_on_back,
            button_system,
            touch_controls_system,
            platformer_controller.run_if(state_is_playing),
            movement,
            solid_collision_system,
            world_bounds_system,
            collision_detector,
            tween_alpha_system,
            update_world_signals_binding_system,
            render_system,
        )
            .chain(),
    );

    if let Err(e) = update.initialize(&mut world) {
        error!("Failed to initialize schedule: {}", e);
        std::process::exit(1);
    }

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !world.resource::<WorldSignals>().has_flag("quit_game")
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers();

        // Update window size each frame (may change due to resize)
        let (new_w, new_h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_screen_width(), rl.get_screen_height())
        };
        let mut window_size = world.resource_mut::<WindowSize>();
        window_size.w = new_w;
        window_size.h = new_h;
    }

    // GPU resources go before the window closes
    world.remove_non_send_resource::<TextureStore>();
    world.remove_non_send_resource::<RenderTarget>();
    info!("Bye");
}
