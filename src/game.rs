//! Scene setup and gameplay rules.
//!
//! The state enter hooks live here (`setup`, `enter_play`, `enter_won`,
//! `quit_game`), together with the collision callbacks that make up the
//! rules of the level.

use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::prelude::*;

use crate::components::blocked::{Blocked, CollideWorldBounds};
use crate::components::boxcollider::BoxCollider;
use crate::components::button::{Button, ButtonAction};
use crate::components::collision::{CollisionContext, CollisionRule};
use crate::components::dynamictext::DynamicText;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::platformer::PlatformerControlled;
use crate::components::popup::Popup;
use crate::components::rigidbody::RigidBody;
use crate::components::screenposition::ScreenPosition;
use crate::components::shape::Shape;
use crate::components::signalbinding::SignalBinding;
use crate::components::solid::Solid;
use crate::components::sprite::Sprite;
use crate::components::tint::Tint;
use crate::components::zindex::ZIndex;
use crate::events::popup::{ShowPopupEvent, popup_tween};
use crate::level::*;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::physics::PhysicsState;
use crate::resources::texturestore::TextureStore;
use crate::resources::worldsignals::WorldSignals;

/// Load assets, then move on to [`GameStates::Playing`].
///
/// A missing player image is not fatal: the renderer draws a placeholder.
pub fn setup(
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    mut textures: NonSendMut<TextureStore>,
    config: Res<GameConfig>,
    mut next_state: ResMut<NextGameState>,
) {
    match rl.load_texture(&th, &config.player_texture) {
        Ok(texture) => {
            info!("Loaded {}", config.player_texture);
            textures.insert(PLAYER_TEXTURE, texture);
        }
        Err(e) => warn!(
            "Could not load player texture {}: {}",
            config.player_texture, e
        ),
    }
    next_state.set(GameStates::Playing);
}

/// Spawn the level, the player, the rules and the HUD.
pub fn enter_play(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut signals: ResMut<WorldSignals>,
    mut physics: ResMut<PhysicsState>,
) {
    signals.set_integer(SIGNAL_COLLECTED, 0);
    physics.resume();

    spawn_level(&mut commands);

    let (w, h) = PLAYER_SIZE;
    let player = commands
        .spawn((
            Group::new(GROUP_PLAYER),
            MapPosition::from_vec(player_spawn()),
            RigidBody::new()
                .with_gravity(config.gravity)
                .with_bounce(PLAYER_BOUNCE),
            BoxCollider::new(w, h)
                .with_offset(Vector2::new(-w * 0.5, -h * 0.5 + PLAYER_COLLIDER_DROP)),
            Blocked::default(),
            CollideWorldBounds,
            PlatformerControlled::new(config.move_speed, config.jump_speed),
            Sprite::new(PLAYER_TEXTURE, w, h),
            ZIndex(5),
        ))
        .id();
    signals.set_entity(GROUP_PLAYER, player);

    commands.spawn(CollisionRule::new(GROUP_PLAYER, GROUP_MEMORY, on_collect));
    commands.spawn(CollisionRule::new(GROUP_PLAYER, GROUP_SPIKE, on_hazard));
    commands.spawn(CollisionRule::new(GROUP_PLAYER, GROUP_GOAL, on_goal));

    spawn_hud(&mut commands, &mut signals);
    spawn_control_buttons(&mut commands);

    info!("Level ready");
}

fn spawn_level(commands: &mut Commands) {
    let (pw, ph) = PLATFORM_SIZE;
    let platform = |width: f32| Shape::RoundedRect {
        width,
        height: ph,
        radius: PLATFORM_RADIUS,
        color: PLATFORM_COLOR,
    };

    let ground_width = pw * GROUND_SCALE;
    commands.spawn((
        Group::new(GROUP_PLATFORM),
        MapPosition::new(GROUND.0, GROUND.1),
        BoxCollider::centered(ground_width, ph),
        Solid,
        platform(ground_width),
        ZIndex(0),
    ));
    for (x, y) in PLATFORMS {
        commands.spawn((
            Group::new(GROUP_PLATFORM),
            MapPosition::new(x, y),
            BoxCollider::centered(pw, ph),
            Solid,
            platform(pw),
            ZIndex(0),
        ));
    }

    let (sw, sh) = SPIKE_SIZE;
    for (x, y) in SPIKES {
        commands.spawn((
            Group::new(GROUP_SPIKE),
            MapPosition::new(x, y),
            BoxCollider::centered(sw, sh),
            Shape::Triangle {
                width: sw,
                height: sh,
                color: SPIKE_COLOR,
            },
            ZIndex(1),
        ));
    }

    for (x, y) in MEMORIES {
        commands.spawn((
            Group::new(GROUP_MEMORY),
            MapPosition::new(x, y),
            BoxCollider::centered(MEMORY_RADIUS * 2.0, MEMORY_RADIUS * 2.0),
            Shape::Circle {
                radius: MEMORY_RADIUS,
                color: MEMORY_COLOR,
            },
            ZIndex(1),
        ));
    }

    let (gw, gh) = GOAL_SIZE;
    commands.spawn((
        Group::new(GROUP_GOAL),
        MapPosition::new(GOAL.0, GOAL.1),
        BoxCollider::centered(gw, gh),
        Shape::Rect {
            width: gw,
            height: gh,
            color: GOAL_COLOR,
        },
        ZIndex(1),
    ));
}

fn spawn_hud(commands: &mut Commands, signals: &mut WorldSignals) {
    commands.spawn((
        DynamicText::new(
            format!("Souvenirs: 0/{}", MEMORY_COUNT),
            20.0,
            Color::WHITE,
        ),
        SignalBinding::new(SIGNAL_COLLECTED)
            .with_format(format!("Souvenirs: {{}}/{}", MEMORY_COUNT)),
        ScreenPosition::new(16.0, 12.0),
        ZIndex(10),
    ));

    let popup = commands
        .spawn((
            Popup,
            DynamicText::new("", 22.0, Color::WHITE).centered(),
            ScreenPosition::new(PLAY_WIDTH * 0.5, 80.0),
            Tint::transparent(0.0),
            popup_tween().stopped(),
            ZIndex(11),
        ))
        .id();
    signals.set_entity("popup", popup);

    commands.spawn((
        DynamicText::new(HELP_TEXT, 16.0, HELP_COLOR),
        ScreenPosition::new(16.0, PLAY_HEIGHT - 24.0),
        ZIndex(10),
    ));
}

/// The strip under the play area and its three hold buttons.
fn spawn_control_buttons(commands: &mut Commands) {
    let strip_y = PLAY_HEIGHT + UI_BOTTOM * 0.5;
    commands.spawn((
        Shape::Rect {
            width: PLAY_WIDTH,
            height: UI_BOTTOM,
            color: STRIP_COLOR,
        },
        ScreenPosition::new(PLAY_WIDTH * 0.5, strip_y),
        ZIndex(8),
    ));

    let controls = [
        ("btnLeft", "<", 100.0, 150.0),
        ("btnRight", ">", 270.0, 150.0),
        ("btnJump", "SAUT", 850.0, 200.0),
    ];
    for (id, label, x, width) in controls {
        commands.spawn((
            Button::new(id, width, 110.0, CONTROL_COLOR).with_hover_fill(CONTROL_PRESSED_COLOR),
            ScreenPosition::new(x, strip_y),
            ZIndex(9),
        ));
        commands.spawn((
            DynamicText::new(label, 40.0, Color::WHITE).centered(),
            ScreenPosition::new(x, strip_y),
            ZIndex(10),
        ));
    }
}

/// Cover the level and offer the gift link.
pub fn enter_won(mut commands: Commands, config: Res<GameConfig>) {
    let center_x = PLAY_WIDTH * 0.5;
    commands.spawn((
        Shape::Rect {
            width: PLAY_WIDTH,
            height: PLAY_HEIGHT,
            color: Color::BLACK,
        },
        Tint::transparent(0.75),
        ScreenPosition::new(center_x, PLAY_HEIGHT * 0.5),
        ZIndex(20),
    ));
    commands.spawn((
        DynamicText::new(WIN_TITLE, 44.0, Color::WHITE).centered(),
        ScreenPosition::new(center_x, 170.0),
        ZIndex(21),
    ));
    commands.spawn((
        DynamicText::new(WIN_SUBTITLE, 28.0, Color::WHITE).centered(),
        ScreenPosition::new(center_x, 250.0),
        ZIndex(21),
    ));
    commands.spawn((
        Button::new("btnGift", 300.0, 70.0, GIFT_COLOR)
            .with_hover_fill(GIFT_HOVER_COLOR)
            .with_action(ButtonAction::OpenUrl(config.gift_url.clone())),
        ScreenPosition::new(center_x, 340.0),
        ZIndex(21),
    ));
    commands.spawn((
        DynamicText::new(GIFT_LABEL, 24.0, Color::BLACK).centered(),
        ScreenPosition::new(center_x, 340.0),
        ZIndex(22),
    ));
    info!("Gift unlocked");
}

pub fn quit_game(mut signals: ResMut<WorldSignals>) {
    info!("Quitting");
    signals.set_flag("quit_game");
}

/// player × memory
pub fn on_collect(_player: Entity, memory: Entity, ctx: &mut CollisionContext) {
    ctx.commands.entity(memory).despawn();

    let collected =
        (ctx.signals.get_integer(SIGNAL_COLLECTED).unwrap_or(0) + 1).min(MEMORY_COUNT);
    ctx.signals.set_integer(SIGNAL_COLLECTED, collected);
    info!("Memory collected ({}/{})", collected, MEMORY_COUNT);

    ctx.commands
        .trigger(ShowPopupEvent::new(COLLECT_MESSAGES[(collected - 1) as usize]));
    if collected >= MEMORY_COUNT {
        ctx.commands.trigger(ShowPopupEvent::new(DOOR_UNLOCKED));
    }
}

/// player × spike: back to the start, memories are kept.
pub fn on_hazard(player: Entity, _spike: Entity, ctx: &mut CollisionContext) {
    if let Ok(mut rigidbody) = ctx.rigidbodies.get_mut(player) {
        rigidbody.stop();
    }
    if let Ok(mut position) = ctx.positions.get_mut(player) {
        position.set_pos(player_spawn());
    }
    ctx.commands.trigger(ShowPopupEvent::new(RESPAWN_MESSAGE));
}

/// player × goal: the door only opens with every memory.
pub fn on_goal(player: Entity, _goal: Entity, ctx: &mut CollisionContext) {
    let collected = ctx.signals.get_integer(SIGNAL_COLLECTED).unwrap_or(0);
    if collected < MEMORY_COUNT {
        ctx.commands.trigger(ShowPopupEvent::new(MISSING_MEMORIES));
        return;
    }

    ctx.physics.pause();
    if let Ok(mut rigidbody) = ctx.rigidbodies.get_mut(player) {
        rigidbody.stop();
    }
    ctx.next_state.set(GameStates::Won);
}
