//! Level data.
//!
//! One hand-placed level on a 960×540 play area (origin top-left, y down),
//! with a 180 px strip below it for the on-screen controls. Positions are
//! centre points.

use raylib::prelude::{Color, Vector2};

pub const PLAY_WIDTH: f32 = 960.0;
pub const PLAY_HEIGHT: f32 = 540.0;
/// Height of the control strip under the play area.
pub const UI_BOTTOM: f32 = 180.0;
/// Fixed framebuffer size: the play area over the control strip.
pub const RENDER_WIDTH: u32 = PLAY_WIDTH as u32;
pub const RENDER_HEIGHT: u32 = (PLAY_HEIGHT + UI_BOTTOM) as u32;

/// Opaque colour from a `0xRRGGBB` value.
pub const fn rgb(hex: u32) -> Color {
    Color {
        r: ((hex >> 16) & 0xff) as u8,
        g: ((hex >> 8) & 0xff) as u8,
        b: (hex & 0xff) as u8,
        a: 0xff,
    }
}

pub const BACKGROUND: Color = rgb(0x0b0b0f);
pub const PLATFORM_COLOR: Color = rgb(0x1f2937);
pub const SPIKE_COLOR: Color = rgb(0xef4444);
pub const MEMORY_COLOR: Color = rgb(0xfbbf24);
pub const GOAL_COLOR: Color = rgb(0x60a5fa);
pub const HELP_COLOR: Color = rgb(0x9ca3af);
pub const STRIP_COLOR: Color = rgb(0x111827);
pub const CONTROL_COLOR: Color = rgb(0x374151);
pub const CONTROL_PRESSED_COLOR: Color = rgb(0x4b5563);
pub const GIFT_COLOR: Color = rgb(0x22c55e);
pub const GIFT_HOVER_COLOR: Color = rgb(0x16a34a);
/// Drawn in place of a sprite whose texture failed to load.
pub const PLACEHOLDER: Color = rgb(0xf9fafb);

pub const PLATFORM_SIZE: (f32, f32) = (180.0, 28.0);
pub const PLATFORM_RADIUS: f32 = 6.0;
/// The ground is a platform stretched horizontally.
pub const GROUND: (f32, f32) = (480.0, 520.0);
pub const GROUND_SCALE: f32 = 6.0;
pub const PLATFORMS: [(f32, f32); 5] = [
    (220.0, 430.0),
    (520.0, 360.0),
    (820.0, 300.0),
    (700.0, 210.0),
    (360.0, 210.0),
];

pub const SPIKE_SIZE: (f32, f32) = (36.0, 26.0);
pub const SPIKES: [(f32, f32); 5] = [
    (410.0, 506.0),
    (446.0, 506.0),
    (482.0, 506.0),
    (600.0, 506.0),
    (636.0, 506.0),
];

pub const MEMORY_RADIUS: f32 = 16.0;
pub const MEMORIES: [(f32, f32); 3] = [(220.0, 380.0), (520.0, 310.0), (700.0, 160.0)];
/// Memories needed to open the door.
pub const MEMORY_COUNT: i32 = MEMORIES.len() as i32;

pub const GOAL: (f32, f32) = (900.0, 460.0);
pub const GOAL_SIZE: (f32, f32) = (40.0, 70.0);

pub const PLAYER_SPAWN: (f32, f32) = (100.0, 450.0);
pub const PLAYER_SIZE: (f32, f32) = (40.0, 56.0);
/// The hitbox sits slightly lower than the image.
pub const PLAYER_COLLIDER_DROP: f32 = 2.4;
pub const PLAYER_BOUNCE: f32 = 0.05;
pub const PLAYER_TEXTURE: &str = "player";

pub fn player_spawn() -> Vector2 {
    Vector2::new(PLAYER_SPAWN.0, PLAYER_SPAWN.1)
}

// Collision groups
pub const GROUP_PLAYER: &str = "player";
pub const GROUP_PLATFORM: &str = "platform";
pub const GROUP_SPIKE: &str = "spike";
pub const GROUP_MEMORY: &str = "memory";
pub const GROUP_GOAL: &str = "goal";

/// World signal holding the number of memories picked up.
pub const SIGNAL_COLLECTED: &str = "collected";

pub const COLLECT_MESSAGES: [&str; 3] = [
    "Un jeu signé... connard !",
    "Vas-y roule, vas-y roule !",
    "Merci pour tout",
];
pub const DOOR_UNLOCKED: &str = "Porte déverrouillée !";
pub const MISSING_MEMORIES: &str = "Il te manque des souvenirs";
pub const RESPAWN_MESSAGE: &str = "Aïe ! Respawn";
pub const HELP_TEXT: &str = "<- -> + saut (mobile: boutons)";

pub const WIN_TITLE: &str = "BRAVO PAPA !";
pub const WIN_SUBTITLE: &str = "Tu as débloqué ton cadeau :";
pub const GIFT_LABEL: &str = "VOIR LE CADEAU";
