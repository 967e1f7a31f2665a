//! Rendering.
//!
//! Everything is drawn into the fixed-resolution [`RenderTarget`] sorted by
//! [`ZIndex`], then the target is scaled into the window with letterboxing.
//! World pieces are placed by [`MapPosition`] and UI by [`ScreenPosition`];
//! both are centre points except top-left anchored text.
use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemParam;
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::button::Button;
use crate::components::dynamictext::{DynamicText, TextAnchor};
use crate::components::mapposition::MapPosition;
use crate::components::screenposition::ScreenPosition;
use crate::components::shape::Shape;
use crate::components::sprite::Sprite;
use crate::components::tint::Tint;
use crate::components::zindex::ZIndex;
use crate::level::{BACKGROUND, PLACEHOLDER};
use crate::resources::debugmode::DebugMode;
use crate::resources::rendertarget::RenderTarget;
use crate::resources::texturestore::TextureStore;
use crate::resources::windowsize::WindowSize;

/// One thing to draw this frame.
#[derive(Debug, Clone)]
pub enum DrawItem {
    Shape {
        shape: Shape,
        center: Vector2,
        tint: Tint,
    },
    Sprite {
        sprite: Sprite,
        center: Vector2,
        tint: Tint,
    },
    Text {
        text: DynamicText,
        pos: Vector2,
        tint: Tint,
    },
    Button {
        fill: Color,
        center: Vector2,
        size: Vector2,
    },
}

/// Everything the renderer reads from the world.
#[derive(SystemParam)]
pub struct Drawables<'w, 's> {
    shapes: Query<
        'w,
        's,
        (
            &'static Shape,
            Option<&'static MapPosition>,
            Option<&'static ScreenPosition>,
            Option<&'static ZIndex>,
            Option<&'static Tint>,
        ),
    >,
    sprites: Query<
        'w,
        's,
        (
            &'static Sprite,
            &'static MapPosition,
            Option<&'static ZIndex>,
            Option<&'static Tint>,
        ),
    >,
    texts: Query<
        'w,
        's,
        (
            &'static DynamicText,
            &'static ScreenPosition,
            Option<&'static ZIndex>,
            Option<&'static Tint>,
        ),
    >,
    buttons: Query<
        'w,
        's,
        (
            &'static Button,
            &'static ScreenPosition,
            Option<&'static ZIndex>,
        ),
    >,
    colliders: Query<'w, 's, (&'static BoxCollider, &'static MapPosition)>,
}

impl Drawables<'_, '_> {
    /// Items in back-to-front order. Equal z keeps spawn order.
    pub fn draw_list(&self) -> Vec<DrawItem> {
        let z = |z: Option<&ZIndex>| z.copied().unwrap_or_default().0;
        let tint = |t: Option<&Tint>| t.copied().unwrap_or_default();

        let mut items: Vec<(i32, DrawItem)> = Vec::new();
        for (shape, map, screen, zindex, t) in self.shapes.iter() {
            let Some(center) = map.map(|m| m.pos).or(screen.map(|s| s.pos)) else {
                continue;
            };
            items.push((
                z(zindex),
                DrawItem::Shape {
                    shape: *shape,
                    center,
                    tint: tint(t),
                },
            ));
        }
        for (sprite, position, zindex, t) in self.sprites.iter() {
            items.push((
                z(zindex),
                DrawItem::Sprite {
                    sprite: sprite.clone(),
                    center: position.pos,
                    tint: tint(t),
                },
            ));
        }
        for (button, position, zindex) in self.buttons.iter() {
            items.push((
                z(zindex),
                DrawItem::Button {
                    fill: button.current_fill(),
                    center: position.pos,
                    size: button.size,
                },
            ));
        }
        for (text, position, zindex, t) in self.texts.iter() {
            items.push((
                z(zindex),
                DrawItem::Text {
                    text: text.clone(),
                    pos: position.pos,
                    tint: tint(t),
                },
            ));
        }

        items.sort_by_key(|(z, _)| *z);
        items.into_iter().map(|(_, item)| item).collect()
    }
}

pub fn render_system(
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    mut target: NonSendMut<RenderTarget>,
    textures: NonSend<TextureStore>,
    window: Res<WindowSize>,
    debug: Option<Res<DebugMode>>,
    drawables: Drawables,
) {
    let mut items = drawables.draw_list();
    for item in items.iter_mut() {
        if let DrawItem::Text { text, pos, .. } = item {
            let width = match text.anchor {
                TextAnchor::TopLeft => 0,
                TextAnchor::Center => rl.measure_text(&text.content, text.font_size as i32),
            };
            *pos = text_origin(text.anchor, *pos, text.font_size, width);
        }
    }
    let (game_width, game_height) = (target.game_width, target.game_height);

    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::BLACK);
    {
        let mut t = d.begin_texture_mode(&th, &mut target.texture);
        t.clear_background(BACKGROUND);
        for item in &items {
            draw_item(&mut t, item, &textures);
        }
        if debug.is_some() {
            for (collider, position) in drawables.colliders.iter() {
                let (x, y, w, h) = collider.get_aabb(position.pos);
                t.draw_rectangle_lines_ex(Rectangle::new(x, y, w, h), 1.0, Color::RED);
            }
            t.draw_fps(game_width as i32 - 100, 10);
        }
    }

    let dest = window.calculate_letterbox(game_width, game_height);
    d.draw_texture_pro(
        &target.texture,
        target.source_rect(),
        dest,
        Vector2::zero(),
        0.0,
        Color::WHITE,
    );
}

fn draw_item<D: RaylibDraw>(d: &mut D, item: &DrawItem, textures: &TextureStore) {
    match item {
        DrawItem::Shape {
            shape,
            center,
            tint,
        } => draw_shape(d, shape, *center, tint.multiply(shape.color())),
        DrawItem::Sprite {
            sprite,
            center,
            tint,
        } => {
            let dest = Rectangle::new(
                center.x - sprite.width * 0.5,
                center.y - sprite.height * 0.5,
                sprite.width,
                sprite.height,
            );
            match textures.get(&sprite.tex_key) {
                Some(tex) => {
                    let src = Rectangle::new(0.0, 0.0, tex.width as f32, tex.height as f32);
                    d.draw_texture_pro(tex, src, dest, Vector2::zero(), 0.0, tint.color);
                }
                None => {
                    d.draw_rectangle_rounded(dest, 0.3, 8, tint.multiply(PLACEHOLDER));
                }
            }
        }
        DrawItem::Button { fill, center, size } => {
            let rect = Rectangle::new(
                center.x - size.x * 0.5,
                center.y - size.y * 0.5,
                size.x,
                size.y,
            );
            d.draw_rectangle_rounded(rect, 0.25, 8, *fill);
        }
        DrawItem::Text { text, pos, tint } => {
            d.draw_text(
                &text.content,
                pos.x as i32,
                pos.y as i32,
                text.font_size as i32,
                tint.multiply(text.color),
            );
        }
    }
}

fn draw_shape<D: RaylibDraw>(d: &mut D, shape: &Shape, center: Vector2, color: Color) {
    match *shape {
        Shape::RoundedRect {
            width,
            height,
            radius,
            ..
        } => {
            let rect = Rectangle::new(
                center.x - width * 0.5,
                center.y - height * 0.5,
                width,
                height,
            );
            // raylib roundness is relative to half the shorter side
            let roundness = (radius / (width.min(height) * 0.5)).clamp(0.0, 1.0);
            d.draw_rectangle_rounded(rect, roundness, 8, color);
        }
        Shape::Rect { width, height, .. } => {
            let rect = Rectangle::new(
                center.x - width * 0.5,
                center.y - height * 0.5,
                width,
                height,
            );
            d.draw_rectangle_rec(rect, color);
        }
        Shape::Circle { radius, .. } => d.draw_circle_v(center, radius, color),
        Shape::Triangle { width, height, .. } => {
            let [apex, left, right] = Shape::triangle_points(center, width, height);
            d.draw_triangle(apex, left, right, color);
        }
    }
}

/// Top-left corner for text of measured pixel `width` placed at `pos`.
fn text_origin(anchor: TextAnchor, pos: Vector2, font_size: f32, width: i32) -> Vector2 {
    match anchor {
        TextAnchor::TopLeft => pos,
        TextAnchor::Center => Vector2::new(pos.x - width as f32 * 0.5, pos.y - font_size * 0.5),
    }
}
