use bevy_ecs::prelude::Component;

/// Image drawn centred on the entity position.
///
/// The texture identified by `tex_key` is scaled to `width` x `height`
/// world units. Without a loaded texture in the
/// [`TextureStore`](crate::resources::texturestore::TextureStore) a plain
/// rounded box is drawn in its place.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
        }
    }
}
