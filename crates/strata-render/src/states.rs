//! The parameters governing a single draw call.

use static_assertions::assert_impl_all;

use crate::{BlendMode, Shader, Texture, Transform};

/// Blend mode, transform, texture and shader for a draw call.
///
/// The texture and shader are borrowed: they belong to whoever created them
/// and must outlive every use of the render state. A render state never
/// releases or modifies them.
///
/// Equality compares the blend mode and transform by value, and the texture
/// and shader by identity: two states are equal only if they refer to the
/// very same resources.
#[derive(Debug, Clone, Copy)]
pub struct RenderStates<'a> {
    pub blend_mode: BlendMode,
    pub transform: Transform,
    pub texture: Option<&'a Texture>,
    pub shader: Option<&'a Shader>,
}

assert_impl_all!(RenderStates<'static>: Send, Sync, Copy);

impl RenderStates<'static> {
    /// Alpha blending, identity transform, no texture and no shader.
    pub const DEFAULT: RenderStates<'static> = RenderStates {
        blend_mode: BlendMode::ALPHA,
        transform: Transform::IDENTITY,
        texture: None,
        shader: None,
    };
}

impl Default for RenderStates<'_> {
    fn default() -> Self {
        RenderStates::DEFAULT
    }
}

impl<'a> RenderStates<'a> {
    pub fn new(
        blend_mode: BlendMode,
        transform: Transform,
        texture: Option<&'a Texture>,
        shader: Option<&'a Shader>,
    ) -> Self {
        Self {
            blend_mode,
            transform,
            texture,
            shader,
        }
    }

    pub fn from_blend_mode(blend_mode: BlendMode) -> Self {
        Self {
            blend_mode,
            ..Self::default()
        }
    }

    pub fn from_transform(transform: Transform) -> Self {
        Self {
            transform,
            ..Self::default()
        }
    }

    pub fn from_texture(texture: &'a Texture) -> Self {
        Self {
            texture: Some(texture),
            ..Self::default()
        }
    }

    pub fn from_shader(shader: &'a Shader) -> Self {
        Self {
            shader: Some(shader),
            ..Self::default()
        }
    }

    pub fn with_blend_mode(mut self, blend_mode: BlendMode) -> Self {
        self.blend_mode = blend_mode;
        self
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_texture(mut self, texture: Option<&'a Texture>) -> Self {
        self.texture = texture;
        self
    }

    pub fn with_shader(mut self, shader: Option<&'a Shader>) -> Self {
        self.shader = shader;
        self
    }
}

fn same_resource<T>(a: Option<&T>, b: Option<&T>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => std::ptr::eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

impl PartialEq for RenderStates<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.blend_mode == other.blend_mode
            && self.transform == other.transform
            && same_resource(self.texture, other.texture)
            && same_resource(self.shader, other.shader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ShaderHandle, TextureHandle};
    use strata_core::{geometry::Size, math::Vec2};

    #[test]
    fn test_default_states() {
        let states = RenderStates::default();
        assert_eq!(states.blend_mode, BlendMode::ALPHA);
        assert_eq!(states.transform, Transform::IDENTITY);
        assert!(states.texture.is_none());
        assert!(states.shader.is_none());
    }

    #[test]
    fn test_single_field_constructors() {
        let texture = Texture::new(TextureHandle(1), Size::new(4, 4));
        let shader = Shader::new(ShaderHandle(2));
        let shift = Transform::from_translation(Vec2::new(1.0, 1.0));

        assert_eq!(RenderStates::from_blend_mode(BlendMode::ADD).blend_mode, BlendMode::ADD);
        assert_eq!(RenderStates::from_transform(shift).transform, shift);
        assert!(std::ptr::eq(RenderStates::from_texture(&texture).texture.unwrap(), &texture));
        assert!(std::ptr::eq(RenderStates::from_shader(&shader).shader.unwrap(), &shader));
    }

    #[test]
    fn test_equality_uses_resource_identity() {
        let first = Texture::new(TextureHandle(9), Size::new(8, 8));
        let twin = first.clone();

        let a = RenderStates::from_texture(&first);
        let b = RenderStates::from_texture(&first);
        let c = RenderStates::from_texture(&twin);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, RenderStates::default());
    }

    #[test]
    fn test_builder_overrides() {
        let shader = Shader::new(ShaderHandle(5));
        let states = RenderStates::default()
            .with_blend_mode(BlendMode::MULTIPLY)
            .with_shader(Some(&shader))
            .with_shader(None);
        assert_eq!(states.blend_mode, BlendMode::MULTIPLY);
        assert!(states.shader.is_none());
    }
}
