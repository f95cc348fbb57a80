//! Wrappers for externally owned GPU resources.
//!
//! Textures and shaders are created and destroyed by the graphics backend.
//! Strata only needs to know which resource a render state refers to, so the
//! wrappers carry an opaque handle plus the metadata a draw call may inspect.

use strata_core::geometry::Size;

/// An identifier corresponding to a backend texture
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct TextureHandle(pub u64);

/// An identifier corresponding to a backend shader program
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct ShaderHandle(pub u64);

/// A texture owned by the graphics backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    handle: TextureHandle,
    size: Size<u32>,
}

impl Texture {
    pub fn new(handle: TextureHandle, size: Size<u32>) -> Self {
        Self { handle, size }
    }

    /// The backend handle.
    pub fn handle(&self) -> TextureHandle {
        self.handle
    }

    /// Size in pixels.
    pub fn size(&self) -> Size<u32> {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }
}

/// A shader program owned by the graphics backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shader {
    handle: ShaderHandle,
    label: Option<String>,
}

impl Shader {
    pub fn new(handle: ShaderHandle) -> Self {
        Self { handle, label: None }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The backend handle.
    pub fn handle(&self) -> ShaderHandle {
        self.handle
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texture_accessors() {
        let texture = Texture::new(TextureHandle(7), Size::new(256, 128));
        assert_eq!(texture.handle(), TextureHandle(7));
        assert_eq!(texture.width(), 256);
        assert_eq!(texture.height(), 128);
    }

    #[test]
    fn test_shader_label() {
        let shader = Shader::new(ShaderHandle(3));
        assert_eq!(shader.label(), None);

        let shader = shader.with_label("outline");
        assert_eq!(shader.handle(), ShaderHandle(3));
        assert_eq!(shader.label(), Some("outline"));
    }
}
