//! Raw-pointer entry point for foreign binding layers.
//!
//! Foreign callers signal an absent texture or shader with a null pointer.
//! Those pointers are turned into `Option` references right here and never
//! travel further into the crate.

use crate::{
    BlendCodes, RenderStateError, RenderStateResult, RenderStates, Shader, Texture,
    create_render_states_with,
};
use strata_core::config::Config;

/// Build render states from raw binding parameters.
///
/// A null `texture` or `shader` means "none". A null `transform` is
/// rejected with [`RenderStateError::NullTransform`].
///
/// # Safety
///
/// - A non-null `transform` must point to 16 readable, initialised `f32`s.
/// - A non-null `texture` or `shader` must point to a live value that stays
///   valid and unmodified for `'a`.
pub unsafe fn render_states_from_raw<'a>(
    config: &Config,
    codes: BlendCodes,
    transform: *const f32,
    texture: *const Texture,
    shader: *const Shader,
) -> RenderStateResult<RenderStates<'a>> {
    if transform.is_null() {
        tracing::debug!("Rejected render states: null transform");
        return Err(RenderStateError::NullTransform);
    }

    // SAFETY: non-null, and the caller guarantees 16 readable floats.
    let matrix = unsafe { &*transform.cast::<[f32; 16]>() };
    // SAFETY: the caller guarantees non-null resources live for 'a.
    let texture = unsafe { texture.as_ref() };
    let shader = unsafe { shader.as_ref() };

    create_render_states_with(config, codes, matrix, texture, shader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BlendMode, ShaderHandle, TextureHandle, Transform};
    use std::ptr;
    use strata_core::geometry::Size;

    #[test]
    fn test_null_resources_become_none() {
        let matrix = Transform::IDENTITY_MATRIX;
        let states = unsafe {
            render_states_from_raw(
                &Config::default(),
                BlendMode::ALPHA.codes(),
                matrix.as_ptr(),
                ptr::null(),
                ptr::null(),
            )
        }
        .unwrap();

        assert_eq!(states, RenderStates::DEFAULT);
    }

    #[test]
    fn test_non_null_resources_are_borrowed() {
        let matrix = Transform::IDENTITY_MATRIX;
        let texture = Texture::new(TextureHandle(11), Size::new(32, 32));
        let shader = Shader::new(ShaderHandle(12));

        let states = unsafe {
            render_states_from_raw(
                &Config::default(),
                BlendMode::ADD.codes(),
                matrix.as_ptr(),
                &texture,
                &shader,
            )
        }
        .unwrap();

        assert!(ptr::eq(states.texture.unwrap(), &texture));
        assert!(ptr::eq(states.shader.unwrap(), &shader));
        assert_eq!(states.blend_mode, BlendMode::ADD);
    }

    #[test]
    fn test_null_transform_rejected() {
        let result = unsafe {
            render_states_from_raw(
                &Config::default(),
                BlendCodes::default(),
                ptr::null(),
                ptr::null(),
                ptr::null(),
            )
        };
        assert_eq!(result.unwrap_err(), RenderStateError::NullTransform);
    }
}
