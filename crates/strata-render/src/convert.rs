//! Construction of [`RenderStates`] from the flat parameters a binding layer
//! passes in.

use strata_core::config::{CodePolicy, Config};

use crate::{
    BlendCodes, BlendEquation, BlendFactor, BlendField, BlendMode, RenderStateError,
    RenderStateResult, RenderStates, Shader, Texture, Transform,
};

/// Build render states from six blend codes, a transform buffer and optional
/// resources.
///
/// The codes are decoded through the [`BlendFactor`] and [`BlendEquation`]
/// tables and the first unknown one is returned as an error. The matrix is
/// handed to [`Transform::from_matrix`]. Absent resources stay absent.
///
/// ```
/// use strata_render::{create_render_states, BlendMode, Transform};
///
/// let identity = Transform::IDENTITY.matrix();
/// let states = create_render_states(1, 0, 0, 1, 0, 0, &identity, None, None).unwrap();
/// assert_eq!(states.blend_mode, BlendMode::NONE);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn create_render_states<'a>(
    color_src_factor: i32,
    color_dst_factor: i32,
    color_equation: i32,
    alpha_src_factor: i32,
    alpha_dst_factor: i32,
    alpha_equation: i32,
    transform: &[f32; 16],
    texture: Option<&'a Texture>,
    shader: Option<&'a Shader>,
) -> RenderStateResult<RenderStates<'a>> {
    let codes = BlendCodes::new(
        color_src_factor,
        color_dst_factor,
        color_equation,
        alpha_src_factor,
        alpha_dst_factor,
        alpha_equation,
    );
    create_render_states_with(&Config::default(), codes, transform, texture, shader)
}

/// Build render states, handling unknown blend codes according to `config`.
///
/// With [`CodePolicy::Fallback`] this never fails: each unknown code is
/// replaced by the matching field of [`BlendMode::default`].
pub fn create_render_states_with<'a>(
    config: &Config,
    codes: BlendCodes,
    transform: &[f32; 16],
    texture: Option<&'a Texture>,
    shader: Option<&'a Shader>,
) -> RenderStateResult<RenderStates<'a>> {
    let blend_mode = match config.invalid_codes {
        CodePolicy::Reject => BlendMode::from_codes(codes).inspect_err(|err| {
            tracing::debug!("Rejected render states: {}", err);
        })?,
        CodePolicy::Fallback => blend_mode_or_default(codes),
    };

    let states = RenderStates {
        blend_mode,
        transform: Transform::from_matrix(transform),
        texture,
        shader,
    };

    tracing::trace!(
        blend_mode = ?states.blend_mode,
        texture = ?states.texture.map(Texture::handle),
        shader = ?states.shader.map(Shader::handle),
        "Created render states"
    );

    Ok(states)
}

fn blend_mode_or_default(codes: BlendCodes) -> BlendMode {
    use BlendField::*;

    let d = BlendMode::default();

    BlendMode {
        color_src_factor: factor_or(ColorSrcFactor, codes.color_src_factor, d.color_src_factor),
        color_dst_factor: factor_or(ColorDstFactor, codes.color_dst_factor, d.color_dst_factor),
        color_equation: equation_or(ColorEquation, codes.color_equation, d.color_equation),
        alpha_src_factor: factor_or(AlphaSrcFactor, codes.alpha_src_factor, d.alpha_src_factor),
        alpha_dst_factor: factor_or(AlphaDstFactor, codes.alpha_dst_factor, d.alpha_dst_factor),
        alpha_equation: equation_or(AlphaEquation, codes.alpha_equation, d.alpha_equation),
    }
}

fn factor_or(field: BlendField, code: i32, fallback: BlendFactor) -> BlendFactor {
    BlendFactor::decode(field, code).unwrap_or_else(|err| substitute(err, fallback))
}

fn equation_or(field: BlendField, code: i32, fallback: BlendEquation) -> BlendEquation {
    BlendEquation::decode(field, code).unwrap_or_else(|err| substitute(err, fallback))
}

fn substitute<T: std::fmt::Debug>(err: RenderStateError, fallback: T) -> T {
    tracing::warn!("{}, using {:?}", err, fallback);
    fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ShaderHandle, TextureHandle};
    use strata_core::geometry::Size;

    const IDENTITY: [f32; 16] = Transform::IDENTITY_MATRIX;

    #[test]
    fn test_fallback_replaces_only_bad_fields() {
        let codes = BlendCodes::new(4, 0, 9, 1, -2, 1);
        let states =
            create_render_states_with(&Config::lenient(), codes, &IDENTITY, None, None).unwrap();
        let default = BlendMode::default();

        assert_eq!(states.blend_mode.color_src_factor, BlendFactor::DstColor);
        assert_eq!(states.blend_mode.color_dst_factor, BlendFactor::Zero);
        assert_eq!(states.blend_mode.color_equation, default.color_equation);
        assert_eq!(states.blend_mode.alpha_src_factor, BlendFactor::One);
        assert_eq!(states.blend_mode.alpha_dst_factor, default.alpha_dst_factor);
        assert_eq!(states.blend_mode.alpha_equation, BlendEquation::Subtract);
    }

    #[test]
    fn test_reject_policy_matches_plain_constructor() {
        let codes = BlendCodes::new(0, 12, 0, 0, 0, 0);
        let err = create_render_states_with(&Config::default(), codes, &IDENTITY, None, None)
            .unwrap_err();
        assert_eq!(
            err,
            RenderStateError::InvalidBlendFactor {
                field: BlendField::ColorDstFactor,
                code: 12
            }
        );
        let plain = create_render_states(0, 12, 0, 0, 0, 0, &IDENTITY, None, None);
        assert_eq!(plain.unwrap_err(), err);
    }

    #[test]
    fn test_resources_forwarded_under_fallback() {
        let texture = Texture::new(TextureHandle(1), Size::new(2, 2));
        let shader = Shader::new(ShaderHandle(1));
        let states = create_render_states_with(
            &Config::lenient(),
            BlendCodes::new(-1, -1, -1, -1, -1, -1),
            &IDENTITY,
            Some(&texture),
            Some(&shader),
        )
        .unwrap();

        assert_eq!(states.blend_mode, BlendMode::default());
        assert!(std::ptr::eq(states.texture.unwrap(), &texture));
        assert!(std::ptr::eq(states.shader.unwrap(), &shader));
    }
}
