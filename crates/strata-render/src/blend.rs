//! Blend modes: how drawn colors are combined with the target's pixels.
//!
//! A [`BlendMode`] holds a source factor, a destination factor and an
//! equation for the color channels, and the same triple for alpha:
//!
//! ```text
//! result.rgb = color_equation(src.rgb * color_src_factor, dst.rgb * color_dst_factor)
//! result.a   = alpha_equation(src.a * alpha_src_factor, dst.a * alpha_dst_factor)
//! ```
//!
//! Factors and equations have stable integer codes so that binding layers can
//! pass them across a language boundary. Decoding is exhaustive: an unknown
//! code is an error, never an unspecified enumeration value.

use bytemuck::{Pod, Zeroable};

use crate::error::{BlendField, RenderStateError, RenderStateResult};

/// Factor applied to a source or destination value before blending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendFactor {
    /// (0, 0, 0, 0)
    Zero,
    /// (1, 1, 1, 1)
    One,
    /// (src.r, src.g, src.b, src.a)
    SrcColor,
    /// (1, 1, 1, 1) - (src.r, src.g, src.b, src.a)
    OneMinusSrcColor,
    /// (dst.r, dst.g, dst.b, dst.a)
    DstColor,
    /// (1, 1, 1, 1) - (dst.r, dst.g, dst.b, dst.a)
    OneMinusDstColor,
    /// (src.a, src.a, src.a, src.a)
    SrcAlpha,
    /// (1, 1, 1, 1) - (src.a, src.a, src.a, src.a)
    OneMinusSrcAlpha,
    /// (dst.a, dst.a, dst.a, dst.a)
    DstAlpha,
    /// (1, 1, 1, 1) - (dst.a, dst.a, dst.a, dst.a)
    OneMinusDstAlpha,
}

impl BlendFactor {
    /// All factors, in code order.
    pub const ALL: [BlendFactor; 10] = [
        BlendFactor::Zero,
        BlendFactor::One,
        BlendFactor::SrcColor,
        BlendFactor::OneMinusSrcColor,
        BlendFactor::DstColor,
        BlendFactor::OneMinusDstColor,
        BlendFactor::SrcAlpha,
        BlendFactor::OneMinusSrcAlpha,
        BlendFactor::DstAlpha,
        BlendFactor::OneMinusDstAlpha,
    ];

    /// Decode a factor from its binding code.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(BlendFactor::Zero),
            1 => Some(BlendFactor::One),
            2 => Some(BlendFactor::SrcColor),
            3 => Some(BlendFactor::OneMinusSrcColor),
            4 => Some(BlendFactor::DstColor),
            5 => Some(BlendFactor::OneMinusDstColor),
            6 => Some(BlendFactor::SrcAlpha),
            7 => Some(BlendFactor::OneMinusSrcAlpha),
            8 => Some(BlendFactor::DstAlpha),
            9 => Some(BlendFactor::OneMinusDstAlpha),
            _ => None,
        }
    }

    /// Decode a factor, reporting `field` in the error on an unknown code.
    pub fn decode(field: BlendField, code: i32) -> RenderStateResult<Self> {
        Self::from_code(code).ok_or(RenderStateError::InvalidBlendFactor { field, code })
    }

    /// The binding code of this factor.
    pub fn code(self) -> i32 {
        match self {
            BlendFactor::Zero => 0,
            BlendFactor::One => 1,
            BlendFactor::SrcColor => 2,
            BlendFactor::OneMinusSrcColor => 3,
            BlendFactor::DstColor => 4,
            BlendFactor::OneMinusDstColor => 5,
            BlendFactor::SrcAlpha => 6,
            BlendFactor::OneMinusSrcAlpha => 7,
            BlendFactor::DstAlpha => 8,
            BlendFactor::OneMinusDstAlpha => 9,
        }
    }

    /// Convert to the equivalent wgpu factor.
    pub fn to_wgpu(self) -> wgpu::BlendFactor {
        match self {
            BlendFactor::Zero => wgpu::BlendFactor::Zero,
            BlendFactor::One => wgpu::BlendFactor::One,
            BlendFactor::SrcColor => wgpu::BlendFactor::Src,
            BlendFactor::OneMinusSrcColor => wgpu::BlendFactor::OneMinusSrc,
            BlendFactor::DstColor => wgpu::BlendFactor::Dst,
            BlendFactor::OneMinusDstColor => wgpu::BlendFactor::OneMinusDst,
            BlendFactor::SrcAlpha => wgpu::BlendFactor::SrcAlpha,
            BlendFactor::OneMinusSrcAlpha => wgpu::BlendFactor::OneMinusSrcAlpha,
            BlendFactor::DstAlpha => wgpu::BlendFactor::DstAlpha,
            BlendFactor::OneMinusDstAlpha => wgpu::BlendFactor::OneMinusDstAlpha,
        }
    }
}

impl TryFrom<i32> for BlendFactor {
    type Error = RenderStateError;

    /// Decodes without a field context; use [`BlendFactor::decode`] to have
    /// the error name a blend input.
    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(RenderStateError::UnknownBlendFactor { code })
    }
}

/// Operation combining the weighted source and destination values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendEquation {
    /// `src * src_factor + dst * dst_factor`
    Add,
    /// `src * src_factor - dst * dst_factor`
    Subtract,
    /// `dst * dst_factor - src * src_factor`
    ReverseSubtract,
}

impl BlendEquation {
    pub const ALL: [BlendEquation; 3] = [
        BlendEquation::Add,
        BlendEquation::Subtract,
        BlendEquation::ReverseSubtract,
    ];

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(BlendEquation::Add),
            1 => Some(BlendEquation::Subtract),
            2 => Some(BlendEquation::ReverseSubtract),
            _ => None,
        }
    }

    pub fn decode(field: BlendField, code: i32) -> RenderStateResult<Self> {
        Self::from_code(code).ok_or(RenderStateError::InvalidBlendEquation { field, code })
    }

    pub fn code(self) -> i32 {
        match self {
            BlendEquation::Add => 0,
            BlendEquation::Subtract => 1,
            BlendEquation::ReverseSubtract => 2,
        }
    }

    pub fn to_wgpu(self) -> wgpu::BlendOperation {
        match self {
            BlendEquation::Add => wgpu::BlendOperation::Add,
            BlendEquation::Subtract => wgpu::BlendOperation::Subtract,
            BlendEquation::ReverseSubtract => wgpu::BlendOperation::ReverseSubtract,
        }
    }
}

impl TryFrom<i32> for BlendEquation {
    type Error = RenderStateError;

    /// Decodes without a field context; use [`BlendEquation::decode`] to have
    /// the error name a blend input.
    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(RenderStateError::UnknownBlendEquation { code })
    }
}

/// The six raw blend codes as passed by a binding layer.
///
/// Field order matches the parameter order of
/// [`create_render_states`](crate::create_render_states).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct BlendCodes {
    pub color_src_factor: i32,
    pub color_dst_factor: i32,
    pub color_equation: i32,
    pub alpha_src_factor: i32,
    pub alpha_dst_factor: i32,
    pub alpha_equation: i32,
}

impl BlendCodes {
    pub fn new(
        color_src_factor: i32,
        color_dst_factor: i32,
        color_equation: i32,
        alpha_src_factor: i32,
        alpha_dst_factor: i32,
        alpha_equation: i32,
    ) -> Self {
        Self {
            color_src_factor,
            color_dst_factor,
            color_equation,
            alpha_src_factor,
            alpha_dst_factor,
            alpha_equation,
        }
    }
}

impl From<BlendMode> for BlendCodes {
    fn from(mode: BlendMode) -> Self {
        mode.codes()
    }
}

/// Full description of how a draw call blends into its target.
///
/// Defaults to [`BlendMode::ALPHA`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlendMode {
    pub color_src_factor: BlendFactor,
    pub color_dst_factor: BlendFactor,
    pub color_equation: BlendEquation,
    pub alpha_src_factor: BlendFactor,
    pub alpha_dst_factor: BlendFactor,
    pub alpha_equation: BlendEquation,
}

impl Default for BlendMode {
    fn default() -> Self {
        Self::ALPHA
    }
}

impl BlendMode {
    /// Standard alpha blending for transparent content.
    ///
    /// Formula: `src.rgb * src.a + dst.rgb * (1 - src.a)`
    pub const ALPHA: Self = Self::separate(
        BlendFactor::SrcAlpha,
        BlendFactor::OneMinusSrcAlpha,
        BlendEquation::Add,
        BlendFactor::One,
        BlendFactor::OneMinusSrcAlpha,
        BlendEquation::Add,
    );

    /// Additive blending.
    ///
    /// Formula: `src.rgb * src.a + dst.rgb`
    pub const ADD: Self = Self::separate(
        BlendFactor::SrcAlpha,
        BlendFactor::One,
        BlendEquation::Add,
        BlendFactor::One,
        BlendFactor::One,
        BlendEquation::Add,
    );

    /// Multiplicative blending.
    ///
    /// Formula: `src * dst`
    pub const MULTIPLY: Self =
        Self::new(BlendFactor::DstColor, BlendFactor::Zero, BlendEquation::Add);

    /// No blending: the source replaces the destination.
    pub const NONE: Self = Self::new(BlendFactor::One, BlendFactor::Zero, BlendEquation::Add);

    /// Use the same factors and equation for color and alpha.
    pub const fn new(src: BlendFactor, dst: BlendFactor, equation: BlendEquation) -> Self {
        Self::separate(src, dst, equation, src, dst, equation)
    }

    pub const fn separate(
        color_src_factor: BlendFactor,
        color_dst_factor: BlendFactor,
        color_equation: BlendEquation,
        alpha_src_factor: BlendFactor,
        alpha_dst_factor: BlendFactor,
        alpha_equation: BlendEquation,
    ) -> Self {
        Self {
            color_src_factor,
            color_dst_factor,
            color_equation,
            alpha_src_factor,
            alpha_dst_factor,
            alpha_equation,
        }
    }

    /// Decode all six codes, failing on the first unknown one.
    ///
    /// Codes are checked in field order: color source, color destination,
    /// color equation, then the alpha triple.
    pub fn from_codes(codes: BlendCodes) -> RenderStateResult<Self> {
        use BlendField::*;

        Ok(Self {
            color_src_factor: BlendFactor::decode(ColorSrcFactor, codes.color_src_factor)?,
            color_dst_factor: BlendFactor::decode(ColorDstFactor, codes.color_dst_factor)?,
            color_equation: BlendEquation::decode(ColorEquation, codes.color_equation)?,
            alpha_src_factor: BlendFactor::decode(AlphaSrcFactor, codes.alpha_src_factor)?,
            alpha_dst_factor: BlendFactor::decode(AlphaDstFactor, codes.alpha_dst_factor)?,
            alpha_equation: BlendEquation::decode(AlphaEquation, codes.alpha_equation)?,
        })
    }

    /// Encode back to binding codes.
    pub fn codes(&self) -> BlendCodes {
        BlendCodes {
            color_src_factor: self.color_src_factor.code(),
            color_dst_factor: self.color_dst_factor.code(),
            color_equation: self.color_equation.code(),
            alpha_src_factor: self.alpha_src_factor.code(),
            alpha_dst_factor: self.alpha_dst_factor.code(),
            alpha_equation: self.alpha_equation.code(),
        }
    }

    /// Convert to wgpu BlendState.
    pub fn to_blend_state(self) -> wgpu::BlendState {
        wgpu::BlendState {
            color: wgpu::BlendComponent {
                src_factor: self.color_src_factor.to_wgpu(),
                dst_factor: self.color_dst_factor.to_wgpu(),
                operation: self.color_equation.to_wgpu(),
            },
            alpha: wgpu::BlendComponent {
                src_factor: self.alpha_src_factor.to_wgpu(),
                dst_factor: self.alpha_dst_factor.to_wgpu(),
                operation: self.alpha_equation.to_wgpu(),
            },
        }
    }

    /// Create a color target state with this blend mode.
    pub fn to_color_target_state(self, format: wgpu::TextureFormat) -> wgpu::ColorTargetState {
        wgpu::ColorTargetState {
            format,
            blend: Some(self.to_blend_state()),
            write_mask: wgpu::ColorWrites::ALL,
        }
    }
}

impl TryFrom<BlendCodes> for BlendMode {
    type Error = RenderStateError;

    fn try_from(codes: BlendCodes) -> Result<Self, Self::Error> {
        Self::from_codes(codes)
    }
}

impl From<BlendMode> for wgpu::BlendState {
    fn from(mode: BlendMode) -> Self {
        mode.to_blend_state()
    }
}
