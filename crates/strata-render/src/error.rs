//! Error types for render-state construction.

use std::fmt;

/// One of the six blend inputs of a render state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendField {
    ColorSrcFactor,
    ColorDstFactor,
    ColorEquation,
    AlphaSrcFactor,
    AlphaDstFactor,
    AlphaEquation,
}

impl BlendField {
    pub fn name(self) -> &'static str {
        match self {
            BlendField::ColorSrcFactor => "color source factor",
            BlendField::ColorDstFactor => "color destination factor",
            BlendField::ColorEquation => "color equation",
            BlendField::AlphaSrcFactor => "alpha source factor",
            BlendField::AlphaDstFactor => "alpha destination factor",
            BlendField::AlphaEquation => "alpha equation",
        }
    }
}

impl fmt::Display for BlendField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors that can occur while building render states from raw parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStateError {
    /// A blend factor code is not in the factor table.
    InvalidBlendFactor {
        /// Which input carried the code.
        field: BlendField,
        /// The rejected code.
        code: i32,
    },

    /// A blend equation code is not in the equation table.
    InvalidBlendEquation {
        /// Which input carried the code.
        field: BlendField,
        /// The rejected code.
        code: i32,
    },

    /// A blend factor code decoded outside any of the six blend inputs is
    /// not in the factor table.
    UnknownBlendFactor {
        code: i32,
    },

    /// Like [`RenderStateError::UnknownBlendFactor`], for equation codes.
    UnknownBlendEquation {
        code: i32,
    },

    /// The raw transform pointer was null.
    NullTransform,
}

impl fmt::Display for RenderStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderStateError::InvalidBlendFactor { field, code } => {
                write!(f, "Invalid blend factor code {} for {}", code, field)
            }
            RenderStateError::InvalidBlendEquation { field, code } => {
                write!(f, "Invalid blend equation code {} for {}", code, field)
            }
            RenderStateError::UnknownBlendFactor { code } => {
                write!(f, "Unknown blend factor code {}", code)
            }
            RenderStateError::UnknownBlendEquation { code } => {
                write!(f, "Unknown blend equation code {}", code)
            }
            RenderStateError::NullTransform => {
                write!(f, "Transform matrix pointer is null")
            }
        }
    }
}

impl std::error::Error for RenderStateError {}

impl RenderStateError {
    /// The blend input responsible for this error, if any.
    pub fn field(&self) -> Option<BlendField> {
        match self {
            RenderStateError::InvalidBlendFactor { field, .. }
            | RenderStateError::InvalidBlendEquation { field, .. } => Some(*field),
            RenderStateError::UnknownBlendFactor { .. }
            | RenderStateError::UnknownBlendEquation { .. }
            | RenderStateError::NullTransform => None,
        }
    }
}

/// Result type alias for render-state operations.
pub type RenderStateResult<T> = Result<T, RenderStateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_field_and_code() {
        let err = RenderStateError::InvalidBlendFactor {
            field: BlendField::AlphaDstFactor,
            code: 42,
        };
        assert_eq!(
            err.to_string(),
            "Invalid blend factor code 42 for alpha destination factor"
        );
        assert_eq!(err.field(), Some(BlendField::AlphaDstFactor));
    }

    #[test]
    fn test_null_transform_has_no_field() {
        assert_eq!(RenderStateError::NullTransform.field(), None);
    }

    #[test]
    fn test_unknown_code_has_no_field() {
        let err = RenderStateError::UnknownBlendEquation { code: -3 };
        assert_eq!(err.field(), None);
        assert_eq!(err.to_string(), "Unknown blend equation code -3");
    }
}
