//! Strata Render
//!
//! Typed render states for a 2D graphics layer, built from the flat
//! parameters a foreign binding passes in: six blend codes, a 16-float
//! transform buffer and optional texture and shader resources.
//!
//! ```
//! use strata_render::{create_render_states, BlendFactor, Transform};
//!
//! let matrix = Transform::IDENTITY_MATRIX;
//! let states = create_render_states(6, 7, 0, 1, 7, 0, &matrix, None, None)?;
//! assert_eq!(states.blend_mode.color_src_factor, BlendFactor::SrcAlpha);
//! assert!(states.texture.is_none());
//! # Ok::<(), strata_render::RenderStateError>(())
//! ```

pub mod blend;
pub mod convert;
pub mod error;
pub mod ffi;
pub mod resource;
pub mod states;
pub mod transform;

pub use blend::{BlendCodes, BlendEquation, BlendFactor, BlendMode};
pub use convert::{create_render_states, create_render_states_with};
pub use error::{BlendField, RenderStateError, RenderStateResult};
pub use ffi::render_states_from_raw;
pub use resource::{Shader, ShaderHandle, Texture, TextureHandle};
pub use states::RenderStates;
pub use transform::Transform;
