//! Math types used across Strata.
//!
//! This re-exports the [`glam`] types the render-state code is built on.
//! `glam` types use SIMD instructions on supported platforms, so prefer
//! them for any CPU-side matrix work.
//!
//! ```
//! use strata_core::math::{Mat3, Vec2};
//!
//! let shift = Mat3::from_translation(Vec2::new(10.0, 5.0));
//! assert_eq!(shift.transform_point2(Vec2::ZERO), Vec2::new(10.0, 5.0));
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::{Mat3, Mat4, Vec2, Vec3};
