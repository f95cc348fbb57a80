//! 2D affine transforms.
//!
//! Binding layers hand transforms over as a flat 16-float buffer: a 4x4
//! column-major matrix whose z row and column are unused. [`Transform`] keeps
//! only the 3x3 affine part:
//!
//! ```text
//! | m[0] m[4] m[12] |       | a00 a01 a02 |
//! | m[1] m[5] m[13] |  -->  | a10 a11 a12 |
//! | m[3] m[7] m[15] |       | a20 a21 a22 |
//! ```

use strata_core::math::{Mat3, Mat4, Vec2, Vec3};

/// A 2D affine transformation matrix.
///
/// Composition follows matrix order: `a.combine(&b)` applies `b` first, then
/// `a`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    matrix: Mat3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// Identity transform (no transformation).
    pub const IDENTITY: Self = Self {
        matrix: Mat3::IDENTITY,
    };

    /// The buffer layout of [`Transform::IDENTITY`].
    pub const IDENTITY_MATRIX: [f32; 16] = [
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ];

    /// Create from a 3x3 matrix.
    pub fn from_mat3(matrix: Mat3) -> Self {
        Self { matrix }
    }

    /// Create from the nine components, given row by row.
    #[allow(clippy::too_many_arguments)]
    pub fn from_rows(
        a00: f32,
        a01: f32,
        a02: f32,
        a10: f32,
        a11: f32,
        a12: f32,
        a20: f32,
        a21: f32,
        a22: f32,
    ) -> Self {
        Self {
            matrix: Mat3::from_cols(
                Vec3::new(a00, a10, a20),
                Vec3::new(a01, a11, a21),
                Vec3::new(a02, a12, a22),
            ),
        }
    }

    /// Build a transform from a column-major 4x4 matrix buffer.
    ///
    /// Entries belonging to the z axis (2, 6, 8, 9, 10, 11 and 14) are
    /// ignored.
    pub fn from_matrix(m: &[f32; 16]) -> Self {
        Self::from_rows(m[0], m[4], m[12], m[1], m[5], m[13], m[3], m[7], m[15])
    }

    /// The column-major 4x4 matrix for this transform, with an identity z axis.
    pub fn matrix(&self) -> [f32; 16] {
        let x = self.matrix.x_axis;
        let y = self.matrix.y_axis;
        let z = self.matrix.z_axis;
        [
            x.x, x.y, 0.0, x.z, //
            y.x, y.y, 0.0, y.z, //
            0.0, 0.0, 1.0, 0.0, //
            z.x, z.y, 0.0, z.z,
        ]
    }

    /// The transform as a 4x4 matrix, ready for a shader uniform.
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_cols_array(&self.matrix())
    }

    /// Get the underlying 3x3 matrix.
    pub fn as_mat3(&self) -> &Mat3 {
        &self.matrix
    }

    pub fn from_translation(offset: Vec2) -> Self {
        Self {
            matrix: Mat3::from_translation(offset),
        }
    }

    /// Rotation about the origin, in degrees.
    pub fn from_rotation(degrees: f32) -> Self {
        Self {
            matrix: Mat3::from_angle(degrees.to_radians()),
        }
    }

    pub fn from_scale(factors: Vec2) -> Self {
        Self {
            matrix: Mat3::from_scale(factors),
        }
    }

    /// Combine with another transform; `other` is applied first.
    pub fn combine(&self, other: &Transform) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    pub fn translate(&self, offset: Vec2) -> Self {
        self.combine(&Self::from_translation(offset))
    }

    /// Rotate by `degrees` around the origin.
    pub fn rotate(&self, degrees: f32) -> Self {
        self.combine(&Self::from_rotation(degrees))
    }

    /// Rotate by `degrees` around `center`.
    pub fn rotate_around(&self, degrees: f32, center: Vec2) -> Self {
        self.translate(center).rotate(degrees).translate(-center)
    }

    pub fn scale(&self, factors: Vec2) -> Self {
        self.combine(&Self::from_scale(factors))
    }

    /// Scale by `factors` keeping `center` fixed.
    pub fn scale_around(&self, factors: Vec2, center: Vec2) -> Self {
        self.translate(center).scale(factors).translate(-center)
    }

    /// Transform a point.
    pub fn transform_point(&self, point: Vec2) -> Vec2 {
        self.matrix.transform_point2(point)
    }

    /// Get the inverse transform, or `None` when the matrix is singular.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.matrix.determinant();
        if det == 0.0 || !det.is_finite() {
            None
        } else {
            Some(Self {
                matrix: self.matrix.inverse(),
            })
        }
    }

    /// The inverse transform, or the identity for a singular matrix.
    pub fn inverse_or_identity(&self) -> Self {
        self.inverse().unwrap_or(Self::IDENTITY)
    }
}

impl std::ops::Mul<Transform> for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Transform {
        self.combine(&rhs)
    }
}

impl std::ops::MulAssign<Transform> for Transform {
    fn mul_assign(&mut self, rhs: Transform) {
        *self = self.combine(&rhs);
    }
}

impl std::ops::Mul<Vec2> for Transform {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Vec2 {
        self.transform_point(rhs)
    }
}

impl From<[f32; 16]> for Transform {
    fn from(m: [f32; 16]) -> Self {
        Self::from_matrix(&m)
    }
}

impl From<Transform> for mint::ColumnMatrix3<f32> {
    fn from(transform: Transform) -> Self {
        transform.matrix.into()
    }
}

impl From<mint::ColumnMatrix3<f32>> for Transform {
    fn from(matrix: mint::ColumnMatrix3<f32>) -> Self {
        Self::from_mat3(matrix.into())
    }
}
