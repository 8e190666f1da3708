//! 4x4 matrix type.
//!
//! [`Mat4`] extends [`crate::Mat3`] with the affine translation column
//! and homogeneous projection. Same convention: row-major storage,
//! column vectors, `result = matrix * vector`.
//!
//! Point and direction transforms are distinct operations:
//! [`Mat4::transform_point3`] applies the upper 3x3 *and* the
//! translation column, [`Mat4::transform_vector3`] the upper 3x3 only,
//! and [`Mat4::project_point3`] additionally divides by the resulting
//! `w` for projective matrices.

use crate::Mat3;
use lina_core::{Error, Result};
use lina_quat::Quat;
use lina_vec::{Vec3, Vec4};
use rayon::prelude::*;
use std::ops::{Index, Mul};

/// Below this point count, batch transform stays single-threaded.
const PAR_THRESHOLD: usize = 1024;

/// A 4x4 matrix in row-major order.
///
/// # Example
///
/// ```rust
/// use lina_mat::Mat4;
/// use lina_vec::Vec3;
///
/// let m = Mat4::from_translation(Vec3::new(0.0, 1.0, 0.0));
/// assert_eq!(m.transform_point3(Vec3::X), Vec3::new(1.0, 1.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat4 {
    /// Matrix elements in row-major order: `[row0, row1, row2, row3]`
    pub m: [[f32; 4]; 4],
}

impl Mat4 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [[0.0; 4]; 4] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self { m: rows }
    }

    /// Creates a matrix from column arrays.
    ///
    /// Transposes the input (columns become rows internally).
    #[inline]
    pub const fn from_cols(cols: [[f32; 4]; 4]) -> Self {
        Self {
            m: [
                [cols[0][0], cols[1][0], cols[2][0], cols[3][0]],
                [cols[0][1], cols[1][1], cols[2][1], cols[3][1]],
                [cols[0][2], cols[1][2], cols[2][2], cols[3][2]],
                [cols[0][3], cols[1][3], cols[2][3], cols[3][3]],
            ],
        }
    }

    /// Creates a diagonal matrix.
    #[inline]
    pub const fn diagonal(d0: f32, d1: f32, d2: f32, d3: f32) -> Self {
        Self::from_rows([
            [d0, 0.0, 0.0, 0.0],
            [0.0, d1, 0.0, 0.0],
            [0.0, 0.0, d2, 0.0],
            [0.0, 0.0, 0.0, d3],
        ])
    }

    /// Embeds a 3x3 linear map with no translation.
    #[inline]
    pub fn from_mat3(m: Mat3) -> Self {
        let r = &m.m;
        Self::from_rows([
            [r[0][0], r[0][1], r[0][2], 0.0],
            [r[1][0], r[1][1], r[1][2], 0.0],
            [r[2][0], r[2][1], r[2][2], 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Pure translation.
    #[inline]
    pub const fn from_translation(t: Vec3) -> Self {
        Self::from_rows([
            [1.0, 0.0, 0.0, t.x],
            [0.0, 1.0, 0.0, t.y],
            [0.0, 0.0, 1.0, t.z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Non-uniform scale.
    #[inline]
    pub const fn from_scale(s: Vec3) -> Self {
        Self::diagonal(s.x, s.y, s.z, 1.0)
    }

    /// Rotation around the X axis.
    #[inline]
    pub fn from_rotation_x(radians: f32) -> Self {
        Self::from_mat3(Mat3::from_rotation_x(radians))
    }

    /// Rotation around the Y axis.
    #[inline]
    pub fn from_rotation_y(radians: f32) -> Self {
        Self::from_mat3(Mat3::from_rotation_y(radians))
    }

    /// Rotation around the Z axis.
    #[inline]
    pub fn from_rotation_z(radians: f32) -> Self {
        Self::from_mat3(Mat3::from_rotation_z(radians))
    }

    /// Rotation of `radians` around unit-length `axis`.
    #[inline]
    pub fn from_axis_angle(axis: Vec3, radians: f32) -> Self {
        Self::from_mat3(Mat3::from_axis_angle(axis, radians))
    }

    /// Rotation matrix of a unit quaternion.
    #[inline]
    pub fn from_quat(q: Quat) -> Self {
        Self::from_mat3(Mat3::from_quat(q))
    }

    /// The affine transform `translation * rotation * scale`.
    ///
    /// Applies scale first, then rotation, then translation, the usual
    /// object-to-world composition.
    pub fn from_scale_rotation_translation(scale: Vec3, rotation: Quat, translation: Vec3) -> Self {
        let r = Mat3::from_quat(rotation).m;
        Self::from_rows([
            [r[0][0] * scale.x, r[0][1] * scale.y, r[0][2] * scale.z, translation.x],
            [r[1][0] * scale.x, r[1][1] * scale.y, r[1][2] * scale.z, translation.y],
            [r[2][0] * scale.x, r[2][1] * scale.y, r[2][2] * scale.z, translation.z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Returns a row as Vec4.
    #[inline]
    pub fn row(&self, i: usize) -> Vec4 {
        Vec4::from_array(self.m[i])
    }

    /// Returns a column as Vec4.
    #[inline]
    pub fn col(&self, i: usize) -> Vec4 {
        Vec4::new(self.m[0][i], self.m[1][i], self.m[2][i], self.m[3][i])
    }

    /// The upper 3x3 block.
    #[inline]
    pub fn upper3(&self) -> Mat3 {
        let m = &self.m;
        Mat3::from_rows([
            [m[0][0], m[0][1], m[0][2]],
            [m[1][0], m[1][1], m[1][2]],
            [m[2][0], m[2][1], m[2][2]],
        ])
    }

    /// The translation column.
    #[inline]
    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.m[0][3], self.m[1][3], self.m[2][3])
    }

    /// Transposed copy.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.m)
    }

    // 3x3 determinant of the submatrix left after deleting `row`/`col`.
    fn minor(&self, row: usize, col: usize) -> f32 {
        let mut sub = [[0.0f32; 3]; 3];
        let mut si = 0;
        for i in 0..4 {
            if i == row {
                continue;
            }
            let mut sj = 0;
            for j in 0..4 {
                if j == col {
                    continue;
                }
                sub[si][sj] = self.m[i][j];
                sj += 1;
            }
            si += 1;
        }
        sub[0][0] * (sub[1][1] * sub[2][2] - sub[1][2] * sub[2][1])
            - sub[0][1] * (sub[1][0] * sub[2][2] - sub[1][2] * sub[2][0])
            + sub[0][2] * (sub[1][0] * sub[2][1] - sub[1][1] * sub[2][0])
    }

    /// Determinant, by cofactor expansion along the first row.
    pub fn determinant(&self) -> f32 {
        self.m[0][0] * self.minor(0, 0) - self.m[0][1] * self.minor(0, 1)
            + self.m[0][2] * self.minor(0, 2)
            - self.m[0][3] * self.minor(0, 3)
    }

    /// Inverse by the adjugate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Singular`] when the determinant is zero or
    /// subnormal.
    pub fn try_inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det.abs() <= f32::MIN_POSITIVE {
            return Err(Error::singular(det));
        }
        let inv = 1.0 / det;
        let mut out = [[0.0f32; 4]; 4];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                // adjugate transposes the cofactors
                let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
                *cell = sign * self.minor(j, i) * inv;
            }
        }
        Ok(Self::from_rows(out))
    }

    /// Transforms a point: upper 3x3 plus the translation column.
    #[inline]
    pub fn transform_point3(&self, v: Vec3) -> Vec3 {
        let m = &self.m;
        Vec3::new(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z + m[0][3],
            m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z + m[1][3],
            m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z + m[2][3],
        )
    }

    /// Transforms a direction: upper 3x3 only, translation ignored.
    #[inline]
    pub fn transform_vector3(&self, v: Vec3) -> Vec3 {
        let m = &self.m;
        Vec3::new(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
            m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
            m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
        )
    }

    /// Transforms a point through a projective matrix, dividing by the
    /// resulting `w`.
    ///
    /// For affine matrices this matches
    /// [`transform_point3`](Mat4::transform_point3); a point on the
    /// projection plane (`w == 0`) yields inf/NaN components per IEEE-754.
    #[inline]
    pub fn project_point3(&self, v: Vec3) -> Vec3 {
        let m = &self.m;
        let w = m[3][0] * v.x + m[3][1] * v.y + m[3][2] * v.z + m[3][3];
        self.transform_point3(v) / w
    }

    /// Transforms a batch of points in place.
    ///
    /// Parallelizes over rayon once the batch is large enough to pay for
    /// the fork-join overhead.
    pub fn transform_points(&self, points: &mut [Vec3]) {
        if points.len() >= PAR_THRESHOLD {
            points
                .par_iter_mut()
                .for_each(|v| *v = self.transform_point3(*v));
        } else {
            for v in points.iter_mut() {
                *v = self.transform_point3(*v);
            }
        }
    }

    /// Converts to a glam Mat4 (transposing into column-major storage).
    #[inline]
    pub fn to_glam(&self) -> glam::Mat4 {
        glam::Mat4::from_cols(
            self.col(0).to_glam(),
            self.col(1).to_glam(),
            self.col(2).to_glam(),
            self.col(3).to_glam(),
        )
    }

    /// Creates from a glam Mat4.
    #[inline]
    pub fn from_glam(m: glam::Mat4) -> Self {
        Self::from_cols([
            m.x_axis.to_array(),
            m.y_axis.to_array(),
            m.z_axis.to_array(),
            m.w_axis.to_array(),
        ])
    }
}

impl Default for Mat4 {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Index<usize> for Mat4 {
    type Output = [f32; 4];

    #[inline]
    fn index(&self, row: usize) -> &[f32; 4] {
        &self.m[row]
    }
}

impl Mul for Mat4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut out = [[0.0f32; 4]; 4];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.m[i][0] * rhs.m[0][j]
                    + self.m[i][1] * rhs.m[1][j]
                    + self.m[i][2] * rhs.m[2][j]
                    + self.m[i][3] * rhs.m[3][j];
            }
        }
        Self::from_rows(out)
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, v: Vec4) -> Vec4 {
        Vec4::new(
            self.row(0).dot(v),
            self.row(1).dot(v),
            self.row(2).dot(v),
            self.row(3).dot(v),
        )
    }
}

impl From<glam::Mat4> for Mat4 {
    #[inline]
    fn from(m: glam::Mat4) -> Self {
        Self::from_glam(m)
    }
}

impl From<Mat4> for glam::Mat4 {
    #[inline]
    fn from(m: Mat4) -> glam::Mat4 {
        m.to_glam()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::FRAC_PI_2;

    fn assert_mat4_eq(a: Mat4, b: Mat4, eps: f32) {
        for i in 0..4 {
            for j in 0..4 {
                assert_abs_diff_eq!(a.m[i][j], b.m[i][j], epsilon = eps);
            }
        }
    }

    fn assert_vec3_eq(a: Vec3, b: Vec3, eps: f32) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = eps);
        assert_abs_diff_eq!(a.y, b.y, epsilon = eps);
        assert_abs_diff_eq!(a.z, b.z, epsilon = eps);
    }

    #[test]
    fn test_identity() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Mat4::IDENTITY * v, v);
        assert_eq!(Mat4::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat4::default(), Mat4::IDENTITY);
    }

    #[test]
    fn test_point_vs_vector_transform() {
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let p = Vec3::new(1.0, 1.0, 1.0);
        assert_eq!(m.transform_point3(p), Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(m.transform_vector3(p), p);
    }

    #[test]
    fn test_rotation_matches_quat() {
        let axis = Vec3::new(2.0, -1.0, 0.5).normalize();
        let q = Quat::from_axis_angle(axis, 0.9);
        let m = Mat4::from_quat(q);
        let v = Vec3::new(1.0, 2.0, -0.5);
        assert_vec3_eq(m.transform_point3(v), q * v, 1e-5);
        assert_vec3_eq(m.transform_vector3(v), q * v, 1e-5);
    }

    #[test]
    fn test_srt_composition() {
        let scale = Vec3::new(2.0, 2.0, 2.0);
        let rotation = Quat::from_rotation_z(FRAC_PI_2);
        let translation = Vec3::new(10.0, 0.0, 0.0);
        let m = Mat4::from_scale_rotation_translation(scale, rotation, translation);
        // X scaled to 2X, rotated onto 2Y, then translated
        let p = m.transform_point3(Vec3::X);
        assert_vec3_eq(p, Vec3::new(10.0, 2.0, 0.0), 1e-5);
        // same as multiplying the factor matrices
        let composed = Mat4::from_translation(translation)
            * Mat4::from_quat(rotation)
            * Mat4::from_scale(scale);
        assert_mat4_eq(m, composed, 1e-6);
    }

    #[test]
    fn test_determinant() {
        assert_eq!(Mat4::from_scale(Vec3::new(2.0, 3.0, 4.0)).determinant(), 24.0);
        let rot = Mat4::from_rotation_y(1.1);
        assert_abs_diff_eq!(rot.determinant(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_inverse_round_trip() {
        let m = Mat4::from_scale_rotation_translation(
            Vec3::new(1.5, 2.0, 0.5),
            Quat::from_rotation_x(0.7),
            Vec3::new(1.0, -2.0, 3.0),
        );
        let inv = m.try_inverse().unwrap();
        assert_mat4_eq(m * inv, Mat4::IDENTITY, 1e-5);
        let p = Vec3::new(0.3, 0.7, -1.1);
        assert_vec3_eq(inv.transform_point3(m.transform_point3(p)), p, 1e-5);
    }

    #[test]
    fn test_singular_inverse_fails() {
        let err = Mat4::ZERO.try_inverse().unwrap_err();
        assert!(err.is_degenerate());
        // rank-deficient scale
        let flat = Mat4::from_scale(Vec3::new(1.0, 1.0, 0.0));
        assert!(flat.try_inverse().is_err());
    }

    #[test]
    fn test_project_point() {
        // w row picks up z: a crude perspective
        let m = Mat4::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
        ]);
        let p = m.project_point3(Vec3::new(4.0, 2.0, 2.0));
        assert_vec3_eq(p, Vec3::new(2.0, 1.0, 1.0), 1e-6);
        // affine matrices project like they transform
        let affine = Mat4::from_translation(Vec3::ONE);
        assert_eq!(
            affine.project_point3(Vec3::ZERO),
            affine.transform_point3(Vec3::ZERO)
        );
    }

    #[test]
    fn test_transform_points_matches_scalar() {
        let m = Mat4::from_scale_rotation_translation(
            Vec3::ONE,
            Quat::from_rotation_y(0.4),
            Vec3::new(0.0, 5.0, 0.0),
        );
        let mut points: Vec<Vec3> = (0..29)
            .map(|i| Vec3::new(i as f32, -(i as f32), 0.5 * i as f32))
            .collect();
        let expected: Vec<Vec3> = points.iter().map(|&v| m.transform_point3(v)).collect();
        m.transform_points(&mut points);
        for (got, want) in points.iter().zip(&expected) {
            assert_vec3_eq(*got, *want, 1e-5);
        }
    }

    #[test]
    fn test_glam_round_trip() {
        let m = Mat4::from_scale_rotation_translation(
            Vec3::new(1.0, 2.0, 3.0),
            Quat::from_rotation_z(0.3),
            Vec3::new(4.0, 5.0, 6.0),
        );
        let back = Mat4::from_glam(m.to_glam());
        assert_mat4_eq(back, m, 1e-6);
        let v = Vec3::new(0.5, -1.0, 2.0);
        let theirs = m.to_glam().transform_point3(v.to_glam());
        let ours = m.transform_point3(v);
        assert_abs_diff_eq!(ours.x, theirs.x, epsilon = 1e-5);
        assert_abs_diff_eq!(ours.y, theirs.y, epsilon = 1e-5);
        assert_abs_diff_eq!(ours.z, theirs.z, epsilon = 1e-5);
    }

    #[test]
    fn test_upper3_translation_accessors() {
        let m = Mat4::from_scale_rotation_translation(
            Vec3::ONE,
            Quat::from_rotation_x(0.2),
            Vec3::new(7.0, 8.0, 9.0),
        );
        assert_eq!(m.translation(), Vec3::new(7.0, 8.0, 9.0));
        let u = m.upper3();
        assert_abs_diff_eq!(u.determinant(), 1.0, epsilon = 1e-6);
    }
}
