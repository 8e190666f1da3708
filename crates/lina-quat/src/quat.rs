//! Quaternion type and rotation operations.

use lina_core::{Error, MathProvider, Result, StdMath};
use lina_vec::Vec3;
use rayon::prelude::*;
use std::ops::{Mul, Neg};

/// Below this point count, batch rotation stays single-threaded.
const PAR_THRESHOLD: usize = 1024;

/// A quaternion, scalar-last: `x`, `y`, `z` are the imaginary parts,
/// `w` the real part.
///
/// Unit-length quaternions ("versors") represent rotations. The
/// constructors on this type produce unit quaternions from unit-length
/// axes; quaternions assembled from raw components should be normalized
/// before use as rotations.
///
/// # Example
///
/// ```rust
/// use lina_quat::Quat;
/// use lina_vec::Vec3;
///
/// let q = Quat::from_axis_angle(Vec3::Y, std::f32::consts::PI);
/// let v = q.rotate_vec3(Vec3::X);
/// assert!((v.x - -1.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Quat {
    /// First imaginary component (i)
    pub x: f32,
    /// Second imaginary component (j)
    pub y: f32,
    /// Third imaginary component (k)
    pub z: f32,
    /// Real component
    pub w: f32,
}

impl Quat {
    /// The multiplicative identity; rotates nothing.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a quaternion from raw components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates from an `[x, y, z, w]` array.
    #[inline]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Converts to an `[x, y, z, w]` array.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Creates from the first four elements of a slice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SliceTooShort`] on a slice with fewer than four
    /// elements.
    #[inline]
    pub fn from_slice(s: &[f32]) -> Result<Self> {
        if s.len() < 4 {
            return Err(Error::slice_too_short(4, s.len()));
        }
        Ok(Self::new(s[0], s[1], s[2], s[3]))
    }

    /// Rotation of `radians` around unit-length `axis`.
    #[inline]
    pub fn from_axis_angle(axis: Vec3, radians: f32) -> Self {
        Self::from_axis_angle_with(axis, radians, &StdMath)
    }

    /// Axis-angle construction through the given provider.
    #[inline]
    pub fn from_axis_angle_with<P: MathProvider>(axis: Vec3, radians: f32, p: &P) -> Self {
        let (s, c) = p.sin_cos(radians * 0.5);
        Self::new(axis.x * s, axis.y * s, axis.z * s, c)
    }

    /// Rotation of `degrees` around unit-length `axis`.
    #[inline]
    pub fn from_axis_angle_deg(axis: Vec3, degrees: f32) -> Self {
        Self::from_axis_angle(axis, degrees * lina_core::DEG_TO_RAD)
    }

    /// Rotation around the X axis.
    #[inline]
    pub fn from_rotation_x(radians: f32) -> Self {
        let (s, c) = (radians * 0.5).sin_cos();
        Self::new(s, 0.0, 0.0, c)
    }

    /// Rotation around the Y axis.
    #[inline]
    pub fn from_rotation_y(radians: f32) -> Self {
        let (s, c) = (radians * 0.5).sin_cos();
        Self::new(0.0, s, 0.0, c)
    }

    /// Rotation around the Z axis.
    #[inline]
    pub fn from_rotation_z(radians: f32) -> Self {
        let (s, c) = (radians * 0.5).sin_cos();
        Self::new(0.0, 0.0, s, c)
    }

    /// Rotation around X, then Y, then Z, in sequence.
    #[inline]
    pub fn from_euler_xyz(x: f32, y: f32, z: f32) -> Self {
        Self::from_rotation_x(x) * Self::from_rotation_y(y) * Self::from_rotation_z(z)
    }

    /// Dot product, the cosine of half the angle between two unit
    /// quaternions.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Length (norm).
    #[inline]
    pub fn length(self) -> f32 {
        self.length_with(&StdMath)
    }

    /// Length through the given provider.
    #[inline]
    pub fn length_with<P: MathProvider>(self, p: &P) -> f32 {
        p.sqrt(self.length_squared())
    }

    /// Squared length.
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Normalizes to unit length; a zero quaternion becomes the identity.
    #[inline]
    pub fn normalize(self) -> Self {
        self.normalize_with(&StdMath)
    }

    /// Normalizes through the given provider.
    #[inline]
    pub fn normalize_with<P: MathProvider>(self, p: &P) -> Self {
        let ls = self.length_squared();
        if ls > 0.0 {
            self.scale(p.inv_sqrt(ls))
        } else {
            Self::IDENTITY
        }
    }

    /// Strict normalization.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroLength`] when the input cannot be scaled to
    /// unit length.
    #[inline]
    pub fn try_normalize(self) -> Result<Self> {
        let ls = self.length_squared();
        if ls > f32::MIN_POSITIVE {
            Ok(self.scale(1.0 / ls.sqrt()))
        } else {
            Err(Error::ZeroLength)
        }
    }

    /// Conjugate: negated imaginary parts.
    ///
    /// For a unit quaternion this is also the inverse.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Multiplicative inverse, `conjugate / length_squared`.
    ///
    /// A zero quaternion has no inverse; the result is NaN components,
    /// per IEEE-754 division.
    #[inline]
    pub fn inverse(self) -> Self {
        self.conjugate().scale(1.0 / self.length_squared())
    }

    /// The imaginary part as a vector.
    #[inline]
    pub fn imaginary(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Rotates a vector by this quaternion (`q v q*`).
    ///
    /// Uses the two-cross-product expansion:
    /// `t = 2 (im x v); v' = v + w t + (im x t)`.
    ///
    /// `self` must be unit length for this to be a pure rotation.
    #[inline]
    pub fn rotate_vec3(self, v: Vec3) -> Vec3 {
        let im = self.imaginary();
        let t = im.cross(v) * 2.0;
        v + t * self.w + im.cross(t)
    }

    /// Rotates a batch of points in place.
    ///
    /// Parallelizes over rayon once the batch is large enough to pay for
    /// the fork-join overhead.
    pub fn rotate_points(self, points: &mut [Vec3]) {
        if points.len() >= PAR_THRESHOLD {
            points.par_iter_mut().for_each(|v| *v = self.rotate_vec3(*v));
        } else {
            for v in points.iter_mut() {
                *v = self.rotate_vec3(*v);
            }
        }
    }

    /// Angle of the rotation taking `self` to `other`, in radians.
    #[inline]
    pub fn angle_to(self, other: Self) -> f32 {
        2.0 * self.dot(other).abs().min(1.0).acos()
    }

    /// Normalized linear interpolation.
    ///
    /// Takes the short way around: when the endpoints are on opposite
    /// hemispheres, `other` is negated before interpolation.
    #[inline]
    pub fn nlerp(self, other: Self, t: f32) -> Self {
        let other = if self.dot(other) < 0.0 { -other } else { other };
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
            self.z + (other.z - self.z) * t,
            self.w + (other.w - self.w) * t,
        )
        .normalize()
    }

    /// Spherical linear interpolation.
    ///
    /// Constant angular velocity between unit quaternions. Falls back to
    /// [`nlerp`](Quat::nlerp) when the endpoints are nearly parallel,
    /// where the slerp denominator loses precision.
    pub fn slerp(self, other: Self, t: f32) -> Self {
        let mut dot = self.dot(other);
        let other = if dot < 0.0 {
            dot = -dot;
            -other
        } else {
            other
        };

        if dot > 0.9995 {
            return self.nlerp(other, t);
        }

        let theta = dot.acos();
        let sin_theta = theta.sin();
        let a = ((1.0 - t) * theta).sin() / sin_theta;
        let b = (t * theta).sin() / sin_theta;
        Self::new(
            self.x * a + other.x * b,
            self.y * a + other.y * b,
            self.z * a + other.z * b,
            self.w * a + other.w * b,
        )
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }

    /// Converts to a glam Quat.
    #[inline]
    pub fn to_glam(self) -> glam::Quat {
        glam::Quat::from_xyzw(self.x, self.y, self.z, self.w)
    }

    /// Creates from a glam Quat.
    #[inline]
    pub fn from_glam(q: glam::Quat) -> Self {
        Self::new(q.x, q.y, q.z, q.w)
    }

    #[inline]
    fn scale(self, s: f32) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s, self.w * s)
    }
}

impl Default for Quat {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Hamilton product
impl Mul for Quat {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        )
    }
}

impl Mul<Vec3> for Quat {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.rotate_vec3(rhs)
    }
}

impl Neg for Quat {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl From<[f32; 4]> for Quat {
    #[inline]
    fn from(a: [f32; 4]) -> Self {
        Self::from_array(a)
    }
}

impl From<Quat> for [f32; 4] {
    #[inline]
    fn from(q: Quat) -> [f32; 4] {
        q.to_array()
    }
}

impl From<glam::Quat> for Quat {
    #[inline]
    fn from(q: glam::Quat) -> Self {
        Self::from_glam(q)
    }
}

impl From<Quat> for glam::Quat {
    #[inline]
    fn from(q: Quat) -> glam::Quat {
        q.to_glam()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn assert_vec3_eq(a: Vec3, b: Vec3, eps: f32) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = eps);
        assert_abs_diff_eq!(a.y, b.y, epsilon = eps);
        assert_abs_diff_eq!(a.z, b.z, epsilon = eps);
    }

    #[test]
    fn test_identity_rotates_nothing() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Quat::IDENTITY.rotate_vec3(v), v);
        assert_eq!(Quat::IDENTITY * Quat::IDENTITY, Quat::IDENTITY);
    }

    #[test]
    fn test_quarter_turn_around_z() {
        let q = Quat::from_axis_angle(Vec3::Z, FRAC_PI_2);
        assert_vec3_eq(q * Vec3::X, Vec3::Y, 1e-6);
        assert_vec3_eq(q * Vec3::Y, -Vec3::X, 1e-6);
    }

    #[test]
    fn test_axis_constructors_agree() {
        for angle in [0.3f32, 1.2, -0.7] {
            let a = Quat::from_rotation_y(angle);
            let b = Quat::from_axis_angle(Vec3::Y, angle);
            assert_abs_diff_eq!(a.dot(b), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_matches_rodrigues() {
        let axis = Vec3::new(1.0, 2.0, -1.0).normalize();
        let v = Vec3::new(0.3, -0.5, 2.0);
        for angle in [0.0f32, 0.4, 1.7, PI, -2.4] {
            let by_quat = Quat::from_axis_angle(axis, angle) * v;
            let by_rodrigues = v.rotate_rad(axis, angle);
            assert_vec3_eq(by_quat, by_rodrigues, 1e-5);
        }
    }

    #[test]
    fn test_double_cover() {
        let q = Quat::from_axis_angle(Vec3::X, 1.1);
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_vec3_eq(q * v, (-q) * v, 1e-6);
    }

    #[test]
    fn test_composition_order() {
        // q1 * q2 applies q2 first
        let q1 = Quat::from_rotation_z(FRAC_PI_2);
        let q2 = Quat::from_rotation_x(FRAC_PI_2);
        let composed = (q1 * q2) * Vec3::Y;
        let stepwise = q1 * (q2 * Vec3::Y);
        assert_vec3_eq(composed, stepwise, 1e-6);
    }

    #[test]
    fn test_conjugate_inverts_unit_rotation() {
        let q = Quat::from_axis_angle(Vec3::new(0.0, 1.0, 1.0).normalize(), 0.8);
        let v = Vec3::new(4.0, -1.0, 0.5);
        assert_vec3_eq(q.conjugate() * (q * v), v, 1e-5);
        // inverse agrees with conjugate for unit length
        let inv = q.inverse();
        let conj = q.conjugate();
        assert_abs_diff_eq!(inv.x, conj.x, epsilon = 1e-6);
        assert_abs_diff_eq!(inv.w, conj.w, epsilon = 1e-6);
    }

    #[test]
    fn test_normalize() {
        let q = Quat::new(0.0, 0.0, 0.0, 2.0);
        assert_eq!(q.normalize(), Quat::IDENTITY);
        assert_eq!(Quat::new(0.0, 0.0, 0.0, 0.0).normalize(), Quat::IDENTITY);
        assert!(Quat::new(0.0, 0.0, 0.0, 0.0).try_normalize().is_err());
        assert_abs_diff_eq!(
            Quat::new(1.0, 2.0, 3.0, 4.0).normalize().length(),
            1.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_slerp_endpoints_and_midpoint() {
        let a = Quat::IDENTITY;
        let b = Quat::from_rotation_z(FRAC_PI_2);
        let start = a.slerp(b, 0.0);
        let end = a.slerp(b, 1.0);
        assert_abs_diff_eq!(start.dot(a), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(end.dot(b).abs(), 1.0, epsilon = 1e-6);

        // midpoint is the quarter/2 turn
        let mid = a.slerp(b, 0.5);
        let expected = Quat::from_rotation_z(FRAC_PI_2 * 0.5);
        assert_abs_diff_eq!(mid.dot(expected).abs(), 1.0, epsilon = 1e-5);

        // nearly-parallel endpoints take the nlerp path and stay unit
        let c = Quat::from_rotation_z(1e-4);
        assert_abs_diff_eq!(a.slerp(c, 0.5).length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_nlerp_stays_unit() {
        let a = Quat::from_rotation_x(0.4);
        let b = Quat::from_rotation_y(1.9);
        for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_abs_diff_eq!(a.nlerp(b, t).length(), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_euler_composition() {
        let q = Quat::from_euler_xyz(0.3, 0.0, 0.0);
        let direct = Quat::from_rotation_x(0.3);
        assert_abs_diff_eq!(q.dot(direct), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_rotate_points_matches_scalar() {
        let q = Quat::from_axis_angle(Vec3::Y, 0.9);
        let mut points: Vec<Vec3> = (0..37)
            .map(|i| Vec3::new(i as f32, (i % 5) as f32, -(i as f32) * 0.5))
            .collect();
        let expected: Vec<Vec3> = points.iter().map(|&v| q.rotate_vec3(v)).collect();
        q.rotate_points(&mut points);
        for (got, want) in points.iter().zip(&expected) {
            assert_vec3_eq(*got, *want, 1e-6);
        }
    }

    #[test]
    fn test_glam_agreement() {
        let q = Quat::from_axis_angle(Vec3::new(1.0, 1.0, 0.0).normalize(), 0.6);
        let v = Vec3::new(0.5, -2.0, 1.5);
        let ours = q * v;
        let theirs = q.to_glam() * v.to_glam();
        assert_abs_diff_eq!(ours.x, theirs.x, epsilon = 1e-5);
        assert_abs_diff_eq!(ours.y, theirs.y, epsilon = 1e-5);
        assert_abs_diff_eq!(ours.z, theirs.z, epsilon = 1e-5);
    }

    #[test]
    fn test_angle_to() {
        let a = Quat::IDENTITY;
        let b = Quat::from_rotation_x(1.0);
        assert_abs_diff_eq!(a.angle_to(b), 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(a.angle_to(a), 0.0, epsilon = 1e-6);
    }
}
