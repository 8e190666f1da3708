//! 3D vector type.
//!
//! [`Vec3`] carries the full operation set of the workspace: arithmetic,
//! norms with tolerance-aware zero collapsing, axis rotation, projection
//! and reflection, and the component-wise rounding family.
//!
//! # Usage
//!
//! ```rust
//! use lina_vec::Vec3;
//!
//! let v = Vec3::new(1.0, 0.0, 0.0);
//! let up = Vec3::Y;
//! let rotated = v.rotate_deg(up, 90.0);
//! assert!((rotated.z - -1.0).abs() < 1e-6);
//! ```

use crate::Vec4;
use lina_core::{Error, MathProvider, Result, RoundMethod, StdMath};
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

/// A 3D vector of `f32` components.
///
/// # Components
///
/// Access via `.x`, `.y`, `.z` or index `[0]`, `[1]`, `[2]`.
///
/// # Example
///
/// ```rust
/// use lina_vec::Vec3;
///
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(v.x, 1.0);
/// assert_eq!(v[2], 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec3 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

/// Creates a [`Vec3`]; shorthand for [`Vec3::new`].
#[inline]
pub const fn vec3(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, y, z)
}

impl Vec3 {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// One vector (1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit X vector (1, 0, 0).
    pub const X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit Y vector (0, 1, 0).
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit Z vector (0, 0, 1).
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to the same value.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Creates from the first three elements of a slice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SliceTooShort`] if the slice has fewer than three
    /// elements.
    #[inline]
    pub fn from_slice(s: &[f32]) -> Result<Self> {
        if s.len() < 3 {
            return Err(Error::slice_too_short(3, s.len()));
        }
        Ok(Self::new(s[0], s[1], s[2]))
    }

    /// Writes the components into the first three elements of a slice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SliceTooShort`] if the slice has fewer than three
    /// elements.
    #[inline]
    pub fn write_to_slice(self, out: &mut [f32]) -> Result<()> {
        if out.len() < 3 {
            return Err(Error::slice_too_short(3, out.len()));
        }
        out[0] = self.x;
        out[1] = self.y;
        out[2] = self.z;
        Ok(())
    }

    /// Extends to a [`Vec4`] with the given `w`.
    #[inline]
    pub const fn extend(self, w: f32) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, w)
    }

    /// Dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product.
    ///
    /// The result is orthogonal to both inputs and follows the right-hand
    /// rule: `X.cross(Y) == Z`.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Component-wise fused multiply-add, `self * b + c`.
    #[inline]
    pub fn fma(self, b: Self, c: Self) -> Self {
        self.fma_with(b, c, &StdMath)
    }

    /// Component-wise `self * b + c` through the given provider.
    #[inline]
    pub fn fma_with<P: MathProvider>(self, b: Self, c: Self, p: &P) -> Self {
        Self::new(
            p.fma(self.x, b.x, c.x),
            p.fma(self.y, b.y, c.y),
            p.fma(self.z, b.z, c.z),
        )
    }

    /// Length (magnitude) of the vector.
    #[inline]
    pub fn length(self) -> f32 {
        self.length_with(&StdMath)
    }

    /// Length through the given provider.
    #[inline]
    pub fn length_with<P: MathProvider>(self, p: &P) -> f32 {
        p.sqrt(self.length_squared())
    }

    /// Squared length (avoids the square root).
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Reciprocal length, `1 / length`.
    ///
    /// A zero vector yields `inf` per IEEE-754; use
    /// [`inv_length_tol`](Vec3::inv_length_tol) when near-zero inputs
    /// should collapse to zero.
    #[inline]
    pub fn inv_length(self) -> f32 {
        self.inv_length_with(&StdMath)
    }

    /// Reciprocal length through the given provider.
    #[inline]
    pub fn inv_length_with<P: MathProvider>(self, p: &P) -> f32 {
        p.inv_sqrt(self.length_squared())
    }

    /// Length, collapsing to exactly `0.0` when at or below `tolerance`.
    ///
    /// Useful for difference vectors whose components carry cancellation
    /// noise; anything with `length <= tolerance` reads as zero.
    #[inline]
    pub fn length_tol(self, tolerance: f32) -> f32 {
        let ls = self.length_squared();
        if ls <= tolerance * tolerance {
            0.0
        } else {
            ls.sqrt()
        }
    }

    /// Reciprocal length, exactly `0.0` when length is at or below
    /// `tolerance`.
    #[inline]
    pub fn inv_length_tol(self, tolerance: f32) -> f32 {
        let ls = self.length_squared();
        if ls <= tolerance * tolerance {
            0.0
        } else {
            1.0 / ls.sqrt()
        }
    }

    /// Normalizes the vector to unit length.
    ///
    /// Returns the zero vector if the length is zero, never `NaN`.
    #[inline]
    pub fn normalize(self) -> Self {
        self.normalize_with(&StdMath)
    }

    /// Normalizes through the given provider.
    #[inline]
    pub fn normalize_with<P: MathProvider>(self, p: &P) -> Self {
        let ls = self.length_squared();
        if ls > 0.0 { self * p.inv_sqrt(ls) } else { Self::ZERO }
    }

    /// Normalizes, returning zero for any vector with
    /// `length <= tolerance`.
    #[inline]
    pub fn normalize_or_zero(self, tolerance: f32) -> Self {
        let ls = self.length_squared();
        if ls <= tolerance * tolerance {
            Self::ZERO
        } else {
            self / ls.sqrt()
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
            Ok(self / ls.sqrt())
        } else {
            Err(Error::ZeroLength)
        }
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        (other - self).length()
    }

    /// Distance through the given provider.
    #[inline]
    pub fn distance_with<P: MathProvider>(self, other: Self, p: &P) -> f32 {
        (other - self).length_with(p)
    }

    /// Squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> f32 {
        (other - self).length_squared()
    }

    /// Reciprocal distance, `1 / distance`.
    #[inline]
    pub fn inv_distance(self, other: Self) -> f32 {
        (other - self).inv_length()
    }

    /// Distance, collapsing to `0.0` at or below `tolerance`.
    #[inline]
    pub fn distance_tol(self, other: Self, tolerance: f32) -> f32 {
        (other - self).length_tol(tolerance)
    }

    /// Reciprocal distance, `0.0` when the points are within `tolerance`.
    #[inline]
    pub fn inv_distance_tol(self, other: Self, tolerance: f32) -> f32 {
        (other - self).inv_length_tol(tolerance)
    }

    /// Half of the displacement from `self` to `other`, `(other - self) / 2`.
    #[inline]
    pub fn half_vector_to(self, other: Self) -> Self {
        (other - self) * 0.5
    }

    /// Midpoint between `self` and `other`, `(self + other) / 2`.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        (self + other) * 0.5
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }

    /// Clamps each component to `[min, max]`.
    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        self.min(max).max(min)
    }

    /// Returns the smallest component.
    #[inline]
    pub fn min_element(self) -> f32 {
        self.x.min(self.y).min(self.z)
    }

    /// Returns the largest component.
    #[inline]
    pub fn max_element(self) -> f32 {
        self.x.max(self.y).max(self.z)
    }

    /// Index of the smallest component; ties resolve to the lowest index.
    #[inline]
    pub fn min_element_index(self) -> usize {
        let mut idx = 0;
        let mut best = self.x;
        if self.y < best {
            best = self.y;
            idx = 1;
        }
        if self.z < best {
            idx = 2;
        }
        idx
    }

    /// Index of the largest component; ties resolve to the lowest index.
    #[inline]
    pub fn max_element_index(self) -> usize {
        let mut idx = 0;
        let mut best = self.x;
        if self.y > best {
            best = self.y;
            idx = 1;
        }
        if self.z > best {
            idx = 2;
        }
        idx
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Component-wise sign (`1.0`, `-1.0`, or `NaN`; signed zero keeps
    /// its sign bit, per `f32::signum`).
    #[inline]
    pub fn signum(self) -> Self {
        Self::new(self.x.signum(), self.y.signum(), self.z.signum())
    }

    /// Component-wise floor.
    #[inline]
    pub fn floor(self) -> Self {
        Self::new(self.x.floor(), self.y.floor(), self.z.floor())
    }

    /// Component-wise ceiling.
    #[inline]
    pub fn ceil(self) -> Self {
        Self::new(self.x.ceil(), self.y.ceil(), self.z.ceil())
    }

    /// Component-wise round, ties away from zero.
    #[inline]
    pub fn round(self) -> Self {
        Self::new(self.x.round(), self.y.round(), self.z.round())
    }

    /// Component-wise truncation toward zero.
    #[inline]
    pub fn trunc(self) -> Self {
        Self::new(self.x.trunc(), self.y.trunc(), self.z.trunc())
    }

    /// Component-wise rounding with a selectable [`RoundMethod`].
    #[inline]
    pub fn round_with(self, method: RoundMethod) -> Self {
        Self::new(
            method.apply(self.x),
            method.apply(self.y),
            method.apply(self.z),
        )
    }

    /// Linear interpolation between `self` and `other`.
    ///
    /// `t = 0.0` returns `self`, `t = 1.0` returns `other`.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }

    /// Projects onto `target`, which must be unit length.
    ///
    /// Returns the component of `self` along `target`.
    #[inline]
    pub fn project_onto(self, target: Self) -> Self {
        target * self.dot(target)
    }

    /// Removes the component of `self` along unit-length `target`.
    #[inline]
    pub fn reject_from(self, target: Self) -> Self {
        self - self.project_onto(target)
    }

    /// Reflects off a surface with unit normal `normal`.
    ///
    /// Computes `self - 2 * (self . normal) * normal`.
    #[inline]
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * (2.0 * self.dot(normal))
    }

    /// Rotates around `axis` by `radians` (Rodrigues' formula).
    ///
    /// `axis` must be unit length; this is a precondition, not a checked
    /// error.
    ///
    /// # Formula
    ///
    /// `v cos(a) + (axis x v) sin(a) + axis (axis . v)(1 - cos(a))`
    ///
    /// # Example
    ///
    /// ```rust
    /// use lina_vec::Vec3;
    ///
    /// let v = Vec3::X.rotate_rad(Vec3::Z, std::f32::consts::FRAC_PI_2);
    /// assert!((v.y - 1.0).abs() < 1e-6);
    /// ```
    #[inline]
    pub fn rotate_rad(self, axis: Self, radians: f32) -> Self {
        self.rotate_rad_with(axis, radians, &StdMath)
    }

    /// Rotation around `axis` through the given provider.
    #[inline]
    pub fn rotate_rad_with<P: MathProvider>(self, axis: Self, radians: f32, p: &P) -> Self {
        let (sin, cos) = p.sin_cos(radians);
        self * cos + axis.cross(self) * sin + axis * (axis.dot(self) * (1.0 - cos))
    }

    /// Rotates around `axis` by `degrees`.
    #[inline]
    pub fn rotate_deg(self, axis: Self, degrees: f32) -> Self {
        self.rotate_rad(axis, degrees * lina_core::DEG_TO_RAD)
    }

    /// Degree rotation through the given provider.
    #[inline]
    pub fn rotate_deg_with<P: MathProvider>(self, axis: Self, degrees: f32, p: &P) -> Self {
        self.rotate_rad_with(axis, degrees * lina_core::DEG_TO_RAD, p)
    }

    /// Returns true if any component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Converts to a glam Vec3.
    #[inline]
    pub fn to_glam(self) -> glam::Vec3 {
        glam::Vec3::new(self.x, self.y, self.z)
    }

    /// Creates from a glam Vec3.
    #[inline]
    pub fn from_glam(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

// Component-wise product
impl Mul for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self * rhs.x, self * rhs.y, self * rhs.z)
    }
}

// Component-wise quotient
impl Div for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec3> for [f32; 3] {
    #[inline]
    fn from(v: Vec3) -> [f32; 3] {
        v.to_array()
    }
}

impl From<(f32, f32, f32)> for Vec3 {
    #[inline]
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vec3> for (f32, f32, f32) {
    #[inline]
    fn from(v: Vec3) -> (f32, f32, f32) {
        (v.x, v.y, v.z)
    }
}

impl From<glam::Vec3> for Vec3 {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec3> for glam::Vec3 {
    #[inline]
    fn from(v: Vec3) -> glam::Vec3 {
        v.to_glam()
    }
}
