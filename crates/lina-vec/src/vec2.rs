//! 2D vector type.

use lina_core::{Error, MathProvider, Result, RoundMethod, StdMath};
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

/// A 2D vector of `f32` components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec2 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
}

/// Creates a [`Vec2`]; shorthand for [`Vec2::new`].
#[inline]
pub const fn vec2(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

impl Vec2 {
    /// Zero vector (0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// One vector (1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0);

    /// Unit X vector (1, 0).
    pub const X: Self = Self::new(1.0, 0.0);

    /// Unit Y vector (0, 1).
    pub const Y: Self = Self::new(0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a vector with both components set to the same value.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 2]) -> Self {
        Self::new(a[0], a[1])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Creates from the first two elements of a slice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SliceTooShort`] on a slice with fewer than two
    /// elements.
    #[inline]
    pub fn from_slice(s: &[f32]) -> Result<Self> {
        if s.len() < 2 {
            return Err(Error::slice_too_short(2, s.len()));
        }
        Ok(Self::new(s[0], s[1]))
    }

    /// Writes the components into the first two elements of a slice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SliceTooShort`] on a slice with fewer than two
    /// elements.
    #[inline]
    pub fn write_to_slice(self, out: &mut [f32]) -> Result<()> {
        if out.len() < 2 {
            return Err(Error::slice_too_short(2, out.len()));
        }
        out[0] = self.x;
        out[1] = self.y;
        Ok(())
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Perpendicular dot product, the z component of the 3D cross product
    /// of the two vectors lifted into the plane.
    #[inline]
    pub fn perp_dot(self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Counter-clockwise perpendicular, `(-y, x)`.
    #[inline]
    pub fn perp(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Component-wise fused multiply-add, `self * b + c`.
    #[inline]
    pub fn fma(self, b: Self, c: Self) -> Self {
        self.fma_with(b, c, &StdMath)
    }

    /// Component-wise `self * b + c` through the given provider.
    #[inline]
    pub fn fma_with<P: MathProvider>(self, b: Self, c: Self, p: &P) -> Self {
        Self::new(p.fma(self.x, b.x, c.x), p.fma(self.y, b.y, c.y))
    }

    /// Length (magnitude).
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

    /// Reciprocal length.
    #[inline]
    pub fn inv_length(self) -> f32 {
        self.inv_length_with(&StdMath)
    }

    /// Reciprocal length through the given provider.
    #[inline]
    pub fn inv_length_with<P: MathProvider>(self, p: &P) -> f32 {
        p.inv_sqrt(self.length_squared())
    }

    /// Length, collapsing to `0.0` at or below `tolerance`.
    #[inline]
    pub fn length_tol(self, tolerance: f32) -> f32 {
        let ls = self.length_squared();
        if ls <= tolerance * tolerance {
            0.0
        } else {
            ls.sqrt()
        }
    }

    /// Reciprocal length, `0.0` when length is at or below `tolerance`.
    #[inline]
    pub fn inv_length_tol(self, tolerance: f32) -> f32 {
        let ls = self.length_squared();
        if ls <= tolerance * tolerance {
            0.0
        } else {
            1.0 / ls.sqrt()
        }
    }

    /// Normalizes to unit length; a zero vector stays zero.
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

    /// Normalizes, returning zero for `length <= tolerance`.
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

    /// Squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> f32 {
        (other - self).length_squared()
    }

    /// Reciprocal distance.
    #[inline]
    pub fn inv_distance(self, other: Self) -> f32 {
        (other - self).inv_length()
    }

    /// Distance, collapsing to `0.0` at or below `tolerance`.
    #[inline]
    pub fn distance_tol(self, other: Self, tolerance: f32) -> f32 {
        (other - self).length_tol(tolerance)
    }

    /// Reciprocal distance, `0.0` when within `tolerance`.
    #[inline]
    pub fn inv_distance_tol(self, other: Self, tolerance: f32) -> f32 {
        (other - self).inv_length_tol(tolerance)
    }

    /// Half of the displacement from `self` to `other`.
    #[inline]
    pub fn half_vector_to(self, other: Self) -> Self {
        (other - self) * 0.5
    }

    /// Midpoint between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        (self + other) * 0.5
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Clamps each component to `[min, max]`.
    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        self.min(max).max(min)
    }

    /// Returns the smaller component.
    #[inline]
    pub fn min_element(self) -> f32 {
        self.x.min(self.y)
    }

    /// Returns the larger component.
    #[inline]
    pub fn max_element(self) -> f32 {
        self.x.max(self.y)
    }

    /// Index of the smaller component; a tie resolves to index 0.
    #[inline]
    pub fn min_element_index(self) -> usize {
        if self.y < self.x { 1 } else { 0 }
    }

    /// Index of the larger component; a tie resolves to index 0.
    #[inline]
    pub fn max_element_index(self) -> usize {
        if self.y > self.x { 1 } else { 0 }
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Component-wise sign.
    #[inline]
    pub fn signum(self) -> Self {
        Self::new(self.x.signum(), self.y.signum())
    }

    /// Component-wise floor.
    #[inline]
    pub fn floor(self) -> Self {
        Self::new(self.x.floor(), self.y.floor())
    }

    /// Component-wise ceiling.
    #[inline]
    pub fn ceil(self) -> Self {
        Self::new(self.x.ceil(), self.y.ceil())
    }

    /// Component-wise round, ties away from zero.
    #[inline]
    pub fn round(self) -> Self {
        Self::new(self.x.round(), self.y.round())
    }

    /// Component-wise truncation toward zero.
    #[inline]
    pub fn trunc(self) -> Self {
        Self::new(self.x.trunc(), self.y.trunc())
    }

    /// Component-wise rounding with a selectable [`RoundMethod`].
    #[inline]
    pub fn round_with(self, method: RoundMethod) -> Self {
        Self::new(method.apply(self.x), method.apply(self.y))
    }

    /// Linear interpolation between `self` and `other`.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }

    /// Projects onto unit-length `target`.
    #[inline]
    pub fn project_onto(self, target: Self) -> Self {
        target * self.dot(target)
    }

    /// Removes the component along unit-length `target`.
    #[inline]
    pub fn reject_from(self, target: Self) -> Self {
        self - self.project_onto(target)
    }

    /// Reflects off a line with unit normal `normal`.
    #[inline]
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * (2.0 * self.dot(normal))
    }

    /// Rotates counter-clockwise around the origin by `radians`.
    #[inline]
    pub fn rotate_rad(self, radians: f32) -> Self {
        self.rotate_rad_with(radians, &StdMath)
    }

    /// In-plane rotation through the given provider.
    #[inline]
    pub fn rotate_rad_with<P: MathProvider>(self, radians: f32, p: &P) -> Self {
        let (sin, cos) = p.sin_cos(radians);
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Rotates counter-clockwise around the origin by `degrees`.
    #[inline]
    pub fn rotate_deg(self, degrees: f32) -> Self {
        self.rotate_rad(degrees * lina_core::DEG_TO_RAD)
    }

    /// Returns true if any component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Converts to a glam Vec2.
    #[inline]
    pub fn to_glam(self) -> glam::Vec2 {
        glam::Vec2::new(self.x, self.y)
    }

    /// Creates from a glam Vec2.
    #[inline]
    pub fn from_glam(v: glam::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl Index<usize> for Vec2 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vec2 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Vec2 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Vec2 index out of bounds: {}", i),
        }
    }
}

impl Add for Vec2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul for Vec2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vec2> for f32 {
    type Output = Vec2;

    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self * rhs.x, self * rhs.y)
    }
}

impl Div for Vec2 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl Div<f32> for Vec2 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl From<[f32; 2]> for Vec2 {
    #[inline]
    fn from(a: [f32; 2]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec2> for [f32; 2] {
    #[inline]
    fn from(v: Vec2) -> [f32; 2] {
        v.to_array()
    }
}

impl From<(f32, f32)> for Vec2 {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vec2> for (f32, f32) {
    #[inline]
    fn from(v: Vec2) -> (f32, f32) {
        (v.x, v.y)
    }
}

impl From<glam::Vec2> for Vec2 {
    #[inline]
    fn from(v: glam::Vec2) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec2> for glam::Vec2 {
    #[inline]
    fn from(v: Vec2) -> glam::Vec2 {
        v.to_glam()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_ops() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a + b, Vec2::new(4.0, 6.0));
        assert_eq!(b - a, Vec2::new(2.0, 2.0));
        assert_eq!(a * b, Vec2::new(3.0, 8.0));
        assert_eq!(b / a, Vec2::new(3.0, 2.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
    }

    #[test]
    fn test_dot_perp() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a.dot(b), 11.0);
        assert_eq!(a.perp_dot(b), -2.0);
        assert_eq!(Vec2::X.perp(), Vec2::Y);
        assert_eq!(a.perp().dot(a), 0.0);
    }

    #[test]
    fn test_length_normalize() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.length(), 5.0);
        assert_abs_diff_eq!(v.normalize().length(), 1.0, epsilon = 1e-6);
        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
        assert_eq!(Vec2::splat(1e-8).length_tol(1e-6), 0.0);
        assert!(Vec2::ZERO.try_normalize().is_err());
    }

    #[test]
    fn test_rotate() {
        let v = Vec2::X.rotate_rad(FRAC_PI_2);
        assert_abs_diff_eq!(v.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(v.y, 1.0, epsilon = 1e-6);
        let d = Vec2::X.rotate_deg(180.0);
        assert_abs_diff_eq!(d.x, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_extrema_indices() {
        assert_eq!(Vec2::new(1.0, 1.0).min_element_index(), 0);
        assert_eq!(Vec2::new(2.0, 1.0).min_element_index(), 1);
        assert_eq!(Vec2::new(2.0, 2.0).max_element_index(), 0);
    }

    #[test]
    fn test_midpoint() {
        let a = Vec2::new(2.0, 0.0);
        let b = Vec2::new(4.0, 6.0);
        assert_eq!(a.midpoint(b), Vec2::new(3.0, 3.0));
        assert_eq!(a.half_vector_to(b), Vec2::new(1.0, 3.0));
    }

    #[test]
    fn test_reflect_involution() {
        let v = Vec2::new(1.0, 2.0);
        let n = Vec2::Y;
        assert_eq!(v.reflect(n), Vec2::new(1.0, -2.0));
        assert_eq!(v.reflect(n).reflect(n), v);
    }

    #[test]
    fn test_slice() {
        let v = Vec2::from_slice(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(v, Vec2::new(1.0, 2.0));
        assert!(Vec2::from_slice(&[1.0]).is_err());
    }
}
