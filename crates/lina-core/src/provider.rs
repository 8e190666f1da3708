//! Pluggable providers for transcendental scalar primitives.
//!
//! Vector and quaternion operations bottom out in a handful of scalar
//! primitives: `sqrt`, reciprocal `sqrt`, `sin`/`cos`, and fused
//! multiply-add. [`MathProvider`] abstracts those so callers can swap the
//! backend per call:
//!
//! - [`StdMath`] - std float intrinsics, correctly rounded where the
//!   platform provides it. The process-wide default ([`DEFAULT_PROVIDER`]).
//! - [`FastMath`] - polynomial and bit-level approximations for
//!   throughput-bound inner loops that tolerate ~1e-5 relative error.
//!
//! # Usage
//!
//! ```rust
//! use lina_core::{FastMath, MathProvider, StdMath};
//!
//! fn hypot3<P: MathProvider>(x: f32, y: f32, z: f32, p: &P) -> f32 {
//!     p.sqrt(p.fma(x, x, p.fma(y, y, z * z)))
//! }
//!
//! let exact = hypot3(3.0, 4.0, 0.0, &StdMath);
//! let fast = hypot3(3.0, 4.0, 0.0, &FastMath);
//! assert!((exact - 5.0).abs() < 1e-6);
//! assert!((fast - 5.0).abs() < 1e-3);
//! ```

/// Strategy trait supplying transcendental scalar primitives.
///
/// Implementations are expected to be zero-sized or cheap-to-copy value
/// types; the lina crates pass providers by shared reference and never
/// store them.
pub trait MathProvider {
    /// Square root of `x`.
    fn sqrt(&self, x: f32) -> f32;

    /// Reciprocal square root, `1 / sqrt(x)`.
    fn inv_sqrt(&self, x: f32) -> f32;

    /// Sine of `x` (radians).
    fn sin(&self, x: f32) -> f32;

    /// Cosine of `x` (radians).
    fn cos(&self, x: f32) -> f32;

    /// Sine and cosine of `x` in one call.
    ///
    /// Backends that can share range reduction between the two should
    /// override this.
    #[inline]
    fn sin_cos(&self, x: f32) -> (f32, f32) {
        (self.sin(x), self.cos(x))
    }

    /// Fused multiply-add, `a * b + c`.
    ///
    /// [`StdMath`] computes this with a single rounding step; approximate
    /// backends may use the unfused form.
    fn fma(&self, a: f32, b: f32, c: f32) -> f32;
}

impl<P: MathProvider + ?Sized> MathProvider for &P {
    #[inline]
    fn sqrt(&self, x: f32) -> f32 {
        (**self).sqrt(x)
    }

    #[inline]
    fn inv_sqrt(&self, x: f32) -> f32 {
        (**self).inv_sqrt(x)
    }

    #[inline]
    fn sin(&self, x: f32) -> f32 {
        (**self).sin(x)
    }

    #[inline]
    fn cos(&self, x: f32) -> f32 {
        (**self).cos(x)
    }

    #[inline]
    fn sin_cos(&self, x: f32) -> (f32, f32) {
        (**self).sin_cos(x)
    }

    #[inline]
    fn fma(&self, a: f32, b: f32, c: f32) -> f32 {
        (**self).fma(a, b, c)
    }
}

/// Provider backed by std float intrinsics.
///
/// This is the default backend for every operation in the lina crates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StdMath;

/// Process-wide default provider instance.
pub const DEFAULT_PROVIDER: StdMath = StdMath;

impl MathProvider for StdMath {
    #[inline]
    fn sqrt(&self, x: f32) -> f32 {
        x.sqrt()
    }

    #[inline]
    fn inv_sqrt(&self, x: f32) -> f32 {
        1.0 / x.sqrt()
    }

    #[inline]
    fn sin(&self, x: f32) -> f32 {
        x.sin()
    }

    #[inline]
    fn cos(&self, x: f32) -> f32 {
        x.cos()
    }

    #[inline]
    fn sin_cos(&self, x: f32) -> (f32, f32) {
        x.sin_cos()
    }

    #[inline]
    fn fma(&self, a: f32, b: f32, c: f32) -> f32 {
        a.mul_add(b, c)
    }
}

// Minimax polynomial coefficients for sin() and cos() over
// [-pi/4, pi/4] (Cephes single-precision sets).
const SIN_C1: f32 = -1.666_665_5e-1;
const SIN_C2: f32 = 8.332_161e-3;
const SIN_C3: f32 = -1.951_529_6e-4;
const COS_C1: f32 = 4.166_664_6e-2;
const COS_C2: f32 = -1.388_731_6e-3;
const COS_C3: f32 = 2.443_315_7e-5;

// 2 / pi, the quadrant step for range reduction.
const FRAC_2_OVER_PI: f32 = 0.636_619_77;

// Initial guess for the reciprocal square root bit trick.
const RSQRT_MAGIC: u32 = 0x5f37_5a86;

/// Approximation provider trading accuracy for throughput.
///
/// - `sqrt`/`inv_sqrt`: bit-trick initial guess plus two Newton-Raphson
///   refinements, relative error below ~5e-6
/// - `sin`/`cos`: quadrant range reduction plus minimax polynomials on
///   `[-pi/4, pi/4]`, absolute error below ~1e-6 for moderate arguments
/// - `fma`: unfused `a * b + c` (two rounding steps)
///
/// Intended for batch paths where the caller measured the difference and
/// accepts the error bounds. Everything else should stay on [`StdMath`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FastMath;

impl FastMath {
    /// Odd polynomial for sin, valid on `[-pi/4, pi/4]`.
    #[inline]
    fn poly_sin(x: f32) -> f32 {
        let z = x * x;
        x * (1.0 + z * (SIN_C1 + z * (SIN_C2 + z * SIN_C3)))
    }

    /// Even polynomial for cos, valid on `[-pi/4, pi/4]`.
    #[inline]
    fn poly_cos(x: f32) -> f32 {
        let z = x * x;
        ((COS_C3 * z + COS_C2) * z + COS_C1) * z * z + 1.0 - 0.5 * z
    }
}

impl MathProvider for FastMath {
    #[inline]
    fn sqrt(&self, x: f32) -> f32 {
        if x > 0.0 {
            x * self.inv_sqrt(x)
        } else if x == 0.0 {
            0.0
        } else {
            f32::NAN
        }
    }

    #[inline]
    fn inv_sqrt(&self, x: f32) -> f32 {
        let half = 0.5 * x;
        let mut y = f32::from_bits(RSQRT_MAGIC.wrapping_sub(x.to_bits() >> 1));
        y *= 1.5 - half * y * y;
        y *= 1.5 - half * y * y;
        y
    }

    #[inline]
    fn sin(&self, x: f32) -> f32 {
        self.sin_cos(x).0
    }

    #[inline]
    fn cos(&self, x: f32) -> f32 {
        self.sin_cos(x).1
    }

    // Shared quadrant reduction: x = k * pi/2 + r with r in [-pi/4, pi/4],
    // computed through f64 so the subtraction does not eat the low bits.
    fn sin_cos(&self, x: f32) -> (f32, f32) {
        let k = (x * FRAC_2_OVER_PI).round();
        let r = (x as f64 - k as f64 * std::f64::consts::FRAC_PI_2) as f32;
        let s = Self::poly_sin(r);
        let c = Self::poly_cos(r);
        match (k as i32).rem_euclid(4) {
            0 => (s, c),
            1 => (c, -s),
            2 => (-s, -c),
            _ => (-c, s),
        }
    }

    #[inline]
    fn fma(&self, a: f32, b: f32, c: f32) -> f32 {
        a * b + c
    }
}
