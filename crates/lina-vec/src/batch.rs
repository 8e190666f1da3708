//! SIMD-accelerated batch kernels over planar component arrays.
//!
//! These functions operate on separate `x`/`y`/`z` component slices
//! (structure-of-arrays layout) using the `wide` crate for portable SIMD
//! on stable Rust, with a scalar tail for lengths that are not a multiple
//! of the lane width.
//!
//! # Example
//!
//! ```rust
//! use lina_vec::batch::batch_fma;
//!
//! let a = [1.0, 2.0, 3.0];
//! let b = [2.0; 3];
//! let c = [0.5; 3];
//! assert_eq!(batch_fma(&a, &b, &c), vec![2.5, 4.5, 6.5]);
//! ```
//!
//! All slice arguments of a call must have equal lengths; the kernels
//! panic otherwise.

use wide::{f32x4, f32x8, CmpEq};

const LANES: usize = 8;

/// Element-wise `a * b + c` over 4 lanes.
#[inline]
pub fn fma_x4(a: &[f32; 4], b: &[f32; 4], c: &[f32; 4]) -> [f32; 4] {
    f32x4::from(*a)
        .mul_add(f32x4::from(*b), f32x4::from(*c))
        .to_array()
}

/// Element-wise `a * b + c` over 8 lanes.
#[inline]
pub fn fma_x8(a: &[f32; 8], b: &[f32; 8], c: &[f32; 8]) -> [f32; 8] {
    f32x8::from(*a)
        .mul_add(f32x8::from(*b), f32x8::from(*c))
        .to_array()
}

/// Element-wise `a * b + c` for arbitrary-length slices.
///
/// Processes 8 values at a time, with a scalar tail.
pub fn batch_fma(a: &[f32], b: &[f32], c: &[f32]) -> Vec<f32> {
    assert_eq!(a.len(), b.len(), "batch_fma: input lengths differ");
    assert_eq!(a.len(), c.len(), "batch_fma: input lengths differ");

    let mut out = Vec::with_capacity(a.len());
    let head = a.len() - a.len() % LANES;

    for i in (0..head).step_by(LANES) {
        let va = f32x8::from(<[f32; 8]>::try_from(&a[i..i + LANES]).unwrap());
        let vb = f32x8::from(<[f32; 8]>::try_from(&b[i..i + LANES]).unwrap());
        let vc = f32x8::from(<[f32; 8]>::try_from(&c[i..i + LANES]).unwrap());
        out.extend_from_slice(&va.mul_add(vb, vc).to_array());
    }
    for i in head..a.len() {
        out.push(a[i].mul_add(b[i], c[i]));
    }

    out
}

/// In-place element-wise `a = a * b + c`.
pub fn batch_fma_inplace(a: &mut [f32], b: &[f32], c: &[f32]) {
    assert_eq!(a.len(), b.len(), "batch_fma_inplace: input lengths differ");
    assert_eq!(a.len(), c.len(), "batch_fma_inplace: input lengths differ");

    let head = a.len() - a.len() % LANES;

    for i in (0..head).step_by(LANES) {
        let va = f32x8::from(<[f32; 8]>::try_from(&a[i..i + LANES]).unwrap());
        let vb = f32x8::from(<[f32; 8]>::try_from(&b[i..i + LANES]).unwrap());
        let vc = f32x8::from(<[f32; 8]>::try_from(&c[i..i + LANES]).unwrap());
        a[i..i + LANES].copy_from_slice(&va.mul_add(vb, vc).to_array());
    }
    for i in head..a.len() {
        a[i] = a[i].mul_add(b[i], c[i]);
    }
}

/// Scales every element by `s`.
pub fn batch_scale(values: &[f32], s: f32) -> Vec<f32> {
    let mut out = Vec::with_capacity(values.len());
    let head = values.len() - values.len() % LANES;
    let vs = f32x8::splat(s);

    for i in (0..head).step_by(LANES) {
        let v = f32x8::from(<[f32; 8]>::try_from(&values[i..i + LANES]).unwrap());
        out.extend_from_slice(&(v * vs).to_array());
    }
    for &v in &values[head..] {
        out.push(v * s);
    }

    out
}

/// Lengths of a batch of 3D vectors stored as planar `x`/`y`/`z` slices.
pub fn batch_length3(x: &[f32], y: &[f32], z: &[f32]) -> Vec<f32> {
    assert_eq!(x.len(), y.len(), "batch_length3: input lengths differ");
    assert_eq!(x.len(), z.len(), "batch_length3: input lengths differ");

    let mut out = Vec::with_capacity(x.len());
    let head = x.len() - x.len() % LANES;

    for i in (0..head).step_by(LANES) {
        let vx = f32x8::from(<[f32; 8]>::try_from(&x[i..i + LANES]).unwrap());
        let vy = f32x8::from(<[f32; 8]>::try_from(&y[i..i + LANES]).unwrap());
        let vz = f32x8::from(<[f32; 8]>::try_from(&z[i..i + LANES]).unwrap());
        let ls = vx * vx + vy * vy + vz * vz;
        out.extend_from_slice(&ls.sqrt().to_array());
    }
    for i in head..x.len() {
        out.push((x[i] * x[i] + y[i] * y[i] + z[i] * z[i]).sqrt());
    }

    out
}

/// Dot products of two batches of 3D vectors in planar layout.
pub fn batch_dot3(ax: &[f32], ay: &[f32], az: &[f32], bx: &[f32], by: &[f32], bz: &[f32]) -> Vec<f32> {
    let n = ax.len();
    assert!(
        [ay, az, bx, by, bz].iter().all(|s| s.len() == n),
        "batch_dot3: input lengths differ"
    );

    let mut out = Vec::with_capacity(n);
    let head = n - n % LANES;

    for i in (0..head).step_by(LANES) {
        let vax = f32x8::from(<[f32; 8]>::try_from(&ax[i..i + LANES]).unwrap());
        let vay = f32x8::from(<[f32; 8]>::try_from(&ay[i..i + LANES]).unwrap());
        let vaz = f32x8::from(<[f32; 8]>::try_from(&az[i..i + LANES]).unwrap());
        let vbx = f32x8::from(<[f32; 8]>::try_from(&bx[i..i + LANES]).unwrap());
        let vby = f32x8::from(<[f32; 8]>::try_from(&by[i..i + LANES]).unwrap());
        let vbz = f32x8::from(<[f32; 8]>::try_from(&bz[i..i + LANES]).unwrap());
        out.extend_from_slice(&(vax * vbx + vay * vby + vaz * vbz).to_array());
    }
    for i in head..n {
        out.push(ax[i] * bx[i] + ay[i] * by[i] + az[i] * bz[i]);
    }

    out
}

/// Normalizes a batch of 3D vectors in planar layout, in place.
///
/// Zero-length vectors stay zero, matching `Vec3::normalize`.
pub fn batch_normalize3_inplace(x: &mut [f32], y: &mut [f32], z: &mut [f32]) {
    assert_eq!(x.len(), y.len(), "batch_normalize3_inplace: input lengths differ");
    assert_eq!(x.len(), z.len(), "batch_normalize3_inplace: input lengths differ");

    let head = x.len() - x.len() % LANES;

    for i in (0..head).step_by(LANES) {
        let vx = f32x8::from(<[f32; 8]>::try_from(&x[i..i + LANES]).unwrap());
        let vy = f32x8::from(<[f32; 8]>::try_from(&y[i..i + LANES]).unwrap());
        let vz = f32x8::from(<[f32; 8]>::try_from(&z[i..i + LANES]).unwrap());
        let ls = vx * vx + vy * vy + vz * vz;
        let inv = ls.cmp_eq(f32x8::ZERO).blend(f32x8::ZERO, f32x8::ONE / ls.sqrt());
        x[i..i + LANES].copy_from_slice(&(vx * inv).to_array());
        y[i..i + LANES].copy_from_slice(&(vy * inv).to_array());
        z[i..i + LANES].copy_from_slice(&(vz * inv).to_array());
    }
    for i in head..x.len() {
        let ls = x[i] * x[i] + y[i] * y[i] + z[i] * z[i];
        if ls > 0.0 {
            let inv = 1.0 / ls.sqrt();
            x[i] *= inv;
            y[i] *= inv;
            z[i] *= inv;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_fma_lane_widths() {
        let a4 = [1.0, 2.0, 3.0, 4.0];
        let b4 = [2.0; 4];
        let c4 = [1.0; 4];
        assert_eq!(fma_x4(&a4, &b4, &c4), [3.0, 5.0, 7.0, 9.0]);

        let a8 = [1.0; 8];
        let b8 = [3.0; 8];
        let c8 = [0.5; 8];
        assert_eq!(fma_x8(&a8, &b8, &c8), [3.5; 8]);
    }

    #[test]
    fn test_batch_fma_with_tail() {
        // 11 elements: one full 8-lane chunk plus a 3-element tail
        let a: Vec<f32> = (0..11).map(|i| i as f32).collect();
        let b = vec![2.0; 11];
        let c = vec![1.0; 11];
        let out = batch_fma(&a, &b, &c);
        for (i, &v) in out.iter().enumerate() {
            assert_eq!(v, i as f32 * 2.0 + 1.0);
        }

        let mut a2 = a.clone();
        batch_fma_inplace(&mut a2, &b, &c);
        assert_eq!(a2, out);
    }

    #[test]
    fn test_batch_scale() {
        let values: Vec<f32> = (0..10).map(|i| i as f32).collect();
        let out = batch_scale(&values, 0.5);
        for (i, &v) in out.iter().enumerate() {
            assert_eq!(v, i as f32 * 0.5);
        }
    }

    #[test]
    fn test_batch_length3() {
        let x = vec![3.0; 9];
        let y = vec![4.0; 9];
        let z = vec![0.0; 9];
        for &len in &batch_length3(&x, &y, &z) {
            assert_abs_diff_eq!(len, 5.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_batch_dot3() {
        let n = 13;
        let ax = vec![1.0; n];
        let ay = vec![2.0; n];
        let az = vec![3.0; n];
        let bx = vec![4.0; n];
        let by = vec![5.0; n];
        let bz = vec![6.0; n];
        for &d in &batch_dot3(&ax, &ay, &az, &bx, &by, &bz) {
            assert_eq!(d, 32.0);
        }
    }

    #[test]
    fn test_batch_normalize3_keeps_zero() {
        let mut x = vec![3.0, 0.0, 1.0, 0.0, 2.0, 0.0, 0.0, 5.0, 3.0];
        let mut y = vec![4.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 4.0];
        let mut z = vec![0.0; 9];
        batch_normalize3_inplace(&mut x, &mut y, &mut z);

        // lane 0: (3,4,0) -> (0.6, 0.8, 0)
        assert_abs_diff_eq!(x[0], 0.6, epsilon = 1e-6);
        assert_abs_diff_eq!(y[0], 0.8, epsilon = 1e-6);
        // zero vectors stay zero
        assert_eq!((x[1], y[1], z[1]), (0.0, 0.0, 0.0));
        // tail element (index 8) normalized too
        assert_abs_diff_eq!(x[8], 0.6, epsilon = 1e-6);
    }

    #[test]
    #[should_panic(expected = "lengths differ")]
    fn test_length_mismatch_panics() {
        batch_fma(&[1.0, 2.0], &[1.0], &[1.0, 2.0]);
    }
}
