//! # lina-mat
//!
//! Row-major 3x3 and 4x4 matrices for the lina workspace.
//!
//! All matrices store rows contiguously and multiply **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! [`Mat3`] covers pure linear maps (rotation, scale); [`Mat4`] adds the
//! affine translation column and homogeneous projection. The glam
//! conversions transpose across the storage-convention boundary, so a
//! round trip preserves the transform, not the byte layout.
//!
//! ```rust
//! use lina_mat::Mat4;
//! use lina_vec::Vec3;
//!
//! let m = Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0));
//! assert_eq!(m.transform_point3(Vec3::ZERO), Vec3::X);
//! assert_eq!(m.transform_vector3(Vec3::Z), Vec3::Z);
//! ```
//!
//! # Dependencies
//!
//! - [`lina-core`] - errors
//! - [`lina-vec`], [`lina-quat`] - the types matrices act on and convert from
//! - [`rayon`] - parallel batch transform
//! - [`glam`] - interop conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod mat4;

pub use mat3::*;
pub use mat4::*;
