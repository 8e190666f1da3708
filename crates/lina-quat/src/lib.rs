//! # lina-quat
//!
//! Quaternion rotations for the lina workspace.
//!
//! [`Quat`] is a scalar-last (`x`, `y`, `z`, `w`) quaternion. Unit-length
//! quaternions represent 3D rotations; [`Quat::rotate_vec3`] applies one
//! to a [`lina_vec::Vec3`] via the conjugation product `q v q*`.
//!
//! ```rust
//! use lina_quat::Quat;
//! use lina_vec::Vec3;
//!
//! let q = Quat::from_axis_angle(Vec3::Z, std::f32::consts::FRAC_PI_2);
//! let v = q * Vec3::X;
//! assert!((v.y - 1.0).abs() < 1e-6);
//! ```
//!
//! # Dependencies
//!
//! - [`lina-core`] - providers, errors
//! - [`lina-vec`] - the vector types rotations act on
//! - [`rayon`] - parallel batch rotation
//! - [`glam`] - interop conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod quat;

pub use quat::*;
