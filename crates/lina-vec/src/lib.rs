//! # lina-vec
//!
//! 2/3/4-component `f32` vectors for geometry and simulation code.
//!
//! This crate provides the vector value types of the lina workspace:
//!
//! - [`Vec2`] - planar points and directions
//! - [`Vec3`] - the workhorse: rotation, projection, reflection, transforms
//! - [`Vec4`] - homogeneous coordinates and 4-lane payloads
//! - [`batch`] - SIMD kernels over planar component arrays
//!
//! # Design
//!
//! Each operation exists once, in canonical form, on the value type;
//! alternative input and output shapes go through `From`/`Into`
//! conversions, `from_slice`/`write_to_slice`, and plain operator impls
//! rather than per-shape function variants.
//!
//! Operations that consume transcendental primitives (`length`,
//! `normalize`, `rotate_rad`, `fma`, the distance family) come in pairs: a
//! plain method using [`lina_core::StdMath`] and a `_with` method taking
//! any [`lina_core::MathProvider`].
//!
//! ```rust
//! use lina_vec::Vec3;
//!
//! let v = Vec3::new(1.0, 2.0, 2.0);
//! assert_eq!(v.length(), 3.0);
//! assert_eq!(v + Vec3::splat(1.0), Vec3::new(2.0, 3.0, 3.0));
//! ```
//!
//! # Dependencies
//!
//! - [`lina-core`] - providers, rounding modes, errors
//! - [`glam`] - interop conversions for callers already on glam types
//! - [`wide`] - portable SIMD for the [`batch`] module

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod vec2;
mod vec3;
mod vec4;
pub mod batch;

pub use vec2::*;
pub use vec3::*;
pub use vec4::*;
