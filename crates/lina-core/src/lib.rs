//! # lina-core
//!
//! Scalar foundations for the lina math crates.
//!
//! This crate provides the pieces every other lina crate builds on:
//!
//! - [`MathProvider`] - Pluggable strategy for transcendental primitives
//! - [`StdMath`] - Default provider backed by std float intrinsics
//! - [`FastMath`] - Approximation provider for throughput-bound paths
//! - [`RoundMethod`] - Selectable per-component rounding behavior
//! - [`Error`], [`Result`] - Unified error type for fallible operations
//!
//! ## Design Philosophy
//!
//! Vector, quaternion, and matrix operations in the lina crates are pure
//! functions over `Copy` values. The only knob they expose is *how* the
//! underlying scalar primitives are computed: every operation that touches
//! `sqrt`, `sin`/`cos`, or fused multiply-add has a `_with` variant taking
//! an [`MathProvider`] implementation, and a plain variant that uses
//! [`StdMath`].
//!
//! ```rust
//! use lina_core::{FastMath, MathProvider, StdMath};
//!
//! let exact = StdMath.sqrt(2.0);
//! let fast = FastMath.sqrt(2.0);
//! assert!((exact - fast).abs() < 1e-3);
//! ```
//!
//! ## Crate Structure
//!
//! This crate is the foundation of lina and has no internal dependencies.
//! All other lina crates depend on `lina-core`:
//!
//! ```text
//! lina-core (this crate)
//!    ^
//!    |
//!    +-- lina-vec (Vec2/Vec3/Vec4, batch kernels)
//!    +-- lina-quat (Quat)
//!    +-- lina-mat (Mat3/Mat4)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod consts;
pub mod error;
pub mod provider;
pub mod round;

pub use consts::*;
pub use error::*;
pub use provider::*;
pub use round::*;
