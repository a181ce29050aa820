//! Eight-wide SIMD batches of vectors and colours.
//!
//! - [`vector`]: scalar [`Vec3`] and the lane-separated [`Vec2x8`],
//!   [`Vec3x8`], [`Vec4x8`] batches (arithmetic, dot, cross, normalise,
//!   AoS to SoA loading).
//! - [`colour`]: [`Colour`] and [`ColourX8`], their clamped conversion to
//!   RGB24 bytes and the `r g b` text writers.
//! - [`image`]: a gradient driver that emits a plain PPM image.
//! - [`simd`]: the [`F32x8`] register, backed by AVX2 or by a portable
//!   implementation depending on what `build.rs` detected.

pub mod colour;

pub mod error;

pub mod image;

pub mod simd;

pub mod vector;

pub use colour::{Colour, ColourX8, Rounding};
pub use error::{Result, SimdrayError};
pub use simd::F32x8;
pub use vector::{Point3, Vec2x8, Vec3, Vec3x8, Vec4x8};
