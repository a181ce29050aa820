//! Portable backend: plain `[f32; 8]` arrays.
//!
//! Used when the host lacks AVX2/FMA or when cross-compiling. Every
//! operation reproduces the lane semantics of the AVX2 backend, including
//! the NaN behaviour of `minps`/`maxps`, the fold order of the horizontal
//! sum and the saturation rules of the integer packs. The one deliberate
//! difference is `rsqrt_approx`, which is exact here.

pub mod f32x8;

pub mod pack;
