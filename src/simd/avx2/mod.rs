//! AVX2 + FMA backend for 256-bit registers.
//!
//! Selected by `build.rs` when the host reports both the `avx2` and `fma`
//! CPU flags on an x86 target.
//!
//! # Architecture Requirements
//!
//! - **CPU Support**: Intel Haswell (2013+) or AMD Excavator (2015+)
//! - **Target Architecture**: x86 or x86_64
//! - **Instructions used**: `vfmadd`/`vfmsub`, `vrsqrtps`, `vcvt(t)ps2dq`,
//!   `vpackusdw`/`vpackuswb`, `vpshufb`
//!
//! # Available Types
//!
//! - [`f32x8::F32x8`]: 8 packed single-precision values in one `__m256`

pub mod f32x8;

pub mod pack;
