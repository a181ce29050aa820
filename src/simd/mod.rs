//! 8-lane single-precision register and its backends.
//!
//! `build.rs` probes the host CPU and sets exactly one of `cfg(avx2)` or
//! `cfg(fallback)`. [`F32x8`] is re-exported from the matching backend; the
//! portable backend is always compiled so the AVX2 one can be checked
//! against it.

#[cfg(avx2)]
pub mod avx2;

pub mod fallback;

pub mod traits;

pub mod utils;

pub use traits::{Alignment, SimdLoad, SimdMath, SimdShuffle, SimdStore};

#[cfg(avx2)]
pub use avx2::f32x8::F32x8;

#[cfg(fallback)]
pub use fallback::f32x8::F32x8;

#[cfg(avx2)]
pub(crate) use avx2::pack::quantize_rgb24;

#[cfg(fallback)]
pub(crate) use fallback::pack::quantize_rgb24;

/// Number of lanes in every batch.
pub const LANE_COUNT: usize = 8;

/// Register alignment in bytes.
pub const SIMD_ALIGNMENT: usize = 32;

/// Name of the backend selected at build time.
pub const fn backend_name() -> &'static str {
    if cfg!(avx2) {
        "avx2"
    } else {
        "fallback"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_backend_selected() {
        assert!(cfg!(avx2) != cfg!(fallback));
        let expected = if cfg!(fallback) { "fallback" } else { "avx2" };
        assert_eq!(backend_name(), expected);
    }
}
