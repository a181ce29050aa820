//! AVX2 8-lane f32 register.
//!
//! `F32x8` wraps an `__m256` holding 8 single-precision values. It is the
//! building block of every batch type in the crate: one `F32x8` per vector
//! axis or colour channel, lane `i` of each register belonging to the same
//! logical element.
//!
//! # Supported Operations
//!
//! ## Loading and Storing
//! - `From<[f32; 8]>`, `to_array()` - whole-register conversion
//! - `load()`, `load_aligned()`, `load_unaligned()` - direct memory loading
//! - `store_at()`, `store_aligned_at()`, `store_unaligned_at()` - direct memory storing
//!
//! ## Arithmetic
//! - Element-wise `+`, `-`, `*`, and `* f32` (scalar broadcast)
//! - Fused `fmadd()`/`fmsub()`, `min()`, `max()`, `clamp()`
//! - `sqrt()`, `rsqrt_approx()`, `horizontal_sum()`
//!
//! ## Shuffles
//! - `deinterleave_pairs()` - AoS `(x, y)` pairs to two lane-separated registers

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{Add, Mul, Sub};

use crate::simd::{
    utils::Aligned, Alignment, SimdLoad, SimdMath, SimdShuffle, SimdStore, LANE_COUNT,
};

/// AVX2 SIMD vector containing 8 packed f32 values.
///
/// ```rust
/// use simdray::simd::{F32x8, SimdMath};
///
/// let v = F32x8::from([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
/// assert_eq!(v.horizontal_sum(), 36.0);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct F32x8 {
    /// AVX2 256-bit vector register containing 8 packed f32 values
    pub(crate) elements: __m256,
}

impl F32x8 {
    /// Broadcasts `value` to all 8 lanes.
    #[inline(always)]
    pub fn splat(value: f32) -> Self {
        Self {
            elements: unsafe { _mm256_set1_ps(value) },
        }
    }

    /// All lanes set to `0.0`.
    #[inline(always)]
    pub fn zero() -> Self {
        Self {
            elements: unsafe { _mm256_setzero_ps() },
        }
    }

    /// Copies the 8 lanes out, lane 0 first.
    #[inline(always)]
    pub fn to_array(self) -> [f32; 8] {
        let mut out = Aligned::new([0.0f32; LANE_COUNT]);
        unsafe { self.store_aligned_at(out.as_mut_ptr()) };
        out.into_inner()
    }

    /// Reads a single lane.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 8`.
    #[inline(always)]
    pub fn lane(self, index: usize) -> f32 {
        self.to_array()[index]
    }
}

impl From<[f32; 8]> for F32x8 {
    #[inline(always)]
    fn from(values: [f32; 8]) -> Self {
        unsafe { Self::load_unaligned(values.as_ptr()) }
    }
}

impl From<F32x8> for [f32; 8] {
    #[inline(always)]
    fn from(value: F32x8) -> Self {
        value.to_array()
    }
}

impl Alignment<f32> for F32x8 {
    /// Checks if a pointer sits on a 32-byte boundary.
    #[inline(always)]
    fn is_aligned(ptr: *const f32) -> bool {
        let ptr = ptr as usize;

        ptr % core::mem::align_of::<__m256>() == 0
    }
}

impl SimdLoad<f32> for F32x8 {
    type Output = Self;

    /// Loads exactly 8 elements from memory.
    ///
    /// Automatically chooses between aligned and unaligned load based on pointer alignment.
    ///
    /// # Safety
    ///
    /// Pointer must not be null and must point to at least 8 valid f32 values.
    #[inline(always)]
    unsafe fn load(ptr: *const f32) -> Self::Output {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        match F32x8::is_aligned(ptr) {
            true => unsafe { Self::load_aligned(ptr) },
            false => unsafe { Self::load_unaligned(ptr) },
        }
    }

    /// Loads 8 elements from 32-byte aligned memory with `_mm256_load_ps`.
    ///
    /// # Safety
    ///
    /// Pointer must be 32-byte aligned and point to at least 8 valid f32 values.
    #[inline(always)]
    unsafe fn load_aligned(ptr: *const f32) -> Self::Output {
        debug_assert!(F32x8::is_aligned(ptr), "Pointer must be 32-byte aligned");

        Self {
            elements: _mm256_load_ps(ptr),
        }
    }

    /// Loads 8 elements from unaligned memory with `_mm256_loadu_ps`.
    ///
    /// # Safety
    ///
    /// Pointer must point to at least 8 valid f32 values.
    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f32) -> Self::Output {
        Self {
            elements: _mm256_loadu_ps(ptr),
        }
    }
}

impl SimdStore<f32> for F32x8 {
    /// # Safety
    ///
    /// Pointer must not be null and must point to space for 8 f32 values.
    #[inline(always)]
    unsafe fn store_at(&self, ptr: *mut f32) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        match F32x8::is_aligned(ptr) {
            true => unsafe { self.store_aligned_at(ptr) },
            false => unsafe { self.store_unaligned_at(ptr) },
        }
    }

    #[inline(always)]
    unsafe fn store_aligned_at(&self, ptr: *mut f32) {
        debug_assert!(F32x8::is_aligned(ptr), "Pointer must be 32-byte aligned");

        _mm256_store_ps(ptr, self.elements)
    }

    #[inline(always)]
    unsafe fn store_unaligned_at(&self, ptr: *mut f32) {
        _mm256_storeu_ps(ptr, self.elements)
    }
}

impl SimdMath for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn min(&self, other: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm256_min_ps(self.elements, other.elements) },
        }
    }

    #[inline(always)]
    fn max(&self, other: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm256_max_ps(self.elements, other.elements) },
        }
    }

    #[inline(always)]
    fn clamp(&self, lo: Self, hi: Self) -> Self::Output {
        self.max(lo).min(hi)
    }

    #[inline(always)]
    fn fmadd(&self, a: Self, b: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm256_fmadd_ps(self.elements, a.elements, b.elements) },
        }
    }

    #[inline(always)]
    fn fmsub(&self, a: Self, b: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm256_fmsub_ps(self.elements, a.elements, b.elements) },
        }
    }

    #[inline(always)]
    fn sqrt(&self) -> Self::Output {
        Self {
            elements: unsafe { _mm256_sqrt_ps(self.elements) },
        }
    }

    /// `vrsqrtps`: roughly 12 bits of precision. `0.0` gives `+inf`.
    #[inline(always)]
    fn rsqrt_approx(&self) -> Self::Output {
        Self {
            elements: unsafe { _mm256_rsqrt_ps(self.elements) },
        }
    }

    #[inline(always)]
    fn horizontal_sum(&self) -> f32 {
        unsafe {
            let hi = _mm256_extractf128_ps(self.elements, 1);
            let lo = _mm256_castps256_ps128(self.elements);
            let sum = _mm_add_ps(lo, hi);
            let sum = _mm_hadd_ps(sum, sum);
            let sum = _mm_hadd_ps(sum, sum);
            _mm_cvtss_f32(sum)
        }
    }
}

impl SimdShuffle for F32x8 {
    /// Regroups the four 128-bit halves so that each register half holds
    /// two consecutive pairs from the same side of the input, then picks
    /// the even elements for `x` and the odd ones for `y`.
    #[inline(always)]
    fn deinterleave_pairs(src: &[f32; 16]) -> (Self, Self) {
        unsafe {
            // x0 y0 x1 y1 | x2 y2 x3 y3
            let a = _mm256_loadu_ps(src.as_ptr());
            // x4 y4 x5 y5 | x6 y6 x7 y7
            let b = _mm256_loadu_ps(src.as_ptr().add(LANE_COUNT));

            // x0 y0 x1 y1 | x4 y4 x5 y5
            let lo = _mm256_permute2f128_ps(a, b, 0x20);
            // x2 y2 x3 y3 | x6 y6 x7 y7
            let hi = _mm256_permute2f128_ps(a, b, 0x31);

            let xs = _mm256_shuffle_ps(lo, hi, 0b10_00_10_00);
            let ys = _mm256_shuffle_ps(lo, hi, 0b11_01_11_01);

            (Self { elements: xs }, Self { elements: ys })
        }
    }
}

impl Add for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm256_add_ps(self.elements, rhs.elements) },
        }
    }
}

impl Sub for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm256_sub_ps(self.elements, rhs.elements) },
        }
    }
}

impl Mul for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm256_mul_ps(self.elements, rhs.elements) },
        }
    }
}

impl Mul<f32> for F32x8 {
    type Output = Self;

    /// Broadcasts `rhs` to every lane, then multiplies.
    #[inline(always)]
    fn mul(self, rhs: f32) -> Self::Output {
        self * F32x8::splat(rhs)
    }
}
