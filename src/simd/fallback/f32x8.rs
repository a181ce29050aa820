//! Portable 8-lane f32 register.

use std::ops::{Add, Mul, Sub};

use crate::simd::{
    Alignment, SimdLoad, SimdMath, SimdShuffle, SimdStore, LANE_COUNT, SIMD_ALIGNMENT,
};

/// Eight f32 lanes held in a 32-byte aligned array.
#[repr(C, align(32))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct F32x8 {
    pub(crate) elements: [f32; LANE_COUNT],
}

impl F32x8 {
    #[inline(always)]
    pub fn splat(value: f32) -> Self {
        Self {
            elements: [value; LANE_COUNT],
        }
    }

    #[inline(always)]
    pub fn zero() -> Self {
        Self::splat(0.0)
    }

    #[inline(always)]
    pub fn to_array(self) -> [f32; 8] {
        self.elements
    }

    /// # Panics
    ///
    /// Panics if `index >= 8`.
    #[inline(always)]
    pub fn lane(self, index: usize) -> f32 {
        self.elements[index]
    }

    #[inline(always)]
    fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self {
            elements: self.elements.map(f),
        }
    }

    #[inline(always)]
    fn zip(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        let mut elements = self.elements;
        for (lhs, rhs) in elements.iter_mut().zip(other.elements) {
            *lhs = f(*lhs, rhs);
        }
        Self { elements }
    }

    #[inline(always)]
    fn zip3(self, a: Self, b: Self, f: impl Fn(f32, f32, f32) -> f32) -> Self {
        let mut elements = self.elements;
        for (i, lane) in elements.iter_mut().enumerate() {
            *lane = f(*lane, a.elements[i], b.elements[i]);
        }
        Self { elements }
    }
}

impl From<[f32; 8]> for F32x8 {
    #[inline(always)]
    fn from(elements: [f32; 8]) -> Self {
        Self { elements }
    }
}

impl From<F32x8> for [f32; 8] {
    #[inline(always)]
    fn from(value: F32x8) -> Self {
        value.elements
    }
}

impl Alignment<f32> for F32x8 {
    #[inline(always)]
    fn is_aligned(ptr: *const f32) -> bool {
        ptr as usize % SIMD_ALIGNMENT == 0
    }
}

impl SimdLoad<f32> for F32x8 {
    type Output = Self;

    /// # Safety
    ///
    /// Pointer must not be null and must point to at least 8 valid f32 values.
    #[inline(always)]
    unsafe fn load(ptr: *const f32) -> Self::Output {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        match F32x8::is_aligned(ptr) {
            true => Self::load_aligned(ptr),
            false => Self::load_unaligned(ptr),
        }
    }

    #[inline(always)]
    unsafe fn load_aligned(ptr: *const f32) -> Self::Output {
        debug_assert!(F32x8::is_aligned(ptr), "Pointer must be 32-byte aligned");

        Self {
            elements: std::ptr::read(ptr as *const [f32; LANE_COUNT]),
        }
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f32) -> Self::Output {
        Self {
            elements: std::ptr::read_unaligned(ptr as *const [f32; LANE_COUNT]),
        }
    }
}

impl SimdStore<f32> for F32x8 {
    #[inline(always)]
    unsafe fn store_at(&self, ptr: *mut f32) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        match F32x8::is_aligned(ptr) {
            true => self.store_aligned_at(ptr),
            false => self.store_unaligned_at(ptr),
        }
    }

    #[inline(always)]
    unsafe fn store_aligned_at(&self, ptr: *mut f32) {
        debug_assert!(F32x8::is_aligned(ptr), "Pointer must be 32-byte aligned");

        std::ptr::write(ptr as *mut [f32; LANE_COUNT], self.elements)
    }

    #[inline(always)]
    unsafe fn store_unaligned_at(&self, ptr: *mut f32) {
        std::ptr::write_unaligned(ptr as *mut [f32; LANE_COUNT], self.elements)
    }
}

impl SimdMath for F32x8 {
    type Output = Self;

    // minps/maxps return the second operand unless the comparison holds,
    // which is what sends NaN lanes to `other`.
    #[inline(always)]
    fn min(&self, other: Self) -> Self::Output {
        self.zip(other, |a, b| if a < b { a } else { b })
    }

    #[inline(always)]
    fn max(&self, other: Self) -> Self::Output {
        self.zip(other, |a, b| if a > b { a } else { b })
    }

    #[inline(always)]
    fn clamp(&self, lo: Self, hi: Self) -> Self::Output {
        self.max(lo).min(hi)
    }

    #[inline(always)]
    fn fmadd(&self, a: Self, b: Self) -> Self::Output {
        self.zip3(a, b, |x, a, b| x.mul_add(a, b))
    }

    #[inline(always)]
    fn fmsub(&self, a: Self, b: Self) -> Self::Output {
        self.zip3(a, b, |x, a, b| x.mul_add(a, -b))
    }

    #[inline(always)]
    fn sqrt(&self) -> Self::Output {
        self.map(f32::sqrt)
    }

    /// Exact `1 / sqrt(x)`; a Newton-Raphson step applied on top leaves it
    /// unchanged to first order.
    #[inline(always)]
    fn rsqrt_approx(&self) -> Self::Output {
        self.map(|x| 1.0 / x.sqrt())
    }

    #[inline(always)]
    fn horizontal_sum(&self) -> f32 {
        let v = &self.elements;
        let folded = [v[0] + v[4], v[1] + v[5], v[2] + v[6], v[3] + v[7]];
        let pairs = [folded[0] + folded[1], folded[2] + folded[3]];
        pairs[0] + pairs[1]
    }
}

impl SimdShuffle for F32x8 {
    #[inline(always)]
    fn deinterleave_pairs(src: &[f32; 16]) -> (Self, Self) {
        let mut xs = [0.0f32; LANE_COUNT];
        let mut ys = [0.0f32; LANE_COUNT];
        for (lane, pair) in src.chunks_exact(2).enumerate() {
            xs[lane] = pair[0];
            ys[lane] = pair[1];
        }
        (Self::from(xs), Self::from(ys))
    }
}

impl Add for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        self.zip(rhs, |a, b| a + b)
    }
}

impl Sub for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        self.zip(rhs, |a, b| a - b)
    }
}

impl Mul for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        self.zip(rhs, |a, b| a * b)
    }
}

impl Mul<f32> for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: f32) -> Self::Output {
        self * F32x8::splat(rhs)
    }
}
