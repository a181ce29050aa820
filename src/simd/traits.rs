//! Traits shared by every 8-lane backend.
//!
//! Each backend (`avx2`, `fallback`) implements these for its own `F32x8`.
//! The batch types in [`crate::vector`] and [`crate::colour`] are written
//! only against these traits and the operator impls, so they never see
//! which backend was selected at build time.

/// Checks memory alignment for SIMD operations.
pub trait Alignment<T> {
    /// Returns `true` if `ptr` satisfies the backend's preferred alignment.
    fn is_aligned(ptr: *const T) -> bool;
}

/// Loads exactly one full register worth of elements from memory.
///
/// There is no partial variant: every batch in this crate holds exactly
/// eight lanes.
pub trait SimdLoad<T> {
    type Output;

    /// Loads 8 elements, choosing the aligned or unaligned path from the
    /// pointer's alignment.
    ///
    /// # Safety
    ///
    /// `ptr` must be non-null and valid for reads of 8 elements.
    unsafe fn load(ptr: *const T) -> Self::Output;

    /// Loads 8 elements from 32-byte aligned memory.
    ///
    /// # Safety
    ///
    /// `ptr` must be 32-byte aligned and valid for reads of 8 elements.
    unsafe fn load_aligned(ptr: *const T) -> Self::Output;

    /// Loads 8 elements from memory with any alignment.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of 8 elements.
    unsafe fn load_unaligned(ptr: *const T) -> Self::Output;
}

/// Stores one full register to memory.
pub trait SimdStore<T> {
    /// Stores all 8 lanes, choosing the aligned or unaligned path from the
    /// pointer's alignment.
    ///
    /// # Safety
    ///
    /// `ptr` must be non-null and valid for writes of 8 elements.
    unsafe fn store_at(&self, ptr: *mut T);

    /// # Safety
    ///
    /// `ptr` must be 32-byte aligned and valid for writes of 8 elements.
    unsafe fn store_aligned_at(&self, ptr: *mut T);

    /// # Safety
    ///
    /// `ptr` must be valid for writes of 8 elements.
    unsafe fn store_unaligned_at(&self, ptr: *mut T);
}

/// Lane-wise arithmetic beyond the plain operators, plus the single
/// cross-lane reduction.
pub trait SimdMath: Sized {
    type Output;

    /// Lane-wise minimum. When either lane is NaN the lane of `other` is
    /// returned, as `minps` does.
    fn min(&self, other: Self) -> Self::Output;

    /// Lane-wise maximum. When either lane is NaN the lane of `other` is
    /// returned, as `maxps` does.
    fn max(&self, other: Self) -> Self::Output;

    /// Clamps every lane into `[lo, hi]`. NaN lanes become `lo`.
    fn clamp(&self, lo: Self, hi: Self) -> Self::Output;

    /// Fused `self * a + b` with a single rounding.
    fn fmadd(&self, a: Self, b: Self) -> Self::Output;

    /// Fused `self * a - b` with a single rounding.
    fn fmsub(&self, a: Self, b: Self) -> Self::Output;

    /// Correctly rounded square root per lane.
    fn sqrt(&self) -> Self::Output;

    /// Fast approximate `1 / sqrt(x)` per lane.
    ///
    /// On AVX2 this is `vrsqrtps` with a relative error of at most
    /// `1.5 * 2^-12`; the portable backend computes it exactly. Callers that
    /// need full single precision refine it with a Newton-Raphson step.
    fn rsqrt_approx(&self) -> Self::Output;

    /// Sums all 8 lanes into one scalar.
    ///
    /// The upper four lanes are folded onto the lower four, then two
    /// pairwise horizontal adds reduce the remaining four lanes. Every
    /// backend uses this exact order so results are bit-identical.
    fn horizontal_sum(&self) -> f32;
}

/// Cross-lane data movement.
pub trait SimdShuffle: Sized {
    /// Splits 8 interleaved `(x, y)` pairs into a register of `x` values
    /// and a register of `y` values. Pair `i` lands in lane `i` of both.
    fn deinterleave_pairs(src: &[f32; 16]) -> (Self, Self);
}
