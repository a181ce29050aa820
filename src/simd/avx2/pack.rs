//! Float-to-RGB24 quantization for eight pixels at once.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use super::f32x8::F32x8;
use crate::colour::Rounding;
use crate::simd::utils::Aligned;

/// Converts three already clamped and scaled channel registers into 24
/// bytes laid out `r0 g0 b0 r1 g1 b1 ...`, pixel `i` taken from lane `i`.
///
/// The float to i32 conversion follows `rounding`. Narrowing to bytes uses
/// unsigned saturating packs, so a lane that rounds up to 256 still lands
/// on 255.
#[inline(always)]
pub(crate) fn quantize_rgb24(r: F32x8, g: F32x8, b: F32x8, rounding: Rounding) -> [u8; 24] {
    // SAFETY: this backend is only compiled when build.rs detected AVX2.
    unsafe { quantize_rgb24_avx2(r.elements, g.elements, b.elements, rounding) }
}

#[target_feature(enable = "avx2")]
unsafe fn quantize_rgb24_avx2(r: __m256, g: __m256, b: __m256, rounding: Rounding) -> [u8; 24] {
    let (ri, gi, bi) = match rounding {
        Rounding::Truncate => (
            _mm256_cvttps_epi32(r),
            _mm256_cvttps_epi32(g),
            _mm256_cvttps_epi32(b),
        ),
        // cvtps rounds with MXCSR, which defaults to nearest-even
        Rounding::Nearest => (
            _mm256_cvtps_epi32(r),
            _mm256_cvtps_epi32(g),
            _mm256_cvtps_epi32(b),
        ),
    };

    // Packs work per 128-bit half, so after both steps each half holds
    //   r0 r1 r2 r3 g0 g1 g2 g3 b0 b1 b2 b3 0 0 0 0
    // for its four pixels.
    let rg16 = _mm256_packus_epi32(ri, gi);
    let b16 = _mm256_packus_epi32(bi, _mm256_setzero_si256());
    let planar = _mm256_packus_epi16(rg16, b16);

    #[rustfmt::skip]
    let interleave = _mm256_setr_epi8(
        0, 4, 8, 1, 5, 9, 2, 6, 10, 3, 7, 11, -1, -1, -1, -1,
        0, 4, 8, 1, 5, 9, 2, 6, 10, 3, 7, 11, -1, -1, -1, -1,
    );
    let rgb = _mm256_shuffle_epi8(planar, interleave);

    let mut spill = Aligned::new([0u8; 32]);
    _mm256_store_si256(spill.as_mut_ptr() as *mut __m256i, rgb);

    let mut out = [0u8; 24];
    out[..12].copy_from_slice(&spill.0[..12]);
    out[12..].copy_from_slice(&spill.0[16..28]);
    out
}
