use super::f32x8::F32x8;
use crate::colour::Rounding;

/// Portable counterpart of the AVX2 packer: three scaled channel registers
/// to `r0 g0 b0 r1 g1 b1 ...`.
pub fn quantize_rgb24(r: F32x8, g: F32x8, b: F32x8, rounding: Rounding) -> [u8; 24] {
    let mut out = [0u8; 24];
    let channels = [r.to_array(), g.to_array(), b.to_array()];

    for (lane, pixel) in out.chunks_exact_mut(3).enumerate() {
        for (byte, channel) in pixel.iter_mut().zip(channels.iter()) {
            *byte = narrow(to_i32(channel[lane], rounding));
        }
    }
    out
}

// cvt(t)ps2dq: out of range and NaN lanes become i32::MIN
#[inline(always)]
fn to_i32(value: f32, rounding: Rounding) -> i32 {
    let rounded = match rounding {
        Rounding::Truncate => value.trunc(),
        Rounding::Nearest => value.round_ties_even(),
    };
    if rounded >= -(i32::MIN as f32) || rounded < i32::MIN as f32 || rounded.is_nan() {
        i32::MIN
    } else {
        rounded as i32
    }
}

// packusdw then packuswb; the second pack reads its input as signed
#[inline(always)]
fn narrow(value: i32) -> u8 {
    let word = value.clamp(0, u16::MAX as i32) as u16;
    (word as i16).clamp(0, u8::MAX as i16) as u8
}
