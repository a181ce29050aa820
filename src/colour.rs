//! Floating-point colours and their conversion to 24-bit RGB.
//!
//! Channels are nominally in `[0, 1]`. Conversion clamps each channel to
//! `[0, 0.999]`, multiplies by `255.999` and converts to an integer, so
//! `1.0` (and anything above it) lands on 255 without wrapping. Alpha is
//! carried along but never packed or written.
//!
//! # Rounding
//!
//! The scalar path truncates toward zero. The batch path truncates as well
//! by default so that both paths agree byte for byte; the hardware
//! round-to-nearest conversion is available through
//! [`ColourX8::to_rgb24_with`] with [`Rounding::Nearest`].

use std::io::Write;

use crate::error::Result;
use crate::simd::{quantize_rgb24, F32x8, SimdMath, LANE_COUNT};

/// Upper clamp bound applied before scaling.
pub const CHANNEL_MAX: f32 = 0.999;

/// Scale from the unit interval to byte range.
pub const CHANNEL_SCALE: f32 = 255.999;

/// How the scaled channel value becomes an integer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Toward zero, like an `as` cast.
    #[default]
    Truncate,
    /// To nearest, ties to even.
    Nearest,
}

/// One RGBA colour.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Colour {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Default for Colour {
    fn default() -> Self {
        Colour::new(0.0, 0.0, 0.0)
    }
}

impl Colour {
    /// Opaque colour (alpha 1.0).
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Clamps, scales and truncates to `[r, g, b]` bytes. NaN channels give 0.
    pub fn to_rgb24(&self) -> [u8; 3] {
        [
            quantize_channel(self.r),
            quantize_channel(self.g),
            quantize_channel(self.b),
        ]
    }
}

// `as u8` truncates toward zero and maps NaN to 0
#[inline(always)]
fn quantize_channel(value: f32) -> u8 {
    (CHANNEL_SCALE * num::clamp(value, 0.0, CHANNEL_MAX)) as u8
}

/// Eight RGBA colours, one register per channel.
#[derive(Copy, Clone, Debug)]
pub struct ColourX8 {
    r: F32x8,
    g: F32x8,
    b: F32x8,
    a: F32x8,
}

impl ColourX8 {
    /// Builds a batch from per-channel arrays; index `i` of each array is pixel `i`.
    pub fn new(r: [f32; 8], g: [f32; 8], b: [f32; 8], a: [f32; 8]) -> Self {
        Self {
            r: F32x8::from(r),
            g: F32x8::from(g),
            b: F32x8::from(b),
            a: F32x8::from(a),
        }
    }

    /// Opaque batch from red, green and blue arrays.
    pub fn opaque(r: [f32; 8], g: [f32; 8], b: [f32; 8]) -> Self {
        Self::new(r, g, b, [1.0; LANE_COUNT])
    }

    /// The same colour in every lane.
    pub fn splat(colour: Colour) -> Self {
        Self {
            r: F32x8::splat(colour.r),
            g: F32x8::splat(colour.g),
            b: F32x8::splat(colour.b),
            a: F32x8::splat(colour.a),
        }
    }

    pub fn from_pixels(pixels: &[Colour; 8]) -> Self {
        Self::new(
            pixels.map(|p| p.r),
            pixels.map(|p| p.g),
            pixels.map(|p| p.b),
            pixels.map(|p| p.a),
        )
    }

    pub fn pixel(&self, index: usize) -> Colour {
        Colour::with_alpha(
            self.r.lane(index),
            self.g.lane(index),
            self.b.lane(index),
            self.a.lane(index),
        )
    }

    /// Truncating conversion of all eight pixels, `r0 g0 b0 r1 g1 b1 ...`.
    /// Agrees with [`Colour::to_rgb24`] lane by lane.
    pub fn to_rgb24(&self) -> [u8; 24] {
        self.to_rgb24_with(Rounding::Truncate)
    }

    /// Converts all eight pixels with the chosen rounding.
    ///
    /// With [`Rounding::Nearest`] a channel at or above roughly
    /// `255.5 / 255.999` rounds to 256 and is saturated back to 255 by the
    /// integer packs.
    pub fn to_rgb24_with(&self, rounding: Rounding) -> [u8; 24] {
        let lo = F32x8::zero();
        let hi = F32x8::splat(CHANNEL_MAX);

        let r = self.r.clamp(lo, hi) * CHANNEL_SCALE;
        let g = self.g.clamp(lo, hi) * CHANNEL_SCALE;
        let b = self.b.clamp(lo, hi) * CHANNEL_SCALE;

        quantize_rgb24(r, g, b, rounding)
    }
}

/// Writes one pixel as `"r g b\n"`.
pub fn write_colour<W: Write + ?Sized>(out: &mut W, colour: &Colour) -> Result<()> {
    let [r, g, b] = colour.to_rgb24();
    writeln!(out, "{r} {g} {b}")?;
    Ok(())
}

/// Writes eight pixels as eight `"r g b\n"` lines, lane 0 first.
pub fn write_colour_batch<W: Write + ?Sized>(out: &mut W, batch: &ColourX8) -> Result<()> {
    write_rgb24(out, &batch.to_rgb24())
}

/// Writes packed `r g b` triples, one per line.
pub fn write_rgb24<W: Write + ?Sized>(out: &mut W, bytes: &[u8]) -> Result<()> {
    debug_assert!(bytes.len() % 3 == 0, "RGB24 data must hold whole pixels");

    for pixel in bytes.chunks_exact(3) {
        writeln!(out, "{} {} {}", pixel[0], pixel[1], pixel[2])?;
    }
    Ok(())
}
