//! Lane-separated batches of eight 2, 3 or 4 component vectors.
//!
//! Each batch keeps one [`F32x8`] register per axis. Lane `i` of every
//! register belongs to the same logical vector, and because the registers
//! are private the only ways in are the constructors below, all of which
//! fill every axis from the same lane ordering.

use std::ops::{Add, Mul};

use super::Vec3;
use crate::simd::{F32x8, SimdMath, SimdShuffle};

/// Eight 2D vectors.
#[derive(Copy, Clone, Debug)]
pub struct Vec2x8 {
    x: F32x8,
    y: F32x8,
}

/// Eight 3D vectors.
#[derive(Copy, Clone, Debug)]
pub struct Vec3x8 {
    x: F32x8,
    y: F32x8,
    z: F32x8,
}

/// Eight 4D vectors.
#[derive(Copy, Clone, Debug)]
pub struct Vec4x8 {
    x: F32x8,
    y: F32x8,
    z: F32x8,
    w: F32x8,
}

impl Vec2x8 {
    /// Builds a batch from per-axis arrays; `xs[i]` and `ys[i]` form vector `i`.
    pub fn new(xs: [f32; 8], ys: [f32; 8]) -> Self {
        Self {
            x: F32x8::from(xs),
            y: F32x8::from(ys),
        }
    }

    /// The same vector in every lane.
    pub fn splat(x: f32, y: f32) -> Self {
        Self {
            x: F32x8::splat(x),
            y: F32x8::splat(y),
        }
    }

    pub fn from_lanes(vectors: &[[f32; 2]; 8]) -> Self {
        Self::new(vectors.map(|v| v[0]), vectors.map(|v| v[1]))
    }

    /// Loads eight interleaved pairs `x0 y0 x1 y1 ... x7 y7`.
    ///
    /// Pair `i` becomes lane `i`. The array type fixes the input at exactly
    /// sixteen floats, so a short read cannot happen.
    ///
    /// ```rust
    /// use simdray::Vec2x8;
    ///
    /// let aos: [f32; 16] = std::array::from_fn(|i| i as f32);
    /// let batch = Vec2x8::load_aos(&aos);
    /// assert_eq!(batch.lane(3), [6.0, 7.0]);
    /// ```
    pub fn load_aos(src: &[f32; 16]) -> Self {
        let (x, y) = F32x8::deinterleave_pairs(src);
        Self { x, y }
    }

    pub fn lane(&self, index: usize) -> [f32; 2] {
        [self.x.lane(index), self.y.lane(index)]
    }

    pub fn xs(&self) -> [f32; 8] {
        self.x.to_array()
    }

    pub fn ys(&self) -> [f32; 8] {
        self.y.to_array()
    }

    /// Per-lane dot products; not reduced across lanes.
    #[inline(always)]
    pub fn dot(&self, other: &Self) -> F32x8 {
        self.x.fmadd(other.x, self.y * other.y)
    }
}

impl Vec3x8 {
    /// Builds a batch from per-axis arrays; `xs[i]`, `ys[i]`, `zs[i]` form vector `i`.
    pub fn new(xs: [f32; 8], ys: [f32; 8], zs: [f32; 8]) -> Self {
        Self {
            x: F32x8::from(xs),
            y: F32x8::from(ys),
            z: F32x8::from(zs),
        }
    }

    /// The same vector in every lane.
    pub fn splat(v: Vec3) -> Self {
        Self {
            x: F32x8::splat(v.x()),
            y: F32x8::splat(v.y()),
            z: F32x8::splat(v.z()),
        }
    }

    pub fn from_lanes(vectors: &[Vec3; 8]) -> Self {
        Self::new(
            vectors.map(|v| v.x()),
            vectors.map(|v| v.y()),
            vectors.map(|v| v.z()),
        )
    }

    pub fn lane(&self, index: usize) -> Vec3 {
        Vec3::new(self.x.lane(index), self.y.lane(index), self.z.lane(index))
    }

    pub fn to_lanes(&self) -> [Vec3; 8] {
        let (xs, ys, zs) = (self.xs(), self.ys(), self.zs());
        std::array::from_fn(|i| Vec3::new(xs[i], ys[i], zs[i]))
    }

    pub fn xs(&self) -> [f32; 8] {
        self.x.to_array()
    }

    pub fn ys(&self) -> [f32; 8] {
        self.y.to_array()
    }

    pub fn zs(&self) -> [f32; 8] {
        self.z.to_array()
    }

    /// Per-lane dot products, accumulated with fused multiply-adds.
    #[inline(always)]
    pub fn dot(&self, other: &Self) -> F32x8 {
        let t = self.x * other.x;
        let t = self.y.fmadd(other.y, t);
        self.z.fmadd(other.z, t)
    }

    #[inline(always)]
    pub fn length_squared(&self) -> F32x8 {
        self.dot(self)
    }

    /// Per-lane cross products. Each axis is one fused multiply-subtract
    /// over a plain product.
    #[inline(always)]
    pub fn cross(&self, other: &Self) -> Self {
        Self {
            x: self.y.fmsub(other.z, self.z * other.y),
            y: self.z.fmsub(other.x, self.x * other.z),
            z: self.x.fmsub(other.y, self.y * other.x),
        }
    }

    /// Scales every lane to unit length.
    ///
    /// The approximate reciprocal square root is refined with one
    /// Newton-Raphson step, `inv * (1.5 - 0.5 * len2 * inv * inv)`, which
    /// takes it from about 12 to about 22 correct bits. Zero-length lanes
    /// are not guarded and come out as NaN or infinity.
    #[inline(always)]
    pub fn normalise(&mut self) {
        let len2 = self.length_squared();
        let inv = len2.rsqrt_approx();
        let inv = inv * (F32x8::splat(1.5) - (len2 * inv) * (inv * 0.5));

        self.x = self.x * inv;
        self.y = self.y * inv;
        self.z = self.z * inv;
    }

    pub fn normalised(mut self) -> Self {
        self.normalise();
        self
    }

    /// Sum of all eight vectors. This crosses lanes, unlike every other
    /// operation on the batch.
    pub fn sum(&self) -> Vec3 {
        Vec3::new(
            self.x.horizontal_sum(),
            self.y.horizontal_sum(),
            self.z.horizontal_sum(),
        )
    }
}

impl Vec4x8 {
    /// Builds a batch from per-axis arrays.
    pub fn new(xs: [f32; 8], ys: [f32; 8], zs: [f32; 8], ws: [f32; 8]) -> Self {
        Self {
            x: F32x8::from(xs),
            y: F32x8::from(ys),
            z: F32x8::from(zs),
            w: F32x8::from(ws),
        }
    }

    /// The same vector in every lane.
    pub fn splat(v: [f32; 4]) -> Self {
        Self {
            x: F32x8::splat(v[0]),
            y: F32x8::splat(v[1]),
            z: F32x8::splat(v[2]),
            w: F32x8::splat(v[3]),
        }
    }

    pub fn from_lanes(vectors: &[[f32; 4]; 8]) -> Self {
        Self::new(
            vectors.map(|v| v[0]),
            vectors.map(|v| v[1]),
            vectors.map(|v| v[2]),
            vectors.map(|v| v[3]),
        )
    }

    pub fn lane(&self, index: usize) -> [f32; 4] {
        [
            self.x.lane(index),
            self.y.lane(index),
            self.z.lane(index),
            self.w.lane(index),
        ]
    }

    pub fn xs(&self) -> [f32; 8] {
        self.x.to_array()
    }

    pub fn ys(&self) -> [f32; 8] {
        self.y.to_array()
    }

    pub fn zs(&self) -> [f32; 8] {
        self.z.to_array()
    }

    pub fn ws(&self) -> [f32; 8] {
        self.w.to_array()
    }

    #[inline(always)]
    pub fn dot(&self, other: &Self) -> F32x8 {
        let t = self.x * other.x;
        let t = self.y.fmadd(other.y, t);
        let t = self.z.fmadd(other.z, t);
        self.w.fmadd(other.w, t)
    }

    #[inline(always)]
    pub fn length_squared(&self) -> F32x8 {
        self.dot(self)
    }

    /// Scales every lane by the approximate reciprocal length.
    ///
    /// Unlike [`Vec3x8::normalise`] there is no Newton-Raphson refinement,
    /// so on AVX2 the result is only unit length to within about `2^-11`.
    #[inline(always)]
    pub fn normalise(&mut self) {
        let inv = self.length_squared().rsqrt_approx();

        self.x = self.x * inv;
        self.y = self.y * inv;
        self.z = self.z * inv;
        self.w = self.w * inv;
    }

    pub fn normalised(mut self) -> Self {
        self.normalise();
        self
    }
}

impl Add for Vec2x8 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Add for Vec3x8 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Add for Vec4x8 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            w: self.w + rhs.w,
        }
    }
}

impl Mul<f32> for Vec2x8 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, s: f32) -> Self {
        let s = F32x8::splat(s);
        Self {
            x: self.x * s,
            y: self.y * s,
        }
    }
}

impl Mul<f32> for Vec3x8 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, s: f32) -> Self {
        let s = F32x8::splat(s);
        Self {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
        }
    }
}

impl Mul<f32> for Vec4x8 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, s: f32) -> Self {
        let s = F32x8::splat(s);
        Self {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
            w: self.w * s,
        }
    }
}
