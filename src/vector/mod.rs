//! Scalar and eight-wide vectors.

pub mod batch;

pub mod vec3;

pub use batch::{Vec2x8, Vec3x8, Vec4x8};
pub use vec3::{Point3, Vec3};
