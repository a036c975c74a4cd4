//! Linear algebra and other useful mathematics.
//!
//! Includes [vectors][self::vec], [matrices][mat], [colors][color], and
//! [angles][angle], as well as utilities such as approximate equality
//! comparisons and a [floating-point backend][float] that works in `no_std`.
//!
//! Dimensions are part of the types: a [`Vector`] has a fixed number of
//! components and a [`Matrix`] a fixed number of rows and columns, so that
//! mixing incompatible shapes is diagnosed at compile time rather than
//! manifesting as a runtime panic or a garbled image.

pub use {
    angle::{Angle, degs, rads, turns},
    approx::ApproxEq,
    color::{Color3, gray, rgb},
    mat::{Mat2, Mat3, Mat4, Matrix, perspective, scale, translate, viewport},
    space::{Linear, Scalar, lerp},
    vec::{Vec2, Vec2i, Vec3, Vec3i, Vec4, Vector, splat, vec2, vec3, vec4},
};
#[cfg(feature = "fp")]
pub use mat::{Rotation, rotate_z, rotate2};

pub mod angle;
pub mod approx;
pub mod color;
pub mod float;
pub mod mat;
pub mod space;
pub mod vec;
