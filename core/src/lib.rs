//! Core functionality of the `tinyrast` software rasterizer.
//!
//! Includes a math library with const-generic vectors and matrices, colors,
//! and angles; 2D and 3D shapes that transform themselves; triangle meshes;
//! and a z-buffered triangle rasterizer with a simple perspective camera.
//!
//! # Crate features
//!
//! * `std`:
//!   Makes available items requiring timekeeping, or any floating-point
//!   functions not included in `core`. In particular this means
//!   trigonometric functions, needed for rotations.
//!
//!   If this feature is disabled, the crate only depends on `alloc`.
//!
//! * `libm`:
//!   Provides software implementations of floating-point functions via the
//!   [libm](https://crates.io/crates/libm) crate.
//!
//! * `mm`:
//!   Provides fast approximate implementations of floating-point functions
//!   via the [micromath](https://crates.io/crates/micromath) crate.
//!
//! The `std` feature is enabled by default.
//!
//! # Examples
//! ```
//! use tinyrast_core::prelude::*;
//!
//! let ctx = Context::default();
//! let mut fb = Framebuf::new(250, 250);
//!
//! let tri = Tri2([vec2(10.0, 70.0), vec2(50.0, 160.0), vec2(70.0, 80.0)]);
//! tri.draw(Color3::RED, &mut fb, &ctx);
//!
//! assert_eq!(fb.color_buf.get(40, 100), Some(&Color3::RED));
//! ```

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;
extern crate core;

pub mod geom;
pub mod math;
pub mod render;
pub mod util;

pub mod prelude {
    #[cfg(feature = "fp")]
    pub use crate::math::mat::{Rotation, rotate_z, rotate2};
    pub use crate::math::{
        angle::{Angle, degs, rads, turns},
        color::{Color3, gray, rgb},
        mat::{Mat2, Mat3, Mat4, Matrix, perspective, scale, viewport},
        space::{Linear, lerp},
        vec::{Vec2, Vec2i, Vec3, Vec3i, Vector, splat, vec2, vec3},
    };

    pub use crate::geom::{
        Line2, Mesh, Normal3, Point2, Rect2, Shape, Tri, Tri2, Tri3, Winding,
    };

    pub use crate::render::{
        Camera, Context, Draw, Framebuf, Target, raster::Frag,
    };

    pub use crate::util::buf::Buf2;
}
