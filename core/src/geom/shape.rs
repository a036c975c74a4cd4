//! Geometric entities that transform themselves.
//!
//! Each shape owns a fixed number of points and never refers to another
//! shape. Transforms replace the points in place; every mutating transform
//! also has a by-value counterpart returning the transformed shape. The
//! order in which transforms are applied is up to the caller.
//!
//! # Examples
//! ```
//! use tinyrast_core::geom::{Line2, Shape};
//! use tinyrast_core::math::vec2;
//!
//! let mut line = Line2([vec2(1.0, 1.0), vec2(2.0, 3.0)]);
//! line.scale(vec2(2.0, 1.0));
//! line.translate(vec2(0.5, 0.0));
//!
//! assert_eq!(line.0, [vec2(2.5, 1.0), vec2(4.5, 3.0)]);
//! ```

use core::array;

use crate::math::{Matrix, Vec2, Vec3, Vector, mat::scale};

#[cfg(feature = "fp")]
use crate::math::{Angle, mat::Rotation};

use super::{Normal3, Winding};

/// A geometric shape made of `K` points in `D`-dimensional space.
///
/// Linear transforms are applied by building the `D`×`K` matrix whose
/// columns are the points, left-multiplying it by the transform, and
/// reading the points back from the columns of the product.
pub trait Shape<const D: usize, const K: usize>: Sized {
    /// Returns the points of `self`.
    fn points(&self) -> &[Vector<f64, D>; K];

    /// Returns the points of `self` mutably.
    fn points_mut(&mut self) -> &mut [Vector<f64, D>; K];

    /// Returns the points of `self` as the columns of a matrix.
    fn to_matrix(&self) -> Matrix<D, K> {
        Matrix::from_cols(*self.points())
    }

    /// Left-multiplies the points of `self` by `m`.
    fn transform(&mut self, m: &Matrix<D, D>) {
        let res = *m * self.to_matrix();
        *self.points_mut() = res.cols();
    }

    /// Scales each axis of `self` by the corresponding component of
    /// `factors`, relative to the origin.
    fn scale(&mut self, factors: Vector<f64, D>) {
        self.transform(&scale(factors));
    }

    /// Adds `offset` to each point of `self`.
    fn translate(&mut self, offset: Vector<f64, D>) {
        for p in self.points_mut() {
            *p += offset;
        }
    }

    /// Rotates `self` counter-clockwise about the origin by angle `a`.
    ///
    /// Two-dimensional shapes rotate in the plane; three-dimensional shapes
    /// rotate about the z axis.
    #[cfg(feature = "fp")]
    fn rotate(&mut self, a: Angle)
    where
        Matrix<D, D>: Rotation,
    {
        self.transform(&Matrix::rotation(a));
    }

    /// Returns `self` left-multiplied by `m`.
    #[must_use]
    fn transformed(mut self, m: &Matrix<D, D>) -> Self {
        self.transform(m);
        self
    }

    /// Returns `self` scaled by `factors`.
    #[must_use]
    fn scaled(mut self, factors: Vector<f64, D>) -> Self {
        self.scale(factors);
        self
    }

    /// Returns `self` translated by `offset`.
    #[must_use]
    fn translated(mut self, offset: Vector<f64, D>) -> Self {
        self.translate(offset);
        self
    }

    /// Returns `self` rotated by angle `a`.
    #[cfg(feature = "fp")]
    #[must_use]
    fn rotated(mut self, a: Angle) -> Self
    where
        Matrix<D, D>: Rotation,
    {
        self.rotate(a);
        self
    }
}

/// A point in 2D.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point2(pub Vec2);

/// A line segment in 2D.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Line2(pub [Vec2; 2]);

/// A triangle in 2D.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Tri2(pub [Vec2; 3]);

/// A quadrilateral in 2D, with its corners in order around the perimeter.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect2(pub [Vec2; 4]);

/// A triangle in 3D.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Tri3(pub [Vec3; 3]);

macro_rules! impl_shape {
    ($($t:ident: $d:literal, $k:literal;)*) => {$(
        impl Shape<$d, $k> for $t {
            #[inline]
            fn points(&self) -> &[Vector<f64, $d>; $k] {
                &self.0
            }
            #[inline]
            fn points_mut(&mut self) -> &mut [Vector<f64, $d>; $k] {
                &mut self.0
            }
        }
    )*};
}
impl_shape! {
    Line2: 2, 2;
    Tri2: 2, 3;
    Rect2: 2, 4;
    Tri3: 3, 3;
}

impl Shape<2, 1> for Point2 {
    #[inline]
    fn points(&self) -> &[Vec2; 1] {
        array::from_ref(&self.0)
    }
    #[inline]
    fn points_mut(&mut self) -> &mut [Vec2; 1] {
        array::from_mut(&mut self.0)
    }
}

impl Rect2 {
    /// Returns the two triangles covering `self`.
    ///
    /// Given corners 0, 1, 2, 3, the triangles are 0-1-2 and 0-2-3.
    pub fn tris(&self) -> [Tri2; 2] {
        let [a, b, c, d] = self.0;
        [Tri2([a, b, c]), Tri2([a, c, d])]
    }
}

impl Tri3 {
    /// Applies a simple perspective division to the points of `self`, for
    /// an eye located on the positive z axis `eye_distance` units from the
    /// origin.
    ///
    /// The x and y coordinates of each point are divided by
    /// 1 − z / `eye_distance`; the z coordinates are left unchanged.
    ///
    /// # Examples
    /// ```
    /// use tinyrast_core::geom::Tri3;
    /// use tinyrast_core::math::vec3;
    ///
    /// let mut t = Tri3([
    ///     vec3(1.0, 1.0, 0.0),
    ///     vec3(2.0, -2.0, 2.0),
    ///     vec3(-3.0, 3.0, -4.0),
    /// ]);
    /// t.perspective_project(4.0);
    ///
    /// assert_eq!(t.0[0], vec3(1.0, 1.0, 0.0));
    /// assert_eq!(t.0[1], vec3(4.0, -4.0, 2.0));
    /// assert_eq!(t.0[2], vec3(-1.5, 1.5, -4.0));
    /// ```
    pub fn perspective_project(&mut self, eye_distance: f64) {
        for p in &mut self.0 {
            let div = 1.0 - p.z() / eye_distance;
            p[0] /= div;
            p[1] /= div;
        }
    }

    /// Returns the unit normal of `self`.
    ///
    /// Given a triangle *ABC*, the normal is the normalized cross product
    /// *AC* × *AB*. For a counter-clockwise triangle in the xy plane, it
    /// points toward −z, into the screen, so its dot product with a light
    /// direction pointing into the screen is positive on lit faces.
    ///
    /// The result is unspecified if `self` is degenerate.
    ///
    /// # Examples
    /// ```
    /// use tinyrast_core::geom::Tri3;
    /// use tinyrast_core::math::vec3;
    ///
    /// let t = Tri3([vec3(0.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0)]);
    /// assert_eq!(t.normal(), vec3(0.0, 0.0, -1.0));
    /// ```
    pub fn normal(&self) -> Normal3 {
        let [a, b, c] = self.0;
        (c - a).cross(&(b - a)).normalized()
    }

    /// Returns the signed area of `self` projected to the xy plane.
    ///
    /// The area is positive if the projection is wound counter-clockwise,
    /// assuming the y axis points up.
    pub fn signed_area_xy(&self) -> f64 {
        let [a, b, c] = self.0.map(|v| v.xy());
        let (t, u) = (b - a, c - a);
        (t.x() * u.y() - t.y() * u.x()) / 2.0
    }

    /// Returns the winding order of `self` as projected to the xy plane.
    pub fn winding(&self) -> Winding {
        if self.signed_area_xy() < 0.0 {
            Winding::Cw
        } else {
            Winding::Ccw
        }
    }

    /// Returns `self` projected to the xy plane.
    pub fn to_tri2(&self) -> Tri2 {
        Tri2(self.0.map(|v| v.xy()))
    }
}
