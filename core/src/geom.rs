//! Basic geometric primitives.

use crate::math::Vec3;

pub use mesh::Mesh;
pub use shape::{Line2, Point2, Rect2, Shape, Tri2, Tri3};

pub mod mesh;
pub mod shape;

/// Triangle, defined by three vertices.
///
/// Used with `usize` vertices for the index triplets of [mesh faces][Mesh].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub struct Tri<V>(pub [V; 3]);

/// A surface normal in 3D.
pub type Normal3 = Vec3;

/// Polygon winding order.
///
/// The triangle *ABC* below has clockwise winding, while
/// the triangle *DEF* has counter-clockwise winding,
/// assuming the y axis points up.
///
/// ```text
///     B            F
///    / \          / \
///   /   \        /   \
///  /     \      /     \
/// A-------C    D-------E
///    Cw           Ccw
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Winding {
    /// Clockwise winding.
    Cw,
    /// Counter-clockwise winding.
    #[default]
    Ccw,
}
