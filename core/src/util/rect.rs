//! Rectangular regions; essentially two-dimensional ranges.

use core::ops::{Range, Sub};

/// An axis-aligned rectangle, half-open on the right and bottom.
///
/// In buffer coordinates `top` is the smallest row index covered and
/// `bottom` is one past the largest, regardless of which way the y axis
/// is displayed.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Rect<T = usize> {
    /// The left bound of `self`, inclusive.
    pub left: T,
    /// The top bound of `self`, inclusive.
    pub top: T,
    /// The right bound of `self`, exclusive.
    pub right: T,
    /// The bottom bound of `self`, exclusive.
    pub bottom: T,
}

impl<T: Copy> Rect<T> {
    /// Returns the width of `self`, clamped to zero.
    pub fn width(&self) -> T::Output
    where
        T: Ord + Sub,
    {
        let (r, l) = (self.right, self.left);
        r - r.min(l) // Clamp width to 0
    }
    /// Returns the height of `self`, clamped to zero.
    pub fn height(&self) -> T::Output
    where
        T: Ord + Sub,
    {
        let (b, t) = (self.bottom, self.top);
        b - b.min(t) // Clamp height to 0
    }

    /// Returns whether `self` contains no points.
    pub fn is_empty(&self) -> bool
    where
        T: PartialOrd,
    {
        self.left >= self.right || self.top >= self.bottom
    }

    /// Returns whether the point (`x`, `y`) lies within `self`.
    pub fn contains(&self, x: T, y: T) -> bool
    where
        T: PartialOrd,
    {
        self.x_range().contains(&x) && self.y_range().contains(&y)
    }

    /// Returns the horizontal extent of `self` as a range.
    pub fn x_range(&self) -> Range<T> {
        self.left..self.right
    }
    /// Returns the vertical extent of `self` as a range.
    pub fn y_range(&self) -> Range<T> {
        self.top..self.bottom
    }

    /// Returns the intersection of `self` and `other`.
    ///
    /// The result may be empty, in which case its width or height is zero.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self
    where
        T: Ord,
    {
        Self {
            left: self.left.max(other.left),
            top: self.top.max(other.top),
            right: self.right.min(other.right),
            bottom: self.bottom.min(other.bottom),
        }
    }
}

impl<T> From<(Range<T>, Range<T>)> for Rect<T> {
    /// Creates a `Rect` from a horizontal and a vertical range.
    fn from((x, y): (Range<T>, Range<T>)) -> Self {
        Self {
            left: x.start,
            top: y.start,
            right: x.end,
            bottom: y.end,
        }
    }
}
