//! Two-dimensional buffers, such as color and depth buffers.

use alloc::vec::Vec;
use core::fmt::{self, Debug, Formatter};
use core::iter::repeat_n;
use core::ops::{Index, IndexMut};

use crate::math::vec::Vec2;

/// A rectangular 2D buffer that owns its elements, backed by a `Vec`.
///
/// `Buf2` stores its elements contiguously, in standard row-major order,
/// such that element (x, y) maps to element at index
/// ```text
/// buf.width() * y + x
/// ```
/// in the backing vector. Row 0 is stored first; whether it is displayed
/// at the top or the bottom of an image is up to the consumer. The
/// rasterizer treats y as pointing up, so image formats that store the
/// top row first should be fed [`rows_bottom_up`][Self::rows_bottom_up].
///
/// # Examples
/// ```
/// # use tinyrast_core::util::buf::*;
/// # use tinyrast_core::math::vec::*;
/// // Elements initialized with `Default::default()`
/// let mut buf = Buf2::new_default(4, 4);
/// // Indexing with a 2D vector (x, y) yields element at row y, column x:
/// buf[vec2(2, 1)] = 123;
/// // Indexing with an usize i yields row with index i as a slice:
/// assert_eq!(&buf[1usize], &[0, 0, 123, 0]);
/// // Thus you can also do this, row first, column second:
/// assert_eq!(buf[1usize][2], 123)
/// ```
#[derive(Clone, Eq, PartialEq)]
pub struct Buf2<T> {
    w: usize,
    h: usize,
    data: Vec<T>,
}

impl<T> Buf2<T> {
    /// Returns a buffer with size `w` × `h`, with elements initialized
    /// with values from `init` in row-major order.
    ///
    /// # Panics
    /// If there are fewer than `w * h` elements in `init`.
    pub fn new<I>(w: usize, h: usize, init: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let data: Vec<_> = init.into_iter().take(w * h).collect();
        assert_eq!(data.len(), w * h);
        Self { w, h, data }
    }
    /// Returns a buffer with size `w` × `h`, with every element
    /// initialized to a clone of `val`.
    pub fn new_fill(w: usize, h: usize, val: T) -> Self
    where
        T: Clone,
    {
        Self { w, h, data: repeat_n(val, w * h).collect() }
    }
    /// Returns a buffer with size `w` × `h`, with every element
    /// initialized by calling `T::default()`.
    pub fn new_default(w: usize, h: usize) -> Self
    where
        T: Clone + Default,
    {
        Self::new_fill(w, h, T::default())
    }
    /// Returns a buffer with size `w` × `h`, with every element
    /// initialized by calling `init_fn(x, y)` where x is the column index
    /// and y the row index of the element being initialized.
    pub fn new_with<F>(w: usize, h: usize, mut init_fn: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(w * h);
        for y in 0..h {
            data.extend((0..w).map(|x| init_fn(x, y)));
        }
        Self { w, h, data }
    }

    /// Returns the width of `self`.
    #[inline]
    pub fn width(&self) -> usize {
        self.w
    }
    /// Returns the height of `self`.
    #[inline]
    pub fn height(&self) -> usize {
        self.h
    }
    /// Returns whether `self` has no elements.
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Returns a view of the backing data of `self`.
    pub fn data(&self) -> &[T] {
        &self.data
    }
    /// Returns a mutable view of the backing data of `self`.
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Returns a reference to the element at (`x`, `y`),
    /// or `None` if the position is out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        self.to_index_checked(x, y).map(|i| &self.data[i])
    }
    /// Returns a mutable reference to the element at (`x`, `y`),
    /// or `None` if the position is out of bounds.
    #[inline]
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        self.to_index_checked(x, y).map(|i| &mut self.data[i])
    }

    /// Returns an iterator over the rows of `self` as `&[T]` slices,
    /// starting from row 0. The length of each slice equals
    /// [`self.width()`](Self::width).
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[T]> {
        // chunks(0) panics
        self.data.chunks(self.w.max(1))
    }
    /// Returns an iterator over the rows of `self` as `&mut [T]` slices.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [T]> {
        self.data.chunks_mut(self.w.max(1))
    }
    /// Returns an iterator over the rows of `self` from the last row to
    /// the first, for exporting to image formats that store the top row
    /// first.
    pub fn rows_bottom_up(&self) -> impl Iterator<Item = &[T]> {
        self.rows().rev()
    }
    /// Returns an iterator over all the elements of `self` in row-major
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Fills the buffer with clones of `val`.
    pub fn fill(&mut self, val: T)
    where
        T: Clone,
    {
        self.data.fill(val);
    }
    /// Reverses the order of the rows of `self` in place.
    pub fn flip_vertical(&mut self) {
        let (w, h) = (self.w, self.h);
        for y in 0..h / 2 {
            let (top, bot) = self.data.split_at_mut((h - 1 - y) * w);
            top[y * w..(y + 1) * w].swap_with_slice(&mut bot[..w]);
        }
    }

    #[inline]
    fn to_index_checked(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.w && y < self.h).then(|| y * self.w + x)
    }

    #[cold]
    #[inline(never)]
    #[track_caller]
    fn position_out_of_bounds(&self, x: usize, y: usize) -> ! {
        panic!(
            "position (x={x}, y={y}) out of bounds (0..{}, 0..{})",
            self.w, self.h
        )
    }
}

impl<T> Debug for Buf2<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buf2")
            .field("w", &self.w)
            .field("h", &self.h)
            .finish()
    }
}

impl<T> Index<usize> for Buf2<T> {
    type Output = [T];

    /// Returns a reference to the row of `self` at index `i`.
    /// The returned slice has length `self.width()`.
    #[inline]
    fn index(&self, i: usize) -> &[T] {
        &self.data[i * self.w..][..self.w]
    }
}

impl<T> IndexMut<usize> for Buf2<T> {
    /// Returns a mutable reference to the row of `self` at index `i`.
    /// The returned slice has length `self.width()`.
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut [T] {
        let w = self.w;
        &mut self.data[i * w..][..w]
    }
}

impl<T> Index<Vec2<usize>> for Buf2<T> {
    type Output = T;

    /// Returns a reference to the element of `self` at position `pos`.
    ///
    /// # Panics
    /// If `pos` is out of bounds.
    #[inline]
    fn index(&self, pos: Vec2<usize>) -> &T {
        let [x, y] = pos.0;
        match self.to_index_checked(x, y) {
            Some(i) => &self.data[i],
            None => self.position_out_of_bounds(x, y),
        }
    }
}

impl<T> IndexMut<Vec2<usize>> for Buf2<T> {
    /// Returns a mutable reference to the element of `self`
    /// at position `pos`.
    ///
    /// # Panics
    /// If `pos` is out of bounds.
    #[inline]
    fn index_mut(&mut self, pos: Vec2<usize>) -> &mut T {
        let [x, y] = pos.0;
        match self.to_index_checked(x, y) {
            Some(i) => &mut self.data[i],
            None => self.position_out_of_bounds(x, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use crate::math::vec::vec2;

    use super::*;

    #[test]
    fn buf_new_from() {
        let buf = Buf2::new(3, 2, 0..10);
        assert_eq!(buf.data(), &[0, 1, 2, 3, 4, 5]);
    }

    #[test]
    #[should_panic]
    fn buf_new_from_too_short() {
        let _: Buf2<i32> = Buf2::new(3, 2, 0..5);
    }

    #[test]
    fn buf_new_default() {
        let buf: Buf2<i32> = Buf2::new_default(5, 3);
        assert_eq!(buf.data(), &[0; 15]);
    }

    #[test]
    fn buf_new_with() {
        let buf = Buf2::new_with(3, 2, |x, y| x + y);
        assert_eq!(buf.data(), &[0, 1, 2, 1, 2, 3]);
    }

    #[test]
    fn buf_extents() {
        let buf: Buf2<()> = Buf2::new_default(4, 5);
        assert_eq!(buf.width(), 4);
        assert_eq!(buf.height(), 5);
        assert!(!buf.is_empty());
        assert!(Buf2::<u8>::new_default(0, 3).is_empty());
    }

    #[test]
    fn buf_index_and_get() {
        let buf = Buf2::new_with(4, 5, |x, y| x * 10 + y);

        assert_eq!(buf[vec2(0, 0)], 0);
        assert_eq!(buf[vec2(1, 0)], 10);
        assert_eq!(buf[vec2(3, 4)], 34);
        assert_eq!(buf[2usize], [2, 12, 22, 32]);

        assert_eq!(buf.get(2, 3), Some(&23));
        assert_eq!(buf.get(4, 0), None);
        assert_eq!(buf.get(0, 5), None);
    }

    #[test]
    #[should_panic = "position (x=4, y=0) out of bounds (0..4, 0..5)"]
    fn buf_index_x_out_of_bounds_should_panic() {
        let buf = Buf2::new_default(4, 5);
        let _: i32 = buf[vec2(4, 0)];
    }

    #[test]
    fn buf_index_mut() {
        let mut buf = Buf2::new_default(2, 2);
        buf[vec2(1, 0)] = 7;
        buf[1usize][0] = 9;
        *buf.get_mut(1, 1).unwrap() = 3;
        assert!(buf.get_mut(2, 1).is_none());
        assert_eq!(buf.data(), &[0, 7, 9, 3]);
    }

    #[test]
    fn buf_rows() {
        let buf = Buf2::new(2, 3, 0..6);
        let rows: Vec<_> = buf.rows().collect();
        assert_eq!(rows, vec![&[0, 1][..], &[2, 3], &[4, 5]]);

        let rows: Vec<_> = buf.rows_bottom_up().collect();
        assert_eq!(rows, vec![&[4, 5][..], &[2, 3], &[0, 1]]);
    }

    #[test]
    fn buf_flip_vertical() {
        let mut buf = Buf2::new(2, 3, 0..6);
        buf.flip_vertical();
        assert_eq!(buf.data(), &[4, 5, 2, 3, 0, 1]);

        let mut buf = Buf2::new(3, 4, 0..12);
        buf.flip_vertical();
        assert_eq!(buf.data(), &[9, 10, 11, 6, 7, 8, 3, 4, 5, 0, 1, 2]);
    }

    #[test]
    fn buf_fill() {
        let mut buf = Buf2::new(2, 2, 0..4);
        buf.fill(5);
        assert_eq!(buf.data(), &[5; 4]);
        for row in buf.rows_mut() {
            row[0] = 1;
        }
        assert_eq!(buf.iter().copied().collect::<Vec<_>>(), [1, 5, 1, 5]);
    }
}
