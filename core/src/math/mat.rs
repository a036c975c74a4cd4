//! Matrices and linear transforms.
//!
//! The shape of a [`Matrix`] is part of its type, so adding two matrices of
//! different shapes, or multiplying non-conformable ones, is a compile-time
//! error. Matrices built from runtime data, whose shape cannot be known
//! statically, are validated by [`Matrix::from_rows`] and
//! [`Matrix::from_row_major`], which return an [`Error`] on mismatch.

use alloc::vec::Vec;
use core::array;
use core::fmt::{self, Debug, Display, Formatter};
use core::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use crate::math::approx::ApproxEq;
use crate::math::space::Linear;
use crate::math::vec::{Vec3, Vector, splat};

#[cfg(feature = "fp")]
use crate::math::angle::Angle;

//
// Types
//

/// A real-valued matrix with `R` rows and `C` columns.
///
/// Elements are stored in row-major order: `m.0[i][j]` is the element on
/// row `i` and column `j`.
#[repr(transparent)]
#[derive(Copy, Clone)]
pub struct Matrix<const R: usize, const C: usize>(pub [[f64; C]; R]);

/// A 2×2 matrix.
pub type Mat2 = Matrix<2, 2>;
/// A 3×3 matrix.
pub type Mat3 = Matrix<3, 3>;
/// A 4×4 matrix.
pub type Mat4 = Matrix<4, 4>;

/// Error constructing a matrix from runtime data.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The number of rows, or the number of columns of the first row,
    /// differs from the shape of the target type.
    Shape {
        expected: (usize, usize),
        found: (usize, usize),
    },
    /// A row after the first has a different length than the first row.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A flat element slice has a length other than rows × columns.
    Len { expected: usize, found: usize },
}

/// Result of constructing a matrix from runtime data.
pub type Result<T> = core::result::Result<T, Error>;

/// Trait for square matrices that can represent a rotation about
/// the z axis, which in two dimensions is the only kind of rotation.
#[cfg(feature = "fp")]
pub trait Rotation: Sized {
    /// Returns a matrix rotating counter-clockwise about the z axis
    /// by angle `a`.
    fn rotation(a: Angle) -> Self;
}

//
// Inherent impls
//

impl<const R: usize, const C: usize> Matrix<R, C> {
    /// Returns a matrix with the given elements.
    #[inline]
    pub const fn new(els: [[f64; C]; R]) -> Self {
        Self(els)
    }

    /// Returns a matrix with all elements equal to zero.
    pub const fn zeros() -> Self {
        Self([[0.0; C]; R])
    }

    /// Returns a matrix whose columns are the given vectors.
    ///
    /// # Examples
    /// ```
    /// use tinyrast_core::math::{mat::Matrix, vec2};
    ///
    /// let m = Matrix::from_cols([vec2(1.0, 2.0), vec2(3.0, 4.0), vec2(5.0, 6.0)]);
    /// assert_eq!(m, Matrix::new([[1.0, 3.0, 5.0], [2.0, 4.0, 6.0]]));
    /// ```
    pub fn from_cols(cols: [Vector<f64, R>; C]) -> Self {
        Self(array::from_fn(|i| array::from_fn(|j| cols[j][i])))
    }

    /// Attempts to construct a matrix from a sequence of rows.
    ///
    /// # Errors
    /// Returns [`Error::Shape`] if the number of rows is not `R` or the
    /// first row does not have `C` elements, and [`Error::Ragged`] if any
    /// subsequent row differs in length from the first.
    ///
    /// # Examples
    /// ```
    /// use tinyrast_core::math::mat::{Error, Mat2};
    ///
    /// let m = Mat2::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
    /// assert_eq!(m.map(|m| m.to_row_major()), Ok(vec![1.0, 2.0, 3.0, 4.0]));
    ///
    /// let m = Mat2::from_rows(&[vec![1.0, 2.0], vec![3.0]]);
    /// assert_eq!(m, Err(Error::Ragged { row: 1, expected: 2, found: 1 }));
    /// ```
    pub fn from_rows<Row: AsRef<[f64]>>(rows: &[Row]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        if rows.len() != R || cols != C {
            return Err(Error::Shape {
                expected: (R, C),
                found: (rows.len(), cols),
            });
        }
        let mut res = Self::zeros();
        for (i, (dst, src)) in res.0.iter_mut().zip(rows).enumerate() {
            let src = src.as_ref();
            if src.len() != cols {
                return Err(Error::Ragged {
                    row: i,
                    expected: cols,
                    found: src.len(),
                });
            }
            dst.copy_from_slice(src);
        }
        Ok(res)
    }

    /// Attempts to construct a matrix from its elements in row-major order.
    ///
    /// # Errors
    /// Returns [`Error::Len`] if the length of `els` is not `R` × `C`.
    pub fn from_row_major(els: &[f64]) -> Result<Self> {
        if els.len() != R * C {
            return Err(Error::Len { expected: R * C, found: els.len() });
        }
        Ok(Self(array::from_fn(|i| array::from_fn(|j| els[i * C + j]))))
    }

    /// Returns the shape of `self` as (rows, columns).
    #[inline]
    pub const fn dims(&self) -> (usize, usize) {
        (R, C)
    }

    /// Returns the element at row `i` and column `j`.
    ///
    /// # Panics
    /// If `i` ≥ `R` or `j` ≥ `C`.
    #[inline]
    pub fn at(&self, i: usize, j: usize) -> f64 {
        self.0[i][j]
    }

    /// Returns the element at row `i` and column `j`,
    /// or `None` if either is out of bounds.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.0.get(i)?.get(j).copied()
    }

    /// Returns the `i`th row of `self` as a vector.
    ///
    /// # Panics
    /// If `i` ≥ `R`.
    #[inline]
    pub fn row(&self, i: usize) -> Vector<f64, C> {
        Vector(self.0[i])
    }

    /// Returns the `j`th column of `self` as a vector.
    ///
    /// # Panics
    /// If `j` ≥ `C`.
    #[inline]
    pub fn col(&self, j: usize) -> Vector<f64, R> {
        Vector(array::from_fn(|i| self.0[i][j]))
    }

    /// Returns the columns of `self` as vectors.
    pub fn cols(&self) -> [Vector<f64, R>; C] {
        array::from_fn(|j| self.col(j))
    }

    /// Returns the transpose of `self`.
    #[must_use]
    pub fn transpose(&self) -> Matrix<C, R> {
        Matrix(array::from_fn(|j| array::from_fn(|i| self.0[i][j])))
    }

    /// Returns the elements of `self` row by row.
    pub fn to_row_major(&self) -> Vec<f64> {
        self.0.iter().flatten().copied().collect()
    }

    /// Returns the elements of `self` column by column.
    pub fn to_col_major(&self) -> Vec<f64> {
        (0..C)
            .flat_map(|j| self.0.iter().map(move |row| row[j]))
            .collect()
    }

    /// Returns the product of `self` and the column vector `v`.
    ///
    /// # Examples
    /// ```
    /// use tinyrast_core::math::{mat::Matrix, vec2, vec3};
    ///
    /// let m = Matrix::new([[1.0, 0.0, 2.0], [0.0, 3.0, 0.0]]);
    /// assert_eq!(m.apply(&vec3(1.0, 2.0, 3.0)), vec2(7.0, 6.0));
    /// ```
    pub fn apply(&self, v: &Vector<f64, C>) -> Vector<f64, R> {
        Vector(array::from_fn(|i| self.row(i).dot(v)))
    }
}

impl<const N: usize> Matrix<N, N> {
    /// Returns the N×N identity matrix.
    pub fn identity() -> Self {
        Self::diagonal(splat(1.0))
    }

    /// Returns a matrix with the components of `diag` on its main diagonal
    /// and zeros elsewhere.
    pub fn diagonal(diag: Vector<f64, N>) -> Self {
        let mut m = Self::zeros();
        for i in 0..N {
            m.0[i][i] = diag[i];
        }
        m
    }
}

//
// Local trait impls
//

impl<const R: usize, const C: usize> ApproxEq<Self, f64> for Matrix<R, C> {
    fn approx_eq_eps(&self, other: &Self, eps: &f64) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
    fn relative_epsilon() -> f64 {
        f64::relative_epsilon()
    }
}

impl<const R: usize, const C: usize> Linear for Matrix<R, C> {
    type Scalar = f64;

    fn zero() -> Self {
        Self::zeros()
    }
    fn add(&self, other: &Self) -> Self {
        *self + *other
    }
    fn sub(&self, other: &Self) -> Self {
        *self - *other
    }
    fn neg(&self) -> Self {
        -*self
    }
    fn mul(&self, scalar: f64) -> Self {
        *self * scalar
    }
}

#[cfg(feature = "fp")]
impl Rotation for Mat2 {
    fn rotation(a: Angle) -> Self {
        rotate2(a)
    }
}

#[cfg(feature = "fp")]
impl Rotation for Mat3 {
    fn rotation(a: Angle) -> Self {
        rotate_z(a)
    }
}

//
// Foreign trait impls
//

impl<const R: usize, const C: usize> Debug for Matrix<R, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix<{R}x{C}>[")?;
        for row in &self.0 {
            writeln!(f, "    {row:6.2?}")?;
        }
        write!(f, "]")
    }
}

/// Elementwise approximate equality.
impl<const R: usize, const C: usize> PartialEq for Matrix<R, C> {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl<const R: usize, const C: usize> From<[[f64; C]; R]> for Matrix<R, C> {
    fn from(els: [[f64; C]; R]) -> Self {
        Self(els)
    }
}

/// Fallible conversion from nested rows. See [`Matrix::from_rows`].
impl<const R: usize, const C: usize> TryFrom<Vec<Vec<f64>>> for Matrix<R, C> {
    type Error = Error;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(&rows)
    }
}

impl<const R: usize, const C: usize> Index<usize> for Matrix<R, C> {
    type Output = [f64; C];

    #[inline]
    fn index(&self, i: usize) -> &[f64; C] {
        &self.0[i]
    }
}

impl<const R: usize, const C: usize> IndexMut<usize> for Matrix<R, C> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut [f64; C] {
        &mut self.0[i]
    }
}

/// The matrix product. Only defined for conformable shapes: the number of
/// columns of `self` must equal the number of rows of `rhs`.
impl<const R: usize, const C: usize, const K: usize> Mul<Matrix<C, K>>
    for Matrix<R, C>
{
    type Output = Matrix<R, K>;

    fn mul(self, rhs: Matrix<C, K>) -> Matrix<R, K> {
        let mut res = Matrix::<R, K>::zeros();
        for i in 0..R {
            for j in 0..K {
                for k in 0..C {
                    res.0[i][j] += self.0[i][k] * rhs.0[k][j];
                }
            }
        }
        res
    }
}

/// Matrix-vector product, equivalent to [`Matrix::apply`].
impl<const R: usize, const C: usize> Mul<Vector<f64, C>> for Matrix<R, C> {
    type Output = Vector<f64, R>;

    fn mul(self, v: Vector<f64, C>) -> Vector<f64, R> {
        self.apply(&v)
    }
}

impl<const R: usize, const C: usize> Mul<f64> for Matrix<R, C> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self(self.0.map(|row| row.map(|e| e * rhs)))
    }
}

impl<const R: usize, const C: usize> Add for Matrix<R, C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(array::from_fn(|i| array::from_fn(|j| self.0[i][j] + rhs.0[i][j])))
    }
}

impl<const R: usize, const C: usize> Sub for Matrix<R, C> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(array::from_fn(|i| array::from_fn(|j| self.0[i][j] - rhs.0[i][j])))
    }
}

impl<const R: usize, const C: usize> Neg for Matrix<R, C> {
    type Output = Self;

    fn neg(self) -> Self {
        self * -1.0
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::Shape { expected: (er, ec), found: (fr, fc) } => write!(
                f,
                "matrix shape mismatch: expected {er}x{ec}, found {fr}x{fc}"
            ),
            Error::Ragged { row, expected, found } => write!(
                f,
                "ragged matrix: row {row} has {found} elements, expected {expected}"
            ),
            Error::Len { expected, found } => write!(
                f,
                "matrix element count mismatch: expected {expected}, found {found}"
            ),
        }
    }
}

//
// Free functions
//

/// Returns a matrix scaling each axis by the corresponding component
/// of `factors`.
///
/// # Examples
/// ```
/// use tinyrast_core::math::{mat::scale, vec2};
///
/// let m = scale(vec2(2.0, 3.0));
/// assert_eq!(m.apply(&vec2(1.0, 1.0)), vec2(2.0, 3.0));
/// ```
pub fn scale<const N: usize>(factors: Vector<f64, N>) -> Matrix<N, N> {
    Matrix::diagonal(factors)
}

/// Returns a 2×2 matrix rotating counter-clockwise by angle `a`.
#[cfg(feature = "fp")]
pub fn rotate2(a: Angle) -> Mat2 {
    let (sin, cos) = a.sin_cos();
    Matrix([
        [cos, -sin], //
        [sin, cos],
    ])
}

/// Returns a 3×3 matrix rotating counter-clockwise about the z axis
/// by angle `a`.
#[cfg(feature = "fp")]
pub fn rotate_z(a: Angle) -> Mat3 {
    let (sin, cos) = a.sin_cos();
    Matrix([
        [cos, -sin, 0.0], //
        [sin, cos, 0.0],
        [0.0, 0.0, 1.0],
    ])
}

/// Returns a simple perspective projection matrix for a camera located
/// on the positive z axis, `camera_distance` units from the origin.
///
/// The matrix is the identity except for the element on row 3, column 2,
/// which is −1 / `camera_distance`. Applied to a homogeneous point, it
/// yields w = 1 − z / `camera_distance`.
pub fn perspective(camera_distance: f64) -> Mat4 {
    let mut m = Mat4::identity();
    m.0[3][2] = -1.0 / camera_distance;
    m
}

/// Returns a matrix mapping normalized device coordinates to screen space.
///
/// The cube [−1, 1]³ is mapped onto the box with origin (`x`, `y`, 0)
/// and size `w`×`h`×`depth`.
///
/// # Examples
/// ```
/// use tinyrast_core::math::{mat::viewport, vec4};
///
/// let m = viewport(0.0, 0.0, 800.0, 600.0, 255.0);
/// assert_eq!(m.apply(&vec4(-1.0, -1.0, -1.0, 1.0)), vec4(0.0, 0.0, 0.0, 1.0));
/// assert_eq!(m.apply(&vec4(1.0, 1.0, 1.0, 1.0)), vec4(800.0, 600.0, 255.0, 1.0));
/// ```
pub fn viewport(x: f64, y: f64, w: f64, h: f64, depth: f64) -> Mat4 {
    let (hw, hh, hd) = (w / 2.0, h / 2.0, depth / 2.0);
    Matrix([
        [hw, 0.0, 0.0, x + hw],
        [0.0, hh, 0.0, y + hh],
        [0.0, 0.0, hd, hd],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns the homogeneous translation matrix by `offset`.
pub fn translate(offset: Vec3) -> Mat4 {
    let [x, y, z] = offset.0;
    Matrix([
        [1.0, 0.0, 0.0, x],
        [0.0, 1.0, 0.0, y],
        [0.0, 0.0, 1.0, z],
        [0.0, 0.0, 0.0, 1.0],
    ])
}
