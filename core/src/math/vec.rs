//! Vectors with a compile-time dimension.

use core::array;
use core::array::TryFromSliceError;
use core::fmt::{self, Debug, Formatter};
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub,
    SubAssign,
};

use super::approx::ApproxEq;
use super::space::{Linear, Scalar};

//
// Types
//

/// A generic vector type with `N` components of type `T`.
///
/// Arithmetic is defined componentwise for any [`Scalar`] component type.
/// Equality is exact for integral components and approximate, as defined
/// by [`ApproxEq`], for floating-point components.
///
/// # Examples
/// ```
/// use tinyrast_core::math::vec::*;
///
/// let v = vec3(1.0, 2.0, 3.0);
/// let w = vec3(4.0, 5.0, 6.0);
///
/// assert_eq!(v + w, vec3(5.0, 7.0, 9.0));
/// assert_eq!(v.dot(&w), 32.0);
/// assert_eq!(v * 2.0, vec3(2.0, 4.0, 6.0));
/// ```
#[repr(transparent)]
#[derive(Copy, Clone)]
pub struct Vector<T, const N: usize>(pub [T; N]);

/// A 2-vector with `f64` components by default.
pub type Vec2<T = f64> = Vector<T, 2>;
/// A 3-vector with `f64` components by default.
pub type Vec3<T = f64> = Vector<T, 3>;
/// A 4-vector with `f64` components by default.
pub type Vec4<T = f64> = Vector<T, 4>;

/// A 2-vector with `i32` components.
pub type Vec2i = Vec2<i32>;
/// A 3-vector with `i32` components.
pub type Vec3i = Vec3<i32>;

//
// Free functions
//

/// Returns a 2-vector with components `x` and `y`.
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Returns a 3-vector with components `x`, `y`, and `z`.
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Returns a 4-vector with components `x`, `y`, `z`, and `w`.
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

/// Returns a vector with all components equal to `s`.
///
/// # Examples
/// ```
/// # use tinyrast_core::math::vec::{splat, vec3, Vec3};
/// let v: Vec3 = splat(1.5);
/// assert_eq!(v, vec3(1.5, 1.5, 1.5));
/// ```
pub fn splat<T: Copy, const N: usize>(s: T) -> Vector<T, N> {
    Vector([s; N])
}

//
// Inherent impls
//

impl<T, const N: usize> Vector<T, N> {
    /// Returns a new vector with the given components.
    #[inline]
    pub const fn new(comps: [T; N]) -> Self {
        Self(comps)
    }

    /// Returns an iterator over the components of `self`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Returns a vector of the results of applying `f` to each component.
    ///
    /// # Examples
    /// ```
    /// # use tinyrast_core::math::vec::vec2;
    /// assert_eq!(vec2(1.5, -2.2).map(|c| c as i32), vec2(1, -2));
    /// ```
    #[inline]
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Vector<U, N> {
        Vector(self.0.map(f))
    }
}

impl<T: Copy, const N: usize> Vector<T, N> {
    /// Returns a vector of the results of applying `f` to each pair of
    /// components of `self` and `other`.
    ///
    /// # Examples
    /// ```
    /// # use tinyrast_core::math::vec::vec3;
    /// let v = vec3(1, 2, 3).zip_map(vec3(4, 5, 6), |a, b| a.max(b - 3));
    /// assert_eq!(v, vec3(1, 2, 3));
    /// ```
    #[inline]
    #[must_use]
    pub fn zip_map<U: Copy, V>(
        self,
        other: Vector<U, N>,
        mut f: impl FnMut(T, U) -> V,
    ) -> Vector<V, N> {
        Vector(array::from_fn(|i| f(self.0[i], other.0[i])))
    }

    /// Returns the x component of `self`.
    #[inline]
    pub fn x(&self) -> T {
        const { assert!(N >= 1, "x requires at least one component") };
        self.0[0]
    }
    /// Returns the y component of `self`.
    #[inline]
    pub fn y(&self) -> T {
        const { assert!(N >= 2, "y requires at least two components") };
        self.0[1]
    }
    /// Returns the z component of `self`.
    #[inline]
    pub fn z(&self) -> T {
        const { assert!(N >= 3, "z requires at least three components") };
        self.0[2]
    }
    /// Returns the w component of `self`.
    #[inline]
    pub fn w(&self) -> T {
        const { assert!(N >= 4, "w requires at least four components") };
        self.0[3]
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Returns the zero vector.
    #[inline]
    pub fn zero() -> Self {
        splat(T::ZERO)
    }

    /// Returns the elementwise product of `self` and `other`.
    ///
    /// # Examples
    /// ```
    /// # use tinyrast_core::math::vec::vec3;
    /// assert_eq!(vec3(1, 2, 3).mul_elem(vec3(4, 5, 6)), vec3(4, 10, 18));
    /// ```
    #[inline]
    #[must_use]
    pub fn mul_elem(self, other: Self) -> Self {
        self.zip_map(other, |a, b| a * b)
    }

    /// Returns the elementwise quotient of `self` and `other`.
    ///
    /// # Panics
    /// If `T` is an integer type and any component of `other` is zero.
    #[inline]
    #[must_use]
    pub fn div_elem(self, other: Self) -> Self {
        self.zip_map(other, |a, b| a / b)
    }

    /// Returns the dot product of `self` and `other`.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.iter()
            .zip(other.iter())
            .fold(T::ZERO, |acc, (&a, &b)| acc + a * b)
    }

    /// Returns the length of `self` squared.
    #[inline]
    pub fn len_sqr(&self) -> T {
        self.dot(self)
    }
}

impl<const N: usize> Vector<f64, N> {
    /// Returns the Euclidean length of `self`.
    #[inline]
    pub fn len(&self) -> f64 {
        use super::float::f64;
        f64::sqrt(self.len_sqr())
    }

    /// Scales `self` in place to unit length.
    ///
    /// The result is unspecified (in practice, NaN components) if `self`
    /// is a zero vector.
    ///
    /// # Examples
    /// ```
    /// # use tinyrast_core::math::vec::vec2;
    /// let mut v = vec2(3.0, 4.0);
    /// v.normalize();
    /// assert_eq!(v, vec2(0.6, 0.8));
    /// ```
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Returns `self` scaled to unit length.
    ///
    /// See [`normalize`][Self::normalize].
    #[inline]
    #[must_use]
    pub fn normalized(self) -> Self {
        self / self.len()
    }
}

impl<T: Scalar> Vec3<T> {
    /// Returns the cross product of `self` and `other`.
    ///
    /// The result is orthogonal to both inputs, and the triple
    /// `self`, `other`, `result` is right-handed.
    ///
    /// # Examples
    /// ```
    /// # use tinyrast_core::math::vec::vec3;
    /// let x = vec3(1, 0, 0);
    /// let y = vec3(0, 1, 0);
    /// assert_eq!(x.cross(&y), vec3(0, 0, 1));
    /// assert_eq!(y.cross(&x), vec3(0, 0, -1));
    /// ```
    pub fn cross(&self, other: &Self) -> Self {
        let [a, b, c] = self.0;
        let [d, e, f] = other.0;
        vec3(b * f - c * e, c * d - a * f, a * e - b * d)
    }

    /// Returns the x and y components of `self` as a 2-vector.
    #[inline]
    pub fn xy(&self) -> Vec2<T> {
        vec2(self.0[0], self.0[1])
    }

    /// Returns `self` in homogeneous coordinates, with w equal to one.
    #[inline]
    pub fn to_homogeneous(self) -> Vec4<T> {
        let [x, y, z] = self.0;
        vec4(x, y, z, T::ONE)
    }

    /// Returns the 3-vector represented by the homogeneous 4-vector `v`,
    /// that is, its x, y, and z components divided by w.
    ///
    /// # Examples
    /// ```
    /// # use tinyrast_core::math::vec::{Vec3, vec3, vec4};
    /// let v = Vec3::from_homogeneous(vec4(2.0, 4.0, -6.0, 2.0));
    /// assert_eq!(v, vec3(1.0, 2.0, -3.0));
    /// ```
    #[inline]
    pub fn from_homogeneous(v: Vec4<T>) -> Self {
        let [x, y, z, w] = v.0;
        vec3(x / w, y / w, z / w)
    }
}

//
// Local trait impls
//

impl<T: Scalar, const N: usize> Linear for Vector<T, N> {
    type Scalar = T;

    #[inline]
    fn zero() -> Self {
        Self::zero()
    }
    #[inline]
    fn add(&self, other: &Self) -> Self {
        *self + *other
    }
    #[inline]
    fn sub(&self, other: &Self) -> Self {
        *self - *other
    }
    #[inline]
    fn neg(&self) -> Self {
        -*self
    }
    #[inline]
    fn mul(&self, scalar: T) -> Self {
        *self * scalar
    }
}

impl<E, T: ApproxEq<T, E>, const N: usize> ApproxEq<Self, E> for Vector<T, N> {
    fn approx_eq_eps(&self, other: &Self, eps: &E) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.approx_eq_eps(b, eps))
    }
    fn relative_epsilon() -> E {
        T::relative_epsilon()
    }
}

//
// Foreign trait impls
//

impl<T: Copy + Default, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self([T::default(); N])
    }
}

impl<T: Debug, const N: usize> Debug for Vector<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("Vec")?;
        Debug::fmt(&self.0, f)
    }
}

/// Componentwise equality. Exact for integers, approximate for floats.
impl<T: ApproxEq, const N: usize> PartialEq for Vector<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().zip(other.iter()).all(|(a, b)| a.approx_eq(b))
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(comps: [T; N]) -> Self {
        Self(comps)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N>) -> Self {
        v.0
    }
}

/// Fallible conversion from a slice.
///
/// # Errors
/// If the length of the slice is not `N`.
///
/// # Examples
/// ```
/// # use tinyrast_core::math::vec::{Vec3, vec3};
/// let v = Vec3::try_from(&[1.0, 2.0, 3.0][..]);
/// assert_eq!(v.ok(), Some(vec3(1.0, 2.0, 3.0)));
///
/// assert!(Vec3::try_from(&[1.0, 2.0][..]).is_err());
/// ```
impl<T: Copy, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = TryFromSliceError;

    fn try_from(comps: &[T]) -> Result<Self, Self::Error> {
        <[T; N]>::try_from(comps).map(Self)
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.0[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.0[i]
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

//
// Arithmetic traits
//

impl<T: Scalar, const N: usize> AddAssign for Vector<T, N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = self.zip_map(rhs, |a, b| a + b);
    }
}

impl<T: Scalar, const N: usize> SubAssign for Vector<T, N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.zip_map(rhs, |a, b| a - b);
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for Vector<T, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = self.map(|a| a * rhs);
    }
}

impl<T: Scalar, const N: usize> DivAssign<T> for Vector<T, N> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        *self = self.map(|a| a / rhs);
    }
}

/// Implements a binary operator in terms of the corresponding op-assign.
macro_rules! impl_op {
    ($trait:ident::$method:ident, $rhs:ty, $op:tt) => {
        impl<T: Scalar, const N: usize> $trait<$rhs> for Vector<T, N> {
            type Output = Self;
            #[inline]
            fn $method(mut self, rhs: $rhs) -> Self {
                self $op rhs;
                self
            }
        }
    };
}
impl_op!(Add::add, Self, +=);
impl_op!(Sub::sub, Self, -=);
impl_op!(Mul::mul, T, *=);
impl_op!(Div::div, T, /=);

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.map(|a| -a)
    }
}

macro_rules! impl_scalar_mul {
    ($($t:ty)*) => {$(
        /// Multiplies the vector by the scalar.
        impl<const N: usize> Mul<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;
            #[inline]
            fn mul(self, rhs: Vector<$t, N>) -> Self::Output {
                rhs * self
            }
        }
    )*};
}
impl_scalar_mul!(i32 f64);

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;

    use super::*;

    mod f64 {
        use super::*;

        #[test]
        fn accessors() {
            let v = vec4(1.0, 2.0, 3.0, 4.0);
            assert_eq!(v.x(), 1.0);
            assert_eq!(v.y(), 2.0);
            assert_eq!(v.z(), 3.0);
            assert_eq!(v.w(), 4.0);
            assert_eq!(v[2], 3.0);
        }

        #[test]
        fn add_sub_neg() {
            let v = vec3(1.0, 2.0, 3.0);
            let w = vec3(-4.0, 0.5, 1.0);
            assert_eq!(v + w, vec3(-3.0, 2.5, 4.0));
            assert_eq!(v - w, vec3(5.0, 1.5, 2.0));
            assert_eq!(-v, vec3(-1.0, -2.0, -3.0));

            let mut u = v;
            u += w;
            u -= w;
            assert_eq!(u, v);
        }

        #[test]
        fn scalar_mul_div() {
            let v = vec2(1.0, -2.0);
            assert_eq!(v * 3.0, vec2(3.0, -6.0));
            assert_eq!(3.0 * v, vec2(3.0, -6.0));
            assert_eq!(v / 2.0, vec2(0.5, -1.0));
        }

        #[test]
        fn elementwise_mul_div() {
            let v = vec3(2.0, 4.0, 6.0);
            let w = vec3(0.5, 2.0, -3.0);
            assert_eq!(v.mul_elem(w), vec3(1.0, 8.0, -18.0));
            assert_eq!(v.div_elem(w), vec3(4.0, 2.0, -2.0));
        }

        #[test]
        fn dot_and_len() {
            let v = vec3(1.0, 2.0, 2.0);
            assert_eq!(v.dot(&vec3(3.0, -1.0, 0.5)), 2.0);
            assert_eq!(v.len_sqr(), 9.0);
            assert_eq!(v.len(), 3.0);
        }

        #[test]
        fn cross_is_orthogonal() {
            let v = vec3(1.0, 2.0, 3.0);
            let w = vec3(-2.0, 0.5, 4.0);
            let c = v.cross(&w);
            assert_approx_eq!(c.dot(&v), 0.0);
            assert_approx_eq!(c.dot(&w), 0.0);
        }

        #[test]
        fn normalize_yields_unit_length() {
            let mut v = vec3(3.0, -4.0, 12.0);
            v.normalize();
            assert_approx_eq!(v.len(), 1.0);
            assert_eq!(v, vec3(3.0, -4.0, 12.0) / 13.0);
        }

        #[test]
        fn normalize_zero_is_nan() {
            let v = vec2(0.0, 0.0).normalized();
            assert!(v.x().is_nan());
        }

        #[test]
        fn equality_is_approximate() {
            assert_eq!(vec2(0.1 + 0.2, 1.0), vec2(0.3, 1.0));
            assert_ne!(vec2(0.3, 1.0), vec2(0.3, 1.001));
        }

        #[test]
        fn homogeneous() {
            let v = vec3(1.0, -2.0, 3.0);
            assert_eq!(v.to_homogeneous(), vec4(1.0, -2.0, 3.0, 1.0));
            assert_eq!(Vec3::from_homogeneous(v.to_homogeneous()), v);
        }

        #[test]
        fn debug() {
            assert_eq!(
                alloc::format!("{:?}", vec3(1.0, -2.5, 0.0)),
                "Vec[1.0, -2.5, 0.0]"
            );
        }
    }

    mod i32 {
        use super::*;

        #[test]
        fn arithmetic() {
            let v = vec3(1, 2, 3);
            assert_eq!(v + vec3(1, 1, 1), vec3(2, 3, 4));
            assert_eq!(v * 2, vec3(2, 4, 6));
            assert_eq!(2 * v, vec3(2, 4, 6));
            assert_eq!(vec3(6, 4, 2) / 2, vec3(3, 2, 1));
            assert_eq!(v.dot(&v), 14);
            assert_eq!(v.len_sqr(), 14);
        }

        #[test]
        fn equality_is_exact() {
            assert_eq!(vec2(1, 2), vec2(1, 2));
            assert_ne!(vec2(1, 2), vec2(1, 3));
        }

        #[test]
        fn map_and_zip_map() {
            assert_eq!(vec2(1, -2).map(|c| c * 10), vec2(10, -20));
            assert_eq!(vec2(1, 5).zip_map(vec2(3, 2), |a, b| a.max(b)), vec2(3, 5));
        }
    }

    #[test]
    fn try_from_slice() {
        let v: Result<Vec3<i32>, _> = Vector::try_from(&[1, 2, 3][..]);
        assert_eq!(v.ok(), Some(vec3(1, 2, 3)));

        let v: Result<Vec3<i32>, _> = Vector::try_from(&[1, 2][..]);
        assert!(v.is_err());

        let v: Result<Vec2<i32>, _> = Vector::try_from(&[1, 2, 3][..]);
        assert!(v.is_err());
    }

    #[test]
    fn from_array() {
        let v: Vec2 = [1.0, 2.0].into();
        assert_eq!(v, vec2(1.0, 2.0));
        let a: [f64; 2] = v.into();
        assert_eq!(a, [1.0, 2.0]);
    }

    #[test]
    fn splat_and_default() {
        assert_eq!(splat::<i32, 3>(7), vec3(7, 7, 7));
        assert_eq!(Vec2::<f64>::default(), vec2(0.0, 0.0));
    }
}
