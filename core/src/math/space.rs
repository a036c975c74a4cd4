//! Traits for scalar components and linear (vector) spaces.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Sub};

use super::approx::ApproxEq;

/// Trait for the numeric component types of vectors.
///
/// Implemented for the signed integer types and the floating-point types.
/// Integral scalars compare exactly, floating-point ones approximately,
/// as defined by their [`ApproxEq`] impls.
pub trait Scalar:
    Copy
    + Default
    + PartialOrd
    + Debug
    + ApproxEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity.
    const ZERO: Self;
    /// The multiplicative identity.
    const ONE: Self;
}

macro_rules! impl_scalar {
    ($($t:ty: $zero:literal, $one:literal);* $(;)?) => {$(
        impl Scalar for $t {
            const ZERO: Self = $zero;
            const ONE: Self = $one;
        }
    )*};
}
impl_scalar! {
    i8: 0, 1;
    i16: 0, 1;
    i32: 0, 1;
    i64: 0, 1;
    isize: 0, 1;
    f32: 0.0, 1.0;
    f64: 0.0, 1.0;
}

/// Trait for types representing elements of a linear space (vector space).
///
/// The operations must satisfy the usual vector space axioms, up to
/// rounding errors in the floating-point case:
///
/// * `add` is commutative and associative, with [`zero`][Self::zero]
///   as the identity element
/// * `v.add(&v.neg()) == zero()`
/// * `mul` distributes over `add`
pub trait Linear: Sized {
    /// The scalar type associated with `Self`.
    type Scalar: Scalar;

    /// Returns the additive identity of `Self`.
    fn zero() -> Self;

    /// Adds `other` to `self`.
    fn add(&self, other: &Self) -> Self;

    /// Subtracts `other` from `self`.
    fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Returns the additive inverse of `self`.
    fn neg(&self) -> Self;

    /// Multiplies all components of `self` by `scalar`.
    fn mul(&self, scalar: Self::Scalar) -> Self;
}

impl Linear for f64 {
    type Scalar = Self;

    fn zero() -> Self {
        0.0
    }
    fn add(&self, other: &Self) -> Self {
        self + other
    }
    fn sub(&self, other: &Self) -> Self {
        self - other
    }
    fn neg(&self) -> Self {
        -*self
    }
    fn mul(&self, scalar: Self) -> Self {
        self * scalar
    }
}

/// Linearly interpolates between `from` and `to`.
///
/// Returns `from` if `t` = 0 and `to` if `t` = 1. Values of `t` outside the
/// unit interval extrapolate.
///
/// # Examples
/// ```
/// use tinyrast_core::math::{lerp, vec2};
///
/// assert_eq!(lerp(0.25, 2.0, 6.0), 3.0);
/// assert_eq!(lerp(0.5, vec2(-2.0, 1.0), vec2(2.0, 3.0)), vec2(0.0, 2.0));
/// ```
pub fn lerp<T: Linear<Scalar = f64>>(t: f64, from: T, to: T) -> T {
    from.add(&to.sub(&from).mul(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_identities() {
        assert_eq!(i32::ZERO + i32::ONE, 1);
        assert_eq!(f64::ONE * 3.5, 3.5);
        assert_eq!(f32::ZERO, 0.0);
    }

    #[test]
    fn lerp_f64() {
        assert_eq!(lerp(0.0, 2.0, 5.0), 2.0);
        assert_eq!(lerp(1.0, 2.0, 5.0), 5.0);
        assert_eq!(lerp(0.5, 2.0, 5.0), 3.5);
        assert_eq!(lerp(2.0, 2.0, 5.0), 8.0);
    }
}
