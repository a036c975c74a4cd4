//! Angular quantities.

use core::f64::consts::{PI, TAU};
use core::fmt::{self, Debug, Display};
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::math::approx::ApproxEq;
use crate::math::space::Linear;

//
// Types
//

/// A scalar angular quantity.
///
/// Prevents confusion between degrees and radians by requiring the use of
/// one of the named constructors to create an `Angle`, as well as one of
/// the named getter methods to obtain the angle as a raw `f64` value.
#[derive(Copy, Clone, Default, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Angle(f64);

//
// Free fns and consts
//

/// Returns an angle of `a` radians.
pub const fn rads(a: f64) -> Angle {
    Angle(a)
}

/// Returns an angle of `a` degrees.
///
/// The conversion to radians is `a` × π / 180.
pub fn degs(a: f64) -> Angle {
    Angle(a * PI / 180.0)
}

/// Returns an angle of `a` turns.
pub fn turns(a: f64) -> Angle {
    Angle(a * TAU)
}

//
// Inherent impls
//

impl Angle {
    /// A zero degree angle.
    pub const ZERO: Self = Self(0.0);
    /// A 90 degree angle.
    pub const RIGHT: Self = Self(TAU / 4.0);
    /// A 180 degree angle.
    pub const STRAIGHT: Self = Self(TAU / 2.0);
    /// A 360 degree angle.
    pub const FULL: Self = Self(TAU);

    /// Returns the value of `self` in radians.
    /// # Examples
    /// ```
    /// # use tinyrast_core::assert_approx_eq;
    /// # use tinyrast_core::math::degs;
    /// assert_approx_eq!(degs(90.0).to_rads(), core::f64::consts::FRAC_PI_2);
    /// ```
    pub const fn to_rads(self) -> f64 {
        self.0
    }
    /// Returns the value of `self` in degrees.
    /// # Examples
    /// ```
    /// # use tinyrast_core::assert_approx_eq;
    /// # use tinyrast_core::math::turns;
    /// assert_approx_eq!(turns(2.0).to_degs(), 720.0);
    /// ```
    pub fn to_degs(self) -> f64 {
        self.0 * 180.0 / PI
    }
    /// Returns the value of `self` in turns.
    pub fn to_turns(self) -> f64 {
        self.0 / TAU
    }
}

#[cfg(feature = "fp")]
impl Angle {
    /// Returns the sine of `self`.
    /// # Examples
    /// ```
    /// # use tinyrast_core::assert_approx_eq;
    /// # use tinyrast_core::math::angle::*;
    /// assert_approx_eq!(degs(30.0).sin(), 0.5)
    /// ```
    pub fn sin(self) -> f64 {
        use super::float::f64;
        f64::sin(self.0)
    }
    /// Returns the cosine of `self`.
    /// # Examples
    /// ```
    /// # use tinyrast_core::assert_approx_eq;
    /// # use tinyrast_core::math::angle::*;
    /// assert_approx_eq!(degs(60.0).cos(), 0.5)
    /// ```
    pub fn cos(self) -> f64 {
        use super::float::f64;
        f64::cos(self.0)
    }
    /// Simultaneously computes the sine and cosine of `self`.
    pub fn sin_cos(self) -> (f64, f64) {
        (self.sin(), self.cos())
    }
}

//
// Local trait impls
//

impl ApproxEq for Angle {
    fn approx_eq_eps(&self, other: &Self, eps: &Self) -> bool {
        self.0.approx_eq_eps(&other.0, &eps.0)
    }
    fn relative_epsilon() -> Self {
        Self(f64::relative_epsilon())
    }
}

impl Linear for Angle {
    type Scalar = f64;

    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }
    #[inline]
    fn add(&self, other: &Self) -> Self {
        *self + *other
    }
    #[inline]
    fn neg(&self) -> Self {
        -*self
    }
    #[inline]
    fn mul(&self, scalar: f64) -> Self {
        *self * scalar
    }
}

//
// Foreign trait impls
//

impl Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.to_degs(), f)?;
        f.write_str("°")
    }
}

impl Debug for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Angle(")?;
        Display::fmt(self, f)?;
        f.write_str(")")
    }
}

impl Add for Angle {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Angle {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<f64> for Angle {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

impl Div<f64> for Angle {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self(self.0 / rhs)
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::{FRAC_PI_2, PI};

    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn conversions() {
        assert_approx_eq!(degs(180.0).to_rads(), PI);
        assert_approx_eq!(degs(90.0), Angle::RIGHT);
        assert_approx_eq!(rads(FRAC_PI_2).to_degs(), 90.0);
        assert_eq!(turns(0.5), Angle::STRAIGHT);
        assert_eq!(Angle::FULL.to_turns(), 1.0);
    }

    #[test]
    fn arithmetic() {
        assert_approx_eq!(degs(30.0) + degs(60.0), Angle::RIGHT);
        assert_approx_eq!(degs(30.0) - degs(60.0), degs(-30.0));
        assert_approx_eq!(-degs(45.0), degs(-45.0));
        assert_approx_eq!(degs(45.0) * 4.0, Angle::STRAIGHT);
        assert_approx_eq!(Angle::FULL / 4.0, Angle::RIGHT);
    }

    #[cfg(any(feature = "std", feature = "libm"))]
    #[test]
    fn trig() {
        assert_approx_eq!(degs(90.0).sin(), 1.0);
        assert_approx_eq!(degs(90.0).cos(), 0.0);
        assert_approx_eq!(Angle::STRAIGHT.cos(), -1.0);
        let (s, c) = degs(30.0).sin_cos();
        assert_approx_eq!(s, 0.5);
        assert_approx_eq!(c, 0.8660254037844386);
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(alloc::format!("{:.1}", degs(45.0)), "45.0°");
        assert_eq!(alloc::format!("{:?}", Angle::ZERO), "Angle(0°)");
    }
}
