//! Floating-point compatibility API.
//!
//! Most floating-point functions are unavailable in `no_std`. This module
//! provides the ones the crate needs using either `std`, the `libm` crate,
//! or the `micromath` crate, depending on which feature is enabled. As a
//! fallback, a critical subset (everything but trigonometry) is implemented
//! even if none of the features is enabled.
//!
//! Use through the `f64` name exported from here:
//! ```
//! use tinyrast_core::math::float::f64;
//! assert_eq!(f64::sqrt(9.0), 3.0);
//! ```

#[cfg(feature = "libm")]
pub mod libm {
    pub use libm::fabs as abs;
    pub use libm::{ceil, cos, floor, round, sin, sqrt};
}

#[cfg(feature = "mm")]
pub mod mm {
    use micromath::F32Ext as mm;

    pub use super::fallback::{abs, ceil, floor, round};

    /// Returns the approximate square root of `x`.
    #[inline]
    pub fn sqrt(x: f64) -> f64 {
        let y = mm::sqrt(x as f32) as f64;
        // Two rounds of Newton's method to recover precision
        let y = 0.5 * (y + (x / y));
        0.5 * (y + (x / y))
    }
    #[inline]
    pub fn sin(x: f64) -> f64 {
        mm::sin(x as f32) as f64
    }
    #[inline]
    pub fn cos(x: f64) -> f64 {
        mm::cos(x as f32) as f64
    }
}

pub mod fallback {
    /// Returns the absolute value of `x`.
    #[inline]
    pub fn abs(x: f64) -> f64 {
        f64::from_bits(x.to_bits() & !(1 << 63))
    }
    /// Returns the largest integer less than or equal to `x`.
    #[inline]
    pub fn floor(x: f64) -> f64 {
        let t = x as i64 as f64;
        if t > x { t - 1.0 } else { t }
    }
    /// Returns the smallest integer greater than or equal to `x`.
    #[inline]
    pub fn ceil(x: f64) -> f64 {
        -floor(-x)
    }
    /// Returns the integer nearest to `x`, rounding half-way cases
    /// away from zero.
    #[inline]
    pub fn round(x: f64) -> f64 {
        if x < 0.0 {
            -floor(0.5 - x)
        } else {
            floor(x + 0.5)
        }
    }
    /// Returns the square root of `x`, or NaN if `x` is negative.
    #[inline]
    pub fn sqrt(x: f64) -> f64 {
        if x < 0.0 {
            return f64::NAN;
        }
        if x == 0.0 || x == f64::INFINITY {
            return x;
        }
        // Initial guess by halving the exponent
        let mut y = f64::from_bits((x.to_bits() >> 1) + 0x1FF8_0000_0000_0000);
        for _ in 0..6 {
            y = 0.5 * (y + x / y);
        }
        y
    }
}

#[cfg(feature = "std")]
#[allow(non_camel_case_types)]
pub type f64 = core::primitive::f64;

#[cfg(all(feature = "libm", not(feature = "std")))]
pub use libm as f64;

#[cfg(all(feature = "mm", not(feature = "std"), not(feature = "libm")))]
pub use mm as f64;

#[cfg(not(feature = "fp"))]
pub use fallback as f64;

#[cfg(test)]
#[allow(unused_imports)]
mod tests {
    use core::f64::consts::*;

    use super::*;
    use crate::assert_approx_eq;

    #[test]
    fn fallback_functions() {
        use fallback as fb;
        assert_eq!(fb::floor(1.5), 1.0);
        assert_eq!(fb::floor(0.99), 0.0);
        assert_eq!(fb::floor(-0.0), 0.0);
        assert_eq!(fb::floor(-1.1), -2.0);
        assert_eq!(fb::floor(-2.0), -2.0);

        assert_eq!(fb::ceil(1.5), 2.0);
        assert_eq!(fb::ceil(2.0), 2.0);
        assert_eq!(fb::ceil(-1.9), -1.0);

        assert_eq!(fb::round(1.5), 2.0);
        assert_eq!(fb::round(1.49), 1.0);
        assert_eq!(fb::round(-1.5), -2.0);
        assert_eq!(fb::round(-1.49), -1.0);

        assert_eq!(fb::abs(-3.5), 3.5);
        assert_eq!(fb::abs(3.5), 3.5);

        assert_approx_eq!(fb::sqrt(9.0), 3.0);
        assert_approx_eq!(fb::sqrt(2.0), SQRT_2);
        assert_approx_eq!(fb::sqrt(1e-6), 1e-3);
        assert_eq!(fb::sqrt(0.0), 0.0);
        assert!(fb::sqrt(-1.0).is_nan());
    }

    #[cfg(feature = "std")]
    #[test]
    fn std_functions() {
        assert_eq!(f64::floor(-0.0), 0.0);
        assert_eq!(f64::round(-2.5), -3.0);
        assert_eq!(f64::sqrt(9.0), 3.0);
        assert!(f64::sqrt(-1.0).is_nan());
        assert_eq!(f64::cos(PI), -1.0);
        assert_approx_eq!(f64::sin(FRAC_PI_6), 0.5);
    }

    #[cfg(feature = "libm")]
    #[test]
    fn libm_functions() {
        assert_eq!(libm::floor(-1.1), -2.0);
        assert_eq!(libm::round(2.5), 3.0);
        assert_eq!(libm::ceil(-1.9), -1.0);
        assert_eq!(libm::sqrt(16.0), 4.0);
        assert_eq!(libm::abs(-1.0), 1.0);
        assert_approx_eq!(libm::sin(FRAC_PI_6), 0.5);
    }

    #[cfg(feature = "mm")]
    #[test]
    fn mm_functions() {
        assert_approx_eq!(mm::sqrt(9.0), 3.0);
        assert_approx_eq!(mm::sin(FRAC_PI_6), 0.5, eps = 1e-3);
        assert_approx_eq!(mm::cos(PI), -1.0, eps = 1e-3);
    }
}
