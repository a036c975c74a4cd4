//! Approximate equality of floating-point values.

/// Trait for testing approximate equality.
///
/// Chains of floating-point operations accumulate rounding error: rotating
/// `(1, 0)` a quarter turn yields an x coordinate of about 6.1e-17, not
/// zero. Such values should be compared with a tolerance.
///
/// Two values compare approximately equal if their difference is at most
/// `eps · max(|self|, 1)`. The tolerance is thus absolute for magnitudes
/// below one and relative above.
///
/// Integers implement this trait with exact comparison, so that generic
/// code such as [`Vector`][super::Vector] equality works the same for
/// integral and floating-point components.
pub trait ApproxEq<Other: ?Sized = Self, Epsilon = Self> {
    /// Returns whether `self` and `other` are approximately equal, using
    /// the default epsilon of the type.
    fn approx_eq(&self, other: &Other) -> bool {
        self.approx_eq_eps(other, &Self::relative_epsilon())
    }

    /// Returns whether `self` and `other` are approximately equal, using
    /// the relative epsilon `eps`.
    fn approx_eq_eps(&self, other: &Other, eps: &Epsilon) -> bool;

    /// Returns the default relative epsilon.
    fn relative_epsilon() -> Epsilon;
}

impl ApproxEq for f64 {
    fn approx_eq_eps(&self, other: &Self, eps: &Self) -> bool {
        use super::float::f64;
        f64::abs(self - other) <= eps * f64::abs(*self).max(1.0)
    }

    fn relative_epsilon() -> Self {
        // micromath trades accuracy for speed
        let accurate = cfg!(any(feature = "std", feature = "libm"));
        if accurate || !cfg!(feature = "mm") { 1e-9 } else { 1e-5 }
    }
}

impl ApproxEq for f32 {
    fn approx_eq_eps(&self, other: &Self, eps: &Self) -> bool {
        let abs = |x: f32| if x < 0.0 { -x } else { x };
        abs(self - other) <= eps * abs(*self).max(1.0)
    }

    fn relative_epsilon() -> Self {
        1e-6
    }
}

macro_rules! impl_exact {
    ($($t:ty),*) => {$(
        impl ApproxEq for $t {
            #[inline]
            fn approx_eq_eps(&self, other: &Self, _: &Self) -> bool {
                self == other
            }
            #[inline]
            fn relative_epsilon() -> Self {
                0
            }
        }
    )*};
}
impl_exact!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<E, T, const N: usize> ApproxEq<Self, E> for [T; N]
where
    T: ApproxEq<T, E>,
{
    fn approx_eq_eps(&self, other: &Self, eps: &E) -> bool {
        self.iter()
            .zip(other)
            .all(|(a, b)| a.approx_eq_eps(b, eps))
    }
    fn relative_epsilon() -> E {
        T::relative_epsilon()
    }
}

/// Asserts that two values are approximately equal, as defined by their
/// [`ApproxEq`] impl.
///
/// An epsilon other than the default can be given with `eps = <literal>`.
/// An optional panic message may follow, as with `assert!`.
///
/// # Panics
/// If the values are not approximately equal.
///
/// # Examples
/// ```
/// use tinyrast_core::assert_approx_eq;
///
/// assert_ne!(0.1 + 0.2, 0.3);
/// assert_approx_eq!(0.1 + 0.2, 0.3);
///
/// assert_approx_eq!(100.0, 100.5, eps = 0.01);
/// ```
/// ```should_panic
/// # use tinyrast_core::assert_approx_eq;
/// assert_approx_eq!(1.0, 1.1, "{} is too far from {}", 1.1, 1.0);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(, eps = $eps:literal)?) => {
        match (&$a, &$b) {
            (a, b) => $crate::assert_approx_eq!(
                *a, *b $(, eps = $eps)?,
                "values not approximately equal: `{a:?}` vs `{b:?}`"
            ),
        }
    };
    ($a:expr, $b:expr, $fmt:literal $(, $args:expr)*) => {
        assert!(
            $crate::math::approx::ApproxEq::approx_eq(&$a, &$b),
            $fmt $(, $args)*
        )
    };
    ($a:expr, $b:expr, eps = $eps:literal, $fmt:literal $(, $args:expr)*) => {
        assert!(
            $crate::math::approx::ApproxEq::approx_eq_eps(&$a, &$b, &$eps),
            $fmt $(, $args)*
        )
    };
}
