use num_traits::Float;

/// Whether two floats differ by at most the machine epsilon of their type.
///
/// The tolerance is absolute, not scaled to the magnitude of the inputs. This is the right test
/// for values near 1.0 (normalized samples, unit vectors, probabilities) but too strict for large
/// magnitudes, where adjacent representable values are further apart than epsilon, and too lenient
/// for values much smaller than epsilon.
///
/// NaN is never approximately equal to anything, including itself.
///
/// # Example
///
/// ```
/// use leaf_math::approx_eq;
///
/// assert!(approx_eq(0.1_f64 + 0.2, 0.3));
/// assert!(!approx_eq(0.1_f64, 0.2));
/// ```
#[must_use]
#[inline]
pub fn approx_eq<T>(a: T, b: T) -> bool
where
    T: Float,
{
    (a - b).abs() <= T::epsilon()
}

/// Rounds `x` to an integer in the direction indicated by the sign of `dir`.
///
/// Rounds up (toward positive infinity) if `dir` is zero or positive and down (toward negative
/// infinity) if `dir` is negative. A NaN `dir` counts as negative.
///
/// # Example
///
/// ```
/// use leaf_math::round_toward;
///
/// assert_eq!(round_toward(2.25_f32, 1.0), 3.0);
/// assert_eq!(round_toward(2.25_f32, -1.0), 2.0);
/// assert_eq!(round_toward(-2.25_f32, 1.0), -2.0);
/// ```
#[must_use]
#[inline]
pub fn round_toward<T>(x: T, dir: T) -> T
where
    T: Float,
{
    if dir >= T::zero() { x.ceil() } else { x.floor() }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[expect(
    clippy::float_cmp,
    reason = "all compared values are exactly representable"
)]
mod tests {
    use super::*;

    #[test]
    fn approx_eq_within_epsilon() {
        assert!(approx_eq(1.0_f32, 1.0 + f32::EPSILON));
        assert!(approx_eq(1.0_f64, 1.0 - f64::EPSILON));
        assert!(approx_eq(0.0_f32, -0.0));
    }

    #[test]
    fn approx_eq_outside_epsilon() {
        assert!(!approx_eq(1.0_f32, 1.0 + 4.0 * f32::EPSILON));
        assert!(!approx_eq(-1.0_f64, 1.0));
    }

    #[test]
    fn approx_eq_is_absolute() {
        // Adjacent large values are further apart than epsilon.
        let large = 1.0e10_f64;
        let next = f64::from_bits(large.to_bits() + 1);

        assert!(!approx_eq(large, next));
    }

    #[test]
    fn approx_eq_rejects_nan() {
        assert!(!approx_eq(f32::NAN, f32::NAN));
        assert!(!approx_eq(f32::NAN, 0.0));
    }

    #[test]
    fn approx_eq_infinities() {
        // inf - inf is NaN, so even identical infinities are not approximately equal.
        assert!(!approx_eq(f64::INFINITY, f64::INFINITY));
    }

    #[test]
    fn round_toward_positive() {
        assert_eq!(round_toward(1.1_f64, 1.0), 2.0);
        assert_eq!(round_toward(-1.1_f64, 1.0), -1.0);
        assert_eq!(round_toward(3.0_f64, 1.0), 3.0);
    }

    #[test]
    fn round_toward_zero_dir_rounds_up() {
        assert_eq!(round_toward(1.1_f64, 0.0), 2.0);
        assert_eq!(round_toward(1.1_f64, -0.0), 2.0);
    }

    #[test]
    fn round_toward_negative() {
        assert_eq!(round_toward(1.9_f32, -1.0), 1.0);
        assert_eq!(round_toward(-1.1_f32, -1.0), -2.0);
    }

    #[test]
    fn round_toward_nan_dir_rounds_down() {
        assert_eq!(round_toward(1.5_f32, f32::NAN), 1.0);
    }
}
