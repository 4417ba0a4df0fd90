use num_traits::Signed;

use crate::{Range, partial_max, partial_min};

/// Limits `value` to the bounds of `range`.
///
/// Values below the range become `range.min()`, values above it become `range.max()`. If `range`
/// is inverted (`min > max`), the result is always `range.max()`.
///
/// # Example
///
/// ```
/// use leaf_math::{Range, clamp};
///
/// let volume = Range::new(0.0_f32, 1.0);
///
/// assert_eq!(clamp(1.5, volume), 1.0);
/// assert_eq!(clamp(-0.5, volume), 0.0);
/// assert_eq!(clamp(0.25, volume), 0.25);
/// ```
#[must_use]
#[inline]
pub fn clamp<T>(value: T, range: Range<T>) -> T
where
    T: PartialOrd + Copy,
{
    partial_min(partial_max(value, range.min()), range.max())
}

/// Limits `value` to the symmetric range `[-abs_max, abs_max]`.
///
/// `abs_max` is expected to be non-negative. A negative `abs_max` describes an inverted range,
/// for which the result is always `abs_max`.
///
/// # Example
///
/// ```
/// use leaf_math::clamp_abs;
///
/// assert_eq!(clamp_abs(-7, 5), -5);
/// assert_eq!(clamp_abs(3, 5), 3);
/// assert_eq!(clamp_abs(2.5_f64, 1.0), 1.0);
/// ```
#[must_use]
#[inline]
pub fn clamp_abs<T>(value: T, abs_max: T) -> T
where
    T: Signed + PartialOrd + Copy,
{
    clamp(value, Range::new(-abs_max, abs_max))
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
    fn clamp_within_and_outside() {
        let range = Range::new(-3, 3);

        assert_eq!(clamp(-10, range), -3);
        assert_eq!(clamp(-3, range), -3);
        assert_eq!(clamp(0, range), 0);
        assert_eq!(clamp(3, range), 3);
        assert_eq!(clamp(10, range), 3);
    }

    #[test]
    fn clamp_inverted_range_yields_max() {
        let range = Range::new(10, 0);

        assert_eq!(clamp(-5, range), 0);
        assert_eq!(clamp(5, range), 0);
        assert_eq!(clamp(15, range), 0);
    }

    #[test]
    fn clamp_nan_value_yields_nan() {
        // NaN is incomparable, so it passes through both bounds untouched.
        assert!(clamp(f64::NAN, Range::new(0.0, 1.0)).is_nan());
    }

    #[test]
    fn clamp_abs_is_symmetric() {
        assert_eq!(clamp_abs(-100_i32, 10), -10);
        assert_eq!(clamp_abs(100_i32, 10), 10);
        assert_eq!(clamp_abs(-4_i32, 10), -4);

        assert_eq!(clamp_abs(-0.75_f32, 0.5), -0.5);
        assert_eq!(clamp_abs(0.75_f32, 0.5), 0.5);
    }

    #[test]
    fn clamp_abs_zero_collapses() {
        assert_eq!(clamp_abs(42_i64, 0), 0);
        assert_eq!(clamp_abs(-42_i64, 0), 0);
    }

    #[test]
    fn clamp_abs_negative_bound_yields_bound() {
        assert_eq!(clamp_abs(0_i32, -2), -2);
        assert_eq!(clamp_abs(7_i32, -2), -2);
    }
}
