use std::ops::BitOrAssign;

use crate::{partial_max, partial_min};

/// An inclusive range `[min, max]` that can be widened one value at a time.
///
/// Widening with `|=` is the typical way to find the extent of a data set in a single pass:
///
/// ```
/// use leaf_math::Range;
///
/// let samples = [0.5_f32, -1.25, 0.75, 0.0];
///
/// let mut extent = Range::point(samples[0]);
///
/// for &sample in &samples[1..] {
///     extent |= sample;
/// }
///
/// assert_eq!(extent, Range::new(-1.25, 0.75));
/// ```
///
/// A range whose `min` is greater than its `max` contains no values. Widening such a range only
/// moves its bounds outward, so it does not necessarily become valid.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Range<T> {
    min: T,
    max: T,
}

impl<T> Range<T>
where
    T: PartialOrd + Copy,
{
    /// Creates the range `[min, max]`.
    #[must_use]
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Creates a range containing exactly one value.
    #[must_use]
    pub const fn point(value: T) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// The lower bound, inclusive.
    #[must_use]
    pub const fn min(&self) -> T {
        self.min
    }

    /// The upper bound, inclusive.
    #[must_use]
    pub const fn max(&self) -> T {
        self.max
    }

    /// Whether `value` lies within the range, bounds included.
    #[must_use]
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Widens the range so that it includes `value`.
///
/// Values that cannot be compared with the bounds (e.g. NaN) leave the range unchanged.
impl<T> BitOrAssign<T> for Range<T>
where
    T: PartialOrd + Copy,
{
    fn bitor_assign(&mut self, value: T) {
        self.min = partial_min(self.min, value);
        self.max = partial_max(self.max, value);
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[expect(
    clippy::float_cmp,
    reason = "all compared values are exactly representable"
)]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Range<f32>: Copy, Send, Sync);

    #[test]
    fn widen_in_both_directions() {
        let mut range = Range::point(5);

        range |= 8;
        assert_eq!(range, Range::new(5, 8));

        range |= 2;
        assert_eq!(range, Range::new(2, 8));

        range |= 6;
        assert_eq!(range, Range::new(2, 8));
    }

    #[test]
    fn widen_ignores_nan() {
        let mut range = Range::new(-1.0_f64, 1.0);

        range |= f64::NAN;

        assert_eq!(range.min(), -1.0);
        assert_eq!(range.max(), 1.0);
    }

    #[test]
    fn contains_is_inclusive() {
        let range = Range::new(10, 20);

        assert!(range.contains(10));
        assert!(range.contains(15));
        assert!(range.contains(20));
        assert!(!range.contains(9));
        assert!(!range.contains(21));
    }

    #[test]
    fn inverted_range_contains_nothing() {
        let range = Range::new(5, 1);

        assert!(!range.contains(1));
        assert!(!range.contains(3));
        assert!(!range.contains(5));
    }

    #[test]
    fn point_contains_only_itself() {
        let range = Range::point(0.5_f32);

        assert!(range.contains(0.5));
        assert!(!range.contains(0.25));
        assert!(!range.contains(f32::NAN));
    }
}
