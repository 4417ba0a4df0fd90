/// Returns the smallest of one or more values.
///
/// Values are compared with [`partial_min()`][crate::partial_min], so floats are accepted. Among
/// equal or incomparable values, the earlier argument wins. Each argument is evaluated exactly
/// once, left to right.
///
/// # Example
///
/// ```
/// use leaf_math::min;
///
/// assert_eq!(min!(7), 7);
/// assert_eq!(min!(4, 9, -2, 5), -2);
/// assert_eq!(min!(0.5_f32, 0.25), 0.25);
/// ```
#[macro_export]
macro_rules! min {
    ($first:expr $(,)?) => {
        $first
    };

    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::partial_min($first, $crate::min!($($rest),+))
    };
}

/// Returns the largest of one or more values.
///
/// Values are compared with [`partial_max()`][crate::partial_max], so floats are accepted. Among
/// equal or incomparable values, the earlier argument wins. Each argument is evaluated exactly
/// once, left to right.
///
/// # Example
///
/// ```
/// use leaf_math::max;
///
/// assert_eq!(max!(7), 7);
/// assert_eq!(max!(4, 9, -2, 5), 9);
/// assert_eq!(max!(0.5_f32, 0.25), 0.5);
/// ```
#[macro_export]
macro_rules! max {
    ($first:expr $(,)?) => {
        $first
    };

    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::partial_max($first, $crate::max!($($rest),+))
    };
}

/// Returns the smallest [`Range`][crate::Range] that contains all of one or more values.
///
/// Each argument is evaluated exactly once, left to right.
///
/// # Example
///
/// ```
/// use leaf_math::{Range, range};
///
/// assert_eq!(range!(3), Range::point(3));
/// assert_eq!(range!(4, 9, -2, 5), Range::new(-2, 9));
/// ```
#[macro_export]
macro_rules! range {
    ($first:expr $(, $rest:expr)* $(,)?) => {{
        #[allow(unused_mut, reason = "single-value ranges are never widened")]
        let mut range = $crate::Range::point($first);
        $(range |= $rest;)*
        range
    }};
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[expect(
    clippy::float_cmp,
    reason = "all compared values are exactly representable"
)]
mod tests {
    use std::cell::RefCell;

    use crate::Range;

    #[test]
    fn min_max_single() {
        assert_eq!(min!(1), 1);
        assert_eq!(max!(1), 1);
        assert_eq!(min!(1,), 1);
    }

    #[test]
    fn min_max_many() {
        assert_eq!(min!(5, 3, 8, 1, 9), 1);
        assert_eq!(max!(5, 3, 8, 1, 9), 9);
        assert_eq!(min!(-0.5_f64, 2.0, -1.5), -1.5);
        assert_eq!(max!(-0.5_f64, 2.0, -1.5,), 2.0);
    }

    #[test]
    fn range_many() {
        assert_eq!(range!(5, 3, 8, 1, 9), Range::new(1, 9));
        assert_eq!(range!(-0.5_f32, 0.5), Range::new(-0.5, 0.5));
    }

    #[test]
    fn arguments_evaluated_once_in_order() {
        let order = RefCell::new(Vec::new());

        let next = |value: i32| {
            order.borrow_mut().push(value);
            value
        };

        let smallest = min!(next(3), next(1), next(2));
        assert_eq!(smallest, 1);
        assert_eq!(order.take(), vec![3, 1, 2]);

        let extent = range!(next(3), next(1), next(2));
        assert_eq!(extent, Range::new(1, 3));
        assert_eq!(order.take(), vec![3, 1, 2]);
    }
}
