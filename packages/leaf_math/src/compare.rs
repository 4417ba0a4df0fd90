/// Returns the smaller of two values.
///
/// Unlike [`std::cmp::min()`], this only requires `PartialOrd`, so it accepts floats. If the
/// values are equal or cannot be compared (e.g. one of them is NaN), `a` is returned.
#[must_use]
#[inline]
pub fn partial_min<T>(a: T, b: T) -> T
where
    T: PartialOrd,
{
    if b < a { b } else { a }
}

/// Returns the larger of two values.
///
/// Unlike [`std::cmp::max()`], this only requires `PartialOrd`, so it accepts floats. If the
/// values are equal or cannot be compared (e.g. one of them is NaN), `a` is returned.
#[must_use]
#[inline]
pub fn partial_max<T>(a: T, b: T) -> T
where
    T: PartialOrd,
{
    if a < b { b } else { a }
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
    fn integers() {
        assert_eq!(partial_min(3, 7), 3);
        assert_eq!(partial_min(7, 3), 3);
        assert_eq!(partial_max(3, 7), 7);
        assert_eq!(partial_max(7, 3), 7);
    }

    #[test]
    fn floats() {
        assert_eq!(partial_min(-0.5_f64, 0.25), -0.5);
        assert_eq!(partial_max(-0.5_f64, 0.25), 0.25);
    }

    #[test]
    fn incomparable_returns_first() {
        assert!(partial_min(f32::NAN, 1.0).is_nan());
        assert_eq!(partial_min(1.0, f32::NAN), 1.0);

        assert!(partial_max(f32::NAN, 1.0).is_nan());
        assert_eq!(partial_max(1.0, f32::NAN), 1.0);
    }

    #[test]
    fn equal_returns_first() {
        use std::cmp::Ordering;

        #[derive(Debug)]
        struct Tagged(u8, &'static str);

        impl PartialEq for Tagged {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }

        impl PartialOrd for Tagged {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                self.0.partial_cmp(&other.0)
            }
        }

        assert_eq!(partial_min(Tagged(1, "a"), Tagged(1, "b")).1, "a");
        assert_eq!(partial_max(Tagged(1, "a"), Tagged(1, "b")).1, "a");
    }
}
