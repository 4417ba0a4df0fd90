use crate::{Ordinal, OrdinalFn};

/// Calls `op` specialized for the ordinal of `value`, provided that ordinal is less than `MAX`.
///
/// Exactly one arm of the generated `match` executes for a value in `[0, MAX)` and its result is
/// returned as `Some`. For any other value, `op` is not called and the result is `None`.
///
/// `MAX` is the exclusive upper bound of the enabled ordinal range. It is typically either
/// `E::COUNT` (see [`dispatch_all()`]) or the ordinal of a trailing "count" variant. It must
/// not exceed `E::COUNT`, which is verified at compile time.
///
/// # Example
///
/// ```
/// use ordinal_switch::{Ordinal, OrdinalFn, Tag};
///
/// #[derive(Clone, Copy, Debug, Ordinal)]
/// enum Quality {
///     Draft,
///     Normal,
///     Best,
///     // Not a real quality level, marks the end of the range.
///     Count,
/// }
///
/// struct Oversampling;
///
/// impl OrdinalFn<Quality> for Oversampling {
///     type Output = usize;
///
///     fn call<const I: usize>(self, _tag: Tag<Quality, I>) -> usize {
///         1 << I
///     }
/// }
///
/// const MAX: usize = Quality::Count as usize;
///
/// assert_eq!(ordinal_switch::dispatch::<MAX, _, _>(Quality::Best, Oversampling), Some(4));
/// assert_eq!(ordinal_switch::dispatch::<MAX, _, _>(Quality::Count, Oversampling), None);
/// ```
#[inline]
pub fn dispatch<const MAX: usize, E, F>(value: E, op: F) -> Option<F::Output>
where
    E: Ordinal,
    F: OrdinalFn<E>,
{
    dispatch_ordinal::<MAX, E, F>(value.ordinal(), op)
}

/// Calls `op` specialized for a raw integer `ordinal`, provided it is less than `MAX`.
///
/// This is the entry point for ordinals that come from outside the type system, such as a byte
/// in a file header. Any integer, including ones that do not belong to a variant of `E`, is
/// accepted; integers outside `[0, MAX)` are a silent no-match.
///
/// A `MAX` greater than `E::COUNT` is rejected when the call is compiled:
///
/// ```compile_fail
/// use ordinal_switch::{Ordinal, OrdinalFn, Tag};
///
/// #[derive(Clone, Copy, Ordinal)]
/// enum Channel {
///     Left,
///     Right,
///     Center,
/// }
///
/// struct Name;
///
/// impl OrdinalFn<Channel> for Name {
///     type Output = Channel;
///
///     fn call<const I: usize>(self, tag: Tag<Channel, I>) -> Channel {
///         tag.value()
///     }
/// }
///
/// // Channel has 3 variants, so a bound of 4 does not compile.
/// let _ = ordinal_switch::dispatch::<4, _, _>(Channel::Left, Name);
/// ```
#[inline]
pub fn dispatch_ordinal<const MAX: usize, E, F>(ordinal: usize, op: F) -> Option<F::Output>
where
    E: Ordinal,
    F: OrdinalFn<E>,
{
    const {
        assert!(
            MAX <= E::COUNT,
            "dispatch bound exceeds the number of enumeration variants"
        );
    }

    if ordinal >= MAX {
        return None;
    }

    E::switch(ordinal, op)
}

/// Calls an operation that returns nothing, reporting whether an arm matched.
///
/// Returns `true` if `value` was in `[0, MAX)` and `op` was called, `false` otherwise.
#[inline]
pub fn dispatch_unit<const MAX: usize, E, F>(value: E, op: F) -> bool
where
    E: Ordinal,
    F: OrdinalFn<E, Output = ()>,
{
    dispatch::<MAX, E, F>(value, op).is_some()
}

/// Calls an operation that itself returns an `Option`, without nesting the result.
///
/// Returns `None` both when no arm matched and when the matching arm returned `None`.
#[inline]
pub fn dispatch_flatten<const MAX: usize, E, F, V>(value: E, op: F) -> Option<V>
where
    E: Ordinal,
    F: OrdinalFn<E, Output = Option<V>>,
{
    dispatch::<MAX, E, F>(value, op).flatten()
}

/// Calls `op` specialized for the ordinal of `value`, with every variant of `E` enabled.
///
/// For a correct [`Ordinal`] implementation this always returns `Some`.
#[inline]
pub fn dispatch_all<E, F>(value: E, op: F) -> Option<F::Output>
where
    E: Ordinal,
    F: OrdinalFn<E>,
{
    E::switch(value.ordinal(), op)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::cell::{Cell, RefCell};

    use seq_macro::seq;

    use super::*;
    use crate::Tag;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, crate::Ordinal)]
    enum Codec {
        Pcm,
        Adpcm,
        Flac,
        Opus,
        // Marks the end of the range; not dispatchable.
        Count,
    }

    const CODEC_MAX: usize = Codec::Count as usize;

    /// Records which ordinals the operation was called with.
    struct Record<'a> {
        seen: &'a RefCell<Vec<usize>>,
    }

    impl<E> OrdinalFn<E> for Record<'_>
    where
        E: Ordinal,
    {
        type Output = usize;

        fn call<const I: usize>(self, _tag: Tag<E, I>) -> usize {
            self.seen.borrow_mut().push(I);
            I
        }
    }

    struct Touch<'a> {
        calls: &'a Cell<usize>,
    }

    impl OrdinalFn<Codec> for Touch<'_> {
        type Output = ();

        fn call<const I: usize>(self, _tag: Tag<Codec, I>) {
            self.calls.set(self.calls.get() + 1);
        }
    }

    struct LosslessOnly;

    impl OrdinalFn<Codec> for LosslessOnly {
        type Output = Option<&'static str>;

        fn call<const I: usize>(self, tag: Tag<Codec, I>) -> Option<&'static str> {
            match tag.value() {
                Codec::Pcm => Some("pcm"),
                Codec::Flac => Some("flac"),
                _ => None,
            }
        }
    }

    #[test]
    fn every_value_in_range_calls_once_with_its_ordinal() {
        for value in &Codec::VARIANTS[..CODEC_MAX] {
            let seen = RefCell::new(Vec::new());

            let result = dispatch::<CODEC_MAX, _, _>(*value, Record { seen: &seen });

            assert_eq!(result, Some(value.ordinal()));
            assert_eq!(*seen.borrow(), vec![value.ordinal()]);
        }
    }

    #[test]
    fn value_outside_range_never_calls() {
        let seen = RefCell::new(Vec::new());

        let result = dispatch::<CODEC_MAX, _, _>(Codec::Count, Record { seen: &seen });

        assert_eq!(result, None);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn narrower_bound_disables_upper_arms() {
        let seen = RefCell::new(Vec::new());

        assert_eq!(dispatch::<2, _, _>(Codec::Adpcm, Record { seen: &seen }), Some(1));
        assert_eq!(dispatch::<2, _, _>(Codec::Flac, Record { seen: &seen }), None);
        assert_eq!(dispatch::<0, _, _>(Codec::Pcm, Record { seen: &seen }), None);

        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn unit_operation_reports_match() {
        let calls = Cell::new(0);

        assert!(dispatch_unit::<CODEC_MAX, _, _>(Codec::Opus, Touch { calls: &calls }));
        assert_eq!(calls.get(), 1);

        assert!(!dispatch_unit::<CODEC_MAX, _, _>(Codec::Count, Touch { calls: &calls }));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn optional_operation_is_flattened() {
        assert_eq!(
            dispatch_flatten::<CODEC_MAX, _, _, _>(Codec::Flac, LosslessOnly),
            Some("flac")
        );
        assert_eq!(
            dispatch_flatten::<CODEC_MAX, _, _, _>(Codec::Opus, LosslessOnly),
            None
        );
        assert_eq!(
            dispatch_flatten::<CODEC_MAX, _, _, _>(Codec::Count, LosslessOnly),
            None
        );
    }

    #[test]
    fn raw_ordinals() {
        let seen = RefCell::new(Vec::new());

        assert_eq!(
            dispatch_ordinal::<CODEC_MAX, Codec, _>(3, Record { seen: &seen }),
            Some(3)
        );
        assert_eq!(
            dispatch_ordinal::<CODEC_MAX, Codec, _>(4, Record { seen: &seen }),
            None
        );
        assert_eq!(
            dispatch_ordinal::<CODEC_MAX, Codec, _>(usize::MAX, Record { seen: &seen }),
            None
        );

        assert_eq!(*seen.borrow(), vec![3]);
    }

    #[test]
    fn all_variants_enabled() {
        let seen = RefCell::new(Vec::new());

        assert_eq!(dispatch_all(Codec::Count, Record { seen: &seen }), Some(4));
        assert_eq!(dispatch_all(true, Record { seen: &seen }), Some(1));

        assert_eq!(*seen.borrow(), vec![4, 1]);
    }

    #[derive(Clone, Copy, Debug, crate::Ordinal)]
    enum Never {}

    #[test]
    fn empty_enum_has_no_arms() {
        let seen = RefCell::new(Vec::new());

        assert_eq!(Never::COUNT, 0);
        assert_eq!(
            dispatch_ordinal::<0, Never, _>(0, Record { seen: &seen }),
            None
        );
        assert_eq!(Never::switch(0, Record { seen: &seen }), None);
        assert!(seen.borrow().is_empty());
    }

    seq!(N in 0..64 {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, crate::Ordinal)]
        enum Wide {
            #(
                Variant~N,
            )*
        }
    });

    #[test]
    fn wide_enum_dispatches_every_variant() {
        let seen = RefCell::new(Vec::new());

        for value in Wide::VARIANTS {
            assert_eq!(
                dispatch::<64, _, _>(*value, Record { seen: &seen }),
                Some(value.ordinal())
            );
        }

        assert_eq!(*seen.borrow(), (0..64).collect::<Vec<_>>());
        assert_eq!(Wide::Variant63.ordinal(), 63);
    }
}
