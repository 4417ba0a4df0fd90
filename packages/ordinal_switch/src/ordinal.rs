use std::any::type_name;
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use crate::{Error, Result};

/// An enumeration whose variants occupy the contiguous ordinal range `[0, COUNT)`.
///
/// Implement this via `#[derive(Ordinal)]`, which generates an exhaustive `switch()` with one
/// arm per variant. Manual implementations are possible (see the implementation for `bool`) but
/// must keep `COUNT`, `VARIANTS`, `ordinal()` and `switch()` consistent with each other:
///
/// * `VARIANTS.len() == COUNT`;
/// * `VARIANTS[i].ordinal() == i` for every `i` in `[0, COUNT)`;
/// * `switch(i, op)` calls `op` exactly once with `Tag<Self, i>` for every `i` in `[0, COUNT)`
///   and returns `None` without calling `op` for any other `i`.
pub trait Ordinal: Copy + 'static {
    /// The number of variants, which is also the exclusive upper bound of the ordinal range.
    const COUNT: usize;

    /// Every variant, indexed by its ordinal.
    const VARIANTS: &'static [Self];

    /// The position of this variant within the ordinal range.
    fn ordinal(self) -> usize;

    /// Calls `op` specialized for `ordinal`, if `ordinal` belongs to a variant.
    ///
    /// This is the generated arm table. User code is expected to go through [`dispatch()`][1]
    /// and its siblings instead, which also apply an upper bound to the range.
    ///
    /// [1]: crate::dispatch
    fn switch<F>(ordinal: usize, op: F) -> Option<F::Output>
    where
        F: OrdinalFn<Self>;

    /// Returns the variant with the given ordinal, if there is one.
    #[must_use]
    fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::VARIANTS.get(ordinal).copied()
    }

    /// Returns the variant with the given ordinal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `ordinal` is not less than `COUNT`.
    fn try_from_ordinal(ordinal: usize) -> Result<Self> {
        Self::from_ordinal(ordinal).ok_or(Error::OutOfRange {
            ordinal,
            count: Self::COUNT,
        })
    }
}

/// An operation that can be specialized for each ordinal of `E` at compile time.
///
/// The dispatcher monomorphizes `call()` once per variant. Inside `call()`, `I` is a const
/// generic parameter, usable anywhere a constant is: array lengths, const generic arguments of
/// other items, associated constants and so on.
///
/// # Example
///
/// ```
/// use ordinal_switch::{OrdinalFn, Tag};
///
/// struct ZeroedBuffer;
///
/// impl OrdinalFn<bool> for ZeroedBuffer {
///     type Output = Vec<u8>;
///
///     fn call<const I: usize>(self, _tag: Tag<bool, I>) -> Vec<u8> {
///         [0_u8; I].to_vec()
///     }
/// }
///
/// let buffer = ordinal_switch::dispatch_all(true, ZeroedBuffer).unwrap();
/// assert_eq!(buffer.len(), 1);
/// ```
pub trait OrdinalFn<E>
where
    E: Ordinal,
{
    /// The value produced by the operation.
    type Output;

    /// Executes the operation for the variant with ordinal `I`.
    fn call<const I: usize>(self, tag: Tag<E, I>) -> Self::Output;
}

/// A zero-sized compile-time tag identifying the variant of `E` with ordinal `I`.
///
/// Passed to [`OrdinalFn::call()`] so that the operation can name both the ordinal and the
/// variant as constants.
pub struct Tag<E, const I: usize> {
    _enum: PhantomData<fn() -> E>,
}

impl<E, const I: usize> Tag<E, I>
where
    E: Ordinal,
{
    /// The ordinal this tag stands for.
    pub const ORDINAL: usize = I;

    /// The variant this tag stands for.
    ///
    /// Referencing this for an ordinal outside `[0, E::COUNT)` is a compile-time error.
    #[expect(
        clippy::indexing_slicing,
        reason = "evaluated at compile time, out of range is a build error"
    )]
    pub const VALUE: E = E::VARIANTS[I];

    /// Creates the tag. Tags carry no data, so any two tags of the same type are identical.
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self { _enum: PhantomData }
    }

    /// The ordinal this tag stands for.
    #[must_use]
    #[inline]
    pub const fn ordinal(self) -> usize {
        I
    }

    /// The variant this tag stands for.
    #[must_use]
    #[inline]
    pub const fn value(self) -> E {
        Self::VALUE
    }
}

impl<E, const I: usize> Clone for Tag<E, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E, const I: usize> Copy for Tag<E, I> {}

impl<E, const I: usize> Default for Tag<E, I>
where
    E: Ordinal,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E, const I: usize> Debug for Tag<E, I> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tag")
            .field("enum", &type_name::<E>())
            .field("ordinal", &I)
            .finish()
    }
}

// `false` is 0 and `true` is 1, matching `usize::from(bool)`.
impl Ordinal for bool {
    const COUNT: usize = 2;
    const VARIANTS: &'static [Self] = &[false, true];

    #[inline]
    fn ordinal(self) -> usize {
        usize::from(self)
    }

    #[inline]
    fn switch<F>(ordinal: usize, op: F) -> Option<F::Output>
    where
        F: OrdinalFn<Self>,
    {
        match ordinal {
            0 => Some(op.call(Tag::<Self, 0>::new())),
            1 => Some(op.call(Tag::<Self, 1>::new())),
            _ => None,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::cell::Cell;

    use static_assertions::{assert_eq_size, assert_impl_all};

    use super::*;

    assert_eq_size!(Tag<bool, 0>, ());
    assert_impl_all!(Tag<bool, 1>: Copy, Send, Sync, Debug);

    #[derive(Clone, Copy, Debug, PartialEq, Eq, crate::Ordinal)]
    enum Shape {
        Point,
        Line,
        Triangle,
    }

    struct VertexCount<'a> {
        calls: &'a Cell<usize>,
    }

    impl OrdinalFn<Shape> for VertexCount<'_> {
        type Output = (usize, Shape);

        fn call<const I: usize>(self, tag: Tag<Shape, I>) -> Self::Output {
            self.calls.set(self.calls.get() + 1);

            // An array length only accepts a constant, proving `I` is one.
            (size_of::<[u8; I]>() + 1, tag.value())
        }
    }

    #[test]
    fn derived_constants() {
        assert_eq!(Shape::COUNT, 3);
        assert_eq!(Shape::VARIANTS, &[Shape::Point, Shape::Line, Shape::Triangle]);
    }

    #[test]
    fn ordinals_follow_declaration_order() {
        for (index, variant) in Shape::VARIANTS.iter().enumerate() {
            assert_eq!(variant.ordinal(), index);
            assert_eq!(Shape::from_ordinal(index), Some(*variant));
        }
    }

    #[test]
    fn from_ordinal_out_of_range() {
        assert_eq!(Shape::from_ordinal(3), None);
        assert_eq!(Shape::from_ordinal(usize::MAX), None);
    }

    #[test]
    fn try_from_ordinal_reports_range() {
        assert_eq!(Shape::try_from_ordinal(1), Ok(Shape::Line));

        let error = Shape::try_from_ordinal(7).unwrap_err();
        assert_eq!(
            error,
            Error::OutOfRange {
                ordinal: 7,
                count: 3
            }
        );
    }

    #[test]
    fn switch_calls_matching_arm_once() {
        let calls = Cell::new(0);

        let result = Shape::switch(2, VertexCount { calls: &calls });

        assert_eq!(result, Some((3, Shape::Triangle)));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn switch_without_match_never_calls() {
        let calls = Cell::new(0);

        assert_eq!(Shape::switch(3, VertexCount { calls: &calls }), None);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn tag_constants() {
        assert_eq!(Tag::<Shape, 1>::ORDINAL, 1);
        assert_eq!(Tag::<Shape, 1>::VALUE, Shape::Line);
        assert_eq!(Tag::<Shape, 2>::new().ordinal(), 2);
        assert_eq!(Tag::<Shape, 0>::default().value(), Shape::Point);
    }

    #[test]
    fn tag_debug_names_enum_and_ordinal() {
        let text = format!("{:?}", Tag::<Shape, 2>::new());

        assert!(text.contains("Shape"));
        assert!(text.contains("ordinal: 2"));
    }

    #[test]
    fn bool_is_ordinal() {
        assert_eq!(bool::COUNT, 2);
        assert_eq!(false.ordinal(), 0);
        assert_eq!(true.ordinal(), 1);
        assert_eq!(bool::from_ordinal(1), Some(true));
        assert_eq!(bool::from_ordinal(2), None);
    }

    #[test]
    fn bool_switch() {
        struct Echo;

        impl OrdinalFn<bool> for Echo {
            type Output = bool;

            fn call<const I: usize>(self, tag: Tag<bool, I>) -> bool {
                tag.value()
            }
        }

        assert_eq!(bool::switch(0, Echo), Some(false));
        assert_eq!(bool::switch(1, Echo), Some(true));
        assert_eq!(bool::switch(2, Echo), None);
    }
}
