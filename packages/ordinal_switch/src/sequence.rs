/// A zero-sized compile-time constant of value `I`.
///
/// Elements of an expanded [`Seq`] are passed to the operation as `Index` arguments, so the
/// operation can use `I` wherever a constant is required.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[expect(
    clippy::exhaustive_structs,
    reason = "zero-sized constant marker, constructed by value in user code"
)]
pub struct Index<const I: usize>;

impl<const I: usize> Index<I> {
    /// The constant this marker stands for.
    pub const VALUE: usize = I;

    /// The constant this marker stands for.
    #[must_use]
    #[inline]
    pub const fn get(self) -> usize {
        I
    }
}

/// The compile-time sequence `0..N`.
///
/// Pass an instance to [`invoke_with_sequence()`] to expand it into `N` separate [`Index`]
/// arguments of a single call. Sequences of up to 12 elements are supported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Seq<const N: usize> {
    _private: (),
}

impl<const N: usize> Seq<N> {
    /// The number of elements in the sequence.
    pub const LEN: usize = N;

    /// Creates the sequence marker.
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

/// Expands a compile-time sequence into the arguments of one call to `F`.
///
/// Implemented for:
///
/// * [`Seq<N>`] for every supported `N`, with `F` taking `Index<0>, Index<1>, ..., Index<N - 1>`.
/// * Tuples of up to 12 [`Index`] markers, with `F` taking the same markers in the same order.
///   This expresses arbitrary sequences such as `(Index<3>, Index<1>, Index<4>)`.
pub trait InvokeWithSequence<F> {
    /// The value produced by the call.
    type Output;

    /// Calls `op` once, with every element of the sequence as a separate argument.
    fn invoke(self, op: F) -> Self::Output;
}

macro_rules! impl_invoke_with_sequence {
    ($len:literal => $($index:literal),*) => {
        impl<F, R> InvokeWithSequence<F> for Seq<$len>
        where
            F: FnOnce($(Index<$index>),*) -> R,
        {
            type Output = R;

            #[inline]
            fn invoke(self, op: F) -> R {
                op($(Index::<$index>),*)
            }
        }
    };
}

impl_invoke_with_sequence!(0 =>);
impl_invoke_with_sequence!(1 => 0);
impl_invoke_with_sequence!(2 => 0, 1);
impl_invoke_with_sequence!(3 => 0, 1, 2);
impl_invoke_with_sequence!(4 => 0, 1, 2, 3);
impl_invoke_with_sequence!(5 => 0, 1, 2, 3, 4);
impl_invoke_with_sequence!(6 => 0, 1, 2, 3, 4, 5);
impl_invoke_with_sequence!(7 => 0, 1, 2, 3, 4, 5, 6);
impl_invoke_with_sequence!(8 => 0, 1, 2, 3, 4, 5, 6, 7);
impl_invoke_with_sequence!(9 => 0, 1, 2, 3, 4, 5, 6, 7, 8);
impl_invoke_with_sequence!(10 => 0, 1, 2, 3, 4, 5, 6, 7, 8, 9);
impl_invoke_with_sequence!(11 => 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10);
impl_invoke_with_sequence!(12 => 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11);

macro_rules! impl_invoke_with_index_tuple {
    ($($value:ident),*) => {
        impl<F, R, $(const $value: usize),*> InvokeWithSequence<F> for ($(Index<$value>,)*)
        where
            F: FnOnce($(Index<$value>),*) -> R,
        {
            type Output = R;

            #[inline]
            fn invoke(self, op: F) -> R {
                op($(Index::<$value>),*)
            }
        }
    };
}

impl_invoke_with_index_tuple!();
impl_invoke_with_index_tuple!(A);
impl_invoke_with_index_tuple!(A, B);
impl_invoke_with_index_tuple!(A, B, C);
impl_invoke_with_index_tuple!(A, B, C, D);
impl_invoke_with_index_tuple!(A, B, C, D, E);
impl_invoke_with_index_tuple!(A, B, C, D, E, G);
impl_invoke_with_index_tuple!(A, B, C, D, E, G, H);
impl_invoke_with_index_tuple!(A, B, C, D, E, G, H, J);
impl_invoke_with_index_tuple!(A, B, C, D, E, G, H, J, K);
impl_invoke_with_index_tuple!(A, B, C, D, E, G, H, J, K, L);
impl_invoke_with_index_tuple!(A, B, C, D, E, G, H, J, K, L, M);
impl_invoke_with_index_tuple!(A, B, C, D, E, G, H, J, K, L, M, N);

/// Calls `op` once with every element of `sequence` as a separate compile-time argument.
///
/// # Example
///
/// ```
/// use ordinal_switch::{Index, Seq, invoke_with_sequence};
///
/// fn lanes<const A: usize, const B: usize>(_: Index<A>, _: Index<B>) -> [usize; 2] {
///     [size_of::<[u32; A]>(), size_of::<[u32; B]>()]
/// }
///
/// let result = invoke_with_sequence(Seq::<2>::new(), |a: Index<0>, b: Index<1>| lanes(a, b));
/// assert_eq!(result, [0, 4]);
///
/// // Any list of constants works, in any order.
/// let result = invoke_with_sequence((Index::<3>, Index::<1>), |a: Index<3>, b: Index<1>| lanes(a, b));
/// assert_eq!(result, [12, 4]);
/// ```
#[inline]
pub fn invoke_with_sequence<S, F>(sequence: S, op: F) -> S::Output
where
    S: InvokeWithSequence<F>,
{
    sequence.invoke(op)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::cell::Cell;

    use static_assertions::assert_eq_size;

    use super::*;

    assert_eq_size!(Index<7>, ());
    assert_eq_size!(Seq<12>, ());

    #[test]
    fn index_constants() {
        assert_eq!(Index::<5>::VALUE, 5);
        assert_eq!(Index::<9>.get(), 9);
        assert_eq!(Seq::<4>::LEN, 4);
    }

    #[test]
    fn empty_sequence_calls_without_arguments() {
        let calls = Cell::new(0);

        invoke_with_sequence(Seq::<0>::new(), || calls.set(calls.get() + 1));

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn elements_arrive_in_order() {
        let values = invoke_with_sequence(
            Seq::<4>::new(),
            |a: Index<0>, b: Index<1>, c: Index<2>, d: Index<3>| [a.get(), b.get(), c.get(), d.get()],
        );

        assert_eq!(values, [0, 1, 2, 3]);
    }

    #[test]
    fn longest_sequence() {
        let sum = invoke_with_sequence(
            Seq::<12>::new(),
            |a: Index<0>,
             b: Index<1>,
             c: Index<2>,
             d: Index<3>,
             e: Index<4>,
             f: Index<5>,
             g: Index<6>,
             h: Index<7>,
             i: Index<8>,
             j: Index<9>,
             k: Index<10>,
             l: Index<11>| {
                [a.get(), b.get(), c.get(), d.get(), e.get(), f.get()]
                    .into_iter()
                    .chain([g.get(), h.get(), i.get(), j.get(), k.get(), l.get()])
                    .sum::<usize>()
            },
        );

        assert_eq!(sum, 66);
    }

    #[test]
    fn arguments_are_compile_time_constants() {
        fn widths<const A: usize, const B: usize, const C: usize>(
            _: Index<A>,
            _: Index<B>,
            _: Index<C>,
        ) -> [usize; 3] {
            [size_of::<[u16; A]>(), size_of::<[u16; B]>(), size_of::<[u16; C]>()]
        }

        let result = invoke_with_sequence(
            Seq::<3>::new(),
            |a: Index<0>, b: Index<1>, c: Index<2>| widths(a, b, c),
        );

        assert_eq!(result, [0, 2, 4]);
    }

    #[test]
    fn tuple_sequence_keeps_order_and_gaps() {
        let values = invoke_with_sequence(
            (Index::<3>, Index::<1>, Index::<4>),
            |a: Index<3>, b: Index<1>, c: Index<4>| [a.get(), b.get(), c.get()],
        );

        assert_eq!(values, [3, 1, 4]);
    }

    #[test]
    fn tuple_sequence_repeats_and_large_values() {
        fn total<const A: usize, const B: usize, const C: usize>(
            _: Index<A>,
            _: Index<B>,
            _: Index<C>,
        ) -> usize {
            size_of::<[u8; A]>() + size_of::<[u8; B]>() + size_of::<[u8; C]>()
        }

        let result = invoke_with_sequence(
            (Index::<100>, Index::<7>, Index::<100>),
            |a: Index<100>, b: Index<7>, c: Index<100>| total(a, b, c),
        );

        assert_eq!(result, 207);
    }

    #[test]
    fn empty_and_single_tuple_sequences() {
        assert_eq!(invoke_with_sequence((), || 5), 5);
        assert_eq!(invoke_with_sequence((Index::<9>,), |a: Index<9>| a.get()), 9);
    }
}
