#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Turns a runtime enumeration value into a call that is specialized for that exact variant
//! at compile time.
//!
//! Code that is generic over a `const I: usize` parameter can size arrays, select lookup tables or
//! pick entire algorithms based on `I`, with every decision made by the compiler. This package
//! bridges the gap between such code and a value that is only known at runtime: it generates one
//! arm per variant ordinal and calls your operation with the ordinal of the matching arm as a
//! const generic argument. There is no boxing, no virtual call and no runtime type erasure - the
//! runtime cost is a single `match` over integers.
//!
//! This is part of the [Folo project](https://github.com/folo-rs/folo) that provides mechanisms for
//! high-performance hardware-aware programming in Rust.
//!
//! # Defining an ordinal enumeration
//!
//! Apply `#[derive(Ordinal)]` to a fieldless enum. Ordinals follow declaration order, starting
//! from zero. The enum must also be `Clone + Copy`.
//!
//! # Writing an operation
//!
//! Closures cannot be generic over const parameters, so an operation is a type implementing
//! [`OrdinalFn`]. Its `call()` is instantiated once per variant and receives a zero-sized
//! [`Tag`] carrying the ordinal (and the variant itself) as compile-time constants.
//!
//! ```
//! use ordinal_switch::{Ordinal, OrdinalFn, Tag};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Ordinal)]
//! enum Order {
//!     First,
//!     Second,
//!     Third,
//! }
//!
//! // Each filter order gets its own fully unrolled implementation.
//! fn smooth<const N: usize>(samples: &[f32]) -> f32 {
//!     samples.iter().take(N + 1).sum()
//! }
//!
//! struct Smooth<'a>(&'a [f32]);
//!
//! impl OrdinalFn<Order> for Smooth<'_> {
//!     type Output = f32;
//!
//!     fn call<const I: usize>(self, _tag: Tag<Order, I>) -> f32 {
//!         smooth::<I>(self.0)
//!     }
//! }
//!
//! let samples = [1.0, 2.0, 3.0, 4.0];
//!
//! assert_eq!(ordinal_switch::dispatch_all(Order::Second, Smooth(&samples)), Some(3.0));
//!
//! // Only the first two orders are enabled here, so the third is a silent no-match.
//! assert_eq!(ordinal_switch::dispatch::<2, _, _>(Order::Third, Smooth(&samples)), None);
//! ```
//!
//! # Result shapes
//!
//! * [`dispatch()`] returns `Some(output)` if an arm matched and `None` otherwise.
//! * [`dispatch_unit()`] is for operations that return nothing and reports whether an arm matched.
//! * [`dispatch_flatten()`] is for operations that already return an `Option`, avoiding a nested
//!   `Option<Option<V>>`.
//! * [`dispatch_ordinal()`] accepts a raw integer ordinal, e.g. one read from external data.
//!
//! A value outside the enabled range is never an error, just a "no match" outcome.
//!
//! # Compile-time argument packs
//!
//! [`invoke_with_sequence()`] expands a compile-time sequence into a single call that receives
//! every element as a separate [`Index`] argument. The sequence is either [`Seq<N>`][Seq] for
//! `0..N` or a tuple of `Index` markers for any other list of constants.
//!
//! ```
//! use ordinal_switch::{Index, Seq, invoke_with_sequence};
//!
//! let total = invoke_with_sequence(Seq::<3>::new(), |a: Index<0>, b: Index<1>, c: Index<2>| {
//!     a.get() + b.get() + c.get()
//! });
//!
//! assert_eq!(total, 3);
//! ```

mod dispatch;
mod error;
mod ordinal;
mod sequence;

pub use dispatch::*;
pub use error::*;
pub use ordinal::*;
pub use sequence::*;

/// Implements [`Ordinal`][trait@Ordinal] for a fieldless enum.
///
/// Ordinals follow declaration order, starting from zero. The generated `switch()` is an
/// exhaustive `match` with one arm per variant, each arm calling the operation with its own
/// [`Tag`].
///
/// # Constraints
///
/// * Only enums are supported.
/// * Variants must not carry fields.
/// * Variants must not declare explicit discriminants.
/// * The enum must not be generic.
/// * The enum must implement `Copy` (a requirement of the trait itself).
///
/// # Example
///
/// ```
/// use ordinal_switch::Ordinal;
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq, Ordinal)]
/// enum Direction {
///     North,
///     East,
///     South,
///     West,
/// }
///
/// assert_eq!(Direction::COUNT, 4);
/// assert_eq!(Direction::South.ordinal(), 2);
/// assert_eq!(Direction::from_ordinal(3), Some(Direction::West));
/// ```
pub use ordinal_switch_macros::Ordinal;

// This is so procedural macros can produce code which refers to
// ::ordinal_switch::* which will work also in the current crate.
#[doc(hidden)]
extern crate self as ordinal_switch;
