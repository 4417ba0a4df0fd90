#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Small numeric helpers that keep showing up in signal processing and geometry code.
//!
//! * [`Range`] tracks the smallest and largest value seen so far.
//! * [`clamp()`] and [`clamp_abs()`] limit a value to a range.
//! * [`partial_min()`] and [`partial_max()`] work with floats, which are only `PartialOrd`, and
//!   the [`min!`], [`max!`] and [`range!`] macros extend them to any number of arguments.
//! * [`approx_eq()`] and [`round_toward()`] cover common floating point chores.
//!
//! This is part of the [Folo project](https://github.com/folo-rs/folo) that provides mechanisms for
//! high-performance hardware-aware programming in Rust.
//!
//! # Example
//!
//! ```
//! use leaf_math::{Range, clamp, max, min, range};
//!
//! let peaks = range!(0.25_f32, -0.75, 0.5);
//! assert_eq!(peaks.min(), -0.75);
//! assert_eq!(peaks.max(), 0.5);
//!
//! assert_eq!(min!(3, 1, 2), 1);
//! assert_eq!(max!(3, 1, 2), 3);
//!
//! assert_eq!(clamp(12, Range::new(0, 10)), 10);
//! ```

mod clamp;
mod compare;
mod float;
mod macros;
mod range;

pub use clamp::*;
pub use compare::*;
pub use float::*;
pub use range::*;
