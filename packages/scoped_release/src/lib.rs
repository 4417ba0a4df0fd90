#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Binds a resource handle to a release action that runs exactly once, when the scope that owns
//! the binding ends.
//!
//! Native libraries hand out handles (raw pointers, descriptors, opaque integers) together with a
//! function that must be called to give them back. [`ScopedRelease`] pairs the two so the release
//! happens no matter how control leaves the scope: normal completion, early `return`, error
//! propagation via `?` or a panic unwinding through the scope.
//!
//! This is part of the [Folo project](https://github.com/folo-rs/folo) that provides mechanisms for
//! high-performance hardware-aware programming in Rust.
//!
//! # Example
//!
//! ```
//! use scoped_release::{call_at_end_of_scope, releaser_for};
//!
//! # mod ffi {
//! #     pub fn create_context() -> *mut u32 { Box::into_raw(Box::new(7)) }
//! #     pub fn destroy_context(p: *mut u32) { drop(unsafe { Box::from_raw(p) }); }
//! # }
//! fn configure() -> Result<u32, String> {
//!     let context = call_at_end_of_scope(ffi::create_context(), releaser_for(ffi::destroy_context));
//!
//!     if context.is_null() {
//!         return Err("context creation failed".to_string());
//!     }
//!
//!     // SAFETY: The pointer is valid until the guard releases it at the end of this function.
//!     Ok(unsafe { **context })
//!
//!     // `destroy_context` is called here, after the return value has been computed.
//! }
//!
//! assert_eq!(configure(), Ok(7));
//! ```
//!
//! # Ordering
//!
//! Guards are ordinary locals, so several guards in one scope are released in reverse order of
//! construction (the last one created is released first).
//!
//! # Failing release actions
//!
//! A release action that panics propagates the panic from the point where the guard is dropped.
//! If the guard is being dropped because the scope is already unwinding from another panic,
//! Rust aborts the process. Release actions that can fail should therefore report failure by other
//! means (e.g. logging) instead of panicking.

mod guard;
mod releaser;

pub use guard::*;
pub use releaser::*;
