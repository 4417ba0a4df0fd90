#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Shares one lazily constructed instance of a type among all callers, for exactly as long as
//! at least one of them holds on to it.
//!
//! A classic singleton lives until the end of the process. The singletons in this package are
//! weak instead: the package itself only keeps a non-owning reference to the instance, so when
//! the last caller drops its `Arc`, the instance is dropped too. The next request constructs a
//! fresh one. This suits shared resources that are expensive to set up but should not outlive
//! their users, such as caches, connection pools or device contexts.
//!
//! This is part of the [Folo project](https://github.com/folo-rs/folo) that provides mechanisms for
//! high-performance hardware-aware programming in Rust.
//!
//! # Slots
//!
//! Every instance lives in a slot. The slot is identified by the factory that constructs the
//! instance: each closure or function item has its own type, so each call site of
//! [`get_or_create()`] with a closure gets its own slot, while calls that pass the same function
//! item share one.
//!
//! ```
//! use std::sync::Arc;
//!
//! #[derive(Debug, Default)]
//! struct GlyphCache {
//!     entries: Vec<char>,
//! }
//!
//! fn glyph_cache() -> Arc<GlyphCache> {
//!     weak_singleton::get_or_create(GlyphCache::default)
//! }
//!
//! let a = glyph_cache();
//! let b = glyph_cache();
//! assert!(Arc::ptr_eq(&a, &b));
//!
//! drop(a);
//! drop(b);
//!
//! // All holders are gone, so this constructs a new cache.
//! let c = glyph_cache();
//! assert!(c.entries.is_empty());
//! ```
//!
//! Factories that are coerced to function pointers (`fn() -> T`) lose their identity, so all
//! factories of the same pointer type share a single slot. Pass closures or function items
//! directly to keep them apart.
//!
//! # Flavors
//!
//! * [`get_or_create()`] constructs with a plain factory.
//! * [`get_or_create_with()`] passes arguments to the factory. The arguments only matter when a
//!   new instance is constructed; a live instance is returned as-is.
//! * [`try_get_or_create()`] accepts a fallible factory. A failure is returned to the caller and
//!   leaves the slot empty.
//! * [`get_or_create_local()`] is the thread-local flavor, returning `Rc` for types that cannot be
//!   shared across threads.
//! * [`singleton!`] declares a named singleton as a constant.
//!
//! # Thread safety
//!
//! Each slot has its own lock, held while checking for a live instance and constructing a new
//! one, so concurrent callers of the same slot never construct two instances. The lock is not
//! shared between slots, so a factory may itself request instances from other slots.
//!
//! A factory must not request an instance from its own slot, directly or through other factories,
//! as that would deadlock. If the factory of `A` requests `B`, the factory of `B` must not request
//! `A`, nor any slot whose factory in turn requests `A`.

#[doc(hidden)]
pub mod __private;

mod constants;
mod factory;
mod local;
mod slot;
mod static_singleton;

pub(crate) use constants::*;
pub use factory::*;
pub use local::*;
pub(crate) use slot::*;
pub use static_singleton::*;
