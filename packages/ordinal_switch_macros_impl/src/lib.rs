#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![allow(
    missing_docs,
    reason = "Private API, public API is documented in `ordinal_switch` package"
)]

pub mod derive_ordinal;
mod syn_helpers;
