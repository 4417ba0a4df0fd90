//! UI tests for compile-time error checking.
//!
//! This package uses the `trybuild` test harness to verify that misuse of the published packages
//! is rejected by the compiler with a clear error, e.g. deriving `Ordinal` for a type that cannot
//! have ordinals.
//!
//! # Important limitations
//!
//! This package contains only a single test function to prevent parallel test execution.
//! `trybuild` does not support parallel test execution safely, so all UI tests are consolidated
//! into a single test function that runs sequentially.
//!
//! `trybuild` only runs `cargo check` on compile-fail cases, which does not evaluate constants
//! inside generic functions. Guarantees enforced during monomorphization (such as the dispatch
//! bound of `ordinal_switch`) are covered by `compile_fail` doc tests in their own package.
//!
//! When adding new UI tests:
//! - Add test files to the appropriate subdirectory under `tests/ui/`
//! - Use the folder structure: `tests/ui/{package}/`
//! - Commit the expected compiler output next to each case as a `.stderr` file
//! - Do NOT add additional `#[test]` functions to this package
