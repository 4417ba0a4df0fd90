use thiserror::Error;

/// Errors that can occur when converting raw integers into ordinal enumeration values.
///
/// Dispatching never produces an error: a value outside the enabled range is a regular
/// "no match" outcome. Errors only arise when a caller insists on a variant existing.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The ordinal does not belong to any variant of the enumeration.
    #[error("ordinal {ordinal} is outside the valid range [0, {count})")]
    OutOfRange {
        /// The ordinal that was requested.
        ordinal: usize,

        /// The number of variants in the enumeration.
        count: usize,
    },
}

/// A specialized `Result` type for ordinal conversions, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
