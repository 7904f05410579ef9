use thiserror::Error;

/// Concrete errors that occur when building a [`CodePointClass`](crate::CodePointClass)
///
/// Collecting quoted-strings and splitting header field values never fail, so
/// this type only describes invalid user-defined code point classes.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// the low end of a range was greater than its high end
    #[error("inverted code point range {low:?}..={high:?}")]
    InvertedRange {
        /// the low end of the attempted range
        low: char,
        /// the high end of the attempted range
        high: char,
    },

    /// ranges must be listed in ascending order and must not overlap
    #[error("code point range starting at {next:?} does not follow range ending at {previous:?}")]
    UnorderedRanges {
        /// the high end of the preceding range
        previous: char,
        /// the low end of the offending range
        next: char,
    },

    /// a class needs at least one range
    #[error("code point class has no ranges")]
    EmptyClass,
}

/// this crate's result type
pub type Result<T> = std::result::Result<T, Error>;
