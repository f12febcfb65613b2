//! Error type shared by every algorithm in the crate.

use thiserror::Error;

/// Errors returned by the algorithms in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The caller supplied an argument the algorithm cannot operate on, such
    /// as an empty sequence where at least one element is required.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// A specialized [`Result`](core::result::Result) type for this crate.
pub type Result<T> = core::result::Result<T, Error>;
