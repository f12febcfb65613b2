//! Maximum subarray sum: Kadane's algorithm, with brute-force and zero-floor
//! references for comparison.

#![deny(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod algorithms;
pub mod error;

pub use error::{Error, Result};

/// Data Structures & Algorithms Prelude
pub mod prelude {
    #[doc(no_inline)]
    pub use super::algorithms::max_subarray::*;
    #[doc(no_inline)]
    pub use super::error::Error;
}
