//! Algorithms.

pub mod max_subarray;

/// Algorithms Prelude
pub mod prelude {
    #[doc(no_inline)]
    pub use super::max_subarray::*;
}
