//! Error types for the Bloom filter crate

use thiserror::Error;

/// Errors that can occur when building or using a filter
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    /// A constructor argument is outside its valid range. Raised before any
    /// filter state is allocated.
    #[error("Invalid {name}: {value} (must be {expected})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },

    /// Reading the item's digest through the MurmurHash3 reader failed.
    ///
    /// Every `T: Hash` item can be indexed; this only covers the reader's
    /// `io::Error` path and does not occur for in-memory digests. The filter
    /// is left untouched.
    #[error("Item cannot be hashed: {0}")]
    Unhashable(String),
}

impl FilterError {
    pub(crate) fn invalid(name: &'static str, value: f64, expected: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            expected,
        }
    }
}
