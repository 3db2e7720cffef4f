//! The error type shared by index arithmetic and tree lookups.

use crate::array::Value;
use crate::index::Index;

/// Errors returned by the index helpers and by [`Tree`][crate::array::Tree] lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The child of the given index can't be represented as an [`Index`].
    #[error("index {0} has no representable child index")]
    InvalidArgument(Index),
    /// No occupied slot along the comparison path holds the value.
    #[error("value {0} not found in tree")]
    NotFound(Value),
}
