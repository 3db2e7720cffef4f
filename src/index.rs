//! Index arithmetic for the implicit layout. Positions encode the topology: the
//! children of the slot at `i` live at `2i + 1` and `2i + 2`. These functions
//! compute positions only, they say nothing about whether a slot is occupied.
//!
//! # Examples
//!
//! ```
//! use implicit_bst::index::{left, parent, right, ROOT};
//!
//! assert_eq!(left(ROOT), Ok(1));
//! assert_eq!(right(ROOT), Ok(2));
//! assert_eq!(parent(4), Some(1));
//! assert_eq!(parent(ROOT), None);
//! ```

use crate::error::Error;

/// Zero-based position of a slot.
pub type Index = usize;

/// The index of the root slot.
pub const ROOT: Index = 0;

/// Returns the index of the left child of `index`, or [`Error::InvalidArgument`] if that index
/// would overflow.
///
/// ```
/// use implicit_bst::{error::Error, index::left};
///
/// assert_eq!(left(3), Ok(7));
/// assert_eq!(left(10), Ok(21));
/// assert_eq!(left(usize::MAX), Err(Error::InvalidArgument(usize::MAX)));
/// ```
pub fn left(index: Index) -> Result<Index, Error> {
    index
        .checked_mul(2)
        .and_then(|i| i.checked_add(1))
        .ok_or(Error::InvalidArgument(index))
}

/// Returns the index of the right child of `index`, or [`Error::InvalidArgument`] if that index
/// would overflow.
///
/// ```
/// use implicit_bst::{error::Error, index::right};
///
/// assert_eq!(right(3), Ok(8));
/// assert_eq!(right(10), Ok(22));
/// assert_eq!(right(usize::MAX / 2), Err(Error::InvalidArgument(usize::MAX / 2)));
/// ```
pub fn right(index: Index) -> Result<Index, Error> {
    index
        .checked_mul(2)
        .and_then(|i| i.checked_add(2))
        .ok_or(Error::InvalidArgument(index))
}

/// Returns the index of the parent of `index`. The root has no parent.
pub fn parent(index: Index) -> Option<Index> {
    index.checked_sub(1).map(|i| i / 2)
}

// The unchecked versions are only called on materialized slots. A `Vec` never holds more than
// `isize::MAX` bytes so `2i + 2` can't overflow there.

pub(crate) const fn left_of(index: Index) -> Index {
    2 * index + 1
}

pub(crate) const fn right_of(index: Index) -> Index {
    2 * index + 2
}
