//! An array-backed BST. There are no links between nodes: a node's position in a flat `Vec` of
//! slots determines where its children live (see [`index`][crate::index]). Values less than a
//! node go left, all others (including equal values) go right.
//!
//! # Examples
//!
//! ```
//! use implicit_bst::array::Tree;
//! use implicit_bst::error::Error;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(6), Err(Error::NotFound(6)));
//!
//! tree.insert(6);
//! tree.insert(8);
//! tree.insert(7);
//!
//! // Positions that were skipped over are materialized as empty slots.
//! assert_eq!(tree.slots(), &[Some(6), None, Some(8), None, None, Some(7)]);
//! assert_eq!(tree.search(7), Ok(5));
//!
//! // Deleting clears the slot but never shrinks the backing storage.
//! tree.delete(7).unwrap();
//! assert_eq!(tree.slots(), &[Some(6), None, Some(8), None, None, None]);
//! assert_eq!(tree.delete(7), Err(Error::NotFound(7)));
//! ```
//!
//! There is no rebalancing. Inserting ascending values builds a right-leaning chain whose last
//! slot sits at index `2^n - 2`, so the backing storage grows exponentially with depth.

use std::cmp::Ordering;
use std::iter::FromIterator;

use tracing::{debug, trace};

use crate::error::Error;
use crate::index::{left_of, right, right_of, Index, ROOT};

/// The scalar stored in a [`Tree`].
pub type Value = i64;

/// A Binary Search Tree stored in a flat sequence of slots. A slot is either empty (`None`) or
/// holds a value. Reading past the end of the sequence is the same as reading an empty slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    slots: Vec<Option<Value>>,
    /// Number of occupied slots.
    len: usize,
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            len: 0,
        }
    }

    /// Generates a new, empty `Tree` with storage reserved for `capacity` slots. No slots are
    /// materialized.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            len: 0,
        }
    }

    /// Returns the value at `index`. Empty and out of bounds slots both give `None`.
    pub fn get(&self, index: Index) -> Option<Value> {
        self.slots.get(index).copied().flatten()
    }

    /// The backing sequence of slots.
    pub fn slots(&self) -> &[Option<Value>] {
        &self.slots
    }

    /// How many values are stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no values are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `value` into the first empty slot along its comparison path. Duplicates are
    /// allowed and are placed to the right of equal values.
    ///
    /// # Examples
    ///
    /// ```
    /// use implicit_bst::array::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(6);
    /// tree.insert(4);
    /// tree.insert(8);
    /// tree.insert(8);
    ///
    /// assert_eq!(
    ///     tree.slots(),
    ///     &[Some(6), Some(4), Some(8), None, None, None, Some(8)]
    /// );
    /// ```
    pub fn insert(&mut self, value: Value) {
        let mut index = ROOT;
        while let Some(parent) = self.get(index) {
            index = if value < parent {
                left_of(index)
            } else {
                right_of(index)
            };
        }

        if index >= self.slots.len() {
            self.slots.resize(index + 1, None);
        }
        self.slots[index] = Some(value);
        self.len += 1;
        trace!(value, index, "inserted");
    }

    /// Finds the index of the slot holding `value`, returning [`Error::NotFound`] if the
    /// comparison path ends at an empty slot first.
    ///
    /// # Examples
    ///
    /// ```
    /// use implicit_bst::array::Tree;
    /// use implicit_bst::error::Error;
    ///
    /// let tree: Tree = vec![6, 2, 8, 1, 3, 7, 4].into_iter().collect();
    ///
    /// assert_eq!(tree.search(4), Ok(10));
    /// assert_eq!(tree.search(7), Ok(5));
    /// assert_eq!(tree.search(5), Err(Error::NotFound(5)));
    /// ```
    pub fn search(&self, value: Value) -> Result<Index, Error> {
        let mut index = ROOT;
        while let Some(parent) = self.get(index) {
            index = match value.cmp(&parent) {
                Ordering::Less => left_of(index),
                Ordering::Equal => return Ok(index),
                Ordering::Greater => right_of(index),
            };
        }

        trace!(value, index, "search missed");
        Err(Error::NotFound(value))
    }

    /// Whether `value` can be found in the tree.
    pub fn contains(&self, value: Value) -> bool {
        self.search(value).is_ok()
    }

    /// Follows right children from `parent_index` for as long as they are occupied and returns
    /// the last index reached. Called on a left child this finds the in-order predecessor of
    /// that child's parent. Returns `parent_index` itself if its right child is empty.
    pub fn search_max_child_index(&self, parent_index: Index) -> Index {
        let mut index = parent_index;
        loop {
            match right(index) {
                Ok(child) if self.get(child).is_some() => index = child,
                _ => return index,
            }
        }
    }

    /// Deletes one occurrence of `value`, returning [`Error::NotFound`] and leaving the tree
    /// untouched if it isn't present.
    ///
    /// A childless node's slot is cleared. Otherwise a donor value is moved into the slot: the
    /// only child if there is one, or the largest value of the left subtree if there are two.
    /// The donor's slot is cleared but its own children are not moved up, so any descendants of
    /// the donor are left behind at their old positions under an empty slot. They can't be
    /// reached until a later [`insert`][Tree::insert] fills that slot, at which point they become
    /// children of the new value whether or not they are in order with it. After that,
    /// [`iter`][Tree::iter] may yield them out of order and [`search`][Tree::search] may miss
    /// them.
    ///
    /// # Examples
    ///
    /// ```
    /// use implicit_bst::array::Tree;
    ///
    /// let mut tree: Tree = vec![6, 2, 8, 1, 3, 7, 4].into_iter().collect();
    /// tree.delete(6).unwrap();
    ///
    /// // 4 was the largest value left of the root.
    /// assert_eq!(tree.get(0), Some(4));
    /// assert_eq!(tree.get(10), None);
    /// ```
    pub fn delete(&mut self, value: Value) -> Result<(), Error> {
        let target = self.search(value)?;
        let left_child = left_of(target);
        let right_child = right_of(target);

        let donor = match (self.get(left_child), self.get(right_child)) {
            (None, None) => {
                self.slots[target] = None;
                self.len -= 1;
                debug!(value, target, "deleted leaf");
                return Ok(());
            }
            (Some(_), Some(_)) => self.search_max_child_index(left_child),
            (Some(_), None) => left_child,
            (None, Some(_)) => right_child,
        };

        self.slots[target] = self.slots[donor].take();
        self.len -= 1;
        debug!(value, target, donor, "deleted by moving donor up");
        Ok(())
    }

    /// The smallest value reachable from the root.
    pub fn min(&self) -> Option<Value> {
        let mut index = ROOT;
        let mut min = self.get(index)?;
        while let Some(value) = self.get(left_of(index)) {
            index = left_of(index);
            min = value;
        }

        Some(min)
    }

    /// The largest value reachable from the root.
    pub fn max(&self) -> Option<Value> {
        self.get(ROOT)?;
        self.get(self.search_max_child_index(ROOT))
    }

    /// Iterates in order over the values reachable from the root. The result is sorted unless a
    /// [`delete`][Tree::delete] stranded values that a later insert reattached.
    ///
    /// # Examples
    ///
    /// ```
    /// use implicit_bst::array::Tree;
    ///
    /// let tree: Tree = vec![6, 2, 8, 1, 3, 7, 4].into_iter().collect();
    ///
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 6, 7, 8]);
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            tree: self,
            stack: Vec::new(),
            cursor: Some(ROOT),
        }
    }
}

impl FromIterator<Value> for Tree {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl Extend<Value> for Tree {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = Value;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over a [`Tree`]. Uses an explicit stack of indices so degenerate trees
/// can't overflow the call stack.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    tree: &'a Tree,
    /// Occupied slots whose left subtree is being visited.
    stack: Vec<Index>,
    /// Next subtree root to descend into.
    cursor: Option<Index>,
}

impl Iterator for Iter<'_> {
    type Item = Value;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(index) = self.cursor.take() {
            if self.tree.get(index).is_some() {
                self.stack.push(index);
                self.cursor = Some(left_of(index));
            }
        }

        let index = self.stack.pop()?;
        self.cursor = Some(right_of(index));
        self.tree.get(index)
    }
}
