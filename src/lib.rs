//! This crate exposes a Binary Search Tree (BST) that stores its nodes in a flat array instead of
//! linking them together with pointers.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. The most important invariants of a BST are:
//!
//! 1. For every node in a BST, all the nodes in its left subtree have a
//!    value less than its own value.
//! 2. For every node in a BST, all the nodes in its right subtree have a
//!    value greater than or equal to its own value.
//!
//! ## Implicit layout
//!
//! Instead of storing child pointers, [`array::Tree`] places the root at index `0` and the
//! children of the node at index `i` at `2i + 1` and `2i + 2` (see [`index`]). A slot can only be
//! reached through its parent, so lookups walk down from the root computing indices as they go.
//! Nothing rebalances the tree so the backing storage can get very sparse: a tree that
//! degenerates into a chain of `n` nodes needs around `2^n` slots.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod array;
pub mod error;
pub mod index;
