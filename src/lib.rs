//! This crate exposes a self-adjusting Binary Search Tree (a "splay tree")
//! storing a set of keys.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. The most important invariants
//! of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! Searching a BST takes `O(height)`, so keeping the height near `O(lg N)`
//! matters. Balanced trees like AVL or red-black trees do this with extra
//! per-node bookkeeping and rebalancing rules.
//!
//! ## Splay Tree
//!
//! A splay tree stores no balance information at all. Instead, every
//! operation finishes by rotating the node it touched up to the root (a
//! "splay"), using three rotation patterns: a single rotation at the root
//! ("zig"), two same-direction rotations for a straight grandparent path
//! ("zig-zig"), and two opposite rotations for a bent path ("zig-zag").
//! Splaying roughly halves the depth of everything on the access path, which
//! is enough for amortized `O(lg N)` per operation, and it leaves recently
//! used keys near the root so workloads with locality get faster over time.
//!
//! The implementation in [`tree`] keeps no parent pointers: each node is
//! owned exclusively by its parent link and the splay is driven by a small
//! state value carried back up the recursive descent.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod compare;
pub mod tree;

pub use compare::{Compare, NaturalOrder};
pub use tree::SplayTree;

#[cfg(test)]
mod test {
    pub(crate) mod quick;
}
