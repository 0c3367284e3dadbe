//! This crate exposes an ordered set backed by a Binary Search Tree (BST)
//! that is balanced when built and can be rebalanced on demand.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)`. An [`OrderedTree`] is
//! built from a sorted, deduplicated snapshot of its input by repeatedly
//! choosing the (lower) middle element as the subtree root, which limits the
//! height to `O(lg N)`.
//!
//! Insertion and deletion do *not* keep the tree balanced. A run of skewed
//! insertions can degrade the height to `O(N)`. [`OrderedTree::is_balanced`]
//! reports this and [`OrderedTree::rebalance`] rebuilds the whole tree from
//! its in-order contents.
//!
//! # Examples
//!
//! ```
//! use bst::OrderedTree;
//!
//! let mut tree = OrderedTree::new([1, 7, 4, 23, 8, 9, 4, 3, 5, 7, 9, 67, 6345, 324]);
//! assert_eq!(tree.len(), 11);
//! assert_eq!(tree.height(tree.root()), 3);
//!
//! tree.insert(2);
//! tree.delete(&4);
//! assert!(!tree.find(&4));
//!
//! // Traversal callbacks can rewrite values in place.
//! tree.level_order(|v| *v *= 2);
//! assert_eq!(tree.iter().next(), Some(&2));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod node;
pub mod pretty;
mod traverse;
mod tree;
mod util;

pub use error::TreeError;
pub use node::Node;
pub use traverse::{BreadthFirst, Iter, LevelOrder, Order};
pub use tree::OrderedTree;
