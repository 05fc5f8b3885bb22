//! This crate exposes a few classic collections mostly for educational purposes: a
//! [Binary Search Tree][tree::BinarySearchTree], a [doubly linked list][list::LinkedList], and a
//! family of [sets][set::Set].
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
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support sorted
//! iteration by visiting the left subtree, then the subtree root, then the right
//! subtree, which in turn gives rank queries ("what is the `k`th smallest value?")
//! and range queries ("which values are less than `x`?").
//!
//! The tree in this crate does not rebalance itself so its height depends
//! entirely on the order values are inserted in.
//!
//! ## Doubly Linked List
//!
//! Every element lives in its own heap allocated node that points at the nodes
//! before and after it. Adding or removing at either end is `O(1)`; reaching the
//! middle means walking node to node.
//!
//! ## Sets
//!
//! [`set::Set`] describes a collection of distinct elements in terms of a few
//! storage primitives and builds membership tests and set algebra (union,
//! intersection, difference) on top. [`set::UnsortedSet`] and [`set::SortedSet`]
//! are two `Vec` backed implementations.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod list;
pub mod set;
pub mod tree;
mod util;

pub use error::Error;
