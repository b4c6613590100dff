// =====================================================================
// File: index/mod.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Record Manager Project
// Date: Oct. 12, 2026
//
//! The `index` module contains the AVL tree used as the ordered
//! in-memory index of the record store.
//!
//! Structure:
//! - `comparator.rs` : The [`Comparator`] trait and [`NaturalOrder`].
//! - `node.rs`       : Defines the [`AvlNode`] structure and its height helpers.
//! - `tree.rs`       : Defines the [`AvlIndex`] and its algorithms
//!                     (insert, search, remove, rotations).
//! - `iter.rs`       : The lazy in-order iterator [`Iter`].
//! - `tests.rs`      : Unit and property tests (compiled only in test mode).
//!
//! Node layout and the balancing algorithms live in separate files so
//! the tree file only deals with structural changes.
// =====================================================================

pub mod comparator;
pub mod iter;
pub mod node;
pub mod tree;

pub use self::comparator::{Comparator, NaturalOrder};
pub use self::iter::Iter;
pub use self::node::AvlNode;
pub use self::tree::AvlIndex;
