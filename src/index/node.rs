// =====================================================================
// File: index/node.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Record Manager Project
// Date: Oct. 12, 2026
//
// Description:
//   Defines the AVL node structure (`AvlNode`) used by the ordered
//   index of the record store. Each node maintains:
//
//   - `value` : The stored element.
//   - `left`  : Subtree of values that compare less than `value`.
//   - `right` : Subtree of values that compare greater than `value`.
//   - `height`: Cached height of the subtree rooted here (leaf = 1).
//
// Notes:
//   * Each node is owned by exactly one parent link (or the root link),
//     so there is no sharing and no cycles.
//   * This file contains only the node representation and height
//     helpers. Insert, remove and rotations are in `tree.rs`.
// =====================================================================


// AVL Referencing:
// https://en.wikipedia.org/wiki/AVL_tree
// https://www.geeksforgeeks.org/dsa/introduction-to-avl-tree/
/// Basic AVL Tree Node
#[derive(Debug)]
pub struct AvlNode<T> {
    pub value: T,
    /// Box keeps the recursive type sized - children live on the heap
    pub left: Option<Box<AvlNode<T>>>,
    pub right: Option<Box<AvlNode<T>>>,
    pub height: usize,
}


impl<T> AvlNode<T> {
    /// Creates a new leaf node holding `value`.
    ///
    /// # Example
    /// ```
    /// use recordstore::index::AvlNode;
    /// let leaf = AvlNode::new("lion");
    /// assert_eq!(leaf.height, 1);
    /// assert!(leaf.left.is_none() && leaf.right.is_none());
    /// ```
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            height: 1,
        }
    }


    /// Height of an optional subtree. An absent child has height 0.
    pub fn height_of(link: Option<&AvlNode<T>>) -> usize {
        link.map_or(0, |node| node.height)
    }


    /// Height difference `height(left) - height(right)`.
    ///
    /// Positive means left-heavy, negative means right-heavy. A balanced
    /// AVL node always reports a value in `-1..=1`.
    pub fn balance_factor(&self) -> isize {
        let left = Self::height_of(self.left.as_deref()) as isize;
        let right = Self::height_of(self.right.as_deref()) as isize;
        left - right
    }


    /// Recomputes the cached height from the children's cached heights.
    ///
    /// Must be called bottom-up: children first, then the parent.
    pub fn update_height(&mut self) {
        let left = Self::height_of(self.left.as_deref());
        let right = Self::height_of(self.right.as_deref());
        self.height = 1 + left.max(right);
    }


    /// Returns `true` when the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
