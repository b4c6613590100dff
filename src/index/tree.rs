// =====================================================================
// File: index/tree.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Record Manager Project
// Date: Oct. 12, 2026 - Refactored Oct. 14, 2026
//
// Description:
//   Implements the AVL tree index (`AvlIndex`) that manages insertion,
//   search, and removal over `AvlNode` structures. The record store
//   uses it as its ordered name index.
//
// Features:
//   - `insert`: Adds a value; a value comparing equal is rejected.
//   - `get`   : Standard BST search; returns the stored value.
//   - `remove`: Removes a value, splicing in the in-order successor.
//   - `iter`  : Lazy in-order traversal.
//   - Rotation helpers: Restore the AVL balance after every change.
//
// Notes:
//   * Relies on `node.rs` for the `AvlNode` definition.
//   * Subtrees are passed by value and the helpers return the new
//     subtree root, so a rotation never aliases a node.
//   * Ordering comes from the `Comparator` the index was built with.
// =====================================================================
use super::{AvlNode, Comparator, Iter};
use std::cmp::Ordering;

/// Owned link to a subtree; `None` is the empty tree.
type Link<T> = Option<Box<AvlNode<T>>>;

/// AVL Index, keeps values ordered by its comparator with O(log n) depth.
/// Contains the root node, the comparator and the number of values.
#[derive(Debug)]
pub struct AvlIndex<T, C> {
    root: Link<T>,
    comparator: C,
    len: usize,
}


impl<T: Ord> Default for AvlIndex<T, super::NaturalOrder> {
    fn default() -> Self {
        Self::new(super::NaturalOrder)
    }
}


// AVL Referencing:
// https://en.wikipedia.org/wiki/AVL_tree
// https://www.geeksforgeeks.org/dsa/deletion-in-an-avl-tree/
impl<T, C> AvlIndex<T, C>
where
    C: Comparator<T>,
{
    /// Create a new empty index ordered by `comparator`.
    pub fn new(comparator: C) -> Self {
        Self {
            root: None,
            comparator,
            len: 0,
        }
    }

    /// Number of values stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the index holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the whole tree (empty = 0, single node = 1).
    pub fn height(&self) -> usize {
        AvlNode::height_of(self.root.as_deref())
    }

    /// Read-only access to the root node, for walking the structure.
    pub fn root(&self) -> Option<&AvlNode<T>> {
        self.root.as_deref()
    }

    /// The comparator this index was built with.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Drop every value.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Search for a value comparing equal to `probe`.
    ///
    /// Traverses the tree from the root, going left on `Less` and right
    /// on `Greater` until a match or an empty link is hit.
    ///
    /// # Returns
    /// * `Some(&T)` with the stored value if one compares equal.
    /// * `None` if no stored value matches.
    ///
    /// # Example
    /// ```
    /// use recordstore::index::{AvlIndex, NaturalOrder};
    /// let mut index = AvlIndex::new(NaturalOrder);
    /// index.insert("dog");
    /// assert_eq!(index.get(&"dog"), Some(&"dog"));
    /// assert_eq!(index.get(&"cat"), None);
    /// ```
    pub fn get(&self, probe: &T) -> Option<&T> {
        let mut link = self.root.as_deref();

        // Iterative descent - no need for recursion on a read
        while let Some(node) = link {
            match self.comparator.compare(probe, &node.value) {
                Ordering::Less => link = node.left.as_deref(),
                Ordering::Greater => link = node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            }
        }
        None
    }

    /// Returns `true` if a value comparing equal to `probe` is stored.
    pub fn contains(&self, probe: &T) -> bool {
        self.get(probe).is_some()
    }

    /// Smallest value under the comparator.
    pub fn first(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    /// Largest value under the comparator.
    pub fn last(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// Lazy in-order traversal, ascending under the comparator.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// Insert a value into the AVL tree.
    ///
    /// - If a stored value compares equal, the call is a no-op and the
    ///   new value is dropped.
    /// - Otherwise a leaf is added and every node on the way back up has
    ///   its height recomputed and is rebalanced.
    ///
    /// # Returns
    /// `true` if the value was added, `false` if it was a duplicate.
    ///
    /// # Example
    /// ```
    /// use recordstore::index::{AvlIndex, NaturalOrder};
    ///
    /// let mut index = AvlIndex::new(NaturalOrder);
    /// assert!(index.insert(3));
    /// assert!(index.insert(1));
    /// assert!(index.insert(2));
    ///
    /// // Duplicate is rejected
    /// assert!(!index.insert(2));
    /// assert_eq!(index.len(), 3);
    ///
    /// // Three ascending inserts rotate into a height-2 tree
    /// assert_eq!(index.height(), 2);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let mut inserted = false;

        // Take the root out, hand it down, put the new root back
        let root = self.root.take();
        self.root = Some(Self::insert_internal(root, value, &self.comparator, &mut inserted));

        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes the value comparing equal to `probe`, if present.
    ///
    /// - A leaf or single-child node is replaced by its only child (or nothing).
    /// - A node with two children is replaced by its in-order successor,
    ///   the minimum of its right subtree, which is detached from there.
    /// - Every node on the way back up is re-heighted and rebalanced.
    ///
    /// # Returns
    /// The removed value, or `None` if nothing matched (tree unchanged).
    ///
    /// # Example
    /// ```
    /// use recordstore::index::{AvlIndex, NaturalOrder};
    /// let mut index = AvlIndex::new(NaturalOrder);
    /// index.insert("dog");
    /// assert_eq!(index.remove(&"dog"), Some("dog"));
    /// assert_eq!(index.remove(&"dog"), None);
    /// assert!(index.is_empty());
    /// ```
    pub fn remove(&mut self, probe: &T) -> Option<T> {
        let mut removed = None;

        let root = self.root.take();
        self.root = Self::remove_internal(root, probe, &self.comparator, &mut removed);

        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }


    // =========================
    // Insertion helpers
    // =========================

    /// Inserts `value` into the subtree `link` and returns the subtree's new root.
    ///
    /// # Behavior
    /// - **Empty link**: a new leaf becomes the subtree, `inserted` is set.
    /// - **Less / Greater**: recurse into the left / right child.
    /// - **Equal**: the subtree is returned untouched.
    ///
    /// Heights and balance are fixed on the way back up the recursion.
    fn insert_internal(link: Link<T>, value: T, comparator: &C, inserted: &mut bool) -> Box<AvlNode<T>> {
        // Base case - empty spot found
        let mut node = match link {
            Some(node) => node,
            None => {
                *inserted = true;
                return Box::new(AvlNode::new(value));
            }
        };

        match comparator.compare(&value, &node.value) {
            Ordering::Less => {
                let left = node.left.take();
                node.left = Some(Self::insert_internal(left, value, comparator, inserted));
            }
            Ordering::Greater => {
                let right = node.right.take();
                node.right = Some(Self::insert_internal(right, value, comparator, inserted));
            }
            // Already present - nothing changed below, nothing to fix
            Ordering::Equal => return node,
        }

        node.update_height();
        Self::rebalance(node)
    }


    // =========================
    // Removal helpers
    // =========================

    /// Removes the value matching `probe` from the subtree `link`.
    ///
    /// # Behavior
    /// 1. **Match in this node**
    ///    - No left child: the right child takes its place.
    ///    - No right child: the left child takes its place.
    ///    - Two children: the minimum of the right subtree is detached
    ///      and takes over both children.
    ///
    /// 2. **No match in this node**
    ///    - Recurse into the left or right child; an empty link means the
    ///      value is absent and nothing changes.
    ///
    /// The matched value is moved into `removed`.
    fn remove_internal(link: Link<T>, probe: &T, comparator: &C, removed: &mut Option<T>) -> Link<T> {
        // Empty subtree - value not present
        let mut node = link?;

        match comparator.compare(probe, &node.value) {
            Ordering::Less => {
                let left = node.left.take();
                node.left = Self::remove_internal(left, probe, comparator, removed);
            }
            Ordering::Greater => {
                let right = node.right.take();
                node.right = Self::remove_internal(right, probe, comparator, removed);
            }
            Ordering::Equal => {
                let AvlNode { value, left, right, .. } = *node;
                *removed = Some(value);

                match (left, right) {
                    // Zero or one child - splice it in directly
                    (None, right) => return right,
                    (left, None) => return left,

                    // Two children - successor takes this node's place
                    (Some(left), Some(right)) => {
                        let (mut successor, rest) = Self::detach_min(right);
                        successor.left = Some(left);
                        successor.right = rest;
                        node = successor;
                    }
                }
            }
        }

        node.update_height();
        Some(Self::rebalance(node))
    }


    /// Detach the minimum node of a subtree.
    ///
    /// Returns the detached node (children cleared) and what is left of
    /// the subtree, already rebalanced.
    fn detach_min(mut node: Box<AvlNode<T>>) -> (Box<AvlNode<T>>, Link<T>) {
        match node.left.take() {
            // This is the minimum - its right child replaces it
            None => {
                let rest = node.right.take();
                node.height = 1;
                (node, rest)
            }
            Some(left) => {
                let (min, rest) = Self::detach_min(left);
                node.left = rest;
                node.update_height();
                (min, Some(Self::rebalance(node)))
            }
        }
    }


    // =========================
    // Balancing helpers
    // =========================

    /// Restore the AVL property at `node`, whose children are already balanced.
    ///
    /// # Cases
    /// - Left-heavy (`> 1`): a right-heavy left child is rotated left first
    ///   (left-right case), then `node` is rotated right.
    /// - Right-heavy (`< -1`): a left-heavy right child is rotated right first
    ///   (right-left case), then `node` is rotated left.
    /// - Otherwise the node is returned as is.
    fn rebalance(mut node: Box<AvlNode<T>>) -> Box<AvlNode<T>> {
        let balance = node.balance_factor();

        if balance > 1 {
            if node.left.as_ref().is_some_and(|left| left.balance_factor() < 0) {
                node.left = node.left.take().map(Self::rotate_left);
            }
            return Self::rotate_right(node);
        }

        if balance < -1 {
            if node.right.as_ref().is_some_and(|right| right.balance_factor() > 0) {
                node.right = node.right.take().map(Self::rotate_right);
            }
            return Self::rotate_left(node);
        }

        node
    }


    /// Left rotation: the right child is promoted into `node`'s place.
    ///
    /// ```text
    ///     node               pivot
    ///    /    \             /     \
    ///   a    pivot   =>   node     c
    ///       /     \      /    \
    ///      b       c    a      b
    /// ```
    fn rotate_left(mut node: Box<AvlNode<T>>) -> Box<AvlNode<T>> {
        let Some(mut pivot) = node.right.take() else {
            return node;
        };

        node.right = pivot.left.take();
        node.update_height();

        pivot.left = Some(node);
        pivot.update_height();
        pivot
    }


    /// Right rotation: the left child is promoted into `node`'s place.
    ///
    /// ```text
    ///       node           pivot
    ///      /    \         /     \
    ///   pivot    c  =>   a      node
    ///  /     \                 /    \
    /// a       b               b      c
    /// ```
    fn rotate_right(mut node: Box<AvlNode<T>>) -> Box<AvlNode<T>> {
        let Some(mut pivot) = node.left.take() else {
            return node;
        };

        node.left = pivot.right.take();
        node.update_height();

        pivot.right = Some(node);
        pivot.update_height();
        pivot
    }
}


impl<'a, T, C> IntoIterator for &'a AvlIndex<T, C>
where
    C: Comparator<T>,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
