// =====================================================================
// File: index/iter.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Record Manager Project
// Date: Oct. 13, 2026
//
// Description:
//   Lazy in-order traversal of an `AvlIndex`. The iterator keeps an
//   explicit stack of the nodes whose left subtree has been visited
//   but whose own value has not been yielded yet, so no recursion and
//   no up-front collection is needed.
// =====================================================================
use super::AvlNode;
use std::iter::FusedIterator;

/// In-order (ascending) iterator over the values of an [`AvlIndex`](super::AvlIndex).
///
/// Created by [`AvlIndex::iter`](super::AvlIndex::iter). Each traversal
/// needs a fresh iterator.
#[derive(Debug)]
pub struct Iter<'a, T> {
    stack: Vec<&'a AvlNode<T>>,
    remaining: usize,
}


impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a AvlNode<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    /// Push `node` and every left descendant, smallest ends on top.
    fn push_left_spine(&mut self, mut link: Option<&'a AvlNode<T>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}


impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;

        // Right subtree comes before anything still on the stack
        self.push_left_spine(node.right.as_deref());
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
