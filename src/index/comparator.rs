// =====================================================================
// File: index/comparator.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Record Manager Project
// Date: Oct. 12, 2026
//
// Description:
//   Three-way comparison used by `AvlIndex` to order its values.
//   An index is built with exactly one comparator and keeps it for
//   its whole lifetime.
// =====================================================================
use std::cmp::Ordering;

/// Total order over `T` supplied to an [`AvlIndex`](super::AvlIndex).
///
/// Any `Fn(&T, &T) -> Ordering` closure is a comparator, so an index
/// can be ordered without a named type:
///
/// ```
/// use recordstore::index::AvlIndex;
///
/// // Descending order
/// let mut index: AvlIndex<i32, _> = AvlIndex::new(|a: &i32, b: &i32| b.cmp(a));
/// index.insert(1);
/// index.insert(3);
/// index.insert(2);
///
/// let values: Vec<i32> = index.iter().copied().collect();
/// assert_eq!(values, vec![3, 2, 1]);
/// ```
///
/// The order must be consistent (antisymmetric and transitive). A
/// comparator that breaks this leaves the index in an unspecified
/// order; it never causes a panic.
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Comparator that defers to the value's own [`Ord`] implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}
