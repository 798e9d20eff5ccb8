//! Array-backed binary min-heap.
//!
//! [`BinaryMinHeap`] stores its items in a vector that implicitly represents a
//! complete binary tree: the root lives at index 0, the children of index `i` at
//! `2i + 1` and `2i + 2`, and the parent of index `i > 0` at `(i - 1) / 2`. Every
//! parent compares less than or equal to both of its children, so the minimum is
//! always at the root.
//!
//! Unlike [`std::collections::BinaryHeap`], items only need [`PartialOrd`], so
//! floating point priorities can be stored directly, and [`BinaryMinHeap::replace_min`]
//! exchanges the root in a single sift-down pass.
//!
//! # Complexity
//!
//! | Operation | Best | Worst |
//! |-----------|------|-------|
//! | [`insert`](BinaryMinHeap::insert) | O(1) | O(log n) |
//! | [`delete_min`](BinaryMinHeap::delete_min) | O(1) | O(log n) |
//! | [`replace_min`](BinaryMinHeap::replace_min) | O(1) | O(log n) |
//! | [`get_min`](BinaryMinHeap::get_min) | O(1) | O(1) |
//! | [`heapify`] | O(n) | O(n) |
//! | [`heap_sort`] | O(n log n) | O(n log n) |
//!
//! # Examples
//!
//! ```rust
//! use graphcore::heap::{heap_sort, BinaryMinHeap};
//!
//! let mut heap = BinaryMinHeap::new();
//! heap.insert(9);
//! heap.insert(3);
//! heap.insert(25);
//!
//! assert_eq!(heap.get_min(), Ok(&3));
//! assert_eq!(heap.replace_min(1), Ok(3));
//! assert_eq!(heap.delete_min(), Ok(1));
//! assert_eq!(heap.len(), 2);
//!
//! assert_eq!(heap_sort(vec![9, 25, 86, 3, 29, 5, 55]), vec![3, 5, 9, 25, 29, 55, 86]);
//! ```

use crate::{Error, Result};

/// A partially ordered collection with efficient access to its minimum item.
#[derive(Debug, Clone)]
pub struct BinaryMinHeap<T> {
    items: Vec<T>,
}

impl<T> Default for BinaryMinHeap<T> {
    fn default() -> Self {
        BinaryMinHeap { items: Vec::new() }
    }
}

impl<T: PartialOrd> BinaryMinHeap<T> {
    /// Creates an empty heap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty heap able to hold `capacity` items without reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        BinaryMinHeap {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of items in the heap.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the heap holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the minimum item without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyStructure`] if the heap is empty.
    pub fn get_min(&self) -> Result<&T> {
        self.items.first().ok_or(Error::EmptyStructure)
    }

    /// Inserts `item`, restoring heap order by sifting it up from the last leaf.
    ///
    /// O(1) when the item is not smaller than its parent, O(log n) when it is the
    /// new minimum.
    pub fn insert(&mut self, item: T) {
        self.items.push(item);
        let last = self.items.len() - 1;
        sift_up(&mut self.items, last);
    }

    /// Removes and returns the minimum item.
    ///
    /// The last leaf is moved to the root and sifted down.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyStructure`] if the heap is empty; the heap is unchanged.
    pub fn delete_min(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(Error::EmptyStructure);
        }

        let min = self.items.swap_remove(0);
        sift_down(&mut self.items, 0);
        Ok(min)
    }

    /// Replaces the minimum item with `item` and returns the old minimum.
    ///
    /// The root is overwritten and sifted down in a single pass, which is cheaper
    /// than [`delete_min`](Self::delete_min) followed by [`insert`](Self::insert).
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyStructure`] if the heap is empty; `item` is dropped and
    /// the heap is unchanged.
    pub fn replace_min(&mut self, item: T) -> Result<T> {
        let Some(root) = self.items.first_mut() else {
            return Err(Error::EmptyStructure);
        };

        let min = std::mem::replace(root, item);
        sift_down(&mut self.items, 0);
        Ok(min)
    }

    /// Returns the items in heap (level) order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consumes the heap and returns its items in heap (level) order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: PartialOrd> From<Vec<T>> for BinaryMinHeap<T> {
    /// Builds a heap from arbitrary items in O(n) using bottom-up [`heapify`].
    fn from(mut items: Vec<T>) -> Self {
        heapify(&mut items);
        BinaryMinHeap { items }
    }
}

impl<T: PartialOrd> FromIterator<T> for BinaryMinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: PartialOrd> Extend<T> for BinaryMinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

/// Rearranges `items` in place so that they satisfy the min-heap property.
///
/// Sifts down every internal node, starting from the last parent and moving
/// towards the root. Runs in O(n).
pub fn heapify<T: PartialOrd>(items: &mut [T]) {
    if items.len() < 2 {
        return;
    }

    let last_parent = (items.len() - 2) / 2;
    for index in (0..=last_parent).rev() {
        sift_down(items, index);
    }
}

/// Sorts `items` in ascending order by draining a [`BinaryMinHeap`].
///
/// Empty and single-item inputs are returned unchanged.
#[must_use]
pub fn heap_sort<T: PartialOrd>(items: Vec<T>) -> Vec<T> {
    let mut sorted = Vec::with_capacity(items.len());
    let mut heap = BinaryMinHeap::from(items);
    while let Ok(item) = heap.delete_min() {
        sorted.push(item);
    }
    sorted
}

/// Moves the item at `index` up until its parent is not greater.
fn sift_up<T: PartialOrd>(items: &mut [T], mut index: usize) {
    while index > 0 {
        let parent = (index - 1) / 2;
        if items[index] < items[parent] {
            items.swap(index, parent);
            index = parent;
        } else {
            break;
        }
    }
}

/// Moves the item at `index` down until both children are not smaller.
fn sift_down<T: PartialOrd>(items: &mut [T], mut index: usize) {
    let len = items.len();
    loop {
        let left = 2 * index + 1;
        if left >= len {
            break;
        }

        let right = left + 1;
        let child = if right < len && items[right] < items[left] {
            right
        } else {
            left
        };

        if items[child] < items[index] {
            items.swap(index, child);
            index = child;
        } else {
            break;
        }
    }
}
