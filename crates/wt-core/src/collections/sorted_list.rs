//! Sorted singly-linked list that rejects duplicates.

use std::cmp::Ordering;
use std::fmt;

use crate::error::CollectionError;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// A singly-linked list kept in ascending order by a comparator.
///
/// Two elements for which the comparator returns [`Ordering::Equal`] are
/// duplicates; the second one is rejected. Every operation is a linear walk
/// from the front, which is fine for the handful of categories a project has.
pub struct SortedList<T> {
    head: Link<T>,
    len: usize,
    compare: fn(&T, &T) -> Ordering,
}

impl<T> SortedList<T> {
    /// Creates an empty list ordered by `compare`.
    pub const fn with_comparator(compare: fn(&T, &T) -> Ordering) -> Self {
        Self {
            head: None,
            len: 0,
            compare,
        }
    }

    /// Inserts `element` before the first element that is not less than it.
    pub fn add(&mut self, element: T) -> Result<(), CollectionError> {
        if self.contains(&element) {
            return Err(CollectionError::Duplicate);
        }

        let compare = self.compare;
        let position = self
            .iter()
            .position(|existing| compare(&element, existing) != Ordering::Greater)
            .unwrap_or(self.len);

        let len = self.len;
        let link = self
            .link_mut(position)
            .ok_or(CollectionError::OutOfBounds {
                index: position,
                len,
            })?;
        let next = link.take();
        *link = Some(Box::new(Node {
            value: element,
            next,
        }));
        self.len += 1;
        Ok(())
    }

    /// Unlinks and returns the element at `index`.
    pub fn remove(&mut self, index: usize) -> Result<T, CollectionError> {
        let len = self.len;
        let out_of_bounds = CollectionError::OutOfBounds { index, len };
        if index >= len {
            return Err(out_of_bounds);
        }

        let link = self.link_mut(index).ok_or(out_of_bounds)?;
        let mut node = link.take().ok_or(out_of_bounds)?;
        *link = node.next.take();
        self.len -= 1;
        Ok(node.value)
    }

    /// Returns the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T, CollectionError> {
        self.iter().nth(index).ok_or(CollectionError::OutOfBounds {
            index,
            len: self.len,
        })
    }

    /// Returns the element at `index` mutably.
    ///
    /// Callers must not change the element's sort key in place; remove and
    /// re-add it instead.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, CollectionError> {
        let len = self.len;
        self.node_mut(index)
            .map(|node| &mut node.value)
            .ok_or(CollectionError::OutOfBounds { index, len })
    }

    /// Returns true if an element compares equal to `element`.
    pub fn contains(&self, element: &T) -> bool {
        self.iter()
            .any(|existing| (self.compare)(existing, element) == Ordering::Equal)
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    fn node_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        let mut node = self.head.as_deref_mut();
        for _ in 0..index {
            node = node?.next.as_deref_mut();
        }
        node
    }

    /// The link that points at position `index` (the head link for 0).
    fn link_mut(&mut self, index: usize) -> Option<&mut Link<T>> {
        if index == 0 {
            Some(&mut self.head)
        } else {
            self.node_mut(index - 1).map(|node| &mut node.next)
        }
    }
}

impl<T: Ord> Default for SortedList<T> {
    fn default() -> Self {
        Self::with_comparator(T::cmp)
    }
}

impl<T> Drop for SortedList<T> {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SortedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Front-to-back iterator over a [`SortedList`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<'a, T> IntoIterator for &'a SortedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
