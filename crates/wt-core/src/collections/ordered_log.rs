//! Growable, insertion-ordered sequence.

use crate::error::CollectionError;

/// Backing capacity of a freshly created log.
const INITIAL_CAPACITY: usize = 10;

/// An array-backed list that keeps elements in insertion order.
///
/// Capacity doubles whenever an append finds the backing storage full.
/// Removing elements never gives capacity back: a log that once held a
/// thousand tasks keeps room for a thousand tasks.
#[derive(Debug, Clone)]
pub struct OrderedLog<T> {
    items: Vec<T>,
}

impl<T> OrderedLog<T> {
    /// Creates an empty log with the initial capacity.
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Appends an element to the end, doubling capacity when full.
    pub fn append(&mut self, item: T) {
        let capacity = self.items.capacity();
        if self.items.len() == capacity {
            self.items.reserve_exact(capacity.max(1));
        }
        self.items.push(item);
    }

    /// Replaces the element at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, item: T) -> Result<T, CollectionError> {
        let len = self.items.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or(CollectionError::OutOfBounds { index, len })?;
        Ok(std::mem::replace(slot, item))
    }

    /// Removes the element at `index`, shifting later elements left.
    pub fn remove(&mut self, index: usize) -> Result<T, CollectionError> {
        self.check_index(index)?;
        Ok(self.items.remove(index))
    }

    /// Returns the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T, CollectionError> {
        self.items.get(index).ok_or(CollectionError::OutOfBounds {
            index,
            len: self.items.len(),
        })
    }

    /// Returns the position of the first element matching `predicate`.
    pub fn position(&self, predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        self.items.iter().position(predicate)
    }

    /// Keeps only the elements matching `keep`, preserving order.
    pub fn retain(&mut self, keep: impl FnMut(&T) -> bool) {
        self.items.retain(keep);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current backing capacity.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    fn check_index(&self, index: usize) -> Result<(), CollectionError> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(CollectionError::OutOfBounds {
                index,
                len: self.items.len(),
            })
        }
    }
}

impl<T> Default for OrderedLog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a OrderedLog<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
