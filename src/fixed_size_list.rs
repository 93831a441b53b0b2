use std::hash::{Hash, Hasher};

use crate::buffer::{ArrayIntoIter, RawBuffer};
use crate::error::{ListError, check_exclusive_index, check_inclusive_index};
use crate::ListAdt;

/// A list with a maximum size, backed by a single contiguous buffer.
///
/// Insertions and removals shift the elements that follow the affected
/// position. Once `capacity` elements are stored every insertion fails with
/// [`ListError::CapacityExceeded`].
///
/// `FixedSizeList` is also the chunk type of [`crate::ChunkyArrayList`].
///
/// # Example
/// ```rust
/// use chunky_list::{FixedSizeList, ListError};
///
/// let mut list = FixedSizeList::new(2);
/// list.push_back(2).unwrap();
/// list.push_front(1).unwrap();
///
/// assert!(list.is_full());
/// assert_eq!(list.push_back(3), Err(ListError::CapacityExceeded { capacity: 2 }));
/// assert_eq!(list.as_slice(), [1, 2]);
/// ```
pub struct FixedSizeList<T> {
    buffer: RawBuffer<T>,
}

impl<T> FixedSizeList<T> {
    /// Creates an empty list able to hold up to `capacity` elements.
    ///
    /// A zero capacity is allowed: such a list is always full.
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: RawBuffer::with_capacity(capacity),
        }
    }

    /// Returns the maximum number of elements the list can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns `true` when no more elements fit in the list.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.buffer.is_full()
    }

    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        check_exclusive_index(index, self.len())?;
        Ok(&self.buffer.as_slice()[index])
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        check_exclusive_index(index, self.len())?;
        Ok(&mut self.buffer.as_mut_slice()[index])
    }

    /// Replaces the element at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        self.get_mut(index)
            .map(|slot| std::mem::replace(slot, value))
    }

    /// Inserts `value` at `index`, shifting the following elements right.
    ///
    /// # Errors
    /// - [`ListError::IndexOutOfRange`] if `index > len`.
    /// - [`ListError::CapacityExceeded`] if the list is full.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        check_inclusive_index(index, self.len())?;

        if self.is_full() {
            return Err(ListError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }

        self.buffer.insert(index, value);
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting the following elements left.
    ///
    /// # Errors
    /// - [`ListError::EmptyCollection`] if the list is empty.
    /// - [`ListError::IndexOutOfRange`] if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Result<T, ListError> {
        check_exclusive_index(index, self.len())?;
        Ok(self.buffer.remove(index))
    }

    #[inline]
    pub fn push_front(&mut self, value: T) -> Result<(), ListError> {
        self.insert(0, value)
    }

    #[inline]
    pub fn push_back(&mut self, value: T) -> Result<(), ListError> {
        self.insert(self.len(), value)
    }

    #[inline]
    pub fn pop_front(&mut self) -> Result<T, ListError> {
        self.remove(0)
    }

    pub fn pop_back(&mut self) -> Result<T, ListError> {
        let last = self.len().checked_sub(1).ok_or(ListError::EmptyCollection)?;
        self.remove(last)
    }

    pub fn front(&self) -> Result<&T, ListError> {
        self.get(0)
    }

    pub fn back(&self) -> Result<&T, ListError> {
        let last = self.len().checked_sub(1).ok_or(ListError::EmptyCollection)?;
        self.get(last)
    }

    /// Splits the list in two at the given index.
    ///
    /// Returns a new list with the same capacity containing the elements in
    /// `[at, len)`, leaving `self` with `[0, at)`.
    ///
    /// # Panics
    /// Panics if `at > len`.
    pub fn split_off(&mut self, at: usize) -> Self {
        Self {
            buffer: self.buffer.split_off(at),
        }
    }

    /// Moves the elements in `[at, len)` into `other`.
    ///
    /// # Panics
    /// Panics if `at > len`, if `other` is not empty or if `other` cannot hold
    /// the moved elements.
    pub(crate) fn split_off_into(&mut self, at: usize, other: &mut Self) {
        self.buffer.split_off_into(at, &mut other.buffer);
    }

    /// Inserts without reporting errors.
    ///
    /// # Panics
    /// Panics if the list is full or if `index > len`.
    pub(crate) fn raw_insert(&mut self, index: usize, value: T) {
        self.buffer.insert(index, value);
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn as_slice(&self) -> &[T] {
        self.buffer.as_slice()
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.buffer.as_mut_slice()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T> ListAdt for FixedSizeList<T> {
    type Item = T;

    fn len(&self) -> usize {
        FixedSizeList::len(self)
    }

    fn get(&self, index: usize) -> Result<&T, ListError> {
        FixedSizeList::get(self, index)
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        FixedSizeList::get_mut(self, index)
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        FixedSizeList::insert(self, index, value)
    }

    fn remove(&mut self, index: usize) -> Result<T, ListError> {
        FixedSizeList::remove(self, index)
    }
}

impl<T: Clone> Clone for FixedSizeList<T> {
    fn clone(&self) -> Self {
        Self {
            buffer: self.buffer.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for FixedSizeList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for FixedSizeList<T> {}

impl<T: PartialEq> PartialEq<[T]> for FixedSizeList<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq> PartialEq<&[T]> for FixedSizeList<T> {
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq, const M: usize> PartialEq<[T; M]> for FixedSizeList<T> {
    fn eq(&self, other: &[T; M]) -> bool {
        self.as_slice() == other
    }
}

impl<T: Hash> Hash for FixedSizeList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for FixedSizeList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> IntoIterator for FixedSizeList<T> {
    type Item = T;
    type IntoIter = ArrayIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buffer.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a FixedSizeList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut FixedSizeList<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
