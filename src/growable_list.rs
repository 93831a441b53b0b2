use std::hash::{Hash, Hasher};

use tracing::trace;

use crate::buffer::{ArrayIntoIter, RawBuffer};
use crate::error::{ListError, check_exclusive_index, check_inclusive_index};
use crate::ListAdt;

/// A dynamic array, also known as an `ArrayList`.
///
/// It starts with room for [`GrowableList::START_SIZE`] elements and replaces
/// its storage with one twice as large whenever an insertion finds it full.
///
/// # Example
/// ```rust
/// use chunky_list::GrowableList;
///
/// let mut list = GrowableList::new();
/// for i in 0..11 {
///     list.push_back(i);
/// }
///
/// assert_eq!(list.len(), 11);
/// assert_eq!(list.capacity(), 20);
/// assert_eq!(list.get(10), Ok(&10));
/// ```
pub struct GrowableList<T> {
    buffer: RawBuffer<T>,
}

impl<T> GrowableList<T> {
    /// Capacity of a list created with [`GrowableList::new`].
    pub const START_SIZE: usize = 10;

    /// Creates an empty list with room for [`GrowableList::START_SIZE`] elements.
    pub fn new() -> Self {
        Self::with_capacity(Self::START_SIZE)
    }

    /// Creates an empty list with room for `capacity` elements before the first growth.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: RawBuffer::with_capacity(capacity),
        }
    }

    /// Returns the number of elements the list can hold before growing.
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

    /// Inserts `value` at `index`, shifting the following elements right and
    /// growing the storage first if it is full.
    ///
    /// # Errors
    /// [`ListError::IndexOutOfRange`] if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        check_inclusive_index(index, self.len())?;

        self.raw_insert(index, value);
        Ok(())
    }

    /// Inserts without reporting errors, growing the storage if needed.
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub(crate) fn raw_insert(&mut self, index: usize, value: T) {
        self.reserve_one();
        self.buffer.insert(index, value);
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

    /// Adds an element to the back of the list. Never fails.
    pub fn push_back(&mut self, value: T) {
        self.raw_insert(self.len(), value);
    }

    /// Adds an element to the front of the list. Never fails.
    pub fn push_front(&mut self, value: T) {
        self.raw_insert(0, value);
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

    pub fn front_mut(&mut self) -> Result<&mut T, ListError> {
        self.get_mut(0)
    }

    pub fn back_mut(&mut self) -> Result<&mut T, ListError> {
        let last = self.len().checked_sub(1).ok_or(ListError::EmptyCollection)?;
        self.get_mut(last)
    }

    /// Moves all the elements of `other` to the back of `self`, leaving `other` empty.
    pub fn append(&mut self, other: &mut Self) {
        for value in std::mem::take(other) {
            self.push_back(value);
        }
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

    fn reserve_one(&mut self) {
        if !self.buffer.is_full() {
            return;
        }

        let old_capacity = self.capacity();
        let new_capacity = match old_capacity {
            0 => Self::START_SIZE,
            n => n * 2,
        };

        trace!(old_capacity, new_capacity, "growing list storage");
        self.buffer.grow(new_capacity);
    }
}

impl<T> Default for GrowableList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ListAdt for GrowableList<T> {
    type Item = T;

    fn len(&self) -> usize {
        GrowableList::len(self)
    }

    fn get(&self, index: usize) -> Result<&T, ListError> {
        GrowableList::get(self, index)
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        GrowableList::get_mut(self, index)
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        GrowableList::insert(self, index, value)
    }

    fn remove(&mut self, index: usize) -> Result<T, ListError> {
        GrowableList::remove(self, index)
    }
}

impl<T> FromIterator<T> for GrowableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<T> Extend<T> for GrowableList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.push_back(value));
    }
}

impl<'a, T> Extend<&'a T> for GrowableList<T>
where
    T: Clone,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T, const M: usize> From<[T; M]> for GrowableList<T> {
    fn from(values: [T; M]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Clone> Clone for GrowableList<T> {
    fn clone(&self) -> Self {
        Self {
            buffer: self.buffer.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for GrowableList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowableList<T> {}

impl<T: PartialEq> PartialEq<[T]> for GrowableList<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq> PartialEq<&[T]> for GrowableList<T> {
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq, const M: usize> PartialEq<[T; M]> for GrowableList<T> {
    fn eq(&self, other: &[T; M]) -> bool {
        self.as_slice() == other
    }
}

impl<T: Hash> Hash for GrowableList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for GrowableList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> IntoIterator for GrowableList<T> {
    type Item = T;
    type IntoIter = ArrayIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buffer.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a GrowableList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowableList<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use quickcheck_macros::quickcheck;

    use crate::{GrowableList, ListError};

    #[test]
    fn test_new_creates_empty_list() {
        let sut: GrowableList<i64> = GrowableList::new();
        assert!(sut.is_empty());
        assert_eq!(sut.len(), 0);
        assert_eq!(sut.capacity(), GrowableList::<i64>::START_SIZE);
    }

    #[test]
    fn test_push_back_doubles_capacity_when_full() {
        let mut sut = GrowableList::with_capacity(2);
        sut.push_back(0);
        sut.push_back(1);
        assert_eq!(sut.capacity(), 2);

        sut.push_back(2);
        assert_eq!(sut.capacity(), 4);

        sut.push_back(3);
        sut.push_back(4);
        assert_eq!(sut.capacity(), 8);
        assert_eq!(sut, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_zero_capacity_grows_to_start_size() {
        let mut sut = GrowableList::with_capacity(0);
        sut.push_front(1);
        assert_eq!(sut.capacity(), GrowableList::<i32>::START_SIZE);
        assert_eq!(sut, [1]);
    }

    #[test]
    fn test_insert_validates_index_before_growing() {
        let mut sut = GrowableList::with_capacity(1);
        sut.push_back(1);

        assert_eq!(
            sut.insert(2, 2),
            Err(ListError::IndexOutOfRange { index: 2, len: 1 })
        );
        assert_eq!(sut.capacity(), 1);

        sut.insert(0, 0).unwrap();
        assert_eq!(sut, [0, 1]);
        assert_eq!(sut.capacity(), 2);
    }

    #[test]
    fn test_remove_and_pops() {
        let mut sut = GrowableList::from([10, 20, 30, 40]);
        assert_eq!(sut.remove(1), Ok(20));
        assert_eq!(sut.pop_front(), Ok(10));
        assert_eq!(sut.pop_back(), Ok(40));
        assert_eq!(sut, [30]);
        assert_eq!(
            sut.remove(1),
            Err(ListError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(sut.pop_back(), Ok(30));
        assert_eq!(sut.pop_back(), Err(ListError::EmptyCollection));
        assert_eq!(sut.pop_front(), Err(ListError::EmptyCollection));
        assert_eq!(sut.front(), Err(ListError::EmptyCollection));
        assert_eq!(sut.back(), Err(ListError::EmptyCollection));
    }

    #[test]
    fn test_set_returns_previous_value() {
        let mut sut = GrowableList::from(['a', 'b']);
        assert_eq!(sut.set(1, 'c'), Ok('b'));
        assert_eq!(sut, ['a', 'c']);
        assert_eq!(
            sut.set(2, 'd'),
            Err(ListError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_append_moves_everything() {
        let mut sut = GrowableList::from([1, 2]);
        let mut other = GrowableList::from([3, 4, 5]);

        sut.append(&mut other);
        assert_eq!(sut, [1, 2, 3, 4, 5]);
        assert!(other.is_empty());

        other.push_back(6);
        assert_eq!(other, [6]);
    }

    #[test]
    fn test_clone_debug_and_iterators() {
        let mut sut: GrowableList<i32> = (0..4).collect();
        for value in &mut sut {
            *value += 1;
        }

        let cloned = sut.clone();
        assert_eq!(cloned, sut);
        assert_eq!(format!("{cloned:?}"), "[1, 2, 3, 4]");
        assert_eq!((&sut).into_iter().rev().copied().collect::<Vec<_>>(), [4, 3, 2, 1]);
        assert_eq!(sut.into_iter().collect::<Vec<_>>(), [1, 2, 3, 4]);
    }

    #[quickcheck]
    fn test_growable_list_behavioural(seed: VecDeque<i32>) {
        let mut expected = seed;
        let mut actual: GrowableList<i32> = expected.iter().copied().collect();

        for _ in 0..64 {
            let len = expected.len();
            assert_eq!(actual, expected.make_contiguous() as &[_]);
            assert_eq!(expected.front(), actual.front().ok());
            assert_eq!(expected.back(), actual.back().ok());

            match rand::random_range(0..=5) {
                0 => {
                    let value = rand::random();
                    expected.push_front(value);
                    actual.push_front(value);
                }
                1 => {
                    let index = rand::random_range(0..=len);
                    let value = rand::random();
                    expected.insert(index, value);
                    actual.insert(index, value).unwrap();
                }
                2 => {
                    let value = rand::random();
                    expected.push_back(value);
                    actual.push_back(value);
                }
                3 => assert_eq!(expected.pop_front(), actual.pop_front().ok()),
                4 => {
                    let index = rand::random_range(0..=len);
                    assert_eq!(expected.remove(index), actual.remove(index).ok())
                }
                5 => assert_eq!(expected.pop_back(), actual.pop_back().ok()),
                _ => unreachable!(),
            }
        }
    }
}
