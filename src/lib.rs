//! # chunky_list
//!
//! `chunky_list` provides four implementations of one positional list
//! interface, [`ListAdt`]:
//!
//! - [`FixedSizeList`]: a contiguous buffer with a hard capacity.
//! - [`GrowableList`]: a dynamic array that doubles its storage when full.
//! - [`SinglyLinkedList`]: a chain of owned nodes.
//! - [`ChunkyArrayList`]: an **unrolled linked list**, a sequence of
//!   fixed-capacity chunks that together hold the logical list.
//!
//! ## Chunked storage
//! `ChunkyArrayList` keeps its chunks in a `GrowableList<FixedSizeList<T>>`.
//! Insertions shift elements only within one chunk, and a full chunk is
//! split in two instead of moving the whole tail of the list. Chunks never
//! stay empty: a chunk emptied by a removal leaves the sequence and is kept
//! aside for the next allocation.
//!
//! ## Errors
//! Every fallible operation returns a [`ListError`] and leaves the list
//! untouched when it fails.
//!
//! ## Example
//! ```rust
//! use chunky_list::{ChunkyArrayList, ListError};
//!
//! let mut list = ChunkyArrayList::new(2)?;
//! list.push_back('c');
//! list.push_front('a');
//! list.insert(1, 'b')?;
//!
//! assert_eq!(list.front(), Ok(&'a'));
//! assert_eq!(list.get(1), Ok(&'b'));
//! assert_eq!(list.back(), Ok(&'c'));
//! assert_eq!(list.chunk_lens().collect::<Vec<_>>(), [2, 1]);
//!
//! assert_eq!(list.remove(1), Ok('b'));
//! assert_eq!(list.pop_back(), Ok('c'));
//! assert_eq!(list.pop_front(), Ok('a'));
//! assert_eq!(list.pop_front(), Err(ListError::EmptyCollection));
//! # Ok::<(), ListError>(())
//! ```

mod buffer;
mod error;
mod fixed_size_list;
mod growable_list;
mod into_iter;
mod iter;
mod iter_mut;
pub mod singly_linked_list;

pub use buffer::ArrayIntoIter;
pub use error::ListError;
pub use fixed_size_list::FixedSizeList;
pub use growable_list::GrowableList;
pub use into_iter::IntoIter;
pub use iter::Iter;
pub use iter_mut::IterMut;
pub use singly_linked_list::SinglyLinkedList;

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use tracing::trace;

use crate::error::{check_exclusive_index, check_inclusive_index};

/// Chunk size used by [`ChunkyArrayList::default`], `FromIterator` and `From<[T; M]>`.
pub const DEFAULT_CHUNK_SIZE: usize = 16;

/// The positional list interface shared by every list in this crate.
///
/// Only the primitive accessors are required; the end-of-list operations
/// are derived from them and may be overridden where a list has a cheaper
/// way to reach its ends.
///
/// Positional reads, writes and removals report [`ListError::EmptyCollection`]
/// on an empty list and [`ListError::IndexOutOfRange`] otherwise, while an
/// insertion accepts every index in `0..=len`.
///
/// # Example
/// ```rust
/// use chunky_list::{ChunkyArrayList, GrowableList, ListAdt, ListError, SinglyLinkedList};
///
/// fn rotate<L: ListAdt>(list: &mut L) -> Result<(), ListError> {
///     let value = list.pop_front()?;
///     list.push_back(value)
/// }
///
/// let mut linked = SinglyLinkedList::from([1, 2, 3]);
/// rotate(&mut linked)?;
/// assert_eq!(linked, [2, 3, 1]);
///
/// let mut growable = GrowableList::from([1, 2, 3]);
/// rotate(&mut growable)?;
/// assert_eq!(growable, [2, 3, 1]);
///
/// let mut chunky = ChunkyArrayList::from([1, 2, 3]);
/// rotate(&mut chunky)?;
/// assert_eq!(chunky, [2, 3, 1]);
/// # Ok::<(), ListError>(())
/// ```
pub trait ListAdt {
    type Item;

    /// Returns the number of elements in the list.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> Result<&Self::Item, ListError>;

    fn get_mut(&mut self, index: usize) -> Result<&mut Self::Item, ListError>;

    /// Replaces the element at `index`, returning the previous one.
    fn set(&mut self, index: usize, value: Self::Item) -> Result<Self::Item, ListError> {
        self.get_mut(index)
            .map(|slot| std::mem::replace(slot, value))
    }

    /// Inserts `value` so that it ends up at position `index`.
    fn insert(&mut self, index: usize, value: Self::Item) -> Result<(), ListError>;

    /// Removes and returns the element at `index`.
    fn remove(&mut self, index: usize) -> Result<Self::Item, ListError>;

    fn push_front(&mut self, value: Self::Item) -> Result<(), ListError> {
        self.insert(0, value)
    }

    fn push_back(&mut self, value: Self::Item) -> Result<(), ListError> {
        self.insert(self.len(), value)
    }

    fn pop_front(&mut self) -> Result<Self::Item, ListError> {
        self.remove(0)
    }

    fn pop_back(&mut self) -> Result<Self::Item, ListError> {
        let last = self.len().checked_sub(1).ok_or(ListError::EmptyCollection)?;
        self.remove(last)
    }

    fn front(&self) -> Result<&Self::Item, ListError> {
        self.get(0)
    }

    fn back(&self) -> Result<&Self::Item, ListError> {
        let last = self.len().checked_sub(1).ok_or(ListError::EmptyCollection)?;
        self.get(last)
    }
}

/// An ordered list stored as a sequence of fixed-capacity chunks.
///
/// # Features
/// - **Chunked Storage**: each chunk holds up to `chunk_size` elements in a
///   [`FixedSizeList`], so insertions and removals only shift elements
///   inside a single chunk.
/// - **Local Splits**: inserting into the middle of a full chunk moves its
///   back half into a new chunk placed right after it.
/// - **Chunk Reuse**: a chunk emptied by a removal is dropped from the
///   sequence and recycled by the next chunk allocation.
///
/// Concatenating the chunks in order always yields the logical list, no
/// chunk in the sequence is ever empty and none holds more than
/// `chunk_size` elements.
///
/// # Example
/// ```rust
/// use chunky_list::ChunkyArrayList;
///
/// let mut list = ChunkyArrayList::new(3).unwrap();
/// list.extend(['a', 'b', 'c', 'd', 'e', 'f', 'g']);
///
/// assert_eq!(list.len(), 7);
/// assert_eq!(list.chunk_lens().collect::<Vec<_>>(), [3, 3, 1]);
/// assert_eq!(list.get(5), Ok(&'f'));
/// ```
pub struct ChunkyArrayList<T> {
    chunk_size: usize,
    chunks: GrowableList<FixedSizeList<T>>,
    len: usize,
    spare: Option<FixedSizeList<T>>,
}

impl<T, const M: usize> From<[T; M]> for ChunkyArrayList<T> {
    fn from(values: [T; M]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> FromIterator<T> for ChunkyArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::with_default_chunk_size();
        this.extend(iter);
        this
    }
}

impl<T> Extend<T> for ChunkyArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.push_back(value));
    }
}

impl<'a, T> Extend<&'a T> for ChunkyArrayList<T>
where
    T: Clone,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T> Default for ChunkyArrayList<T> {
    fn default() -> Self {
        Self::with_default_chunk_size()
    }
}

impl<T> ChunkyArrayList<T> {
    /// Creates a new, empty list whose chunks hold up to `chunk_size` elements.
    ///
    /// No chunk is allocated until the first insertion.
    ///
    /// # Errors
    /// [`ListError::InvalidChunkSize`] if `chunk_size` is zero.
    ///
    /// # Example
    /// ```rust
    /// use chunky_list::{ChunkyArrayList, ListError};
    ///
    /// let list: ChunkyArrayList<i64> = ChunkyArrayList::new(6).unwrap();
    /// assert!(list.is_empty());
    /// assert_eq!(list.chunk_count(), 0);
    ///
    /// assert_eq!(
    ///     ChunkyArrayList::<i64>::new(0).err(),
    ///     Some(ListError::InvalidChunkSize { chunk_size: 0 })
    /// );
    /// ```
    pub fn new(chunk_size: usize) -> Result<Self, ListError> {
        if chunk_size == 0 {
            return Err(ListError::InvalidChunkSize { chunk_size });
        }

        Ok(Self::with_valid_chunk_size(chunk_size))
    }

    /// Creates a new, empty list with chunks of [`DEFAULT_CHUNK_SIZE`] elements.
    pub fn with_default_chunk_size() -> Self {
        Self::with_valid_chunk_size(DEFAULT_CHUNK_SIZE)
    }

    fn with_valid_chunk_size(chunk_size: usize) -> Self {
        debug_assert!(chunk_size > 0);

        Self {
            chunk_size,
            chunks: GrowableList::with_capacity(0),
            len: 0,
            spare: None,
        }
    }

    /// Returns the maximum number of elements a single chunk can hold.
    #[inline]
    pub const fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Returns the number of chunks currently holding elements.
    #[inline]
    pub const fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Returns an iterator over the number of elements held by each chunk.
    ///
    /// # Example
    /// ```rust
    /// use chunky_list::ChunkyArrayList;
    ///
    /// let mut list = ChunkyArrayList::new(2).unwrap();
    /// list.extend(['a', 'b', 'c', 'd']);
    /// list.insert(1, 'x').unwrap();
    ///
    /// assert_eq!(list.chunk_lens().collect::<Vec<_>>(), [2, 1, 2]);
    /// ```
    pub fn chunk_lens(&self) -> impl ExactSizeIterator<Item = usize> + '_ {
        self.chunks.iter().map(FixedSizeList::len)
    }

    /// Returns an iterator over the contents of each chunk, in list order.
    pub fn chunks(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        self.chunks.iter().map(FixedSizeList::as_slice)
    }

    /// Adds an element to the front of the list.
    ///
    /// Equivalent to `insert(0, value)`, which can never fail.
    pub fn push_front(&mut self, value: T) {
        if self.is_empty() {
            self.push_back(value);
            return;
        }

        self.raw_insert(0, 0, value);
    }

    /// Adds an element to the back of the list.
    ///
    /// The element goes into the last chunk, or into a new one if the list
    /// is empty or the last chunk is full.
    ///
    /// # Example
    /// ```rust
    /// use chunky_list::ChunkyArrayList;
    ///
    /// let mut list = ChunkyArrayList::new(2).unwrap();
    /// list.push_back(10);
    /// list.push_back(20);
    /// list.push_back(30);
    ///
    /// assert_eq!(list.chunk_count(), 2);
    /// assert_eq!(list.pop_back(), Ok(30));
    /// ```
    pub fn push_back(&mut self, value: T) {
        match self.chunks.back_mut() {
            Ok(chunk) if !chunk.is_full() => chunk.raw_insert(chunk.len(), value),
            _ => {
                let mut chunk = self.make_chunk();
                chunk.raw_insert(0, value);
                self.chunks.push_back(chunk);
            }
        }

        self.len += 1;
    }

    /// Inserts an element at the specified index, shifting subsequent elements to the right.
    ///
    /// Only the chunk receiving the element is touched. When that chunk is
    /// full, its back half is moved to a new chunk first; when the index
    /// falls right after a full chunk, the element goes to the front of the
    /// next chunk if it has room, or to a new chunk of its own.
    ///
    /// # Errors
    /// [`ListError::IndexOutOfRange`] if `index > len`.
    ///
    /// # Examples
    /// ```
    /// use chunky_list::ChunkyArrayList;
    ///
    /// let mut list = ChunkyArrayList::new(4).unwrap();
    /// list.extend([0, 1, 2, 3]);
    /// list.insert(1, 42).unwrap();
    ///
    /// assert_eq!(list, [0, 42, 1, 2, 3]);
    /// assert_eq!(list.chunk_lens().collect::<Vec<_>>(), [3, 2]);
    /// assert!(list.insert(10, 7).is_err());
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        check_inclusive_index(index, self.len)?;

        if index == self.len {
            self.push_back(value);
            return Ok(());
        }

        let SearchTarget {
            chunk_index,
            target_index,
        } = self
            .search_insertion_target(index)
            .ok_or(ListError::IndexOutOfRange {
                index,
                len: self.len,
            })?;

        self.raw_insert(chunk_index, target_index, value);
        Ok(())
    }

    fn raw_insert(&mut self, chunk_index: usize, target_index: usize, value: T) {
        let chunk = &mut self.chunks.as_mut_slice()[chunk_index];
        assert!(target_index <= chunk.len());

        if !chunk.is_full() {
            chunk.raw_insert(target_index, value);
            self.len += 1;
            return;
        }

        let chunk_len = chunk.len();
        if target_index < chunk_len {
            let mid = chunk_len / 2;
            let mut tail = self.make_chunk();

            let chunk = &mut self.chunks.as_mut_slice()[chunk_index];
            chunk.split_off_into(mid, &mut tail);
            trace!(chunk_index, moved = tail.len(), "splitting full chunk");

            if target_index <= mid {
                chunk.raw_insert(target_index, value);
            } else {
                tail.raw_insert(target_index - mid, value);
            }

            self.chunks.raw_insert(chunk_index + 1, tail);
        } else {
            match self.chunks.get_mut(chunk_index + 1) {
                Ok(next) if !next.is_full() => next.raw_insert(0, value),
                _ => {
                    let mut chunk = self.make_chunk();
                    chunk.raw_insert(0, value);
                    self.chunks.raw_insert(chunk_index + 1, chunk);
                }
            }
        }

        self.len += 1;
    }

    /// Moves all elements from the `other` list to the end of this one, leaving `other` empty.
    ///
    /// When both lists share the same chunk size the chunks of `other` are
    /// moved as they are; otherwise its elements are re-chunked one by one.
    ///
    /// # Example
    /// ```rust
    /// use chunky_list::ChunkyArrayList;
    ///
    /// let mut list1 = ChunkyArrayList::new(4).unwrap();
    /// list1.extend([1, 2]);
    ///
    /// let mut list2 = ChunkyArrayList::new(4).unwrap();
    /// list2.extend([3, 4]);
    ///
    /// list1.append(&mut list2);
    ///
    /// assert_eq!(list1, [1, 2, 3, 4]);
    /// assert!(list2.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        if other.is_empty() {
            return;
        }

        if other.chunk_size == self.chunk_size {
            trace!(chunks = other.chunk_count(), "appending whole chunks");
            self.chunks.append(&mut other.chunks);
            self.len += other.len;
            other.len = 0;
            return;
        }

        let chunk_size = other.chunk_size;
        let other = std::mem::replace(other, Self::with_valid_chunk_size(chunk_size));
        self.extend(other);
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    /// [`ListError::EmptyCollection`] if the list is empty.
    #[inline]
    pub fn pop_front(&mut self) -> Result<T, ListError> {
        self.remove(0)
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    /// [`ListError::EmptyCollection`] if the list is empty.
    pub fn pop_back(&mut self) -> Result<T, ListError> {
        let last = self.len.checked_sub(1).ok_or(ListError::EmptyCollection)?;
        self.remove(last)
    }

    /// Removes and returns the element at the specified index, shifting subsequent elements left.
    ///
    /// A chunk left empty by the removal is taken out of the sequence.
    ///
    /// # Errors
    /// - [`ListError::EmptyCollection`] if the list is empty.
    /// - [`ListError::IndexOutOfRange`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// use chunky_list::{ChunkyArrayList, ListError};
    ///
    /// let mut list = ChunkyArrayList::new(2).unwrap();
    /// list.extend([10, 20, 30]);
    ///
    /// assert_eq!(list.remove(2), Ok(30));
    /// assert_eq!(list.chunk_count(), 1);
    /// assert_eq!(
    ///     list.remove(10),
    ///     Err(ListError::IndexOutOfRange { index: 10, len: 2 })
    /// );
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T, ListError> {
        check_exclusive_index(index, self.len)?;

        let SearchTarget {
            chunk_index,
            target_index,
        } = self
            .search_target(index)
            .ok_or(ListError::IndexOutOfRange {
                index,
                len: self.len,
            })?;

        let chunk = &mut self.chunks.as_mut_slice()[chunk_index];
        let value = chunk.remove(target_index)?;
        let emptied = chunk.is_empty();

        self.len -= 1;
        if emptied {
            self.evict(chunk_index)?;
        }

        Ok(value)
    }

    /// Removes all elements, dropping every chunk.
    pub fn clear(&mut self) {
        self.chunks.clear();
        self.len = 0;
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    /// [`ListError::EmptyCollection`] if the list is empty.
    pub fn front(&self) -> Result<&T, ListError> {
        self.chunks.front()?.front()
    }

    pub fn front_mut(&mut self) -> Result<&mut T, ListError> {
        self.chunks.front_mut()?.get_mut(0)
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    /// [`ListError::EmptyCollection`] if the list is empty.
    pub fn back(&self) -> Result<&T, ListError> {
        self.chunks.back()?.back()
    }

    pub fn back_mut(&mut self) -> Result<&mut T, ListError> {
        let chunk = self.chunks.back_mut()?;
        let last = chunk.len().checked_sub(1).ok_or(ListError::EmptyCollection)?;
        chunk.get_mut(last)
    }

    /// Returns a reference to the element at the specified index.
    ///
    /// # Errors
    /// - [`ListError::EmptyCollection`] if the list is empty.
    /// - [`ListError::IndexOutOfRange`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// use chunky_list::{ChunkyArrayList, ListError};
    ///
    /// let mut list = ChunkyArrayList::new(4).unwrap();
    /// assert_eq!(list.get(0), Err(ListError::EmptyCollection));
    ///
    /// list.push_back(10);
    /// list.push_back(20);
    ///
    /// assert_eq!(list.get(1), Ok(&20));
    /// assert_eq!(list.get(2), Err(ListError::IndexOutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        check_exclusive_index(index, self.len)?;

        let SearchTarget {
            chunk_index,
            target_index,
        } = self
            .search_target(index)
            .ok_or(ListError::IndexOutOfRange {
                index,
                len: self.len,
            })?;

        self.chunks.as_slice()[chunk_index].get(target_index)
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        check_exclusive_index(index, self.len)?;

        let SearchTarget {
            chunk_index,
            target_index,
        } = self
            .search_target(index)
            .ok_or(ListError::IndexOutOfRange {
                index,
                len: self.len,
            })?;

        self.chunks.as_mut_slice()[chunk_index].get_mut(target_index)
    }

    /// Replaces the element at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        self.get_mut(index)
            .map(|slot| std::mem::replace(slot, value))
    }

    /// Returns the number of elements currently stored in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Checks whether the list holds no chunk, and therefore no element.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Provides an iterator over list's elements.
    ///
    /// # Examples
    /// ```
    /// use chunky_list::ChunkyArrayList;
    ///
    /// let list = ChunkyArrayList::from([0, 1, 2]);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next_back(), Some(&2));
    /// assert_eq!(iter.len(), 1);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::from_list(self)
    }

    /// Provides a mutable iterator over list's elements.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::from_list(self)
    }

    fn make_chunk(&mut self) -> FixedSizeList<T> {
        match self.spare.take() {
            Some(chunk) => {
                trace!(chunk_size = self.chunk_size, "reusing spare chunk");
                chunk
            }
            None => {
                trace!(chunk_size = self.chunk_size, "allocating chunk");
                FixedSizeList::new(self.chunk_size)
            }
        }
    }

    fn evict(&mut self, chunk_index: usize) -> Result<(), ListError> {
        let chunk = self.chunks.remove(chunk_index)?;
        debug_assert!(chunk.is_empty());

        trace!(chunk_index, "evicting empty chunk");
        self.spare = Some(chunk);
        Ok(())
    }

    /// Locates the element at `index`, scanning from whichever end is closer.
    fn search_target(&self, mut index: usize) -> Option<SearchTarget> {
        if index >= self.len {
            return None;
        }

        if index <= self.len / 2 {
            return self
                .chunks
                .iter()
                .position(|chunk| {
                    if index < chunk.len() {
                        return true;
                    }

                    index -= chunk.len();
                    false
                })
                .map(|chunk_index| SearchTarget {
                    chunk_index,
                    target_index: index,
                });
        }

        let mut remaining_len = self.len;
        self.chunks
            .iter()
            .rposition(|chunk| {
                remaining_len -= chunk.len();

                if index + 1 > remaining_len {
                    index -= remaining_len;
                    return true;
                }

                false
            })
            .map(|chunk_index| SearchTarget {
                chunk_index,
                target_index: index,
            })
    }

    /// Locates the first chunk whose range `[start, end]` contains `index`.
    fn search_insertion_target(&self, index: usize) -> Option<SearchTarget> {
        let mut start = 0;
        for (chunk_index, chunk) in self.chunks.iter().enumerate() {
            let end = start + chunk.len();
            if index <= end {
                return Some(SearchTarget {
                    chunk_index,
                    target_index: index - start,
                });
            }

            start = end;
        }

        None
    }
}

#[derive(Debug, Default)]
struct SearchTarget {
    chunk_index: usize,
    target_index: usize,
}

impl<T> ListAdt for ChunkyArrayList<T> {
    type Item = T;

    fn len(&self) -> usize {
        ChunkyArrayList::len(self)
    }

    fn is_empty(&self) -> bool {
        ChunkyArrayList::is_empty(self)
    }

    fn get(&self, index: usize) -> Result<&T, ListError> {
        ChunkyArrayList::get(self, index)
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        ChunkyArrayList::get_mut(self, index)
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        ChunkyArrayList::insert(self, index, value)
    }

    fn remove(&mut self, index: usize) -> Result<T, ListError> {
        ChunkyArrayList::remove(self, index)
    }

    fn push_back(&mut self, value: T) -> Result<(), ListError> {
        ChunkyArrayList::push_back(self, value);
        Ok(())
    }

    fn back(&self) -> Result<&T, ListError> {
        ChunkyArrayList::back(self)
    }
}

impl<T: Clone> Clone for ChunkyArrayList<T> {
    fn clone(&self) -> Self {
        Self {
            chunk_size: self.chunk_size,
            chunks: self.chunks.clone(),
            len: self.len,
            spare: None,
        }
    }
}

impl<T, const M: usize> PartialEq<[T; M]> for ChunkyArrayList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T; M]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T> PartialEq<&[T]> for ChunkyArrayList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &&[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> PartialEq<[T]> for ChunkyArrayList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T> PartialEq for ChunkyArrayList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for ChunkyArrayList<T> {}

impl<T: PartialOrd> PartialOrd for ChunkyArrayList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for ChunkyArrayList<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Hash> Hash for ChunkyArrayList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|v| v.hash(state));
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ChunkyArrayList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.chunks.iter()).finish()
    }
}

impl<T> IntoIterator for ChunkyArrayList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::from_list(self)
    }
}

impl<'a, T> IntoIterator for &'a ChunkyArrayList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::from_list(self)
    }
}

impl<'a, T> IntoIterator for &'a mut ChunkyArrayList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut::from_list(self)
    }
}
