use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

use crate::error::{ListError, check_exclusive_index, check_inclusive_index};
use crate::ListAdt;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// A list that only knows its first node; every node owns its successor.
///
/// Operations at the front are O(1), everything else walks the chain.
///
/// # Example
/// ```rust
/// use chunky_list::SinglyLinkedList;
///
/// let mut list = SinglyLinkedList::new();
/// list.push_back(2);
/// list.push_front(0);
/// list.insert(1, 1).unwrap();
///
/// assert_eq!(list, [0, 1, 2]);
/// assert_eq!(list.pop_front(), Ok(0));
/// ```
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    len: usize,
}

/// Walks `index` links from `head`. The caller guarantees `index <= len`.
fn link_at<T>(head: &mut Link<T>, index: usize) -> &mut Link<T> {
    let mut link = head;
    for _ in 0..index {
        let Some(node) = link else {
            unreachable!("chain is shorter than the list length");
        };
        link = &mut node.next;
    }
    link
}

impl<T> SinglyLinkedList<T> {
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        check_exclusive_index(index, self.len)?;
        self.iter().nth(index).ok_or(ListError::IndexOutOfRange {
            index,
            len: self.len,
        })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        check_exclusive_index(index, self.len)?;
        let len = self.len;
        self.iter_mut()
            .nth(index)
            .ok_or(ListError::IndexOutOfRange { index, len })
    }

    /// Replaces the element at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        self.get_mut(index)
            .map(|slot| std::mem::replace(slot, value))
    }

    /// Inserts `value` so that it ends up at position `index`.
    ///
    /// # Errors
    /// [`ListError::IndexOutOfRange`] if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        check_inclusive_index(index, self.len)?;

        let link = link_at(&mut self.head, index);
        let next = link.take();
        *link = Some(Box::new(Node { value, next }));
        self.len += 1;
        Ok(())
    }

    /// Unlinks and returns the element at `index`.
    ///
    /// # Errors
    /// - [`ListError::EmptyCollection`] if the list is empty.
    /// - [`ListError::IndexOutOfRange`] if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Result<T, ListError> {
        check_exclusive_index(index, self.len)?;

        let link = link_at(&mut self.head, index);
        let Some(node) = link.take() else {
            unreachable!("chain is shorter than the list length");
        };

        let Node { value, next } = *node;
        *link = next;
        self.len -= 1;
        Ok(value)
    }

    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    pub fn push_back(&mut self, value: T) {
        let tail = link_at(&mut self.head, self.len);
        *tail = Some(Box::new(Node { value, next: None }));
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Result<T, ListError> {
        let node = self.head.take().ok_or(ListError::EmptyCollection)?;

        let Node { value, next } = *node;
        self.head = next;
        self.len -= 1;
        Ok(value)
    }

    pub fn pop_back(&mut self) -> Result<T, ListError> {
        let last = self.len.checked_sub(1).ok_or(ListError::EmptyCollection)?;
        self.remove(last)
    }

    pub fn front(&self) -> Result<&T, ListError> {
        self.head
            .as_ref()
            .map(|node| &node.value)
            .ok_or(ListError::EmptyCollection)
    }

    pub fn back(&self) -> Result<&T, ListError> {
        self.iter().last().ok_or(ListError::EmptyCollection)
    }

    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            len: self.len,
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
            len: self.len,
        }
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ListAdt for SinglyLinkedList<T> {
    type Item = T;

    fn len(&self) -> usize {
        SinglyLinkedList::len(self)
    }

    fn get(&self, index: usize) -> Result<&T, ListError> {
        SinglyLinkedList::get(self, index)
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        SinglyLinkedList::get_mut(self, index)
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        SinglyLinkedList::insert(self, index, value)
    }

    fn remove(&mut self, index: usize) -> Result<T, ListError> {
        SinglyLinkedList::remove(self, index)
    }

    fn push_front(&mut self, value: T) -> Result<(), ListError> {
        SinglyLinkedList::push_front(self, value);
        Ok(())
    }

    fn pop_front(&mut self) -> Result<T, ListError> {
        SinglyLinkedList::pop_front(self)
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = link_at(&mut self.head, self.len);
        for value in iter {
            let node = tail.insert(Box::new(Node { value, next: None }));
            tail = &mut node.next;
            self.len += 1;
        }
    }
}

impl<'a, T> Extend<&'a T> for SinglyLinkedList<T>
where
    T: Clone,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T, const M: usize> From<[T; M]> for SinglyLinkedList<T> {
    fn from(values: [T; M]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: PartialEq> PartialEq<[T]> for SinglyLinkedList<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: PartialEq> PartialEq<&[T]> for SinglyLinkedList<T> {
    fn eq(&self, other: &&[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: PartialEq, const M: usize> PartialEq<[T; M]> for SinglyLinkedList<T> {
    fn eq(&self, other: &[T; M]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Hash> Hash for SinglyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|v| v.hash(state));
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SinglyLinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An iterator over the elements of a SinglyLinkedList.
///
/// This struct is created by SinglyLinkedList::iter().
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    len: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.len -= 1;
            &node.value
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// A mutable iterator over the elements of a SinglyLinkedList.
///
/// This struct is created by SinglyLinkedList::iter_mut().
pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
    len: usize,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            self.len -= 1;
            &mut node.value
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// An owning iterator over the elements of a SinglyLinkedList.
///
/// This struct is created by SinglyLinkedList::into_iter().
pub struct IntoIter<T> {
    list: SinglyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
