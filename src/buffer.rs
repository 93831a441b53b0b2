use std::iter::FusedIterator;
use std::mem::{self, MaybeUninit};
use std::ptr;

/// Contiguous storage with a fixed number of slots, of which exactly the
/// first `len` are initialised.
pub(crate) struct RawBuffer<T> {
    len: usize,
    data: Box<[MaybeUninit<T>]>,
}

fn uninit_slots<T>(capacity: usize) -> Box<[MaybeUninit<T>]> {
    std::iter::repeat_with(MaybeUninit::uninit)
        .take(capacity)
        .collect()
}

impl<T> RawBuffer<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            len: 0,
            data: uninit_slots(capacity),
        }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    pub fn insert(&mut self, index: usize, value: T) {
        assert!(
            index <= self.len,
            "Index out of bounds: cannot insert at index {index}"
        );
        assert!(
            self.len < self.capacity(),
            "Buffer is full: cannot insert more elements"
        );

        unsafe {
            let data_ptr = self.data.as_mut_ptr();

            // Shift elements starting from the index to the right
            ptr::copy(
                data_ptr.add(index),
                data_ptr.add(index + 1),
                self.len - index,
            );

            data_ptr.add(index).write(MaybeUninit::new(value));
        }

        self.len += 1;
    }

    pub fn remove(&mut self, index: usize) -> T {
        assert!(
            index < self.len,
            "Index out of bounds: cannot remove at index {index}"
        );

        unsafe {
            let data_ptr = self.data.as_mut_ptr();
            let value = data_ptr.add(index).read().assume_init();

            // Shift elements from `index + 1` to fill the gap
            ptr::copy(
                data_ptr.add(index + 1),
                data_ptr.add(index),
                self.len - index - 1,
            );

            self.len -= 1;
            value
        }
    }

    /// Moves the elements in `[at, len)` into a new buffer of the same capacity.
    pub fn split_off(&mut self, at: usize) -> Self {
        let mut other = Self::with_capacity(self.capacity());
        self.split_off_into(at, &mut other);
        other
    }

    /// Moves the elements in `[at, len)` into `other`, which must be empty
    /// and large enough to hold them.
    pub fn split_off_into(&mut self, at: usize, other: &mut Self) {
        assert!(at <= self.len, "Index out of bounds: cannot split at {at}");
        assert!(other.is_empty(), "Split target must be empty");

        let moved = self.len - at;
        assert!(moved <= other.capacity(), "Split target is too small");

        unsafe {
            ptr::copy_nonoverlapping(
                self.data.as_ptr().add(at),
                other.data.as_mut_ptr(),
                moved,
            );
        }

        self.len = at;
        other.len = moved;
    }

    /// Replaces the storage with a larger one, moving the elements across.
    pub fn grow(&mut self, new_capacity: usize) {
        assert!(new_capacity >= self.capacity());

        let mut data = uninit_slots(new_capacity);
        unsafe {
            ptr::copy_nonoverlapping(self.data.as_ptr(), data.as_mut_ptr(), self.len);
        }

        // The old slots are `MaybeUninit`, dropping them drops no element.
        self.data = data;
    }

    pub fn clear(&mut self) {
        let elements: *mut [T] = self.as_mut_slice();
        self.len = 0;
        unsafe { ptr::drop_in_place(elements) };
    }

    pub fn as_slice(&self) -> &[T] {
        unsafe { std::slice::from_raw_parts(self.data.as_ptr().cast::<T>(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { std::slice::from_raw_parts_mut(self.data.as_mut_ptr().cast::<T>(), self.len) }
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for RawBuffer<T> {
    fn clone(&self) -> Self {
        let mut other = Self::with_capacity(self.capacity());
        for value in self.as_slice() {
            other.insert(other.len, value.clone());
        }
        other
    }
}

impl<T> IntoIterator for RawBuffer<T> {
    type Item = T;
    type IntoIter = ArrayIntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let len = mem::replace(&mut self.len, 0);
        ArrayIntoIter {
            data: mem::take(&mut self.data),
            head: 0,
            tail: len,
        }
    }
}

/// An owning iterator over the elements of a `FixedSizeList` or a `GrowableList`.
///
/// This struct is created by the `into_iter()` method of those lists.
pub struct ArrayIntoIter<T> {
    data: Box<[MaybeUninit<T>]>,
    head: usize,
    tail: usize,
}

impl<T> ArrayIntoIter<T> {
    fn as_slice(&self) -> &[T] {
        unsafe {
            std::slice::from_raw_parts(
                self.data.as_ptr().add(self.head).cast::<T>(),
                self.tail - self.head,
            )
        }
    }
}

impl<T> Default for ArrayIntoIter<T> {
    fn default() -> Self {
        RawBuffer::with_capacity(0).into_iter()
    }
}

impl<T> Iterator for ArrayIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.head == self.tail {
            return None;
        }

        let value = unsafe { self.data[self.head].assume_init_read() };
        self.head += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.tail - self.head;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for ArrayIntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.head == self.tail {
            return None;
        }

        self.tail -= 1;
        Some(unsafe { self.data[self.tail].assume_init_read() })
    }
}

impl<T> ExactSizeIterator for ArrayIntoIter<T> {}

impl<T> FusedIterator for ArrayIntoIter<T> {}

impl<T> Drop for ArrayIntoIter<T> {
    fn drop(&mut self) {
        for slot in &mut self.data[self.head..self.tail] {
            unsafe { slot.assume_init_drop() };
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ArrayIntoIter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::RawBuffer;

    #[test]
    fn buffer_insert_puts_elements_in_the_correct_positions() {
        let mut sut: RawBuffer<i64> = RawBuffer::with_capacity(6);
        assert_eq!(sut.len(), 0);
        assert!(sut.is_empty());

        sut.insert(0, 10);
        assert_eq!(sut.as_slice(), [10]);

        sut.insert(1, 15);
        assert_eq!(sut.as_slice(), [10, 15]);

        sut.insert(0, 5);
        assert_eq!(sut.as_slice(), [5, 10, 15]);

        sut.insert(3, 20);
        assert_eq!(sut.as_slice(), [5, 10, 15, 20]);

        sut.insert(2, 13);
        assert_eq!(sut.as_slice(), [5, 10, 13, 15, 20]);

        sut.insert(4, 17);
        assert_eq!(sut.as_slice(), [5, 10, 13, 15, 17, 20]);
        assert_eq!(sut.len(), 6);
        assert!(sut.is_full());

        let result = std::panic::catch_unwind(move || sut.insert(6, 100));
        assert!(result.is_err());
    }

    #[test]
    fn buffer_insert_panics_on_index_out_of_bounds() {
        let mut sut: RawBuffer<i64> = RawBuffer::with_capacity(6);
        let result = std::panic::catch_unwind(move || sut.insert(usize::MAX, 100));
        assert!(result.is_err());
    }

    #[test]
    fn buffer_remove_removes_correct_elements() {
        let mut sut: RawBuffer<i64> = RawBuffer::with_capacity(6);
        for i in 0..6 {
            sut.insert(i, i as i64);
        }

        assert_eq!(sut.remove(2), 2);
        assert_eq!(sut.as_slice(), [0, 1, 3, 4, 5]);

        assert_eq!(sut.remove(3), 4);
        assert_eq!(sut.as_slice(), [0, 1, 3, 5]);

        assert_eq!(sut.remove(0), 0);
        assert_eq!(sut.as_slice(), [1, 3, 5]);

        assert_eq!(sut.remove(2), 5);
        assert_eq!(sut.as_slice(), [1, 3]);

        assert_eq!(sut.remove(1), 3);
        assert_eq!(sut.remove(0), 1);
        assert!(sut.is_empty());

        let result = std::panic::catch_unwind(move || sut.remove(0));
        assert!(result.is_err());
    }

    #[test]
    fn buffer_split_off_keeps_capacity_and_order() {
        let mut sut: RawBuffer<i64> = RawBuffer::with_capacity(4);
        for i in 0..4 {
            sut.insert(i, i as i64);
        }

        let tail = sut.split_off(2);
        assert_eq!(sut.as_slice(), [0, 1]);
        assert_eq!(tail.as_slice(), [2, 3]);
        assert_eq!(tail.capacity(), 4);

        let mut sut = tail;
        let empty = sut.split_off(2);
        assert!(empty.is_empty());
        assert_eq!(sut.as_slice(), [2, 3]);

        let everything = sut.split_off(0);
        assert!(sut.is_empty());
        assert_eq!(everything.as_slice(), [2, 3]);
    }

    #[test]
    fn buffer_grow_preserves_elements() {
        let mut sut: RawBuffer<String> = RawBuffer::with_capacity(2);
        sut.insert(0, "a".to_owned());
        sut.insert(1, "b".to_owned());
        assert!(sut.is_full());

        sut.grow(4);
        assert_eq!(sut.capacity(), 4);
        assert!(!sut.is_full());
        sut.insert(1, "c".to_owned());
        assert_eq!(sut.as_slice(), ["a", "c", "b"]);
    }

    #[test]
    fn buffer_drops_every_element_exactly_once() {
        let witness = Rc::new(());

        let mut sut = RawBuffer::with_capacity(5);
        for i in 0..5 {
            sut.insert(i, Rc::clone(&witness));
        }
        assert_eq!(Rc::strong_count(&witness), 6);

        drop(sut.remove(1));
        assert_eq!(Rc::strong_count(&witness), 5);

        let tail = sut.split_off(2);
        sut.grow(10);
        drop(tail);
        assert_eq!(Rc::strong_count(&witness), 3);

        let mut iter = sut.into_iter();
        drop(iter.next());
        assert_eq!(Rc::strong_count(&witness), 2);

        drop(iter);
        assert_eq!(Rc::strong_count(&witness), 1);
    }

    #[test]
    fn buffer_into_iter_is_double_ended() {
        let mut sut: RawBuffer<i64> = RawBuffer::with_capacity(4);
        for i in 0..4 {
            sut.insert(i, i as i64);
        }

        let mut iter = sut.into_iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next_back(), Some(3));
        assert_eq!(format!("{iter:?}"), "IntoIter([1, 2])");
        assert_eq!(iter.next_back(), Some(2));
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }
}
