use std::iter::{Flatten, FusedIterator};

use crate::{ArrayIntoIter, ChunkyArrayList, FixedSizeList};

/// An owning iterator over the elements of a `ChunkyArrayList`.
///
/// This struct is created by `ChunkyArrayList::into_iter()`.
pub struct IntoIter<T> {
    delegate: Flatten<ArrayIntoIter<FixedSizeList<T>>>,
    len: usize,
}

impl<T> Default for IntoIter<T> {
    fn default() -> Self {
        Self {
            delegate: Default::default(),
            len: 0,
        }
    }
}

impl<T> IntoIter<T> {
    pub(crate) fn from_list(list: ChunkyArrayList<T>) -> Self {
        Self {
            len: list.len,
            delegate: list.chunks.into_iter().flatten(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let out = self.delegate.next()?;
        self.len -= 1;
        Some(out)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    #[inline]
    fn count(self) -> usize {
        self.len
    }

    #[inline]
    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.len = self.len.saturating_sub(n).saturating_sub(1);
        self.delegate.nth(n)
    }

    fn fold<B, F>(self, init: B, f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        self.delegate.fold(init, f)
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let out = self.delegate.next_back()?;
        self.len -= 1;
        Some(out)
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        self.len = self.len.saturating_sub(n).saturating_sub(1);
        self.delegate.nth_back(n)
    }

    fn rfold<B, F>(self, init: B, f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        self.delegate.rfold(init, f)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> std::fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.len).finish()
    }
}
