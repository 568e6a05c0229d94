use std::{fmt, iter::FusedIterator};

use crate::AlignedArray;

/// An owning iterator over the elements of a [`StaticVec`](crate::StaticVec).
///
/// Created by the [`IntoIterator`] impl on `StaticVec<T, N>`. The storage
/// travels with the iterator, so no heap is involved.
pub struct IntoIter<T, const N: usize> {
    data: AlignedArray<T, N>,
    start: usize,
    end: usize,
}

impl <T, const N: usize> IntoIter<T, N> {
    /// # Safety
    ///
    /// Cells `[0, len)` of `data` are live and owned by the iterator from now on.
    #[inline]
    pub(super) const unsafe fn new(data: AlignedArray<T, N>, len: usize) -> Self {
        Self { data, start: 0, end: len }
    }

    /// The elements not yet yielded.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { &self.data.prefix(self.end)[self.start..] }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { &mut self.data.prefix_mut(self.end)[self.start..] }
    }
}

#[cfg(not(tarpaulin_include))]
impl<T: fmt::Debug, const N: usize> fmt::Debug for IntoIter<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl <T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self.start == self.end {
            true => None,
            false => {
                self.start += 1;
                Some(unsafe { self.data.read(self.start - 1) })
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl <T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        match self.start == self.end {
            true => None,
            false => {
                self.end -= 1;
                Some(unsafe { self.data.read(self.end) })
            }
        }
    }
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}

impl <T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        let (start, end) = (self.start, self.end);
        self.start = end;
        unsafe { self.data.destroy_range(start, end) }
    }
}
