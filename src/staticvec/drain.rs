use std::{fmt, iter::FusedIterator, marker::PhantomData};

use super::RawIter;

/// A draining iterator for [`StaticVec`](crate::StaticVec).
///
/// Created by [`StaticVec::drain`](crate::StaticVec::drain). Elements not
/// consumed before the `Drain` is dropped are destroyed in order.
pub struct Drain<'a, T: 'a> {
    _slice: PhantomData<&'a mut [T]>,
    iter: RawIter<T>
}

impl <'a, T: 'a> Drain<'a, T> {
    #[inline]
    pub(super) const fn new(iter: RawIter<T>) -> Self {
        Self { _slice: PhantomData, iter }
    }

    /// The elements not yet yielded.
    #[inline]
    pub fn as_slice(&self) -> &[T] { self.iter.as_slice() }
}

#[cfg(not(tarpaulin_include))]
impl<'a, T: 'a + fmt::Debug> fmt::Debug for Drain<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Drain").field(&self.as_slice()).finish()
    }
}

unsafe impl<'a, T: Sync> Sync for Drain<'a, T> {}
unsafe impl<'a, T: Send> Send for Drain<'a, T> {}

impl <'a, T> Iterator for Drain<'a, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> { self.iter.next() }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.iter.len();
        (len, Some(len))
    }
}

impl <'a, T> DoubleEndedIterator for Drain<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> { self.iter.next_back() }
}

impl<'a, T> ExactSizeIterator for Drain<'a, T> {
    #[inline]
    fn len(&self) -> usize { self.iter.len() }
}

impl<'a, T> FusedIterator for Drain<'a, T> {}
