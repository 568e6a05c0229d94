use std::{ptr, slice};

/// Owning cursor over `[start, end)` of a run of live values behind `ptr`.
///
/// Values are moved out as they are yielded; whatever is left when the cursor
/// is dropped gets destroyed.
pub(super) struct RawIter<T> {
    ptr: *mut T,
    start: usize,
    end: usize,
}

impl <T> RawIter<T> {
    /// # Safety
    ///
    /// `ptr` must point at `len` live values that nothing else will read or
    /// destroy while the cursor exists.
    #[inline]
    pub(super) const unsafe fn new(ptr: *mut T, len: usize) -> Self {
        Self { ptr, start: 0, end: len }
    }

    #[inline]
    pub(super) fn next(&mut self) -> Option<T> {
        match self.start == self.end {
            true => None,
            false => unsafe {
                let item = self.ptr.add(self.start).read();
                self.start += 1;
                Some(item)
            }
        }
    }

    #[inline]
    pub(super) fn next_back(&mut self) -> Option<T> {
        match self.start == self.end {
            true => None,
            false => unsafe {
                self.end -= 1;
                Some(self.ptr.add(self.end).read())
            }
        }
    }

    #[inline]
    pub(super) const fn len(&self) -> usize { self.end - self.start }

    #[inline]
    pub(super) fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.ptr.add(self.start), self.len()) }
    }
}

impl<T> Drop for RawIter<T> {
    fn drop(&mut self) {
        let (start, end) = (self.start, self.end);
        self.start = end;
        unsafe {
            let first = self.ptr.add(start);
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(first, end - start));
        }
    }
}
