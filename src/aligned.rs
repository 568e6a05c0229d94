use std::{fmt, mem::MaybeUninit, ptr};

use crate::errors::Error;

/// Inline, correctly aligned, uninitialized storage for exactly `N` values of `T`.
///
/// An `AlignedArray` reserves the memory but never tracks which cells hold a
/// live value. Whoever owns it decides which cells are constructed, and that
/// owner alone is responsible for destroying them: dropping an `AlignedArray`
/// never runs `T`'s destructor.
///
/// Because liveness is the caller's contract, every method that reads a cell
/// as a `T` is `unsafe`. Methods suffixed with `bounded_` (or named `at`)
/// additionally check `index < N` and report [`Error::IndexOutOfRange`].
///
/// The storage is deliberately not [`Clone`]; copying its cells only makes
/// sense for the live ones, which the owner has to do element by element.
///
/// # Examples
///
/// ```
/// use boundvec::AlignedArray;
///
/// let mut cells = AlignedArray::<String, 4>::new();
/// cells.bounded_emplace(1, "hello".to_string()).unwrap();
///
/// // SAFETY: cell 1 was constructed above and not yet destroyed.
/// unsafe {
///     assert_eq!(cells.get_unchecked(1), "hello");
///     cells.destroy(1);
/// }
/// assert_eq!(cells.size(), 4);
/// ```
pub struct AlignedArray<T, const N: usize> {
    cells: [MaybeUninit<T>; N],
}

impl<T, const N: usize> Default for AlignedArray<T, N> {
    #[inline]
    fn default() -> Self { Self::new() }
}

impl<T, const N: usize> fmt::Debug for AlignedArray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlignedArray")
            .field("capacity", &N)
            .finish_non_exhaustive()
    }
}

impl<T, const N: usize> AlignedArray<T, N> {
    /// Reserves storage for `N` cells without constructing any of them.
    #[inline]
    pub const fn new() -> Self {
        Self { cells: [const { MaybeUninit::uninit() }; N] }
    }

    /// Number of cells, always `N`.
    #[inline(always)]
    pub const fn size(&self) -> usize { N }

    /// Same as [`size`](Self::size); the storage has no notion of "used" cells.
    #[inline(always)]
    pub const fn capacity(&self) -> usize { N }

    /// Largest number of values the storage can hold, `N`.
    #[inline(always)]
    pub const fn max_size(&self) -> usize { N }

    /// Pointer to the first cell.
    #[inline]
    pub const fn as_ptr(&self) -> *const T { self.cells.as_ptr().cast() }

    /// Mutable pointer to the first cell.
    #[inline]
    pub const fn as_mut_ptr(&mut self) -> *mut T { self.cells.as_mut_ptr().cast() }

    /// Address of cell `index`, suitable for constructing or reading a `T`.
    ///
    /// # Safety
    ///
    /// `index` must be less than `N`.
    #[inline(always)]
    pub unsafe fn cell_unchecked(&mut self, index: usize) -> *mut T {
        debug_assert!(index < N);
        unsafe { self.as_mut_ptr().add(index) }
    }

    /// Address of cell `index`, or [`Error::IndexOutOfRange`] if `index >= N`.
    ///
    /// Obtaining the address is safe; dereferencing it as a `T` still requires
    /// a live value in that cell.
    #[inline]
    pub fn cell(&mut self, index: usize) -> Result<*mut T, Error> {
        Self::check(index)?;
        Ok(unsafe { self.cell_unchecked(index) })
    }

    /// Reference to the value in cell `index`.
    ///
    /// # Safety
    ///
    /// `index < N` and the cell holds a live `T`.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < N);
        unsafe { self.cells.get_unchecked(index).assume_init_ref() }
    }

    /// Mutable reference to the value in cell `index`.
    ///
    /// # Safety
    ///
    /// `index < N` and the cell holds a live `T`.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < N);
        unsafe { self.cells.get_unchecked_mut(index).assume_init_mut() }
    }

    /// Bounds-checked (against `N`) reference to cell `index`.
    ///
    /// # Safety
    ///
    /// If `index < N`, that cell must hold a live `T`.
    #[inline]
    pub unsafe fn at(&self, index: usize) -> Result<&T, Error> {
        Self::check(index)?;
        Ok(unsafe { self.get_unchecked(index) })
    }

    /// # Safety
    ///
    /// If `index < N`, that cell must hold a live `T`.
    #[inline]
    pub unsafe fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        Self::check(index)?;
        Ok(unsafe { self.get_unchecked_mut(index) })
    }

    /// Moves `value` into cell `index` and returns a reference to it.
    ///
    /// # Safety
    ///
    /// `index` must be less than `N`. A live value already in the cell is
    /// overwritten without being dropped.
    #[inline(always)]
    pub unsafe fn emplace(&mut self, index: usize, value: T) -> &mut T {
        debug_assert!(index < N);
        unsafe { self.cells.get_unchecked_mut(index).write(value) }
    }

    /// Constructs the value for cell `index` from `f`.
    ///
    /// If `f` panics the cell is left as it was.
    ///
    /// # Safety
    ///
    /// Same as [`emplace`](Self::emplace).
    #[inline]
    pub unsafe fn emplace_with<F: FnOnce() -> T>(&mut self, index: usize, f: F) -> &mut T {
        unsafe { self.emplace(index, f()) }
    }

    /// Bounds-checked [`emplace`](Self::emplace).
    ///
    /// Overwriting a live value leaks it, which is why this is safe to call.
    /// On error `value` is dropped and no cell is touched.
    #[inline]
    pub fn bounded_emplace(&mut self, index: usize, value: T) -> Result<&mut T, Error> {
        Self::check(index)?;
        Ok(unsafe { self.emplace(index, value) })
    }

    /// Runs `T`'s destructor on cell `index`.
    ///
    /// # Safety
    ///
    /// `index < N` and the cell holds a live `T`, which is dead afterwards.
    #[inline(always)]
    pub unsafe fn destroy(&mut self, index: usize) {
        debug_assert!(index < N);
        unsafe { self.cells.get_unchecked_mut(index).assume_init_drop() }
    }

    /// Bounds-checked [`destroy`](Self::destroy).
    ///
    /// # Safety
    ///
    /// If `index < N`, that cell must hold a live `T`.
    #[inline]
    pub unsafe fn bounded_destroy(&mut self, index: usize) -> Result<(), Error> {
        Self::check(index)?;
        unsafe { self.destroy(index) };
        Ok(())
    }

    /// Moves the value out of cell `index`, leaving the cell logically empty.
    ///
    /// # Safety
    ///
    /// `index < N` and the cell holds a live `T`. The caller must treat the
    /// cell as dead afterwards.
    #[inline(always)]
    pub unsafe fn read(&self, index: usize) -> T {
        debug_assert!(index < N);
        unsafe { self.cells.get_unchecked(index).assume_init_read() }
    }

    /// Views cells `[0, len)` as a slice.
    ///
    /// # Safety
    ///
    /// `len <= N` and every cell below `len` holds a live `T`.
    #[inline]
    pub const unsafe fn prefix(&self, len: usize) -> &[T] {
        unsafe { std::slice::from_raw_parts(self.as_ptr(), len) }
    }

    /// # Safety
    ///
    /// `len <= N` and every cell below `len` holds a live `T`.
    #[inline]
    pub const unsafe fn prefix_mut(&mut self, len: usize) -> &mut [T] {
        unsafe { std::slice::from_raw_parts_mut(self.as_mut_ptr(), len) }
    }

    /// Destroys cells `[start, end)` in ascending order.
    ///
    /// A panicking destructor does not stop the remaining cells in the range
    /// from being destroyed.
    ///
    /// # Safety
    ///
    /// `start <= end <= N` and every cell in the range holds a live `T`.
    #[inline]
    pub unsafe fn destroy_range(&mut self, start: usize, end: usize) {
        debug_assert!(start <= end && end <= N);
        unsafe {
            let first = self.as_mut_ptr().add(start);
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(first, end - start));
        }
    }

    #[inline(always)]
    const fn check(index: usize) -> Result<(), Error> {
        match index < N {
            true => Ok(()),
            false => Err(Error::out_of_range(index, N)),
        }
    }
}
