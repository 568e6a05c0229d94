mod raw_iter;
mod drain;
mod into_iter;

use std::{
    fmt,
    hash::{Hash, Hasher},
    mem::{self, ManuallyDrop},
    ops::{Deref, DerefMut, Index, IndexMut},
    ptr,
    slice::{self, SliceIndex},
};

use crate::{aligned::AlignedArray, errors::Error};
use raw_iter::RawIter;
pub use drain::Drain;
pub use into_iter::IntoIter;

/// A fixed-capacity vector whose elements live inline, in an [`AlignedArray`].
///
/// `StaticVec<T, N>` grows and shrinks like a [`Vec`] but never allocates: the
/// storage for all `N` elements is part of the value itself. Cells `[0, len)`
/// hold live elements, cells `[len, N)` hold nothing, and the vector is the
/// only thing that ever constructs or destroys them.
///
/// # Examples
///
/// ```
/// use boundvec::StaticVec;
///
/// let mut vec = StaticVec::<i32, 4>::new();
/// vec.push(3);
/// vec.push(7);
///
/// assert_eq!(vec.len(), 2);
/// assert_eq!(vec[0], 3);
/// assert_eq!(vec.back(), Ok(&7));
///
/// assert_eq!(vec.pop(), Some(7));
/// vec[0] = 19;
///
/// vec.extend([20, 21]);
/// assert_eq!(vec, [19, 20, 21]);
/// ```
///
/// # Capacity
///
/// `N` is fixed at compile time. Nothing ever grows the storage; adding to a
/// full vector is an error ([`try_push`](Self::try_push),
/// [`try_insert`](Self::try_insert)) or a panic ([`push`](Self::push),
/// [`insert`](Self::insert)), and leaves the vector untouched either way.
///
/// ```
/// use boundvec::{Error, StaticVec};
///
/// let mut vec = StaticVec::<char, 3>::from(['a', 'b', 'c']);
/// assert_eq!(vec.try_push('d'), Err(Error::CapacityExceeded { capacity: 3 }));
/// assert_eq!(vec, ['a', 'b', 'c']);
/// ```
///
/// # Indexing
///
/// [`at`](Self::at) is checked and returns a [`Result`]. `vec[i]` panics when
/// `i >= len`, just like slices do; `get` is available through [`Deref`].
///
/// ```
/// use boundvec::{Error, StaticVec};
///
/// let mut vec = StaticVec::<i32, 2>::from([1]);
/// vec.clear();
/// assert!(vec.is_empty());
/// assert_eq!(vec.at(0), Err(Error::IndexOutOfRange { index: 0, len: 0 }));
/// ```
///
/// # Copy and move
///
/// [`Clone`] copies every live element into independent storage. Moving a
/// `StaticVec` is an ordinary Rust move; to move the elements out while
/// keeping the source usable, use [`take`](Self::take), which leaves the
/// source empty.
///
/// ```
/// use boundvec::StaticVec;
///
/// let mut source = StaticVec::<String, 4>::from(["p".to_string(), "q".to_string()]);
/// let moved = source.take();
///
/// assert_eq!(moved, ["p".to_string(), "q".to_string()]);
/// assert!(source.is_empty());
/// ```
pub struct StaticVec<T, const N: usize> {
    pub(crate) data: AlignedArray<T, N>,
    pub(crate) len: usize,
}

impl<T: PartialEq, const N: usize> PartialEq for StaticVec<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len &&
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, const N: usize> Eq for StaticVec<T, N> {}

impl<T: PartialEq, const N: usize, const M: usize> PartialEq<[T; M]> for StaticVec<T, N> {
    fn eq(&self, other: &[T; M]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize, const M: usize> PartialEq<&[T; M]> for StaticVec<T, N> {
    fn eq(&self, other: &&[T; M]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<Vec<T>> for StaticVec<T, N> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T]> for StaticVec<T, N> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<&[T]> for StaticVec<T, N> {
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: Hash, const N: usize> Hash for StaticVec<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for StaticVec<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone, const N: usize> Clone for StaticVec<T, N> {
    fn clone(&self) -> Self {
        let mut vec = Self::new();
        // `len` only grows after each clone lands, so a panicking `T::clone`
        // drops exactly the copies made so far.
        self.iter()
            .for_each(|v| unsafe { vec.push_unchecked(v.clone()) });
        vec
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        source.iter()
            .for_each(|v| unsafe { self.push_unchecked(v.clone()) });
    }
}

impl<T, const N: usize> Default for StaticVec<T, N> {
    #[inline]
    fn default() -> Self { Self::new() }
}

impl <T, const N: usize> Drop for StaticVec<T, N> {
    fn drop(&mut self) { self.clear() }
}

impl <T, const N: usize> Deref for StaticVec<T, N> {
    type Target = [T];
    #[inline]
    fn deref(&self) -> &Self::Target { self.as_slice() }
}

impl <T, const N: usize> DerefMut for StaticVec<T, N> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target { self.as_mut_slice() }
}

impl<T, const N: usize> AsRef<[T]> for StaticVec<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] { self.as_slice() }
}

impl<T, const N: usize> AsMut<[T]> for StaticVec<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] { self.as_mut_slice() }
}

impl<T, const N: usize, I: SliceIndex<[T]>> Index<I> for StaticVec<T, N> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(&**self, index)
    }
}

impl<T, const N: usize, I: SliceIndex<[T]>> IndexMut<I> for StaticVec<T, N> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(&mut **self, index)
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a StaticVec<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut StaticVec<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.iter_mut() }
}

impl<T, const N: usize> IntoIterator for StaticVec<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    /// Consumes the vector, yielding its elements in index order.
    ///
    /// ```
    /// use boundvec::StaticVec;
    ///
    /// let vec = StaticVec::<String, 3>::from(["a".to_string(), "b".to_string()]);
    /// let joined: String = vec.into_iter().collect();
    /// assert_eq!(joined, "ab");
    /// ```
    fn into_iter(self) -> Self::IntoIter {
        let vec = ManuallyDrop::new(self);
        // The storage has no destructor of its own; ownership of the live
        // cells passes to the iterator.
        unsafe { IntoIter::new(ptr::read(&vec.data), vec.len) }
    }
}

impl<T, const N: usize> Extend<T> for StaticVec<T, N> {
    /// # Panics
    ///
    /// Panics once an item arrives with the vector already full. Items taken
    /// before that point stay in the vector.
    fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        items.into_iter().for_each(|value| {
            if self.try_push(value).is_err() {
                panic!("capacity exceeded during operation `extend`")
            }
        });
    }
}

impl<'a, T: Copy + 'a, const N: usize> Extend<&'a T> for StaticVec<T, N> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, items: I) {
        Extend::<T>::extend(self, items.into_iter().copied())
    }
}

impl <T, const N: usize, const M: usize> From<[T; M]> for StaticVec<T, N> {
    /// Create a new instance from an array.
    ///
    /// The array may be shorter than the capacity `N`.
    ///
    /// # Examples
    /// ```
    /// use boundvec::StaticVec;
    ///
    /// let vec = StaticVec::<i32, 3>::from([1, 2]);
    /// assert_eq!(vec.remaining_capacity(), 1);
    /// ```
    /// # Panics
    ///
    /// Panics if the array is longer than `N`.
    /// ```should_panic
    /// use boundvec::StaticVec;
    ///
    /// let vec = StaticVec::<i32, 2>::from([1, 2, 3]); // Panics!
    /// ```
    fn from(arr: [T; M]) -> Self {
        assert!(M <= N, "array of length {M} does not fit a capacity of {N}");

        let arr = ManuallyDrop::new(arr);
        let mut vec = Self::new();

        unsafe { ptr::copy_nonoverlapping(
            arr.as_ptr(),
            vec.data.as_mut_ptr(),
            M
        )}
        vec.len = M;
        vec
    }
}

impl <T, const N: usize> From<Vec<T>> for StaticVec<T, N> {
    /// Create a new instance from a vec.
    ///
    /// # Panics
    ///
    /// Panics if the vec holds more than `N` elements.
    /// ```should_panic
    /// use boundvec::StaticVec;
    ///
    /// let vec = StaticVec::<i32, 2>::from(vec![1, 2, 3]); // Panics!
    /// ```
    fn from(items: Vec<T>) -> Self {
        assert!(items.len() <= N, "vec of length {} does not fit a capacity of {N}", items.len());

        let mut vec = Self::new();
        items.into_iter()
            .for_each(|v| unsafe { vec.push_unchecked(v) });
        vec
    }
}

impl<T: Clone, const N: usize> TryFrom<&[T]> for StaticVec<T, N> {
    type Error = Error;

    /// Clones `items` into a new vector, or fails with
    /// [`Error::CapacityExceeded`] if there are more than `N` of them.
    ///
    /// ```
    /// use boundvec::StaticVec;
    ///
    /// assert!(StaticVec::<u8, 2>::try_from(&[1, 2][..]).is_ok());
    /// assert!(StaticVec::<u8, 2>::try_from(&[1, 2, 3][..]).is_err());
    /// ```
    fn try_from(items: &[T]) -> Result<Self, Self::Error> {
        let mut vec = Self::new();
        vec.try_extend_from_slice(items)?;
        Ok(vec)
    }
}

impl <T, const N: usize> From<StaticVec<T, N>> for Vec<T> {
    fn from(vec: StaticVec<T, N>) -> Self {
        vec.into_iter().collect()
    }
}

impl <T, const N: usize> StaticVec<T, N> {
    /// Constructs a new, empty `StaticVec<T, N>`.
    ///
    /// No element is constructed; the storage for all `N` of them is
    /// reserved inline.
    ///
    /// # Examples
    /// ```
    /// use boundvec::StaticVec;
    ///
    /// let vec = StaticVec::<i32, 3>::new();
    /// assert!(vec.is_empty());
    /// ```
    pub const fn new() -> Self {
        Self {
            data: AlignedArray::new(),
            len: 0,
        }
    }

    /// Returns the number of live elements.
    ///
    /// # Examples
    /// ```
    /// use boundvec::StaticVec;
    ///
    /// let mut vec = StaticVec::<i32, 3>::new();
    /// assert_eq!(vec.len(), 0);
    ///
    /// vec.push(5);
    /// assert_eq!(vec.len(), 1);
    /// ```
    #[inline(always)]
    pub const fn len(&self) -> usize { self.len }

    /// Returns `true` if the vector holds no elements.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool { self.len == 0 }

    /// Returns `true` if every cell holds a live element.
    #[inline(always)]
    pub const fn is_full(&self) -> bool { self.len == N }

    /// The most elements this vector can ever hold, `N`.
    #[inline(always)]
    pub const fn max_size(&self) -> usize { N }

    /// Same as [`max_size`](Self::max_size).
    #[inline(always)]
    pub const fn capacity(&self) -> usize { N }

    /// Returns the remaining capacity of the vector.
    ///
    /// Simply, `N - StaticVec::len`.
    ///
    /// # Examples
    /// ```
    /// use boundvec::StaticVec;
    ///
    /// let mut vec = StaticVec::<i32, 3>::new();
    /// vec.push(1);
    /// vec.push(2);
    /// assert_eq!(vec.remaining_capacity(), 1);
    /// ```
    #[inline(always)]
    pub const fn remaining_capacity(&self) -> usize { N - self.len }

    /// Appends an element to the back of the collection.
    ///
    /// # Panics
    ///
    /// Panics if the vector is already full.
    /// For a panic-free `push`, see [`try_push`](StaticVec::try_push).
    ///
    /// # Examples
    ///
    /// ```
    /// use boundvec::StaticVec;
    ///
    /// let mut vec = StaticVec::<i32, 3>::from([1, 2]);
    /// vec.push(3);
    /// assert_eq!(vec, [1, 2, 3]);
    /// ```
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    #[inline]
    pub fn push(&mut self, value: T) {
        assert!(self.len < N, "capacity exceeded during operation `push`");
        unsafe { self.push_unchecked(value) }
    }

    /// Attempts to append an element to the back of the collection.
    ///
    /// A full vector reports [`Error::CapacityExceeded`] and is left as it
    /// was; `value` is dropped.
    ///
    /// # Examples
    /// ```
    /// use boundvec::StaticVec;
    ///
    /// let mut vec = StaticVec::<i32, 3>::from([1, 2]);
    ///
    /// assert!(vec.try_push(3).is_ok());
    /// assert!(vec.try_push(4).is_err());
    /// assert_eq!(vec, [1, 2, 3]);
    /// ```
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    #[inline]
    pub fn try_push(&mut self, value: T) -> Result<(), Error> {
        if self.len == N { return Err(Error::full(N)) }
        unsafe { self.push_unchecked(value) }
        Ok(())
    }

    /// Constructs a new element at the back from `f` and returns a reference
    /// to it.
    ///
    /// `f` only runs when there is room. If it panics, the vector is
    /// unchanged.
    ///
    /// # Examples
    /// ```
    /// use boundvec::StaticVec;
    ///
    /// let mut vec = StaticVec::<Vec<u8>, 2>::new();
    /// vec.emplace_back(|| Vec::with_capacity(8)).unwrap().push(1);
    ///
    /// assert_eq!(vec[0], [1]);
    /// ```
    #[inline]
    pub fn emplace_back<F: FnOnce() -> T>(&mut self, f: F) -> Result<&mut T, Error> {
        if self.len == N { return Err(Error::full(N)) }
        let index = self.len;
        let slot = unsafe { self.data.emplace_with(index, f) };
        self.len += 1;
        Ok(slot)
    }

    /// Appends an element to the back of the collection without checking
    /// capacity.
    ///
    /// # Safety
    ///
    /// Calling this method on a full `StaticVec` is [undefined behavior](<https://doc.rust-lang.org/reference/behavior-considered-undefined.html>).
    ///
    /// # Examples
    /// ```
    /// use boundvec::StaticVec;
    ///
    /// let mut vec = StaticVec::<i32, 3>::from([1, 2]);
    /// unsafe { vec.push_unchecked(3); }
    /// assert_eq!(vec, [1, 2, 3])
    /// ```
    #[inline(always)]
    pub unsafe fn push_unchecked(&mut self, value: T) {
        debug_assert!(self.len < N);
        unsafe { self.data.emplace(self.len, value); }
        self.len += 1;
    }

    /// Removes the last element and returns it, or `None` if the vector is empty.
    ///
    /// # Examples
    /// ```
    /// use boundvec::StaticVec;
    ///
    /// let mut vec = StaticVec::<i32, 3>::from([1, 2, 3]);
    /// assert_eq!(vec.pop(), Some(3));
    /// ```
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        match self.len == 0 {
            true => None,
            false => unsafe {
                self.len -= 1;
                Some(self.data.read(self.len))
            }
        }
    }

    /// Inserts an element at position `index`, shifting everything after it
    /// one cell toward the back.
    ///
    /// Both the index and the capacity are checked before any element moves,
    /// so the vector is either fully shifted with `value` in place or left
    /// untouched.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index > len`, otherwise
    /// [`Error::CapacityExceeded`] if the vector is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use boundvec::StaticVec;
    ///
    /// let mut vec = StaticVec::<i32, 3>::from([1, 3]);
    /// vec.try_insert(1, 2).unwrap();
    /// assert_eq!(vec, [1, 2, 3]);
    ///
    /// assert!(vec.try_insert(0, 0).is_err());
    /// assert_eq!(vec, [1, 2, 3]);
    /// ```
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(`StaticVec::len - index`) time.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        if index > self.len { return Err(Error::out_of_range(index, self.len)) }
        if self.len == N { return Err(Error::full(N)) }

        unsafe {
            let ptr = self.data.cell_unchecked(index);
            ptr::copy(ptr, ptr.add(1), self.len - index);
            ptr::write(ptr, value);
        }
        self.len += 1;
        Ok(())
    }

    /// Panicking form of [`try_insert`](Self::try_insert).
    ///
    /// # Panics
    ///
    /// Panics if `index > len` or if the vector is full.
    pub fn insert(&mut self, index: usize, value: T) {
        if let Err(err) = self.try_insert(index, value) {
            panic!("insertion failed: {err}")
        }
    }

    /// Inserts an element at the front, shifting every element back by one.
    ///
    /// # Examples
    /// ```
    /// use boundvec::StaticVec;
    ///
    /// let mut vec = StaticVec::<&str, 3>::from(["b", "c"]);
    /// vec.try_prepend("a").unwrap();
    /// assert_eq!(vec, ["a", "b", "c"]);
    /// assert!(vec.try_prepend("z").is_err());
    /// ```
    #[inline]
    pub fn try_prepend(&mut self, value: T) -> Result<(), Error> {
        self.try_insert(0, value)
    }

    /// Removes and returns the element at position `index`, shifting all
    /// elements after it toward the front.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use boundvec::StaticVec;
    ///
    /// let mut vec = StaticVec::<i32, 3>::from([1, 2, 3]);
    /// assert_eq!(vec.remove(1), 2);
    /// assert_eq!(vec, [1, 3]);
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        assert!(index < self.len, "Index out of bounds");
        self.len -= 1;
        unsafe {
            let ptr = self.data.cell_unchecked(index);
            let removed = ptr.read();
            ptr::copy(ptr.add(1), ptr, self.len - index);
            removed
        }
    }

    /// Removes an element and returns it, filling the gap with the last element.
    ///
    /// Doesn't preserve ordering but **is** *O*(1).
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use boundvec::StaticVec;
    ///
    /// let mut vec = StaticVec::<i32, 5>::from([1, 2, 3, 4, 5]);
    /// assert_eq!(vec.swap_remove(2), 3);
    /// assert_eq!(vec, [1, 2, 5, 4]);
    /// ```
    pub fn swap_remove(&mut self, index: usize) -> T {
        assert!(index < self.len, "Index out of bounds");
        self.len -= 1;
        // Both cells come from one base pointer; a second `&mut` borrow of
        // the storage would invalidate the first.
        unsafe {
            let base = self.data.as_mut_ptr();
            let removed = base.add(index).read();
            ptr::copy(base.add(self.len), base.add(index), 1);
            removed
        }
    }

    /// Shortens the vector to `len` elements, destroying the rest in order.
    ///
    /// Has no effect if `len` is not less than the current length.
    ///
    /// ```
    /// use boundvec::StaticVec;
    ///
    /// let mut vec = StaticVec::<i32, 4>::from([1, 2, 3, 4]);
    /// vec.truncate(1);
    /// assert_eq!(vec, [1]);
    /// ```
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len { return }
        let end = mem::replace(&mut self.len, len);
        unsafe { self.data.destroy_range(len, end) }
    }

    /// Destroys every element, front to back, leaving the vector empty.
    ///
    /// The length is zeroed before any destructor runs, so even a panicking
    /// destructor never leaves dead cells counted as live. Clearing an empty
    /// vector does nothing.
    ///
    /// # Examples
    /// ```
    /// use boundvec::StaticVec;
    ///
    /// let mut vec = StaticVec::<String, 2>::from(["x".to_string()]);
    /// vec.clear();
    /// vec.clear();
    /// assert!(vec.is_empty());
    /// ```
    #[inline]
    pub fn clear(&mut self) { self.truncate(0) }

    /// Checked access to the element at `index`.
    ///
    /// # Examples
    /// ```
    /// use boundvec::{Error, StaticVec};
    ///
    /// let vec = StaticVec::<i32, 4>::from([10, 20]);
    /// assert_eq!(vec.at(1), Ok(&20));
    /// assert_eq!(vec.at(2), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        let len = self.len;
        self.as_slice().get(index).ok_or(Error::out_of_range(index, len))
    }

    /// Checked mutable access to the element at `index`.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let len = self.len;
        self.as_mut_slice().get_mut(index).ok_or(Error::out_of_range(index, len))
    }

    /// The first element, or [`Error::EmptyContainer`].
    ///
    /// # Examples
    /// ```
    /// use boundvec::{Error, StaticVec};
    ///
    /// let mut vec = StaticVec::<i32, 2>::new();
    /// assert_eq!(vec.front(), Err(Error::EmptyContainer));
    ///
    /// vec.push(4);
    /// assert_eq!(vec.front(), Ok(&4));
    /// ```
    #[inline]
    pub fn front(&self) -> Result<&T, Error> {
        self.as_slice().first().ok_or(Error::EmptyContainer)
    }

    /// Mutable access to the first element, or [`Error::EmptyContainer`].
    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T, Error> {
        self.as_mut_slice().first_mut().ok_or(Error::EmptyContainer)
    }

    /// The last element, or [`Error::EmptyContainer`].
    #[inline]
    pub fn back(&self) -> Result<&T, Error> {
        self.as_slice().last().ok_or(Error::EmptyContainer)
    }

    /// Mutable access to the last element, or [`Error::EmptyContainer`].
    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T, Error> {
        self.as_mut_slice().last_mut().ok_or(Error::EmptyContainer)
    }

    /// Moves every element into a new vector, leaving this one empty.
    ///
    /// Elements keep their order. The source stays usable afterwards.
    ///
    /// # Examples
    /// ```
    /// use boundvec::StaticVec;
    ///
    /// let mut source = StaticVec::<i32, 4>::from([1, 2]);
    /// let moved = source.take();
    ///
    /// assert_eq!(moved, [1, 2]);
    /// assert_eq!(source.len(), 0);
    /// source.push(3);
    /// ```
    pub fn take(&mut self) -> Self {
        let len = mem::replace(&mut self.len, 0);
        let mut vec = Self::new();

        unsafe { ptr::copy_nonoverlapping(
            self.data.as_ptr(),
            vec.data.as_mut_ptr(),
            len
        )}
        vec.len = len;
        vec
    }

    /// Clones and appends every element of `items`, or none of them.
    ///
    /// # Examples
    /// ```
    /// use boundvec::StaticVec;
    ///
    /// let mut vec = StaticVec::<i32, 3>::from([1]);
    /// assert!(vec.try_extend_from_slice(&[2, 3, 4]).is_err());
    /// assert_eq!(vec, [1]);
    ///
    /// vec.try_extend_from_slice(&[2, 3]).unwrap();
    /// assert_eq!(vec, [1, 2, 3]);
    /// ```
    pub fn try_extend_from_slice(&mut self, items: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        if items.len() > self.remaining_capacity() { return Err(Error::full(N)) }
        items.iter()
            .for_each(|v| unsafe { self.push_unchecked(v.clone()) });
        Ok(())
    }

    /// Removes all elements and returns a double-ended iterator over them.
    ///
    /// The vector is empty as soon as `drain` returns. Elements the iterator
    /// does not yield are destroyed when it is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use boundvec::StaticVec;
    ///
    /// let mut vec = StaticVec::<i32, 3>::from([1, 2, 3]);
    /// let drained: Vec<_> = vec.drain().collect();
    ///
    /// assert_eq!(drained, [1, 2, 3]);
    /// assert!(vec.is_empty());
    /// ```
    pub fn drain(&mut self) -> Drain<'_, T> {
        let len = mem::replace(&mut self.len, 0);
        let iter = unsafe { RawIter::new(self.data.as_mut_ptr(), len) };

        Drain::new(iter)
    }

    /// Extracts a slice containing the live elements.
    ///
    /// Equivalent to `&vec[..]`.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        // Cells below `len` are live, so the slice never covers an
        // uninitialized cell.
        unsafe { self.data.prefix(self.len) }
    }

    /// Extracts a mutable slice containing the live elements.
    #[inline]
    pub const fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { self.data.prefix_mut(self.len) }
    }

    /// The underlying storage.
    ///
    /// Only cells below [`len`](Self::len) are live.
    #[inline]
    pub const fn storage(&self) -> &AlignedArray<T, N> { &self.data }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        cell::{Cell, RefCell},
        collections::hash_map::DefaultHasher,
        panic::{self, AssertUnwindSafe},
        rc::Rc,
    };

    type V = StaticVec<u32, 4>;

    /// Records its id into a shared log when dropped.
    #[derive(Debug)]
    struct Tracked {
        id: u32,
        log: Rc<RefCell<Vec<u32>>>,
    }

    impl Tracked {
        fn new(id: u32, log: &Rc<RefCell<Vec<u32>>>) -> Self {
            Self { id, log: log.clone() }
        }
    }

    impl Clone for Tracked {
        fn clone(&self) -> Self { Self::new(self.id + 100, &self.log) }
    }

    impl PartialEq for Tracked {
        fn eq(&self, other: &Self) -> bool { self.id == other.id }
    }

    impl Drop for Tracked {
        fn drop(&mut self) { self.log.borrow_mut().push(self.id) }
    }

    fn log() -> Rc<RefCell<Vec<u32>>> { Rc::new(RefCell::new(Vec::new())) }

    #[test]
    fn push() {
        let mut vec = V::new();
        vec.push(3);
        vec.push(4);

        assert_eq!(vec[0], 3);
        assert_eq!(vec[1], 4);
        assert_eq!(vec.len(), 2);
    }

    #[test]
    #[should_panic]
    fn push_to_full() {
        let mut vec = V::new();
        for i in 0..4 { vec.push(i); }
        vec.push(4);
    }

    #[test]
    fn try_push_up_to_capacity() {
        let mut vec = V::new();
        for i in 0..4 {
            assert!(vec.try_push(i).is_ok());
            assert_eq!(vec.len(), i as usize + 1);
        }
        assert_eq!(vec.try_push(9), Err(Error::full(4)));
        assert_eq!(vec.len(), 4);
        assert_eq!(vec, [0, 1, 2, 3]);
        assert!(vec.is_full());
    }

    #[test]
    fn try_push_full_drops_rejected_value() {
        let log = log();
        let mut vec = StaticVec::<Tracked, 1>::new();
        vec.try_push(Tracked::new(1, &log)).unwrap();

        assert!(vec.try_push(Tracked::new(2, &log)).is_err());
        assert_eq!(*log.borrow(), [2]);
        assert_eq!(vec[0].id, 1);
    }

    #[test]
    fn capacity_three_scenario() {
        let mut vec = StaticVec::<char, 3>::new();
        vec.try_push('A').unwrap();
        vec.try_push('B').unwrap();
        vec.try_push('C').unwrap();
        assert_eq!(vec.len(), 3);

        assert_eq!(vec.try_push('D'), Err(Error::CapacityExceeded { capacity: 3 }));
        assert_eq!(vec.len(), 3);
        assert_eq!(vec.iter().collect::<String>(), "ABC");
    }

    #[test]
    fn emplace_back() {
        let mut vec = StaticVec::<String, 2>::new();
        vec.emplace_back(|| "a".to_string()).unwrap().push('b');
        vec.emplace_back(String::new).unwrap();

        let mut called = false;
        let full = vec.emplace_back(|| { called = true; String::new() });
        assert_eq!(full, Err(Error::full(2)));
        assert!(!called);
        assert_eq!(vec, ["ab".to_string(), String::new()]);
    }

    #[test]
    fn emplace_back_panic_leaves_vec_intact() {
        let mut vec = StaticVec::<u32, 2>::from([1]);
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let _ = vec.emplace_back(|| panic!("constructor failed"));
        }));

        assert!(result.is_err());
        assert_eq!(vec, [1]);
    }

    #[test]
    fn pop() {
        let mut vec = V::from([3, 4]);
        assert_eq!(vec.pop(), Some(4));
        assert_eq!(vec.len(), 1);

        let mut vec = V::new();
        assert_eq!(vec.pop(), None);
    }

    #[test]
    fn insert() {
        let mut vec = V::from([3, 5, 6]);
        vec.insert(1, 4);

        assert_eq!(vec, [3, 4, 5, 6]);
        assert_eq!(vec.try_insert(2, 0), Err(Error::full(4)));
        assert_eq!(vec, [3, 4, 5, 6]);
    }

    #[test]
    fn try_insert_out_of_range() {
        let mut vec = V::from([3, 4]);
        assert_eq!(vec.try_insert(3, 0), Err(Error::out_of_range(3, 2)));
        vec.try_insert(2, 5).unwrap();
        assert_eq!(vec, [3, 4, 5]);
    }

    #[test]
    #[should_panic]
    fn insert_out_of_bounds() {
        let mut vec = V::from([3, 4]);
        vec.insert(3, 0);
    }

    #[test]
    fn try_prepend() {
        let mut vec = V::new();
        vec.try_prepend(3).unwrap();
        vec.try_prepend(2).unwrap();
        vec.push(4);
        vec.try_prepend(1).unwrap();

        assert_eq!(vec, [1, 2, 3, 4]);
        assert_eq!(vec.try_prepend(0), Err(Error::full(4)));
        assert_eq!(vec, [1, 2, 3, 4]);
    }

    #[test]
    fn prepend_with_drop_types() {
        let log = log();
        {
            let mut vec = StaticVec::<Tracked, 3>::new();
            vec.push(Tracked::new(2, &log));
            vec.try_prepend(Tracked::new(1, &log)).unwrap();
            assert!(log.borrow().is_empty());
            assert_eq!(vec.iter().map(|t| t.id).collect::<Vec<_>>(), [1, 2]);
        }
        assert_eq!(*log.borrow(), [1, 2]);
    }

    #[test]
    fn remove() {
        let mut vec = V::from([3, 4, 5]);
        assert_eq!(vec.remove(1), 4);
        assert_eq!(vec, [3, 5]);
    }

    #[test]
    #[should_panic]
    fn remove_out_of_bounds() {
        let mut vec = V::from([3, 4, 5]);
        vec.remove(3);
    }

    #[test]
    fn swap_remove() {
        let mut vec: StaticVec<String, 3> = StaticVec::from(["aa".to_string(), "bb".to_string(), "cc".to_string()]);
        let removed = vec.swap_remove(0);

        assert_eq!(removed, "aa".to_string());
        assert_eq!(vec, ["cc".to_string(), "bb".to_string()]);

        assert_eq!(vec.swap_remove(1), "bb".to_string());
        assert_eq!(vec, ["cc".to_string()]);
    }

    #[test]
    fn swap_remove_middle_and_last() {
        let mut vec = StaticVec::<String, 4>::from(["a".to_string(), "b".to_string(), "c".to_string(), "d".to_string()]);

        assert_eq!(vec.swap_remove(1), "b".to_string());
        assert_eq!(vec, ["a".to_string(), "d".to_string(), "c".to_string()]);

        assert_eq!(vec.swap_remove(2), "c".to_string());
        assert_eq!(vec, ["a".to_string(), "d".to_string()]);

        vec.push("e".to_string());
        assert_eq!(vec, ["a".to_string(), "d".to_string(), "e".to_string()]);
    }

    #[test]
    fn remove_strings() {
        let mut vec = StaticVec::<String, 3>::from(["a".to_string(), "b".to_string(), "c".to_string()]);

        assert_eq!(vec.remove(0), "a".to_string());
        assert_eq!(vec.remove(1), "c".to_string());
        assert_eq!(vec, ["b".to_string()]);
    }

    #[test]
    fn truncate() {
        let log = log();
        let mut vec = StaticVec::<Tracked, 4>::new();
        (0..4).for_each(|i| vec.push(Tracked::new(i, &log)));

        vec.truncate(5);
        assert_eq!(vec.len(), 4);

        vec.truncate(2);
        assert_eq!(vec.len(), 2);
        assert_eq!(*log.borrow(), [2, 3]);
    }

    #[test]
    fn clear_destroys_in_order() {
        let log = log();
        let mut vec = StaticVec::<Tracked, 4>::new();
        (0..3).for_each(|i| vec.push(Tracked::new(i, &log)));

        vec.clear();
        assert_eq!(vec.len(), 0);
        assert!(vec.is_empty());
        assert_eq!(*log.borrow(), [0, 1, 2]);

        vec.clear();
        assert_eq!(vec.len(), 0);
        assert_eq!(*log.borrow(), [0, 1, 2]);
    }

    #[test]
    fn clear_survives_panicking_destructor() {
        struct Bomb<'a>(u32, &'a Cell<u32>);

        impl Drop for Bomb<'_> {
            fn drop(&mut self) {
                self.1.set(self.1.get() + 1);
                if self.0 == 1 { panic!("boom") }
            }
        }

        let drops = Cell::new(0);
        let mut vec = StaticVec::<Bomb, 3>::new();
        (0..3).for_each(|i| vec.push(Bomb(i, &drops)));

        let result = panic::catch_unwind(AssertUnwindSafe(|| vec.clear()));
        assert!(result.is_err());
        assert_eq!(vec.len(), 0);
        assert_eq!(drops.get(), 3);

        drop(vec);
        assert_eq!(drops.get(), 3);
    }

    #[test]
    fn capacity_two_clear_scenario() {
        let mut vec = StaticVec::<char, 2>::new();
        vec.push('X');
        vec.clear();

        assert!(vec.is_empty());
        assert_eq!(vec.at(0), Err(Error::IndexOutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn at() {
        let mut vec = V::from([1, 2, 3]);
        assert_eq!(vec.at(0), Ok(&1));
        assert_eq!(vec.at(2), Ok(&3));
        assert_eq!(vec.at(3), Err(Error::out_of_range(3, 3)));

        *vec.at_mut(1).unwrap() = 7;
        assert_eq!(vec, [1, 7, 3]);
        assert!(vec.at_mut(3).is_err());
    }

    #[test]
    fn at_never_reads_past_len() {
        let mut vec = V::from([1, 2, 3]);
        vec.pop();
        assert!(vec.at(2).is_err());
        assert!(vec.get(2).is_none());
    }

    #[test]
    fn index() {
        let vec = V::from([1, 2, 3]);
        assert_eq!(vec[0], 1);
        assert_eq!(vec[1..], [2, 3]);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let vec = V::from([1, 2]);
        let _ = vec[2];
    }

    #[test]
    fn index_mut() {
        let mut vec = V::from([1, 2, 3]);
        vec[0] = 7;
        assert_eq!(vec[0], 7);
    }

    #[test]
    fn front_back() {
        let mut vec = V::new();
        assert_eq!(vec.front(), Err(Error::EmptyContainer));
        assert_eq!(vec.back(), Err(Error::EmptyContainer));
        assert!(vec.front_mut().is_err());
        assert!(vec.back_mut().is_err());
        // Querying an empty vector must not conjure an element.
        assert!(vec.is_empty());

        vec.extend([1, 2, 3]);
        assert_eq!(vec.front(), Ok(&1));
        assert_eq!(vec.back(), Ok(&3));

        *vec.front_mut().unwrap() = 0;
        *vec.back_mut().unwrap() = 9;
        assert_eq!(vec, [0, 2, 9]);
    }

    #[test]
    fn sizes() {
        let mut vec = V::from([1]);
        assert_eq!(vec.max_size(), 4);
        assert_eq!(vec.capacity(), 4);
        assert_eq!(vec.remaining_capacity(), 3);
        vec.push(3);
        assert_eq!(vec.remaining_capacity(), 2);
        assert_eq!(vec.storage().size(), 4);
    }

    #[test]
    fn extend() {
        let mut vec = StaticVec::<i32, 16>::from([1, 2]);
        vec.extend([3, 4, 5]);
        vec.extend(&[6]);
        assert_eq!(vec, [1, 2, 3, 4, 5, 6]);

        let mut vec = StaticVec::<(), 16>::from([(), ()]);
        vec.extend([(); 4]);
        assert_eq!(vec, [(); 6]);
    }

    #[test]
    #[should_panic]
    fn extend_panics() {
        let mut vec = StaticVec::<i32, 3>::from([1, 2]);
        vec.extend([3, 4, 5]);
    }

    #[test]
    fn try_extend_from_slice() {
        let mut vec = V::from([1]);
        assert_eq!(vec.try_extend_from_slice(&[2, 3, 4, 5]), Err(Error::full(4)));
        assert_eq!(vec, [1]);
        vec.try_extend_from_slice(&[2, 3, 4]).unwrap();
        assert_eq!(vec, [1, 2, 3, 4]);
    }

    #[test]
    fn drain() {
        let mut vec = V::from([3, 4, 5]);
        let drained = vec.drain().collect::<Vec<u32>>();

        assert_eq!(vec.len(), 0);
        assert_eq!(drained, vec![3, 4, 5]);

        let mut vec = V::from([3, 4]);
        let mut drain = vec.drain();
        assert_eq!(drain.len(), 2);
        assert_eq!(drain.next_back(), Some(4));
        assert_eq!(drain.as_slice(), &[3]);
        assert_eq!(drain.next(), Some(3));
        assert_eq!(drain.next(), None);
    }

    #[test]
    fn drain_drops_remaining() {
        let log = log();
        let mut vec = StaticVec::<Tracked, 4>::new();
        (0..4).for_each(|i| vec.push(Tracked::new(i, &log)));

        let mut drain = vec.drain();
        let first = drain.next().unwrap();
        drop(drain);
        assert_eq!(*log.borrow(), [1, 2, 3]);

        drop(first);
        assert_eq!(*log.borrow(), [1, 2, 3, 0]);
        assert!(vec.is_empty());
    }

    #[test]
    fn drain_strings_dropped_early() {
        let mut vec = StaticVec::<String, 3>::from(["a".to_string(), "b".to_string()]);
        drop(vec.drain());
        assert!(vec.is_empty());

        let mut vec = StaticVec::<String, 3>::from(["a".to_string(), "b".to_string(), "c".to_string()]);
        let mut drain = vec.drain();
        assert_eq!(drain.next(), Some("a".to_string()));
        assert_eq!(drain.next_back(), Some("c".to_string()));
        drop(drain);

        vec.push("d".to_string());
        assert_eq!(vec, ["d".to_string()]);
    }

    #[test]
    fn drain_zst() {
        let mut vec = StaticVec::<(), 2>::from([(), ()]);
        let mut drain = vec.drain();
        assert_eq!(drain.next(), Some(()));
        assert_eq!(drain.next_back(), Some(()));
        assert_eq!(drain.next(), None);
        assert_eq!(drain.next_back(), None);
    }

    #[test]
    fn iter() {
        let vec = V::from([3, 4, 5]);
        let collected = vec.iter()
            .map(|v| *v)
            .collect::<Vec<u32>>();

        assert_eq!(vec, collected);
        // Restartable: a second pass sees the same elements.
        assert_eq!((&vec).into_iter().count(), 3);
    }

    #[test]
    fn iter_mut() {
        let mut vec = V::from([3, 4, 5]);
        for v in &mut vec { *v *= 2; }

        assert_eq!(vec, [6, 8, 10]);
    }

    #[test]
    fn into_iter() {
        let vec = StaticVec::<String, 4>::from(["a".to_string(), "b".to_string(), "c".to_string()]);
        let mut iter = vec.into_iter();

        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next_back(), Some("c".to_string()));
        assert_eq!(iter.as_slice(), ["a".to_string(), "b".to_string()]);
        assert_eq!(iter.next(), Some("a".to_string()));
        assert_eq!(iter.next(), Some("b".to_string()));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn into_iter_drops_remaining() {
        let log = log();
        let mut vec = StaticVec::<Tracked, 4>::new();
        (0..3).for_each(|i| vec.push(Tracked::new(i, &log)));

        let mut iter = vec.into_iter();
        drop(iter.next());
        drop(iter);
        assert_eq!(*log.borrow(), [0, 1, 2]);
    }

    #[test]
    fn into_vec() {
        let vec = V::from([1, 2, 3]);
        assert_eq!(Vec::from(vec), vec![1, 2, 3]);
    }

    #[test]
    fn from_vec() {
        let vec: StaticVec<_, 4> = StaticVec::from(vec!["aa".to_string(), "bb".to_string()]);
        assert_eq!(vec, ["aa".to_string(), "bb".to_string()]);
    }

    #[test]
    #[should_panic]
    fn from_array_too_long() {
        let _ = StaticVec::<i32, 2>::from([1, 2, 3]);
    }

    #[test]
    fn try_from_slice() {
        let vec = StaticVec::<i32, 3>::try_from(&[1, 2][..]).unwrap();
        assert_eq!(vec, [1, 2]);
        assert_eq!(
            StaticVec::<i32, 1>::try_from(&[1, 2][..]),
            Err(Error::full(1))
        );
    }

    #[test]
    fn clone() {
        let vec = StaticVec::<_, 2>::from(["aa".to_string(), "bb".to_string()]);
        assert_eq!(vec, vec.clone());
    }

    #[test]
    fn clone_is_independent() {
        let vec = V::from([1, 2, 3]);
        let mut copy = vec.clone();
        assert_eq!(copy.len(), vec.len());
        (0..3).for_each(|i| assert_eq!(copy[i], vec[i]));

        copy[0] = 9;
        copy.push(4);
        assert_eq!(vec, [1, 2, 3]);
        assert_eq!(copy, [9, 2, 3, 4]);
    }

    #[test]
    fn clone_panic_drops_partial_copy() {
        #[derive(Debug)]
        struct Fragile(u32, Rc<Cell<u32>>);

        impl Clone for Fragile {
            fn clone(&self) -> Self {
                if self.0 == 2 { panic!("cannot clone") }
                Self(self.0, self.1.clone())
            }
        }

        impl Drop for Fragile {
            fn drop(&mut self) { self.1.set(self.1.get() + 1) }
        }

        let drops = Rc::new(Cell::new(0));
        let vec = StaticVec::<Fragile, 3>::from([
            Fragile(0, drops.clone()),
            Fragile(1, drops.clone()),
            Fragile(2, drops.clone()),
        ]);

        let result = panic::catch_unwind(AssertUnwindSafe(|| vec.clone()));
        assert!(result.is_err());
        assert_eq!(drops.get(), 2);
        assert_eq!(vec.len(), 3);
    }

    #[test]
    fn clone_from() {
        let log = log();
        let source = StaticVec::<Tracked, 3>::from([Tracked::new(1, &log), Tracked::new(2, &log)]);
        let mut dest = StaticVec::<Tracked, 3>::from([Tracked::new(7, &log)]);

        dest.clone_from(&source);
        assert_eq!(*log.borrow(), [7]);
        assert_eq!(dest.iter().map(|t| t.id).collect::<Vec<_>>(), [101, 102]);
        assert_eq!(source.len(), 2);
    }

    #[test]
    fn take() {
        let mut source = V::from([5, 6]);
        let moved = source.take();

        assert_eq!(moved, [5, 6]);
        assert_eq!(source.len(), 0);

        source.push(1);
        assert_eq!(source, [1]);
        assert_eq!(moved, [5, 6]);
    }

    #[test]
    fn take_moves_without_dropping() {
        let log = log();
        let mut source = StaticVec::<Tracked, 4>::new();
        source.push(Tracked::new(1, &log));
        source.push(Tracked::new(2, &log));

        let moved = mem::take(&mut source);
        assert!(log.borrow().is_empty());
        assert!(source.is_empty());

        drop(source);
        assert!(log.borrow().is_empty());

        drop(moved);
        assert_eq!(*log.borrow(), [1, 2]);
    }

    #[test]
    fn move_scenario() {
        let mut vec = StaticVec::<char, 4>::new();
        vec.push('P');
        vec.push('Q');

        let moved = vec.take();
        assert_eq!(moved.len(), 2);
        assert_eq!(moved, ['P', 'Q']);
        assert_eq!(vec.len(), 0);
    }

    #[test]
    fn drop_destroys_each_element_once() {
        let log = log();
        {
            let mut vec = StaticVec::<Tracked, 4>::new();
            (0..3).for_each(|i| vec.push(Tracked::new(i, &log)));
            let _ = vec.pop();
        }
        assert_eq!(*log.borrow(), [2, 0, 1]);
    }

    #[test]
    fn as_slice() {
        let mut vec = V::from([3, 4, 5]);
        assert_eq!(vec.as_slice(), [3, 4, 5]);
        assert_eq!(vec.as_mut_slice(), [3, 4, 5]);
    }

    #[test]
    fn partial_eq() {
        let vec = StaticVec::<i32, 2>::from([1, 2]);
        let other = vec![1, 2];
        assert_eq!(vec, [1, 2]);
        assert_eq!(vec, &[1, 2]);
        assert_eq!(vec, *[1, 2].as_slice());
        assert_eq!(vec, other.as_slice());
        assert_eq!(vec, other);
        assert_ne!(vec, StaticVec::<i32, 2>::from([1]));
    }

    #[test]
    fn hash_matches_slice() {
        fn hash_of<H: Hash + ?Sized>(value: &H) -> u64 {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }

        let vec = V::from([1, 2, 3]);
        assert_eq!(hash_of(&vec), hash_of(&[1u32, 2, 3][..]));
    }

    #[test]
    fn zero_capacity() {
        let mut vec = StaticVec::<String, 0>::new();
        assert!(vec.is_full());
        assert_eq!(vec.try_push("x".to_string()), Err(Error::full(0)));
        assert_eq!(vec.front(), Err(Error::EmptyContainer));
    }

    #[test]
    fn zero_sized_elements() {
        let mut vec = StaticVec::<(), 3>::new();
        vec.push(());
        vec.try_prepend(()).unwrap();
        assert_eq!(vec.len(), 2);
        vec.remove(0);
        assert_eq!(vec.into_iter().count(), 1);
    }
}
