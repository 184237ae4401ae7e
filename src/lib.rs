//! A circular dynamic array with embedded order-statistics algorithms.
//!
//! `CircularArray` has `O(1)` amortized inserts and removals at both ends of
//! the container and `O(1)` indexing like a vector. Storage is a single owned
//! buffer addressed through a front offset: logical index `i` lives in
//! physical slot `(front + i) % capacity`.
//!
//! The buffer doubles when an insert finds it full and halves when a removal
//! leaves it less than a quarter full. Every reallocation copies the elements
//! into the new buffer in logical order, starting at slot 0.
//!
//! On top of the container sit in-place selection (randomized quickselect and
//! a worst-case linear median-of-medians select), a stable merge sort, an LSD
//! radix sort and linear/binary search. All of them address the elements by
//! logical index, so they work unchanged when the contents wrap around the end
//! of the buffer.
//!
//! # Usage
//!
//! First, add the following to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! cdarray = "0.1"
//! ```
//!
//! # Capacity
//!
//! A fresh array has capacity 2. Capacity doubles when full and halves when
//! `len * 4 < capacity`, but never drops below `max(len, 1)`.
//!
//! # Examples
//! ```
//! use cdarray::CircularArray;
//!
//! let mut array = CircularArray::new();
//! assert_eq!(array.capacity(), 2);
//!
//! array.add_end(1);
//! array.add_end(2);
//! array.add_end(3);
//! array.add_front(0);
//! assert_eq!(array.to_vec(), vec![0, 1, 2, 3]);
//!
//! assert_eq!(array.del_front(), Ok(0));
//! assert_eq!(array.del_end(), Ok(3));
//! assert_eq!(array.len(), 2);
//! ```
//!
//! # Selection & Sorting
//! ```
//! use cdarray::CircularArray;
//!
//! let mut array: CircularArray<i32> = vec![5, 3, 8, 1, 9, 2].into_iter().collect();
//!
//! assert_eq!(array.quick_select(3), Ok(3));
//! assert_eq!(array.worst_case_select(3), Ok(3));
//!
//! array.stable_sort();
//! assert_eq!(array.to_vec(), vec![1, 2, 3, 5, 8, 9]);
//! assert_eq!(array.binary_search(&8), Some(4));
//! ```
//!
//! # Reference validity
//!
//! References returned by `at`, `get` and indexing borrow the array, so the
//! borrow checker rejects holding one across `add_*`/`del_*`. Those calls may
//! reallocate the buffer; positions (logical indices) stay meaningful across
//! them, physical slots do not.

#![deny(missing_docs)]

use std::cmp;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter;
use std::mem::MaybeUninit;
use std::ops::{Index, IndexMut};
use std::slice;

use log::{trace, warn};

pub use odds::IndexRange as RangeArgument;

mod radix;
mod search;
mod select;
mod sort;
mod utils;

pub mod error;
pub mod script;

pub use crate::error::{Error, Result};
pub use crate::radix::RadixKey;

use crate::utils::{slot_after, slot_before};

/// Capacity of a freshly constructed or cleared array.
pub const INITIAL_CAPACITY: usize = 2;

/// A growable ring buffer.
///
/// The "default" usage of this type as a queue is to use `add_end` to add to
/// the queue, and `del_front` to remove from the queue. `extend` pushes onto
/// the back in this manner, and iterating over `CircularArray` goes front to
/// back.
///
/// Selection, sorting and radix sorting reorder the elements in place.
pub struct CircularArray<T> {
    buf: Box<[MaybeUninit<T>]>,
    front: usize,
    len: usize,
}

fn new_buffer<T>(capacity: usize) -> Box<[MaybeUninit<T>]> {
    iter::repeat_with(MaybeUninit::uninit)
        .take(capacity)
        .collect::<Vec<_>>()
        .into_boxed_slice()
}

impl<T> CircularArray<T> {
    /// Translates a logical index into its physical slot.
    #[inline]
    fn physical(&self, index: usize) -> usize {
        slot_after(self.front, index, self.capacity())
    }

    /// Logical element `index` without a bounds check against `len`.
    #[inline]
    pub(crate) fn slot(&self, index: usize) -> &T {
        debug_assert!(index < self.len, "slot {} len {}", index, self.len);
        let at = self.physical(index);
        // Every slot in `front .. front + len` (mod capacity) is initialized.
        unsafe { self.buf[at].assume_init_ref() }
    }

    #[inline]
    pub(crate) fn slot_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len, "slot {} len {}", index, self.len);
        let at = self.physical(index);
        unsafe { self.buf[at].assume_init_mut() }
    }

    /// Swaps two logical elements; both must be `< len`.
    #[inline]
    pub(crate) fn swap_slots(&mut self, i: usize, j: usize) {
        debug_assert!(i < self.len && j < self.len);
        let (pi, pj) = (self.physical(i), self.physical(j));
        self.buf.swap(pi, pj);
    }

    /// Moves the live elements into a fresh buffer of `capacity` slots,
    /// logical index 0 landing in slot 0.
    fn relocate(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.len);
        trace!("relocating {} elements: capacity {} -> {}", self.len, self.capacity(), capacity);

        let mut fresh = new_buffer(capacity);
        for (index, slot) in fresh.iter_mut().take(self.len).enumerate() {
            let at = self.physical(index);
            // The old buffer is dropped as `MaybeUninit`, so each element is
            // moved out exactly once.
            *slot = MaybeUninit::new(unsafe { self.buf[at].assume_init_read() });
        }
        self.buf = fresh;
        self.front = 0;
    }

    fn grow(&mut self) {
        let capacity = cmp::max(self.capacity(), 1);
        self.relocate(capacity * 2);
    }

    fn shrink(&mut self) {
        let capacity = cmp::max(cmp::max(self.capacity() / 2, self.len), 1);
        if capacity < self.capacity() {
            self.relocate(capacity);
        }
    }

    #[inline]
    fn shrink_if_sparse(&mut self) {
        if self.len * 4 < self.capacity() {
            self.shrink();
        }
    }

    fn take_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let front = self.front;
        let element = unsafe { self.buf[front].assume_init_read() };
        self.front = slot_after(front, 1, self.capacity());
        self.len -= 1;
        self.shrink_if_sparse();
        Some(element)
    }

    fn take_end(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.len -= 1;
        let end = self.physical(self.len);
        let element = unsafe { self.buf[end].assume_init_read() };
        self.shrink_if_sparse();
        Some(element)
    }

    fn drop_elements(&mut self) {
        let len = self.len;
        // Forget the elements first so a panicking destructor leaks instead
        // of dropping twice.
        self.len = 0;
        for index in 0..len {
            let at = self.physical(index);
            unsafe { self.buf[at].assume_init_drop() }
        }
    }
}

impl<T> CircularArray<T> {
    /// Creates an empty `CircularArray` with capacity 2.
    ///
    /// # Examples
    ///
    /// ```
    /// use cdarray::CircularArray;
    ///
    /// let array: CircularArray<usize> = CircularArray::new();
    /// assert_eq!(array.len(), 0);
    /// assert_eq!(array.capacity(), 2);
    /// ```
    #[inline]
    pub fn new() -> CircularArray<T> {
        CircularArray {
            buf: new_buffer(INITIAL_CAPACITY),
            front: 0,
            len: 0,
        }
    }

    /// Creates a `CircularArray` holding `size` default values, with
    /// capacity exactly `size`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cdarray::CircularArray;
    ///
    /// let array: CircularArray<i32> = CircularArray::with_len(10);
    /// assert_eq!(array.len(), 10);
    /// assert_eq!(array.capacity(), 10);
    /// assert_eq!(array[9], 0);
    /// ```
    pub fn with_len(size: usize) -> CircularArray<T>
        where T: Default
    {
        let buf = iter::repeat_with(|| MaybeUninit::new(T::default()))
            .take(size)
            .collect::<Vec<_>>()
            .into_boxed_slice();
        CircularArray {
            buf,
            front: 0,
            len: size,
        }
    }

    /// Retrieves an element by logical index.
    ///
    /// Element at index 0 is the front of the array.
    ///
    /// # Examples
    ///
    /// ```
    /// use cdarray::CircularArray;
    ///
    /// let mut array = CircularArray::new();
    /// array.add_end(3);
    /// array.add_end(4);
    /// array.add_end(5);
    /// assert_eq!(array.get(1), Some(&4));
    /// assert_eq!(array.get(3), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            Some(self.slot(index))
        } else {
            None
        }
    }

    /// Retrieves an element mutably by logical index.
    ///
    /// # Examples
    ///
    /// ```
    /// use cdarray::CircularArray;
    ///
    /// let mut array = CircularArray::new();
    /// array.add_end(3);
    /// array.add_end(4);
    /// if let Some(elem) = array.get_mut(1) {
    ///     *elem = 7;
    /// }
    /// assert_eq!(array[1], 7);
    /// ```
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            Some(self.slot_mut(index))
        } else {
            None
        }
    }

    /// Checked access by logical index.
    ///
    /// Fails with `Error::IndexOutOfRange` when `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cdarray::{CircularArray, Error};
    ///
    /// let array: CircularArray<i32> = CircularArray::with_len(10);
    /// assert_eq!(array.at(3), Ok(&0));
    /// assert_eq!(array.at(11), Err(Error::IndexOutOfRange { index: 11, len: 10 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T> {
        let len = self.len;
        self.get(index).ok_or_else(|| out_of_range(index, len))
    }

    /// Checked mutable access by logical index.
    ///
    /// # Examples
    ///
    /// ```
    /// use cdarray::CircularArray;
    ///
    /// let mut array: CircularArray<i32> = CircularArray::with_len(10);
    /// for i in 0..array.len() {
    ///     *array.at_mut(i).unwrap() = i as i32 * 4;
    /// }
    /// assert!(array.at_mut(11).is_err());
    /// assert_eq!(array[9], 36);
    /// ```
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;
        self.get_mut(index).ok_or_else(|| out_of_range(index, len))
    }

    /// Swaps elements at logical indices `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use cdarray::CircularArray;
    ///
    /// let mut array: CircularArray<_> = vec![3, 4, 5].into_iter().collect();
    /// array.swap(0, 2);
    /// assert_eq!(array.to_vec(), vec![5, 4, 3]);
    /// ```
    #[inline]
    pub fn swap(&mut self, i: usize, j: usize) {
        assert!(i < self.len);
        assert!(j < self.len);
        self.swap_slots(i, j);
    }

    /// Appends an element to the end, doubling the buffer first if it is
    /// full.
    ///
    /// # Examples
    ///
    /// ```
    /// use cdarray::CircularArray;
    ///
    /// let mut array = CircularArray::new();
    /// array.add_end(1);
    /// array.add_end(2);
    /// array.add_end(3);
    /// assert_eq!(array.capacity(), 4);
    /// assert_eq!(array.back(), Some(&3));
    /// ```
    pub fn add_end(&mut self, element: T) {
        if self.len == self.capacity() {
            self.grow();
        }
        let end = self.physical(self.len);
        self.buf[end] = MaybeUninit::new(element);
        self.len += 1;
    }

    /// Prepends an element to the front, doubling the buffer first if it is
    /// full.
    ///
    /// # Examples
    ///
    /// ```
    /// use cdarray::CircularArray;
    ///
    /// let mut array = CircularArray::new();
    /// array.add_end(1);
    /// array.add_front(0);
    /// assert_eq!(array.front(), Some(&0));
    /// ```
    pub fn add_front(&mut self, element: T) {
        if self.is_empty() {
            return self.add_end(element);
        }
        if self.len == self.capacity() {
            self.grow();
        }
        self.front = slot_before(self.front, self.capacity());
        let front = self.front;
        self.buf[front] = MaybeUninit::new(element);
        self.len += 1;
    }

    /// Removes and returns the last element.
    ///
    /// Fails with `Error::EmptyContainer` when there is nothing to remove.
    /// Halves the buffer when the array ends up less than a quarter full.
    ///
    /// # Examples
    ///
    /// ```
    /// use cdarray::{CircularArray, Error};
    ///
    /// let mut array = CircularArray::new();
    /// assert_eq!(array.del_end(), Err(Error::EmptyContainer));
    /// array.add_end(1);
    /// array.add_end(3);
    /// assert_eq!(array.del_end(), Ok(3));
    /// ```
    pub fn del_end(&mut self) -> Result<T> {
        self.take_end().ok_or_else(empty)
    }

    /// Removes and returns the first element.
    ///
    /// # Examples
    ///
    /// ```
    /// use cdarray::{CircularArray, Error};
    ///
    /// let mut array = CircularArray::new();
    /// array.add_end(1);
    /// array.add_end(2);
    /// assert_eq!(array.del_front(), Ok(1));
    /// assert_eq!(array.del_front(), Ok(2));
    /// assert_eq!(array.del_front(), Err(Error::EmptyContainer));
    /// ```
    pub fn del_front(&mut self) -> Result<T> {
        self.take_front().ok_or_else(empty)
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the array contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use cdarray::CircularArray;
    ///
    /// let mut array = CircularArray::new();
    /// assert!(array.is_empty());
    /// array.add_front(1);
    /// assert!(!array.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the backing buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Drops every element and returns to the freshly constructed state:
    /// length 0, capacity 2.
    ///
    /// # Examples
    ///
    /// ```
    /// use cdarray::CircularArray;
    ///
    /// let mut array: CircularArray<u8> = CircularArray::with_len(40);
    /// array.clear();
    /// assert!(array.is_empty());
    /// assert_eq!(array.capacity(), 2);
    /// ```
    pub fn clear(&mut self) {
        self.drop_elements();
        self.buf = new_buffer(INITIAL_CAPACITY);
        self.front = 0;
    }

    /// Provides a reference to the front element, or `None` if the array is
    /// empty.
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Provides a reference to the back element, or `None` if the array is
    /// empty.
    pub fn back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|last| self.get(last))
    }

    /// Returns a pair of slices which contain, in order, the contents of the
    /// array.
    ///
    /// # Examples
    ///
    /// ```
    /// use cdarray::CircularArray;
    ///
    /// let mut array = CircularArray::new();
    /// array.add_end(0);
    /// array.add_end(1);
    /// array.add_end(2);
    /// assert_eq!(array.as_slices(), (&[0, 1, 2][..], &[][..]));
    ///
    /// array.add_front(10);
    /// assert_eq!(array.as_slices(), (&[10][..], &[0, 1, 2][..]));
    /// ```
    pub fn as_slices(&self) -> (&[T], &[T]) {
        if self.is_empty() {
            return (&[], &[]);
        }
        let first = cmp::min(self.len, self.capacity() - self.front);
        let ptr = self.buf.as_ptr() as *const T;
        // `front .. front + first` and `0 .. len - first` are initialized and
        // disjoint.
        unsafe {
            (slice::from_raw_parts(ptr.add(self.front), first),
             slice::from_raw_parts(ptr, self.len - first))
        }
    }

    /// Returns a pair of mutable slices which contain, in order, the
    /// contents of the array.
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        if self.is_empty() {
            return (&mut [], &mut []);
        }
        let first = cmp::min(self.len, self.capacity() - self.front);
        let ptr = self.buf.as_mut_ptr() as *mut T;
        unsafe {
            (slice::from_raw_parts_mut(ptr.add(self.front), first),
             slice::from_raw_parts_mut(ptr, self.len - first))
        }
    }

    /// Returns a front-to-back iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use cdarray::CircularArray;
    ///
    /// let mut array = CircularArray::new();
    /// array.add_end(5);
    /// array.add_end(3);
    /// array.add_front(4);
    /// let c: Vec<&i32> = array.iter().collect();
    /// assert_eq!(c, vec![&4, &5, &3]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<T> {
        let (a, b) = self.as_slices();
        Iter { inner: a.iter().chain(b.iter()) }
    }

    /// Returns a front-to-back iterator that returns mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use cdarray::CircularArray;
    ///
    /// let mut array: CircularArray<i32> = vec![5, 3, 4].into_iter().collect();
    /// for num in array.iter_mut() {
    ///     *num -= 2;
    /// }
    /// assert_eq!(array.to_vec(), vec![3, 1, 2]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<T> {
        let (a, b) = self.as_mut_slices();
        IterMut { inner: a.iter_mut().chain(b.iter_mut()) }
    }

    /// Returns `true` if the array contains an element equal to `x`.
    pub fn contains(&self, x: &T) -> bool
        where T: PartialEq
    {
        let (a, b) = self.as_slices();
        a.contains(x) || b.contains(x)
    }

    /// Copies the elements, in logical order, into a `Vec`.
    pub fn to_vec(&self) -> Vec<T>
        where T: Clone
    {
        self.iter().cloned().collect()
    }
}

#[cold]
fn out_of_range(index: usize, len: usize) -> Error {
    warn!("index {} out of range for length {}", index, len);
    Error::IndexOutOfRange { index, len }
}

#[cold]
fn empty() -> Error {
    warn!("trying to delete an element from an empty array");
    Error::EmptyContainer
}

impl<T> Drop for CircularArray<T> {
    fn drop(&mut self) {
        self.drop_elements();
    }
}

impl<T> Default for CircularArray<T> {
    #[inline]
    fn default() -> Self {
        CircularArray::new()
    }
}

/// Deep copy with the same capacity; the copy starts at slot 0.
impl<T: Clone> Clone for CircularArray<T> {
    fn clone(&self) -> Self {
        let mut buf = new_buffer(self.capacity());
        for (slot, element) in buf.iter_mut().zip(self.iter()) {
            *slot = MaybeUninit::new(element.clone());
        }
        CircularArray {
            buf,
            front: 0,
            len: self.len,
        }
    }
}

impl<T: PartialEq> PartialEq for CircularArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

#[cfg(test)]
impl<T: PartialEq> PartialEq<Vec<T>> for CircularArray<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.len == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CircularArray<T> {}

impl<T: Hash> Hash for CircularArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        let (a, b) = self.as_slices();
        Hash::hash_slice(a, state);
        Hash::hash_slice(b, state);
    }
}

impl<T> Index<usize> for CircularArray<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(element) => element,
            None => panic!("index out of bounds: the len is {} but the index is {}",
                           self.len,
                           index),
        }
    }
}

impl<T> IndexMut<usize> for CircularArray<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Some(element) => element,
            None => panic!("index out of bounds: the len is {} but the index is {}",
                           len,
                           index),
        }
    }
}

impl<T> iter::FromIterator<T> for CircularArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = CircularArray::new();
        array.extend(iter);
        array
    }
}

impl<T> Extend<T> for CircularArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add_end(element);
        }
    }
}

impl<T> IntoIterator for CircularArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self }
    }
}

impl<'a, T> IntoIterator for &'a CircularArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut CircularArray<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

/// `CircularArray` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct Iter<'a, T: 'a> {
    inner: iter::Chain<slice::Iter<'a, T>, slice::Iter<'a, T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.next_back()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

/// `CircularArray` mutable iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IterMut<'a, T: 'a> {
    inner: iter::Chain<slice::IterMut<'a, T>, slice::IterMut<'a, T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        self.inner.next_back()
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

/// A by-value `CircularArray` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IntoIter<T> {
    inner: CircularArray<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.take_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.take_end()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
