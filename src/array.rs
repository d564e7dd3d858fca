//! Growable contiguous array with explicit capacity management
//!
//! Live elements always occupy `[0, len)` of the buffer. Growth follows two
//! policies: single-element growth (push, insert) starts at 1 and doubles;
//! sized growth (merge, resize, reserve) doubles from the current capacity
//! until the requested size fits.

use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};
use std::ptr;
use std::slice;

use crate::error::{DynArrayError, Result};
use crate::raw::RawBuffer;
use crate::sort::merge_sort_with;

/// Creates a [`DynamicArray`] from a literal list or a fill value.
///
/// ```
/// use dynarray::dynarray;
///
/// let v = dynarray![5, 3, 1];
/// assert_eq!(v, [5, 3, 1]);
///
/// let zeros = dynarray![0u8; 4];
/// assert_eq!(zeros.len(), 4);
/// ```
#[macro_export]
macro_rules! dynarray {
    () => {
        $crate::DynamicArray::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::DynamicArray::from_elem($n, $elem)
    };
    ($($elem:expr),+ $(,)?) => {
        $crate::DynamicArray::from([$($elem),+])
    };
}

/// A resizable array backed by a single owned buffer.
pub struct DynamicArray<T> {
    buf: RawBuffer<T>,
    /// Number of initialized elements at the front of `buf`.
    len: usize,
}

impl<T> DynamicArray<T> {
    /// Empty array. Does not allocate.
    pub const fn new() -> Self {
        Self {
            buf: RawBuffer::new(),
            len: 0,
        }
    }

    /// Empty array with exactly `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: RawBuffer::with_capacity(capacity),
            len: 0,
        }
    }

    /// `n` clones of `value`, in a buffer of exactly `n` slots.
    pub fn from_elem(n: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut array = Self::with_capacity(n);
        for _ in 0..n {
            // SAFETY: capacity is exactly `n` and `len < n` here.
            unsafe { array.write_next(value.clone()) };
        }
        array
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Alias for [`len`](Self::len).
    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[0, len)` is initialized; the pointer is non-null and aligned.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as above, and we hold the only borrow.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Checked element access.
    pub fn at(&self, index: usize) -> Result<&T> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(DynArrayError::IndexOutOfRange { index, len })
    }

    /// Checked mutable element access.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(DynArrayError::IndexOutOfRange { index, len })
    }

    pub fn front(&self) -> Result<&T> {
        self.as_slice()
            .first()
            .ok_or(DynArrayError::EmptyContainer { op: "front" })
    }

    pub fn back(&self) -> Result<&T> {
        self.as_slice()
            .last()
            .ok_or(DynArrayError::EmptyContainer { op: "back" })
    }

    pub fn front_mut(&mut self) -> Result<&mut T> {
        self.as_mut_slice()
            .first_mut()
            .ok_or(DynArrayError::EmptyContainer { op: "front" })
    }

    pub fn back_mut(&mut self) -> Result<&mut T> {
        self.as_mut_slice()
            .last_mut()
            .ok_or(DynArrayError::EmptyContainer { op: "back" })
    }

    /// Append `value`, doubling capacity when full. Amortized O(1).
    pub fn push_back(&mut self, value: T) {
        if self.len == self.buf.capacity() {
            self.buf.grow_one(self.len);
        }
        // SAFETY: there is at least one free slot.
        unsafe { self.write_next(value) };
    }

    /// Remove and return the last element.
    pub fn pop_back(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(DynArrayError::EmptyContainer { op: "pop_back" });
        }
        self.len -= 1;
        // SAFETY: slot `len` was live and is now outside the live prefix,
        // so reading it out transfers ownership exactly once.
        Ok(unsafe { ptr::read(self.buf.as_ptr().add(self.len)) })
    }

    /// Insert `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// `index == len` appends. O(len - index).
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(DynArrayError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        if self.len == self.buf.capacity() {
            self.buf.grow_one(self.len);
        }
        // SAFETY: capacity > len, so the shifted tail ends inside the
        // buffer. `ptr::copy` handles the overlap.
        unsafe {
            let slot = self.buf.as_mut_ptr().add(index);
            ptr::copy(slot, slot.add(1), self.len - index);
            ptr::write(slot, value);
        }
        self.len += 1;
        Ok(())
    }

    /// Drop every element, keeping the allocation.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Drop the elements at `[new_len, len)`. No effect if `new_len >= len`.
    /// Capacity is retained.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let dead = self.len - new_len;
        // Shrink first so a panicking destructor cannot cause a double drop.
        self.len = new_len;
        // SAFETY: the tail was live and is no longer reachable.
        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(self.buf.as_mut_ptr().add(new_len), dead);
            ptr::drop_in_place(tail);
        }
    }

    /// Set the length to `new_size`.
    ///
    /// Growing fills `[len, new_size)` with `T::default()` and reserves per
    /// the sized-growth policy. Shrinking truncates, dropping the cut
    /// elements immediately.
    pub fn resize(&mut self, new_size: usize)
    where
        T: Default,
    {
        if new_size <= self.len {
            self.truncate(new_size);
            return;
        }
        self.buf.reserve_for(new_size, self.len);
        while self.len < new_size {
            // SAFETY: capacity >= new_size > len.
            unsafe { self.write_next(T::default()) };
        }
    }

    /// Reserve room for `additional` more elements without aborting.
    ///
    /// On error the array is unchanged.
    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        let required = self
            .len
            .checked_add(additional)
            .ok_or(DynArrayError::CapacityOverflow)?;
        self.buf.try_reserve_for(required, self.len)
    }

    /// Stable merge sort using `<=`. No-op for fewer than two elements.
    pub fn sort(&mut self)
    where
        T: PartialOrd,
    {
        merge_sort_with(self.as_mut_slice(), &mut |a: &T, b: &T| a <= b);
    }

    /// Stable merge sort with a comparator.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        merge_sort_with(self.as_mut_slice(), &mut |a: &T, b: &T| {
            compare(a, b) != Ordering::Greater
        });
    }

    /// Stable merge sort by an extracted key.
    pub fn sort_by_key<K, F>(&mut self, mut key: F)
    where
        K: PartialOrd,
        F: FnMut(&T) -> K,
    {
        merge_sort_with(self.as_mut_slice(), &mut |a: &T, b: &T| key(a) <= key(b));
    }

    /// Append clones of `other`'s elements, then sort everything.
    ///
    /// The result is the sorted multiset union; `other` is untouched.
    pub fn merge(&mut self, other: &DynamicArray<T>)
    where
        T: Clone + PartialOrd,
    {
        self.append_cloned(other.as_slice());
        self.sort();
        log::debug!("merged {} elements, length now {}", other.len, self.len);
    }

    /// [`merge`](Self::merge) with a comparator.
    pub fn merge_by<F>(&mut self, other: &DynamicArray<T>, compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        self.append_cloned(other.as_slice());
        self.sort_by(compare);
        log::debug!("merged {} elements, length now {}", other.len, self.len);
    }

    /// Exchange contents with `other` without touching any element.
    pub fn swap(&mut self, other: &mut DynamicArray<T>) {
        mem::swap(self, other);
    }

    fn append_cloned(&mut self, items: &[T])
    where
        T: Clone,
    {
        let required = self
            .len
            .checked_add(items.len())
            .unwrap_or_else(|| panic!("capacity overflow"));
        self.buf.reserve_for(required, self.len);
        for item in items {
            // SAFETY: capacity >= required.
            unsafe { self.write_next(item.clone()) };
        }
    }

    /// Write `value` into slot `len` and make it live.
    ///
    /// # Safety
    ///
    /// `len < capacity` must hold.
    #[inline]
    unsafe fn write_next(&mut self, value: T) {
        debug_assert!(self.len < self.buf.capacity());
        // SAFETY: upheld by the caller.
        unsafe { ptr::write(self.buf.as_mut_ptr().add(self.len), value) };
        self.len += 1;
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        // SAFETY: drops the live prefix exactly once; RawBuffer frees memory.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) };
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    /// Deep copy into a buffer sized to `self.len()`, not `self.capacity()`.
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.len);
        copy.append_cloned(self.as_slice());
        copy
    }

    /// Copy-and-swap: the old contents are released only after the copy
    /// has fully succeeded.
    fn clone_from(&mut self, source: &Self) {
        let mut fresh = source.clone();
        self.swap(&mut fresh);
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, U> PartialEq<DynamicArray<U>> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &DynamicArray<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T, U, const N: usize> PartialEq<[U; N]> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == &other[..]
    }
}

impl<T, U> PartialEq<&[U]> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, U> PartialEq<Vec<U>> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    /// Panics when `index >= len()`. Use [`DynamicArray::at`] for a checked form.
    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.at_mut(index) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    /// Literal-list construction: exactly `N` slots, elements in list order.
    fn from(items: [T; N]) -> Self {
        let mut array = Self::with_capacity(N);
        for item in items {
            // SAFETY: capacity is exactly N.
            unsafe { array.write_next(item) };
        }
        array
    }
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    fn from(items: &[T]) -> Self {
        let mut array = Self::with_capacity(items.len());
        array.append_cloned(items);
        array
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(items: Vec<T>) -> Self {
        let mut array = Self::with_capacity(items.len());
        for item in items {
            // SAFETY: capacity equals the source length.
            unsafe { array.write_next(item) };
        }
        array
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
