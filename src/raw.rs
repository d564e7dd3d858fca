//! Manually managed element storage
//!
//! `RawBuffer` owns an allocation of `capacity` slots and nothing else. It
//! never knows which slots hold live values; callers pass the live prefix
//! length whenever storage is relocated.

use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};

use crate::error::{DynArrayError, Result};

pub(crate) struct RawBuffer<T> {
    /// Start of the allocation, dangling while `cap == 0` or `T` is zero-sized.
    ptr: NonNull<T>,
    /// Number of slots in the allocation.
    cap: usize,
    /// Tells the drop checker we own values of type `T`.
    _marker: PhantomData<T>,
}

impl<T> RawBuffer<T> {
    pub(crate) const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// Allocate exactly `capacity` slots. Zero allocates nothing.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut buf = Self::new();
        if capacity > 0 {
            buf.grow_to(capacity, 0);
        }
        buf
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    pub(crate) fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    #[inline]
    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Make room for one more element: 1 slot when empty, otherwise double.
    pub(crate) fn grow_one(&mut self, len: usize) {
        let new_cap = next_capacity(self.cap).unwrap_or_else(|| capacity_overflow());
        self.grow_to(new_cap, len);
    }

    /// Make room for `required` slots, doubling from the current capacity.
    pub(crate) fn reserve_for(&mut self, required: usize, len: usize) {
        if required <= self.cap {
            return;
        }
        let new_cap = capacity_for(self.cap, required).unwrap_or_else(|| capacity_overflow());
        self.grow_to(new_cap, len);
    }

    /// Fallible form of [`reserve_for`](Self::reserve_for).
    pub(crate) fn try_reserve_for(&mut self, required: usize, len: usize) -> Result<()> {
        if required <= self.cap {
            return Ok(());
        }
        let new_cap = capacity_for(self.cap, required).ok_or(DynArrayError::CapacityOverflow)?;
        self.try_grow_to(new_cap, len)
    }

    /// Infallible growth: overflow panics, allocator failure aborts.
    pub(crate) fn grow_to(&mut self, new_cap: usize, len: usize) {
        match self.try_grow_to(new_cap, len) {
            Ok(()) => {}
            Err(DynArrayError::AllocationFailed { .. }) => match Layout::array::<T>(new_cap) {
                Ok(layout) => alloc::handle_alloc_error(layout),
                Err(_) => capacity_overflow(),
            },
            Err(_) => capacity_overflow(),
        }
    }

    /// Move the first `len` elements into a fresh allocation of `new_cap`
    /// slots, then release the old one.
    ///
    /// On error nothing has been touched: the old allocation and its
    /// elements are still in place.
    pub(crate) fn try_grow_to(&mut self, new_cap: usize, len: usize) -> Result<()> {
        debug_assert!(len <= self.cap);
        debug_assert!(new_cap >= self.cap);

        let layout = Layout::array::<T>(new_cap).map_err(|_| DynArrayError::CapacityOverflow)?;
        let new_ptr = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            // SAFETY: layout has a non-zero size.
            let raw = unsafe { alloc::alloc(layout) };
            NonNull::new(raw.cast::<T>()).ok_or(DynArrayError::AllocationFailed {
                bytes: layout.size(),
            })?
        };

        // SAFETY: the new allocation holds at least `len` slots and cannot
        // overlap the old one. After the copy the old slots are treated as
        // uninitialized, so every value is moved, never duplicated.
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), len);
        }

        let old_cap = mem::replace(&mut self.cap, new_cap);
        let old_ptr = mem::replace(&mut self.ptr, new_ptr);
        // SAFETY: old_ptr/old_cap describe the allocation we just left.
        unsafe { release(old_ptr, old_cap) };

        log::trace!("relocated {} elements: capacity {} -> {}", len, old_cap, new_cap);
        Ok(())
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        // SAFETY: ptr/cap always describe our own allocation (or none).
        unsafe { release(self.ptr, self.cap) };
    }
}

// SAFETY: RawBuffer owns its `T`s exactly like `Box<[T]>` does.
unsafe impl<T: Send> Send for RawBuffer<T> {}
unsafe impl<T: Sync> Sync for RawBuffer<T> {}

/// Free an allocation made by `try_grow_to`. Does not drop elements.
///
/// # Safety
///
/// `ptr` must come from `alloc::alloc` with `Layout::array::<T>(cap)`, or
/// that layout must have size zero.
unsafe fn release<T>(ptr: NonNull<T>, cap: usize) {
    if cap == 0 || mem::size_of::<T>() == 0 {
        return;
    }
    if let Ok(layout) = Layout::array::<T>(cap) {
        // SAFETY: upheld by the caller.
        unsafe { alloc::dealloc(ptr.as_ptr().cast::<u8>(), layout) };
    }
}

fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}

/// Capacity after a single-element growth step.
pub(crate) fn next_capacity(cap: usize) -> Option<usize> {
    if cap == 0 { Some(1) } else { cap.checked_mul(2) }
}

/// Smallest capacity reachable by doubling from `cap` (or 1) that holds
/// `required` slots.
pub(crate) fn capacity_for(cap: usize, required: usize) -> Option<usize> {
    let mut new_cap = cap.max(1);
    while new_cap < required {
        new_cap = new_cap.checked_mul(2)?;
    }
    Some(new_cap)
}
