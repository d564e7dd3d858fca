//! Top-down stable merge sort
//!
//! Every merge step moves its two runs out into freshly allocated scratch
//! buffers and writes them back in merged order. When the heads of both
//! runs compare equal the left run wins, so equal elements keep their
//! input order.

use std::cmp::Ordering;
use std::ptr;

/// Sort `v` in place using `<=`.
pub fn merge_sort<T: PartialOrd>(v: &mut [T]) {
    merge_sort_with(v, &mut |a: &T, b: &T| a <= b);
}

/// Sort `v` in place with a comparator. Anything but `Greater` keeps the
/// left element first.
pub fn merge_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort_with(v, &mut |a: &T, b: &T| compare(a, b) != Ordering::Greater);
}

/// Recursive driver. `is_le(a, b)` answers "may `a` stay ahead of `b`".
pub(crate) fn merge_sort_with<T, F>(v: &mut [T], is_le: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len <= 1 {
        return;
    }

    // Inclusive split of [0, len - 1]: the left run keeps the middle element.
    let mid = (len - 1) / 2 + 1;
    merge_sort_with(&mut v[..mid], is_le);
    merge_sort_with(&mut v[mid..], is_le);
    merge_runs(v, mid, is_le);
}

/// Merge the sorted runs `v[..mid]` and `v[mid..]`.
fn merge_runs<T, F>(v: &mut [T], mid: usize, is_le: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let n1 = mid;
    let n2 = v.len() - mid;

    // Scratch storage only; both stay at length 0 so they never drop a `T`.
    let mut left: Vec<T> = Vec::with_capacity(n1);
    let mut right: Vec<T> = Vec::with_capacity(n2);

    let dest = v.as_mut_ptr();
    // SAFETY: each scratch buffer has room for its run. From here on every
    // element lives in exactly one scratch slot until `MergeState` writes it
    // back, and `MergeState::drop` writes back whatever is left even if
    // `is_le` panics.
    unsafe {
        ptr::copy_nonoverlapping(dest, left.as_mut_ptr(), n1);
        ptr::copy_nonoverlapping(dest.add(mid), right.as_mut_ptr(), n2);
    }

    let mut state = MergeState {
        left: left.as_ptr(),
        n1,
        i: 0,
        right: right.as_ptr(),
        n2,
        j: 0,
        dest,
        k: 0,
    };

    while state.i < state.n1 && state.j < state.n2 {
        // SAFETY: i < n1 and j < n2 index initialized scratch slots, and
        // k = i + j stays below n1 + n2.
        unsafe {
            let l = state.left.add(state.i);
            let r = state.right.add(state.j);
            if is_le(&*l, &*r) {
                ptr::copy_nonoverlapping(l, state.dest.add(state.k), 1);
                state.i += 1;
            } else {
                ptr::copy_nonoverlapping(r, state.dest.add(state.k), 1);
                state.j += 1;
            }
        }
        state.k += 1;
    }
    // Dropping `state` copies the remaining tail of whichever run is left.
}

/// Cursor over an in-progress merge.
struct MergeState<T> {
    left: *const T,
    n1: usize,
    i: usize,
    right: *const T,
    n2: usize,
    j: usize,
    dest: *mut T,
    k: usize,
}

impl<T> Drop for MergeState<T> {
    fn drop(&mut self) {
        let rest_left = self.n1 - self.i;
        let rest_right = self.n2 - self.j;
        // SAFETY: the unconsumed scratch slots are exactly the
        // `rest_left + rest_right` destination slots starting at `k`.
        unsafe {
            ptr::copy_nonoverlapping(self.left.add(self.i), self.dest.add(self.k), rest_left);
            ptr::copy_nonoverlapping(
                self.right.add(self.j),
                self.dest.add(self.k + rest_left),
                rest_right,
            );
        }
    }
}
