//! Behavioral tests for `DynamicArray` through its public API

use dynarray::{DynArrayError, DynamicArray, dynarray};

/// Element whose ordering ignores its tag, for stability checks
#[derive(Clone, Debug)]
struct Tagged {
    key: u32,
    tag: char,
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.key.partial_cmp(&other.key)
    }
}

fn tagged(pairs: &[(u32, char)]) -> DynamicArray<Tagged> {
    pairs.iter().map(|&(key, tag)| Tagged { key, tag }).collect()
}

fn tags(array: &DynamicArray<Tagged>) -> String {
    array.iter().map(|t| t.tag).collect()
}

// ============================================================
// Append / Access
// ============================================================

#[test]
fn test_push_back_preserves_order() {
    let mut array = DynamicArray::new();
    for i in 0..100 {
        array.push_back(i * 3);
    }
    assert_eq!(array.size(), 100);
    for i in 0..100 {
        assert_eq!(*array.at(i).unwrap(), i * 3);
    }
}

#[test]
fn test_at_bounds() {
    let array = dynarray![10, 20, 30];
    assert_eq!(*array.at(2).unwrap(), 30);
    assert!(matches!(
        array.at(3),
        Err(DynArrayError::IndexOutOfRange { index: 3, len: 3 })
    ));
    assert!(array.get(3).is_none());
}

#[test]
fn test_at_mut_writes_through() {
    let mut array = dynarray![1, 2, 3];
    *array.at_mut(1).unwrap() = 42;
    array[2] += 1;
    assert_eq!(array, [1, 42, 4]);
}

#[test]
fn test_front_back() {
    let mut array = dynarray![4, 5, 6];
    assert_eq!(*array.front().unwrap(), 4);
    assert_eq!(*array.back().unwrap(), 6);
    *array.back_mut().unwrap() = 9;
    *array.front_mut().unwrap() = 0;
    assert_eq!(array, [0, 5, 9]);
}

#[test]
fn test_empty_container_errors() {
    let mut array: DynamicArray<i32> = DynamicArray::new();
    assert!(matches!(array.front(), Err(DynArrayError::EmptyContainer { op: "front" })));
    assert!(matches!(array.back(), Err(DynArrayError::EmptyContainer { op: "back" })));
    assert!(matches!(
        array.pop_back(),
        Err(DynArrayError::EmptyContainer { op: "pop_back" })
    ));
    assert_eq!(array.len(), 0);
    assert_eq!(array.capacity(), 0);
}

#[test]
fn test_error_messages() {
    let array: DynamicArray<i32> = DynamicArray::new();
    assert_eq!(
        array.at(0).unwrap_err().to_string(),
        "index 0 out of range for length 0"
    );
    assert_eq!(
        array.back().unwrap_err().to_string(),
        "back() called on empty container"
    );
}

#[test]
fn test_pop_back() {
    let mut array = dynarray![1, 2, 3];
    assert_eq!(array.pop_back().unwrap(), 3);
    assert_eq!(array.size(), 2);
    assert_eq!(array.capacity(), 3);
    assert_eq!(array, [1, 2]);
}

// ============================================================
// Insert / Resize / Clear
// ============================================================

#[test]
fn test_insert_shifts_tail() {
    let mut array = dynarray!['a', 'b', 'c', 'd'];
    array.insert(1, 'x').unwrap();
    assert_eq!(array, ['a', 'x', 'b', 'c', 'd']);
    array.insert(0, 'y').unwrap();
    assert_eq!(array, ['y', 'a', 'x', 'b', 'c', 'd']);
}

#[test]
fn test_insert_at_len_appends() {
    let mut array = dynarray![1, 2];
    array.insert(2, 3).unwrap();
    assert_eq!(array, [1, 2, 3]);

    let mut empty = DynamicArray::new();
    empty.insert(0, "only").unwrap();
    assert_eq!(empty, ["only"]);
    assert_eq!(empty.capacity(), 1);
}

#[test]
fn test_insert_out_of_range() {
    let mut array: DynamicArray<i32> = DynamicArray::new();
    assert!(matches!(
        array.insert(1, 5),
        Err(DynArrayError::IndexOutOfRange { index: 1, len: 0 })
    ));
    assert!(array.is_empty());
}

#[test]
fn test_resize_up_fills_default() {
    let mut array = dynarray![String::from("a")];
    array.resize(3);
    assert_eq!(array, ["a", "", ""]);
    assert!(array.capacity() >= 3);
}

#[test]
fn test_resize_down_truncates() {
    let mut array = dynarray![1, 2, 3, 4, 5];
    array.resize(2);
    assert_eq!(array, [1, 2]);
    assert_eq!(array.capacity(), 5);
    array.resize(2);
    assert_eq!(array, [1, 2]);
}

#[test]
fn test_resize_after_truncate_yields_defaults() {
    let mut array = dynarray![7, 8, 9];
    array.resize(1);
    array.resize(3);
    assert_eq!(array, [7, 0, 0]);
}

#[test]
fn test_clear_then_reuse() {
    let mut array = dynarray![1, 2, 3, 4];
    array.clear();
    assert_eq!(array.size(), 0);
    assert_eq!(array.capacity(), 4);
    array.extend([5, 6]);
    assert_eq!(array, [5, 6]);
    assert_eq!(array.capacity(), 4);
}

// ============================================================
// Sort
// ============================================================

#[test]
fn test_sort_basic() {
    let mut array = dynarray![5, 3, 1, 4, 2];
    array.sort();
    assert_eq!(array, [1, 2, 3, 4, 5]);
}

#[test]
fn test_sort_idempotent() {
    let mut array = dynarray![9, 1, 8, 2, 7, 3];
    array.sort();
    let once = array.clone();
    array.sort();
    assert_eq!(array, once);
}

#[test]
fn test_sort_stable_with_tagged_duplicates() {
    let mut array = tagged(&[(3, 'a'), (1, 'b'), (3, 'c'), (2, 'd'), (1, 'e'), (3, 'f')]);
    array.sort();
    assert_eq!(tags(&array), "bedacf");
}

#[test]
fn test_sort_trivial_lengths() {
    let mut empty: DynamicArray<i32> = DynamicArray::new();
    empty.sort();
    assert!(empty.is_empty());

    let mut one = dynarray![1];
    one.sort();
    assert_eq!(one, [1]);
}

#[test]
fn test_sort_by_descending_is_stable() {
    let mut array = tagged(&[(1, 'a'), (2, 'b'), (1, 'c'), (2, 'd')]);
    array.sort_by(|a, b| b.key.cmp(&a.key));
    assert_eq!(tags(&array), "bdac");
}

// ============================================================
// Merge
// ============================================================

#[test]
fn test_merge_sorted_union() {
    let mut a = dynarray![3, 1];
    let b = dynarray![2, 2];
    a.merge(&b);
    assert_eq!(a, [1, 2, 2, 3]);
    assert_eq!(b, [2, 2]);
}

#[test]
fn test_merge_with_empty() {
    let mut a = dynarray![2, 1];
    a.merge(&DynamicArray::new());
    assert_eq!(a, [1, 2]);

    let mut empty: DynamicArray<i32> = DynamicArray::new();
    empty.merge(&DynamicArray::new());
    assert!(empty.is_empty());
    assert_eq!(empty.capacity(), 0);
}

#[test]
fn test_merge_keeps_own_elements_first_on_ties() {
    let mut a = tagged(&[(1, 'a'), (2, 'b')]);
    let b = tagged(&[(1, 'x'), (2, 'y')]);
    a.merge(&b);
    assert_eq!(tags(&a), "axby");
}

#[test]
fn test_merge_by_reverse() {
    let mut a = dynarray![1, 5];
    let b = dynarray![3];
    a.merge_by(&b, |x, y| y.cmp(x));
    assert_eq!(a, [5, 3, 1]);
}

// ============================================================
// Construction / Copy / Move
// ============================================================

#[test]
fn test_literal_list_keeps_order() {
    let array = dynarray![5, 3, 1];
    assert_eq!(array.size(), 3);
    assert_eq!(array.capacity(), 3);
    assert_eq!(array, [5, 3, 1]);
}

#[test]
fn test_sized_fill() {
    let array = dynarray![String::from("x"); 3];
    assert_eq!(array, ["x", "x", "x"]);
    assert_eq!(array.capacity(), 3);

    let none: DynamicArray<u8> = DynamicArray::from_elem(0, 1);
    assert_eq!(none.capacity(), 0);
}

#[test]
fn test_empty_macro() {
    let array: DynamicArray<u8> = dynarray![];
    assert!(array.is_empty());
}

#[test]
fn test_copy_is_independent() {
    let a = dynarray![1, 2, 3];
    let mut b = a.clone();
    b.push_back(4);
    b[0] = 100;
    assert_eq!(a, [1, 2, 3]);
    assert_eq!(b, [100, 2, 3, 4]);
}

#[test]
fn test_move_leaves_source_reusable() {
    let mut a = dynarray![1, 2, 3];
    let b = std::mem::take(&mut a);
    assert_eq!(b, [1, 2, 3]);
    assert_eq!(a.size(), 0);
    a.push_back(9);
    assert_eq!(a, [9]);
}

#[test]
fn test_move_assign_replaces_contents() {
    let mut a = dynarray![1];
    let mut b = dynarray![7, 8];
    assert_eq!(a, [1]);
    a = std::mem::take(&mut b);
    assert_eq!(a, [7, 8]);
    assert!(b.is_empty());
}

#[test]
fn test_conversions() {
    let from_vec = DynamicArray::from(vec![1, 2]);
    let from_slice = DynamicArray::from(&[1, 2][..]);
    let collected: DynamicArray<i32> = (1..=2).collect();
    assert_eq!(from_vec, from_slice);
    assert_eq!(from_slice, collected);
    assert_eq!(from_vec, vec![1, 2]);
    assert_eq!(from_vec, &[1, 2][..]);
}

#[test]
fn test_iteration_in_index_order() {
    let mut array = dynarray![1, 2, 3];
    for value in &mut array {
        *value *= 10;
    }
    let seen: Vec<i32> = array.iter().copied().collect();
    assert_eq!(seen, vec![10, 20, 30]);
    assert_eq!(array.as_slice(), &[10, 20, 30]);
}
