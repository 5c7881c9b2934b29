use core::cmp::Ordering;

use crate::primitives::heap_sort_range;

/// Heap sort - O(n log n) worst case, in-place, not stable
pub fn heap_sort<T: Ord>(data: &mut [T]) {
    heap_sort_by(data, T::cmp);
}

pub fn heap_sort_by<T, F>(data: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    heap_sort_range(data, &mut compare);
}
