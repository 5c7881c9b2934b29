//! Range-scoped building blocks shared by the hybrid sorts.
//!
//! A "range" is always a sub-slice: callers slice the working sequence and
//! hand the piece over, so none of these helpers need start/end offsets.

use core::cmp::Ordering;

/// Returns `true` when no adjacent pair is out of order under `compare`.
pub fn is_sorted_by<T, F>(data: &[T], compare: &mut F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    data.windows(2).all(|w| compare(&w[0], &w[1]) != Ordering::Greater)
}

/// Insertion sort over the whole of `data`.
///
/// The key at position `i` moves left past every strictly greater
/// predecessor, so equal keys never cross each other.
#[inline]
pub fn insertion_sort_range<T, F>(data: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && compare(&data[j - 1], &data[j]) == Ordering::Greater {
            data.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Restores the max-heap property for the subtree rooted at `root`,
/// considering only the first `len` elements of `data`.
///
/// A child is promoted only when it is strictly greater than the node.
#[inline]
pub fn sift_down<T, F>(data: &mut [T], root: usize, len: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut largest = root;
    let left = 2 * root + 1;
    let right = 2 * root + 2;

    if left < len && compare(&data[left], &data[largest]) == Ordering::Greater {
        largest = left;
    }
    if right < len && compare(&data[right], &data[largest]) == Ordering::Greater {
        largest = right;
    }

    if largest != root {
        data.swap(root, largest);
        sift_down(data, largest, len, compare);
    }
}

/// Heap sort over the whole of `data`.
pub fn heap_sort_range<T, F>(data: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = data.len();
    if n <= 1 {
        return;
    }

    // Build max heap
    for i in (0..n / 2).rev() {
        sift_down(data, i, n, compare);
    }

    // Move the current maximum behind the shrinking heap
    for end in (1..n).rev() {
        data.swap(0, end);
        sift_down(data, 0, end, compare);
    }
}

/// Merges the sorted runs `data[..mid]` and `data[mid..]` in place.
///
/// Both runs are copied into temporary buffers first. On ties the left run
/// wins, which keeps the merge stable.
pub fn merge_runs<T, F>(data: &mut [T], mid: usize, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if mid == 0 || mid >= data.len() {
        return;
    }

    let mut left = data[..mid].to_vec().into_iter().peekable();
    let mut right = data[mid..].to_vec().into_iter().peekable();

    for slot in data.iter_mut() {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(l, r) != Ordering::Greater,
            (Some(_), None) => true,
            (None, _) => false,
        };
        let next = if take_left { left.next() } else { right.next() };
        if let Some(value) = next {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_sorted_by() {
        let mut cmp = |a: &i32, b: &i32| a.cmp(b);
        assert!(is_sorted_by::<i32, _>(&[], &mut cmp));
        assert!(is_sorted_by(&[1], &mut cmp));
        assert!(is_sorted_by(&[1, 1, 2, 3], &mut cmp));
        assert!(!is_sorted_by(&[1, 3, 2], &mut cmp));
    }

    #[test]
    fn test_insertion_sort_range_on_subslice() {
        let mut data = vec![9, 5, 4, 3, 2, 0];
        insertion_sort_range(&mut data[1..5], &mut |a: &i32, b: &i32| a.cmp(b));
        assert_eq!(data, vec![9, 2, 3, 4, 5, 0]);
    }

    #[test]
    fn test_heap_sort_range_on_subslice() {
        let mut data = vec![100, 7, 3, 9, 1, 8, 2, -1];
        heap_sort_range(&mut data[1..7], &mut |a: &i32, b: &i32| a.cmp(b));
        assert_eq!(data, vec![100, 1, 2, 3, 7, 8, 9, -1]);
    }

    #[test]
    fn test_sift_down_keeps_node_on_tie() {
        // Root equals its larger child: nothing moves.
        let mut data = vec![(5, 'a'), (5, 'b'), (1, 'c')];
        sift_down(&mut data, 0, 3, &mut |a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0));
        assert_eq!(data, vec![(5, 'a'), (5, 'b'), (1, 'c')]);
    }

    #[test]
    fn test_merge_runs_left_wins_ties() {
        let mut data = vec![(1, 'a'), (3, 'b'), (1, 'c'), (2, 'd'), (3, 'e')];
        merge_runs(&mut data, 2, &mut |a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0));
        assert_eq!(data, vec![(1, 'a'), (1, 'c'), (2, 'd'), (3, 'b'), (3, 'e')]);
    }

    #[test]
    fn test_merge_runs_degenerate_split() {
        let mut data = vec![3, 1, 2];
        merge_runs(&mut data, 0, &mut |a: &i32, b: &i32| a.cmp(b));
        assert_eq!(data, vec![3, 1, 2]);
        merge_runs(&mut data, 3, &mut |a: &i32, b: &i32| a.cmp(b));
        assert_eq!(data, vec![3, 1, 2]);
    }
}
