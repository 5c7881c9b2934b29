//! Quick sort (Lomuto partition) and intro sort (Hoare partition with
//! insertion-sort and heap-sort fallbacks).

use core::cmp::Ordering;

use log::{debug, trace};

use crate::primitives::{heap_sort_range, insertion_sort_range};

/// Ranges of at most this many elements are finished by insertion sort.
pub const INTRO_INSERTION_THRESHOLD: usize = 16;

/// Quick sort with the last element as pivot.
///
/// No pivot randomization: sorted or reverse-sorted input is O(n²) and
/// recurses `n` levels deep.
pub fn quick_sort<T: Ord>(data: &mut [T]) {
    quick_sort_by(data, T::cmp);
}

pub fn quick_sort_by<T, F>(data: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quick_sort_rec(data, &mut compare);
}

/// Recurses into the shorter side and loops on the longer one, so the
/// stack never grows past O(log n) frames even when the partition degenerates.
fn quick_sort_rec<T, F>(mut data: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while data.len() > 1 {
        let pivot_idx = lomuto_partition(data, compare);
        let (left, right) = core::mem::take(&mut data).split_at_mut(pivot_idx);
        let (_, right) = right.split_at_mut(1);

        if left.len() < right.len() {
            quick_sort_rec(left, compare);
            data = right;
        } else {
            quick_sort_rec(right, compare);
            data = left;
        }
    }
}

/// Partitions around the last element and returns its final index.
#[inline]
fn lomuto_partition<T, F>(data: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let high = data.len() - 1;

    // data[..boundary] < pivot
    let mut boundary = 0;
    for j in 0..high {
        if compare(&data[j], &data[high]) == Ordering::Less {
            data.swap(boundary, j);
            boundary += 1;
        }
    }
    data.swap(boundary, high);
    boundary
}

/// Intro sort: quick sort that switches to heap sort once the recursion
/// budget of `floor(2 * log2(n))` levels is spent, and to insertion sort
/// on ranges of [`INTRO_INSERTION_THRESHOLD`] elements or fewer.
pub fn intro_sort<T: Ord>(data: &mut [T]) {
    intro_sort_by(data, T::cmp);
}

pub fn intro_sort_by<T, F>(data: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if data.len() <= 1 {
        return;
    }

    let depth = depth_budget(data.len());
    trace!("intro sort: {} elements, depth budget {}", data.len(), depth);
    intro_sort_rec(data, depth, &mut compare);
}

/// `floor(2 * log2(len))`, zero for empty input.
fn depth_budget(len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (2.0 * (len as f64).log2()) as usize
}

fn intro_sort_rec<T, F>(data: &mut [T], depth: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if data.len() <= INTRO_INSERTION_THRESHOLD {
        insertion_sort_range(data, compare);
        return;
    }

    if depth == 0 {
        debug!("intro sort: depth budget exhausted, heap sorting {} elements", data.len());
        heap_sort_range(data, compare);
        return;
    }

    let (left_len, right_start) = hoare_partition(data, compare);
    let (left, right) = data.split_at_mut(right_start);
    intro_sort_rec(&mut left[..left_len], depth - 1, compare);
    intro_sort_rec(right, depth - 1, compare);
}

/// Hoare partition around the value of the middle element.
///
/// Returns `(left_len, right_start)`: afterwards `data[..left_len]` holds
/// only elements `<=` the pivot, `data[right_start..]` only elements `>=`
/// it, and anything in between equals the pivot. Both sides are strictly
/// shorter than `data`.
///
/// The pivot is never copied; its index follows it through swaps. Once
/// swapped it lands outside `i..=j` and is never touched again.
fn hoare_partition<T, F>(data: &mut [T], compare: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut pivot = data.len() / 2;
    let mut i = 0;
    let mut j = data.len() - 1;

    while i <= j {
        while compare(&data[i], &data[pivot]) == Ordering::Less {
            i += 1;
        }
        while compare(&data[j], &data[pivot]) == Ordering::Greater {
            j -= 1;
        }

        if i <= j {
            data.swap(i, j);
            if pivot == i {
                pivot = j;
            } else if pivot == j {
                pivot = i;
            }
            i += 1;
            if j == 0 {
                return (0, i);
            }
            j -= 1;
        }
    }

    (j + 1, i)
}
