//! Top-down merge sort and the run-aware (natural) merge sort.
//!
//! Both are stable: every merge goes through [`merge_runs`], which lets the
//! left run win ties.

use core::cmp::Ordering;

use log::{debug, trace};

use crate::primitives::merge_runs;

/// A maximal ascending stretch of the slice, as `(start, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Run {
    start: usize,
    len: usize,
}

/// Classic top-down merge sort.
pub fn merge_sort<T: Ord + Clone>(data: &mut [T]) {
    merge_sort_by(data, T::cmp);
}

pub fn merge_sort_by<T, F>(data: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort_rec(data, &mut compare);
}

fn merge_sort_rec<T, F>(data: &mut [T], compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if data.len() <= 1 {
        return;
    }

    let mid = data.len() / 2;
    merge_sort_rec(&mut data[..mid], compare);
    merge_sort_rec(&mut data[mid..], compare);
    merge_runs(data, mid, compare);
}

/// Natural merge sort: detects existing runs, then merges neighbours
/// pairwise until one run is left.
///
/// Already sorted input is a single run and costs `n - 1` comparisons.
pub fn adaptive_merge_sort<T: Ord + Clone>(data: &mut [T]) {
    adaptive_merge_sort_by(data, T::cmp);
}

pub fn adaptive_merge_sort_by<T, F>(data: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if data.len() <= 1 {
        return;
    }

    let mut runs = detect_runs(data, &mut compare);
    debug!("adaptive merge sort: {} runs over {} elements", runs.len(), data.len());

    while runs.len() > 1 {
        let mut merged = Vec::with_capacity(runs.len() / 2 + 1);
        for pair in runs.chunks(2) {
            match *pair {
                [first, second] => {
                    let end = second.start + second.len;
                    merge_runs(&mut data[first.start..end], first.len, &mut compare);
                    merged.push(Run {
                        start: first.start,
                        len: first.len + second.len,
                    });
                }
                // odd one out waits for the next level
                [last] => merged.push(last),
                _ => unreachable!("chunks(2) yields one or two runs"),
            }
        }
        trace!("merge level: {} -> {} runs", runs.len(), merged.len());
        runs = merged;
    }
}

/// Splits `data` into maximal runs covering it without gaps or overlaps.
///
/// Strictly descending stretches are reversed in place so every recorded
/// run is ascending. Only strict descents are reversed; reversing equal
/// neighbours would break stability.
fn detect_runs<T, F>(data: &mut [T], compare: &mut F) -> Vec<Run>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = data.len();
    let mut runs = Vec::new();
    let mut i = 0;

    while i < n {
        let start = i;
        i += 1;

        if i < n {
            if compare(&data[i - 1], &data[i]) == Ordering::Greater {
                i += 1;
                while i < n && compare(&data[i - 1], &data[i]) == Ordering::Greater {
                    i += 1;
                }
                data[start..i].reverse();
            } else {
                i += 1;
                while i < n && compare(&data[i - 1], &data[i]) != Ordering::Greater {
                    i += 1;
                }
            }
        }

        runs.push(Run {
            start,
            len: i - start,
        });
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn by_key(a: &(i32, usize), b: &(i32, usize)) -> Ordering {
        a.0.cmp(&b.0)
    }

    #[test]
    fn test_merge_sort() {
        let mut data = vec![38, 27, 43, 3, 9, 82, 10];
        merge_sort(&mut data);
        assert_eq!(data, vec![3, 9, 10, 27, 38, 43, 82]);
    }

    #[test]
    fn test_merge_sort_is_stable() {
        let keys = [3, 1, 3, 2, 1, 3, 2, 1];
        let mut data: Vec<(i32, usize)> = keys.iter().copied().zip(0..).collect();
        merge_sort_by(&mut data, by_key);
        assert_eq!(
            data,
            vec![(1, 1), (1, 4), (1, 7), (2, 3), (2, 6), (3, 0), (3, 2), (3, 5)]
        );
    }

    #[test]
    fn test_detect_runs_reverses_descents() {
        let mut data = vec![1, 2, 3, 9, 7, 5, 5, 6, 0];
        let runs = detect_runs(&mut data, &mut |a: &i32, b: &i32| a.cmp(b));
        assert_eq!(
            runs,
            vec![
                Run { start: 0, len: 4 },
                Run { start: 4, len: 2 },
                Run { start: 6, len: 2 },
                Run { start: 8, len: 1 },
            ]
        );
        assert_eq!(data, vec![1, 2, 3, 9, 5, 7, 5, 6, 0]);
    }

    #[test]
    fn test_detect_runs_covers_slice() {
        let mut data = vec![5, 4, 4, 3, 8, 9, 1, 2, 2, 0];
        let runs = detect_runs(&mut data, &mut |a: &i32, b: &i32| a.cmp(b));
        let mut expected_start = 0;
        for run in &runs {
            assert_eq!(run.start, expected_start);
            assert!(run.len >= 1);
            expected_start += run.len;
        }
        assert_eq!(expected_start, data.len());
    }

    #[test]
    fn test_adaptive_merge_sort_odd_run_count() {
        // Five runs: the last one is carried over unmerged on the first two levels.
        let mut data = vec![9, 8, 1, 2, 7, 6, 3, 4, 5, 0];
        adaptive_merge_sort(&mut data);
        assert_eq!(data, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_adaptive_merge_sort_is_stable() {
        let keys = [2, 2, 1, 1, 3, 0, 2, 1];
        let mut data: Vec<(i32, usize)> = keys.iter().copied().zip(0..).collect();
        adaptive_merge_sort_by(&mut data, by_key);
        assert_eq!(
            data,
            vec![(0, 5), (1, 2), (1, 3), (1, 7), (2, 0), (2, 1), (2, 6), (3, 4)]
        );
    }

    #[test]
    fn test_adaptive_merge_sort_sorted_input_is_linear() {
        let mut data: Vec<u32> = (0..1000).collect();
        let mut comparisons = 0usize;
        adaptive_merge_sort_by(&mut data, |a, b| {
            comparisons += 1;
            a.cmp(b)
        });
        assert_eq!(comparisons, 999);
        assert_eq!(data, (0..1000).collect::<Vec<_>>());
    }

    #[test]
    fn test_adaptive_merge_sort_reverse_input_is_one_run() {
        let mut data: Vec<u32> = (0..1000).rev().collect();
        let mut comparisons = 0usize;
        adaptive_merge_sort_by(&mut data, |a, b| {
            comparisons += 1;
            a.cmp(b)
        });
        assert_eq!(comparisons, 999);
        assert_eq!(data, (0..1000).collect::<Vec<_>>());
    }
}
