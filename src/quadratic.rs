//! O(n²) sorts: bubble, selection, insertion, gnome, cocktail shaker, shell,
//! and the factorial-time bogo sort.

use core::cmp::Ordering;

use log::debug;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::primitives::{insertion_sort_range, is_sorted_by};

/// Bubble sort. Stops after the first pass without a swap.
pub fn bubble_sort<T: Ord>(data: &mut [T]) {
    bubble_sort_by(data, T::cmp);
}

pub fn bubble_sort_by<T, F>(data: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut n = data.len();
    if n <= 1 {
        return;
    }

    loop {
        let mut swapped = false;
        for i in 1..n {
            if compare(&data[i - 1], &data[i]) == Ordering::Greater {
                data.swap(i - 1, i);
                swapped = true;
            }
        }
        // data[n - 1] now holds the maximum of the active range
        n -= 1;
        if !swapped {
            break;
        }
    }
}

/// Selection sort. Not stable.
pub fn selection_sort<T: Ord>(data: &mut [T]) {
    selection_sort_by(data, T::cmp);
}

pub fn selection_sort_by<T, F>(data: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = data.len();
    if n <= 1 {
        return;
    }

    for i in 0..n - 1 {
        let mut min_index = i;
        for j in i + 1..n {
            if compare(&data[j], &data[min_index]) == Ordering::Less {
                min_index = j;
            }
        }
        data.swap(i, min_index);
    }
}

/// Insertion sort over the full slice.
pub fn insertion_sort<T: Ord>(data: &mut [T]) {
    insertion_sort_by(data, T::cmp);
}

pub fn insertion_sort_by<T, F>(data: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort_range(data, &mut compare);
}

/// Gnome sort: one cursor that steps back after every swap.
pub fn gnome_sort<T: Ord>(data: &mut [T]) {
    gnome_sort_by(data, T::cmp);
}

pub fn gnome_sort_by<T, F>(data: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = data.len();
    let mut i = 1;
    while i < n {
        if i == 0 || compare(&data[i - 1], &data[i]) != Ordering::Greater {
            i += 1;
        } else {
            data.swap(i - 1, i);
            i -= 1;
        }
    }
}

/// Cocktail shaker sort: alternating forward and backward bubble passes.
pub fn cocktail_shaker_sort<T: Ord>(data: &mut [T]) {
    cocktail_shaker_sort_by(data, T::cmp);
}

pub fn cocktail_shaker_sort_by<T, F>(data: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if data.len() <= 1 {
        return;
    }

    let mut start = 0;
    let mut end = data.len() - 1;

    loop {
        // Forward pass pushes the maximum to `end`
        let mut swapped = false;
        for i in start..end {
            if compare(&data[i], &data[i + 1]) == Ordering::Greater {
                data.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
        end -= 1;

        // Backward pass pulls the minimum down to `start`
        swapped = false;
        for i in (start..end).rev() {
            if compare(&data[i], &data[i + 1]) == Ordering::Greater {
                data.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
        start += 1;
    }
}

/// Shell sort with the gap sequence n/2, n/4, ..., 1.
pub fn shell_sort<T: Ord>(data: &mut [T]) {
    shell_sort_by(data, T::cmp);
}

pub fn shell_sort_by<T, F>(data: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = data.len();
    let mut gap = n / 2;
    while gap > 0 {
        for i in gap..n {
            let mut j = i;
            while j >= gap && compare(&data[j - gap], &data[j]) == Ordering::Greater {
                data.swap(j - gap, j);
                j -= gap;
            }
        }
        gap /= 2;
    }
}

/// Bogo sort: shuffle until sorted.
///
/// Expected running time is factorial in `data.len()`; keep inputs tiny.
/// Every call seeds its own generator from OS entropy.
pub fn bogo_sort<T: Ord>(data: &mut [T]) {
    bogo_sort_by(data, T::cmp);
}

pub fn bogo_sort_by<T, F>(data: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut rng = Xoshiro256PlusPlus::from_entropy();
    shuffle_until_sorted(data, &mut rng, compare);
}

/// Bogo sort driven by a caller-owned generator.
pub fn bogo_sort_with_rng<T: Ord, R: Rng + ?Sized>(data: &mut [T], rng: &mut R) {
    shuffle_until_sorted(data, rng, T::cmp);
}

fn shuffle_until_sorted<T, R, F>(data: &mut [T], rng: &mut R, mut compare: F)
where
    R: Rng + ?Sized,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut rounds = 0u64;
    while !is_sorted_by(data, &mut compare) {
        data.shuffle(rng);
        rounds += 1;
    }
    debug!("bogo sort finished {} elements after {} shuffles", data.len(), rounds);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bubble_sorted_input_is_one_pass() {
        let mut comparisons = 0;
        let mut data: Vec<i32> = (0..100).collect();
        bubble_sort_by(&mut data, |a, b| {
            comparisons += 1;
            a.cmp(b)
        });
        assert_eq!(comparisons, 99);
        assert_eq!(data, (0..100).collect::<Vec<_>>());
    }

    fn keyed(keys: &[i32]) -> Vec<(i32, usize)> {
        keys.iter().copied().zip(0..).collect()
    }

    fn assert_stable(data: &[(i32, usize)]) {
        for w in data.windows(2) {
            assert!(w[0].0 <= w[1].0, "{:?} out of order", w);
            if w[0].0 == w[1].0 {
                assert!(w[0].1 < w[1].1, "{:?} swapped equal keys", w);
            }
        }
    }

    const STABILITY_KEYS: [i32; 12] = [3, 1, 2, 3, 1, 2, 0, 3, 1, 0, 2, 1];

    #[test]
    fn test_bubble_sort_is_stable() {
        let mut data = keyed(&STABILITY_KEYS);
        bubble_sort_by(&mut data, |a, b| a.0.cmp(&b.0));
        assert_stable(&data);
    }

    #[test]
    fn test_gnome_sort_is_stable() {
        let mut data = keyed(&STABILITY_KEYS);
        gnome_sort_by(&mut data, |a, b| a.0.cmp(&b.0));
        assert_stable(&data);
    }

    #[test]
    fn test_cocktail_shaker_sort_is_stable() {
        let mut data = keyed(&STABILITY_KEYS);
        cocktail_shaker_sort_by(&mut data, |a, b| a.0.cmp(&b.0));
        assert_stable(&data);
    }

    #[test]
    fn test_selection_sort() {
        let mut data = vec![64, 25, 12, 22, 11];
        selection_sort(&mut data);
        assert_eq!(data, vec![11, 12, 22, 25, 64]);
    }

    #[test]
    fn test_insertion_sort_is_stable() {
        let mut data = vec![(2, 0), (1, 1), (2, 2), (1, 3)];
        insertion_sort_by(&mut data, |a, b| a.0.cmp(&b.0));
        assert_eq!(data, vec![(1, 1), (1, 3), (2, 0), (2, 2)]);
    }

    #[test]
    fn test_gnome_sort() {
        let mut data = vec![5, 3, 9, 1, 4, 7, 2, 6];
        gnome_sort(&mut data);
        assert_eq!(data, vec![1, 2, 3, 4, 5, 6, 7, 9]);
    }

    #[test]
    fn test_cocktail_shaker_moves_small_tail_element() {
        // A "turtle" at the end is fixed by the first backward pass.
        let mut data = vec![2, 3, 4, 5, 6, 7, 8, 1];
        cocktail_shaker_sort(&mut data);
        assert_eq!(data, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_shell_sort_odd_length() {
        let mut data = vec![23, 29, 15, 19, 31, 7, 9, 5, 2];
        shell_sort(&mut data);
        assert_eq!(data, vec![2, 5, 7, 9, 15, 19, 23, 29, 31]);
    }

    #[test]
    fn test_bogo_sort_seeded() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(12345);
        let mut data = vec![4, 2, 5, 1, 3];
        bogo_sort_with_rng(&mut data, &mut rng);
        assert_eq!(data, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_bogo_sort_sorted_input_never_shuffles() {
        let mut data = vec!["a", "b", "c"];
        bogo_sort(&mut data);
        assert_eq!(data, vec!["a", "b", "c"]);
    }
}
