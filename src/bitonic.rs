//! Bitonic sort for power-of-two lengths.

use core::cmp::Ordering;

use crate::error::{Result, SortError};

/// Target order of a bitonic sort or merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// Whether a pair comparing as `ord` has to be swapped.
    #[inline]
    fn needs_swap(self, ord: Ordering) -> bool {
        match self {
            Direction::Ascending => ord == Ordering::Greater,
            Direction::Descending => ord == Ordering::Less,
        }
    }
}

/// Bitonic sort into ascending order.
///
/// Fails with [`SortError::NotPowerOfTwo`] before touching `data` unless
/// its length is 0, 1 or a power of two.
pub fn bitonic_sort<T: Ord>(data: &mut [T]) -> Result<()> {
    bitonic_sort_by(data, T::cmp)
}

pub fn bitonic_sort_by<T, F>(data: &mut [T], compare: F) -> Result<()>
where
    F: FnMut(&T, &T) -> Ordering,
{
    bitonic_sort_directed_by(data, Direction::Ascending, compare)
}

/// Bitonic sort into the requested direction.
pub fn bitonic_sort_directed<T: Ord>(data: &mut [T], direction: Direction) -> Result<()> {
    bitonic_sort_directed_by(data, direction, T::cmp)
}

pub fn bitonic_sort_directed_by<T, F>(
    data: &mut [T],
    direction: Direction,
    mut compare: F,
) -> Result<()>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = data.len();
    if len <= 1 {
        return Ok(());
    }
    if !len.is_power_of_two() {
        return Err(SortError::NotPowerOfTwo { len });
    }

    bitonic_sort_rec(data, direction, &mut compare);
    Ok(())
}

/// Sorts the first half ascending and the second half descending, which
/// makes `data` bitonic, then merges it in `direction`.
fn bitonic_sort_rec<T, F>(data: &mut [T], direction: Direction, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if data.len() <= 1 {
        return;
    }

    let half = data.len() / 2;
    let (lo, hi) = data.split_at_mut(half);
    bitonic_sort_rec(lo, Direction::Ascending, compare);
    bitonic_sort_rec(hi, Direction::Descending, compare);
    bitonic_merge(data, direction, compare);
}

/// Turns a bitonic `data` into a monotonic one.
fn bitonic_merge<T, F>(data: &mut [T], direction: Direction, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if data.len() <= 1 {
        return;
    }

    let half = data.len() / 2;
    for i in 0..half {
        if direction.needs_swap(compare(&data[i], &data[i + half])) {
            data.swap(i, i + half);
        }
    }

    let (lo, hi) = data.split_at_mut(half);
    bitonic_merge(lo, direction, compare);
    bitonic_merge(hi, direction, compare);
}
