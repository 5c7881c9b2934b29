//! Base-10 radix sorts for integer slices.
//!
//! [`radix_sort_lsd`] is a stable counting sort per digit and only accepts
//! non-negative values. [`radix_sort_msd`] buckets by signed digit and also
//! handles negative values.

use log::{debug, trace};

use crate::error::{Result, SortError};

const RADIX: i128 = 10;

/// Signed digits -9..=9 shifted by +9.
const MSD_BUCKETS: usize = 19;
const MSD_DIGIT_OFFSET: i128 = 9;

/// Integer types the radix sorts accept.
///
/// Digit arithmetic runs in `i128`, so neither the scale nor the absolute
/// value of `MIN` overflows for any of the implementing types.
pub trait RadixKey: Copy {
    fn to_i128(self) -> i128;
}

macro_rules! impl_radix_key {
    ($($t:ty),*) => {
        $(
            impl RadixKey for $t {
                #[inline]
                fn to_i128(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_radix_key!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Least-significant-digit radix sort. Stable.
///
/// Returns [`SortError::NegativeValue`] for the first negative element and
/// leaves `data` untouched in that case.
pub fn radix_sort_lsd<T: RadixKey>(data: &mut [T]) -> Result<()> {
    if data.len() <= 1 {
        return Ok(());
    }

    if let Some((index, value)) = data
        .iter()
        .map(|v| v.to_i128())
        .enumerate()
        .find(|&(_, v)| v < 0)
    {
        return Err(SortError::NegativeValue { index, value });
    }

    let max = data.iter().map(|v| v.to_i128()).max().unwrap_or(0);
    let mut output = data.to_vec();
    let mut exp: i128 = 1;
    let mut passes = 0u32;

    while max / exp > 0 {
        counting_sort_by_digit(data, &mut output, exp);
        exp *= RADIX;
        passes += 1;
    }

    debug!("radix lsd: {} elements, max {}, {} digit passes", data.len(), max, passes);
    Ok(())
}

#[inline]
fn lsd_digit<T: RadixKey>(value: T, exp: i128) -> usize {
    ((value.to_i128() / exp) % RADIX) as usize
}

/// Stable counting sort of `data` on the digit at scale `exp`.
fn counting_sort_by_digit<T: RadixKey>(data: &mut [T], output: &mut [T], exp: i128) {
    let mut count = [0usize; RADIX as usize];

    // Count occurrences
    for &value in data.iter() {
        count[lsd_digit(value, exp)] += 1;
    }

    // Compute cumulative count
    for i in 1..count.len() {
        count[i] += count[i - 1];
    }

    // Right to left keeps equal digits in their previous order
    for &value in data.iter().rev() {
        let digit = lsd_digit(value, exp);
        count[digit] -= 1;
        output[count[digit]] = value;
    }

    data.copy_from_slice(output);
}

/// Most-significant-digit radix sort, negative values included.
///
/// Each level distributes the range into 19 buckets keyed by the signed
/// digit at the current scale (truncating division, so `-25` has digits
/// `-2, -5`), writes the buckets back from most negative digit to most
/// positive, then recurses into every bucket at the next smaller scale.
pub fn radix_sort_msd<T: RadixKey>(data: &mut [T]) {
    if data.len() <= 1 {
        return;
    }

    let max_abs = data.iter().map(|v| v.to_i128().abs()).max().unwrap_or(0);
    let mut exp: i128 = 1;
    while max_abs / exp >= RADIX {
        exp *= RADIX;
    }

    debug!("radix msd: {} elements, starting scale {}", data.len(), exp);
    msd_rec(data, exp);
}

fn msd_rec<T: RadixKey>(data: &mut [T], exp: i128) {
    if exp == 0 || data.len() <= 1 {
        return;
    }

    let mut buckets: Vec<Vec<T>> = vec![Vec::new(); MSD_BUCKETS];
    for &value in data.iter() {
        let digit = (value.to_i128() / exp) % RADIX;
        buckets[(digit + MSD_DIGIT_OFFSET) as usize].push(value);
    }
    trace!("radix msd: scale {}, {} elements", exp, data.len());

    let mut start = 0;
    for bucket in buckets.iter().filter(|b| !b.is_empty()) {
        let end = start + bucket.len();
        data[start..end].copy_from_slice(bucket);
        msd_rec(&mut data[start..end], exp / RADIX);
        start = end;
    }
}
