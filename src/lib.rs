//! Sorting Algorithm Library
//!
//! Classic sorting algorithms over mutable slices, from bubble sort to intro
//! sort, plus two base-10 radix sorts for integers. Every algorithm sorts in
//! place into non-decreasing order and comes in two flavours:
//!
//! * `xxx_sort(&mut data)` orders through [`Ord`];
//! * `xxx_sort_by(&mut data, |a, b| ...)` takes a three-way comparison.
//!
//! Algorithms with a precondition (bitonic sort needs a power-of-two length,
//! LSD radix sort needs non-negative values) validate it up front and return
//! a [`SortError`] without touching the input.
//!
//! ```
//! use sort_methods::{intro_sort, radix_sort_msd, bitonic_sort, SortError};
//!
//! let mut words = vec!["Juan", "Ana", "Pedro", "Luis"];
//! intro_sort(&mut words);
//! assert_eq!(words, ["Ana", "Juan", "Luis", "Pedro"]);
//!
//! let mut nums = vec![-5, 3, -1, 0, 2];
//! radix_sort_msd(&mut nums);
//! assert_eq!(nums, [-5, -1, 0, 2, 3]);
//!
//! let mut odd = vec![3, 1, 2];
//! assert_eq!(bitonic_sort(&mut odd), Err(SortError::NotPowerOfTwo { len: 3 }));
//! ```

pub mod bitonic;
pub mod error;
pub mod heap;
pub mod merge;
pub mod primitives;
pub mod quadratic;
pub mod quick;
pub mod radix;
pub mod sorters;

pub use bitonic::{
    bitonic_sort, bitonic_sort_by, bitonic_sort_directed, bitonic_sort_directed_by, Direction,
};
pub use error::{Result, SortError};
pub use heap::{heap_sort, heap_sort_by};
pub use merge::{adaptive_merge_sort, adaptive_merge_sort_by, merge_sort, merge_sort_by};
pub use quadratic::{
    bogo_sort, bogo_sort_by, bogo_sort_with_rng, bubble_sort, bubble_sort_by,
    cocktail_shaker_sort, cocktail_shaker_sort_by, gnome_sort, gnome_sort_by, insertion_sort,
    insertion_sort_by, selection_sort, selection_sort_by, shell_sort, shell_sort_by,
};
pub use quick::{intro_sort, intro_sort_by, quick_sort, quick_sort_by};
pub use radix::{radix_sort_lsd, radix_sort_msd, RadixKey};

/// Trait for sorting implementations
pub trait Sorter<T> {
    /// Short identifier, e.g. `"intro_sort"`.
    fn name(&self) -> &'static str;

    /// Whether equal elements keep their relative input order.
    fn is_stable(&self) -> bool {
        false
    }

    /// Sort the slice in-place in ascending order
    fn sort(&self, data: &mut [T]) -> Result<()>;
}
