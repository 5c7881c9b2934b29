use thiserror::Error;

pub type Result<T> = core::result::Result<T, SortError>;

/// Precondition violations reported before the input is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("bitonic sort requires a power-of-two length, got {len}")]
    NotPowerOfTwo { len: usize },

    #[error("LSD radix sort only accepts non-negative integers, found {value} at index {index}")]
    NegativeValue { index: usize, value: i128 },
}
