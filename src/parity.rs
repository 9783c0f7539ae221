//! Counting elements that are odd or positive.

use crate::error::{Error, Result};

/// Sign-correct oddness test: `-3 % 2 == -1`, so the remainder is compared against zero.
#[inline]
pub fn is_odd(x: i32) -> bool {
    x % 2 != 0
}

/// Returns true if `x` is odd, strictly positive, or both.
#[inline]
pub fn is_odd_or_positive(x: i32) -> bool {
    is_odd(x) || x > 0
}

/// Counts the elements of `values` that are odd or positive.
///
/// Zero is neither odd nor positive, and an empty slice yields `0`.
///
/// ```rust
/// use auxiliary_methods::parity::odd_or_pos;
///
/// assert_eq!(odd_or_pos(&[-3, -4, 0, 2, 7]), 3);
/// ```
pub fn odd_or_pos(values: &[i32]) -> usize {
    values.iter().filter(|&&x| is_odd_or_positive(x)).count()
}

/// Like [`odd_or_pos`], but for an input that may be absent altogether.
///
/// Absence is an [`Error::MissingInput`]; an empty slice is a valid input.
pub fn try_odd_or_pos(values: Option<&[i32]>) -> Result<usize> {
    values
        .map(odd_or_pos)
        .ok_or(Error::MissingInput { argument: "values" })
}
