//! Decimal digit reversal of signed 32-bit integers.
//!
//! The digits of the magnitude are reversed in a 64-bit accumulator and the sign is
//! reapplied afterwards, so negative inputs follow exactly the same path as positive ones.
//! A result outside of `i32` is an [`Error::Overflow`] for [`checked_reverse`],
//! and the sentinel `0` for [`reverse`].
//!
//! ```rust
//! use auxiliary_methods::reverse::{checked_reverse, reverse};
//!
//! assert_eq!(reverse(123), 321);
//! assert_eq!(reverse(-8090), -908);
//! assert_eq!(reverse(1534236469), 0);
//! assert!(checked_reverse(1534236469).is_err());
//! ```

use log::trace;

use crate::error::{Error, Result};

/// Reverses the decimal digits of `x`, reporting overflow as an error.
///
/// Trailing zeros of `x` become leading zeros of the result and vanish.
pub fn checked_reverse(x: i32) -> Result<i32> {
    // |i32::MIN| does not fit into i32, but it does fit into i64.
    let mut magnitude = (x as i64).abs();
    let mut reversed: i64 = 0;
    while magnitude != 0 {
        reversed = reversed * 10 + magnitude % 10;
        magnitude /= 10;
    }
    let reversed = if x < 0 { -reversed } else { reversed };

    i32::try_from(reversed).map_err(|_| {
        trace!("reverse({}) overflows: {}", x, reversed);
        Error::Overflow { input: x, reversed }
    })
}

/// Reverses the decimal digits of `x`, returning `0` on overflow.
///
/// Note that `reverse(0) == 0` as well, so `0` only means overflow for non-zero inputs.
pub fn reverse(x: i32) -> i32 {
    checked_reverse(x).unwrap_or(0)
}
