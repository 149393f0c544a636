//! Digit rearrangement
//! ===================
//!
//! Problem
//! -------
//! Given a positive integer, find the smallest integer strictly greater
//! than it whose decimal digits are a permutation of the input's digits.
//! When the digits are already in non-increasing order no such integer
//! exists, and the input comes back unchanged.
//!
//! Approach
//! --------
//! Classic next-permutation over a fixed-capacity digit buffer:
//!
//! 1) Pivot scan: the rightmost position whose digit is smaller than its
//!    right neighbour. None means the sequence is non-increasing, i.e.
//!    the maximal arrangement.
//! 2) Successor scan: from the end, the first digit exceeding the pivot.
//!    The suffix right of the pivot is non-increasing, so this is the
//!    smallest usable successor.
//! 3) Swap pivot and successor, then reverse the suffix. The suffix is
//!    still non-increasing after the swap, so the reversal leaves it
//!    ascending and the overall result minimal.
//!
//! All digit work is numeric (`% 10` / `/ 10` loops); nothing goes
//! through a string.

use std::num::NonZeroU64;

use arrayvec::ArrayVec;

use crate::Error;

/// A `u64` never has more than 20 decimal digits.
pub const MAX_DIGITS: usize = 20;

/// Base-10 digits of `value`, most-significant first. `0` gives `[0]`.
#[inline]
pub fn digits_of(value: u64) -> ArrayVec<u8, MAX_DIGITS> {
    let mut digits: ArrayVec<u8, MAX_DIGITS> = ArrayVec::new_const();
    let mut rest = value;
    loop {
        digits.push((rest % 10) as u8);
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    digits.reverse();
    digits
}

/// Recompose in u128: 20 nines still fit, so recomposition itself can
/// never overflow even when the result no longer fits a u64.
#[inline]
fn compose(digits: &[u8]) -> u128 {
    digits
        .iter()
        .fold(0u128, |acc, &d| acc * 10 + u128::from(d))
}

/// The smallest integer strictly greater than `n` built from the same
/// multiset of decimal digits, or `n` unchanged when none exists.
///
/// Edge cases:
/// - Single-digit inputs have no pivot and come back unchanged.
/// - Non-increasing digit runs (`54321`, `1111`) are already maximal.
/// - Trailing zeros rearrange like any other digit: `123450 -> 123504`.
/// - A 20-digit rearrangement can exceed `u64::MAX` (e.g. for
///   `u64::MAX` itself); the input comes back unchanged rather than
///   wrapping.
///
/// Runs in O(k) scans plus an O(k) suffix reversal, k = digit count.
pub fn nearest_bigger(n: NonZeroU64) -> NonZeroU64 {
    let mut digits = digits_of(n.get());

    // Rightmost position whose digit can still grow by swapping with a
    // later, larger digit.
    let Some(pivot) = digits.windows(2).rposition(|pair| pair[0] < pair[1]) else {
        return n;
    };

    // The suffix is non-increasing, so the scan stops at pivot + 1 at
    // the latest.
    let mut successor = digits.len() - 1;
    while digits[successor] <= digits[pivot] {
        successor -= 1;
    }

    digits.swap(pivot, successor);
    digits[pivot + 1..].reverse();

    match u64::try_from(compose(&digits)) {
        // Same digit count as a value >= n, so never zero.
        Ok(value) => NonZeroU64::new(value).unwrap_or(n),
        Err(_) => n,
    }
}

/// Whether `digit` appears in the decimal representation of `value`.
/// Negative values are checked on their magnitude; the sign is not a
/// digit.
///
/// # Errors
///
/// Returns [`Error::NotADigit`] when `digit` is not in `0..=9`.
pub fn contains_digit(value: i64, digit: u8) -> Result<bool, Error> {
    if digit > 9 {
        return Err(Error::NotADigit { digit });
    }

    let mut rest = value.unsigned_abs();
    loop {
        if (rest % 10) as u8 == digit {
            return Ok(true);
        }
        rest /= 10;
        if rest == 0 {
            return Ok(false);
        }
    }
}
