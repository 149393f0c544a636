use thiserror::Error;

/// Rejection for arguments outside a function's documented domain.
///
/// Every fallible function in this crate fails up front with one of these
/// instead of wrapping, truncating, or guessing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The value falls outside the inclusive range the operation is
    /// defined for.
    #[error("{value} is outside the supported range {min}..={max}")]
    OutOfRange { value: u64, min: u64, max: u64 },

    /// The character is not a digit, a minus sign, or a decimal
    /// separator.
    #[error("{symbol:?} is not a digit, minus sign, or decimal separator")]
    UnsupportedSymbol { symbol: char },

    /// The argument was supposed to be a single decimal digit.
    #[error("{digit} is not a decimal digit")]
    NotADigit { digit: u8 },

    /// The matrix is ragged or rectangular where a square one is
    /// required.
    #[error("expected a square matrix: {rows} rows, but row {row} has {len} columns")]
    NotSquare { rows: usize, row: usize, len: usize },
}
