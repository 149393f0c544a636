//! Loops-and-conditions kata
//! =========================
//!
//! A collection of independent, pure algorithmic exercises: scalar
//! predicates, string and slice manipulation, square-matrix transforms,
//! an in-place quicksort, and a digit-rearrangement engine. Every
//! function is self-contained and synchronous; nothing here touches
//! files, the network, or shared state.
//!
//! Layout
//! ------
//! - [`digits`]: digit decomposition and [`nearest_bigger`], the next
//!   larger integer with the same digit multiset (the one genuinely
//!   subtle algorithm in the set).
//! - [`scalars`]: sign, max-of-three, triangle, and chess-capture
//!   predicates.
//! - [`roman`]: Roman numerals for `1..=39`.
//! - [`text`]: digit spelling, palindrome test, first-occurrence scan,
//!   and the even/odd interleave shuffle.
//! - [`arrays`]: balance-point scan and an in-place quicksort.
//! - [`matrix`]: clockwise spiral fill and 90-degree rotation.
//!
//! Contracts
//! ---------
//! Functions whose documented domain is narrower than their parameter
//! types return a `Result` carrying [`Error`] and reject bad arguments
//! up front; nothing silently wraps or truncates. [`nearest_bigger`] takes
//! a `NonZeroU64` instead: its "positive integer" precondition lives in
//! the type, and it returns a value for every input.

pub mod arrays;
pub mod digits;
mod error;
pub mod matrix;
pub mod roman;
pub mod scalars;
pub mod text;

pub use arrays::{balance_index, sort_asc};
pub use digits::{contains_digit, digits_of, nearest_bigger, MAX_DIGITS};
pub use error::Error;
pub use matrix::{rotate_matrix, spiral_matrix};
pub use roman::to_roman;
pub use scalars::{is_isosceles_triangle, is_positive, max_of_three, queen_captures_king, Square};
pub use text::{index_of, is_palindrome, shuffle_chars, spell_number};
