//! Square-matrix transforms: clockwise spiral fill and 90-degree
//! rotation.

use crate::Error;

/// A `size` x `size` matrix filled clockwise from the outside in with
/// `1..=size*size`. `size == 0` gives an empty matrix.
///
/// ```text
/// 3 -> [[1, 2, 3],
///       [8, 9, 4],
///       [7, 6, 5]]
/// ```
pub fn spiral_matrix(size: usize) -> Vec<Vec<u32>> {
    let mut matrix = vec![vec![0u32; size]; size];
    if size == 0 {
        return matrix;
    }

    let mut top = 0;
    let mut bottom = size - 1;
    let mut left = 0;
    let mut right = size - 1;
    let mut value = 1u32;

    // One lap per iteration: top row, right column, bottom row, left
    // column, each edge followed by shrinking the band it consumed.
    loop {
        for col in left..=right {
            matrix[top][col] = value;
            value += 1;
        }
        if top == bottom {
            break;
        }
        top += 1;

        for row in top..=bottom {
            matrix[row][right] = value;
            value += 1;
        }
        if left == right {
            break;
        }
        right -= 1;

        for col in (left..=right).rev() {
            matrix[bottom][col] = value;
            value += 1;
        }
        if top == bottom {
            break;
        }
        bottom -= 1;

        for row in (top..=bottom).rev() {
            matrix[row][left] = value;
            value += 1;
        }
        if left == right {
            break;
        }
        left += 1;
    }

    matrix
}

/// The matrix rotated 90 degrees clockwise, as a new matrix: the first
/// column of the input becomes the first row of the output, read bottom
/// to top.
///
/// # Errors
///
/// Returns [`Error::NotSquare`] for ragged or rectangular input.
pub fn rotate_matrix(matrix: &[Vec<i64>]) -> Result<Vec<Vec<i64>>, Error> {
    let rows = matrix.len();
    for (row, entries) in matrix.iter().enumerate() {
        if entries.len() != rows {
            return Err(Error::NotSquare {
                rows,
                row,
                len: entries.len(),
            });
        }
    }

    Ok((0..rows)
        .map(|i| (0..rows).map(|j| matrix[rows - 1 - j][i]).collect())
        .collect())
}
