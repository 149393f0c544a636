//! Slice work: the balance-point scan and an in-place quicksort.

/// First interior index whose left-sum equals its right-sum, if any.
/// Endpoints never qualify, so slices shorter than three elements have
/// no balance point. Sums accumulate in `i128`, so extreme `i64`
/// contents cannot overflow the scan.
///
/// ```text
/// [1, 2, 5, 3, 0] -> Some(2)   (1 + 2 == 3 + 0)
/// [1, 2, 3, 4, 5] -> None
/// ```
pub fn balance_index(values: &[i64]) -> Option<usize> {
    if values.len() < 3 {
        return None;
    }

    let total: i128 = values.iter().map(|&v| i128::from(v)).sum();
    let mut left = i128::from(values[0]);
    for (index, &value) in values.iter().enumerate().take(values.len() - 1).skip(1) {
        let right = total - left - i128::from(value);
        if left == right {
            return Some(index);
        }
        left += i128::from(value);
    }
    None
}

/// Below this length insertion sort beats the partitioning overhead.
const INSERTION_CUTOFF: usize = 16;

/// Sort `values` ascending, in place. Deterministic quicksort:
/// median-of-three pivot, Lomuto partition, insertion sort for short
/// runs, and recursion into the smaller half only so the stack stays
/// logarithmic.
pub fn sort_asc(values: &mut [i64]) {
    quicksort(values);
}

fn quicksort(mut values: &mut [i64]) {
    while values.len() > INSERTION_CUTOFF {
        let pivot = partition(values);
        let (low, rest) = values.split_at_mut(pivot);
        let high = &mut rest[1..];
        if low.len() < high.len() {
            quicksort(low);
            values = high;
        } else {
            quicksort(high);
            values = low;
        }
    }
    insertion_sort(values);
}

/// Lomuto partition around the median of first, middle, and last.
/// Returns the pivot's final index; everything left of it is smaller,
/// everything right of it is not.
fn partition(values: &mut [i64]) -> usize {
    let last = values.len() - 1;
    let mid = values.len() / 2;

    // Order first/mid/last, which parks the median at `mid`.
    if values[mid] < values[0] {
        values.swap(mid, 0);
    }
    if values[last] < values[0] {
        values.swap(last, 0);
    }
    if values[last] < values[mid] {
        values.swap(last, mid);
    }
    values.swap(mid, last);

    let pivot = values[last];
    let mut store = 0;
    for index in 0..last {
        if values[index] < pivot {
            values.swap(index, store);
            store += 1;
        }
    }
    values.swap(store, last);
    store
}

fn insertion_sort(values: &mut [i64]) {
    for sorted_end in 1..values.len() {
        let mut slot = sorted_end;
        while slot > 0 && values[slot - 1] > values[slot] {
            values.swap(slot - 1, slot);
            slot -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Quadratic reference scan with the same interior-only rule.
    fn balance_index_naive(values: &[i64]) -> Option<usize> {
        for i in 1..values.len().saturating_sub(1) {
            let left: i128 = values[..i].iter().map(|&v| i128::from(v)).sum();
            let right: i128 = values[i + 1..].iter().map(|&v| i128::from(v)).sum();
            if left == right {
                return Some(i);
            }
        }
        None
    }

    #[test]
    fn finds_the_balance_point() {
        assert_eq!(balance_index(&[1, 2, 5, 3, 0]), Some(2));
        assert_eq!(balance_index(&[2, 3, 9, 5]), Some(2));
        assert_eq!(balance_index(&[1, 2, 3, 4, 5]), None);
    }

    #[test]
    fn endpoints_never_balance() {
        assert_eq!(balance_index(&[]), None);
        assert_eq!(balance_index(&[7]), None);
        assert_eq!(balance_index(&[3, 3]), None);
        // index 0 would balance (0 == 0) but is excluded
        assert_eq!(balance_index(&[5, 1, -1]), None);
    }

    #[test]
    fn handles_negatives() {
        assert_eq!(balance_index(&[-1, 9, -1]), Some(1));
        assert_eq!(balance_index(&[2, -2, 1, 0, 0]), Some(2));
    }

    #[test]
    fn sorts_the_documented_cases() {
        let mut values = vec![2, 9, 5];
        sort_asc(&mut values);
        assert_eq!(values, [2, 5, 9]);

        let mut values = vec![2, 9, 5, 9];
        sort_asc(&mut values);
        assert_eq!(values, [2, 5, 9, 9]);

        let mut values = vec![-2, 9, 5, -3];
        sort_asc(&mut values);
        assert_eq!(values, [-3, -2, 5, 9]);
    }

    #[test]
    fn sorts_degenerate_slices() {
        let mut empty: Vec<i64> = vec![];
        sort_asc(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![42];
        sort_asc(&mut single);
        assert_eq!(single, [42]);
    }

    #[test]
    fn sorts_adversarial_shapes() {
        let mut reversed: Vec<i64> = (0..100).rev().collect();
        sort_asc(&mut reversed);
        assert!(reversed.windows(2).all(|w| w[0] <= w[1]));

        let mut all_equal = vec![7i64; 64];
        sort_asc(&mut all_equal);
        assert_eq!(all_equal, vec![7i64; 64]);

        let mut sorted: Vec<i64> = (0..100).collect();
        sort_asc(&mut sorted);
        assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
    }

    proptest! {
        #[test]
        fn sorts_like_the_standard_library(mut values in proptest::collection::vec(any::<i64>(), 0..256)) {
            let mut expected = values.clone();
            expected.sort_unstable();
            sort_asc(&mut values);
            prop_assert_eq!(values, expected);
        }

        #[test]
        fn balance_scan_matches_the_naive_scan(values in proptest::collection::vec(-1000i64..1000, 0..64)) {
            prop_assert_eq!(balance_index(&values), balance_index_naive(&values));
        }
    }
}
