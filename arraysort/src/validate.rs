//! Post-sort verification.

use crate::algorithms::Algorithm;
use crate::error::SortError;

/// Index of the first element smaller than its predecessor, if any
pub fn first_unsorted_index<T: PartialOrd>(data: &[T]) -> Option<usize> {
    (1..data.len()).find(|&i| data[i] < data[i - 1])
}

/// Whether `data` is in non-decreasing order
pub fn is_sorted<T: PartialOrd>(data: &[T]) -> bool {
    first_unsorted_index(data).is_none()
}

/// Fail with [`SortError::NotSorted`] unless `data` is in non-decreasing order
pub fn check_sorted(algorithm: Algorithm, data: &[u64]) -> Result<(), SortError> {
    match first_unsorted_index(data) {
        None => Ok(()),
        Some(index) => {
            tracing::error!(%algorithm, index, "sortedness check failed");
            Err(SortError::NotSorted { algorithm, index })
        }
    }
}

/// Whether `after` holds exactly the same multiset of values as `before`
pub fn is_permutation(before: &[u64], after: &[u64]) -> bool {
    if before.len() != after.len() {
        return false;
    }
    let mut a = before.to_vec();
    let mut b = after.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}
