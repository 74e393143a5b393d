//! Quicksort with a uniformly random pivot and Lomuto partitioning.
//!
//! Expected Θ(n log n), worst case Θ(n²), in place.

use rand::{Rng, RngCore};

/// Sort `data`, drawing pivot positions from `rng`.
pub fn quick_sort<T: PartialOrd + Copy>(data: &mut [T], rng: &mut dyn RngCore) {
    if data.len() > 1 {
        sort_range(data, 0, data.len() - 1, rng);
    }
}

// Recurses into the smaller side and loops on the larger one, so the stack
// stays O(log n) even when many keys are equal.
fn sort_range<T: PartialOrd + Copy>(
    data: &mut [T],
    mut p: usize,
    mut r: usize,
    rng: &mut dyn RngCore,
) {
    while p < r {
        let q = randomized_partition(data, p, r, rng);
        if q - p < r - q {
            if q > p {
                sort_range(data, p, q - 1, rng);
            }
            p = q + 1;
        } else {
            sort_range(data, q + 1, r, rng);
            r = q - 1;
        }
    }
}

/// Swap a uniformly chosen element of `data[p..=r]` into `r`, then partition.
pub fn randomized_partition<T: PartialOrd + Copy>(
    data: &mut [T],
    p: usize,
    r: usize,
    rng: &mut dyn RngCore,
) -> usize {
    let i = rng.gen_range(p..=r);
    data.swap(i, r);
    partition(data, p, r)
}

/// Lomuto partition of `data[p..=r]` around the pivot `data[r]`.
///
/// Returns the pivot's final index `q`: everything in `p..q` is `<=` the
/// pivot and everything in `q + 1..=r` is greater.
pub fn partition<T: PartialOrd + Copy>(data: &mut [T], p: usize, r: usize) -> usize {
    let pivot = data[r];
    // `boundary` is one past the last element known to be <= pivot.
    let mut boundary = p;
    for j in p..r {
        if data[j] <= pivot {
            data.swap(boundary, j);
            boundary += 1;
        }
    }
    data.swap(boundary, r);
    boundary
}
