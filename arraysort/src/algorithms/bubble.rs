//! Bubble sort: Θ(n²) best and worst case, in place.

/// Sink each pass's minimum toward the front.
///
/// Every pass runs to completion; there is no early exit on a pass without
/// swaps, so sorted input still costs Θ(n²).
pub fn bubble_sort<T: PartialOrd + Copy>(data: &mut [T]) {
    let n = data.len();
    if n < 2 {
        return;
    }

    for i in 0..n - 1 {
        for j in (i + 1..n).rev() {
            if data[j] < data[j - 1] {
                data.swap(j, j - 1);
            }
        }
    }
}
