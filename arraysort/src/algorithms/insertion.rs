//! Insertion sort: best case Θ(n), worst case Θ(n²), in place.

/// Grow a sorted prefix one element at a time.
///
/// Only strictly greater elements are shifted, so equal elements keep their
/// relative order.
pub fn insertion_sort<T: PartialOrd + Copy>(data: &mut [T]) {
    for i in 1..data.len() {
        let value = data[i];
        let mut j = i;
        while j > 0 && data[j - 1] > value {
            data[j] = data[j - 1];
            j -= 1;
        }
        data[j] = value;
    }
}
