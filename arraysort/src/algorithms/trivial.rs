//! Trivial (selection) sort: Θ(n²) comparisons in every case, in place.

/// Move the leftmost minimum of each unsorted suffix into place.
pub fn trivial_sort<T: PartialOrd + Copy>(data: &mut [T]) {
    for i in 0..data.len() {
        let mut index_min = i;
        for j in i + 1..data.len() {
            if data[j] < data[index_min] {
                index_min = j;
            }
        }
        data.swap(i, index_min);
    }
}
