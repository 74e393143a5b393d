//! Merge sort: Θ(n log n) in every case, not in place.

/// Sort by recursive halving and stable merging.
pub fn merge_sort<T: PartialOrd + Copy>(data: &mut [T]) {
    if data.len() > 1 {
        divide(data, 0, data.len() - 1);
    }
}

fn divide<T: PartialOrd + Copy>(data: &mut [T], low: usize, high: usize) {
    if low >= high {
        return;
    }
    let mid = low + (high - low) / 2;
    divide(data, low, mid);
    divide(data, mid + 1, high);
    merge(data, low, mid, high);
}

/// Merge the sorted runs `data[low..=mid]` and `data[mid + 1..=high]`.
///
/// The left run wins ties. The scratch buffer lives only for this call.
///
/// # Panics
///
/// Panics if `low > mid`, `mid >= high` or `high` is out of bounds.
pub fn merge<T: PartialOrd + Copy>(data: &mut [T], low: usize, mid: usize, high: usize) {
    let mut merged = Vec::with_capacity(high - low + 1);
    let mut left = low;
    let mut right = mid + 1;

    while left <= mid && right <= high {
        if data[left] <= data[right] {
            merged.push(data[left]);
            left += 1;
        } else {
            merged.push(data[right]);
            right += 1;
        }
    }
    merged.extend_from_slice(&data[left..=mid]);
    merged.extend_from_slice(&data[right..=high]);

    data[low..=high].copy_from_slice(&merged);
}
