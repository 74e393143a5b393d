//! Heap sort over an array-indexed binary max-heap: Θ(n log n), in place.
//!
//! Indices are 0-based: the children of `i` sit at `2i + 1` and `2i + 2`.

/// Parent index of `i`.
///
/// Even indices map to `i / 2 - 1`, odd ones to `⌊i / 2⌋`. `parent(0)` is `-1`,
/// which is what ends the build loop for one-element heaps.
pub fn parent(i: isize) -> isize {
    if i % 2 == 0 {
        i / 2 - 1
    } else {
        i.div_euclid(2)
    }
}

/// Left child index of `i`
pub fn left_child(i: usize) -> usize {
    i * 2 + 1
}

/// Right child index of `i`
pub fn right_child(i: usize) -> usize {
    i * 2 + 2
}

/// Build a max-heap, then repeatedly move the root behind the shrinking heap.
pub fn heap_sort<T: PartialOrd + Copy>(data: &mut [T]) {
    build_max_heap(data);
    for end in (1..data.len()).rev() {
        data.swap(0, end);
        max_heapify(data, 0, end);
    }
}

/// Heapify every internal node, from the last one up to the root.
pub fn build_max_heap<T: PartialOrd + Copy>(data: &mut [T]) {
    let last = data.len() as isize - 1;
    let mut i = parent(last);
    while i >= 0 {
        max_heapify(data, i as usize, data.len());
        i -= 1;
    }
}

/// Sift `data[root]` down within the first `heap_len` elements until it is no
/// smaller than either in-range child.
pub fn max_heapify<T: PartialOrd + Copy>(data: &mut [T], root: usize, heap_len: usize) {
    let l = left_child(root);
    let r = right_child(root);
    let mut largest = root;

    if l < heap_len && data[l] > data[largest] {
        largest = l;
    }
    if r < heap_len && data[r] > data[largest] {
        largest = r;
    }
    if largest != root {
        data.swap(root, largest);
        max_heapify(data, largest, heap_len);
    }
}
