//! The six sorting strategies and the closed enumeration that selects one.

pub mod bubble;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod trivial;

use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;

pub use bubble::bubble_sort;
pub use heap::heap_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;
pub use trivial::trivial_sort;

/// A sorting algorithm the benchmark can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    TrivialSort,
    BubbleSort,
    InsertionSort,
    MergeSort,
    HeapSort,
    QuickSort,
}

impl Algorithm {
    /// Every algorithm, in presentation order
    pub const ALL: [Algorithm; 6] = [
        Algorithm::TrivialSort,
        Algorithm::BubbleSort,
        Algorithm::InsertionSort,
        Algorithm::MergeSort,
        Algorithm::HeapSort,
        Algorithm::QuickSort,
    ];

    /// The identifier accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::TrivialSort => "TrivialSort",
            Algorithm::BubbleSort => "BubbleSort",
            Algorithm::InsertionSort => "InsertionSort",
            Algorithm::MergeSort => "MergeSort",
            Algorithm::HeapSort => "HeapSort",
            Algorithm::QuickSort => "QuickSort",
        }
    }

    /// Time and space bounds of the implementation
    pub fn complexity(&self) -> &'static str {
        match self {
            Algorithm::TrivialSort => "best / worst case Θ(n²), in place",
            Algorithm::BubbleSort => "best / worst case Θ(n²), in place",
            Algorithm::InsertionSort => "best case Θ(n), worst case Θ(n²), in place",
            Algorithm::MergeSort => "best / worst case Θ(n log n), not in place",
            Algorithm::HeapSort => "best / worst case Θ(n log n), in place",
            Algorithm::QuickSort => "expected Θ(n log n), worst case Θ(n²), in place",
        }
    }

    /// Whether equal elements keep their relative order
    pub fn is_stable(&self) -> bool {
        matches!(
            self,
            Algorithm::BubbleSort | Algorithm::InsertionSort | Algorithm::MergeSort
        )
    }

    /// Sort `data` in place with this algorithm.
    ///
    /// `rng` is only consumed by quicksort's pivot selection.
    pub fn sort(&self, data: &mut [u64], rng: &mut dyn rand::RngCore) {
        match self {
            Algorithm::TrivialSort => trivial_sort(data),
            Algorithm::BubbleSort => bubble_sort(data),
            Algorithm::InsertionSort => insertion_sort(data),
            Algorithm::MergeSort => merge_sort(data),
            Algorithm::HeapSort => heap_sort(data),
            Algorithm::QuickSort => quick_sort(data, rng),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == s)
            .ok_or_else(|| ConfigError::UnknownAlgorithm(s.to_string()))
    }
}

/// Records ordered by `key` alone, for observing stability in tests.
#[cfg(test)]
pub(crate) mod keyed {
    use std::cmp::Ordering;

    #[derive(Debug, Clone, Copy)]
    pub struct Keyed {
        pub key: u8,
        pub tag: usize,
    }

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            self.key.partial_cmp(&other.key)
        }
    }

    /// Tag each key with its original position
    pub fn tagged(keys: &[u8]) -> Vec<Keyed> {
        keys.iter()
            .enumerate()
            .map(|(tag, &key)| Keyed { key, tag })
            .collect()
    }

    /// Equal keys appear in ascending tag order
    pub fn is_stable_order(records: &[Keyed]) -> bool {
        records
            .windows(2)
            .all(|w| w[0].key < w[1].key || (w[0].key == w[1].key && w[0].tag < w[1].tag))
    }
}
