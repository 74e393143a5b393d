//! # arraysort - textbook sorting algorithms under a stopwatch
//!
//! Six classic in-memory sorts over `u64` arrays, a sortedness check, a random
//! input generator and a small runner that times one algorithm on one array.
//!
//! ## Quick Start
//!
//! ```rust
//! use arraysort::{Algorithm, Benchmark, RunConfig};
//!
//! let config = RunConfig::new(Algorithm::HeapSort, 1000).unwrap().with_seed(7);
//! let report = Benchmark::new(config).run().unwrap();
//! assert!(report.min <= report.max);
//! ```

pub mod algorithms;
pub mod config;
pub mod error;
pub mod generator;
pub mod report;
pub mod rng;
pub mod runner;
pub mod validate;

// Re-export the main public API
pub use algorithms::Algorithm;
pub use config::{ConfigError, RunConfig};
pub use error::SortError;
pub use generator::{ArrayGenerator, Generator, ValueGenerator};
#[cfg(feature = "json")]
pub use report::{JsonFormatter, JsonReport};
pub use report::{ReportFormatter, TextFormatter};
pub use rng::{DefaultRngProvider, RngManager, RngProvider, create_rng, create_seeded_rng};
pub use runner::{Benchmark, ElapsedTime, RunReport, timed_sort};
pub use validate::{check_sorted, first_unsorted_index, is_permutation, is_sorted};
