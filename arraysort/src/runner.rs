//! Benchmark execution: generate, sort, time, validate.

use std::fmt;
use std::time::{Duration, Instant};

use crate::algorithms::Algorithm;
use crate::config::RunConfig;
use crate::error::SortError;
use crate::generator::{ArrayGenerator, Generator};
use crate::rng::{DefaultRngProvider, RngManager};
use crate::validate::check_sorted;

/// RNG stream reserved for quicksort pivots, separate from input generation
const PIVOT_STREAM: u64 = 1;

/// Wall-clock time split into whole seconds and sub-unit remainders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElapsedTime {
    pub seconds: u64,
    pub millis: u32,
    pub micros: u32,
}

impl From<Duration> for ElapsedTime {
    fn from(duration: Duration) -> Self {
        Self {
            seconds: duration.as_secs(),
            millis: duration.subsec_millis(),
            micros: duration.subsec_micros() % 1000,
        }
    }
}

impl fmt::Display for ElapsedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s {}ms {}us", self.seconds, self.millis, self.micros)
    }
}

/// Outcome of one successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub algorithm: Algorithm,
    pub size: usize,
    /// First element after sorting
    pub min: u64,
    /// Last element after sorting
    pub max: u64,
    /// Time spent inside the sort call only
    pub elapsed: Duration,
    /// Seed that reproduces the run
    pub seed: u64,
}

impl RunReport {
    /// Elapsed time broken into seconds, milliseconds and microseconds
    pub fn execution_time(&self) -> ElapsedTime {
        self.elapsed.into()
    }
}

/// Sort `data` with `algorithm`, timing only the sort, then verify the order.
pub fn timed_sort(
    algorithm: Algorithm,
    data: &mut [u64],
    rng: &mut dyn rand::RngCore,
) -> Result<Duration, SortError> {
    tracing::debug!(%algorithm, len = data.len(), "dispatching sort");
    let start = Instant::now();
    algorithm.sort(data, rng);
    let elapsed = start.elapsed();
    check_sorted(algorithm, data)?;
    Ok(elapsed)
}

/// A configured benchmark run
#[derive(Debug, Clone)]
pub struct Benchmark {
    config: RunConfig,
    rng: RngManager<DefaultRngProvider>,
}

impl Benchmark {
    /// Create a benchmark; a seed is drawn now when the config has none
    pub fn new(config: RunConfig) -> Self {
        let rng = RngManager::from_optional_seed(DefaultRngProvider, config.seed);
        Self { config, rng }
    }

    /// The configuration this benchmark runs with
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Seed used for input generation and pivot selection
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Generate the input array described by the configuration
    pub fn generate_input(&self) -> Result<Vec<u64>, SortError> {
        let mut generator = ArrayGenerator::new(self.config.size);
        if let Some((min, max)) = self.config.value_range {
            generator = generator.with_range(min, max)?;
        }
        Ok(generator.generate(&mut self.rng.get_rng()))
    }

    /// Generate the input and run the configured algorithm on it
    pub fn run(&self) -> Result<RunReport, SortError> {
        self.config.validate()?;
        let input = self.generate_input()?;
        self.run_on(input)
    }

    /// Run the configured algorithm on an injected input
    pub fn run_on(&self, mut data: Vec<u64>) -> Result<RunReport, SortError> {
        let algorithm = self.config.algorithm;
        if data.is_empty() {
            return Err(SortError::EmptyInput);
        }

        let mut pivot_rng = self.rng.stream_rng(PIVOT_STREAM);
        let elapsed = timed_sort(algorithm, &mut data, &mut pivot_rng)?;

        let report = RunReport {
            algorithm,
            size: data.len(),
            min: data[0],
            max: data[data.len() - 1],
            elapsed,
            seed: self.seed(),
        };
        tracing::info!(
            %algorithm,
            size = report.size,
            elapsed_us = elapsed.as_micros() as u64,
            seed = report.seed,
            "run complete"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(algorithm: Algorithm, size: usize) -> RunConfig {
        RunConfig::new(algorithm, size).unwrap().with_seed(1234)
    }

    #[test]
    fn test_elapsed_breakdown() {
        let elapsed = ElapsedTime::from(Duration::new(1, 234_567_891));
        assert_eq!(
            elapsed,
            ElapsedTime {
                seconds: 1,
                millis: 234,
                micros: 567
            }
        );
        assert_eq!(elapsed.to_string(), "1s 234ms 567us");
    }

    #[test]
    fn test_elapsed_sub_millisecond() {
        let elapsed = ElapsedTime::from(Duration::from_micros(42));
        assert_eq!(elapsed.to_string(), "0s 0ms 42us");
    }

    #[test]
    fn test_run_on_injected_input() {
        let benchmark = Benchmark::new(config(Algorithm::InsertionSort, 5));
        assert_eq!(benchmark.config().size, 5);
        let report = benchmark.run_on(vec![5, 3, 1, 4, 2]).unwrap();
        assert_eq!(report.algorithm, Algorithm::InsertionSort);
        assert_eq!(report.size, 5);
        assert_eq!(report.min, 1);
        assert_eq!(report.max, 5);
        assert_eq!(report.seed, 1234);
    }

    #[test]
    fn test_run_on_empty_rejected() {
        let benchmark = Benchmark::new(config(Algorithm::HeapSort, 1));
        assert_eq!(benchmark.run_on(Vec::new()), Err(SortError::EmptyInput));
    }

    #[test]
    fn test_run_generates_configured_size() {
        for algorithm in Algorithm::ALL {
            let report = Benchmark::new(config(algorithm, 200)).run().unwrap();
            assert_eq!(report.size, 200);
            assert!(report.min <= report.max);
        }
    }

    #[test]
    fn test_seeded_runs_agree() {
        let a = Benchmark::new(config(Algorithm::QuickSort, 100)).run().unwrap();
        let b = Benchmark::new(config(Algorithm::MergeSort, 100)).run().unwrap();
        assert_eq!((a.min, a.max), (b.min, b.max));
    }

    #[test]
    fn test_value_range_respected() {
        let config = config(Algorithm::BubbleSort, 300)
            .with_value_range(100, 200)
            .unwrap();
        let benchmark = Benchmark::new(config);
        let input = benchmark.generate_input().unwrap();
        assert!(input.iter().all(|v| (100..=200).contains(v)));
    }

    #[test]
    fn test_timed_sort_sorts() {
        let mut data = vec![9, 8, 7];
        let mut rng = crate::rng::create_seeded_rng(0);
        timed_sort(Algorithm::TrivialSort, &mut data, &mut rng).unwrap();
        assert_eq!(data, vec![7, 8, 9]);
    }
}
