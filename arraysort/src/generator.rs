//! Random input generation.

use rand::Rng;

use crate::config::ConfigError;

/// Core generator trait for creating benchmark inputs
pub trait Generator<T> {
    /// Generate a value using the provided RNG
    fn generate(&self, rng: &mut dyn rand::RngCore) -> T;
}

/// Uniformly distributed unsigned integers within an inclusive range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueGenerator {
    min: u64,
    max: u64,
}

impl ValueGenerator {
    /// Create a generator over `min..=max`
    pub fn new(min: u64, max: u64) -> Result<Self, ConfigError> {
        if min > max {
            return Err(ConfigError::InvalidValueRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Create a generator for the full range of the type
    pub fn full_range() -> Self {
        Self {
            min: u64::MIN,
            max: u64::MAX,
        }
    }
}

impl Generator<u64> for ValueGenerator {
    fn generate(&self, rng: &mut dyn rand::RngCore) -> u64 {
        rng.gen_range(self.min..=self.max)
    }
}

/// Fixed-length arrays of random values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayGenerator {
    len: usize,
    values: ValueGenerator,
}

impl ArrayGenerator {
    /// Arrays of `len` values spread over the whole `u64` range
    pub fn new(len: usize) -> Self {
        Self {
            len,
            values: ValueGenerator::full_range(),
        }
    }

    /// Restrict element values to `min..=max`
    pub fn with_range(self, min: u64, max: u64) -> Result<Self, ConfigError> {
        Ok(Self {
            len: self.len,
            values: ValueGenerator::new(min, max)?,
        })
    }

    /// Length of the generated arrays
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the generated arrays are empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Generator<Vec<u64>> for ArrayGenerator {
    fn generate(&self, rng: &mut dyn rand::RngCore) -> Vec<u64> {
        tracing::debug!(len = self.len, "generating input array");
        (0..self.len).map(|_| self.values.generate(rng)).collect()
    }
}
