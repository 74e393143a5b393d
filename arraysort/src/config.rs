//! Run configuration and its validation.

use std::fmt;

use crate::algorithms::Algorithm;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No algorithm was named
    MissingAlgorithm,
    /// No array size was given
    MissingSize,
    /// The array size was zero
    ZeroSize,
    /// The algorithm name is not one of the known identifiers
    UnknownAlgorithm(String),
    /// The value range is empty (`min > max`)
    InvalidValueRange { min: u64, max: u64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingAlgorithm => write!(f, "flag is mandatory: --algorithm"),
            ConfigError::MissingSize => write!(f, "flag is mandatory: --size"),
            ConfigError::ZeroSize => {
                write!(f, "invalid size: 0 (must be a positive integer)")
            }
            ConfigError::UnknownAlgorithm(name) => {
                write!(f, "invalid algorithm specified: {}", name)
            }
            ConfigError::InvalidValueRange { min, max } => {
                write!(f, "invalid value range: {}..={} (min must be <= max)", min, max)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Everything needed to perform one benchmark run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Algorithm to run
    pub algorithm: Algorithm,
    /// Number of elements to generate
    pub size: usize,
    /// Optional seed for a reproducible run
    pub seed: Option<u64>,
    /// Inclusive range of generated values; full `u64` range when absent
    pub value_range: Option<(u64, u64)>,
}

impl RunConfig {
    /// Create a new run configuration with validation
    pub fn new(algorithm: Algorithm, size: usize) -> Result<Self, ConfigError> {
        let config = Self {
            algorithm,
            size,
            seed: None,
            value_range: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Build a configuration from raw, possibly missing, command line values.
    ///
    /// Checks run in flag order: algorithm presence, size presence, then the
    /// algorithm name and the size value.
    pub fn from_parts(
        algorithm: Option<&str>,
        size: Option<usize>,
        seed: Option<u64>,
        min_value: Option<u64>,
        max_value: Option<u64>,
    ) -> Result<Self, ConfigError> {
        let name = algorithm
            .filter(|name| !name.is_empty())
            .ok_or(ConfigError::MissingAlgorithm)?;
        let size = size.ok_or(ConfigError::MissingSize)?;
        let algorithm: Algorithm = name.parse()?;

        let value_range = match (min_value, max_value) {
            (None, None) => None,
            (min, max) => Some((min.unwrap_or(u64::MIN), max.unwrap_or(u64::MAX))),
        };

        let config = Self {
            algorithm,
            size,
            seed,
            value_range,
        };
        config.validate()?;
        Ok(config)
    }

    /// Set the seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Restrict generated values to `min..=max`
    pub fn with_value_range(mut self, min: u64, max: u64) -> Result<Self, ConfigError> {
        self.value_range = Some((min, max));
        self.validate()?;
        Ok(self)
    }

    /// Validate the run configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if let Some((min, max)) = self.value_range
            && min > max
        {
            return Err(ConfigError::InvalidValueRange { min, max });
        }
        Ok(())
    }
}
