//! RNG backend integration and provider system.
//!
//! Randomness is always handed to the generator and to quicksort as an
//! explicit `&mut dyn RngCore`; nothing in this crate reaches for a global
//! generator.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Trait for providing random number generators
pub trait RngProvider {
    /// The type of RNG this provider creates
    type Rng: RngCore;

    /// Create a new RNG instance with an optional seed
    fn create_rng(&self, seed: Option<u64>) -> Self::Rng;

    /// Create a new RNG instance with a random seed
    fn create_random_rng(&self) -> Self::Rng {
        self.create_rng(None)
    }
}

/// Default RNG provider using the standard library's StdRng
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRngProvider;

impl RngProvider for DefaultRngProvider {
    type Rng = StdRng;

    fn create_rng(&self, seed: Option<u64>) -> Self::Rng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Hands out generators tied to one run seed.
///
/// When no seed is supplied, one is drawn from entropy up front and kept, so
/// every run can be replayed with `--seed`.
#[derive(Debug, Clone)]
pub struct RngManager<P: RngProvider> {
    provider: P,
    seed: u64,
}

impl<P: RngProvider> RngManager<P> {
    /// Create a new RNG manager with a fresh seed drawn from entropy
    pub fn new(provider: P) -> Self {
        let seed = StdRng::from_entropy().next_u64();
        Self { provider, seed }
    }

    /// Create a new RNG manager with a specific seed
    pub fn with_seed(provider: P, seed: u64) -> Self {
        Self { provider, seed }
    }

    /// Create a manager from an optional seed, drawing one when absent
    pub fn from_optional_seed(provider: P, seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(provider, seed),
            None => Self::new(provider),
        }
    }

    /// Get a new RNG for the run seed
    pub fn get_rng(&self) -> P::Rng {
        self.provider.create_rng(Some(self.seed))
    }

    /// RNG for a secondary stream of the same run (e.g. pivot selection)
    ///
    /// Each stream index yields a different, still reproducible, sequence.
    pub fn stream_rng(&self, stream: u64) -> P::Rng {
        self.provider
            .create_rng(Some(self.seed.wrapping_add(stream.wrapping_mul(0x9E37_79B9_7F4A_7C15))))
    }

    /// The seed this manager derives its generators from
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for RngManager<DefaultRngProvider> {
    fn default() -> Self {
        Self::new(DefaultRngProvider)
    }
}

/// Create an entropy-seeded RNG
pub fn create_rng() -> StdRng {
    DefaultRngProvider.create_random_rng()
}

/// Create a new RNG with a specific seed
pub fn create_seeded_rng(seed: u64) -> StdRng {
    DefaultRngProvider.create_rng(Some(seed))
}
