//! Seedable randomness for the estimators.
//!
//! Geocoder fallback coordinates, the rainfall prediction and the aquifer
//! quality/type draws all take `&mut impl Rng`. The binary hands them an
//! `EstimatorRng`; tests hand them a fixed-seed one, so the same seed always
//! produces the same assessment.

use rand::{Error, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Env var that overrides the configured seed.
pub const SEED_ENV_VAR: &str = "RAINCATCH_SEED";

pub struct EstimatorRng {
    inner: ChaCha8Rng,
    seed: Option<u64>,
}

impl EstimatorRng {
    pub fn from_seed_u64(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Seeded from OS entropy; not reproducible.
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
            seed: None,
        }
    }

    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::from_seed_u64(s),
            None => Self::from_entropy(),
        }
    }

    /// The seed this generator started from, if it was seeded explicitly.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl RngCore for EstimatorRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), Error> {
        self.inner.try_fill_bytes(dest)
    }
}
