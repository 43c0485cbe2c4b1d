//! Seeded random number generation.
//!
//! Each run owns exactly one generator, so a fixed seed reproduces a run
//! bit for bit.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic generator from `seed`.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from `seed`, or from a fresh random seed if `None`.
pub fn rng_from_option(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}
