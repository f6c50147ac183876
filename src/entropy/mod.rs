//! Randomness sources for password generation.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Provider of uniform random choices.
///
/// Generation borrows the source mutably for the whole call, so one source is
/// never shared between concurrent generations.
pub trait RandomSource {
    /// Uniform index in `0..upper`. `upper` is never zero.
    fn below(&mut self, upper: usize) -> usize;
}

impl<R: RngCore + ?Sized> RandomSource for R {
    #[inline]
    fn below(&mut self, upper: usize) -> usize {
        self.gen_range(0..upper)
    }
}

/// Default generator: ChaCha-based, seeded from the operating system.
pub fn os() -> StdRng {
    StdRng::from_entropy()
}

/// Deterministic generator. Same seed, same request, same password.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn source_name(seed: Option<u64>) -> &'static str {
    match seed {
        Some(_) => "seeded ChaCha12",
        None => "OS-seeded ChaCha12",
    }
}
