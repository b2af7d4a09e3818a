use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

use crate::engine::RandomSource;

/// RNG на системной энтропии.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn pick_index(&mut self, len: usize) -> usize {
        thread_rng().gen_range(0..len)
    }

    fn in_range(&mut self, low: u64, high: u64) -> u64 {
        thread_rng().gen_range(low..=high)
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Одинаковый seed – одинаковая последовательность действий.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    fn in_range(&mut self, low: u64, high: u64) -> u64 {
        self.inner.gen_range(low..=high)
    }
}
