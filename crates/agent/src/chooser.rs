//! Reply choosers
//!
//! Implementations of [`ReplyChooser`] for production (thread RNG), reproducible
//! runs (seeded) and tests (fixed index).

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use responder_core::ReplyChooser;

/// Uniform choice from the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomChooser;

impl ReplyChooser for RandomChooser {
    fn choose(&self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        rand::thread_rng().gen_range(0..len)
    }
}

/// Uniform choice from a seeded RNG; the same seed yields the same sequence
pub struct SeededChooser {
    rng: Mutex<StdRng>,
}

impl SeededChooser {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl ReplyChooser for SeededChooser {
    fn choose(&self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.rng.lock().gen_range(0..len)
    }
}

/// Always the same index, clamped to the candidate set
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedChooser(pub usize);

impl ReplyChooser for FixedChooser {
    fn choose(&self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}
