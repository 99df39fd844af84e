//! Random sources for the prize draw.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

use crate::ports::RandomSource;

/// Samples from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn next_fraction(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Deterministic source for reproducible draws.
#[derive(Debug)]
pub struct SeededRandomSource {
    rng: Mutex<StdRng>,
}

impl SeededRandomSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandomSource {
    fn next_fraction(&self) -> f64 {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen::<f64>()
    }
}

/// Replays a fixed list of samples, cycling when exhausted.
#[derive(Debug)]
pub struct FixedRandomSource {
    samples: Vec<f64>,
    cursor: Mutex<usize>,
}

impl FixedRandomSource {
    pub fn new(samples: Vec<f64>) -> Self {
        Self {
            samples,
            cursor: Mutex::new(0),
        }
    }
}

impl RandomSource for FixedRandomSource {
    fn next_fraction(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let mut cursor = self.cursor.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let sample = self.samples[*cursor % self.samples.len()];
        *cursor += 1;
        sample
    }
}
