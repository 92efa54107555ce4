use crate::abstract_trait::random::RandomSource;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::{
    collections::VecDeque,
    sync::{Mutex, PoisonError},
};

/// Per-thread RNG, used in production.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_f64(&self) -> f64 {
        rand::rng().random::<f64>()
    }

    fn next_index(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Reproducible sequence from a fixed seed.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&self) -> f64 {
        self.rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .random::<f64>()
    }

    fn next_index(&self, len: usize) -> usize {
        self.rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .random_range(0..len)
    }
}

/// Replays a scripted list of samples, then repeats the last one.
///
/// Indices are derived from the same samples as `floor(sample * len)`.
#[derive(Debug)]
pub struct FixedRandom {
    samples: Mutex<VecDeque<f64>>,
    last: Mutex<f64>,
}

impl FixedRandom {
    pub fn new(samples: impl IntoIterator<Item = f64>) -> Self {
        Self {
            samples: Mutex::new(samples.into_iter().collect()),
            last: Mutex::new(0.0),
        }
    }

    fn next_sample(&self) -> f64 {
        let mut last = self.last.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(sample) = self
            .samples
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
        {
            *last = sample.clamp(0.0, 1.0 - f64::EPSILON);
        }
        *last
    }
}

impl RandomSource for FixedRandom {
    fn next_f64(&self) -> f64 {
        self.next_sample()
    }

    fn next_index(&self, len: usize) -> usize {
        ((self.next_sample() * len as f64) as usize).min(len.saturating_sub(1))
    }
}
