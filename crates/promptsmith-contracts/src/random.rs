//! Injectable randomness for batch sampling.
//!
//! The sampler only ever needs "pick one of `len` options", so the seam is a
//! single method returning an index. Production code uses [`ThreadRandom`];
//! tests pin draws with [`FixedRandom`] or reproduce them with
//! [`SeededRandom`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait RandomSource {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}

/// Unseeded draws from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Reproducible draws: the same seed and inputs yield the same samples.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Returns values from a fixed sequence, cycling when exhausted. Each value is
/// reduced modulo the requested length so any sequence is a valid draw.
#[derive(Debug, Clone)]
pub struct FixedRandom {
    values: Vec<usize>,
    cursor: usize,
}

impl FixedRandom {
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, cursor: 0 }
    }

    pub fn constant(value: usize) -> Self {
        Self::new(vec![value])
    }

    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for FixedRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        if self.values.is_empty() || len == 0 {
            self.cursor += 1;
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value % len
    }
}
