//! Generate random numbers.
//!
//! The game never calls a global generator directly, everything goes through [`RandomSource`] so a deterministic sequence can be injected.

use std::ops::Range;

/// Uniform random number source.
pub trait RandomSource {
    /// Generate a random number between 0.0 (inclusive) and 1.0 (exclusive).
    fn unit(&mut self) -> f32;

    /// Generate a random whole number in the half-open range.
    ///
    /// Returns `range.start` when the range is empty.
    fn range(&mut self, range: Range<i32>) -> i32;

    /// Generate a random byte, every value from 0 to 255 is equally likely.
    fn byte(&mut self) -> u8;
}

/// Random source backed by a fast non-cryptographic generator.
#[derive(Debug, Clone)]
pub struct FastRandom(fastrand::Rng);

impl FastRandom {
    /// Seed the generator from the system entropy.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(fastrand::Rng::new())
    }

    /// Create a generator that will always produce the same sequence.
    #[inline]
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self(fastrand::Rng::with_seed(seed))
    }
}

impl Default for FastRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for FastRandom {
    #[inline]
    fn unit(&mut self) -> f32 {
        self.0.f32()
    }

    #[inline]
    fn range(&mut self, range: Range<i32>) -> i32 {
        if range.is_empty() {
            return range.start;
        }

        self.0.i32(range)
    }

    #[inline]
    fn byte(&mut self) -> u8 {
        self.0.u8(..)
    }
}
