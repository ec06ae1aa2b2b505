//! Closed-form level sequence.
//!
//! The level at position `cursor` for a given `seed` is
//! `(seed * cursor * LEVEL_MULTIPLIER) % LEVEL_MODULUS`. The sequence has no
//! hidden state: any position can be computed directly, and a client resumes
//! where it left off by sending back the cursor it last received.

use crate::types::{LEVEL_MODULUS, LEVEL_MULTIPLIER};
use serde::{Deserialize, Serialize};

/// Computes the level at `cursor` for `seed`.
///
/// Operands are reduced modulo [`LEVEL_MODULUS`] before multiplying so the
/// product never overflows, whatever the inputs.
#[inline]
pub fn level_at(seed: u64, cursor: u64) -> u64 {
    let seed = seed % LEVEL_MODULUS;
    let cursor = cursor % LEVEL_MODULUS;
    (seed * cursor * LEVEL_MULTIPLIER) % LEVEL_MODULUS
}

/// Iterator over consecutive levels starting at a cursor.
///
/// Yields exactly `count` levels. After iteration, [`Levels::cursor`] is the
/// position following the last yielded level.
#[derive(Clone, Debug)]
pub struct Levels {
    seed: u64,
    cursor: u64,
    remaining: usize,
}

impl Levels {
    pub fn new(seed: u64, cursor: u64, count: usize) -> Self {
        Self {
            seed,
            cursor,
            remaining: count,
        }
    }

    /// Position of the next level this iterator would yield.
    pub fn cursor(&self) -> u64 {
        self.cursor
    }
}

impl Iterator for Levels {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let level = level_at(self.seed, self.cursor);
        self.cursor += 1;
        self.remaining -= 1;
        Some(level)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Levels {}

/// Response payload: the generated levels and the advanced cursor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelBatch {
    pub levels: Vec<u64>,
    pub cursor: u64,
}

impl From<Levels> for LevelBatch {
    fn from(mut iter: Levels) -> Self {
        let levels = iter.by_ref().collect();
        Self {
            levels,
            cursor: iter.cursor(),
        }
    }
}
