//! Candidate cover representation.

use std::fmt;

use rand::Rng;

/// Fixed-length bit vector encoding a candidate cover.
///
/// Bit `i` set means vertex `i` is in the cover. Cloning produces fully
/// independent storage; [`set`](Genome::set) is the only mutating
/// operation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Genome {
    bits: Vec<bool>,
}

impl Genome {
    /// All-zero genome (the empty cover).
    pub fn zeros(len: usize) -> Self {
        Self {
            bits: vec![false; len],
        }
    }

    /// Genome of independent uniform random bits.
    pub fn random<R: Rng>(len: usize, rng: &mut R) -> Self {
        Self {
            bits: (0..len).map(|_| rng.random_bool(0.5)).collect(),
        }
    }

    /// Wraps an explicit bit vector.
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Genome length (= vertex count of the instance).
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True for a zero-length genome.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Reads bit `i`.
    ///
    /// # Panics
    /// Panics if `i >= len()`.
    pub fn get(&self, i: usize) -> bool {
        self.bits[i]
    }

    /// Writes bit `i`.
    ///
    /// # Panics
    /// Panics if `i >= len()`.
    pub fn set(&mut self, i: usize, bit: bool) {
        self.bits[i] = bit;
    }

    /// Number of set bits (= cover size).
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// The raw bits.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// A genome together with its cached evaluation results.
///
/// `fitness` and `cover_size` are derived fields, recomputed by the
/// runner's evaluate phase each generation before any comparison. A
/// freshly created individual carries `f64::NEG_INFINITY` (the worst
/// score under maximization) until its first evaluation.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    /// The candidate cover.
    pub genome: Genome,
    /// Cached fitness; higher is better, 0 is the theoretical optimum.
    pub fitness: f64,
    /// Cached number of vertices in the cover.
    pub cover_size: usize,
}

impl Individual {
    /// Wraps a genome with unevaluated caches.
    pub fn new(genome: Genome) -> Self {
        Self {
            genome,
            fitness: f64::NEG_INFINITY,
            cover_size: 0,
        }
    }
}
