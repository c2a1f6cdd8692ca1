//! Genetic operators for bit-vector genomes.
//!
//! Both operators take the run's random generator as an explicit `&mut R`
//! so a single seeded generator drives the entire run reproducibly.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Eiben & Smith (2015), *Introduction to Evolutionary Computing*

use rand::Rng;

use crate::error::Error;
use crate::genome::Genome;

/// Two-point crossover.
///
/// # Algorithm
///
/// 1. Draw cut `a` uniformly from `[0, V-2]`, then `b` from `[a+1, V-1]`
/// 2. Each child starts as a full copy of one parent
/// 3. Genes in the inclusive range `[a, b]` are exchanged between the
///    children; genes outside the range are untouched
///
/// At least two genes are always exchanged (`b > a`).
///
/// # Complexity
/// O(V) time, O(V) space
///
/// # Errors
/// Returns [`Error::InvalidConfig`] if the parents differ in length or
/// are shorter than 2 genes — a degenerate genome cannot host two cut
/// points and the failure must be explicit.
pub fn two_point_crossover<R: Rng>(
    parent1: &Genome,
    parent2: &Genome,
    rng: &mut R,
) -> Result<(Genome, Genome), Error> {
    let len = parent1.len();
    if parent2.len() != len {
        return Err(Error::InvalidConfig(
            "crossover parents must have equal genome length".into(),
        ));
    }
    if len < 2 {
        return Err(Error::InvalidConfig(
            "two-point crossover requires genomes of at least 2 genes".into(),
        ));
    }

    let a = rng.random_range(0..len - 1);
    let b = rng.random_range(a + 1..len);

    let mut child1 = parent1.clone();
    let mut child2 = parent2.clone();
    for i in a..=b {
        let tmp = child1.get(i);
        child1.set(i, child2.get(i));
        child2.set(i, tmp);
    }
    Ok((child1, child2))
}

/// Independent per-gene bit-flip mutation.
///
/// Performs one Bernoulli trial per gene: a uniform draw in `[0, 1)` below
/// `probability` flips the bit. `probability = 0.0` is the identity
/// transform; `probability = 1.0` flips every bit.
pub fn bit_flip_mutation<R: Rng>(genome: &mut Genome, probability: f64, rng: &mut R) {
    for i in 0..genome.len() {
        if rng.random::<f64>() < probability {
            genome.set(i, !genome.get(i));
        }
    }
}
