// src/graph/rank/sampler.rs
//! Monte Carlo estimation: follow the random surfer and count visits.

use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;
use rayon::prelude::*;
use tracing::debug;

use super::transition::{check_damping, transition};
use super::RankMap;
use crate::error::{RankError, Result};
use crate::graph::corpus::Corpus;

/// Estimates rank by walking `n` steps from a uniformly chosen start page.
///
/// Each step credits the current page with `1/n`, then draws the next page
/// from [`transition`] with a single uniform draw. The walk is inherently
/// sequential; for a given RNG state the result is bit-reproducible.
///
/// # Errors
/// `InvalidArgument` if the corpus is empty, `n` is zero, or `damping` is
/// outside `(0, 1]`.
#[allow(clippy::cast_precision_loss)]
pub fn sample<R: Rng + ?Sized>(
    corpus: &Corpus,
    damping: f64,
    n: usize,
    rng: &mut R,
) -> Result<RankMap> {
    validate(corpus, damping, n)?;
    debug!(pages = corpus.len(), samples = n, damping, "sampling");

    let pages: Vec<&str> = corpus.pages().collect();
    let step = 1.0 / n as f64;
    let mut visits = vec![0.0_f64; pages.len()];
    let mut current = rng.random_range(0..pages.len());

    for _ in 0..n {
        visits[current] += step;
        let dist = transition(corpus, pages[current], damping)?;
        current = select(dist.values().copied(), rng.random::<f64>());
    }

    Ok(pages
        .into_iter()
        .map(str::to_string)
        .zip(visits)
        .collect())
}

/// [`sample`] with a fresh `XorShiftRng` seeded from `seed`.
///
/// # Errors
/// Same as [`sample`].
pub fn sample_seeded(corpus: &Corpus, damping: f64, n: usize, seed: u64) -> Result<RankMap> {
    let mut rng = XorShiftRng::seed_from_u64(seed);
    sample(corpus, damping, n, &mut rng)
}

/// Runs one independent walk per seed in parallel and averages them.
///
/// # Errors
/// `InvalidArgument` if `seeds` is empty, plus anything [`sample`] rejects.
#[allow(clippy::cast_precision_loss)]
pub fn sample_many(corpus: &Corpus, damping: f64, n: usize, seeds: &[u64]) -> Result<RankMap> {
    if seeds.is_empty() {
        return Err(RankError::invalid("at least one seed is required"));
    }
    validate(corpus, damping, n)?;

    let runs = seeds
        .par_iter()
        .map(|&seed| sample_seeded(corpus, damping, n, seed))
        .collect::<Result<Vec<_>>>()?;

    let weight = 1.0 / runs.len() as f64;
    let mut averaged: RankMap = corpus.pages().map(|p| (p.to_string(), 0.0)).collect();
    for run in &runs {
        for (page, rank) in run {
            if let Some(slot) = averaged.get_mut(page) {
                *slot += rank * weight;
            }
        }
    }
    Ok(averaged)
}

fn validate(corpus: &Corpus, damping: f64, n: usize) -> Result<()> {
    if corpus.is_empty() {
        return Err(RankError::invalid("cannot sample an empty corpus"));
    }
    if n == 0 {
        return Err(RankError::invalid("sample count must be at least 1"));
    }
    check_damping(damping)
}

/// Cumulative selection: subtract each probability from `u` in order and
/// pick the entry that drives it negative.
///
/// If rounding leaves `u` non-negative after the last entry, the last entry
/// with non-zero probability wins. Zero-probability entries are never picked.
fn select(probs: impl Iterator<Item = f64>, mut u: f64) -> usize {
    let mut last_nonzero = 0;
    for (i, p) in probs.enumerate() {
        if p > 0.0 {
            last_nonzero = i;
        }
        u -= p;
        if u < 0.0 {
            return i;
        }
    }
    last_nonzero
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_walks_in_order() {
        let probs = [0.2, 0.5, 0.3];
        assert_eq!(select(probs.iter().copied(), 0.0), 0);
        assert_eq!(select(probs.iter().copied(), 0.19), 0);
        assert_eq!(select(probs.iter().copied(), 0.2), 1);
        assert_eq!(select(probs.iter().copied(), 0.69), 1);
        assert_eq!(select(probs.iter().copied(), 0.71), 2);
    }

    #[test]
    fn test_select_skips_zero_mass() {
        let probs = [0.0, 1.0, 0.0];
        assert_eq!(select(probs.iter().copied(), 0.0), 1);
        assert_eq!(select(probs.iter().copied(), 0.999_999), 1);
    }

    #[test]
    fn test_select_rounding_falls_back_to_last_nonzero() {
        // Mass sums just under 1.0, so a draw at the top of [0, 1) survives.
        let probs = [0.3, 0.699_999_999, 0.0];
        assert_eq!(select(probs.iter().copied(), 0.999_999_999_9), 1);
    }

    #[test]
    fn test_cycle_without_jumps_alternates() {
        let corpus = Corpus::new([("a", vec!["b"]), ("b", vec!["a"])]);
        let ranks = sample_seeded(&corpus, 1.0, 10, 7).unwrap();
        assert!((ranks["a"] - 0.5).abs() < 1e-9);
        assert!((ranks["b"] - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_bad_input() {
        let corpus = Corpus::new([("a", vec!["b"]), ("b", vec![])]);
        let mut rng = XorShiftRng::seed_from_u64(1);

        assert!(matches!(
            sample(&Corpus::default(), 0.85, 10, &mut rng),
            Err(RankError::InvalidArgument(_))
        ));
        assert!(matches!(
            sample(&corpus, 0.85, 0, &mut rng),
            Err(RankError::InvalidArgument(_))
        ));
        assert!(matches!(
            sample(&corpus, 1.2, 10, &mut rng),
            Err(RankError::InvalidArgument(_))
        ));
        assert!(matches!(
            sample_many(&corpus, 0.85, 10, &[]),
            Err(RankError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_sample_many_is_reproducible() {
        let corpus = Corpus::new([("a", vec!["b"]), ("b", vec!["c"]), ("c", vec![])]);
        let first = sample_many(&corpus, 0.85, 2_000, &[1, 2, 3, 4]).unwrap();
        let second = sample_many(&corpus, 0.85, 2_000, &[1, 2, 3, 4]).unwrap();
        assert_eq!(first, second);
        assert!((first.values().sum::<f64>() - 1.0).abs() < 1e-9);
    }
}
