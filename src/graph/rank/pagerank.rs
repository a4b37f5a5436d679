// src/graph/rank/pagerank.rs
//! `PageRank` by fixed-point iteration of the transition model.

use rayon::prelude::*;
use tracing::{debug, info, trace, warn};

use super::transition::{check_damping, row};
use super::RankMap;
use crate::error::{RankError, Result};
use crate::graph::corpus::Corpus;

pub const DEFAULT_EPSILON: f64 = 0.001;
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// A converged rank vector plus the per-sweep history that led to it.
#[derive(Debug, Clone)]
pub struct Convergence {
    pub ranks: RankMap,
    /// Largest absolute per-page change of each sweep, in sweep order.
    pub deltas: Vec<f64>,
}

impl Convergence {
    /// Number of sweeps performed.
    #[must_use]
    pub fn sweeps(&self) -> usize {
        self.deltas.len()
    }
}

/// Iterates to convergence with the default safety cap.
///
/// # Errors
/// See [`iterate_traced`].
pub fn iterate(corpus: &Corpus, damping: f64, epsilon: f64) -> Result<RankMap> {
    iterate_capped(corpus, damping, epsilon, DEFAULT_MAX_ITERATIONS)
}

/// Iterates to convergence, giving up after `max_iterations` sweeps.
///
/// # Errors
/// See [`iterate_traced`].
pub fn iterate_capped(
    corpus: &Corpus,
    damping: f64,
    epsilon: f64,
    max_iterations: usize,
) -> Result<RankMap> {
    iterate_traced(corpus, damping, epsilon, max_iterations).map(|c| c.ranks)
}

/// Computes the stationary distribution by synchronous sweeps.
///
/// Starts from the uniform vector. Each sweep sets
/// `next[q] = sum over p of prev[p] * transition(p)[q]`, reading only the
/// previous sweep. Stops once no page moved by more than `epsilon`.
///
/// # Errors
/// `InvalidArgument` for an empty corpus, bad damping, a negative or
/// non-finite `epsilon`, or a zero cap. `ConvergenceFailure` if the cap is
/// reached first.
#[allow(clippy::cast_precision_loss)]
pub fn iterate_traced(
    corpus: &Corpus,
    damping: f64,
    epsilon: f64,
    max_iterations: usize,
) -> Result<Convergence> {
    validate(corpus, damping, epsilon, max_iterations)?;

    let pages: Vec<&str> = corpus.pages().collect();
    let plan = SweepPlan::build(corpus, &pages, damping)?;
    let mut ranks = initialize_ranks(pages.len());
    let mut deltas = Vec::new();

    debug!(pages = pages.len(), damping, epsilon, max_iterations, "iterating");

    for sweep in 1..=max_iterations {
        let next = iterate_once(&ranks, &plan);
        let delta = max_delta(&ranks, &next);
        deltas.push(delta);
        trace!(sweep, delta, "sweep");

        if delta <= epsilon {
            info!(sweeps = sweep, delta, "converged");
            return Ok(Convergence {
                ranks: to_rank_map(&pages, next),
                deltas,
            });
        }
        ranks = next;
    }

    let delta = deltas.last().copied().unwrap_or(f64::INFINITY);
    warn!(max_iterations, delta, "iteration cap reached");
    Err(RankError::ConvergenceFailure {
        iterations: max_iterations,
        delta,
        partial: to_rank_map(&pages, ranks),
    })
}

fn validate(corpus: &Corpus, damping: f64, epsilon: f64, max_iterations: usize) -> Result<()> {
    if corpus.is_empty() {
        return Err(RankError::invalid("cannot rank an empty corpus"));
    }
    check_damping(damping)?;
    if !epsilon.is_finite() || epsilon < 0.0 {
        return Err(RankError::invalid(format!(
            "epsilon must be finite and non-negative, got {epsilon}"
        )));
    }
    if max_iterations == 0 {
        return Err(RankError::invalid("iteration cap must be at least 1"));
    }
    Ok(())
}

/// The transition rows in sparse form.
///
/// Every row `p` gives each page `jump[p]`, plus a follow weight on its
/// links. `incoming[q]` lists `(p, follow weight)` for every link `p -> q`,
/// in page order.
struct SweepPlan {
    jump: Vec<f64>,
    incoming: Vec<Vec<(usize, f64)>>,
}

impl SweepPlan {
    fn build(corpus: &Corpus, pages: &[&str], damping: f64) -> Result<Self> {
        let mut jump = Vec::with_capacity(pages.len());
        let mut incoming = vec![Vec::new(); pages.len()];

        for (source, page) in pages.iter().enumerate() {
            let outgoing = row(corpus, page, damping)?;
            jump.push(outgoing.jump);
            for target in outgoing.targets {
                if let Ok(q) = pages.binary_search(&target.as_str()) {
                    incoming[q].push((source, outgoing.follow));
                }
            }
        }

        Ok(Self { jump, incoming })
    }
}

#[allow(clippy::cast_precision_loss)]
fn initialize_ranks(n: usize) -> Vec<f64> {
    vec![1.0 / n as f64; n]
}

fn to_rank_map(pages: &[&str], ranks: Vec<f64>) -> RankMap {
    pages.iter().map(|p| (*p).to_string()).zip(ranks).collect()
}

/// One Jacobi sweep. The shared jump mass is summed once, then each output
/// slot adds its incoming links in page order, so the result does not
/// depend on how rayon splits the work.
fn iterate_once(ranks: &[f64], plan: &SweepPlan) -> Vec<f64> {
    let jumped: f64 = ranks.iter().zip(&plan.jump).map(|(r, j)| r * j).sum();
    (0..ranks.len())
        .into_par_iter()
        .map(|q| jumped + compute_incoming_rank(q, ranks, plan))
        .collect()
}

fn compute_incoming_rank(target: usize, ranks: &[f64], plan: &SweepPlan) -> f64 {
    plan.incoming[target]
        .iter()
        .map(|&(source, follow)| ranks[source] * follow)
        .sum()
}

fn max_delta(prev: &[f64], next: &[f64]) -> f64 {
    prev.iter()
        .zip(next)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max)
}
