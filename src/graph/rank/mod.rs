// src/graph/rank/mod.rs
pub mod pagerank;
pub mod queries;
pub mod sampler;
pub mod transition;

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::config::RankConfig;
use crate::error::Result;
use crate::graph::corpus::Corpus;

pub use pagerank::{iterate, iterate_capped, iterate_traced, Convergence};
pub use sampler::{sample, sample_many, sample_seeded};
pub use transition::transition;

/// Page id to estimated stationary probability.
pub type RankMap = BTreeMap<String, f64>;

/// Page id to one-step probability.
pub type Distribution = BTreeMap<String, f64>;

/// Both estimates for one corpus.
#[derive(Debug, Clone, Serialize)]
pub struct RankReport {
    pub samples: usize,
    pub sampled: RankMap,
    pub iterated: RankMap,
    pub sweeps: usize,
}

/// Orchestrates the two estimators over one corpus.
pub struct RankEngine;

impl RankEngine {
    /// Runs the sampler and the iterator with the parameters in `config`.
    ///
    /// With no seed configured the walk draws from OS entropy.
    ///
    /// # Errors
    /// Returns the first error either estimator reports.
    pub fn run(corpus: &Corpus, config: &RankConfig) -> Result<RankReport> {
        config.validate()?;
        debug!(pages = corpus.len(), links = corpus.edge_count(), "ranking corpus");

        let sampled = match config.seed {
            Some(seed) => sample_seeded(corpus, config.damping, config.samples, seed)?,
            None => sample(corpus, config.damping, config.samples, &mut rand::rng())?,
        };
        let converged =
            iterate_traced(corpus, config.damping, config.epsilon, config.max_iterations)?;
        let sweeps = converged.sweeps();

        Ok(RankReport {
            samples: config.samples,
            sampled,
            iterated: converged.ranks,
            sweeps,
        })
    }
}
