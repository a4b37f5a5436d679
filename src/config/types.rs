use serde::{Deserialize, Serialize};

use crate::graph::rank::pagerank::{DEFAULT_EPSILON, DEFAULT_MAX_ITERATIONS};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    #[serde(default = "default_damping")]
    pub damping: f64,
    #[serde(default = "default_samples")]
    pub samples: usize,
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    /// Fixed seed for the random walk. Unset means nondeterministic.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            samples: default_samples(),
            epsilon: default_epsilon(),
            max_iterations: default_max_iterations(),
            seed: None,
        }
    }
}

const fn default_damping() -> f64 { 0.85 }
const fn default_samples() -> usize { 10_000 }
const fn default_epsilon() -> f64 { DEFAULT_EPSILON }
const fn default_max_iterations() -> usize { DEFAULT_MAX_ITERATIONS }

/// On-disk layout of `linkrank.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkRankToml {
    #[serde(default)]
    pub rank: RankConfig,
}
