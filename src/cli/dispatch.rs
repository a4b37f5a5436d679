//! Command execution extracted from the binary to keep `main` small.

use anyhow::{Context, Result};
use std::path::Path;

use super::args::Cli;
use crate::config::RankConfig;
use crate::exit::LinkRankExit;
use crate::graph::crawl::crawl;
use crate::graph::rank::RankEngine;
use crate::reporting::print_report;

/// Loads config from `config_dir`, applies flag overrides, ranks, prints.
///
/// # Errors
/// Returns error if config, crawl, ranking, or output fails.
pub fn execute(cli: &Cli, config_dir: &Path) -> Result<LinkRankExit> {
    let config = resolve_config(cli, config_dir)?;
    let corpus = crawl(&cli.corpus)
        .with_context(|| format!("failed to crawl {}", cli.corpus.display()))?;
    let report = RankEngine::run(&corpus, &config)?;
    print_report(&report, cli.format)?;
    Ok(LinkRankExit::Success)
}

/// File values first, then any flag the user passed.
///
/// # Errors
/// Returns error if the config file is unreadable or the result is invalid.
pub fn resolve_config(cli: &Cli, config_dir: &Path) -> Result<RankConfig> {
    let mut config = RankConfig::load(config_dir)?;
    if let Some(damping) = cli.damping {
        config.damping = damping;
    }
    if let Some(samples) = cli.samples {
        config.samples = samples;
    }
    if let Some(epsilon) = cli.epsilon {
        config.epsilon = epsilon;
    }
    if let Some(max_iterations) = cli.max_iterations {
        config.max_iterations = max_iterations;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    config.validate()?;
    Ok(config)
}
