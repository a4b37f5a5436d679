use clap::Parser;
use std::path::PathBuf;

use crate::reporting::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "linkrank",
    version,
    about = "Rank pages of an HTML corpus by sampling and by iteration"
)]
pub struct Cli {
    /// Directory of `.html` pages to rank
    #[arg(value_name = "CORPUS_DIR")]
    pub corpus: PathBuf,
    /// Probability of following a link rather than jumping
    #[arg(long)]
    pub damping: Option<f64>,
    /// Random-walk steps for the sampling estimate
    #[arg(long, short = 'n')]
    pub samples: Option<usize>,
    /// Convergence threshold for the iterative estimate
    #[arg(long)]
    pub epsilon: Option<f64>,
    /// Sweep cap before iteration gives up
    #[arg(long)]
    pub max_iterations: Option<usize>,
    /// Seed the random walk for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Log progress to stderr
    #[arg(long, short)]
    pub verbose: bool,
}
