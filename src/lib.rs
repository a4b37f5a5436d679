pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod graph;
pub mod reporting;

pub use error::{RankError, Result};
pub use graph::rank::{RankEngine, RankMap, RankReport};
pub use graph::Corpus;
