// src/reporting/mod.rs
//! Output formatting for rank reports.

pub mod console;
pub mod json;

use anyhow::Result;
use clap::ValueEnum;

use crate::graph::rank::RankReport;

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Prints the report to stdout in the requested format.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn print_report(report: &RankReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => console::print_text(report),
        OutputFormat::Json => println!("{}", json::render_json(report)?),
    }
    Ok(())
}
