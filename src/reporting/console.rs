//! Plain-text rank listings.
//!
//! Pages are listed in id order, matching the order both estimators use
//! internally, so two runs can be diffed line by line.

use colored::Colorize;
use std::fmt::Write;

use crate::graph::rank::{RankMap, RankReport};

/// Renders the report without color.
#[must_use]
pub fn render_text(report: &RankReport) -> String {
    let mut out = String::new();
    for (title, ranks) in sections(report) {
        let _ = writeln!(out, "{title}");
        for line in rank_lines(ranks) {
            let _ = writeln!(out, "{line}");
        }
    }
    out
}

/// Prints the report to stdout with colored headers.
pub fn print_text(report: &RankReport) {
    for (title, ranks) in sections(report) {
        println!("{}", title.cyan().bold());
        for line in rank_lines(ranks) {
            println!("{line}");
        }
    }
}

fn sections(report: &RankReport) -> [(String, &RankMap); 2] {
    [
        (
            format!("PageRank Results from Sampling (n = {})", report.samples),
            &report.sampled,
        ),
        (
            "PageRank Results from Iteration".to_string(),
            &report.iterated,
        ),
    ]
}

fn rank_lines(ranks: &RankMap) -> impl Iterator<Item = String> + '_ {
    ranks.iter().map(|(page, rank)| format!("  {page}: {rank:.4}"))
}
