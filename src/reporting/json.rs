//! Machine-readable rank output.

use serde::Serialize;

use crate::graph::rank::{RankMap, RankReport};

#[derive(Serialize)]
struct JsonReport<'a> {
    sampling: SamplingSection<'a>,
    iteration: IterationSection<'a>,
}

#[derive(Serialize)]
struct SamplingSection<'a> {
    samples: usize,
    ranks: &'a RankMap,
}

#[derive(Serialize)]
struct IterationSection<'a> {
    sweeps: usize,
    ranks: &'a RankMap,
}

/// Serializes the report as pretty-printed JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn render_json(report: &RankReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        sampling: SamplingSection {
            samples: report.samples,
            ranks: &report.sampled,
        },
        iteration: IterationSection {
            sweeps: report.sweeps,
            ranks: &report.iterated,
        },
    })
}
