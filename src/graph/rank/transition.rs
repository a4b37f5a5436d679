// src/graph/rank/transition.rs
//! The damped random-surfer transition model.

use std::collections::BTreeSet;

use super::Distribution;
use crate::error::{RankError, Result};
use crate::graph::corpus::Corpus;

/// One-step distribution over the next page, given the surfer is on `page`.
///
/// With probability `damping` the surfer follows one of `page`'s links,
/// chosen uniformly; otherwise it jumps to any page uniformly. A dangling
/// page spreads its whole mass uniformly over the corpus.
///
/// # Errors
/// `InvalidArgument` if `page` is not in `corpus` or `damping` is outside `(0, 1]`.
pub fn transition(corpus: &Corpus, page: &str, damping: f64) -> Result<Distribution> {
    let outgoing = row(corpus, page, damping)?;
    Ok(corpus
        .pages()
        .map(|p| (p.to_string(), outgoing.probability(p)))
        .collect())
}

/// Compact form of one transition row: every page gets `jump`, and each
/// page in `targets` additionally gets `follow`.
pub(crate) struct Row<'a> {
    pub jump: f64,
    pub follow: f64,
    pub targets: &'a BTreeSet<String>,
}

impl Row<'_> {
    fn probability(&self, page: &str) -> f64 {
        let linked = if self.targets.contains(page) { self.follow } else { 0.0 };
        self.jump + linked
    }
}

/// # Errors
/// Same as [`transition`].
#[allow(clippy::cast_precision_loss)]
pub(crate) fn row<'a>(corpus: &'a Corpus, page: &str, damping: f64) -> Result<Row<'a>> {
    check_damping(damping)?;
    let Some(targets) = corpus.links(page) else {
        return Err(RankError::invalid(format!("page '{page}' is not in the corpus")));
    };

    let n = corpus.len() as f64;
    if targets.is_empty() {
        return Ok(Row {
            jump: 1.0 / n,
            follow: 0.0,
            targets,
        });
    }

    Ok(Row {
        jump: (1.0 - damping) / n,
        follow: damping / targets.len() as f64,
        targets,
    })
}

pub(crate) fn check_damping(damping: f64) -> Result<()> {
    if damping > 0.0 && damping <= 1.0 {
        Ok(())
    } else {
        Err(RankError::invalid(format!(
            "damping factor must be in (0, 1], got {damping}"
        )))
    }
}
