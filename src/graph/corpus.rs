// src/graph/corpus.rs
//! The link corpus: pages and the pages they link to.

use std::collections::{BTreeMap, BTreeSet};

/// An immutable adjacency mapping from page id to its outgoing links.
///
/// Pages and links are held in lexicographic order. Every consumer that
/// enumerates pages (the sampler's cumulative selection in particular)
/// relies on this order, so it is part of the public contract.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    pub(crate) links: BTreeMap<String, BTreeSet<String>>,
}

impl Corpus {
    /// Builds a corpus from `(page, links)` pairs.
    ///
    /// Links to ids that are not pages themselves are dropped, as are self
    /// links. Repeated page entries have their links merged.
    #[must_use]
    pub fn new<I, P, L, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut raw: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (page, targets) in pages {
            raw.entry(page.into())
                .or_default()
                .extend(targets.into_iter().map(Into::into));
        }

        let known: BTreeSet<String> = raw.keys().cloned().collect();
        let links = raw
            .into_iter()
            .map(|(page, targets)| {
                let kept = targets
                    .into_iter()
                    .filter(|t| *t != page && known.contains(t))
                    .collect();
                (page, kept)
            })
            .collect();

        Self { links }
    }

    /// Number of pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    #[must_use]
    pub fn contains(&self, page: &str) -> bool {
        self.links.contains_key(page)
    }

    /// Page ids in lexicographic order.
    pub fn pages(&self) -> impl Iterator<Item = &str> {
        self.links.keys().map(String::as_str)
    }

    /// Outgoing links of `page`, or `None` if it is not in the corpus.
    #[must_use]
    pub fn links(&self, page: &str) -> Option<&BTreeSet<String>> {
        self.links.get(page)
    }

    /// True if `page` exists and links nowhere.
    #[must_use]
    pub fn is_dangling(&self, page: &str) -> bool {
        self.links.get(page).is_some_and(BTreeSet::is_empty)
    }

    /// Total number of (deduplicated) links.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.links.values().map(BTreeSet::len).sum()
    }
}
