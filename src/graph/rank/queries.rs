// src/graph/rank/queries.rs
use super::RankMap;

/// Pages ordered by descending rank; ties broken by page id.
#[must_use]
pub fn ranked(ranks: &RankMap) -> Vec<(String, f64)> {
    let mut ranked: Vec<_> = ranks.iter().map(|(p, r)| (p.clone(), *r)).collect();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    ranked
}

/// Total probability mass.
#[must_use]
pub fn total(ranks: &RankMap) -> f64 {
    ranks.values().sum()
}

/// Largest per-page absolute difference between two estimates.
/// Pages missing from either side count as rank 0.
#[must_use]
pub fn max_difference(a: &RankMap, b: &RankMap) -> f64 {
    a.keys()
        .chain(b.keys())
        .map(|p| {
            let x = a.get(p).copied().unwrap_or(0.0);
            let y = b.get(p).copied().unwrap_or(0.0);
            (x - y).abs()
        })
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, f64)]) -> RankMap {
        entries.iter().map(|(p, r)| ((*p).to_string(), *r)).collect()
    }

    #[test]
    fn test_ranked_orders_by_rank_then_id() {
        let ranks = map(&[("b", 0.25), ("a", 0.25), ("c", 0.5)]);
        let order: Vec<_> = ranked(&ranks).into_iter().map(|(p, _)| p).collect();
        assert_eq!(order, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_max_difference_counts_missing_pages() {
        let a = map(&[("x", 0.5), ("y", 0.5)]);
        let b = map(&[("x", 0.4)]);
        assert!((max_difference(&a, &b) - 0.5).abs() < 1e-12);
        assert!((total(&a) - 1.0).abs() < 1e-12);
    }
}
