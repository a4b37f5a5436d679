// tests/integration_crawl.rs
//! Crawling a directory of HTML pages and ranking the result end to end.

use std::fs;

use linkrank_core::config::RankConfig;
use linkrank_core::graph::crawl::crawl;
use linkrank_core::reporting::console::render_text;
use linkrank_core::{RankEngine, RankError};

fn write_page(dir: &std::path::Path, name: &str, links: &[&str]) {
    let body: String = links
        .iter()
        .map(|l| format!("<li><a href=\"{l}\">{l}</a></li>\n"))
        .collect();
    let html = format!("<!DOCTYPE html>\n<html><body><ul>\n{body}</ul></body></html>\n");
    fs::write(dir.join(name), html).unwrap();
}

#[test]
fn test_crawl_builds_corpus_from_html_files() {
    let d = tempfile::tempdir().unwrap();
    write_page(d.path(), "1.html", &["2.html", "1.html", "https://example.com"]);
    write_page(d.path(), "2.html", &["1.html", "3.html"]);
    write_page(d.path(), "3.html", &[]);
    fs::write(d.path().join("notes.txt"), "<a href=\"1.html\">x</a>").unwrap();
    fs::create_dir(d.path().join("nested")).unwrap();
    write_page(&d.path().join("nested"), "4.html", &["1.html"]);

    let corpus = crawl(d.path()).unwrap();

    let pages: Vec<_> = corpus.pages().collect();
    assert_eq!(pages, vec!["1.html", "2.html", "3.html"]);
    assert_eq!(corpus.links("1.html").unwrap().len(), 1);
    assert_eq!(corpus.links("2.html").unwrap().len(), 2);
    assert!(corpus.is_dangling("3.html"));
}

#[test]
fn test_crawl_missing_directory_is_io_error() {
    let d = tempfile::tempdir().unwrap();
    let err = crawl(&d.path().join("absent")).unwrap_err();
    assert!(matches!(err, RankError::Io { .. }));
}

#[test]
fn test_crawl_then_rank() {
    let d = tempfile::tempdir().unwrap();
    write_page(d.path(), "1.html", &["2.html"]);
    write_page(d.path(), "2.html", &["1.html", "3.html"]);
    write_page(d.path(), "3.html", &["2.html", "4.html"]);
    write_page(d.path(), "4.html", &["2.html"]);

    let corpus = crawl(d.path()).unwrap();
    let config = RankConfig {
        seed: Some(7),
        ..RankConfig::default()
    };
    let report = RankEngine::run(&corpus, &config).unwrap();

    assert_eq!(report.samples, 10_000);
    assert!(report.sweeps > 0);
    assert!((report.iterated["2.html"] - 0.4289).abs() < 0.005);
    assert!((report.sampled["2.html"] - report.iterated["2.html"]).abs() < 0.05);

    let text = render_text(&report);
    assert!(text.starts_with("PageRank Results from Sampling (n = 10000)\n"));
    assert!(text.contains("PageRank Results from Iteration\n"));
    assert_eq!(text.lines().count(), 10);
}

#[test]
fn test_empty_directory_cannot_be_ranked() {
    let d = tempfile::tempdir().unwrap();
    let corpus = crawl(d.path()).unwrap();
    assert!(corpus.is_empty());

    let err = RankEngine::run(&corpus, &RankConfig::default()).unwrap_err();
    assert!(matches!(err, RankError::InvalidArgument(_)));
}
