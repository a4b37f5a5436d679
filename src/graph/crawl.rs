// src/graph/crawl.rs
//! Builds a corpus from a directory of HTML pages.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::debug;
use walkdir::WalkDir;

use super::corpus::Corpus;
use crate::error::{RankError, Result};

const LINK_PATTERN: &str = r#"<a\s+(?:[^>]*?)href="([^"]*)""#;

/// Reads every `*.html` file directly inside `dir` and links pages by their
/// anchor `href`s. Page ids are file names; subdirectories are not visited.
///
/// # Errors
/// Returns `Io` if the directory or a page cannot be read.
pub fn crawl(dir: &Path) -> Result<Corpus> {
    let re = Regex::new(LINK_PATTERN)?;
    let mut pages = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() || !is_html(entry.path()) {
            continue;
        }
        let content = fs::read_to_string(entry.path()).map_err(|source| RankError::Io {
            source,
            path: entry.path().to_path_buf(),
        })?;
        let name = entry.file_name().to_string_lossy().into_owned();
        pages.push((name, extract_links_with(&re, &content)));
    }

    let corpus = Corpus::new(pages);
    debug!(dir = %dir.display(), pages = corpus.len(), links = corpus.edge_count(), "crawled");
    Ok(corpus)
}

/// Extracts the `href` targets of anchor tags in `content`.
///
/// # Errors
/// Only fails if the link pattern does not compile.
pub fn extract_links(content: &str) -> Result<BTreeSet<String>> {
    let re = Regex::new(LINK_PATTERN)?;
    Ok(extract_links_with(&re, content))
}

fn extract_links_with(re: &Regex, content: &str) -> BTreeSet<String> {
    re.captures_iter(content)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

fn is_html(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "html")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_anchor_hrefs() {
        let content = r#"<a href="2.html">Two</a> <a class="x" href="3.html">Three</a>
            <link href="style.css"> <a href="2.html">again</a>"#;
        let links = extract_links(content).unwrap();
        let links: Vec<_> = links.iter().map(String::as_str).collect();
        assert_eq!(links, vec!["2.html", "3.html"]);
    }

    #[test]
    fn test_is_html() {
        assert!(is_html(Path::new("corpus/1.html")));
        assert!(!is_html(Path::new("corpus/notes.txt")));
        assert!(!is_html(Path::new("corpus/html")));
    }
}
