// src/graph/mod.rs
//! Link corpus construction and ranking.

pub mod corpus;
pub mod crawl;
pub mod rank;

pub use corpus::Corpus;
