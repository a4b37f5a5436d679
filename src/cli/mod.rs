// src/cli/mod.rs
//! Command-line front end.

pub mod args;
pub mod dispatch;

pub use args::Cli;

/// Tracing filter directives for a run.
///
/// `--verbose` forces `debug`. Otherwise a non-empty `RUST_LOG` is used as is,
/// falling back to `warn`.
#[must_use]
pub fn log_directives(verbose: bool, rust_log: Option<&str>) -> String {
    if verbose {
        return "debug".to_string();
    }
    match rust_log.map(str::trim) {
        Some(filter) if !filter.is_empty() => filter.to_string(),
        _ => "warn".to_string(),
    }
}
