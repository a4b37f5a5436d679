use clap::Parser;
use colored::Colorize;
use linkrank_core::cli::{self, Cli};
use linkrank_core::exit::LinkRankExit;
use tracing_subscriber::EnvFilter;

fn main() -> LinkRankExit {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|dir| cli::dispatch::execute(&cli, &dir));

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red());
            LinkRankExit::for_error(&e)
        }
    }
}

fn init_tracing(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::new(cli::log_directives(
            verbose,
            rust_log.as_deref(),
        )))
        .init();
}
