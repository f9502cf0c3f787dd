#![forbid(unsafe_code)]

mod config;

use std::process;

use anyhow::Context;
use clap::Parser;
use flowcheck::report::{self, FileReport};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{Cli, Format};

pub const TRACING_TARGET_CLI: &str = "flowcheck::cli";

fn main() {
    let error = match run() {
        Ok(code) => process::exit(code),
        Err(error) => error,
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(target: TRACING_TARGET_CLI, error = %error, "flowcheck failed");
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Resolve inputs, validate each one and print the report.
/// Returns the process exit status.
fn run() -> anyhow::Result<i32> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level);

    let paths = if cli.paths.is_empty() {
        let dir = match &cli.dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().context("failed to resolve working directory")?,
        };
        flowcheck::discover::discover(&dir, &cli.pattern)
            .context("failed to discover workflow files")?
    } else {
        cli.paths.clone()
    };

    if paths.is_empty() {
        tracing::warn!(
            target: TRACING_TARGET_CLI,
            pattern = %cli.pattern,
            "no workflow files to validate"
        );
    }

    let reports: Vec<FileReport> = paths.iter().map(|p| flowcheck::check_file(p)).collect();

    let output = match cli.format {
        Format::Text => report::render_text(&reports),
        Format::Json => {
            let mut json = report::render_json(&reports).context("failed to encode report")?;
            json.push('\n');
            json
        }
    };
    print!("{output}");

    let code = report::exit_code(&reports);
    tracing::info!(
        target: TRACING_TARGET_CLI,
        files = reports.len(),
        failed = reports.iter().filter(|r| !r.is_ok()).count(),
        "validation finished"
    );

    Ok(code)
}

/// Initializes tracing on stderr, preferring `RUST_LOG` over `--log-level`.
fn init_tracing(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
