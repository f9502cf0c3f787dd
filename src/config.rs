//! CLI configuration.
//!
//! Every option can also be supplied through the environment:
//!
//! ```bash
//! flowcheck --format json workflows/*.json
//! FLOWCHECK_PATTERN='*.workflow.json' flowcheck
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use flowcheck::discover::DEFAULT_PATTERN;

#[derive(Debug, Clone, Parser)]
#[command(name = "flowcheck")]
#[command(about = "Validate workflow JSON files for structural integrity")]
#[command(version)]
pub struct Cli {
    /// Workflow files to validate. When empty, files matching `--pattern`
    /// inside `--dir` are validated instead.
    pub paths: Vec<PathBuf>,

    /// File name pattern used for discovery.
    #[arg(long, env = "FLOWCHECK_PATTERN", default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// Directory searched during discovery (defaults to the working directory).
    #[arg(long, env = "FLOWCHECK_DIR")]
    pub dir: Option<PathBuf>,

    /// Report format.
    #[arg(long, env = "FLOWCHECK_FORMAT", value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, env = "FLOWCHECK_LOG", default_value = "warn")]
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}
