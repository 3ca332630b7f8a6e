use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use lexis_config::SchemaVariant;

/// Audit a vocabulary dataset against its schema and its audio/image assets.
#[derive(Parser, Debug)]
#[command(name = "lexis", version, about)]
pub struct Cli {
    /// JSON config file; replaces LEXIS_* environment settings
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Dataset JSON file
    #[arg(long, value_name = "PATH")]
    pub dataset: Option<PathBuf>,

    /// Root of the mp3 tree
    #[arg(long, value_name = "DIR")]
    pub audio_root: Option<PathBuf>,

    /// Root of the png tree
    #[arg(long, value_name = "DIR")]
    pub image_root: Option<PathBuf>,

    /// Word entry layout in force: ranked (6 keys with frequency, the default) or plain
    /// (5 keys). Datasets without a frequency field need --schema plain.
    #[arg(long, value_name = "VARIANT")]
    pub schema: Option<SchemaVariant>,

    /// Skip remote image requests
    #[arg(long)]
    pub offline: bool,

    /// Skip the dataset-wide word/image total check
    #[arg(long)]
    pub no_total_count: bool,

    /// Run only the named check (repeatable)
    #[arg(long, value_name = "CHECK")]
    pub only: Vec<String>,

    /// Do not run the named check (repeatable)
    #[arg(long, value_name = "CHECK")]
    pub skip: Vec<String>,

    /// List the checks that would run and exit
    #[arg(long)]
    pub list: bool,

    /// Report format on stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log format on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}
