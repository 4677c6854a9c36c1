use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `ensk` binary.
#[derive(Debug, Parser)]
#[command(name = "ensk", version, about = "ENSK Family content bot")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format for `tree` and `init`: text, json, raw
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Database file (overrides storage.db_path)
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Media directory for uploaded files (overrides storage.media_dir)
    #[arg(long, global = true)]
    pub media: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            db: self.db.clone(),
            media: self.media.clone(),
        }
    }
}
