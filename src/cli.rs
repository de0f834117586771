use clap::{Parser, Subcommand};
use std::path::PathBuf;

// Display order for log level option (placed at end of help text)
const LOG_LEVEL_DISPLAY_ORDER: usize = 100;

/// CLI arguments
#[derive(Parser)]
#[command(name = "tailwind-sorter", version, about = "Sort Tailwind CSS classes in your project files", long_about = None)]
pub struct Cli {
    /// Log level (see https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html)
    /// [env: TAILWIND_SORTER_LOG=] [default: info]
    #[arg(
        long,
        env = "TAILWIND_SORTER_LOG",
        default_value = "info",
        global = true,
        hide_default_value = true,
        hide_env = true,
        display_order = LOG_LEVEL_DISPLAY_ORDER,
        verbatim_doc_comment
    )]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a default tailwind-sorter.toml config file
    Init(InitArgs),
    /// Report unsorted class lists, or sort them with --fix
    Check(CheckArgs),
}

/// Arguments for the init command
#[derive(Parser)]
pub struct InitArgs {
    /// Path to config file
    #[arg(long, default_value = crate::config::DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Override existing config file
    #[arg(long)]
    pub r#override: bool,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Files or directories to scan
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Apply fixes to the files
    #[arg(long)]
    pub fix: bool,

    /// Path to a custom TOML config file
    /// [default: tailwind-sorter.toml if present]
    #[arg(long, verbatim_doc_comment)]
    pub config: Option<PathBuf>,

    /// Output file path (.md or .json)
    #[arg(long)]
    pub output: Option<String>,
}
