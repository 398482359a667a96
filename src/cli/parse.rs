//! CLI parse: clap types for ModPocket. No behavior; definitions only.

use crate::types::Theme;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// ModPocket CLI - turn a shared timetable link into a phone wallpaper
#[derive(Parser)]
#[command(name = "modpocket")]
#[command(about = "Turn shared university timetable links into phone wallpapers")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, global = true, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, short, global = true, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a share URL and print the selection it encodes
    Decode {
        /// Timetable share URL
        url: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Resolve a share URL against the catalog and print the schedule
    Schedule {
        /// Timetable share URL
        url: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
        /// Academic year label, e.g. 2024-2025 (default: derived from today's date)
        #[arg(long)]
        academic_year: Option<String>,
    },
    /// Print the image-generation prompt for a share URL
    Prompt {
        /// Timetable share URL
        url: String,
        #[command(flatten)]
        style: StyleArgs,
    },
    /// Generate the wallpaper image
    Generate {
        /// Timetable share URL
        url: String,
        #[command(flatten)]
        style: StyleArgs,
        /// Write the image to this file instead of printing JSON
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// List the available design styles
    Styles {
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Inspect the effective configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Look-and-feel options shared by `prompt` and `generate`. Unset values come from `[defaults]`.
#[derive(Args, Debug, Clone, Default)]
pub struct StyleArgs {
    /// Design style (see `modpocket styles`)
    #[arg(long)]
    pub style: Option<String>,
    /// Colour theme (light or dark)
    #[arg(long)]
    pub theme: Option<Theme>,
    /// Aspect ratio (9:16, 3:4, 1:1, 4:3, 16:9)
    #[arg(long)]
    pub aspect_ratio: Option<String>,
    /// Academic year label, e.g. 2024-2025
    #[arg(long)]
    pub academic_year: Option<String>,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the merged configuration as TOML (secrets redacted)
    Show,
    /// Validate the merged configuration
    Validate,
}
