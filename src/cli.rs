//! Command-line argument definitions for `fly`.
//!
//! Uses [`clap`] derive macros for argument parsing.

use clap::{Parser, ValueEnum};

/// Print stdin lines through a configurable console logger.
///
/// Each non-empty input line becomes one log entry at `--level`, decorated
/// with the logger id, origin and tags.
#[derive(Debug, Parser)]
#[command(name = "fly", version, about, long_about = None)]
pub struct Cli {
    /// Control color output.
    ///
    /// `auto` enables colors only when stdout is a TTY and `NO_COLOR` is unset.
    #[arg(short = 'c', long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Logger identifier printed in the id section.
    #[arg(long, default_value = "fly")]
    pub id: String,

    /// Level every line is logged at.
    #[arg(short = 'l', long, default_value = "log")]
    pub level: String,

    /// Minimum level to print, as a level name or a number.
    #[arg(short = 't', long)]
    pub threshold: Option<String>,

    /// Tag attached to every line. Repeatable.
    #[arg(short = 'T', long = "tag")]
    pub tags: Vec<String>,

    /// Origin label printed in the file name section.
    #[arg(short = 'f', long)]
    pub file_name: Option<String>,

    /// Section order (comma-separated: fileName, id, message, level, tags).
    #[arg(short = 'o', long, value_delimiter = ',')]
    pub print_order: Option<Vec<String>>,

    /// Print the level section.
    #[arg(long)]
    pub print_level: bool,

    /// Omit the `Section: ` labels.
    #[arg(long)]
    pub no_labels: bool,

    /// Path to configuration file.
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Enable colors only when stdout is a TTY.
    Auto,
    /// Always enable colors.
    Always,
    /// Never enable colors.
    Never,
}
