//! Command-line parsing for the `bec` dashboard viewer.
//!
//! Only host concerns live here (where and how to show the view); the view
//! itself takes no arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::io::ExportFormat;

/// Default column width for plain-text output.
pub const DEFAULT_TEXT_WIDTH: usize = 100;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "bec",
    version,
    about = "Research dashboard: Unicode adversarial obfuscation in BEC phishing"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open the dashboard in a full-screen terminal viewer (default).
    Tui,
    /// Print the dashboard as plain text.
    Print(PrintArgs),
    /// Print the dashboard as a static HTML page, or write it to a file.
    Html(HtmlArgs),
    /// Write the dashboard to a file in the chosen format.
    Export(ExportArgs),
}

#[derive(Debug, Parser, Clone)]
pub struct PrintArgs {
    /// Wrap prose at this many columns.
    #[arg(short = 'w', long, default_value_t = DEFAULT_TEXT_WIDTH)]
    pub width: usize,
}

#[derive(Debug, Parser, Clone)]
pub struct HtmlArgs {
    /// Write to this file instead of stdout.
    #[arg(short = 'o', long, value_name = "HTML")]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Parser, Clone)]
pub struct ExportArgs {
    /// Output format.
    #[arg(short = 'f', long, value_enum, default_value_t = ExportFormat::Json)]
    pub format: ExportFormat,

    /// Destination file.
    #[arg(short = 'o', long, value_name = "PATH")]
    pub out: PathBuf,

    /// Wrap width for text output.
    #[arg(short = 'w', long, default_value_t = DEFAULT_TEXT_WIDTH)]
    pub width: usize,
}
