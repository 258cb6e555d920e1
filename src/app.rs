//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and installs the logger
//! - parses CLI arguments
//! - renders the dashboard view once
//! - hands the view to the chosen host (terminal viewer, stdout, file)

use std::io::{self, Write};

use clap::Parser;

use crate::cli::{Command, ExportArgs, HtmlArgs, PrintArgs};
use crate::error::AppError;
use crate::io::{ExportFormat, export_to_file, render_view};
use crate::view::View;

/// Entry point for the `bec` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    crate::logging::init();

    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);
    log::debug!("command: {:?}", cli.command);

    let view = crate::view::render();

    match cli.command {
        Command::Tui => crate::tui::run(view),
        Command::Print(args) => handle_print(&view, &args),
        Command::Html(args) => handle_html(&view, &args),
        Command::Export(args) => handle_export(&view, &args),
    }
}

fn handle_print(view: &View, args: &PrintArgs) -> Result<(), AppError> {
    write_stdout(view, ExportFormat::Text, args.width)
}

fn handle_html(view: &View, args: &HtmlArgs) -> Result<(), AppError> {
    match &args.out {
        Some(path) => {
            export_to_file(path, view, ExportFormat::Html, 0)?;
            Ok(())
        }
        None => write_stdout(view, ExportFormat::Html, 0),
    }
}

fn handle_export(view: &View, args: &ExportArgs) -> Result<(), AppError> {
    let bytes = export_to_file(&args.out, view, args.format, args.width)?;
    let mut stderr = io::stderr();
    let _ = writeln!(stderr, "Wrote {} ({bytes} bytes)", args.out.display());
    Ok(())
}

fn write_stdout(view: &View, format: ExportFormat, width: usize) -> Result<(), AppError> {
    let rendered = render_view(view, format, width)?;
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    match lock.write_all(rendered.as_bytes()).and_then(|()| lock.flush()) {
        Ok(()) => {
            log::debug!("wrote {} bytes of {format:?} to stdout", rendered.len());
            Ok(())
        }
        // `bec print | head` closes the pipe early; that is not a failure.
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(AppError::io(format!("Failed to write to stdout: {e}"))),
    }
}

/// Rewrite argv so a bare `bec` opens the terminal viewer.
///
/// Any other invocation is passed to clap unchanged.
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    if argv.len() <= 1 {
        argv.push("tui".to_string());
    }
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_tui() {
        assert_eq!(rewrite_args(args(&["bec"])), args(&["bec", "tui"]));
    }

    #[test]
    fn explicit_commands_are_untouched() {
        assert_eq!(rewrite_args(args(&["bec", "print"])), args(&["bec", "print"]));
        assert_eq!(rewrite_args(args(&["bec", "--help"])), args(&["bec", "--help"]));
        assert_eq!(rewrite_args(args(&["bec", "--width", "80"])), args(&["bec", "--width", "80"]));
    }

    #[test]
    fn rewritten_bare_invocation_parses() {
        let cli = crate::cli::Cli::try_parse_from(rewrite_args(args(&["bec"]))).unwrap();
        assert!(matches!(cli.command, Command::Tui));
    }

    #[test]
    fn html_to_file_writes_document() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("bec.html");
        let view = crate::view::render();
        handle_html(&view, &HtmlArgs { out: Some(out.clone()) }).unwrap();
        assert!(std::fs::read_to_string(out).unwrap().contains("Model Comparison"));
    }

    #[test]
    fn export_command_writes_json() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("bec.json");
        let view = crate::view::render();
        let args = ExportArgs {
            format: ExportFormat::Json,
            out: out.clone(),
            width: 100,
        };
        handle_export(&view, &args).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out).unwrap()).unwrap();
        assert_eq!(json["root"]["children"].as_array().unwrap().len(), 5);
    }
}
