//! Write the dashboard view in one of the supported formats.
//!
//! JSON is the serialized view tree itself; text and HTML go through the
//! `report` renderers.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;

use crate::error::AppError;
use crate::view::View;

/// Output format for `bec export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// The view tree as pretty-printed JSON.
    Json,
    /// Plain text, as printed by `bec print`.
    Text,
    /// Self-contained static HTML page.
    Html,
}

/// Render `view` in `format`. `width` only affects text output.
pub fn render_view(view: &View, format: ExportFormat, width: usize) -> Result<String, AppError> {
    match format {
        ExportFormat::Json => serde_json::to_string_pretty(view)
            .map(|mut s| {
                s.push('\n');
                s
            })
            .map_err(|e| AppError::io(format!("Failed to serialize view: {e}"))),
        ExportFormat::Text => Ok(crate::report::format_view(view, width)),
        ExportFormat::Html => Ok(crate::report::render_html(view)),
    }
}

/// Render and write to any writer. Returns the number of bytes written.
pub fn write_view<W: Write>(
    writer: &mut W,
    view: &View,
    format: ExportFormat,
    width: usize,
) -> Result<usize, AppError> {
    let rendered = render_view(view, format, width)?;
    writer
        .write_all(rendered.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| AppError::io(format!("Failed to write {format:?} output: {e}")))?;
    Ok(rendered.len())
}

/// Render and write to a file, replacing it if present.
pub fn export_to_file(
    path: &Path,
    view: &View,
    format: ExportFormat,
    width: usize,
) -> Result<usize, AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::io(format!("Failed to create '{}': {e}", path.display())))?;
    let mut writer = BufWriter::new(file);
    let bytes = write_view(&mut writer, view, format, width)?;
    log::info!("wrote {bytes} bytes of {format:?} to {}", path.display());
    Ok(bytes)
}
