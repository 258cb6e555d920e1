//! Styled word flow for ratatui lines.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

/// Smallest unit the flow never breaks.
#[derive(Debug, Clone)]
pub struct Unit {
    pub text: String,
    pub style: Style,
    /// Attach to the previous unit without a separating space.
    pub glued: bool,
}

impl Unit {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
            glued: false,
        }
    }
}

/// Split styled runs into word units, remembering where runs abut without
/// whitespace (e.g. `"90%"` followed by `"."`).
pub fn words(runs: &[(String, Style)]) -> Vec<Unit> {
    let mut units = Vec::new();
    let mut prev_ended_ws = true;

    for (text, style) in runs {
        let starts_ws = text.starts_with(char::is_whitespace);
        for (i, word) in text.split_whitespace().enumerate() {
            units.push(Unit {
                text: word.to_string(),
                style: *style,
                glued: i == 0 && !starts_ws && !prev_ended_ws,
            });
        }
        if !text.is_empty() {
            prev_ended_ws = text.ends_with(char::is_whitespace);
        }
    }

    units
}

/// Greedy flow of units into lines no wider than `width` characters.
///
/// Glued units always stay on the line of the unit they attach to.
pub fn flow(units: &[Unit], width: usize) -> Vec<Line<'static>> {
    let width = width.max(1);
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut len = 0usize;

    for unit in units {
        let unit_len = unit.text.chars().count();
        let sep = usize::from(len > 0 && !unit.glued);
        if len > 0 && !unit.glued && len + sep + unit_len > width {
            lines.push(Line::from(std::mem::take(&mut spans)));
            len = 0;
        }
        if len > 0 && !unit.glued {
            spans.push(Span::raw(" "));
            len += 1;
        }
        spans.push(Span::styled(unit.text.clone(), unit.style));
        len += unit_len;
    }
    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }

    lines
}

/// Wrap a single plain string in one style.
pub fn wrap_styled(text: &str, style: Style, width: usize) -> Vec<Line<'static>> {
    flow(&words(&[(text.to_string(), style)]), width)
}

/// Prefix every line with `indent` spaces.
pub fn indent(lines: Vec<Line<'static>>, indent: usize) -> Vec<Line<'static>> {
    let pad = " ".repeat(indent);
    lines
        .into_iter()
        .map(|line| {
            let mut spans = vec![Span::raw(pad.clone())];
            spans.extend(line.spans);
            Line::from(spans)
        })
        .collect()
}

pub fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}
