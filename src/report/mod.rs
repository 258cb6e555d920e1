//! Non-interactive renderings of the dashboard view.
//!
//! - plain text for terminals and pipes (`format`)
//! - a self-contained static HTML page (`html`)

pub mod format;
pub mod html;

pub use format::format_view;
pub use html::render_html;

/// Greedy word wrap by character count.
///
/// Words longer than `width` get a line of their own rather than being split.
/// Empty input yields no lines.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if line_len > 0 && line_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.push_str(word);
        line_len += word_len;
    }
    if !line.is_empty() {
        lines.push(line);
    }

    lines
}
