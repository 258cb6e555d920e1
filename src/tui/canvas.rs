//! Paints the dashboard view into an off-screen ratatui buffer.
//!
//! The canvas is as tall as the content needs; the viewer scrolls a window
//! over it. Band heights are computed from pre-wrapped lines so every
//! paragraph is drawn without ratatui's own wrapping.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, Widget};

use crate::view::{Element, Node, Role, SectionId, View};

use super::text::{Unit, flow, indent, wrap_styled, words};

/// Narrowest metric card before the grid wraps to another row.
const MIN_CARD_WIDTH: u16 = 26;
/// Share of the width given to the left panel of a two-column band.
const LEFT_COLUMN_PCT: u16 = 62;
/// Comparison table column shares: name, input, focus, score, note.
const TABLE_COLUMN_PCT: [u16; 5] = [26, 14, 16, 12, 32];
/// Fixed meter fill; the meter is decoration, not a value.
const METER_FILL_PCT: usize = 80;

const ACCENT: Color = Color::Cyan;
const MUTED: Color = Color::Gray;
const POSITIVE: Color = Color::LightGreen;
const STRIPE: Color = Color::Rgb(30, 41, 59);

/// One horizontal slice of the canvas.
enum Band<'v> {
    Header(&'v Element),
    Metrics(&'v Element),
    Panel(&'v Element),
    Columns(&'v Element, &'v Element),
}

/// Paint the whole view at `width` columns. The returned buffer's height is
/// the content height.
pub fn paint(view: &View, width: u16) -> Buffer {
    let width = width.max(20);
    let bands = bands(view);
    let heights: Vec<u16> = bands.iter().map(|b| band_height(b, width)).collect();
    let total: u16 = heights.iter().fold(0u16, |acc, h| acc.saturating_add(*h));

    let mut buf = Buffer::empty(Rect::new(0, 0, width, total.max(1)));
    let mut y = 0u16;
    for (band, height) in bands.iter().zip(heights) {
        let area = Rect::new(0, y, width, height);
        paint_band(band, area, &mut buf);
        y = y.saturating_add(height);
    }

    buf
}

/// Plain text of every canvas row.
pub fn rows(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

fn bands(view: &View) -> Vec<Band<'_>> {
    view.root()
        .elements()
        .filter_map(|el| match el.role {
            Role::Section(SectionId::Header) => Some(Band::Header(el)),
            Role::Section(SectionId::Metrics) => Some(Band::Metrics(el)),
            Role::Section(_) => Some(Band::Panel(el)),
            Role::Columns => {
                let mut parts = el.elements();
                match (parts.next(), parts.next()) {
                    (Some(left), Some(right)) => Some(Band::Columns(left, right)),
                    (Some(only), None) => Some(Band::Panel(only)),
                    _ => None,
                }
            }
            _ => None,
        })
        .collect()
}

fn band_height(band: &Band<'_>, width: u16) -> u16 {
    match band {
        Band::Header(section) => lines_height(&header_lines(section, inner(width))),
        Band::Metrics(section) => metric_grid(section, width)
            .iter()
            .map(|row| row.iter().map(|(card, w)| card_height(card, *w)).max().unwrap_or(0))
            .sum(),
        Band::Panel(section) => panel_height(section, width),
        Band::Columns(left, right) => {
            let (lw, rw) = column_widths(width);
            panel_height(left, lw).max(panel_height(right, rw))
        }
    }
}

fn paint_band(band: &Band<'_>, area: Rect, buf: &mut Buffer) {
    match band {
        Band::Header(section) => {
            let badge = section.first(Role::Badge).map(Element::text).unwrap_or_default();
            let block = rounded(ACCENT).title(Span::styled(
                format!(" {badge} "),
                Style::default().fg(POSITIVE),
            ));
            Paragraph::new(header_lines(section, inner(area.width)))
                .block(block)
                .render(area, buf);
        }
        Band::Metrics(section) => {
            let mut y = area.y;
            for row in metric_grid(section, area.width) {
                let height = row.iter().map(|(card, w)| card_height(card, *w)).max().unwrap_or(0);
                let mut x = area.x;
                for (card, w) in row {
                    paint_card(card, Rect::new(x, y, w, height), buf);
                    x += w;
                }
                y += height;
            }
        }
        Band::Panel(section) => paint_panel(section, area, buf),
        Band::Columns(left, right) => {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(column_widths(area.width).0), Constraint::Min(0)])
                .split(area);
            paint_panel(left, chunks[0], buf);
            paint_panel(right, chunks[1], buf);
        }
    }
}

fn inner(width: u16) -> usize {
    usize::from(width.saturating_sub(2))
}

fn lines_height(lines: &[Line<'_>]) -> u16 {
    u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2)
}

fn column_widths(width: u16) -> (u16, u16) {
    let left = u32::from(width) * u32::from(LEFT_COLUMN_PCT) / 100;
    let left = u16::try_from(left).unwrap_or(width);
    (left, width - left)
}

fn rounded(color: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

// ---------------------------------------------------------------------------
// Header

fn header_lines(section: &Element, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if let Some(title) = section.first(Role::Title) {
        lines.extend(wrap_styled(
            &title.own_text(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            width,
        ));
        if let Some(sub) = title.first(Role::Subtitle) {
            lines.extend(wrap_styled(&sub.text(), Style::default().fg(MUTED), width));
        }
    }

    for el in section.elements() {
        match el.role {
            Role::Paragraph => {
                lines.push(Line::default());
                lines.extend(inline_lines(el, Style::default(), width));
            }
            Role::TagList => {
                lines.push(Line::default());
                lines.extend(chip_lines(el, width));
            }
            _ => {}
        }
    }

    lines
}

fn chip_lines(list: &Element, width: usize) -> Vec<Line<'static>> {
    let chip = Style::default().fg(Color::Black).bg(MUTED);
    let units: Vec<Unit> = list
        .elements()
        .map(|t| Unit::new(format!(" {} ", t.text()), chip))
        .collect();
    flow(&units, width)
}

/// Paragraph with strong/emphasis runs styled.
fn inline_lines(el: &Element, base: Style, width: usize) -> Vec<Line<'static>> {
    let runs: Vec<(String, Style)> = el
        .children
        .iter()
        .map(|node| match node {
            Node::Text(s) => (s.clone(), base),
            Node::Element(inner) => {
                let style = match inner.role {
                    Role::Strong => base.fg(POSITIVE).add_modifier(Modifier::BOLD),
                    Role::Emphasis => base.add_modifier(Modifier::ITALIC),
                    _ => base,
                };
                (inner.text(), style)
            }
        })
        .collect();
    flow(&words(&runs), width)
}

// ---------------------------------------------------------------------------
// Metric cards

fn metric_grid(section: &Element, width: u16) -> Vec<Vec<(&Element, u16)>> {
    let cards: Vec<&Element> = section.elements().filter(|e| e.role == Role::MetricCard).collect();
    if cards.is_empty() {
        return Vec::new();
    }

    let per_row = usize::from((width / MIN_CARD_WIDTH).max(1)).min(cards.len());
    cards
        .chunks(per_row)
        .map(|row| {
            let n = u16::try_from(row.len()).unwrap_or(1);
            let base = width / n;
            let extra = width - base * n;
            row.iter()
                .enumerate()
                .map(|(i, card)| {
                    let w = if (i as u16) < extra { base + 1 } else { base };
                    (*card, w)
                })
                .collect()
        })
        .collect()
}

fn card_lines(card: &Element, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if let Some(label) = card.first(Role::MetricLabel) {
        lines.extend(wrap_styled(&label.text().to_uppercase(), Style::default().fg(MUTED), width));
    }
    if let Some(value) = card.first(Role::MetricValue) {
        lines.push(Line::from(Span::styled(
            value.text(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )));
    }
    if let Some(sub) = card.first(Role::MetricSublabel) {
        lines.extend(wrap_styled(&sub.text(), Style::default().fg(Color::DarkGray), width));
    }
    lines
}

fn card_height(card: &Element, width: u16) -> u16 {
    lines_height(&card_lines(card, inner(width)))
}

fn paint_card(card: &Element, area: Rect, buf: &mut Buffer) {
    Paragraph::new(card_lines(card, inner(area.width)))
        .block(rounded(Color::DarkGray))
        .render(area, buf);
}

// ---------------------------------------------------------------------------
// Titled panels

fn panel_title(section: &Element) -> Line<'static> {
    let mut spans = Vec::new();
    if let Some(heading) = section.first(Role::Heading) {
        spans.push(Span::styled(
            format!(" {} ", heading.own_text()),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
        if let Some(chip) = heading.first(Role::Tag) {
            spans.push(Span::styled(
                format!("[{}] ", chip.text()),
                Style::default().fg(POSITIVE),
            ));
        }
    }
    Line::from(spans)
}

fn panel_lines(section: &Element, width: usize) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();
    for el in section.elements() {
        match el.role {
            Role::Heading | Role::Table => continue,
            Role::Paragraph => {
                if !lines.is_empty() {
                    lines.push(Line::default());
                }
                lines.extend(inline_lines(el, Style::default().fg(MUTED), width));
            }
            Role::StepList => {
                lines.push(Line::default());
                lines.extend(step_lines(el, width));
            }
            Role::KeywordList => {
                lines.push(Line::default());
                lines.extend(keyword_lines(el, width));
            }
            Role::List => lines.extend(insight_lines(el, width)),
            Role::TagList => {
                lines.push(Line::default());
                lines.extend(chip_lines(el, width));
            }
            _ => lines.extend(wrap_styled(&el.text(), Style::default(), width)),
        }
    }
    lines
}

fn panel_height(section: &Element, width: u16) -> u16 {
    let body = lines_height(&panel_lines(section, inner(width)));
    match section.first(Role::Table) {
        Some(table) => body + table_height(table, inner(width)) + 1,
        None => body,
    }
}

fn paint_panel(section: &Element, area: Rect, buf: &mut Buffer) {
    let block = rounded(Color::DarkGray).title(panel_title(section));
    let body = block.inner(area);
    block.render(area, buf);

    let lines = panel_lines(section, usize::from(body.width));
    let text_height = u16::try_from(lines.len()).unwrap_or(u16::MAX).min(body.height);
    Paragraph::new(Text::from(lines)).render(
        Rect::new(body.x, body.y, body.width, text_height),
        buf,
    );

    if let Some(table) = section.first(Role::Table) {
        let top = body.y + text_height + 1;
        if top < body.bottom() {
            let area = Rect::new(body.x, top, body.width, body.bottom() - top);
            paint_table(table, area, buf);
        }
    }
}

fn step_lines(list: &Element, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, step) in list.elements().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        let index = step.first(Role::StepIndex).map(Element::text).unwrap_or_default();
        let title = step.first(Role::StepTitle).map(Element::text).unwrap_or_default();
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {index} "),
                Style::default().fg(Color::Black).bg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
        ]));

        if let Some(body) = step.first(Role::StepBody) {
            let pad = index.chars().count() + 3;
            let body = wrap_styled(&body.text(), Style::default().fg(MUTED), width.saturating_sub(pad));
            lines.extend(indent(body, pad));
        }
    }
    lines
}

fn keyword_lines(list: &Element, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for row in list.elements() {
        let name = row.first(Role::KeywordName).map(Element::text).unwrap_or_default();
        let drop = row.first(Role::KeywordDrop).map(Element::text).unwrap_or_default();
        let gap = width
            .saturating_sub(name.chars().count() + drop.chars().count())
            .max(1);
        lines.push(Line::from(vec![
            Span::styled(name, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            Span::raw(" ".repeat(gap)),
            Span::styled(drop, Style::default().fg(POSITIVE)),
        ]));

        if row.first(Role::Meter).is_some() {
            let filled = width * METER_FILL_PCT / 100;
            lines.push(Line::from(vec![
                Span::styled("━".repeat(filled), Style::default().fg(POSITIVE)),
                Span::styled("─".repeat(width - filled), Style::default().fg(Color::DarkGray)),
            ]));
        }
    }
    lines
}

fn insight_lines(list: &Element, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for item in list.elements() {
        let Some(para) = item.first(Role::Paragraph) else {
            continue;
        };
        let body = inline_lines(para, Style::default(), width.saturating_sub(2));
        for (i, line) in body.into_iter().enumerate() {
            let lead = if i == 0 && item.first(Role::Bullet).is_some() {
                Span::styled("• ", Style::default().fg(MUTED))
            } else {
                Span::raw("  ")
            };
            let mut spans = vec![lead];
            spans.extend(line.spans);
            lines.push(Line::from(spans));
        }
    }
    lines
}

// ---------------------------------------------------------------------------
// Comparison table

fn table_column_widths(width: usize) -> Vec<usize> {
    TABLE_COLUMN_PCT
        .iter()
        .map(|pct| (width * usize::from(*pct) / 100).saturating_sub(1).max(1))
        .collect()
}

/// Wrapped cells per row; the first row is the header when present.
fn table_cells(table: &Element, width: usize) -> Vec<Vec<Vec<Line<'static>>>> {
    let widths = table_column_widths(width);
    table
        .find_all(Role::TableRow)
        .into_iter()
        .map(|row| {
            row.elements()
                .zip(&widths)
                .map(|(cell, w)| {
                    let style = match cell.class.as_deref() {
                        Some(c) if c.contains("cell-score") || c.contains("cell-name") => {
                            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                        }
                        Some(c) if c.contains("cell-note") => Style::default().fg(MUTED),
                        _ if cell.role == Role::HeaderCell => {
                            Style::default().fg(MUTED).add_modifier(Modifier::BOLD)
                        }
                        _ => Style::default(),
                    };
                    wrap_styled(&cell.text(), style, *w)
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

fn row_height(cells: &[Vec<Line<'static>>]) -> u16 {
    cells
        .iter()
        .map(|c| u16::try_from(c.len()).unwrap_or(u16::MAX))
        .max()
        .unwrap_or(0)
        .max(1)
}

fn table_height(table: &Element, width: usize) -> u16 {
    let rows = table_cells(table, width);
    let header_margin = u16::from(table.first(Role::TableHead).is_some());
    rows.iter().map(|r| row_height(r)).sum::<u16>() + header_margin
}

fn paint_table(table: &Element, area: Rect, buf: &mut Buffer) {
    let width = usize::from(area.width);
    let widths: Vec<Constraint> = table_column_widths(width)
        .into_iter()
        .map(|w| Constraint::Length(u16::try_from(w).unwrap_or(u16::MAX)))
        .collect();

    let mut rows = table_cells(table, width).into_iter();
    let has_head = table.first(Role::TableHead).is_some();
    let header = if has_head {
        rows.next().map(|cells| {
            let height = row_height(&cells);
            Row::new(cells.into_iter().map(|c| Cell::from(Text::from(c))))
                .height(height)
                .bottom_margin(1)
        })
    } else {
        None
    };

    let body: Vec<Row<'static>> = rows
        .enumerate()
        .map(|(i, cells)| {
            let height = row_height(&cells);
            let row = Row::new(cells.into_iter().map(|c| Cell::from(Text::from(c)))).height(height);
            if i % 2 == 1 { row.style(Style::default().bg(STRIPE)) } else { row }
        })
        .collect();

    let mut widget = Table::new(body, widths).column_spacing(1);
    if let Some(header) = header {
        widget = widget.header(header);
    }
    widget.render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DashboardData, Metric};
    use crate::view::{render, render_with};

    fn find_row(rows: &[String], needle: &str) -> usize {
        rows.iter()
            .position(|r| r.contains(needle))
            .unwrap_or_else(|| panic!("{needle} not painted"))
    }

    #[test]
    fn paints_literal_values() {
        let rows = rows(&paint(&render(), 140));
        for needle in ["4,181", "≈ 29%", "81.3%", "95.4%", "≈ 0.92", "Scikit-learn", "Dataset construction"] {
            find_row(&rows, needle);
        }
    }

    #[test]
    fn keyword_rows_are_painted_in_order() {
        let rows = rows(&paint(&render(), 140));
        let invoice = find_row(&rows, "≈ 93% drop");
        let immediately = find_row(&rows, "≈ 89% drop");
        let confirm = find_row(&rows, "≈ 78% drop");
        assert!(invoice < immediately && immediately < confirm);
    }

    #[test]
    fn score_sits_on_its_model_row() {
        let rows = rows(&paint(&render(), 160));
        let row = find_row(&rows, "(poisoned text)");
        assert!(rows[row].contains("≈ 0.92"));
    }

    #[test]
    fn painting_is_deterministic() {
        let a = paint(&render(), 100);
        let b = paint(&render(), 100);
        assert_eq!(a, b);
    }

    #[test]
    fn narrow_width_wraps_cards_into_more_rows() {
        let view = render();
        let section = view.section(SectionId::Metrics).unwrap();
        assert_eq!(metric_grid(section, 120).len(), 1);
        assert_eq!(metric_grid(section, 60).len(), 2);
        assert_eq!(metric_grid(section, 20).len(), 4);
    }

    #[test]
    fn card_without_sublabel_is_shorter() {
        let metrics = [
            Metric::new("Total BEC emails", "4,181"),
            Metric::new("Total BEC emails", "4,181").with_sublabel("Synthetic BEC phishing samples"),
        ];
        let data = DashboardData {
            metrics: &metrics,
            ..DashboardData::builtin()
        };
        let view = render_with(&data);
        let cards: Vec<&Element> = view.root().find_all(Role::MetricCard);
        assert_eq!(card_height(cards[0], 40), 4);
        assert_eq!(card_height(cards[1], 40), 5);
    }

    #[test]
    fn canvas_height_matches_band_sum() {
        let view = render();
        let buf = paint(&view, 120);
        let expected: u16 = bands(&view).iter().map(|b| band_height(b, 120)).sum();
        assert_eq!(buf.area.height, expected);
    }
}
