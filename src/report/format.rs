//! Plain-text rendering of the dashboard view.
//!
//! Side-by-side columns are stacked; everything else keeps document order.
//! `width` bounds wrapped prose. Table rows and keyword rows are laid out on
//! single lines and may run wider.

use crate::view::{Element, Node, Role, View};

use super::wrap;

const METER_CELLS: usize = 10;
/// The keyword meter is decoration: every row shows the same fill.
const METER_FILLED: usize = 8;

/// Format the whole view as plain text.
pub fn format_view(view: &View, width: usize) -> String {
    let mut out = String::new();
    write_element(&mut out, view.root(), width.max(20), 0);
    while out.ends_with("\n\n") {
        out.pop();
    }
    out
}

fn write_element(out: &mut String, el: &Element, width: usize, indent: usize) {
    match el.role {
        Role::Dashboard | Role::Columns | Role::TableBody => {
            for child in el.elements() {
                write_element(out, child, width, indent);
            }
        }
        Role::Section(_) => {
            for child in el.elements() {
                write_element(out, child, width, indent);
            }
            out.push('\n');
        }
        Role::Badge => {
            push_line(out, indent, &format!("[ {} ]", el.text()));
            out.push('\n');
        }
        Role::Title => {
            let title = el.own_text();
            push_line(out, indent, &title);
            let mut rule_len = title.chars().count();
            if let Some(sub) = el.first(Role::Subtitle) {
                let sub = sub.text();
                rule_len = rule_len.max(sub.chars().count());
                push_line(out, indent, &sub);
            }
            push_line(out, indent, &"=".repeat(rule_len.min(width)));
        }
        Role::Heading => {
            let mut heading = el.own_text();
            if let Some(chip) = el.first(Role::Tag) {
                heading.push_str(&format!("  [{}]", chip.text()));
            }
            push_line(out, indent, &heading);
            push_line(out, indent, &"-".repeat(heading.chars().count().min(width)));
        }
        Role::Paragraph | Role::Subtitle => {
            write_wrapped(out, &marked_text(el), width, indent, indent);
            out.push('\n');
        }
        Role::TagList => {
            let chips: Vec<String> = el.elements().map(|t| format!("[{}]", t.text())).collect();
            write_wrapped(out, &chips.join(" "), width, indent, indent);
        }
        Role::MetricCard => write_metric_card(out, el, width, indent),
        Role::StepList => {
            for step in el.elements() {
                write_step(out, step, width, indent);
            }
        }
        Role::KeywordList => {
            write_keyword_rows(out, el, indent);
            out.push('\n');
        }
        Role::Table => {
            write_table(out, el, indent);
            out.push('\n');
        }
        Role::List => {
            for item in el.elements() {
                let text = item
                    .first(Role::Paragraph)
                    .map(marked_text)
                    .unwrap_or_default();
                let mut lines = wrap(&text, width.saturating_sub(indent + 2)).into_iter();
                if let Some(first) = lines.next() {
                    push_line(out, indent, &format!("• {first}"));
                }
                for line in lines {
                    push_line(out, indent + 2, &line);
                }
            }
        }
        _ => {
            let text = el.text();
            if !text.is_empty() {
                push_line(out, indent, &text);
            }
        }
    }
}

fn write_metric_card(out: &mut String, card: &Element, width: usize, indent: usize) {
    let label = card.first(Role::MetricLabel).map(Element::text).unwrap_or_default();
    let value = card.first(Role::MetricValue).map(Element::text).unwrap_or_default();
    push_line(out, indent, &format!("{label:<32} {value:>10}"));
    if let Some(sub) = card.first(Role::MetricSublabel) {
        write_wrapped(out, &sub.text(), width, indent + 4, indent + 4);
    }
}

fn write_step(out: &mut String, step: &Element, width: usize, indent: usize) {
    let index = step.first(Role::StepIndex).map(Element::text).unwrap_or_default();
    let title = step.first(Role::StepTitle).map(Element::text).unwrap_or_default();
    push_line(out, indent, &format!("{index}  {title}"));
    if let Some(body) = step.first(Role::StepBody) {
        let body_indent = indent + index.chars().count() + 2;
        write_wrapped(out, &body.text(), width, body_indent, body_indent);
    }
}

fn write_keyword_rows(out: &mut String, list: &Element, indent: usize) {
    let rows: Vec<(String, String)> = list
        .elements()
        .map(|row| {
            let name = row.first(Role::KeywordName).map(Element::text).unwrap_or_default();
            let drop = row.first(Role::KeywordDrop).map(Element::text).unwrap_or_default();
            (name, drop)
        })
        .collect();

    let name_w = rows.iter().map(|(n, _)| n.chars().count()).max().unwrap_or(0);
    let drop_w = rows.iter().map(|(_, d)| d.chars().count()).max().unwrap_or(0);
    let meter = format!(
        "{}{}",
        "█".repeat(METER_FILLED),
        "░".repeat(METER_CELLS - METER_FILLED)
    );

    for (name, drop) in &rows {
        push_line(out, indent, &format!("{name:<name_w$}  {drop:>drop_w$}  {meter}"));
    }
}

fn write_table(out: &mut String, table: &Element, indent: usize) {
    let rows: Vec<Vec<String>> = table
        .find_all(Role::TableRow)
        .into_iter()
        .map(|row| row.elements().map(Element::text).collect())
        .collect();

    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let has_head = table.first(Role::TableHead).is_some();
    for (r, row) in rows.iter().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{cell:<w$}", w = widths[i]))
            .collect();
        push_line(out, indent, cells.join(" | ").trim_end());

        if r == 0 && has_head {
            let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            push_line(out, indent, &rule.join("-+-"));
        }
    }
}

fn write_wrapped(out: &mut String, text: &str, width: usize, first_indent: usize, indent: usize) {
    for (i, line) in wrap(text, width.saturating_sub(indent)).iter().enumerate() {
        push_line(out, if i == 0 { first_indent } else { indent }, line);
    }
}

fn push_line(out: &mut String, indent: usize, line: &str) {
    for _ in 0..indent {
        out.push(' ');
    }
    out.push_str(line);
    out.push('\n');
}

/// Text of an element with strong runs marked `*like this*` and emphasis
/// marked `_like this_`, so plain text keeps the distinction.
pub fn marked_text(el: &Element) -> String {
    el.children.iter().map(marked_node).collect()
}

fn marked_node(node: &Node) -> String {
    match node {
        Node::Text(s) => s.clone(),
        Node::Element(el) => {
            let inner = marked_text(el);
            match el.role {
                Role::Strong => format!("*{inner}*"),
                Role::Emphasis => format!("_{inner}_"),
                _ => inner,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{SectionId, render};

    fn text() -> String {
        format_view(&render(), 100)
    }

    #[test]
    fn shows_every_metric_value_in_order() {
        let out = text();
        let positions: Vec<usize> = ["4,181", "≈ 29%", "81.3%", "95.4%"]
            .iter()
            .map(|v| out.find(v).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn keyword_rows_keep_input_order() {
        let out = text();
        let invoice = out.find("invoice  ").unwrap();
        let immediately = out.find("immediately  ").unwrap();
        assert!(invoice < immediately);
        assert!(out.contains("≈ 93% drop"));
    }

    #[test]
    fn table_row_holds_exact_score() {
        let out = text();
        let line = out
            .lines()
            .find(|l| l.starts_with("Char TF-IDF + LR (poisoned text)"))
            .unwrap();
        let cells: Vec<&str> = line.split(" | ").map(str::trim).collect();
        assert_eq!(cells[3], "≈ 0.92");
        assert_eq!(cells.len(), 5);
    }

    #[test]
    fn metric_without_sublabel_prints_single_line() {
        use crate::domain::{DashboardData, Metric};

        let metrics = [Metric::new("Total BEC emails", "4,181")];
        let data = DashboardData {
            metrics: &metrics,
            ..DashboardData::builtin()
        };
        let view = crate::view::render_with(&data);
        let section = view.section(SectionId::Metrics).unwrap();

        let mut out = String::new();
        write_element(&mut out, section, 100, 0);
        assert_eq!(out, format!("{:<32} {:>10}\n\n", "Total BEC emails", "4,181"));
    }

    #[test]
    fn prose_respects_width() {
        let out = format_view(&render(), 60);
        let intro: Vec<&str> = out
            .lines()
            .skip_while(|l| !l.starts_with("I analyzed"))
            .take_while(|l| !l.is_empty())
            .collect();
        assert!(intro.len() > 1);
        assert!(intro.iter().all(|l| l.chars().count() <= 60));
    }

    #[test]
    fn marked_text_wraps_strong_runs() {
        let view = render();
        let insights = view.section(SectionId::Insights).unwrap();
        let first = insights.first(Role::ListItem).unwrap();
        let para = first.first(Role::Paragraph).unwrap();
        let marked = marked_text(para);
        assert!(marked.contains("*70–90%*"));
    }

    #[test]
    fn formatting_is_deterministic() {
        assert_eq!(text(), text());
    }
}
