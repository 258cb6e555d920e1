//! Static HTML rendering.
//!
//! Produces one self-contained page with inline CSS and no scripts. Every
//! element maps to a fixed tag; its role is kept as a `data-role` attribute
//! so the markup can be styled or queried without knowing the presenters.

use crate::view::{Element, Node, Role, View};

/// Render the view as a complete HTML document.
pub fn render_html(view: &View) -> String {
    let title = view
        .root()
        .first(Role::Title)
        .map(Element::own_text)
        .unwrap_or_default();

    let mut body = String::new();
    write_element(&mut body, view.root(), 2);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
{body}</body>
</html>
"#,
        title = html_escape(&title),
        css = inline_css(),
    )
}

/// Render a single element (and its subtree) as an HTML fragment.
pub fn render_fragment(el: &Element) -> String {
    let mut out = String::new();
    write_element(&mut out, el, 0);
    out
}

fn tag_for(role: Role) -> &'static str {
    match role {
        Role::Dashboard => "main",
        Role::Section(_) => "section",
        Role::Title => "h1",
        Role::Heading => "h2",
        Role::Paragraph | Role::MetricLabel | Role::MetricValue | Role::MetricSublabel => "p",
        Role::StepTitle | Role::StepBody => "p",
        Role::StepList => "ol",
        Role::List => "ul",
        Role::Step | Role::ListItem => "li",
        Role::Table => "table",
        Role::TableHead => "thead",
        Role::TableBody => "tbody",
        Role::TableRow => "tr",
        Role::HeaderCell => "th",
        Role::DataCell => "td",
        Role::Strong => "strong",
        Role::Emphasis => "em",
        Role::Subtitle | Role::Tag | Role::Bullet | Role::KeywordName | Role::KeywordDrop => "span",
        Role::Columns
        | Role::Badge
        | Role::TagList
        | Role::MetricCard
        | Role::StepIndex
        | Role::KeywordList
        | Role::KeywordRow
        | Role::Meter => "div",
    }
}

fn role_name(role: Role) -> String {
    match role {
        Role::Section(id) => format!("section-{}", id.as_str()),
        other => {
            // serde names are the stable snake_case spelling
            serde_json::to_value(other)
                .ok()
                .and_then(|v| v.as_str().map(str::to_string))
                .unwrap_or_default()
        }
    }
}

/// Elements whose children flow inline stay on one line.
fn is_inline_container(role: Role) -> bool {
    !matches!(
        role,
        Role::Dashboard
            | Role::Section(_)
            | Role::Columns
            | Role::TagList
            | Role::MetricCard
            | Role::StepList
            | Role::Step
            | Role::KeywordList
            | Role::KeywordRow
            | Role::Table
            | Role::TableHead
            | Role::TableBody
            | Role::TableRow
            | Role::List
            | Role::ListItem
    )
}

fn write_element(out: &mut String, el: &Element, depth: usize) {
    let tag = tag_for(el.role);
    let pad = "  ".repeat(depth);

    out.push_str(&pad);
    out.push('<');
    out.push_str(tag);
    out.push_str(&format!(r#" data-role="{}""#, role_name(el.role)));
    if let Some(class) = &el.class {
        out.push_str(&format!(r#" class="{}""#, html_escape(class)));
    }
    out.push('>');

    if is_inline_container(el.role) {
        for child in &el.children {
            write_inline(out, child);
        }
    } else {
        out.push('\n');
        for child in &el.children {
            match child {
                Node::Element(inner) => write_element(out, inner, depth + 1),
                Node::Text(s) => {
                    out.push_str(&"  ".repeat(depth + 1));
                    out.push_str(&html_escape(s));
                    out.push('\n');
                }
            }
        }
        out.push_str(&pad);
    }

    out.push_str(&format!("</{tag}>\n"));
}

fn write_inline(out: &mut String, node: &Node) {
    match node {
        Node::Text(s) => out.push_str(&html_escape(s)),
        Node::Element(el) => {
            let tag = tag_for(el.role);
            out.push_str(&format!(r#"<{tag} data-role="{}""#, role_name(el.role)));
            if let Some(class) = &el.class {
                out.push_str(&format!(r#" class="{}""#, html_escape(class)));
            }
            out.push('>');
            for child in &el.children {
                write_inline(out, child);
            }
            out.push_str(&format!("</{tag}>"));
        }
    }
}

fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn inline_css() -> &'static str {
    r#"
* { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: system-ui, -apple-system, 'Segoe UI', sans-serif; color: #0f172a; background: #f8fafc; }
main { max-width: 72rem; margin: 0 auto; padding: 2.5rem 1rem; display: grid; gap: 2rem; }
section { background: #ffffffb3; border: 1px solid #f1f5f9; border-radius: 1rem; padding: 1rem 1.5rem; }
[data-role="section-header"] { background: none; border: none; padding: 0; }
[data-role="section-metrics"] { display: grid; gap: 1rem; grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr)); background: none; border: none; padding: 0; }
[data-role="section-keywords"] { background: #0f172a; color: #f8fafc; }
[data-role="columns"] { display: grid; gap: 1.5rem; grid-template-columns: 2fr 1fr; }
[data-role="badge"] { display: inline-block; border-radius: 9999px; background: #ecfdf5; color: #047857; font-size: .75rem; padding: .25rem .75rem; }
h1 { margin-top: 1rem; font-size: 2rem; font-weight: 600; }
h1 span { display: block; color: #64748b; font-size: .9em; }
h2 { font-size: .875rem; font-weight: 600; }
p { font-size: .875rem; color: #475569; margin-top: .25rem; }
.tag { display: inline-block; border: 1px solid #e2e8f0; border-radius: 9999px; background: #f8fafc; padding: .25rem .6rem; font-size: .7rem; margin: .15rem; color: #334155; }
.card { border: 1px solid #f1f5f9; border-radius: 1rem; background: #fff; padding: 1rem; }
[data-role="metric_label"] { font-size: .75rem; text-transform: uppercase; letter-spacing: .05em; color: #64748b; }
[data-role="metric_value"] { font-size: 1.5rem; font-weight: 600; color: #0f172a; }
ol, ul { list-style: none; display: grid; gap: .75rem; margin-top: 1rem; }
[data-role="step"] { display: flex; gap: .75rem; }
[data-role="step_index"] { flex: none; width: 1.75rem; height: 1.75rem; border-radius: 9999px; background: #0f172a; color: #f8fafc; font-size: .7rem; display: flex; align-items: center; justify-content: center; }
[data-role="keyword_row"] { display: grid; grid-template-columns: 1fr auto; font-size: .75rem; margin-top: .75rem; }
[data-role="keyword_drop"] { color: #6ee7b7; }
.meter { grid-column: 1 / -1; height: .375rem; margin-top: .25rem; border-radius: 9999px; background: linear-gradient(90deg, #34d399 80%, #334155 80%); }
table { width: 100%; border-collapse: collapse; margin-top: 1rem; font-size: .8rem; }
.th { text-align: left; text-transform: uppercase; font-size: .7rem; color: #64748b; padding: .5rem .75rem; }
.td { padding: .5rem .75rem; vertical-align: top; color: #334155; }
.row-odd { background: #f8fafc66; }
.cell-name, .cell-score { font-weight: 600; color: #0f172a; }
.cell-note { color: #64748b; }
[data-role="list_item"] { display: flex; gap: .5rem; }
.bullet { flex: none; width: .375rem; height: .375rem; margin-top: .5rem; border-radius: 9999px; background: #94a3b8; }
"#
}
