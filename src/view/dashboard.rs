//! Dashboard assembler.
//!
//! Walks each data table once, in order, mapping every record through its
//! composite presenter. Nothing is filtered, sorted or recomputed here.

use crate::data::COMPARISON_COLUMNS;
use crate::domain::{DashboardData, HeaderCopy, PanelCopy};

use super::composites::{
    inline, insight_item, keyword_row, metric_card, model_row, pipeline_step, tech_chip,
};
use super::node::{Element, Role, SectionId, View};
use super::primitives::{tag, th};

/// Render the built-in dashboard.
pub fn render() -> View {
    render_with(&DashboardData::builtin())
}

/// Render an arbitrary data set through the same presenters.
pub fn render_with(data: &DashboardData<'_>) -> View {
    let root = Element::new(Role::Dashboard)
        .child(header_section(&data.header))
        .child(metrics_section(data))
        .child(
            Element::new(Role::Columns)
                .child(pipeline_section(data))
                .child(keywords_section(data)),
        )
        .child(comparison_section(data))
        .child(
            Element::new(Role::Columns)
                .child(insights_section(data))
                .child(tech_stack_section(data)),
        );

    View::new(root)
}

fn header_section(copy: &HeaderCopy) -> Element {
    Element::new(Role::Section(SectionId::Header))
        .child(Element::new(Role::Badge).child(copy.badge))
        .child(
            Element::new(Role::Title)
                .child(copy.title)
                .child(Element::new(Role::Subtitle).child(copy.subtitle)),
        )
        .child(Element::new(Role::Paragraph).child(copy.intro))
        .child(
            Element::new(Role::TagList)
                .children(copy.topics.iter().map(|t| tag(*t, None))),
        )
}

fn metrics_section(data: &DashboardData<'_>) -> Element {
    Element::new(Role::Section(SectionId::Metrics)).children(data.metrics.iter().map(metric_card))
}

/// Section shell shared by every titled panel: heading (with optional chip)
/// followed by the optional intro paragraph.
fn panel(id: SectionId, copy: &PanelCopy) -> Element {
    let mut heading = Element::new(Role::Heading).child(copy.heading);
    if let Some(chip) = copy.chip {
        heading = heading.child(tag(chip, Some("heading-chip")));
    }

    let section = Element::new(Role::Section(id)).child(heading);
    match copy.intro {
        Some(intro) => section.child(Element::new(Role::Paragraph).child(intro)),
        None => section,
    }
}

fn pipeline_section(data: &DashboardData<'_>) -> Element {
    panel(SectionId::Pipeline, &data.pipeline)
        .child(Element::new(Role::StepList).children(data.steps.iter().map(pipeline_step)))
}

fn keywords_section(data: &DashboardData<'_>) -> Element {
    panel(SectionId::Keywords, &data.keywords_panel)
        .child(Element::new(Role::KeywordList).children(data.keywords.iter().map(keyword_row)))
        .child(
            Element::new(Role::Paragraph)
                .with_class("footnote")
                .children(data.keywords_footnote.iter().map(inline)),
        )
}

fn comparison_section(data: &DashboardData<'_>) -> Element {
    let head = Element::new(Role::TableHead).child(
        Element::new(Role::TableRow).children(COMPARISON_COLUMNS.iter().map(|c| th(*c, None))),
    );
    let body = Element::new(Role::TableBody).children(
        data.model_rows
            .iter()
            .enumerate()
            .map(|(i, row)| model_row(row, i)),
    );

    panel(SectionId::Comparison, &data.comparison)
        .child(Element::new(Role::Table).child(head).child(body))
}

fn insights_section(data: &DashboardData<'_>) -> Element {
    panel(SectionId::Insights, &data.insights_panel)
        .child(Element::new(Role::List).children(data.insights.iter().map(insight_item)))
}

fn tech_stack_section(data: &DashboardData<'_>) -> Element {
    panel(SectionId::TechStack, &data.tech_panel)
        .child(Element::new(Role::TagList).children(data.tech_stack.iter().map(tech_chip)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{KeywordStat, Metric, ModelRow, TechTag};

    fn texts(el: &Element, role: Role) -> Vec<String> {
        el.find_all(role).iter().map(|e| e.text()).collect()
    }

    #[test]
    fn render_is_idempotent() {
        assert_eq!(render(), render());
    }

    #[test]
    fn sections_follow_fixed_order() {
        assert_eq!(
            render().section_order(),
            [
                SectionId::Header,
                SectionId::Metrics,
                SectionId::Pipeline,
                SectionId::Keywords,
                SectionId::Comparison,
                SectionId::Insights,
                SectionId::TechStack,
            ]
        );
    }

    #[test]
    fn one_fragment_per_record() {
        let view = render();
        let root = view.root();
        assert_eq!(root.count(Role::MetricCard), 4);
        assert_eq!(root.count(Role::KeywordRow), 5);
        assert_eq!(root.count(Role::Step), 5);

        let body = root.first(Role::TableBody).unwrap();
        assert_eq!(body.count(Role::TableRow), 3);

        let tech = view.section(SectionId::TechStack).unwrap();
        assert_eq!(tech.count(Role::Tag), 7);
    }

    #[test]
    fn keyword_rows_keep_input_order() {
        let view = render();
        let names = texts(view.section(SectionId::Keywords).unwrap(), Role::KeywordName);
        assert_eq!(names, ["invoice", "immediately", "payment", "account", "confirm"]);
    }

    #[test]
    fn poisoned_text_row_has_exact_score_cell() {
        let view = render();
        let body = view.root().first(Role::TableBody).unwrap();
        let row = body
            .elements()
            .find(|r| r.text().starts_with("Char TF-IDF + LR (poisoned text)"))
            .unwrap();
        let score = row.elements().nth(3).unwrap();
        assert_eq!(score.text(), "≈ 0.92");
    }

    #[test]
    fn table_header_has_five_columns() {
        let view = render();
        let head = view.root().first(Role::TableHead).unwrap();
        assert_eq!(
            texts(head, Role::HeaderCell),
            ["Model", "Input", "Primary Signal", "F1 (modified class)", "Notes"]
        );
    }

    #[test]
    fn custom_data_drives_counts_and_order() {
        let metrics = [
            Metric::new("Total BEC emails", "4,181"),
            Metric::new("b", "2").with_sublabel("sub"),
        ];
        let keywords = [
            KeywordStat { keyword: "zeta", drop: "1%" },
            KeywordStat { keyword: "alpha", drop: "2%" },
        ];
        let rows = [ModelRow {
            name: "only",
            input: "i",
            focus: "f",
            f1_modified: "0.5",
            note: "n",
        }];
        let tags = [TechTag("Rust"), TechTag("Rust")];
        let data = DashboardData {
            metrics: &metrics,
            keywords: &keywords,
            model_rows: &rows,
            tech_stack: &tags,
            ..DashboardData::builtin()
        };

        let view = render_with(&data);
        let root = view.root();
        assert_eq!(root.count(Role::MetricCard), 2);
        assert_eq!(root.count(Role::MetricSublabel), 1);
        assert_eq!(texts(root, Role::KeywordName), ["zeta", "alpha"]);
        assert_eq!(root.first(Role::TableBody).unwrap().count(Role::TableRow), 1);

        let tech = view.section(SectionId::TechStack).unwrap();
        assert_eq!(texts(tech, Role::Tag), ["Rust", "Rust"]);

        let first = root.first(Role::MetricCard).unwrap();
        assert_eq!(first.text(), "Total BEC emails4,181");
        assert_eq!(first.count(Role::MetricSublabel), 0);
    }

    #[test]
    fn empty_sequences_render_empty_containers() {
        let data = DashboardData {
            metrics: &[],
            keywords: &[],
            model_rows: &[],
            tech_stack: &[],
            ..DashboardData::builtin()
        };
        let view = render_with(&data);
        assert_eq!(view.section(SectionId::Metrics).unwrap().children.len(), 0);
        assert_eq!(view.root().count(Role::KeywordRow), 0);
        assert_eq!(view.section_order().len(), 7);
    }

    #[test]
    fn panel_without_intro_has_no_paragraph() {
        let view = render();
        let insights = view.section(SectionId::Insights).unwrap();
        let direct: Vec<Role> = insights.elements().map(|e| e.role).collect();
        assert_eq!(direct, [Role::Heading, Role::List]);

        let keywords = view.section(SectionId::Keywords).unwrap();
        let heading = keywords.first(Role::Heading).unwrap();
        assert_eq!(heading.own_text(), "Keyword Signal Loss");
        assert_eq!(heading.first(Role::Tag).unwrap().text(), "Adversarial Impact");
    }
}
