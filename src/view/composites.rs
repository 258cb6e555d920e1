//! Composite presenters: one record in, one fragment out.

use crate::domain::{Inline, Insight, KeywordStat, Metric, ModelRow, PipelineStep, TechTag};

use super::node::{Element, Node, Role};
use super::primitives::{bullet, tag, td};

/// Numbered pipeline stage: index label, title and body sentence.
pub fn pipeline_step(step: &PipelineStep) -> Element {
    Element::new(Role::Step)
        .child(Element::new(Role::StepIndex).child(step.step))
        .child(Element::new(Role::StepTitle).child(step.title))
        .child(Element::new(Role::StepBody).child(step.body))
}

/// Headline statistic card. The sublabel element exists only when the
/// metric has one.
pub fn metric_card(metric: &Metric) -> Element {
    let card = Element::new(Role::MetricCard)
        .with_class("card")
        .child(Element::new(Role::MetricLabel).child(metric.label))
        .child(Element::new(Role::MetricValue).child(metric.value));

    if let Some(sublabel) = metric.sublabel {
        card.child(Element::new(Role::MetricSublabel).child(sublabel))
    } else {
        card
    }
}

/// Keyword signal-loss row. The meter is decoration and carries no value.
pub fn keyword_row(stat: &KeywordStat) -> Element {
    Element::new(Role::KeywordRow)
        .child(Element::new(Role::KeywordName).child(stat.keyword))
        .child(Element::new(Role::KeywordDrop).child(format!("{} drop", stat.drop)))
        .child(Element::new(Role::Meter).with_class("meter"))
}

/// Comparison table row: name, input, focus, score, note.
///
/// `index` only selects the stripe class.
pub fn model_row(row: &ModelRow, index: usize) -> Element {
    let stripe = if index % 2 == 0 { "row-even" } else { "row-odd" };
    Element::new(Role::TableRow)
        .with_class(stripe)
        .child(td(row.name, Some("cell-name")))
        .child(td(row.input, None))
        .child(td(row.focus, None))
        .child(td(row.f1_modified, Some("cell-score")))
        .child(td(row.note, Some("cell-note")))
}

pub fn tech_chip(t: &TechTag) -> Element {
    tag(t.as_str(), None)
}

pub fn inline(segment: &Inline) -> Node {
    match segment {
        Inline::Plain(s) => Node::from(*s),
        Inline::Strong(s) => Element::new(Role::Strong).child(*s).into(),
        Inline::Emphasis(s) => Element::new(Role::Emphasis).child(*s).into(),
    }
}

pub fn insight_item(insight: &Insight) -> Element {
    Element::new(Role::ListItem)
        .child(bullet())
        .child(Element::new(Role::Paragraph).children(insight.0.iter().map(inline)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_without_sublabel_has_no_sublabel_node() {
        let card = metric_card(&Metric::new("Total BEC emails", "4,181"));
        assert_eq!(card.count(Role::MetricSublabel), 0);
        assert_eq!(card.first(Role::MetricLabel).unwrap().text(), "Total BEC emails");
        assert_eq!(card.first(Role::MetricValue).unwrap().text(), "4,181");
        assert_eq!(card.children.len(), 2);
    }

    #[test]
    fn metric_with_sublabel_has_exactly_one() {
        let metric = Metric::new("Adversarially modified", "≈ 29%")
            .with_sublabel("Homoglyphs + zero-width Unicode");
        let card = metric_card(&metric);
        let subs = card.find_all(Role::MetricSublabel);
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].text(), "Homoglyphs + zero-width Unicode");
    }

    #[test]
    fn empty_sublabel_text_is_still_rendered_as_given() {
        // Presence, not content, decides whether the slot exists.
        let card = metric_card(&Metric::new("a", "b").with_sublabel(""));
        assert_eq!(card.count(Role::MetricSublabel), 1);
    }

    #[test]
    fn model_row_cells_follow_fixed_column_order() {
        let row = ModelRow {
            name: "Char TF-IDF + LR (poisoned text)",
            input: "Poisoned BEC body",
            focus: "Unicode artifacts",
            f1_modified: "≈ 0.92",
            note: "Strong detector for homoglyphs & zero-width tricks",
        };
        let el = model_row(&row, 2);
        let cells: Vec<String> = el.elements().map(|c| c.text()).collect();
        assert_eq!(
            cells,
            [
                "Char TF-IDF + LR (poisoned text)",
                "Poisoned BEC body",
                "Unicode artifacts",
                "≈ 0.92",
                "Strong detector for homoglyphs & zero-width tricks",
            ]
        );
        assert!(el.elements().all(|c| c.role == Role::DataCell));
    }

    #[test]
    fn stripe_class_alternates_with_index() {
        let row = crate::data::MODEL_ROWS[0];
        assert_eq!(model_row(&row, 0).class.as_deref(), Some("row-even"));
        assert_eq!(model_row(&row, 1).class.as_deref(), Some("row-odd"));
        assert_eq!(model_row(&row, 0).children, model_row(&row, 1).children);
    }

    #[test]
    fn pipeline_step_lays_out_index_title_body() {
        let step = PipelineStep {
            step: "03",
            title: "Evasion of rule-based detectors",
            body: "Showed signal loss.",
        };
        let el = pipeline_step(&step);
        let roles: Vec<Role> = el.elements().map(|c| c.role).collect();
        assert_eq!(roles, [Role::StepIndex, Role::StepTitle, Role::StepBody]);
        assert_eq!(el.first(Role::StepIndex).unwrap().text(), "03");
    }

    #[test]
    fn keyword_row_appends_drop_suffix() {
        let el = keyword_row(&KeywordStat {
            keyword: "invoice",
            drop: "≈ 93%",
        });
        assert_eq!(el.first(Role::KeywordName).unwrap().text(), "invoice");
        assert_eq!(el.first(Role::KeywordDrop).unwrap().text(), "≈ 93% drop");
        assert_eq!(el.count(Role::Meter), 1);
    }

    #[test]
    fn insight_keeps_emphasis_segments() {
        let insight = Insight(&[
            Inline::Plain("suffers an "),
            Inline::Strong("81.3% evasion rate"),
            Inline::Plain(" on modified emails."),
        ]);
        let el = insight_item(&insight);
        assert_eq!(el.count(Role::Bullet), 1);
        assert_eq!(el.first(Role::Strong).unwrap().text(), "81.3% evasion rate");
        assert_eq!(el.text(), "suffers an 81.3% evasion rate on modified emails.");
    }
}
