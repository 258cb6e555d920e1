//! Shared domain types.
//!
//! Every record borrows `'static` text: the tables are compiled in and never
//! change after startup. Required fields are plain `&str`, so a record with a
//! missing field does not type-check. The only optional field is
//! [`Metric::sublabel`].

use serde::Serialize;

/// One headline statistic, shown as a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    pub sublabel: Option<&'static str>,
}

impl Metric {
    pub const fn new(label: &'static str, value: &'static str) -> Self {
        Self {
            label,
            value,
            sublabel: None,
        }
    }

    pub const fn with_sublabel(mut self, sublabel: &'static str) -> Self {
        self.sublabel = Some(sublabel);
        self
    }
}

/// Measured detector signal loss for one keyword.
///
/// `drop` is preformatted (e.g. `"≈ 93%"`); it is displayed, never parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeywordStat {
    pub keyword: &'static str,
    pub drop: &'static str,
}

/// One row of the model comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelRow {
    pub name: &'static str,
    pub input: &'static str,
    pub focus: &'static str,
    /// F1 score on the adversarially modified class, preformatted.
    pub f1_modified: &'static str,
    pub note: &'static str,
}

/// Short label naming a tool or technique used in the analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TechTag(pub &'static str);

impl TechTag {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

/// One numbered stage of the project pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PipelineStep {
    /// Ordinal label as displayed (`"01"`, `"02"`, ...).
    pub step: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

/// Inline run of narrative text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Inline {
    Plain(&'static str),
    Strong(&'static str),
    Emphasis(&'static str),
}

impl Inline {
    pub fn text(&self) -> &'static str {
        match self {
            Inline::Plain(s) | Inline::Strong(s) | Inline::Emphasis(s) => s,
        }
    }
}

/// One bullet of the key insights list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Insight(pub &'static [Inline]);

/// Static copy for the header block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderCopy {
    pub badge: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub intro: &'static str,
    pub topics: &'static [&'static str],
}

/// Heading, intro line and optional chip shared by every titled panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelCopy {
    pub heading: &'static str,
    pub intro: Option<&'static str>,
    pub chip: Option<&'static str>,
}

/// Everything the dashboard assembler renders, borrowed.
///
/// The assembler walks each slice exactly once in order; it never sorts,
/// filters or derives values from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardData<'a> {
    pub header: HeaderCopy,
    pub metrics: &'a [Metric],
    pub pipeline: PanelCopy,
    pub steps: &'a [PipelineStep],
    pub keywords_panel: PanelCopy,
    pub keywords: &'a [KeywordStat],
    pub keywords_footnote: &'a [Inline],
    pub comparison: PanelCopy,
    pub model_rows: &'a [ModelRow],
    pub insights_panel: PanelCopy,
    pub insights: &'a [Insight],
    pub tech_panel: PanelCopy,
    pub tech_stack: &'a [TechTag],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_builder_sets_optional_sublabel() {
        let bare = Metric::new("Total BEC emails", "4,181");
        assert_eq!(bare.sublabel, None);

        let full = bare.with_sublabel("Synthetic BEC phishing samples");
        assert_eq!(full.sublabel, Some("Synthetic BEC phishing samples"));
        assert_eq!(full.label, "Total BEC emails");
        assert_eq!(full.value, "4,181");
    }

    #[test]
    fn inline_text_ignores_emphasis_kind() {
        assert_eq!(Inline::Plain("a").text(), "a");
        assert_eq!(Inline::Strong("b").text(), "b");
        assert_eq!(Inline::Emphasis("c").text(), "c");
    }

    #[test]
    fn records_serialize_with_field_names() {
        let json = serde_json::to_value(TechTag("NLP")).unwrap();
        assert_eq!(json, serde_json::json!("NLP"));

        let json = serde_json::to_value(Inline::Strong("81.3% evasion rate")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "kind": "strong", "text": "81.3% evasion rate" })
        );
    }
}
