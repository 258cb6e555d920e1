//! Record tables. Slice order is display order.

use crate::domain::{KeywordStat, Metric, ModelRow, TechTag};

pub const METRICS: &[Metric] = &[
    Metric::new("Total BEC emails", "4,181").with_sublabel("Synthetic BEC phishing samples"),
    Metric::new("Adversarially modified", "≈ 29%").with_sublabel("Homoglyphs + zero-width Unicode"),
    Metric::new("Keyword detector evasion", "81.3%")
        .with_sublabel("Flagged when clean → missed when poisoned"),
    Metric::new("Obfuscation detector accuracy", "95.4%")
        .with_sublabel("Char n-gram TF-IDF + Logistic Regression"),
];

/// Ranked by narrative importance, not by value.
pub const KEYWORD_STATS: &[KeywordStat] = &[
    KeywordStat { keyword: "invoice", drop: "≈ 93%" },
    KeywordStat { keyword: "immediately", drop: "≈ 89%" },
    KeywordStat { keyword: "payment", drop: "≈ 81%" },
    KeywordStat { keyword: "account", drop: "≈ 80%" },
    KeywordStat { keyword: "confirm", drop: "≈ 78%" },
];

pub const MODEL_ROWS: &[ModelRow] = &[
    ModelRow {
        name: "Word TF-IDF + LR (clean text)",
        input: "Clean BEC body",
        focus: "Semantics / keywords",
        f1_modified: "≈ 0.29",
        note: "Weak signal – style similar across emails",
    },
    ModelRow {
        name: "Char TF-IDF + LR (clean text)",
        input: "Clean BEC body",
        focus: "Character style",
        f1_modified: "≈ 0.29",
        note: "Limited ability to predict which emails get obfuscated",
    },
    ModelRow {
        name: "Char TF-IDF + LR (poisoned text)",
        input: "Poisoned BEC body",
        focus: "Unicode artifacts",
        f1_modified: "≈ 0.92",
        note: "Strong detector for homoglyphs & zero-width tricks",
    },
];

pub const TECH_STACK: &[TechTag] = &[
    TechTag("Python"),
    TechTag("Pandas"),
    TechTag("Scikit-learn"),
    TechTag("NLP"),
    TechTag("Adversarial ML"),
    TechTag("Unicode / Homoglyphs"),
    TechTag("Character-level modeling"),
];
