//! Headings and narrative copy.

use crate::domain::{HeaderCopy, Inline, Insight, PanelCopy, PipelineStep};

pub const HEADER: HeaderCopy = HeaderCopy {
    badge: "Research Project · Security · NLP · Adversarial ML",
    title: "Social Engineering & Adversarial Obfuscation",
    subtitle: "in Business Email Compromise (BEC) Attacks",
    intro: "I analyzed how Unicode-based adversarial techniques (homoglyphs and zero-width \
            characters) break keyword-based phishing detection, and built a character-level \
            model that reliably detects these obfuscation patterns in BEC phishing emails.",
    topics: &[
        "Cybersecurity",
        "Natural Language Processing",
        "Adversarial Machine Learning",
        "Model Interpretability",
    ],
};

pub const PIPELINE_PANEL: PanelCopy = PanelCopy {
    heading: "Project Pipeline",
    intro: Some("End-to-end workflow from data generation to adversarial detection and explanation."),
    chip: None,
};

pub const PIPELINE_STEPS: &[PipelineStep] = &[
    PipelineStep {
        step: "01",
        title: "Dataset construction",
        body: "Used paired BEC emails (clean vs poisoned) with Unicode homoglyphs and zero-width \
               characters to simulate realistic obfuscation attacks.",
    },
    PipelineStep {
        step: "02",
        title: "Social-engineering analysis",
        body: "Quantified financial/urgency keywords, authority and politeness tone, and \
               obligation language that drive BEC persuasion.",
    },
    PipelineStep {
        step: "03",
        title: "Evasion of rule-based detectors",
        body: "Showed that simple keyword/risk-score detectors suffer 70–90% signal loss and \
               81.3% evasion under adversarial obfuscation.",
    },
    PipelineStep {
        step: "04",
        title: "Adversarial obfuscation detector",
        body: "Trained character-level TF-IDF + Logistic Regression on poisoned text to detect \
               Unicode artifacts with ~95% accuracy.",
    },
    PipelineStep {
        step: "05",
        title: "Model interpretability",
        body: "Inspected top character n-grams to reveal reliance on homoglyph sequences and \
               zero-width Unicode patterns rather than topic semantics.",
    },
];

pub const KEYWORDS_PANEL: PanelCopy = PanelCopy {
    heading: "Keyword Signal Loss",
    intro: Some("How much keyword-based detection breaks under Unicode obfuscation (modified emails only)."),
    chip: Some("Adversarial Impact"),
};

pub const KEYWORDS_FOOTNOTE: &[Inline] = &[
    Inline::Plain("In the worst cases, surface-level keyword matches for critical financial terms like "),
    Inline::Strong("“invoice”"),
    Inline::Plain(" and "),
    Inline::Strong("“immediately”"),
    Inline::Plain(" drop by more than "),
    Inline::Strong("90%"),
    Inline::Plain("."),
];

pub const COMPARISON_PANEL: PanelCopy = PanelCopy {
    heading: "Model Comparison",
    intro: Some("Clean-text models struggle to predict which emails will be obfuscated. Models trained \
            directly on poisoned text learn Unicode artifacts and perform strongly."),
    chip: Some("Character-level modeling · Logistic Regression"),
};

/// Column headings of the comparison table, in cell order.
pub const COMPARISON_COLUMNS: [&str; 5] =
    ["Model", "Input", "Primary Signal", "F1 (modified class)", "Notes"];

pub const INSIGHTS_PANEL: PanelCopy = PanelCopy {
    heading: "Key Insights",
    intro: None,
    chip: None,
};

pub const INSIGHTS: &[Insight] = &[
    Insight(&[
        Inline::Plain("Unicode obfuscation can remove "),
        Inline::Strong("70–90%"),
        Inline::Plain(" of surface keyword signal while keeping BEC emails understandable to humans."),
    ]),
    Insight(&[
        Inline::Plain("A simple risk-score detector based on finance/urgency keywords suffers an "),
        Inline::Strong("81.3% evasion rate"),
        Inline::Plain(" on modified emails."),
    ]),
    Insight(&[
        Inline::Plain("Character-level models trained on poisoned text achieve "),
        Inline::Strong("~95% accuracy"),
        Inline::Plain(" and "),
        Inline::Strong("~0.92 F1"),
        Inline::Plain(" on detecting adversarially modified emails."),
    ]),
    Insight(&[
        Inline::Plain(
            "Top model features reveal reliance on homoglyph sequences and zero-width Unicode, \
             confirming that the model is detecting ",
        ),
        Inline::Emphasis("obfuscation artifacts"),
        Inline::Plain(", not topics."),
    ]),
    Insight(&[Inline::Plain(
        "This suggests a layered defense strategy: semantic phishing detection augmented by a \
         dedicated Unicode obfuscation detector.",
    )]),
];

pub const TECH_PANEL: PanelCopy = PanelCopy {
    heading: "Tech Stack",
    intro: Some("Tools and concepts I used to build and analyze this project."),
    chip: None,
};
