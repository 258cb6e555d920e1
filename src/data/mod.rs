//! Compiled-in dashboard content.
//!
//! - `tables`: the record sequences the assembler maps one-to-one onto presenters
//! - `copy`: headings, narrative text and pipeline steps

pub mod copy;
pub mod tables;

use crate::domain::DashboardData;

pub use copy::*;
pub use tables::*;

impl DashboardData<'static> {
    /// The built-in content set shown by every host.
    pub const fn builtin() -> Self {
        DashboardData {
            header: HEADER,
            metrics: METRICS,
            pipeline: PIPELINE_PANEL,
            steps: PIPELINE_STEPS,
            keywords_panel: KEYWORDS_PANEL,
            keywords: KEYWORD_STATS,
            keywords_footnote: KEYWORDS_FOOTNOTE,
            comparison: COMPARISON_PANEL,
            model_rows: MODEL_ROWS,
            insights_panel: INSIGHTS_PANEL,
            insights: INSIGHTS,
            tech_panel: TECH_PANEL,
            tech_stack: TECH_STACK,
        }
    }
}
