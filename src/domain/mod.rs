//! Domain types for the dashboard data tables.
//!
//! This module defines:
//!
//! - the four displayed record kinds (`Metric`, `KeywordStat`, `ModelRow`, `TechTag`)
//! - static copy records (`PipelineStep`, `Insight`, `Inline`)
//! - `DashboardData`, the borrowed bundle of every table the assembler walks

pub mod types;

pub use types::*;
