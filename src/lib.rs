//! `bec-dashboard` library crate.
//!
//! Renders a read-only research dashboard (Unicode adversarial obfuscation
//! in Business Email Compromise phishing) from compiled-in data tables.
//!
//! The binary (`bec`) is a thin wrapper around this library so that:
//!
//! - the data-to-view mapping is testable without a terminal
//! - every host (terminal viewer, text, HTML, JSON) consumes the same `View`

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod report;
pub mod tui;
pub mod view;

pub use view::{View, render};
