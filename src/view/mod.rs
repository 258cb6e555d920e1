//! Data-to-presentation mapping.
//!
//! `primitives` wrap a single piece of content, `composites` lay out one
//! record, and `dashboard` assembles the full [`View`].

pub mod composites;
pub mod dashboard;
pub mod node;
pub mod primitives;

pub use dashboard::{render, render_with};
pub use node::{Element, Node, Role, SectionId, View};
