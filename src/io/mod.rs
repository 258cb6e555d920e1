//! Output helpers: write a rendered view to stdout or a file.

pub mod export;

pub use export::*;
