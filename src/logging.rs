//! Logging setup.
//!
//! `log` macros throughout the crate, `env_logger` as the backend. The
//! filter comes from `RUST_LOG` (which may be set in `.env`); without it
//! only warnings and errors are written to stderr.

use std::env;

use env_logger::Builder;

pub const DEFAULT_FILTER: &str = "warn";

/// Filter directive to use for a given `RUST_LOG` value.
pub fn effective_filter(rust_log: Option<&str>) -> &str {
    match rust_log.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => DEFAULT_FILTER,
    }
}

/// Install the global logger. Safe to call more than once.
pub fn init() {
    let rust_log = env::var("RUST_LOG").ok();
    let filter = effective_filter(rust_log.as_deref());

    let result = Builder::new()
        .parse_filters(filter)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
    if result.is_ok() {
        log::debug!("logger initialised with filter '{filter}'");
    }
}
