// --- File: crates/dustout_common/src/logging.rs ---
//! Logging utilities for the DustOut application.
//!
//! This module provides a standardized approach to logging across all crates
//! in the application: a single tracing subscriber initialized at startup.

use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log targets covered by the default filter. EnvFilter matches whole path
/// segments, so each workspace crate needs its own directive.
const LOG_TARGETS: [&str; 6] = [
    "dustout_backend",
    "dustout_booking",
    "dustout_common",
    "dustout_config",
    "dustout_email",
    "dustout_gcal",
];

/// Initialize the tracing subscriber.
///
/// This function should be called at the start of the application to set up
/// logging. It configures the tracing subscriber with the specified log level
/// and formats log messages with targets and file/line information.
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
pub fn init_with_level(level: Level) {
    // Use try_init to handle the case where a global default subscriber has
    // already been set (e.g. from tests).
    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(build_filter(level))
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

fn build_filter(level: Level) -> EnvFilter {
    let mut filter = EnvFilter::from_default_env();
    for target in LOG_TARGETS {
        filter = filter.add_directive(format!("{}={}", target, level).parse().unwrap());
    }
    filter
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_enables_every_workspace_crate() {
        let rendered = build_filter(Level::DEBUG).to_string().to_lowercase();
        for target in LOG_TARGETS {
            assert!(
                rendered.contains(&format!("{}=debug", target)),
                "missing directive for {}: {}",
                target,
                rendered
            );
        }
    }
}
