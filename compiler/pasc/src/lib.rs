//! Pascal-S lexer driver.
//!
//! The `pasc` binary is a thin clap front end over [`commands`]; the
//! command handlers live in this library so they can be tested without
//! spawning a process.

use std::sync::Once;

pub mod commands;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber (idempotent).
///
/// Filtering comes from `RUST_LOG`, defaulting to `warn` so rule-loading
/// fallbacks are visible. Output goes to stderr, leaving stdout for tokens.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}
