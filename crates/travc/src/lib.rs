//! Library side of the `travc` command-line tool.
//!
//! The binary is a thin dispatcher; command handlers and argument parsing
//! live here so they can be tested without spawning a process.

pub mod commands;
pub mod config;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debugging.
///
/// Call once at startup. Respects `RUST_LOG` (e.g.
/// `RUST_LOG=trav_eval=debug`); does nothing when it is unset.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}
