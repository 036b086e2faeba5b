//! Tracing subscriber setup for the `fwjs` binary.
//!
//! Nothing is installed unless `RUST_LOG` is set, so normal runs pay no
//! logging cost. Log output goes to stderr; stdout is reserved for the
//! program's own `print` output.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber. Safe to call more than once.
///
/// - `RUST_LOG=fwjs_eval=debug` shows each closure application
/// - `RUST_LOG=trace` adds scope and declaration events
/// - `FWJS_LOG_TREE=1` renders spans as an indented tree
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }

        let filter = EnvFilter::from_default_env();
        let registry = tracing_subscriber::registry().with(filter);

        // Another subscriber may already be installed by an embedder.
        let _ = if std::env::var_os("FWJS_LOG_TREE").is_some() {
            registry
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true),
                )
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .try_init()
        };
    });
}
