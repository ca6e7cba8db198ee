//! Log subscriber for the `scam` binary.

use std::sync::Once;

use tracing_subscriber::{layer::SubscriberExt, registry::Registry, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Install a hierarchical subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
/// Output goes to stderr; stdout carries evaluation results.
///
/// ```text
/// RUST_LOG=scam_eval=trace scam eval "(+ 1 (* 2 3))"
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        if std::env::var_os("RUST_LOG").is_none() {
            return;
        }

        let filter = EnvFilter::from_default_env();
        let layer = tracing_tree::HierarchicalLayer::default()
            .with_writer(std::io::stderr)
            .with_indent_lines(true)
            .with_indent_amount(2)
            .with_verbose_entry(false)
            .with_verbose_exit(false)
            .with_targets(true);

        let subscriber = Registry::default().with(layer).with(filter);
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            eprintln!("warning: a tracing subscriber is already installed");
        }
    });
}
