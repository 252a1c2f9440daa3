//! Log subscriber installation.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debug output.
///
/// Does nothing unless `RUST_LOG` is set. With `MINI_LOG_TREE` also set,
/// spans are drawn as an indented tree instead of flat lines. Either way
/// logs go to stderr, away from program output. Safe to call repeatedly.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var_os("RUST_LOG").is_none() {
            return;
        }

        let tree = std::env::var_os("MINI_LOG_TREE").is_some();
        let flat_layer = (!tree).then(|| {
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
        });
        let tree_layer = tree.then(|| {
            HierarchicalLayer::new(2)
                .with_targets(true)
                .with_indent_lines(true)
        });

        // Another subscriber may already be installed by an embedding host.
        let _ = tracing_subscriber::registry()
            .with(flat_layer)
            .with(tree_layer)
            .with(EnvFilter::from_default_env())
            .try_init();
    });
}
