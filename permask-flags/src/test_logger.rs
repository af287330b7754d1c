use std::sync::Once;
use tracing_subscriber::{layer::SubscriberExt, registry::Registry, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Tracing for tests, filtered through `RUST_LOG`. Safe to call at the
/// top of every test; only the first call installs the subscriber.
pub fn test_logger() {
    TRACING_INIT.call_once(|| {
        let layer = tracing_tree::HierarchicalLayer::default()
            .with_writer(std::io::stderr)
            .with_indent_lines(true)
            .with_indent_amount(2)
            .with_targets(true);

        let subscriber = Registry::default()
            .with(layer)
            .with(EnvFilter::from_default_env());

        tracing::subscriber::set_global_default(subscriber).unwrap();
    });
}
