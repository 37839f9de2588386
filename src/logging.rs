use std::sync::OnceLock;

use tracing_subscriber::{
    EnvFilter, Registry, fmt,
    layer::{Layer, SubscriberExt},
};

static INIT: OnceLock<()> = OnceLock::new();

/// Initialize logging backends using `tracing`.
///
/// Console output sits at `info` (or `debug` with `--verbose`, `RUST_LOG`
/// overrides both). The file log at `<tmp>/skelgen/skelgen.log` always
/// captures `debug` and appends across runs.
pub fn init(verbose: bool) {
    INIT.get_or_init(|| {
        let default_level = if verbose { "debug" } else { "info" };
        let console_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
        let console = fmt::layer()
            .with_target(false)
            .with_filter(console_filter);

        let log_dir = std::env::temp_dir().join("skelgen");
        let _ = std::fs::create_dir_all(&log_dir);
        let appender = tracing_appender::rolling::never(log_dir, "skelgen.log");
        let file = fmt::layer()
            .with_ansi(false)
            .with_target(false)
            .with_writer(appender)
            .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG);

        let subscriber = Registry::default().with(file).with(console);
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            // Ignore error if a subscriber is already set (e.g., tests).
        }
    });
}
