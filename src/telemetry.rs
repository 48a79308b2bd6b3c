use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

/// Install the stderr diagnostics subscriber
///
/// `RUST_LOG` takes precedence; otherwise `default_level` applies to this
/// crate and everything else only reports warnings.
pub fn init_tracing_subscriber(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,seo_monitor={}", default_level)));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .init();
}
