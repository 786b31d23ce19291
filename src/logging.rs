use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

/// Install the global tracing subscriber. Logs go to stderr so stdout only
/// carries the upload report; `RUST_LOG` overrides `default_filter`.
pub fn init_tracing(default_filter: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {}", e))
}
