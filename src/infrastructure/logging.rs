//! Tracing subscriber setup

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the stderr subscriber. `RUST_LOG` overrides `level`.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
    let result = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();

    if let Err(e) = result {
        eprintln!("Warning: Could not initialize logging: {e}");
    }
}
