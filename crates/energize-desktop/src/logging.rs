//! Structured logging initialization.

use energize_core::{LogFormat, Settings};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init(settings: &Settings) {
    let level = &settings.log_level;
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("energize_core={level},energize_client={level},energize_desktop={level}").into()
    });

    let registry = tracing_subscriber::registry().with(env_filter);

    match settings.log_format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_file(true)
                    .with_line_number(true)
                    .with_target(true),
            )
            .init(),
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).init(),
    }

    tracing::info!(
        level = %level,
        format = ?settings.log_format,
        "Logging initialized"
    );
}
