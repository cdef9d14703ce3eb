//! Logging setup for the binary
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to the binary. The filter comes from `RUST_LOG` and defaults to `info`.
//! Log lines go to stderr so they never mix with the interactive menu.

use crate::cli::LogFormat;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_logging(format: LogFormat) -> Result<(), TryInitError> {
    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (text_layer, json_layer) = match format {
        LogFormat::Text => (Some(fmt::layer().with_writer(std::io::stderr)), None),
        LogFormat::Json => (
            None,
            Some(fmt::layer().json().with_writer(std::io::stderr)),
        ),
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(text_layer)
        .with(json_layer)
        .try_init()
}
