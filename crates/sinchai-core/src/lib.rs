pub mod config;
pub mod error;

pub use config::{
    ApiConfig, Config, ConfigValidationError, Language, Thresholds, UiConfig, ValidationResult,
};
pub use error::{AppError, ConfigError, ForecastError, LocationError, NetworkError};

use anyhow::Result;

/// Initialize logging for the application.
///
/// Log output goes to stderr so the advisory report on stdout stays clean.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    tracing::debug!("Sinchai core initialized");
    Ok(())
}
