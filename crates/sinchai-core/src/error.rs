//! Centralized error types for Sinchai.
//!
//! Every failure in the advisory flow ends the current attempt: nothing is
//! retried. The types here keep the full context for logging and offer
//! `user_message()` for display.

use thiserror::Error;

/// Top-level application error type.
///
/// Use `user_message()` to get a message suitable for showing to a farmer.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Forecast error: {0}")]
    Forecast(#[from] ForecastError),

    #[error("Location error: {0}")]
    Location(#[from] LocationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for display.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Forecast(e) => e.user_message(),
            AppError::Location(e) => e.user_message(),
            AppError::Config(e) => e.user_message(),
            AppError::Io(_) => "A file operation failed. Please try again.",
            AppError::Other(_) => "An unexpected error occurred. Please try again.",
        }
    }
}

/// Network-level detail behind a failed forecast request.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timed out")]
    Timeout,

    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Failure to obtain a forecast.
///
/// Only two outcomes are visible to the user: the API key is still the
/// placeholder, or anything else went wrong.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("API key not configured")]
    ApiKeyNotConfigured,

    #[error("Weather fetch failed: {0}")]
    Unavailable(#[from] NetworkError),
}

impl ForecastError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ForecastError::ApiKeyNotConfigured => {
                "API Key Not Configured: Please get a free key from https://openweathermap.org/api and update config.toml"
            }
            ForecastError::Unavailable(_) => {
                "Unable to fetch weather data. Check the log output for details. API may need 10+ minutes to activate."
            }
        }
    }

    /// Whether the failure is a configuration problem rather than a network one.
    pub fn is_configuration(&self) -> bool {
        matches!(self, ForecastError::ApiKeyNotConfigured)
    }
}

/// Failure to resolve where the farm is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Location service unavailable")]
    ServiceUnavailable,

    #[error("Location request timed out")]
    Timeout,

    #[error("District not found: {0}")]
    UnknownDistrict(String),

    #[error("Invalid coordinates: {latitude}, {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    #[error("Location error: {0}")]
    Other(String),
}

impl LocationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            LocationError::PermissionDenied => {
                "GPS permission denied. Please select district manually."
            }
            LocationError::ServiceUnavailable => {
                "GPS not supported on this system. Please select district manually."
            }
            LocationError::Timeout => "GPS timed out. Please select district manually.",
            LocationError::UnknownDistrict(_) => "District not found",
            LocationError::InvalidCoordinates { .. } => {
                "Coordinates are out of range. Please select district manually."
            }
            LocationError::Other(_) => "GPS error. Please select district manually.",
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
            ConfigError::ParseError(_) => "Configuration file is malformed. Check your settings.",
        }
    }
}

/// Extension trait for converting reqwest errors to our error types.
pub trait ReqwestErrorExt {
    fn into_network_error(self) -> NetworkError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_network_error(self) -> NetworkError {
        if self.is_timeout() {
            NetworkError::Timeout
        } else if let Some(status) = self.status() {
            NetworkError::Status {
                status: status.as_u16(),
            }
        } else if self.is_decode() {
            NetworkError::InvalidResponse(self.to_string())
        } else {
            NetworkError::ConnectionFailed(self.to_string())
        }
    }
}
