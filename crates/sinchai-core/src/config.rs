use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Default 5 day / 3 hour forecast endpoint.
pub const DEFAULT_WEATHER_API: &str = "https://api.openweathermap.org/data/2.5/forecast";

/// Placeholder written to a fresh config file. A key equal to this is treated
/// as "not configured".
pub const API_KEY_PLACEHOLDER: &str = "YOUR_OPENWEATHERMAP_API_KEY_HERE";

/// Environment variable that overrides `api.api_key`.
pub const API_KEY_ENV: &str = "OPENWEATHERMAP_API_KEY";

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Forecast provider settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Irrigation decision thresholds
    #[serde(default)]
    pub thresholds: Thresholds,

    /// Display preferences
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Forecast endpoint (OpenWeatherMap compatible)
    pub endpoint: String,

    /// OpenWeatherMap API key. Get a free key from https://openweathermap.org/api
    pub api_key: String,

    /// HTTP client timeout in seconds, 0 for none
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

impl ApiConfig {
    /// Check if the key is set to something other than the placeholder
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty() && self.api_key != API_KEY_PLACEHOLDER
    }

    /// Request timeout, or `None` when `timeout_secs` is 0
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_WEATHER_API.to_string(),
            api_key: API_KEY_PLACEHOLDER.to_string(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Irrigation decision thresholds.
///
/// Loaded once and never mutated. The moderate-band offset and the wind
/// warning speed are fixed constants in the advisor and deliberately absent here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Rain probability (%) at or above which irrigation is not needed
    pub rainfall_threshold: i32,

    /// At or below this temperature (°C) water loss is reduced
    pub min_temp_irrigation: i32,

    /// At or above this temperature (°C) water loss is increased
    pub max_temp_irrigation: i32,

    /// At or below this humidity (%) evaporation is increased
    pub min_humidity_irrigation: i32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            rainfall_threshold: 50,
            min_temp_irrigation: 5,
            max_temp_irrigation: 40,
            min_humidity_irrigation: 30,
        }
    }
}

/// Display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "pa")]
    Punjabi,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Punjabi => "pa",
        }
    }

    /// The other language
    pub fn toggled(&self) -> Self {
        match self {
            Self::English => Self::Punjabi,
            Self::Punjabi => Self::English,
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "pa" | "punjabi" => Ok(Self::Punjabi),
            other => Err(format!("unsupported language '{}', expected 'en' or 'pa'", other)),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Language used for the report
    #[serde(default)]
    pub language: Language,
}

impl Config {
    /// Load configuration from the default path, creating it if missing
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing defaults there if it doesn't exist.
    /// `OPENWEATHERMAP_API_KEY` overrides the key from the file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("Failed to read config file")?;
            toml::from_str::<Config>(&contents).context("Failed to parse config file")?
        } else {
            let config = Self::default();
            config.save_to(path)?;
            tracing::info!("Wrote default configuration to {}", path.display());
            config
        };

        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                tracing::debug!("Using API key from {}", API_KEY_ENV);
                config.api.api_key = key;
            }
        }

        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Returns an error if validation fails; warnings are logged.
    pub fn load_validated(path: Option<&Path>) -> Result<(Self, ValidationResult)> {
        let config = match path {
            Some(p) => Self::load_from(p)?,
            None => Self::load()?,
        };
        let validation = config.validate();

        if !validation.is_valid() {
            anyhow::bail!(
                "Configuration validation failed: {}",
                validation.error_summary()
            );
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    /// Validate the configuration
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        self.validate_url(&self.api.endpoint, "api.endpoint", &mut result);

        if !self.api.is_configured() {
            result.add_warning(
                "api.api_key",
                "API key not configured - live forecasts will fail",
            );
        }

        let t = &self.thresholds;
        Self::validate_percent(t.rainfall_threshold, "thresholds.rainfall_threshold", &mut result);
        Self::validate_percent(
            t.min_humidity_irrigation,
            "thresholds.min_humidity_irrigation",
            &mut result,
        );

        if t.min_temp_irrigation >= t.max_temp_irrigation {
            result.add_warning(
                "thresholds.min_temp_irrigation",
                format!(
                    "min_temp_irrigation ({}) is not below max_temp_irrigation ({})",
                    t.min_temp_irrigation, t.max_temp_irrigation
                ),
            );
        }

        result
    }

    fn validate_percent(value: i32, field: &str, result: &mut ValidationResult) {
        if !(0..=100).contains(&value) {
            result.add_error(field, format!("Must be between 0 and 100, got {}", value));
        }
    }

    fn validate_url(&self, url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }

                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("sinchai");

        Ok(config_dir.join("config.toml"))
    }
}
