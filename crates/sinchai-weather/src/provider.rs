//! OpenWeatherMap 5 day / 3 hour forecast client.
//!
//! One GET per call. Nothing is retried or cached.

use crate::types::{Forecast, ForecastResponse, Location, WeatherError};
use chrono::Utc;
use reqwest::Client;
use sinchai_core::ApiConfig;
use std::sync::Arc;
use tracing::instrument;

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Arc<Client>,
    endpoint: String,
    api_key: String,
    key_configured: bool,
}

impl WeatherProvider {
    pub fn new(api: &ApiConfig) -> Result<Self, WeatherError> {
        let mut builder = Client::builder();
        if let Some(timeout) = api.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client: Arc::new(client),
            endpoint: api.endpoint.clone(),
            api_key: api.api_key.clone(),
            key_configured: api.is_configured(),
        })
    }

    /// Fetch the forecast for `location`.
    ///
    /// Any failure while the API key is still the placeholder is reported as
    /// [`WeatherError::ApiKeyNotConfigured`].
    #[instrument(skip(self, location), fields(lat = location.latitude, lon = location.longitude))]
    pub async fn fetch(&self, location: &Location) -> Result<Forecast, WeatherError> {
        match self.fetch_forecast(location).await {
            Ok(forecast) => {
                tracing::info!(
                    "Fetched {} forecast intervals",
                    forecast.items().len()
                );
                Ok(forecast)
            }
            Err(e) => {
                tracing::error!("Weather fetch error: {}", e);
                if self.key_configured {
                    Err(e)
                } else {
                    Err(WeatherError::ApiKeyNotConfigured(e.to_string()))
                }
            }
        }
    }

    async fn fetch_forecast(&self, location: &Location) -> Result<Forecast, WeatherError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("lat", location.latitude.to_string()),
                ("lon", location.longitude.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let parsed: ForecastResponse =
            serde_json::from_str(&body).map_err(|e| WeatherError::Parse(e.to_string()))?;

        Forecast::new(parsed.list, location.clone(), Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api(endpoint: &str, key: &str) -> ApiConfig {
        ApiConfig {
            endpoint: endpoint.to_string(),
            api_key: key.to_string(),
            timeout_secs: 5,
        }
    }

    #[tokio::test]
    async fn test_placeholder_key_maps_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let provider = WeatherProvider::new(&ApiConfig {
            endpoint: mock_server.uri(),
            ..ApiConfig::default()
        })
        .unwrap();
        let result = provider.fetch(&Location::new(30.9, 75.85)).await;

        assert!(matches!(result, Err(WeatherError::ApiKeyNotConfigured(_))));
    }

    #[tokio::test]
    async fn test_status_error_with_real_key() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("appid", "real-key"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let provider = WeatherProvider::new(&api(&mock_server.uri(), "real-key")).unwrap();
        let result = provider.fetch(&Location::new(30.9, 75.85)).await;

        assert!(matches!(result, Err(WeatherError::Status(503))));
    }

    #[tokio::test]
    async fn test_zero_timeout_client_fetches() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&mock_server)
            .await;

        let provider = WeatherProvider::new(&ApiConfig {
            timeout_secs: 0,
            ..api(&mock_server.uri(), "real-key")
        })
        .unwrap();
        let result = provider.fetch(&Location::new(30.9, 75.85)).await;

        assert!(matches!(result, Err(WeatherError::Status(502))));
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let provider = WeatherProvider::new(&api(&mock_server.uri(), "k")).unwrap();
        let result = provider.fetch(&Location::new(30.9, 75.85)).await;

        assert!(matches!(result, Err(WeatherError::Parse(_))));
    }

    #[tokio::test]
    async fn test_empty_list_is_parse_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "list": [] })),
            )
            .mount(&mock_server)
            .await;

        let provider = WeatherProvider::new(&api(&mock_server.uri(), "k")).unwrap();
        let result = provider.fetch(&Location::new(30.9, 75.85)).await;

        assert!(matches!(result, Err(WeatherError::Parse(_))));
    }
}
