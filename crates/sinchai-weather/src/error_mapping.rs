use crate::types::WeatherError;
use sinchai_core::error::ReqwestErrorExt;
use sinchai_core::{AppError, ForecastError, NetworkError};

impl From<WeatherError> for ForecastError {
    fn from(e: WeatherError) -> Self {
        match e {
            WeatherError::ApiKeyNotConfigured(_) => ForecastError::ApiKeyNotConfigured,
            WeatherError::Network(e) => ForecastError::Unavailable(e.into_network_error()),
            WeatherError::Status(status) => {
                ForecastError::Unavailable(NetworkError::Status { status })
            }
            WeatherError::Parse(msg) => {
                ForecastError::Unavailable(NetworkError::InvalidResponse(msg))
            }
        }
    }
}

impl From<WeatherError> for AppError {
    fn from(e: WeatherError) -> Self {
        AppError::Forecast(e.into())
    }
}
