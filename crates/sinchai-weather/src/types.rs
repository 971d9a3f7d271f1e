use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sinchai_core::LocationError;

/// Entries of the provider list that feed the forecast strip.
pub const FORECAST_WINDOW: usize = 8;

/// Keep every n-th entry of the window.
pub const FORECAST_STRIDE: usize = 2;

/// Round half towards positive infinity, so -2.5 becomes -2 and 2.5 becomes 3.
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Probability of precipitation (0-1 fraction) as a whole percentage.
/// A missing value counts as no chance of rain.
pub fn pop_to_percent(pop: Option<f64>) -> i32 {
    round_half_up(pop.unwrap_or(0.0) * 100.0)
}

/// Geographic location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy_meters: Option<f64>,
    /// Display name when the location came from the district registry
    pub name: Option<String>,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            accuracy_meters: None,
            name: None,
        }
    }

    /// Build a location from user-supplied coordinates, rejecting values
    /// outside the valid latitude/longitude ranges.
    pub fn from_coordinates(latitude: f64, longitude: f64) -> Result<Self, LocationError> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);

        if !valid {
            return Err(LocationError::InvalidCoordinates {
                latitude,
                longitude,
            });
        }

        Ok(Self::new(latitude, longitude))
    }
}

/// Readings from one forecast interval, as consumed by the irrigation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherSample {
    pub rain_chance_percent: i32,
    pub temperature_c: i32,
    pub humidity_percent: i32,
    pub wind_speed_mps: i32,
    /// Descriptive only, e.g. "Clouds"
    pub condition_label: String,
}

impl WeatherSample {
    pub fn from_item(item: &ForecastItem) -> Self {
        Self {
            rain_chance_percent: pop_to_percent(item.pop),
            temperature_c: round_half_up(item.main.temp),
            humidity_percent: item.main.humidity,
            wind_speed_mps: round_half_up(item.wind.speed),
            condition_label: item
                .weather
                .first()
                .map(|w| w.main.clone())
                .unwrap_or_default(),
        }
    }
}

/// One column of the short-range forecast strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub time: DateTime<Utc>,
    pub temperature_c: i32,
    pub rain_chance_percent: i32,
}

impl ForecastEntry {
    pub fn from_item(item: &ForecastItem) -> Self {
        Self {
            time: DateTime::from_timestamp(item.dt, 0).unwrap_or_default(),
            temperature_c: round_half_up(item.main.temp),
            rain_chance_percent: pop_to_percent(item.pop),
        }
    }
}

/// A fetched forecast. Always holds at least one interval.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawForecast")]
pub struct Forecast {
    items: Vec<ForecastItem>,
    pub location: Location,
    pub fetched_at: DateTime<Utc>,
}

impl Forecast {
    pub fn new(
        items: Vec<ForecastItem>,
        location: Location,
        fetched_at: DateTime<Utc>,
    ) -> Result<Self, WeatherError> {
        if items.is_empty() {
            return Err(WeatherError::Parse("forecast list is empty".to_string()));
        }

        Ok(Self {
            items,
            location,
            fetched_at,
        })
    }

    /// Current conditions, taken from the first interval
    pub fn current_sample(&self) -> WeatherSample {
        // `new` guarantees at least one item
        WeatherSample::from_item(&self.items[0])
    }

    /// Short-range strip: the first eight intervals, every other one
    pub fn strip(&self) -> Vec<ForecastEntry> {
        self.items
            .iter()
            .take(FORECAST_WINDOW)
            .step_by(FORECAST_STRIDE)
            .map(ForecastEntry::from_item)
            .collect()
    }

    pub fn items(&self) -> &[ForecastItem] {
        &self.items
    }
}

/// Unchecked shape of a serialized [`Forecast`]
#[derive(Deserialize)]
struct RawForecast {
    items: Vec<ForecastItem>,
    location: Location,
    fetched_at: DateTime<Utc>,
}

impl TryFrom<RawForecast> for Forecast {
    type Error = WeatherError;

    fn try_from(raw: RawForecast) -> Result<Self, Self::Error> {
        Forecast::new(raw.items, raw.location, raw.fetched_at)
    }
}

/// Forecast API response (5 day / 3 hour)
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<ForecastItem>,
}

/// One interval of the forecast API response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastItem {
    /// Unix timestamp, seconds
    pub dt: i64,
    pub main: MainReadings,
    pub wind: WindReadings,
    /// Probability of precipitation, 0-1
    #[serde(default)]
    pub pop: Option<f64>,
    #[serde(default)]
    pub weather: Vec<ConditionEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    /// Whole percent, as sent by the provider
    pub humidity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindReadings {
    pub speed: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionEntry {
    pub main: String,
}

/// Weather provider errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    /// The request failed while the key is still the placeholder
    #[error("API key not configured ({0})")]
    ApiKeyNotConfigured(String),
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(dt: i64, temp: f64, pop: Option<f64>) -> ForecastItem {
        ForecastItem {
            dt,
            main: MainReadings {
                temp,
                humidity: 65,
            },
            wind: WindReadings { speed: 3.4 },
            pop,
            weather: vec![ConditionEntry {
                main: "Clouds".to_string(),
            }],
        }
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.49), 2);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.51), -3);
    }

    #[test]
    fn test_pop_to_percent() {
        assert_eq!(pop_to_percent(Some(0.3)), 30);
        assert_eq!(pop_to_percent(Some(0.15)), 15);
        assert_eq!(pop_to_percent(Some(1.0)), 100);
        assert_eq!(pop_to_percent(None), 0);
    }

    #[test]
    fn test_sample_from_item() {
        let sample = WeatherSample::from_item(&item(0, 27.6, Some(0.42)));
        assert_eq!(sample.temperature_c, 28);
        assert_eq!(sample.rain_chance_percent, 42);
        assert_eq!(sample.humidity_percent, 65);
        assert_eq!(sample.wind_speed_mps, 3);
        assert_eq!(sample.condition_label, "Clouds");
    }

    #[test]
    fn test_sample_without_condition() {
        let mut raw = item(0, 20.0, None);
        raw.weather.clear();
        let sample = WeatherSample::from_item(&raw);
        assert_eq!(sample.condition_label, "");
        assert_eq!(sample.rain_chance_percent, 0);
    }

    #[test]
    fn test_empty_forecast_rejected() {
        let result = Forecast::new(vec![], Location::new(30.9, 75.8), Utc::now());
        assert!(matches!(result, Err(WeatherError::Parse(_))));
    }

    #[test]
    fn test_deserialize_rejects_empty_forecast() {
        let json = serde_json::json!({
            "items": [],
            "location": { "latitude": 30.9, "longitude": 75.85, "accuracy_meters": null, "name": null },
            "fetched_at": "2025-10-09T08:53:20Z"
        });
        let result = serde_json::from_value::<Forecast>(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_round_trips_valid_forecast() {
        let items = vec![item(1_700_000_000, 21.0, Some(0.2))];
        let forecast = Forecast::new(items, Location::new(30.9, 75.8), Utc::now()).unwrap();

        let json = serde_json::to_value(&forecast).unwrap();
        let back: Forecast = serde_json::from_value(json).unwrap();
        assert_eq!(back.current_sample(), forecast.current_sample());
    }

    #[test]
    fn test_humidity_is_taken_as_sent() {
        let mut raw = item(0, 20.0, None);
        raw.main.humidity = 30;
        assert_eq!(WeatherSample::from_item(&raw).humidity_percent, 30);
    }

    #[test]
    fn test_strip_takes_every_other_of_first_eight() {
        let items = (0..10)
            .map(|i| item(1_700_000_000 + i * 10_800, 20.0 + i as f64, Some(0.1)))
            .collect();
        let forecast = Forecast::new(items, Location::new(30.9, 75.8), Utc::now()).unwrap();

        let strip = forecast.strip();
        let temps: Vec<i32> = strip.iter().map(|e| e.temperature_c).collect();
        assert_eq!(temps, vec![20, 22, 24, 26]);
        assert_eq!(strip[1].time.timestamp(), 1_700_000_000 + 2 * 10_800);
    }

    #[test]
    fn test_strip_with_short_list() {
        let items = (0..3).map(|i| item(i, 10.0, None)).collect();
        let forecast = Forecast::new(items, Location::new(30.9, 75.8), Utc::now()).unwrap();
        assert_eq!(forecast.strip().len(), 2);
    }

    #[test]
    fn test_coordinates_validation() {
        assert!(Location::from_coordinates(30.9, 75.85).is_ok());
        assert!(matches!(
            Location::from_coordinates(91.0, 75.0),
            Err(LocationError::InvalidCoordinates { .. })
        ));
        assert!(Location::from_coordinates(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_response_deserializes_without_pop() {
        let json = serde_json::json!({
            "list": [{
                "dt": 1_700_000_000,
                "main": { "temp": 18.2, "humidity": 71 },
                "wind": { "speed": 2.1 },
                "weather": [{ "main": "Clear" }]
            }]
        });
        let response: ForecastResponse = serde_json::from_value(json).unwrap();
        assert_eq!(response.list[0].pop, None);
        assert_eq!(response.list[0].main.humidity, 71);
    }
}
