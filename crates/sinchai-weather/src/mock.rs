//! Canned forecast for trying the advisor without an API key.

use crate::district::District;
use crate::types::{
    ConditionEntry, Forecast, ForecastItem, Location, MainReadings, WeatherError, WindReadings,
};
use chrono::{DateTime, Utc};

/// Provider interval spacing
const INTERVAL_SECS: i64 = 3 * 60 * 60;

/// (temp °C, humidity %, wind m/s, pop 0-1, condition)
const SIMULATED: [(f64, i32, f64, f64, &str); 8] = [
    (28.0, 65, 12.0, 0.3, "Partly Cloudy"),
    (26.0, 70, 8.0, 0.5, "Cloudy"),
    (24.0, 75, 10.0, 0.7, "Rainy"),
    (22.0, 80, 6.0, 0.6, "Rainy"),
    (25.0, 72, 9.0, 0.4, "Mostly Cloudy"),
    (29.0, 60, 11.0, 0.2, "Sunny"),
    (30.0, 55, 14.0, 0.1, "Sunny"),
    (28.0, 62, 13.0, 0.15, "Partly Cloudy"),
];

/// Eight 3-hourly intervals starting at `now`, located at Ludhiana.
pub fn simulated_forecast(now: DateTime<Utc>) -> Result<Forecast, WeatherError> {
    let start = now.timestamp();
    let items = SIMULATED
        .iter()
        .zip(0i64..)
        .map(|(&(temp, humidity, speed, pop, label), i)| ForecastItem {
            dt: start + i * INTERVAL_SECS,
            main: MainReadings { temp, humidity },
            wind: WindReadings { speed },
            pop: Some(pop),
            weather: vec![ConditionEntry {
                main: label.to_string(),
            }],
        })
        .collect();

    let location = District::lookup("ludhiana")
        .map(District::location)
        .unwrap_or_else(|_| Location::new(30.9010, 75.8573));

    Forecast::new(items, location, now)
}
