//! Weather side of Sinchai
//!
//! Forecast fetching from OpenWeatherMap, the Punjab district registry,
//! location resolution and a canned forecast for offline use.

pub mod district;
pub mod error_mapping;
pub mod location;
pub mod mock;
pub mod provider;
pub mod types;

pub use district::District;
pub use location::{get_current_location, LocationSource};
pub use mock::simulated_forecast;
pub use provider::WeatherProvider;
pub use types::*;
