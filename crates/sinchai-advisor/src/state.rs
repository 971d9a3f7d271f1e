//! Application state for one advisory session.
//!
//! Everything that changes between user actions lives here and is passed
//! explicitly to the rendering functions.

use crate::decision::{evaluate, Verdict};
use crate::tips::{Tip, TipCycle};
use serde::Serialize;
use sinchai_core::{Language, Thresholds};
use sinchai_weather::{District, Forecast, ForecastEntry, Location, WeatherSample};

/// How the current location should be described
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LocationLabel {
    /// Picked from the district registry
    District { name: String },
    /// Raw coordinates, described by the closest district
    Near {
        district: String,
        latitude: f64,
        longitude: f64,
    },
    /// Canned forecast
    Simulated { name: String },
}

impl LocationLabel {
    pub fn for_location(location: &Location) -> Self {
        match &location.name {
            Some(name) => Self::District { name: name.clone() },
            None => Self::Near {
                district: District::nearest(location).name.to_string(),
                latitude: location.latitude,
                longitude: location.longitude,
            },
        }
    }
}

/// Everything needed to render one report
#[derive(Debug, Clone, Serialize)]
pub struct Advice {
    pub language: Language,
    pub location: Option<LocationLabel>,
    pub threshold: i32,
    pub sample: WeatherSample,
    pub verdict: Verdict,
    pub forecast: Vec<ForecastEntry>,
    pub tip: Option<Tip>,
}

#[derive(Debug, Clone)]
pub struct AppState {
    language: Language,
    thresholds: Thresholds,
    location: Option<LocationLabel>,
    last_forecast: Option<Forecast>,
    tips: TipCycle,
}

impl AppState {
    pub fn new(language: Language, thresholds: Thresholds) -> Self {
        Self {
            language,
            thresholds,
            location: None,
            last_forecast: None,
            tips: TipCycle::new(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn location(&self) -> Option<&LocationLabel> {
        self.location.as_ref()
    }

    pub fn last_forecast(&self) -> Option<&Forecast> {
        self.last_forecast.as_ref()
    }

    pub fn set_location(&mut self, label: LocationLabel) {
        tracing::debug!("Location set to {:?}", label);
        self.location = Some(label);
    }

    /// Store a freshly fetched forecast and produce advice for it
    pub fn record_forecast(&mut self, forecast: Forecast) -> Advice {
        if self.location.is_none() {
            self.location = Some(LocationLabel::for_location(&forecast.location));
        }
        let advice = self.advice_for(&forecast);
        self.last_forecast = Some(forecast);
        advice
    }

    /// Re-evaluate the last forecast. Advances the tip rotation.
    pub fn advise(&mut self) -> Option<Advice> {
        let forecast = self.last_forecast.take()?;
        let advice = self.advice_for(&forecast);
        self.last_forecast = Some(forecast);
        Some(advice)
    }

    /// Switch to `language`, or to the other language when `None`.
    /// Returns fresh advice in the new language if a forecast is loaded.
    pub fn toggle_language(&mut self, language: Option<Language>) -> Option<Advice> {
        self.language = language.unwrap_or_else(|| self.language.toggled());
        tracing::info!("Language switched to: {}", self.language.code());
        self.advise()
    }

    pub fn next_tip(&mut self) -> Option<&'static Tip> {
        self.tips.next_tip(self.language)
    }

    fn advice_for(&mut self, forecast: &Forecast) -> Advice {
        let sample = forecast.current_sample();
        let verdict = evaluate(&sample, &self.thresholds);
        let tip = self.next_tip().copied();

        Advice {
            language: self.language,
            location: self.location.clone(),
            threshold: self.thresholds.rainfall_threshold,
            sample,
            verdict,
            forecast: forecast.strip(),
            tip,
        }
    }
}
