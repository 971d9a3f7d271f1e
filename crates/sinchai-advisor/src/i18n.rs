//! English and Punjabi text for the report.

use crate::decision::{ReasoningNote, Tier};
use sinchai_core::{AppError, ForecastError, Language, LocationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierText {
    pub title: &'static str,
    pub description: &'static str,
}

/// Headline and advice for a tier
pub fn tier_text(language: Language, tier: Tier) -> TierText {
    match (language, tier) {
        (Language::English, Tier::NoIrrigation) => TierText {
            title: "✅ Minimal Watering",
            description: "Rain is likely. Reduce irrigation to save water and support organic farming.",
        },
        (Language::English, Tier::ModerateIrrigation) => TierText {
            title: "⚠️ Moderate Irrigation",
            description: "Rain may occur. Water lightly and monitor forecast.",
        },
        (Language::English, Tier::FullIrrigation) => TierText {
            title: "🔴 Regular Irrigation Needed",
            description: "No rain expected. Provide regular irrigation while implementing water conservation.",
        },
        (Language::Punjabi, Tier::NoIrrigation) => TierText {
            title: "✅ ਘੱਟ ਸਿੰਚਾਈ",
            description: "ਮੀਂਹ ਹੋਣ ਦੀ ਸੰਭਾਵਨਾ ਹੈ। ਪਾਣੀ ਬਚਾਉਣ ਅਤੇ ਜੈਵਿਕ ਖੇਤੀ ਦੇ ਲਈ ਸਿੰਚਾਈ ਘਟਾਓ।",
        },
        (Language::Punjabi, Tier::ModerateIrrigation) => TierText {
            title: "⚠️ ਦਰਮਿਆਨੀ ਸਿੰਚਾਈ",
            description: "ਮੀਂਹ ਪੈ ਸਕਦਾ ਹੈ। ਹਲਕੀ ਸਿੰਚਾਈ ਕਰੋ ਅਤੇ ਮੌਸਮ ਦੀ ਭਵਿੱਖਬਾਣੀ ਉੱਤੇ ਨਜ਼ਰ ਰੱਖੋ।",
        },
        (Language::Punjabi, Tier::FullIrrigation) => TierText {
            title: "🔴 ਨਿਯਮਿਤ ਸਿੰਚਾਈ ਲਾਜ਼ਮੀ",
            description: "ਮੀਂਹ ਦੀ ਅਪੇਖਿਆ ਨਹੀਂ ਹੈ। ਪਾਣੀ ਬਚਾਓ ਦੇ ਤਰੀਕਿਆਂ ਨੂੰ ਲਾਗੂ ਕਰਦੇ ਹੋਏ ਨਿਯਮਿਤ ਸਿੰਚਾਈ ਦਿਓ।",
        },
    }
}

pub fn note_text(language: Language, note: &ReasoningNote) -> String {
    match language {
        Language::English => note_text_en(note),
        Language::Punjabi => note_text_pa(note),
    }
}

fn note_text_en(note: &ReasoningNote) -> String {
    match *note {
        ReasoningNote::RainAboveThreshold {
            rain_chance_percent,
            threshold,
        } => format!(
            "Rain probability {}% exceeds threshold ({}%)",
            rain_chance_percent, threshold
        ),
        ReasoningNote::RainModerate {
            rain_chance_percent,
        } => format!("Rain probability {}% is moderate", rain_chance_percent),
        ReasoningNote::RainBelowThreshold {
            rain_chance_percent,
            threshold,
        } => format!(
            "Rain probability {}% below threshold ({}%)",
            rain_chance_percent, threshold
        ),
        ReasoningNote::HighTemperature { temperature_c } => format!(
            "⚠️ High temperature ({}°C) increases water loss",
            temperature_c
        ),
        ReasoningNote::LowTemperature { temperature_c } => format!(
            "ℹ️ Low temperature ({}°C) reduces water loss",
            temperature_c
        ),
        ReasoningNote::LowHumidity { humidity_percent } => format!(
            "⚠️ Low humidity ({}%) increases evaporation",
            humidity_percent
        ),
        ReasoningNote::StrongWind { wind_speed_mps } => format!(
            "⚠️ Strong wind ({} m/s) increases water loss",
            wind_speed_mps
        ),
    }
}

fn note_text_pa(note: &ReasoningNote) -> String {
    match *note {
        ReasoningNote::RainAboveThreshold {
            rain_chance_percent,
            threshold,
        } => format!(
            "ਮੀਂਹ ਦੀ ਸੰਭਾਵਨਾ {}% ਹੱਦ ({}%) ਤੋਂ ਵੱਧ ਹੈ",
            rain_chance_percent, threshold
        ),
        ReasoningNote::RainModerate {
            rain_chance_percent,
        } => format!("ਮੀਂਹ ਦੀ ਸੰਭਾਵਨਾ {}% ਦਰਮਿਆਨੀ ਹੈ", rain_chance_percent),
        ReasoningNote::RainBelowThreshold {
            rain_chance_percent,
            threshold,
        } => format!(
            "ਮੀਂਹ ਦੀ ਸੰਭਾਵਨਾ {}% ਹੱਦ ({}%) ਤੋਂ ਘੱਟ ਹੈ",
            rain_chance_percent, threshold
        ),
        ReasoningNote::HighTemperature { temperature_c } => format!(
            "⚠️ ਵੱਧ ਤਾਪਮਾਨ ({}°C) ਨਾਲ ਪਾਣੀ ਦਾ ਨੁਕਸਾਨ ਵਧਦਾ ਹੈ",
            temperature_c
        ),
        ReasoningNote::LowTemperature { temperature_c } => format!(
            "ℹ️ ਘੱਟ ਤਾਪਮਾਨ ({}°C) ਨਾਲ ਪਾਣੀ ਦਾ ਨੁਕਸਾਨ ਘਟਦਾ ਹੈ",
            temperature_c
        ),
        ReasoningNote::LowHumidity { humidity_percent } => format!(
            "⚠️ ਘੱਟ ਨਮੀ ({}%) ਨਾਲ ਭਾਫ਼ ਬਣਨਾ ਵਧਦਾ ਹੈ",
            humidity_percent
        ),
        ReasoningNote::StrongWind { wind_speed_mps } => format!(
            "⚠️ ਤੇਜ਼ ਹਵਾ ({} m/s) ਨਾਲ ਪਾਣੀ ਦਾ ਨੁਕਸਾਨ ਵਧਦਾ ਹੈ",
            wind_speed_mps
        ),
    }
}

/// Fixed labels of the report
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    pub current_weather: &'static str,
    pub temperature: &'static str,
    pub humidity: &'static str,
    pub rain_chance: &'static str,
    pub wind_speed: &'static str,
    pub decision: &'static str,
    pub reasoning: &'static str,
    pub threshold: &'static str,
    pub forecast: &'static str,
    pub tip: &'static str,
    pub selected: &'static str,
    pub near: &'static str,
    pub simulated: &'static str,
    pub select_prompt: &'static str,
}

static LABELS_EN: Labels = Labels {
    current_weather: "Current Weather",
    temperature: "Temperature",
    humidity: "Humidity",
    rain_chance: "Rain Chance",
    wind_speed: "Wind Speed",
    decision: "Irrigation Decision",
    reasoning: "Why",
    threshold: "Rainfall threshold",
    forecast: "Forecast",
    tip: "Organic Farming Tip",
    selected: "Selected",
    near: "Near",
    simulated: "Test Data",
    select_prompt: "Please select your district",
};

static LABELS_PA: Labels = Labels {
    current_weather: "ਮੌਜੂਦਾ ਮੌਸਮ",
    temperature: "ਤਾਪਮਾਨ",
    humidity: "ਨਮੀ",
    rain_chance: "ਮੀਂਹ ਦੀ ਸੰਭਾਵਨਾ",
    wind_speed: "ਹਵਾ ਦੀ ਗਤੀ",
    decision: "ਸਿੰਚਾਈ ਫ਼ੈਸਲਾ",
    reasoning: "ਕਾਰਨ",
    threshold: "ਮੀਂਹ ਦੀ ਹੱਦ",
    forecast: "ਭਵਿੱਖਬਾਣੀ",
    tip: "ਜੈਵਿਕ ਖੇਤੀ ਸੁਝਾਅ",
    selected: "ਚੁਣਿਆ ਗਿਆ",
    near: "ਨੇੜੇ",
    simulated: "ਟੈਸਟ ਡਾਟਾ",
    select_prompt: "ਕਿਰਪਾ ਕਰਕੇ ਆਪਣਾ ਜ਼ਿਲ੍ਹਾ ਚੁਣੋ",
};

pub fn labels(language: Language) -> &'static Labels {
    match language {
        Language::English => &LABELS_EN,
        Language::Punjabi => &LABELS_PA,
    }
}

/// Error message in the requested language
pub fn error_text(language: Language, error: &AppError) -> String {
    match language {
        Language::English => match error {
            AppError::Forecast(ForecastError::ApiKeyNotConfigured) => {
                format!("⚠️ {}", error.user_message())
            }
            _ => error.user_message().to_string(),
        },
        Language::Punjabi => error_text_pa(error).to_string(),
    }
}

fn error_text_pa(error: &AppError) -> &'static str {
    match error {
        AppError::Forecast(ForecastError::ApiKeyNotConfigured) => {
            "⚠️ API ਕੁੰਜੀ ਸੈੱਟ ਨਹੀਂ ਹੈ: https://openweathermap.org/api ਤੋਂ ਮੁਫ਼ਤ ਕੁੰਜੀ ਲਓ ਅਤੇ config.toml ਵਿੱਚ ਪਾਓ।"
        }
        AppError::Forecast(ForecastError::Unavailable(_)) => {
            "ਮੌਸਮ ਦੀ ਜਾਣਕਾਰੀ ਪ੍ਰਾਪਤ ਨਹੀਂ ਹੋ ਸਕੀ। API ਚਾਲੂ ਹੋਣ ਵਿੱਚ 10+ ਮਿੰਟ ਲੱਗ ਸਕਦੇ ਹਨ।"
        }
        AppError::Location(LocationError::UnknownDistrict(_)) => "ਜ਼ਿਲ੍ਹਾ ਨਹੀਂ ਮਿਲਿਆ",
        AppError::Location(_) => "GPS ਉਪਲਬਧ ਨਹੀਂ ਹੈ। ਕਿਰਪਾ ਕਰਕੇ ਆਪਣਾ ਜ਼ਿਲ੍ਹਾ ਖੁਦ ਚੁਣੋ।",
        AppError::Config(_) => "ਸੰਰਚਨਾ ਗਲਤ ਹੈ। ਆਪਣੀਆਂ ਸੈਟਿੰਗਾਂ ਜਾਂਚੋ।",
        AppError::Io(_) | AppError::Other(_) => "ਕੁਝ ਗਲਤ ਹੋ ਗਿਆ। ਕਿਰਪਾ ਕਰਕੇ ਦੁਬਾਰਾ ਕੋਸ਼ਿਸ਼ ਕਰੋ।",
    }
}
