//! Irrigation decision.
//!
//! The tier comes from rain probability alone. Temperature, humidity and
//! wind only add notes.

use serde::Serialize;
use sinchai_core::Thresholds;
use sinchai_weather::WeatherSample;

/// Width (percentage points) of the moderate band below the rainfall threshold.
pub const MODERATE_BAND_OFFSET: i32 = 20;

/// Wind above this speed (m/s, strictly greater) adds a warning.
pub const WIND_WARNING_SPEED_MPS: i32 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    NoIrrigation,
    ModerateIrrigation,
    FullIrrigation,
}

impl Tier {
    /// Traffic-light status used by the presentation layer
    pub fn status(&self) -> &'static str {
        match self {
            Self::NoIrrigation => "green",
            Self::ModerateIrrigation => "orange",
            Self::FullIrrigation => "red",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::NoIrrigation => "✅",
            Self::ModerateIrrigation => "⚠️",
            Self::FullIrrigation => "🔴",
        }
    }
}

/// One line of reasoning behind a verdict. Rendered per language by `i18n`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReasoningNote {
    RainAboveThreshold {
        rain_chance_percent: i32,
        threshold: i32,
    },
    RainModerate {
        rain_chance_percent: i32,
    },
    RainBelowThreshold {
        rain_chance_percent: i32,
        threshold: i32,
    },
    HighTemperature {
        temperature_c: i32,
    },
    LowTemperature {
        temperature_c: i32,
    },
    LowHumidity {
        humidity_percent: i32,
    },
    StrongWind {
        wind_speed_mps: i32,
    },
}

impl ReasoningNote {
    /// Secondary notes come from temperature, humidity and wind
    pub fn is_secondary(&self) -> bool {
        !matches!(
            self,
            Self::RainAboveThreshold { .. }
                | Self::RainModerate { .. }
                | Self::RainBelowThreshold { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub tier: Tier,
    /// In evaluation order
    pub notes: Vec<ReasoningNote>,
}

impl Verdict {
    pub fn secondary_notes(&self) -> impl Iterator<Item = &ReasoningNote> {
        self.notes.iter().filter(|n| n.is_secondary())
    }
}

/// Decide how much to irrigate for one weather sample.
///
/// Inputs are taken as-is: nothing is clamped or validated here.
pub fn evaluate(sample: &WeatherSample, thresholds: &Thresholds) -> Verdict {
    let rain = sample.rain_chance_percent;
    let threshold = thresholds.rainfall_threshold;
    let mut notes = Vec::new();

    let tier = if rain >= threshold {
        notes.push(ReasoningNote::RainAboveThreshold {
            rain_chance_percent: rain,
            threshold,
        });
        Tier::NoIrrigation
    } else if rain >= threshold.saturating_sub(MODERATE_BAND_OFFSET) {
        notes.push(ReasoningNote::RainModerate {
            rain_chance_percent: rain,
        });
        Tier::ModerateIrrigation
    } else {
        notes.push(ReasoningNote::RainBelowThreshold {
            rain_chance_percent: rain,
            threshold,
        });
        Tier::FullIrrigation
    };

    if sample.temperature_c >= thresholds.max_temp_irrigation {
        notes.push(ReasoningNote::HighTemperature {
            temperature_c: sample.temperature_c,
        });
    }

    if sample.temperature_c <= thresholds.min_temp_irrigation {
        notes.push(ReasoningNote::LowTemperature {
            temperature_c: sample.temperature_c,
        });
    }

    if sample.humidity_percent <= thresholds.min_humidity_irrigation {
        notes.push(ReasoningNote::LowHumidity {
            humidity_percent: sample.humidity_percent,
        });
    }

    if sample.wind_speed_mps > WIND_WARNING_SPEED_MPS {
        notes.push(ReasoningNote::StrongWind {
            wind_speed_mps: sample.wind_speed_mps,
        });
    }

    tracing::debug!(
        "Irrigation verdict {:?} for rain {}% (threshold {}%)",
        tier,
        rain,
        threshold
    );

    Verdict { tier, notes }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(rain: i32, temp: i32, humidity: i32, wind: i32) -> WeatherSample {
        WeatherSample {
            rain_chance_percent: rain,
            temperature_c: temp,
            humidity_percent: humidity,
            wind_speed_mps: wind,
            condition_label: "Clear".to_string(),
        }
    }

    fn mild(rain: i32) -> WeatherSample {
        sample(rain, 25, 60, 10)
    }

    #[test]
    fn test_rain_at_or_above_threshold_is_no_irrigation() {
        let t = Thresholds::default();
        for rain in [50, 51, 75, 100] {
            assert_eq!(evaluate(&mild(rain), &t).tier, Tier::NoIrrigation, "rain {}", rain);
        }
    }

    #[test]
    fn test_extreme_threshold_does_not_overflow() {
        let t = Thresholds {
            rainfall_threshold: i32::MIN + 5,
            ..Thresholds::default()
        };
        let verdict = evaluate(&mild(i32::MIN), &t);
        assert_eq!(verdict.tier, Tier::ModerateIrrigation);

        let verdict = evaluate(&mild(0), &t);
        assert_eq!(verdict.tier, Tier::NoIrrigation);
    }

    #[test]
    fn test_moderate_band() {
        let t = Thresholds::default();
        for rain in 30..50 {
            assert_eq!(
                evaluate(&mild(rain), &t).tier,
                Tier::ModerateIrrigation,
                "rain {}",
                rain
            );
        }
    }

    #[test]
    fn test_below_band_is_full_irrigation() {
        let t = Thresholds::default();
        for rain in [0, 10, 29] {
            assert_eq!(evaluate(&mild(rain), &t).tier, Tier::FullIrrigation, "rain {}", rain);
        }
    }

    #[test]
    fn test_threshold_boundary_is_no_irrigation() {
        let verdict = evaluate(&mild(50), &Thresholds::default());
        assert_eq!(verdict.tier, Tier::NoIrrigation);
        assert_eq!(
            verdict.notes,
            vec![ReasoningNote::RainAboveThreshold {
                rain_chance_percent: 50,
                threshold: 50
            }]
        );
    }

    #[test]
    fn test_band_follows_custom_threshold() {
        let t = Thresholds {
            rainfall_threshold: 70,
            ..Thresholds::default()
        };
        assert_eq!(evaluate(&mild(50), &t).tier, Tier::ModerateIrrigation);
        assert_eq!(evaluate(&mild(49), &t).tier, Tier::FullIrrigation);
        assert_eq!(evaluate(&mild(70), &t).tier, Tier::NoIrrigation);
    }

    #[test]
    fn test_secondary_notes_are_independent_and_ordered() {
        let verdict = evaluate(&sample(10, 45, 20, 30), &Thresholds::default());

        assert_eq!(verdict.tier, Tier::FullIrrigation);
        let secondary: Vec<_> = verdict.secondary_notes().cloned().collect();
        assert_eq!(
            secondary,
            vec![
                ReasoningNote::HighTemperature { temperature_c: 45 },
                ReasoningNote::LowHumidity {
                    humidity_percent: 20
                },
                ReasoningNote::StrongWind { wind_speed_mps: 30 },
            ]
        );
        assert_eq!(verdict.notes.len(), 4);
        assert!(!verdict.notes[0].is_secondary());
    }

    #[test]
    fn test_secondary_notes_never_change_tier() {
        let t = Thresholds::default();
        assert_eq!(evaluate(&sample(80, 45, 10, 40), &t).tier, Tier::NoIrrigation);
        assert_eq!(evaluate(&sample(35, -3, 10, 40), &t).tier, Tier::ModerateIrrigation);
    }

    #[test]
    fn test_temperature_boundaries_inclusive() {
        let t = Thresholds::default();

        let hot = evaluate(&sample(10, 40, 60, 0), &t);
        assert!(hot
            .notes
            .contains(&ReasoningNote::HighTemperature { temperature_c: 40 }));

        let cold = evaluate(&sample(10, 5, 60, 0), &t);
        assert!(cold
            .notes
            .contains(&ReasoningNote::LowTemperature { temperature_c: 5 }));

        let mid = evaluate(&sample(10, 39, 60, 0), &t);
        assert_eq!(mid.secondary_notes().count(), 0);
    }

    #[test]
    fn test_humidity_boundary_inclusive() {
        let t = Thresholds::default();
        assert_eq!(evaluate(&sample(10, 25, 30, 0), &t).secondary_notes().count(), 1);
        assert_eq!(evaluate(&sample(10, 25, 31, 0), &t).secondary_notes().count(), 0);
    }

    #[test]
    fn test_wind_boundary_is_strict() {
        let t = Thresholds::default();
        let at = evaluate(&sample(10, 25, 60, 25), &t);
        assert_eq!(at.secondary_notes().count(), 0);

        let above = evaluate(&sample(10, 25, 60, 26), &t);
        assert_eq!(
            above.secondary_notes().collect::<Vec<_>>(),
            vec![&ReasoningNote::StrongWind { wind_speed_mps: 26 }]
        );
    }

    #[test]
    fn test_inverted_temperature_thresholds_fire_both_notes() {
        let t = Thresholds {
            min_temp_irrigation: 30,
            max_temp_irrigation: 20,
            ..Thresholds::default()
        };
        let verdict = evaluate(&sample(10, 25, 60, 0), &t);
        assert_eq!(verdict.secondary_notes().count(), 2);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let t = Thresholds::default();
        let s = sample(42, 41, 25, 27);
        assert_eq!(evaluate(&s, &t), evaluate(&s, &t));
    }

    #[test]
    fn test_tier_status_and_icon() {
        assert_eq!(Tier::NoIrrigation.status(), "green");
        assert_eq!(Tier::ModerateIrrigation.status(), "orange");
        assert_eq!(Tier::FullIrrigation.icon(), "🔴");
    }

    #[test]
    fn test_verdict_serializes_with_note_kind() {
        let verdict = evaluate(&sample(60, 25, 60, 0), &Thresholds::default());
        let json = serde_json::to_value(&verdict).unwrap();
        assert_eq!(json["tier"], "no_irrigation");
        assert_eq!(json["notes"][0]["kind"], "rain_above_threshold");
        assert_eq!(json["notes"][0]["threshold"], 50);
    }
}
