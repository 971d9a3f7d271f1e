//! Plain-text presentation of an [`Advice`].

use crate::i18n::{labels, note_text, tier_text};
use crate::state::{Advice, LocationLabel};
use chrono::{DateTime, FixedOffset, Offset, Utc};
use sinchai_core::Language;
use std::io::{self, Write};

/// Punjab local time (IST, UTC+05:30)
const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

fn local_offset() -> FixedOffset {
    FixedOffset::east_opt(IST_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Forecast column label, e.g. "Oct 19, 02 PM" in local time
pub fn forecast_label(time: DateTime<Utc>) -> String {
    time.with_timezone(&local_offset())
        .format("%b %-d, %I %p")
        .to_string()
}

pub fn location_text(language: Language, label: &LocationLabel) -> String {
    let l = labels(language);
    match label {
        LocationLabel::District { name } => format!("{}: {}", l.selected, name),
        LocationLabel::Near {
            district,
            latitude,
            longitude,
        } => format!("{} {} ({:.2}, {:.2})", l.near, district, latitude, longitude),
        LocationLabel::Simulated { name } => format!("{} - {} (Simulated)", l.simulated, name),
    }
}

/// Write the full report: location, weather, decision, forecast strip and tip
pub fn report<W: Write>(out: &mut W, advice: &Advice) -> io::Result<()> {
    let l = labels(advice.language);
    let sample = &advice.sample;

    let location = advice
        .location
        .as_ref()
        .map(|label| location_text(advice.language, label))
        .unwrap_or_else(|| l.select_prompt.to_string());
    writeln!(out, "📍 {}", location)?;
    writeln!(out)?;

    writeln!(out, "{} ({})", l.current_weather, sample.condition_label)?;
    writeln!(out, "  {}: {}°C", l.temperature, sample.temperature_c)?;
    writeln!(out, "  {}: {}%", l.humidity, sample.humidity_percent)?;
    writeln!(out, "  {}: {}%", l.rain_chance, sample.rain_chance_percent)?;
    writeln!(out, "  {}: {} m/s", l.wind_speed, sample.wind_speed_mps)?;
    writeln!(out)?;

    let tier = advice.verdict.tier;
    let text = tier_text(advice.language, tier);
    writeln!(out, "{} [{}]", l.decision, tier.status())?;
    writeln!(out, "  {}", text.title)?;
    writeln!(out, "  {}", text.description)?;
    writeln!(out, "  {}:", l.reasoning)?;
    for note in &advice.verdict.notes {
        writeln!(out, "    - {}", note_text(advice.language, note))?;
    }
    writeln!(out, "  {}: {}%", l.threshold, advice.threshold)?;

    if !advice.forecast.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", l.forecast)?;
        for entry in &advice.forecast {
            writeln!(
                out,
                "  {:<14} {:>4}°C   🌧️ {}%",
                forecast_label(entry.time),
                entry.temperature_c,
                entry.rain_chance_percent
            )?;
        }
    }

    if let Some(tip) = &advice.tip {
        writeln!(out)?;
        writeln!(out, "{}", l.tip)?;
        writeln!(out, "  {}", tip.title)?;
        writeln!(out, "  {}", tip.content)?;
    }

    Ok(())
}

/// Render to a string, for callers without a writer
pub fn report_string(advice: &Advice) -> String {
    let mut buf = Vec::new();
    // Writing to a Vec cannot fail
    report(&mut buf, advice).ok();
    String::from_utf8_lossy(&buf).into_owned()
}
