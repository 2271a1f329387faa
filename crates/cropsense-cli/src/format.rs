//! Output formatting utilities for text, JSON, and CSV output.

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use time::OffsetDateTime;

use cropsense_types::{Severity, Snapshot, Suggestion};

/// Formatting options for output.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Disable colored output.
    pub no_color: bool,
    /// Omit header row in CSV output.
    pub no_header: bool,
    /// Use compact JSON output (no pretty-printing).
    pub compact: bool,
}

impl FormatOptions {
    pub fn new(no_color: bool) -> Self {
        Self {
            no_color,
            ..Self::default()
        }
    }

    /// Create with no_header option for CSV output.
    pub fn with_no_header(mut self, no_header: bool) -> Self {
        self.no_header = no_header;
        self
    }

    /// Create with compact JSON option.
    pub fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Serialize value to JSON string, respecting compact option.
    pub fn as_json<T: Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.compact {
            serde_json::to_string(value)?
        } else {
            serde_json::to_string_pretty(value)?
        };
        Ok(json + "\n")
    }

    /// Render a suggestion, colored by severity.
    #[must_use]
    pub fn suggestion(&self, suggestion: Suggestion) -> String {
        let text = suggestion.as_str();
        if self.no_color {
            return text.to_string();
        }
        match suggestion.severity() {
            Severity::Optimal => text.green().to_string(),
            Severity::Action => text.yellow().to_string(),
            Severity::Warning => text.red().bold().to_string(),
        }
    }
}

/// A snapshot with the time it was received, as emitted by `watch`.
#[derive(Debug, Serialize)]
pub struct TimedSnapshot<'a> {
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    #[serde(flatten)]
    pub snapshot: &'a Snapshot,
}

/// Local wall-clock time, falling back to UTC when the offset is unknown.
pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

fn clock(timestamp: OffsetDateTime) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        timestamp.hour(),
        timestamp.minute(),
        timestamp.second()
    )
}

/// One human-readable line for a snapshot.
#[must_use]
pub fn format_watch_line(snapshot: &Snapshot, timestamp: OffsetDateTime, opts: &FormatOptions) -> String {
    let crop = if opts.no_color {
        snapshot.crop_name.clone()
    } else {
        snapshot.crop_name.cyan().to_string()
    };
    format!(
        "[{}] {}  {:.1}°C  {:.0}%  {:.0} Lx  {:.1} hPa  {}\n",
        clock(timestamp),
        crop,
        snapshot.temperature,
        snapshot.humidity,
        snapshot.sunlight,
        snapshot.pressure,
        opts.suggestion(snapshot.suggestion),
    )
}

/// JSON for a snapshot, with its timestamp.
pub fn format_watch_json(
    snapshot: &Snapshot,
    timestamp: OffsetDateTime,
    opts: &FormatOptions,
) -> Result<String> {
    opts.as_json(&TimedSnapshot {
        timestamp,
        snapshot,
    })
}

/// CSV header for watch output.
#[must_use]
pub fn format_watch_csv_header() -> String {
    "timestamp,crop,temperature_c,humidity_pct,sunlight_lux,pressure_hpa,suggestion\n".to_string()
}

/// CSV row for a snapshot.
#[must_use]
pub fn format_watch_csv_line(snapshot: &Snapshot, timestamp: OffsetDateTime) -> String {
    let timestamp = timestamp
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_default();
    format!(
        "{},{},{:.2},{:.2},{:.2},{:.2},{}\n",
        timestamp,
        csv_escape(&snapshot.crop_name),
        snapshot.temperature,
        snapshot.humidity,
        snapshot.sunlight,
        snapshot.pressure,
        csv_escape(snapshot.suggestion.as_str()),
    )
}

/// Quote a CSV field when it contains a separator, quote or newline.
#[must_use]
pub fn csv_escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Result of classifying a single triple.
#[derive(Debug, Serialize)]
pub struct Classification {
    pub temperature: f32,
    pub humidity: f32,
    pub sunlight: f32,
    pub suggestion: Suggestion,
    pub severity: Severity,
    pub action: &'static str,
}

impl Classification {
    pub fn new(temperature: f32, humidity: f32, sunlight: f32, suggestion: Suggestion) -> Self {
        Self {
            temperature,
            humidity,
            sunlight,
            suggestion,
            severity: suggestion.severity(),
            action: suggestion.action(),
        }
    }
}

/// Human-readable classification result.
#[must_use]
pub fn format_classification_text(c: &Classification, opts: &FormatOptions) -> String {
    format!(
        "Temperature: {:.1}°C\nHumidity:    {:.1}%\nSunlight:    {:.0} Lx\nSuggestion:  {}\nAction:      {}\n",
        c.temperature,
        c.humidity,
        c.sunlight,
        opts.suggestion(c.suggestion),
        c.action,
    )
}

/// CSV output for a classification, with header unless disabled.
#[must_use]
pub fn format_classification_csv(c: &Classification, opts: &FormatOptions) -> String {
    let mut out = String::new();
    if !opts.no_header {
        out.push_str("temperature_c,humidity_pct,sunlight_lux,suggestion\n");
    }
    out.push_str(&format!(
        "{:.2},{:.2},{:.2},{}\n",
        c.temperature,
        c.humidity,
        c.sunlight,
        csv_escape(c.suggestion.as_str())
    ));
    out
}
