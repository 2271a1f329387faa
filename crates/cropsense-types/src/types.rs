//! Core types for crop sensor data.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Crop name used when no crop is selected.
pub const UNKNOWN_CROP: &str = "Unknown";

/// A single sensor reading for one crop.
///
/// Values are stored exactly as received. Nothing is clamped or validated here;
/// out-of-range values are only limited at display time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Reading {
    /// Name of the crop the reading belongs to.
    pub crop_name: String,
    /// Air temperature in °C.
    pub temperature: f32,
    /// Relative humidity in percent (0-100 nominal).
    pub humidity: f32,
    /// Sunlight in lux.
    pub sunlight: f32,
    /// Atmospheric pressure in hPa.
    pub pressure: f32,
}

impl Reading {
    /// Create a new reading.
    pub fn new(
        crop_name: impl Into<String>,
        temperature: f32,
        humidity: f32,
        sunlight: f32,
        pressure: f32,
    ) -> Self {
        Self {
            crop_name: crop_name.into(),
            temperature,
            humidity,
            sunlight,
            pressure,
        }
    }

    /// Get the value of a charted metric.
    #[must_use]
    pub fn value(&self, metric: Metric) -> f32 {
        match metric {
            Metric::Humidity => self.humidity,
            Metric::Temperature => self.temperature,
            Metric::Sunlight => self.sunlight,
        }
    }
}

/// How urgent a suggestion is.
///
/// Ordered by urgency: `Optimal < Action < Warning`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Severity {
    /// Nothing to do.
    Optimal,
    /// A routine care action is recommended.
    Action,
    /// Conditions are harmful to the crop.
    Warning,
}

/// Care suggestion derived from a reading.
///
/// The `Display` output (and the serde representation) is the fixed
/// suggestion text shown to the user.
///
/// ```
/// use cropsense_types::Suggestion;
///
/// assert_eq!(Suggestion::TooCold.to_string(), "too cold");
/// assert_eq!("too cold".parse::<Suggestion>(), Ok(Suggestion::TooCold));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Suggestion {
    /// Humidity is below the dry threshold.
    #[cfg_attr(feature = "serde", serde(rename = "needs more water"))]
    NeedsWater,
    /// Humidity is above the wet threshold.
    #[cfg_attr(feature = "serde", serde(rename = "soil too wet, reduce watering"))]
    TooWet,
    /// Temperature is above the hot threshold.
    #[cfg_attr(feature = "serde", serde(rename = "too hot, provide shade"))]
    TooHot,
    /// Temperature is below the cold threshold.
    #[cfg_attr(feature = "serde", serde(rename = "too cold"))]
    TooCold,
    /// Sunlight is below the dim threshold.
    #[cfg_attr(feature = "serde", serde(rename = "increase sun exposure"))]
    NeedsSun,
    /// No threshold was crossed.
    #[cfg_attr(feature = "serde", serde(rename = "conditions optimal"))]
    Optimal,
}

impl Suggestion {
    /// All suggestions in classifier priority order.
    pub const ALL: [Suggestion; 6] = [
        Suggestion::NeedsWater,
        Suggestion::TooWet,
        Suggestion::TooHot,
        Suggestion::TooCold,
        Suggestion::NeedsSun,
        Suggestion::Optimal,
    ];

    /// The fixed suggestion text.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Suggestion::NeedsWater => "needs more water",
            Suggestion::TooWet => "soil too wet, reduce watering",
            Suggestion::TooHot => "too hot, provide shade",
            Suggestion::TooCold => "too cold",
            Suggestion::NeedsSun => "increase sun exposure",
            Suggestion::Optimal => "conditions optimal",
        }
    }

    /// How urgent this suggestion is.
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Suggestion::Optimal => Severity::Optimal,
            Suggestion::NeedsWater | Suggestion::NeedsSun => Severity::Action,
            Suggestion::TooWet | Suggestion::TooHot | Suggestion::TooCold => Severity::Warning,
        }
    }

    /// Short hint for what to do next.
    #[must_use]
    pub fn action(&self) -> &'static str {
        match self {
            Suggestion::NeedsWater => "Water the bed",
            Suggestion::TooWet => "Pause irrigation and check drainage",
            Suggestion::TooHot => "Add shade cloth or ventilate",
            Suggestion::TooCold => "Cover or move to a warmer spot",
            Suggestion::NeedsSun => "Move to a brighter spot",
            Suggestion::Optimal => "No action needed",
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Suggestion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Suggestion::ALL
            .into_iter()
            .find(|suggestion| suggestion.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseError::UnknownSuggestion(s.to_string()))
    }
}

/// A reading together with the suggestion derived from it.
///
/// This is the payload delivered to the registered observer on every update.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snapshot {
    /// Name of the crop the reading belongs to.
    pub crop_name: String,
    /// Air temperature in °C.
    pub temperature: f32,
    /// Relative humidity in percent.
    pub humidity: f32,
    /// Sunlight in lux.
    pub sunlight: f32,
    /// Atmospheric pressure in hPa.
    pub pressure: f32,
    /// Suggestion for the reading.
    pub suggestion: Suggestion,
}

impl Snapshot {
    /// Combine a reading with its suggestion.
    pub fn new(reading: Reading, suggestion: Suggestion) -> Self {
        let Reading {
            crop_name,
            temperature,
            humidity,
            sunlight,
            pressure,
        } = reading;
        Self {
            crop_name,
            temperature,
            humidity,
            sunlight,
            pressure,
            suggestion,
        }
    }

    /// The reading part of the snapshot.
    #[must_use]
    pub fn reading(&self) -> Reading {
        Reading::new(
            self.crop_name.clone(),
            self.temperature,
            self.humidity,
            self.sunlight,
            self.pressure,
        )
    }

    /// Get the value of a charted metric.
    #[must_use]
    pub fn value(&self, metric: Metric) -> f32 {
        match metric {
            Metric::Humidity => self.humidity,
            Metric::Temperature => self.temperature,
            Metric::Sunlight => self.sunlight,
        }
    }
}

/// A metric that is charted over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Metric {
    /// Relative humidity.
    Humidity,
    /// Air temperature.
    Temperature,
    /// Sunlight.
    Sunlight,
}

impl Metric {
    /// All charted metrics in display order.
    pub const ALL: [Metric; 3] = [Metric::Humidity, Metric::Temperature, Metric::Sunlight];

    /// Chart label for the metric.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Humidity => "Humidity %",
            Metric::Temperature => "Temperature °C",
            Metric::Sunlight => "Sunlight Lx",
        }
    }

    /// Unit suffix for the metric.
    #[must_use]
    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Humidity => "%",
            Metric::Temperature => "°C",
            Metric::Sunlight => "Lx",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Humidity => write!(f, "humidity"),
            Metric::Temperature => write!(f, "temperature"),
            Metric::Sunlight => write!(f, "sunlight"),
        }
    }
}

impl FromStr for Metric {
    type Err = ParseError;

    /// Parse a metric name (case-insensitive). Common abbreviations are accepted.
    ///
    /// ```
    /// use cropsense_types::Metric;
    ///
    /// assert_eq!("Humidity".parse::<Metric>(), Ok(Metric::Humidity));
    /// assert_eq!("temp".parse::<Metric>(), Ok(Metric::Temperature));
    /// assert!("co2".parse::<Metric>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "humidity" | "hum" | "rh" => Ok(Metric::Humidity),
            "temperature" | "temp" => Ok(Metric::Temperature),
            "sunlight" | "sun" | "light" | "lux" => Ok(Metric::Sunlight),
            _ => Err(ParseError::UnknownMetric(s.to_string())),
        }
    }
}
