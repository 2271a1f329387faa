//! Threshold rules that turn a reading into a care suggestion.
//!
//! Rules are checked in a fixed priority order and the first match wins, so a
//! reading that is both too wet and too hot only reports the humidity problem.
//! All boundaries are exclusive.
//!
//! | Priority | Condition | Suggestion |
//! |----------|-----------|------------|
//! | 1 | humidity < 30 | needs more water |
//! | 2 | humidity > 80 | soil too wet, reduce watering |
//! | 3 | temperature > 35 | too hot, provide shade |
//! | 4 | temperature < 10 | too cold |
//! | 5 | sunlight < 100 | increase sun exposure |
//! | 6 | otherwise | conditions optimal |
//!
//! # Example
//!
//! ```
//! use cropsense_core::{Advisor, Suggestion};
//!
//! let advisor = Advisor::default();
//! assert_eq!(advisor.evaluate(40.0, 85.0, 50.0), Suggestion::TooWet);
//! assert_eq!(advisor.evaluate(25.0, 50.0, 500.0), Suggestion::Optimal);
//! ```

use serde::{Deserialize, Serialize};

use cropsense_types::{Reading, Suggestion};

use crate::error::{Error, Result};

/// Thresholds used by the [`Advisor`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Humidity below this (in %) needs watering.
    pub humidity_min: f32,
    /// Humidity above this (in %) is too wet.
    pub humidity_max: f32,
    /// Temperature above this (in °C) is too hot.
    pub temperature_max: f32,
    /// Temperature below this (in °C) is too cold.
    pub temperature_min: f32,
    /// Sunlight below this (in lux) is too dim.
    pub sunlight_min: f32,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            humidity_min: 30.0,
            humidity_max: 80.0,
            temperature_max: 35.0,
            temperature_min: 10.0,
            sunlight_min: 100.0,
        }
    }
}

impl ThresholdConfig {
    /// Check that every bound is finite and each min/max pair is ordered.
    pub fn validate(&self) -> Result<()> {
        let bounds = [
            ("humidity_min", self.humidity_min),
            ("humidity_max", self.humidity_max),
            ("temperature_min", self.temperature_min),
            ("temperature_max", self.temperature_max),
            ("sunlight_min", self.sunlight_min),
        ];
        if let Some((name, _)) = bounds.iter().find(|(_, value)| !value.is_finite()) {
            return Err(Error::InvalidConfig(format!("{name} must be finite")));
        }
        if self.humidity_min > self.humidity_max {
            return Err(Error::InvalidConfig(
                "humidity_min must not exceed humidity_max".to_string(),
            ));
        }
        if self.temperature_min > self.temperature_max {
            return Err(Error::InvalidConfig(
                "temperature_min must not exceed temperature_max".to_string(),
            ));
        }
        Ok(())
    }
}

/// Evaluates readings against a [`ThresholdConfig`].
#[derive(Debug, Clone, Default)]
pub struct Advisor {
    config: ThresholdConfig,
}

impl Advisor {
    /// Create an advisor with the given thresholds.
    pub fn new(config: ThresholdConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ThresholdConfig {
        &self.config
    }

    /// Pick the suggestion for a (temperature, humidity, sunlight) triple.
    ///
    /// NaN never satisfies a comparison, so a NaN field simply skips its rules.
    pub fn evaluate(&self, temperature: f32, humidity: f32, sunlight: f32) -> Suggestion {
        let c = &self.config;
        if humidity < c.humidity_min {
            Suggestion::NeedsWater
        } else if humidity > c.humidity_max {
            Suggestion::TooWet
        } else if temperature > c.temperature_max {
            Suggestion::TooHot
        } else if temperature < c.temperature_min {
            Suggestion::TooCold
        } else if sunlight < c.sunlight_min {
            Suggestion::NeedsSun
        } else {
            Suggestion::Optimal
        }
    }

    /// Pick the suggestion for a reading.
    pub fn evaluate_reading(&self, reading: &Reading) -> Suggestion {
        self.evaluate(reading.temperature, reading.humidity, reading.sunlight)
    }
}
