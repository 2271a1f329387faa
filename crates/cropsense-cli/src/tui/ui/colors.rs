//! Color helper functions for the dashboard.
//!
//! # Suggestion Color Coding
//!
//! The suggestion label is colored by case-insensitive keyword matching on its
//! text, checked in this order:
//!
//! | Keyword                         | Color       |
//! |---------------------------------|-------------|
//! | `optimal`                       | Dark green  |
//! | `wet`, `hot`, `cold`, `high`, `low` | Red (warning) |
//! | `water`                         | Blue        |
//! | `sun`                           | Orange      |
//! | anything else                   | Dark gray   |

use ratatui::style::Color;

use cropsense_core::Metric;

const GREEN: Color = Color::Rgb(0x2E, 0x7D, 0x32);
const RED: Color = Color::Rgb(0xC6, 0x28, 0x28);
const BLUE: Color = Color::Rgb(0x15, 0x65, 0xC0);
const ORANGE: Color = Color::Rgb(0xEF, 0x6C, 0x00);

/// Color for a suggestion text.
#[must_use]
pub fn suggestion_color(suggestion: &str) -> Color {
    let lower = suggestion.to_lowercase();
    if lower.contains("optimal") {
        GREEN
    } else if ["wet", "hot", "cold", "high", "low"]
        .iter()
        .any(|keyword| lower.contains(keyword))
    {
        RED
    } else if lower.contains("water") {
        BLUE
    } else if lower.contains("sun") {
        ORANGE
    } else {
        Color::DarkGray
    }
}

/// Line color for a metric's chart and gauge.
#[must_use]
pub fn metric_color(metric: Metric) -> Color {
    match metric {
        Metric::Humidity => Color::Blue,
        Metric::Temperature => Color::Red,
        Metric::Sunlight => Color::Gray,
    }
}
