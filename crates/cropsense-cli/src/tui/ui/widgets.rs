//! Gauge scaling and value formatting for the dashboard.
//!
//! Gauges show a 0-100 fill. Humidity is already a percentage; temperature is
//! scaled against 50 °C and sunlight against 1000 lux. Values are truncated to
//! whole percent and clamped for display only; the readings themselves are
//! never modified.

/// Full-scale temperature for the gauge, in °C.
pub const TEMPERATURE_FULL_SCALE: f32 = 50.0;

/// Full-scale sunlight for the gauge, in lux.
pub const SUNLIGHT_FULL_SCALE: f32 = 1000.0;

/// Truncate to whole percent and clamp to 0..=100. NaN shows as empty.
#[must_use]
pub fn clamp_percent(value: f32) -> u16 {
    (value as i32).clamp(0, 100) as u16
}

/// Gauge fill for humidity.
#[must_use]
pub fn humidity_percent(humidity: f32) -> u16 {
    clamp_percent(humidity)
}

/// Gauge fill for temperature.
#[must_use]
pub fn temperature_percent(celsius: f32) -> u16 {
    clamp_percent(celsius / TEMPERATURE_FULL_SCALE * 100.0)
}

/// Gauge fill for sunlight.
#[must_use]
pub fn sunlight_percent(lux: f32) -> u16 {
    clamp_percent(lux / SUNLIGHT_FULL_SCALE * 100.0)
}

#[must_use]
pub fn format_humidity(humidity: f32) -> String {
    format!("{}%", humidity as i32)
}

#[must_use]
pub fn format_temperature(celsius: f32) -> String {
    format!("{:.1}°C", celsius)
}

#[must_use]
pub fn format_sunlight(lux: f32) -> String {
    format!("{:.0} Lx", lux)
}

#[must_use]
pub fn format_pressure(hpa: f32) -> String {
    format!("{:.1} hPa", hpa)
}

/// Y-axis bounds for a chart, padded so a flat line is still visible.
#[must_use]
pub fn chart_bounds(bounds: Option<(f32, f32)>) -> [f64; 2] {
    match bounds {
        Some((lo, hi)) => {
            let pad = ((hi - lo) * 0.1).max(1.0);
            [f64::from(lo - pad), f64::from(hi + pad)]
        }
        None => [0.0, 100.0],
    }
}
