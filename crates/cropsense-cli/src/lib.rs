//! Command-line interface for simulated crop sensors.
//!
//! This crate provides the `cropsense` binary and the terminal dashboard used
//! by the `cropsense-tui` crate.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `watch` | Stream simulated readings and suggestions |
//! | `classify` | Print the suggestion for one set of values |
//! | `crops` | List selectable crops |
//! | `config` | Manage CLI configuration |
//! | `dashboard` | Interactive terminal dashboard (`tui` feature) |
//! | `completions` | Generate shell completions |
//!
//! # Output Formats
//!
//! - **Text** (default): Human-readable colored output
//! - **JSON**: Machine-readable JSON format
//! - **CSV**: Comma-separated values for spreadsheets and data analysis
//!
//! # Configuration
//!
//! The CLI stores configuration in `~/.config/cropsense/config.toml` (or
//! platform equivalent):
//!
//! - `crops`: Selectable crop names
//! - `default_crop`: Crop selected on startup
//! - `interval_secs`: Seconds between simulated readings
//! - `format`: Default output format
//! - `no_color`: Disable colored output
//! - `[thresholds]`: Advisor thresholds
//!
//! # Environment Variables
//!
//! - `CROPSENSE_CROP`: Crop for `watch` (overridden by `--crop`)
//! - `NO_COLOR`: Disable colored output when set
//! - `RUST_LOG`: Log filter when neither `--verbose` nor `--quiet` is given
//!
//! # Examples
//!
//! ```bash
//! cropsense watch --crop Tomato --count 10
//! cropsense classify --temperature 40 --humidity 85 --sunlight 50
//! cropsense watch --format csv --output readings.csv
//! ```

pub mod config;
pub mod format;
pub mod util;

// Re-export core dependencies for convenience
pub use cropsense_core;
pub use cropsense_types;

// TUI module - publicly exposed for cropsense-tui crate to use
#[cfg(feature = "tui")]
pub mod tui;
