//! Terminal dashboard for simulated crop sensors.
//!
//! This crate provides a standalone binary wrapper around cropsense-cli's
//! dashboard. The implementation lives in `cropsense-cli` with the `tui`
//! feature enabled.
//!
//! For the dashboard implementation, see [`cropsense_cli::tui`].

pub use cropsense_cli::config;
pub use cropsense_cli::tui;
