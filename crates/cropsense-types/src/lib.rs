//! Platform-agnostic types for simulated crop sensor readings.
//!
//! This crate provides the data shared by the core library (cropsense-core)
//! and the command-line and terminal front ends.
//!
//! # Example
//!
//! ```
//! use cropsense_types::{Reading, Snapshot, Suggestion};
//!
//! let reading = Reading::new("Tomato", 25.0, 50.0, 500.0, 1010.0);
//! let snapshot = Snapshot::new(reading, Suggestion::Optimal);
//! assert_eq!(snapshot.suggestion.to_string(), "conditions optimal");
//! ```

pub mod error;
pub mod types;

pub use error::{ParseError, ParseResult};
pub use types::{Metric, Reading, Severity, Snapshot, Suggestion, UNKNOWN_CROP};
