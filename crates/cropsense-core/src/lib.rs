//! Core library for simulated crop monitoring.
//!
//! Data flows one way: a [`Simulator`] generates readings and pushes them into
//! a [`ReadingStore`], which derives a [`Suggestion`] with its [`Advisor`] and
//! hands the resulting [`Snapshot`] to a single observer. Front ends keep a
//! [`MetricHistory`] of bounded [`ChartSeries`] for plotting.
//!
//! # Quick Start
//!
//! ```no_run
//! use cropsense_core::{CropSelection, MetricHistory, ReadingStore, Simulator, SimulatorOptions};
//! use tokio::sync::mpsc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (tx, mut rx) = mpsc::unbounded_channel();
//!
//!     let mut store = ReadingStore::new();
//!     store.set_observer(move |snapshot| {
//!         let _ = tx.send(snapshot.clone());
//!     });
//!
//!     let handle = Simulator::start(
//!         store.shared(),
//!         CropSelection::new("Tomato"),
//!         SimulatorOptions::default(),
//!     )?;
//!
//!     let mut history = MetricHistory::default();
//!     for _ in 0..3 {
//!         if let Some(snapshot) = rx.recv().await {
//!             history.record(&snapshot);
//!             println!("{}: {}", snapshot.crop_name, snapshot.suggestion);
//!         }
//!     }
//!
//!     handle.stop().await;
//!     Ok(())
//! }
//! ```

pub mod advisor;
pub mod error;
pub mod series;
pub mod simulator;
pub mod store;

pub use advisor::{Advisor, ThresholdConfig};
pub use error::{Error, Result};
pub use series::{ChartSeries, DEFAULT_CAPACITY, MetricHistory, Point};
pub use simulator::{
    CropSelection, ReadingGenerator, Simulator, SimulatorHandle, SimulatorOptions,
    SimulatorOptionsBuilder, ValueRange,
};
pub use store::{Observer, ReadingStore, SharedStore};

// Re-export from cropsense-types
pub use cropsense_types::{
    Metric, ParseError, Reading, Severity, Snapshot, Suggestion, UNKNOWN_CROP,
};
