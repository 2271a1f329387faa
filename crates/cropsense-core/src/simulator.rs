//! Periodic generator of synthetic sensor readings.
//!
//! The [`Simulator`] runs a background task that draws a random reading,
//! pushes it into a [`SharedStore`], then sleeps for the configured interval
//! before firing again. The first reading is produced immediately. Because the
//! task sleeps after each firing instead of following a fixed-rate clock, slow
//! observers push later firings back rather than causing bursts.
//!
//! The task stops through a cancellation token. [`SimulatorHandle::stop`]
//! cancels and then waits for the task to exit, so no reading is delivered
//! after it returns.
//!
//! # Example
//!
//! ```no_run
//! use cropsense_core::{CropSelection, ReadingStore, Simulator, SimulatorOptions};
//!
//! # async fn example() -> cropsense_core::Result<()> {
//! let store = ReadingStore::new().shared();
//! let crop = CropSelection::new("Tomato");
//!
//! let handle = Simulator::start(store.clone(), crop.clone(), SimulatorOptions::default())?;
//! crop.set("Wheat");
//! // ...
//! let fired = handle.stop().await;
//! println!("{fired} readings generated");
//! # Ok(())
//! # }
//! ```

use std::ops::Range;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use cropsense_types::{Reading, UNKNOWN_CROP};

use crate::error::{Error, Result};
use crate::store::SharedStore;

/// Half-open range `[min, max)` that simulated values are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    /// Inclusive lower bound.
    pub min: f32,
    /// Exclusive upper bound.
    pub max: f32,
}

impl ValueRange {
    /// Create a range.
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies in `[min, max)`.
    pub fn contains(&self, value: f32) -> bool {
        self.min <= value && value < self.max
    }

    fn validate(&self, name: &str) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(Error::InvalidConfig(format!("{name} range must be finite")));
        }
        if self.min >= self.max {
            return Err(Error::InvalidConfig(format!(
                "{name} range is empty ({} >= {})",
                self.min, self.max
            )));
        }
        if !(self.max - self.min).is_finite() {
            return Err(Error::InvalidConfig(format!("{name} range is too wide")));
        }
        Ok(())
    }

    fn as_range(&self) -> Range<f32> {
        self.min..self.max
    }
}

/// Options for the simulator.
///
/// Use the builder for convenient configuration:
///
/// ```
/// use std::time::Duration;
/// use cropsense_core::SimulatorOptions;
///
/// let options = SimulatorOptions::builder()
///     .interval(Duration::from_millis(500))
///     .max_firings(10)
///     .seed(7)
///     .build();
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SimulatorOptions {
    /// Delay between the end of one firing and the next.
    /// Default: 2 seconds.
    pub interval: Duration,
    /// Temperature range in °C. Default: `[20, 35)`.
    pub temperature: ValueRange,
    /// Humidity range in %. Default: `[20, 90)`.
    pub humidity: ValueRange,
    /// Sunlight range in lux. Default: `[200, 800)`.
    pub sunlight: ValueRange,
    /// Pressure range in hPa. Default: `[1000, 1020)`.
    pub pressure: ValueRange,
    /// Stop on its own after this many readings. Default: run until stopped.
    pub max_firings: Option<u64>,
    /// Seed for reproducible readings. Default: seeded from the OS.
    pub seed: Option<u64>,
}

impl Default for SimulatorOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(2),
            temperature: ValueRange::new(20.0, 35.0),
            humidity: ValueRange::new(20.0, 90.0),
            sunlight: ValueRange::new(200.0, 800.0),
            pressure: ValueRange::new(1000.0, 1020.0),
            max_firings: None,
            seed: None,
        }
    }
}

impl SimulatorOptions {
    /// Create a new builder for SimulatorOptions.
    pub fn builder() -> SimulatorOptionsBuilder {
        SimulatorOptionsBuilder::default()
    }

    /// Create options with a specific interval.
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            ..Default::default()
        }
    }

    /// Validate the options and return an error if invalid.
    ///
    /// Checks that:
    /// - `interval` is > 0
    /// - every range is finite and non-empty, and its width fits in an `f32`
    /// - `max_firings`, if set, is > 0
    pub fn validate(&self) -> Result<()> {
        if self.interval.is_zero() {
            return Err(Error::InvalidConfig("interval must be > 0".to_string()));
        }
        self.temperature.validate("temperature")?;
        self.humidity.validate("humidity")?;
        self.sunlight.validate("sunlight")?;
        self.pressure.validate("pressure")?;
        if self.max_firings == Some(0) {
            return Err(Error::InvalidConfig("max_firings must be > 0".to_string()));
        }
        Ok(())
    }
}

/// Builder for SimulatorOptions.
#[derive(Debug, Clone, Default)]
pub struct SimulatorOptionsBuilder {
    options: SimulatorOptions,
}

impl SimulatorOptionsBuilder {
    /// Set the interval between firings.
    #[must_use]
    pub fn interval(mut self, interval: Duration) -> Self {
        self.options.interval = interval;
        self
    }

    /// Set the temperature range.
    #[must_use]
    pub fn temperature(mut self, min: f32, max: f32) -> Self {
        self.options.temperature = ValueRange::new(min, max);
        self
    }

    /// Set the humidity range.
    #[must_use]
    pub fn humidity(mut self, min: f32, max: f32) -> Self {
        self.options.humidity = ValueRange::new(min, max);
        self
    }

    /// Set the sunlight range.
    #[must_use]
    pub fn sunlight(mut self, min: f32, max: f32) -> Self {
        self.options.sunlight = ValueRange::new(min, max);
        self
    }

    /// Set the pressure range.
    #[must_use]
    pub fn pressure(mut self, min: f32, max: f32) -> Self {
        self.options.pressure = ValueRange::new(min, max);
        self
    }

    /// Stop after this many readings.
    #[must_use]
    pub fn max_firings(mut self, max: u64) -> Self {
        self.options.max_firings = Some(max);
        self
    }

    /// Seed the random generator.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.options.seed = Some(seed);
        self
    }

    /// Build the SimulatorOptions.
    #[must_use]
    pub fn build(self) -> SimulatorOptions {
        self.options
    }
}

/// Draws independent uniform values for each field of a reading.
#[derive(Debug, Clone)]
pub struct ReadingGenerator {
    temperature: ValueRange,
    humidity: ValueRange,
    sunlight: ValueRange,
    pressure: ValueRange,
}

impl Default for ReadingGenerator {
    fn default() -> Self {
        Self::new(&SimulatorOptions::default())
    }
}

impl ReadingGenerator {
    /// Create a generator using the ranges in `options`.
    pub fn new(options: &SimulatorOptions) -> Self {
        Self {
            temperature: options.temperature,
            humidity: options.humidity,
            sunlight: options.sunlight,
            pressure: options.pressure,
        }
    }

    /// Draw one reading for `crop_name`.
    ///
    /// Ranges must be non-empty; [`SimulatorOptions::validate`] checks this.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, crop_name: &str) -> Reading {
        Reading::new(
            crop_name,
            rng.random_range(self.temperature.as_range()),
            rng.random_range(self.humidity.as_range()),
            rng.random_range(self.sunlight.as_range()),
            rng.random_range(self.pressure.as_range()),
        )
    }
}

/// Crop currently selected by the user, shared with the simulator.
///
/// Cloning yields another handle to the same selection.
#[derive(Debug, Clone, Default)]
pub struct CropSelection {
    inner: Arc<RwLock<String>>,
}

impl CropSelection {
    /// Create a selection with an initial crop.
    pub fn new(crop: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(crop.into())),
        }
    }

    /// Change the selected crop.
    pub fn set(&self, crop: impl Into<String>) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = crop.into();
    }

    /// The raw selection text, possibly empty.
    pub fn raw(&self) -> String {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The crop name to stamp on readings. An empty selection becomes
    /// `Unknown`; anything else is passed through as is.
    pub fn current(&self) -> String {
        let crop = self.raw();
        if crop.is_empty() {
            UNKNOWN_CROP.to_string()
        } else {
            crop
        }
    }
}

/// Starts simulator tasks.
#[derive(Debug)]
pub struct Simulator;

impl Simulator {
    /// Validate `options` and spawn the simulator task on the current runtime.
    ///
    /// The store's observer is called from the task, while the store lock is
    /// held. Observers must not lock the store themselves.
    pub fn start(
        store: SharedStore,
        crop: CropSelection,
        options: SimulatorOptions,
    ) -> Result<SimulatorHandle> {
        options.validate()?;

        let cancel_token = CancellationToken::new();
        let task_token = cancel_token.clone();
        let firings = Arc::new(AtomicU64::new(0));
        let task_firings = Arc::clone(&firings);
        let generator = ReadingGenerator::new(&options);
        let mut rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        info!(
            interval_ms = options.interval.as_millis() as u64,
            max_firings = ?options.max_firings,
            "Starting simulator"
        );

        let handle = tokio::spawn(async move {
            loop {
                if task_token.is_cancelled() {
                    break;
                }

                let reading = generator.generate(&mut rng, &crop.current());
                debug!(
                    crop = %reading.crop_name,
                    temperature = reading.temperature,
                    humidity = reading.humidity,
                    sunlight = reading.sunlight,
                    pressure = reading.pressure,
                    "Simulated reading"
                );
                store
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .update(reading);

                let fired = task_firings.fetch_add(1, Ordering::SeqCst) + 1;
                if options.max_firings.is_some_and(|max| fired >= max) {
                    debug!(fired, "Simulator reached max firings");
                    break;
                }

                tokio::select! {
                    biased;
                    _ = task_token.cancelled() => {
                        debug!("Simulator cancelled, stopping gracefully");
                        break;
                    }
                    _ = tokio::time::sleep(options.interval) => {}
                }
            }
        });

        Ok(SimulatorHandle {
            handle: Some(handle),
            cancel_token,
            firings,
        })
    }
}

/// Handle to a running simulator task.
///
/// Dropping the handle cancels the task.
#[derive(Debug)]
pub struct SimulatorHandle {
    handle: Option<JoinHandle<()>>,
    cancel_token: CancellationToken,
    firings: Arc<AtomicU64>,
}

impl SimulatorHandle {
    /// Cancel the task and wait for it to exit.
    ///
    /// Returns the number of readings generated. No reading is delivered to the
    /// store after this returns.
    pub async fn stop(mut self) -> u64 {
        self.cancel_token.cancel();
        self.join().await;
        let fired = self.firings();
        info!(fired, "Simulator stopped");
        fired
    }

    /// Wait for the task to finish on its own (after `max_firings`).
    ///
    /// Without a `max_firings` limit this waits until another holder of the
    /// [`cancellation_token`](Self::cancellation_token) cancels it.
    pub async fn wait(mut self) -> u64 {
        self.join().await;
        self.firings()
    }

    async fn join(&mut self) {
        if let Some(handle) = self.handle.take()
            && let Err(e) = handle.await
        {
            warn!("Simulator task ended abnormally: {}", e);
        }
    }

    /// Number of readings generated so far.
    pub fn firings(&self) -> u64 {
        self.firings.load(Ordering::SeqCst)
    }

    /// Get a token that cancels this simulator when triggered.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    /// Check if the task is still running.
    pub fn is_active(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Check if the simulator has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

impl Drop for SimulatorHandle {
    fn drop(&mut self) {
        self.cancel_token.cancel();
    }
}
