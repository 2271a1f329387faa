//! Holder for the latest reading and its suggestion.
//!
//! A [`ReadingStore`] is created by whatever composes the application and
//! passed to the parts that need it. It keeps exactly one current reading and
//! at most one observer. Every [`update`](ReadingStore::update) replaces the
//! reading, recomputes the suggestion and, if an observer is set, calls it
//! synchronously before returning.
//!
//! # Example
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use cropsense_core::{Reading, ReadingStore, Suggestion};
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//!
//! let mut store = ReadingStore::new();
//! store.set_observer(move |snapshot| sink.lock().unwrap().push(snapshot.suggestion));
//! store.update(Reading::new("Tomato", 5.0, 50.0, 500.0, 1010.0));
//!
//! assert_eq!(*seen.lock().unwrap(), vec![Suggestion::TooCold]);
//! ```

use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::trace;

use cropsense_types::{Reading, Snapshot, Suggestion};

use crate::advisor::Advisor;

/// Callback invoked with every new snapshot.
pub type Observer = Box<dyn FnMut(&Snapshot) + Send>;

/// Type alias for a store shared between the simulator task and the UI.
pub type SharedStore = Arc<Mutex<ReadingStore>>;

/// Latest reading, its suggestion and the single registered observer.
#[derive(Default)]
pub struct ReadingStore {
    advisor: Advisor,
    current: Option<(Reading, Suggestion)>,
    observer: Option<Observer>,
}

impl fmt::Debug for ReadingStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadingStore")
            .field("advisor", &self.advisor)
            .field("current", &self.current)
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}

impl ReadingStore {
    /// Create an empty store using the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store using the given advisor.
    pub fn with_advisor(advisor: Advisor) -> Self {
        Self {
            advisor,
            current: None,
            observer: None,
        }
    }

    /// Wrap the store for sharing across tasks.
    pub fn shared(self) -> SharedStore {
        Arc::new(Mutex::new(self))
    }

    /// Replace the current reading and notify the observer, if any.
    ///
    /// The reading is stored unchanged; nothing is validated or clamped.
    pub fn update(&mut self, reading: Reading) -> Suggestion {
        let suggestion = self.advisor.evaluate_reading(&reading);
        trace!(crop = %reading.crop_name, %suggestion, "Store updated");

        if let Some(observer) = self.observer.as_mut() {
            let snapshot = Snapshot::new(reading.clone(), suggestion);
            observer(&snapshot);
        }

        self.current = Some((reading, suggestion));
        suggestion
    }

    /// Set the observer, dropping any previous one.
    pub fn set_observer<F>(&mut self, observer: F)
    where
        F: FnMut(&Snapshot) + Send + 'static,
    {
        self.observer = Some(Box::new(observer));
    }

    /// Remove the observer. Later updates notify nobody.
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Whether an observer is registered.
    pub fn has_observer(&self) -> bool {
        self.observer.is_some()
    }

    /// The current reading, if any update has happened yet.
    pub fn current(&self) -> Option<&Reading> {
        self.current.as_ref().map(|(reading, _)| reading)
    }

    /// The suggestion for the current reading.
    pub fn suggestion(&self) -> Option<Suggestion> {
        self.current.as_ref().map(|(_, suggestion)| *suggestion)
    }

    /// The current reading combined with its suggestion.
    pub fn snapshot(&self) -> Option<Snapshot> {
        self.current
            .as_ref()
            .map(|(reading, suggestion)| Snapshot::new(reading.clone(), *suggestion))
    }

    /// The advisor used to derive suggestions.
    pub fn advisor(&self) -> &Advisor {
        &self.advisor
    }
}
