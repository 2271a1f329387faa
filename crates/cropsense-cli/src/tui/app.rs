//! Dashboard state.
//!
//! [`App`] is the presentation sink: it receives every snapshot, keeps the
//! latest one for the gauges and suggestion panel, and appends each metric to
//! its bounded chart series. It also owns the crop selector.

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;

use cropsense_core::{CropSelection, MetricHistory, Snapshot};

/// How long status messages stay on screen.
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

/// Actions the event loop must carry out on the app's behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the simulator if running, start a new one otherwise.
    TogglePause,
}

/// Application state for the dashboard.
pub struct App {
    crops: Vec<String>,
    selected_crop: usize,
    crop: CropSelection,
    latest: Option<Snapshot>,
    history: MetricHistory,
    updates: u64,
    paused: bool,
    should_quit: bool,
    status_message: Option<(String, Instant)>,
}

impl App {
    /// Create the app with a crop list and the shared selection.
    ///
    /// The selection is set to `initial` (added to the list if missing).
    pub fn new(mut crops: Vec<String>, initial: &str, crop: CropSelection) -> Self {
        let selected_crop = match crops.iter().position(|c| c == initial) {
            Some(index) => index,
            None => {
                crops.insert(0, initial.to_string());
                0
            }
        };
        crop.set(initial);
        Self {
            crops,
            selected_crop,
            crop,
            latest: None,
            history: MetricHistory::default(),
            updates: 0,
            paused: false,
            should_quit: false,
            status_message: None,
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Option<Action> {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                None
            }
            KeyCode::Right | KeyCode::Char(']') | KeyCode::Char('l') => {
                self.select_crop_offset(1);
                None
            }
            KeyCode::Left | KeyCode::Char('[') | KeyCode::Char('h') => {
                self.select_crop_offset(-1);
                None
            }
            KeyCode::Char('c') => {
                self.history.clear();
                self.push_status("Charts cleared");
                None
            }
            KeyCode::Char('p') | KeyCode::Char(' ') => Some(Action::TogglePause),
            _ => None,
        }
    }

    fn select_crop_offset(&mut self, offset: isize) {
        if self.crops.is_empty() {
            return;
        }
        let len = self.crops.len() as isize;
        self.selected_crop = (self.selected_crop as isize + offset).rem_euclid(len) as usize;
        let name = self.crops[self.selected_crop].clone();
        self.crop.set(name.as_str());
        self.push_status(format!("Crop: {}", name));
    }

    /// Record a new snapshot.
    pub fn on_snapshot(&mut self, snapshot: Snapshot) {
        self.history.record(&snapshot);
        self.latest = Some(snapshot);
        self.updates += 1;
    }

    /// Update the paused flag after the event loop toggled the simulator.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
        self.push_status(if paused { "Paused" } else { "Resumed" });
    }

    /// Show a transient message in the footer.
    pub fn push_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    /// Drop the status message once it has expired.
    pub fn clean_expired_messages(&mut self) {
        if self
            .status_message
            .as_ref()
            .is_some_and(|(_, at)| at.elapsed() >= STATUS_MESSAGE_TTL)
        {
            self.status_message = None;
        }
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_ref().map(|(m, _)| m.as_str())
    }

    /// Check if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn crops(&self) -> &[String] {
        &self.crops
    }

    /// The crop shown in the selector.
    pub fn selected_crop(&self) -> &str {
        &self.crops[self.selected_crop]
    }

    pub fn latest(&self) -> Option<&Snapshot> {
        self.latest.as_ref()
    }

    pub fn history(&self) -> &MetricHistory {
        &self.history
    }

    pub fn updates(&self) -> u64 {
        self.updates
    }
}
