//! Interactive terminal dashboard.
//!
//! The dashboard shares one [`ReadingStore`] with a running simulator. The
//! store's observer forwards each snapshot over a channel, and the event loop
//! drains that channel into [`App`] between frames. Pausing stops the
//! simulator task; resuming starts a fresh one against the same store.

pub mod app;
pub mod ui;

pub use app::{Action, App};

use std::io::{self, stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tracing::info;

use cropsense_core::{
    CropSelection, ReadingStore, SharedStore, Simulator, SimulatorHandle, SimulatorOptions,
    Snapshot,
};

use crate::config::Config;

/// Set up the terminal for TUI rendering.
///
/// Enables raw mode and switches to the alternate screen buffer.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its previous state.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Simulator wiring the event loop needs to pause and resume.
struct Feed {
    store: SharedStore,
    crop: CropSelection,
    options: SimulatorOptions,
    handle: Option<SimulatorHandle>,
}

impl Feed {
    fn start(&mut self) -> Result<()> {
        let handle = Simulator::start(
            self.store.clone(),
            self.crop.clone(),
            self.options.clone(),
        )
        .context("Failed to start simulator")?;
        self.handle = Some(handle);
        Ok(())
    }

    /// Stop the simulator if running. Returns true if it was running.
    async fn stop(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                handle.stop().await;
                true
            }
            None => false,
        }
    }

    /// Toggle the simulator. Returns the new paused state.
    async fn toggle(&mut self) -> Result<bool> {
        if self.stop().await {
            Ok(true)
        } else {
            self.start()?;
            Ok(false)
        }
    }
}

/// Run the dashboard until the user quits.
pub async fn run(config: Config) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Snapshot>();

    let mut store = ReadingStore::with_advisor(config.advisor());
    store.set_observer(move |snapshot| {
        let _ = tx.send(snapshot.clone());
    });

    let crop = CropSelection::default();
    let mut app = App::new(config.crop_choices(), &config.initial_crop(), crop.clone());

    let mut feed = Feed {
        store: store.shared(),
        crop,
        options: config.simulator_options(),
        handle: None,
    };
    feed.start()?;
    info!(crop = %app.selected_crop(), "Dashboard started");

    let mut terminal = setup_terminal()?;
    let result = run_event_loop(&mut terminal, &mut app, &mut feed, &mut rx).await;

    feed.stop().await;
    restore_terminal()?;

    result
}

/// Main event loop for the dashboard.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    feed: &mut Feed,
    rx: &mut mpsc::UnboundedReceiver<Snapshot>,
) -> Result<()> {
    while !app.should_quit() {
        while let Ok(snapshot) = rx.try_recv() {
            app.on_snapshot(snapshot);
        }
        app.clean_expired_messages();

        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(Action::TogglePause) = app.handle_key(key.code)
        {
            let paused = feed.toggle().await?;
            app.set_paused(paused);
        }

        // Let the simulator task run between frames
        tokio::task::yield_now().await;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_feed_stop_when_idle() {
        let mut feed = Feed {
            store: ReadingStore::new().shared(),
            crop: CropSelection::default(),
            options: SimulatorOptions::default(),
            handle: None,
        };
        assert!(!feed.stop().await);

        feed.start().unwrap();
        tokio::task::yield_now().await;
        assert!(feed.stop().await);
        assert!(feed.store.lock().unwrap().current().is_some());
    }

    #[tokio::test]
    async fn test_feed_rejects_invalid_interval() {
        let mut feed = Feed {
            store: ReadingStore::new().shared(),
            crop: CropSelection::default(),
            options: SimulatorOptions::with_interval(Duration::ZERO),
            handle: None,
        };
        let err = feed.toggle().await.unwrap_err();
        assert!(format!("{err:#}").contains("interval"));
        assert!(feed.handle.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_feed_toggle_pauses_and_resumes() {
        let (tx, mut rx) = mpsc::unbounded_channel::<Snapshot>();
        let mut store = ReadingStore::new();
        store.set_observer(move |snapshot| {
            let _ = tx.send(snapshot.clone());
        });

        let mut feed = Feed {
            store: store.shared(),
            crop: CropSelection::new("Wheat"),
            options: SimulatorOptions::default(),
            handle: None,
        };
        feed.start().unwrap();
        let first = rx.recv().await.unwrap();
        assert_eq!(first.crop_name, "Wheat");

        assert!(feed.toggle().await.unwrap());
        assert!(feed.handle.is_none());
        tokio::time::sleep(Duration::from_secs(10)).await;
        while rx.try_recv().is_ok() {}
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());

        assert!(!feed.toggle().await.unwrap());
        assert!(rx.recv().await.is_some());
        feed.stop().await;
    }
}
