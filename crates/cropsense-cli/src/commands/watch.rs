//! Watch command implementation.
//!
//! Runs the simulator against a fresh store whose observer forwards every
//! snapshot over a channel, and prints each one as it arrives. Stops on
//! Ctrl+C or after `count` readings.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use cropsense_cli::format::{
    FormatOptions, format_watch_csv_header, format_watch_csv_line, format_watch_json,
    format_watch_line, now,
};
use cropsense_cli::util::OutputWriter;
use cropsense_core::{Advisor, CropSelection, ReadingStore, Simulator, SimulatorOptions, Snapshot};
use owo_colors::OwoColorize;
use tokio::sync::mpsc;

use crate::cli::OutputFormat;

/// Arguments for the watch command.
pub struct WatchArgs<'a> {
    pub crop: String,
    pub interval: u64,
    pub count: u64,
    pub seed: Option<u64>,
    pub advisor: Advisor,
    pub format: OutputFormat,
    pub output: Option<&'a PathBuf>,
    pub quiet: bool,
    pub opts: &'a FormatOptions,
}

pub async fn cmd_watch(args: WatchArgs<'_>) -> Result<()> {
    let WatchArgs {
        crop,
        interval,
        count,
        seed,
        advisor,
        format,
        output,
        quiet,
        opts,
    } = args;

    let mut options = SimulatorOptions::with_interval(Duration::from_secs(interval));
    if count > 0 {
        options.max_firings = Some(count);
    }
    options.seed = seed;

    let (tx, mut rx) = mpsc::unbounded_channel::<Snapshot>();
    let mut store = ReadingStore::with_advisor(advisor);
    store.set_observer(move |snapshot| {
        // Receiver gone means we are shutting down
        let _ = tx.send(snapshot.clone());
    });

    let mut writer = OutputWriter::open(output, opts.no_header)?;
    let crop = CropSelection::new(crop);

    if !quiet {
        let header = if opts.no_color {
            format!("Watching: {}", crop.current())
        } else {
            format!("Watching: {}", crop.current().green())
        };
        eprintln!("{}", header);
        if count > 0 {
            eprintln!(
                "Interval: {}s | Count: {} | Press Ctrl+C to stop",
                interval, count
            );
        } else {
            eprintln!("Interval: {}s | Press Ctrl+C to stop", interval);
        }
        eprintln!("{}", "-".repeat(50));
    }

    if format == OutputFormat::Csv && !opts.no_header {
        writer.write(&format_watch_csv_header())?;
    }

    let handle = Simulator::start(store.shared(), crop, options)
        .context("Failed to start simulator")?;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                if !quiet {
                    eprintln!("\nShutting down...");
                }
                break;
            }
            received = rx.recv() => {
                // Channel closes once the simulator finishes its count
                let Some(snapshot) = received else { break };
                let timestamp = now();
                let content = match format {
                    OutputFormat::Json => format_watch_json(&snapshot, timestamp, opts)?,
                    OutputFormat::Csv => format_watch_csv_line(&snapshot, timestamp),
                    OutputFormat::Text => format_watch_line(&snapshot, timestamp, opts),
                };
                writer.write(&content)?;
            }
        }
    }

    let fired = handle.stop().await;
    if !quiet && count > 0 {
        eprintln!("Completed {} readings.", fired);
    }
    Ok(())
}
