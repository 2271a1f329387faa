use std::io;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use cropsense_tui::{config::Config, tui};

#[tokio::main]
async fn main() -> Result<()> {
    // The dashboard owns stdout, so only warnings go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("warn"))
        .with_writer(io::stderr)
        .init();

    tui::run(Config::load()).await
}
