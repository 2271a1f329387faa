//! Command implementations for the CLI.

mod classify;
mod config;
mod crops;
mod watch;

pub use classify::{ClassifyArgs, cmd_classify};
pub use config::cmd_config;
pub use crops::cmd_crops;
pub use watch::{WatchArgs, cmd_watch};
