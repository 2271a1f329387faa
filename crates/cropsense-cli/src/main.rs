use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use cropsense_cli::config::Config;
use cropsense_cli::format::FormatOptions;

mod cli;
mod commands;

use cli::{Cli, Commands, OutputFormat};
use commands::{ClassifyArgs, WatchArgs, cmd_classify, cmd_config, cmd_crops, cmd_watch};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle completions command early (before tracing init)
    if let Commands::Completions { shell } = cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "cropsense", &mut io::stdout());
        return Ok(());
    }

    init_tracing(&cli);

    let config = Config::load();
    let no_color = cli.no_color || config.no_color;
    let opts = FormatOptions::new(no_color).with_compact(cli.compact);
    let output = cli.output.as_ref();

    match cli.command {
        Commands::Watch {
            crop,
            interval,
            count,
            seed,
            format,
            no_header,
        } => {
            let crop = crop.unwrap_or_else(|| config.initial_crop());
            let format = OutputFormat::resolve(format, cli.json, config.format.as_deref());
            let opts = opts.with_no_header(no_header);
            cmd_watch(WatchArgs {
                crop,
                interval: interval.unwrap_or(config.interval_secs),
                count,
                seed,
                advisor: config.advisor(),
                format,
                output,
                quiet: cli.quiet,
                opts: &opts,
            })
            .await?;
        }
        Commands::Classify {
            temperature,
            humidity,
            sunlight,
            format,
            no_header,
        } => {
            let format = OutputFormat::resolve(format, cli.json, config.format.as_deref());
            let opts = opts.with_no_header(no_header);
            cmd_classify(ClassifyArgs {
                temperature,
                humidity,
                sunlight,
                advisor: &config.advisor(),
                format,
                output,
                opts: &opts,
            })?;
        }
        Commands::Crops { format } => {
            let format = OutputFormat::resolve(format, cli.json, config.format.as_deref());
            cmd_crops(&config, format, output, &opts)?;
        }
        Commands::Config { action } => {
            cmd_config(action, cli.quiet)?;
        }
        #[cfg(feature = "tui")]
        Commands::Dashboard => {
            cropsense_cli::tui::run(config).await?;
        }
        Commands::Completions { .. } => {
            // Already handled above
            unreachable!()
        }
    }

    Ok(())
}

/// Initialize tracing.
///
/// The dashboard owns the terminal, so it only logs warnings to stderr.
fn init_tracing(cli: &Cli) {
    #[cfg(feature = "tui")]
    let dashboard = matches!(cli.command, Commands::Dashboard);
    #[cfg(not(feature = "tui"))]
    let dashboard = false;

    let filter = if cli.quiet || dashboard {
        EnvFilter::new("warn")
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
