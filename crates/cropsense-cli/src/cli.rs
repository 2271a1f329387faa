//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    /// Resolve the format: an explicit flag wins over `--json`, which wins over config.
    pub fn resolve(flag: Option<OutputFormat>, json: bool, config: Option<&str>) -> Self {
        if let Some(format) = flag {
            return format;
        }
        if json {
            return OutputFormat::Json;
        }
        match config {
            Some("json") => OutputFormat::Json,
            Some("csv") => OutputFormat::Csv,
            _ => OutputFormat::Text,
        }
    }
}

#[derive(Parser)]
#[command(name = "cropsense")]
#[command(author, version, about = "Simulated crop sensor monitor with care suggestions", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output as JSON (shorthand for --format json)
    #[arg(long, global = true)]
    pub json: bool,

    /// Output compact JSON (no pretty-printing)
    #[arg(long, global = true)]
    pub compact: bool,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Stream simulated readings and suggestions
    Watch {
        /// Crop name stamped on readings (defaults to the configured crop)
        #[arg(short, long, env = "CROPSENSE_CROP")]
        crop: Option<String>,

        /// Seconds between readings (defaults to the configured interval)
        #[arg(short, long)]
        interval: Option<u64>,

        /// Number of readings to take before exiting (0 for unlimited)
        #[arg(short = 'n', long, default_value = "0")]
        count: u64,

        /// Seed for reproducible readings
        #[arg(long)]
        seed: Option<u64>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Omit the CSV header row and append to the --output file
        #[arg(long)]
        no_header: bool,
    },

    /// Print the suggestion for one set of values
    Classify {
        /// Temperature in °C
        #[arg(short, long, allow_negative_numbers = true)]
        temperature: f32,

        /// Relative humidity in %
        #[arg(short = 'H', long, allow_negative_numbers = true)]
        humidity: f32,

        /// Sunlight in lux
        #[arg(short, long, allow_negative_numbers = true)]
        sunlight: f32,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Omit header row in CSV output
        #[arg(long)]
        no_header: bool,
    },

    /// List selectable crops
    Crops {
        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Launch the interactive terminal dashboard
    #[cfg(feature = "tui")]
    Dashboard,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ConfigAction {
    /// Show the config file path
    Path,
    /// Show the current configuration
    Show,
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Set a value (crops, default_crop, interval_secs, format, no_color, thresholds.<field>)
    Set {
        /// Config key
        key: String,
        /// New value
        value: String,
    },
    /// Reset a value to its default
    Unset {
        /// Config key
        key: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_classify_with_negative_values() {
        let cli = Cli::try_parse_from([
            "cropsense", "classify", "-t", "-5", "-H", "50", "-s", "500",
        ])
        .unwrap();
        match cli.command {
            Commands::Classify {
                temperature,
                humidity,
                sunlight,
                ..
            } => {
                assert_eq!(temperature, -5.0);
                assert_eq!(humidity, 50.0);
                assert_eq!(sunlight, 500.0);
            }
            _ => panic!("expected classify"),
        }
    }

    #[test]
    fn test_parse_watch_defaults() {
        let cli = Cli::try_parse_from(["cropsense", "watch"]).unwrap();
        match cli.command {
            Commands::Watch {
                crop,
                interval,
                count,
                format,
                ..
            } => {
                assert!(crop.is_none() || std::env::var("CROPSENSE_CROP").is_ok());
                assert!(interval.is_none());
                assert_eq!(count, 0);
                assert!(format.is_none());
            }
            _ => panic!("expected watch"),
        }
    }

    #[test]
    fn test_no_color_flag() {
        let cli = Cli::try_parse_from(["cropsense", "crops", "--no-color"]).unwrap();
        assert!(cli.no_color);
    }

    #[test]
    fn test_output_format_resolution() {
        assert_eq!(
            OutputFormat::resolve(Some(OutputFormat::Csv), true, Some("json")),
            OutputFormat::Csv
        );
        assert_eq!(OutputFormat::resolve(None, true, Some("csv")), OutputFormat::Json);
        assert_eq!(OutputFormat::resolve(None, false, Some("csv")), OutputFormat::Csv);
        assert_eq!(OutputFormat::resolve(None, false, None), OutputFormat::Text);
    }
}
