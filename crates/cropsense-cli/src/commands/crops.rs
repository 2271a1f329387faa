//! Crops command implementation.

use std::path::PathBuf;

use anyhow::Result;
use cropsense_cli::config::Config;
use cropsense_cli::format::{FormatOptions, csv_escape};
use cropsense_cli::util::write_output;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::OutputFormat;

#[derive(Debug, Serialize)]
struct CropList {
    crops: Vec<String>,
    default: String,
}

pub fn cmd_crops(
    config: &Config,
    format: OutputFormat,
    output: Option<&PathBuf>,
    opts: &FormatOptions,
) -> Result<()> {
    let list = CropList {
        crops: config.crop_choices(),
        default: config.initial_crop(),
    };

    let content = match format {
        OutputFormat::Json => opts.as_json(&list)?,
        OutputFormat::Csv => {
            let mut out = String::from("crop,default\n");
            for crop in &list.crops {
                out.push_str(&format!("{},{}\n", csv_escape(crop), *crop == list.default));
            }
            out
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for crop in &list.crops {
                if *crop == list.default {
                    let marker = if opts.no_color {
                        "* ".to_string()
                    } else {
                        "* ".green().to_string()
                    };
                    out.push_str(&format!("{marker}{crop} (default)\n"));
                } else {
                    out.push_str(&format!("  {crop}\n"));
                }
            }
            out
        }
    };
    write_output(output, &content)
}
