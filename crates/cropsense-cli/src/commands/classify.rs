//! Classify command implementation.

use std::path::PathBuf;

use anyhow::Result;
use cropsense_cli::format::{
    Classification, FormatOptions, format_classification_csv, format_classification_text,
};
use cropsense_cli::util::write_output;
use cropsense_core::Advisor;

use crate::cli::OutputFormat;

/// Arguments for the classify command.
pub struct ClassifyArgs<'a> {
    pub temperature: f32,
    pub humidity: f32,
    pub sunlight: f32,
    pub advisor: &'a Advisor,
    pub format: OutputFormat,
    pub output: Option<&'a PathBuf>,
    pub opts: &'a FormatOptions,
}

pub fn cmd_classify(args: ClassifyArgs<'_>) -> Result<()> {
    let ClassifyArgs {
        temperature,
        humidity,
        sunlight,
        advisor,
        format,
        output,
        opts,
    } = args;

    let suggestion = advisor.evaluate(temperature, humidity, sunlight);
    tracing::debug!(temperature, humidity, sunlight, %suggestion, "Classified");

    let classification = Classification::new(temperature, humidity, sunlight, suggestion);
    let content = match format {
        OutputFormat::Json => opts.as_json(&classification)?,
        OutputFormat::Csv => format_classification_csv(&classification, opts),
        OutputFormat::Text => format_classification_text(&classification, opts),
    };
    write_output(output, &content)
}
