// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider mission timeline project*
//!
//! Generate one timeline document per mission per operational day from a CSV
//! or spreadsheet export of assignments
//!

use clap::{Parser, ValueEnum, builder::PossibleValue};
use mission_timeline_planner::{Config, ConfigError, run};
use mission_timeline_renderer::OutputFormat;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode,
};
use std::path::PathBuf;

#[macro_use]
extern crate log;
extern crate simplelog;

/// Entry point
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    // Setup logging
    let config_log = ConfigBuilder::new()
        .add_filter_allow_str("mission_timeline")
        .build();

    CombinedLogger::init(vec![TermLogger::new(
        args.log_level,
        config_log,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])?;

    // Flags win over the config file
    let config = match args.config() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Error: {error}");
            std::process::exit(1);
        }
    };

    match run(&config) {
        Ok(summary) if summary.is_success() => {
            debug!("Finished with {} document(s)", summary.written.len());
            Ok(())
        }
        Ok(summary) => {
            eprintln!(
                "Error: {} document(s) could not be generated",
                summary.failures
            );
            std::process::exit(1);
        }
        Err(error) => {
            eprintln!("Error: {error}");
            std::process::exit(1);
        }
    }
}

/// Mission timeline CLI args using [clap]
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Generate per-mission, per-day timeline documents from a CSV or XLSX of assignments",
    after_help = "A day runs from 08:00 to 07:59:59 the next morning"
)]
pub struct Cli {
    /// Path to a JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path to the CSV or XLSX input (overrides the config file)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Directory the documents are written to (overrides the config file)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(long, value_enum)]
    pub format: Option<Format>,

    /// Leave out rows in this category (overrides the config file)
    #[arg(long)]
    pub exclude_category: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,
}

impl Cli {
    /// Load the config file (if any) and apply the flags on top
    fn config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(input) = &self.input {
            config.input = Some(input.clone());
        }
        if let Some(output_dir) = &self.output_dir {
            config.output_dir = output_dir.clone();
        }
        if let Some(format) = self.format {
            config.format = format.into();
        }
        if let Some(category) = &self.exclude_category {
            config.exclude_category = Some(category.clone());
        }
        info!(
            "Reading {:?}, writing {} documents to {}",
            config.input,
            config.format,
            config.output_dir.display()
        );
        Ok(config)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Format {
    Svg,
    Pdf,
    Json,
}

impl ValueEnum for Format {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Svg, Self::Pdf, Self::Json]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::Svg => Some(PossibleValue::new("svg").help("One SVG file per document")),
            Self::Pdf => Some(PossibleValue::new("pdf").help("One PDF file per document")),
            Self::Json => Some(PossibleValue::new("json").help("The laid out document as JSON")),
        }
    }
}

impl From<Format> for OutputFormat {
    fn from(value: Format) -> Self {
        match value {
            Format::Svg => OutputFormat::Svg,
            Format::Pdf => OutputFormat::Pdf,
            Format::Json => OutputFormat::Json,
        }
    }
}
