// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Mission timeline config
//!

use log::info;
use mission_timeline_renderer::{
    DEFAULT_PALETTE, LayoutParams, OutputFormat, Palette, PaletteError,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_OUTPUT_DIR: &str = "planning";

/// Errors that can arise when loading or checking the config
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unable to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No input file given")]
    NoInput,

    #[error("Invalid layout: {0}")]
    InvalidLayout(&'static str),

    #[error("Invalid palette: {0}")]
    Palette(#[from] PaletteError),
}

/// The header names of the input columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub mission: String,
    pub start: String,
    pub end: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub category: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            mission: String::from("Mission"),
            start: String::from("Date de début"),
            end: String::from("Date de fin"),
            email: String::from("E-mail"),
            first_name: String::from("Prénom"),
            last_name: String::from("Nom"),
            phone: String::from("Numéro de téléphone"),
            category: String::from("Catégorie"),
        }
    }
}

/// The config for a run.  Every field has a default, so a config file only
/// needs the fields it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The CSV file to read assignments from
    pub input: Option<PathBuf>,

    /// Documents are written to `<output_dir>/<mission slug>/<day>.<ext>`
    pub output_dir: PathBuf,

    pub format: OutputFormat,

    /// Rows whose category is exactly this value are left out (no filtering
    /// when unset)
    pub exclude_category: Option<String>,

    pub columns: ColumnNames,

    /// chrono formats tried in order when parsing start/end cells
    pub timestamp_formats: Vec<String>,

    pub layout: LayoutParams,

    /// Bar colours as hex strings, used in order
    pub palette: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            format: OutputFormat::default(),
            exclude_category: None,
            columns: ColumnNames::default(),
            timestamp_formats: default_timestamp_formats(),
            layout: LayoutParams::default(),
            palette: DEFAULT_PALETTE.iter().map(|hex| hex.to_string()).collect(),
        }
    }
}

impl Config {
    /// Load a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        info!("Loading config from {}", path.display());
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = serde_json::from_str(&data)?;
        info!("Config loaded = {config:?}");
        Ok(config)
    }

    /// The input file, which must be set by the time a run starts
    pub fn input(&self) -> Result<&Path, ConfigError> {
        self.input.as_deref().ok_or(ConfigError::NoInput)
    }

    /// Build the bar palette
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Ok(Palette::from_hex(self.palette.as_slice())?)
    }

    /// Check everything a run depends on before any work is done
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.input()?;
        self.palette()?;
        self.layout.validate().map_err(ConfigError::InvalidLayout)?;
        Ok(())
    }
}

fn default_timestamp_formats() -> Vec<String> {
    [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%d/%m/%Y %H:%M:%S",
        "%d/%m/%Y %H:%M",
    ]
    .iter()
    .map(|format| format.to_string())
    .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::path_to_test_data;

    #[test]
    fn load_partial_config() {
        let config = Config::load(&path_to_test_data().join("config.json")).unwrap();
        assert_eq!(config.input, Some(PathBuf::from("assignments.csv")));
        assert_eq!(config.exclude_category.as_deref(), Some("9. Référents"));
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.layout.rows_per_page, 10);

        // Everything else is defaulted
        assert_eq!(config.output_dir, PathBuf::from("planning"));
        assert_eq!(config.columns, ColumnNames::default());
        assert_eq!(config.layout.minutes_per_pixel, 1.2);
        assert_eq!(config.palette().unwrap(), Palette::default());
    }

    #[test]
    fn load_missing_file() {
        let result = Config::load(&path_to_test_data().join("does-not-exist.json"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn validate() {
        let mut config = Config::default();
        assert!(matches!(config.validate(), Err(ConfigError::NoInput)));

        config.input = Some(PathBuf::from("in.csv"));
        assert!(config.validate().is_ok());

        config.palette.clear();
        assert!(matches!(config.validate(), Err(ConfigError::Palette(_))));

        config.palette = vec![String::from("#123456")];
        config.layout.rows_per_page = 0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidLayout(_))));

        config.layout.rows_per_page = 22;
        config.layout.minutes_per_pixel = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidLayout(_))));

        config.layout.minutes_per_pixel = 1.2;
        config.layout.bar_font_size = 1e20;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidLayout(_))));

        config.layout.bar_font_size = 8.0;
        assert!(config.validate().is_ok());
    }
}
