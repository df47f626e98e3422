// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Planner errors
//!

use crate::{ConfigError, IngestError, OutputError};
use mission_timeline_renderer::RenderError;
use thiserror::Error;

/// Errors that stop a whole run
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    Ingest(#[from] IngestError),
}

/// Errors that stop a single document (the run carries on with the next one)
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}
