// SPDX-License-Identifier: MIT

//!
//! Frontends
//!
//! A frontend turns a laid out [`TimelineDocument`] into the bytes of one
//! output file.
//!

mod json;
mod pdf;
mod svg;

pub use json::*;
pub use pdf::*;
pub use svg::*;

use crate::{FilledBox, Line, Size, TextOut, TimelineDocument, colour::Colour};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can arise when rendering a document
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Unknown output format `{0}` (expected `svg`, `pdf` or `json`)")]
    UnknownFormat(String),

    #[error("Unable to serialise document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unable to write PDF: {0}")]
    Pdf(String),
}

/// Something that can draw the primitives of a laid out document, page by
/// page.  Positions passed in are relative to the page's content box, in
/// points.
pub trait DocumentRenderer {
    /// Start a new page (every later call draws on this page)
    fn begin_page(&mut self, size: Size, margin: f64, background: Colour);

    fn fill_box(&mut self, filled_box: &FilledBox);

    fn stroke_line(&mut self, line: &Line);

    fn draw_text(&mut self, text: &TextOut);

    /// Close the document and get its bytes
    fn finish(self) -> Result<Vec<u8>, RenderError>
    where
        Self: Sized;
}

/// The supported output file formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Svg,
    Pdf,
    Json,
}

impl OutputFormat {
    /// The file extension used for documents of this format
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Pdf => "pdf",
            OutputFormat::Json => "json",
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "svg" => Ok(OutputFormat::Svg),
            "pdf" => Ok(OutputFormat::Pdf),
            "json" => Ok(OutputFormat::Json),
            _ => Err(RenderError::UnknownFormat(s.to_string())),
        }
    }
}

/// Render a document in the given format
pub fn render(document: &TimelineDocument, format: OutputFormat) -> Result<Vec<u8>, RenderError> {
    match format {
        OutputFormat::Svg => {
            let mut renderer = SvgRenderer::default();
            document.draw(&mut renderer);
            renderer.finish()
        }
        OutputFormat::Pdf => {
            let mut renderer = PdfRenderer::new(&document.title)?;
            document.draw(&mut renderer);
            renderer.finish()
        }
        OutputFormat::Json => to_json(document),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn output_format_from_str() {
        assert_eq!("svg".parse::<OutputFormat>().unwrap(), OutputFormat::Svg);
        assert_eq!(" JSON ".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("pdf".parse::<OutputFormat>().unwrap(), OutputFormat::Pdf);
        assert!("png".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn output_format_serde() {
        let format: OutputFormat = serde_json::from_str(r#""json""#).unwrap();
        assert_eq!(format, OutputFormat::Json);
        assert_eq!(format.extension(), "json");
        assert_eq!(OutputFormat::default().to_string(), "svg");
    }
}
