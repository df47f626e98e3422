// SPDX-License-Identifier: MIT

//!
//! *Part of the wider mission timeline project*
//!
//! This crate lays out and draws one timeline document per (mission,
//! operational day) plan produced by `mission-timeline-core`.
//!
//! The core of the crate is a platform independent layout engine responsible
//! for:
//!
//! - Grouping clipped assignments into one row per person
//! - Paginating rows and redrawing the header on every page
//! - Mapping times to x positions and rows to y positions
//! - Giving every person a stable colour within a document
//!
//! The rest of the crate holds the frontends that turn a laid out document
//! into bytes.  The 3 currently offered frontends are:
//!
//! - SVG (every page stacked in one file)
//! - PDF (one PDF page per page)
//! - JSON (the laid out document itself, for inspection and other tooling)
//!
//! ## Usage
//!
//! ```ignore
//! let engine = LayoutEngine::new(LayoutParams::default(), Palette::default());
//! let document = engine.layout(&plan);
//! let bytes = render(&document, OutputFormat::Svg)?;
//! ```
//!

pub mod colour;
pub mod colours;
pub mod engine;
pub mod frontends;

pub use colour::*;
pub use colours::*;
pub use engine::*;
pub use frontends::*;
