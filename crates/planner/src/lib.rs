// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider mission timeline project*
//!
//! This library crate ties the mission timeline crates together.  It does the
//! following:
//!
//! - Loads the JSON configuration (input file, column names, timestamp
//!   formats, layout, palette)
//! - Reads assignments from a CSV or workbook (`.xlsx`, `.ods`, ...) export,
//!   failing fast on the first bad row
//! - Plans every (mission, operational day) document
//! - Lays out, renders and writes each document on its own, so one failing
//!   document doesn't stop the others
//!
//! It uses the `core` crate for the domain types and the `renderer` crate for
//! layout and output formats, and is itself used by the `bins` crate.
//!

mod config;
mod error;
mod ingest;
mod output;
mod pipeline;

pub use config::*;
pub use error::*;
pub use ingest::*;
pub use output::*;
pub use pipeline::*;

#[cfg(test)]
pub mod test {
    use std::path::PathBuf;

    pub fn path_to_test_data() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test-data")
    }
}
