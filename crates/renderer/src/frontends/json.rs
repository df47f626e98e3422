// SPDX-License-Identifier: MIT

//!
//! The JSON frontend: the laid out document itself, for inspection and other
//! tooling
//!

use crate::{RenderError, TimelineDocument};

/// Serialise a laid out document as pretty-printed JSON
pub fn to_json(document: &TimelineDocument) -> Result<Vec<u8>, RenderError> {
    let mut bytes = serde_json::to_vec_pretty(document)?;
    bytes.push(b'\n');
    Ok(bytes)
}
