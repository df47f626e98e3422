// SPDX-License-Identifier: MIT

//!
//! The colour type used when drawing a timeline
//!

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can arise when parsing a [`Colour`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColourError {
    #[error("`{0}` is not a hex colour (expected e.g. `#007acc` or `007ACC`)")]
    InvalidHex(String),
}

/// The `Colour` type
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Colour {
    r: u8,
    g: u8,
    b: u8,
}

impl Colour {
    /// Create a colour from RGB values
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Colour { r, g, b }
    }

    /// Create a colour from a hex colour (e.g. `#ab66ef`, `ab66ef`, `#ab66efff`).
    /// If the hex value has an alpha component, it is removed.
    pub fn from_hex<S: Into<String>>(hex_colour: S) -> Result<Self, ColourError> {
        let original = hex_colour.into();
        let invalid = || ColourError::InvalidHex(original.clone());

        let digits = original.trim().trim_start_matches('#');
        if !digits.is_ascii() {
            return Err(invalid());
        }
        let digits = match digits.len() {
            6 => digits,
            8 => &digits[0..6],
            _ => return Err(invalid()),
        };

        let component = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        Ok(Colour::from_rgb(component(0)?, component(2)?, component(4)?))
    }

    /// Get a colour as RGB values
    pub fn as_rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// The colour as `#rrggbb` (e.g. for SVG/CSS)
    pub fn to_hex(&self) -> String {
        // {:02x} means print as hex, requesting 2 chars (pad left with "0" if only 1 char otherwise)
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_hex() {
        assert_eq!(Colour::from_hex("#007ACC"), Ok(Colour::from_rgb(0, 122, 204)));
        assert_eq!(Colour::from_hex("007acc"), Ok(Colour::from_rgb(0, 122, 204)));
        assert_eq!(Colour::from_hex("#007accff"), Ok(Colour::from_rgb(0, 122, 204)));
        assert!(Colour::from_hex("#07c").is_err());
        assert!(Colour::from_hex("zzzzzz").is_err());
        assert!(Colour::from_hex("éééé").is_err());
    }

    #[test]
    fn to_hex() {
        assert_eq!(Colour::from_rgb(255, 193, 7).to_hex(), "#ffc107");
    }
}
