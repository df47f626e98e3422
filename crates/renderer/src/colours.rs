// SPDX-License-Identifier: MIT

//!
//! The bar palette, and the per-document assignment of palette colours to
//! people
//!

use crate::colour::{Colour, ColourError};
use mission_timeline_core::PersonId;
use std::collections::HashMap;
use thiserror::Error;

/// The reference bar colours (no `#`)
pub const DEFAULT_PALETTE: [&str; 8] = [
    "007ACC", "FFC107", "4CAF50", "E91E63", "9C27B0", "FF5722", "795548", "3F51B5",
];

/// Errors that can arise when building a [`Palette`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    #[error("The palette must contain at least one colour")]
    Empty,

    #[error(transparent)]
    Colour(#[from] ColourError),
}

/// An ordered, non-empty list of bar colours.  People are given colours in
/// palette order, wrapping around when the palette is exhausted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette(Vec<Colour>);

impl Default for Palette {
    fn default() -> Self {
        Self(
            DEFAULT_PALETTE
                .iter()
                .filter_map(|hex| Colour::from_hex(*hex).ok())
                .collect(),
        )
    }
}

impl Palette {
    /// Create a palette if at least one colour is given
    pub fn from(colours: Vec<Colour>) -> Result<Self, PaletteError> {
        if colours.is_empty() {
            Err(PaletteError::Empty)
        } else {
            Ok(Self(colours))
        }
    }

    /// Create a palette from hex strings (e.g. from a config file)
    pub fn from_hex<S: AsRef<str>>(hex_colours: &[S]) -> Result<Self, PaletteError> {
        let colours = hex_colours
            .iter()
            .map(|hex| Colour::from_hex(hex.as_ref()))
            .collect::<Result<Vec<Colour>, ColourError>>()?;
        Self::from(colours)
    }

    /// The colour at `index`, wrapping around
    pub fn colour(&self, index: usize) -> Colour {
        self.0[index % self.0.len()]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Which palette colour each person gets within one document.
///
/// Populated in first-seen order and never shared between documents.
#[derive(Debug, Clone)]
pub struct ColourAssignment<'a> {
    palette: &'a Palette,
    assigned: HashMap<PersonId, Colour>,
}

impl<'a> ColourAssignment<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self {
            palette,
            assigned: HashMap::new(),
        }
    }

    /// The person's colour, assigning the next palette colour on first sight
    pub fn colour_for(&mut self, person_id: &PersonId) -> Colour {
        if let Some(colour) = self.assigned.get(person_id) {
            return *colour;
        }
        let colour = self.palette.colour(self.assigned.len());
        self.assigned.insert(person_id.clone(), colour);
        colour
    }

    /// The number of people given a colour so far
    pub fn count(&self) -> usize {
        self.assigned.len()
    }
}
