// SPDX-License-Identifier: MIT

//!
//! Colours
//!

use serde::{Deserialize, Serialize};

use crate::colour::Colour;
use std::fmt::Debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub colour: Colour,
    pub thickness: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeadingStyle {
    pub text_colour: Colour,
    pub guide_line: LineStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RowStyle {
    pub text_colour: Colour,
    pub bar_text_colour: Colour,
    pub separator: LineStyle,
}

/// Everything drawn that isn't a person's bar colour
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineColours {
    pub background: Colour,
    pub heading: HeadingStyle,
    pub row: RowStyle,
}

impl Default for TimelineColours {
    fn default() -> Self {
        let black = Colour::from_rgb(0, 0, 0);
        Self {
            background: Colour::from_rgb(255, 255, 255),
            heading: HeadingStyle {
                text_colour: black,
                guide_line: LineStyle {
                    colour: Colour::from_rgb(0xdd, 0xdd, 0xdd),
                    thickness: 0.5,
                },
            },
            row: RowStyle {
                text_colour: black,
                bar_text_colour: black,
                separator: LineStyle {
                    colour: Colour::from_rgb(0xaa, 0xaa, 0xaa),
                    thickness: 0.5,
                },
            },
        }
    }
}
