// SPDX-License-Identifier: MIT

//!
//! Primitives
//!

use crate::{LineStyle, Point, PositionAndSize, colour::Colour};
use serde::Serialize;
use std::fmt::Debug;

/// Where text sits relative to its anchor point
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum TextAlign {
    /// The anchor is the left edge of the text
    #[default]
    Start,

    /// The anchor is the horizontal centre of the text
    Middle,
}

/// Information needed to draw text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextOut {
    /// The anchor (its y value is the top of the text)
    pub top_left: Point,
    pub text: String,
    pub colour: Colour,
    pub font_size: f64,
    pub align: TextAlign,
}

/// Information needed to draw a filled box
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FilledBox {
    pub position_and_size: PositionAndSize,
    pub fill_colour: Colour,
}

/// Information needed to draw a straight line (guide lines and row
/// separators)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Line {
    pub from: Point,
    pub to: Point,
    pub style: LineStyle,
}
