// SPDX-License-Identifier: MIT

//!
//! Helper functions
//!

use crate::MAX_FONT_SIZE;
use chrono::NaiveDateTime;

/// The smallest font size text is shrunk to before giving up
pub(crate) const MIN_FONT_SIZE: f64 = 4.0;

/// How much the font size drops on each shrink-to-fit attempt
const FONT_SIZE_STEP: f64 = 0.5;

/// Format a timestamp as hour:minute (e.g. `07:05`)
pub(crate) fn hour_minute(timestamp: NaiveDateTime) -> String {
    timestamp.format("%H:%M").to_string()
}

/// A rough width for `text` in a Helvetica-like font (half an em per
/// character)
pub(crate) fn approximate_text_width(font_size: f64, text: &str) -> f64 {
    text.chars().count() as f64 * font_size * 0.5
}

/// The largest font size, no bigger than `font_size` (or [`MAX_FONT_SIZE`])
/// and no smaller than [`MIN_FONT_SIZE`], at which `text` fits in `max_width`
pub(crate) fn shrink_to_fit(
    measure_width: impl Fn(f64, &str) -> f64,
    text: &str,
    font_size: f64,
    max_width: f64,
) -> Option<f64> {
    if max_width <= 0.0 || font_size.is_nan() {
        return None;
    }
    let mut size = font_size.min(MAX_FONT_SIZE);
    while size >= MIN_FONT_SIZE {
        if measure_width(size, text) <= max_width {
            return Some(size);
        }
        size -= FONT_SIZE_STEP;
    }
    None
}

/// Drop characters from the end of `text` (adding `...`) until it fits in
/// `max_width`
pub(crate) fn truncate_to_fit(
    measure_width: impl Fn(&str) -> f64,
    text: &str,
    max_width: f64,
) -> String {
    if measure_width(text) <= max_width {
        return text.to_string();
    }
    let mut chars: Vec<char> = text.chars().collect();
    while !chars.is_empty() {
        chars.pop();
        let candidate = format!("{}...", chars.iter().collect::<String>().trim_end());
        if measure_width(&candidate) <= max_width {
            return candidate;
        }
    }
    String::new()
}
