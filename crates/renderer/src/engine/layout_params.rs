// SPDX-License-Identifier: MIT

//!
//! Layout params
//!

use crate::{MIN_FONT_SIZE, Position, Size};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A4 landscape, in points
pub const A4_LANDSCAPE: Size = Size {
    x: 842.0,
    y: 595.0,
};

/// The largest font size allowed for any text
pub const MAX_FONT_SIZE: f64 = 200.0;

/// Layout parameters that users can adjust (all lengths are in points).
///
/// Every position produced by the engine is relative to the top-left corner of
/// a page's content box (i.e. inside the page margin), with y growing
/// downwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    /// Horizontal scale: how many minutes one point represents
    pub minutes_per_pixel: f64,

    /// Height of a person's row
    pub row_height: f64,

    /// Width reserved on the left for the row labels (`phone - name`)
    pub left_margin: f64,

    /// Interval between guide lines in the header
    pub hour_step_minutes: u32,

    /// Number of person rows on one page
    pub rows_per_page: usize,

    /// Page width and height
    pub page_size: Size,

    /// Blank border around the content box of every page
    pub page_margin: f64,

    pub title_font_size: f64,
    pub label_font_size: f64,
    pub bar_font_size: f64,

    /// Space between the title and the hour labels
    pub header_gap: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        LayoutParams {
            minutes_per_pixel: 1.2,
            row_height: 20.0,
            left_margin: 200.0,
            hour_step_minutes: 60,
            rows_per_page: 22,
            page_size: A4_LANDSCAPE,
            page_margin: 36.0,
            title_font_size: 13.0,
            label_font_size: 10.0,
            bar_font_size: 8.0,
            header_gap: 20.0,
        }
    }
}

impl LayoutParams {
    /// Check the params describe a drawable page, saying what is wrong if not
    pub fn validate(&self) -> Result<(), &'static str> {
        let positive = |value: f64| value.is_finite() && value > 0.0;
        let non_negative = |value: f64| value.is_finite() && value >= 0.0;
        let font_size = |value: f64| (MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&value);

        if !positive(self.minutes_per_pixel) {
            return Err("minutes_per_pixel must be above 0");
        }
        if !positive(self.row_height) {
            return Err("row_height must be above 0");
        }
        if self.rows_per_page == 0 {
            return Err("rows_per_page must be at least 1");
        }
        if self.hour_step_minutes == 0 {
            return Err("hour_step_minutes must be at least 1");
        }
        if !positive(self.page_size.x) || !positive(self.page_size.y) {
            return Err("page_size must be above 0 in both directions");
        }
        if !non_negative(self.left_margin)
            || !non_negative(self.page_margin)
            || !non_negative(self.header_gap)
        {
            return Err("left_margin, page_margin and header_gap must be 0 or more");
        }
        if !font_size(self.title_font_size)
            || !font_size(self.label_font_size)
            || !font_size(self.bar_font_size)
        {
            return Err("font sizes must be between 4 and 200");
        }
        Ok(())
    }

    /// The size of a page's content box (the page minus its margins)
    pub fn content_size(&self) -> Size {
        Size {
            x: self.page_size.x - 2.0 * self.page_margin,
            y: self.page_size.y - 2.0 * self.page_margin,
        }
    }

    /// The x position of a point in time `minutes` after the window start
    pub fn x_for_minutes(&self, minutes: i64) -> f64 {
        self.left_margin + (minutes as f64 / self.minutes_per_pixel)
    }

    /// The width of a bar lasting `minutes`, never less than 1
    pub fn bar_width(&self, minutes: i64) -> f64 {
        (minutes as f64 / self.minutes_per_pixel).max(1.0)
    }

    /// The top of the hour labels in the header
    pub fn hour_labels_top(&self) -> f64 {
        self.title_font_size + self.header_gap
    }

    /// The top of the hour guide lines
    pub fn guide_lines_top(&self) -> f64 {
        self.hour_labels_top() + self.label_font_size + 2.0
    }

    /// The top of the first row of a page
    pub fn rows_top(&self) -> f64 {
        self.hour_labels_top() + self.label_font_size + 6.0
    }

    /// The top of the row in page slot `slot`
    pub fn row_top(&self, slot: usize) -> f64 {
        self.rows_top() + (slot as f64 * self.row_height)
    }
}

/// A box that specifies the location and size of something (e.g. the location
/// and size of a bar)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PositionAndSize {
    /// The smallest x/y values (boxes grow down and to the right from here)
    pub position: Position,

    /// The width of the box (from which the largest x value can be derived)
    pub width: f64,

    /// The height of the box (from which the largest y value can be derived)
    pub height: f64,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn horizontal_scale() {
        let params = LayoutParams::default();
        assert_eq!(params.x_for_minutes(0), 200.0);
        assert_eq!(params.x_for_minutes(60), 250.0);
    }

    #[test]
    fn bar_width_has_a_floor_and_is_monotonic() {
        let params = LayoutParams::default();
        assert_eq!(params.bar_width(0), 1.0);
        assert_eq!(params.bar_width(1), 1.0);
        assert_eq!(params.bar_width(120), 100.0);
        let mut previous = 0.0;
        for minutes in 0..300 {
            let width = params.bar_width(minutes);
            assert!(width >= previous);
            previous = width;
        }
    }

    #[test]
    fn reference_rows_fit_on_a_page() {
        let params = LayoutParams::default();
        let bottom = params.row_top(params.rows_per_page - 1) + params.row_height;
        assert!(bottom <= params.content_size().y);
    }

    #[test]
    fn validate() {
        assert_eq!(LayoutParams::default().validate(), Ok(()));

        let invalid = [
            LayoutParams {
                minutes_per_pixel: 0.0,
                ..LayoutParams::default()
            },
            LayoutParams {
                minutes_per_pixel: f64::NAN,
                ..LayoutParams::default()
            },
            LayoutParams {
                rows_per_page: 0,
                ..LayoutParams::default()
            },
            LayoutParams {
                left_margin: -1.0,
                ..LayoutParams::default()
            },
            LayoutParams {
                left_margin: f64::INFINITY,
                ..LayoutParams::default()
            },
            LayoutParams {
                bar_font_size: 1e20,
                ..LayoutParams::default()
            },
            LayoutParams {
                title_font_size: 1.0,
                ..LayoutParams::default()
            },
            LayoutParams {
                page_size: Size { x: 0.0, y: 595.0 },
                ..LayoutParams::default()
            },
        ];
        for params in invalid {
            assert!(params.validate().is_err(), "{params:?}");
        }
    }

    #[test]
    fn deserialise_partial() {
        let params: LayoutParams = serde_json::from_str(r#"{"rows_per_page": 10}"#).unwrap();
        assert_eq!(params.rows_per_page, 10);
        assert_eq!(params.row_height, 20.0);
    }
}
