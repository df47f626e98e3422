// SPDX-License-Identifier: MIT

//!
//! Laid out documents
//!

use crate::{DocumentRenderer, Heading, RowOut, Size, colour::Colour};
use mission_timeline_core::{DayWindow, Mission, OperationalDay};
use serde::Serialize;
use std::fmt::Debug;

/// One page: the heading followed by up to `rows_per_page` person rows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    /// 1-based page number
    pub number: usize,
    pub heading: Heading,
    pub rows: Vec<RowOut>,
}

/// A fully laid out (mission, operational day) document.
///
/// Positions are relative to the top-left of a page's content box, which is
/// inset from the page edge by `margin`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineDocument {
    pub title: String,
    pub mission: Mission,
    pub day: OperationalDay,
    pub window: DayWindow,

    /// The size of every page (wider than the configured page if the
    /// timeline needs it)
    pub page_size: Size,
    pub margin: f64,
    pub background: Colour,
    pub pages: Vec<Page>,
}

impl TimelineDocument {
    /// The number of person rows across all pages
    pub fn row_count(&self) -> usize {
        self.pages.iter().map(|page| page.rows.len()).sum()
    }

    /// Drive a renderer through every page of the document
    pub fn draw<R: DocumentRenderer>(&self, renderer: &mut R) {
        for page in &self.pages {
            renderer.begin_page(self.page_size, self.margin, self.background);

            renderer.draw_text(&page.heading.title);
            for tick in &page.heading.ticks {
                renderer.stroke_line(&tick.line);
                renderer.draw_text(&tick.label);
            }

            for row in &page.rows {
                renderer.draw_text(&row.label);
                for bar in &row.bars {
                    renderer.fill_box(&bar.bar);
                    if let Some(label) = &bar.label {
                        renderer.draw_text(label);
                    }
                }
                renderer.stroke_line(&row.separator);
            }
        }
    }
}
