// SPDX-License-Identifier: MIT

//!
//! The `mission-timeline-renderer` layout engine
//!

mod colours;
mod document;
mod heading;
mod helpers;
mod layout_params;
mod person_row;
mod point;
mod primitives;

pub(crate) use helpers::*;

pub use colours::*;
pub use document::*;
pub use heading::*;
pub use layout_params::*;
pub use person_row::*;
pub use point::*;
pub use primitives::*;

use crate::{ColourAssignment, Palette, colour::Colour};
use log::{debug, trace};
use mission_timeline_core::{ClippedAssignment, DayPlan, DayWindow};

/// The layout engine.  It turns a [`DayPlan`] into a [`TimelineDocument`]:
/// one row per person, paginated, with every person given a colour from the
/// palette.
///
/// The engine holds no per-document state, so one engine can lay out any
/// number of documents in any order.
pub struct LayoutEngine {
    params: LayoutParams,
    palette: Palette,
    colours: TimelineColours,
}

impl LayoutEngine {
    /// Create a new engine
    pub fn new(params: LayoutParams, palette: Palette) -> Self {
        Self {
            params,
            palette,
            colours: TimelineColours::default(),
        }
    }

    /// Calculate the width of the string
    fn str_width(&self, font_size: f64, str: &str) -> f64 {
        approximate_text_width(font_size, str)
    }

    /// Lay out one document
    pub fn layout(&self, plan: &DayPlan) -> TimelineDocument {
        let params = &self.params;
        let rows_per_page = params.rows_per_page.max(1);
        let canvas_width = self.canvas_width(&plan.window, &plan.tasks);
        let page_size = Size {
            x: canvas_width + (2.0 * params.page_margin),
            y: params.page_size.y,
        };

        let heading = Heading::from(
            &plan.mission,
            plan.day,
            &plan.window,
            params,
            &self.colours.heading,
        );

        // Local to this document so nothing leaks between documents
        let mut colour_assignment = ColourAssignment::new(&self.palette);

        let mut pages: Vec<Page> = Vec::new();
        for (index, person_row) in group_by_person(&plan.tasks).iter().enumerate() {
            let slot = index % rows_per_page;
            if slot == 0 {
                trace!("{} {}: page {}", plan.mission, plan.day, pages.len() + 1);
                pages.push(Page {
                    number: pages.len() + 1,
                    heading: heading.clone(),
                    rows: Vec::new(),
                });
            }
            let colour = colour_assignment.colour_for(person_row.person_id);
            let row = self.row(&plan.window, person_row, slot, colour, canvas_width);
            if let Some(page) = pages.last_mut() {
                page.rows.push(row);
            }
        }

        if pages.is_empty() {
            pages.push(Page {
                number: 1,
                heading,
                rows: Vec::new(),
            });
        }

        debug!(
            "{} {}: {} people on {} page(s)",
            plan.mission,
            plan.day,
            colour_assignment.count(),
            pages.len()
        );

        TimelineDocument {
            title: title_text(&plan.mission, plan.day),
            mission: plan.mission.clone(),
            day: plan.day,
            window: plan.window,
            page_size,
            margin: params.page_margin,
            background: self.colours.background,
            pages,
        }
    }

    /// The width needed to show the whole window and every bar, never less
    /// than the configured page's content width
    fn canvas_width(&self, window: &DayWindow, tasks: &[ClippedAssignment]) -> f64 {
        let params = &self.params;
        let window_end = params.x_for_minutes(window.minutes_from_start(window.end));
        tasks
            .iter()
            .map(|task| {
                let start = window.minutes_from_start(task.start);
                let end = window.minutes_from_start(task.end);
                params.x_for_minutes(start) + params.bar_width(end - start)
            })
            .fold(params.content_size().x.max(window_end), f64::max)
    }

    /// Lay out one person's row in page slot `slot`
    fn row(
        &self,
        window: &DayWindow,
        person_row: &PersonRow,
        slot: usize,
        colour: Colour,
        canvas_width: f64,
    ) -> RowOut {
        let params = &self.params;
        let top = params.row_top(slot);

        let label_text = truncate_to_fit(
            |text| self.str_width(params.label_font_size, text),
            &person_row.label(),
            params.left_margin - 10.0,
        );
        let label = TextOut {
            top_left: Point {
                x: 0.0,
                y: top + ((params.row_height - params.label_font_size) / 2.0),
            },
            text: label_text,
            colour: self.colours.row.text_colour,
            font_size: params.label_font_size,
            align: TextAlign::Start,
        };

        let bars = person_row
            .tasks
            .iter()
            .map(|task| self.bar(window, task, top, colour))
            .collect();

        RowOut {
            person_id: person_row.person_id.clone(),
            slot,
            colour,
            label,
            bars,
            separator: Line {
                from: Point {
                    x: 0.0,
                    y: top + params.row_height,
                },
                to: Point {
                    x: canvas_width,
                    y: top + params.row_height,
                },
                style: self.colours.row.separator,
            },
        }
    }

    /// Lay out one bar (and its label if there is room for it)
    fn bar(
        &self,
        window: &DayWindow,
        task: &ClippedAssignment,
        top: f64,
        colour: Colour,
    ) -> BarOut {
        let params = &self.params;
        let start = window.minutes_from_start(task.start);
        let end = window.minutes_from_start(task.end);
        let position_and_size = PositionAndSize {
            position: Point {
                x: params.x_for_minutes(start),
                y: top,
            },
            width: params.bar_width(end - start),
            height: params.row_height,
        };

        let text = format!("{} - {}", hour_minute(task.start), hour_minute(task.end));
        let label = shrink_to_fit(
            |font_size, text| self.str_width(font_size, text),
            &text,
            params.bar_font_size,
            position_and_size.width - 4.0,
        )
        .map(|font_size| TextOut {
            top_left: Point {
                x: position_and_size.position.x + (position_and_size.width / 2.0),
                y: top + ((params.row_height - font_size) / 2.0),
            },
            text,
            colour: self.colours.row.bar_text_colour,
            font_size,
            align: TextAlign::Middle,
        });

        BarOut {
            bar: FilledBox {
                position_and_size,
                fill_colour: colour,
            },
            label,
        }
    }
}
