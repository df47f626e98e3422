// SPDX-License-Identifier: MIT

//!
//! Headings
//!

use crate::{HeadingStyle, LayoutParams, Line, Point, TextAlign, TextOut, hour_minute};
use chrono::TimeDelta;
use mission_timeline_core::{DayWindow, Mission, OperationalDay};
use serde::Serialize;
use std::fmt::Debug;

/// One hour guide line and its label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourTick {
    pub label: TextOut,
    pub line: Line,
}

/// Information needed to draw a page's heading: the title and the hour guide
/// lines.  Every page of a document shows the same heading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heading {
    pub title: TextOut,
    pub ticks: Vec<HourTick>,
}

impl Heading {
    /// Lay out the heading for a mission's day.  A tick is placed every
    /// `hour_step_minutes` from the window start up to and including the
    /// window end.
    pub fn from(
        mission: &Mission,
        day: OperationalDay,
        window: &DayWindow,
        params: &LayoutParams,
        style: &HeadingStyle,
    ) -> Self {
        let title = TextOut {
            top_left: Point::default(),
            text: title_text(mission, day),
            colour: style.text_colour,
            font_size: params.title_font_size,
            align: TextAlign::Start,
        };

        let step = TimeDelta::minutes(i64::from(params.hour_step_minutes.max(1)));
        let bottom = params.content_size().y;
        let mut ticks = Vec::new();
        let mut tick_time = window.start;
        while tick_time <= window.end {
            let x = params.x_for_minutes(window.minutes_from_start(tick_time));
            ticks.push(HourTick {
                label: TextOut {
                    top_left: Point {
                        x,
                        y: params.hour_labels_top(),
                    },
                    text: hour_minute(tick_time),
                    colour: style.text_colour,
                    font_size: params.label_font_size,
                    align: TextAlign::Middle,
                },
                line: Line {
                    from: Point {
                        x,
                        y: params.guide_lines_top(),
                    },
                    to: Point { x, y: bottom },
                    style: style.guide_line,
                },
            });
            tick_time += step;
        }

        Self { title, ticks }
    }
}

/// e.g. `02 August -- Bar`
pub fn title_text(mission: &Mission, day: OperationalDay) -> String {
    format!("{} -- {}", day.date().format("%d %B"), mission)
}
