// SPDX-License-Identifier: MIT

//!
//! Operational days
//!
//! An operational day runs from 08:00 to 07:59:59 the next calendar day
//! because activity carries on late into the night.  Timestamps before 08:00
//! belong to the previous operational day.
//!

use crate::Assignment;
use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The hour at which an operational day starts
pub const OPERATIONAL_DAY_START_HOUR: u32 = 8;

/// An operational day, named after the calendar date on which it starts
#[rustfmt::skip]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(derive_more::Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationalDay(NaiveDate);

impl OperationalDay {
    /// The operational day starting on the given calendar date
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The operational day a timestamp belongs to
    pub fn containing(timestamp: NaiveDateTime) -> Self {
        Self(logical_day(timestamp))
    }

    /// The calendar date the operational day starts on
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The next operational day
    pub fn succ(&self) -> Self {
        Self(self.0 + Days::new(1))
    }

    /// `date 08:00:00`
    pub fn canonical_start(&self) -> NaiveDateTime {
        self.0.and_time(day_start_time())
    }

    /// `(date + 1) 07:59:59`
    pub fn canonical_end(&self) -> NaiveDateTime {
        self.succ().canonical_start() - chrono::Duration::seconds(1)
    }
}

fn day_start_time() -> NaiveTime {
    NaiveTime::from_hms_opt(OPERATIONAL_DAY_START_HOUR, 0, 0).unwrap_or(NaiveTime::MIN)
}

/// The calendar date of the operational day a timestamp belongs to (depends on
/// the hour only)
pub fn logical_day(timestamp: NaiveDateTime) -> NaiveDate {
    let date = timestamp.date();
    if timestamp.hour() < OPERATIONAL_DAY_START_HOUR {
        date.pred_opt().unwrap_or(date)
    } else {
        date
    }
}

/// Every operational day an assignment touches, from the day of its start to
/// the day of its end (inclusive, ascending)
pub fn days_touched(assignment: &Assignment) -> Vec<OperationalDay> {
    let first = OperationalDay::containing(assignment.start());
    let last = OperationalDay::containing(assignment.end());
    let mut days = Vec::new();
    let mut day = first;
    while day <= last {
        days.push(day);
        day = day.succ();
    }
    days
}

/// The union of [`days_touched`] over all assignments (deduplicated, ascending)
pub fn days_to_render<'a, I>(assignments: I) -> BTreeSet<OperationalDay>
where
    I: IntoIterator<Item = &'a Assignment>,
{
    assignments.into_iter().flat_map(days_touched).collect()
}
