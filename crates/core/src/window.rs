// SPDX-License-Identifier: MIT

//!
//! Day windows and clipping
//!
//! A day window is the span actually drawn for one (mission, operational day)
//! pair.  It is the operational day's canonical bounds shrunk to the extent of
//! the assignments active in it, and never wider than the canonical bounds.
//!

use crate::{Assignment, Mission, OperationalDay, PersonId};
use chrono::NaiveDateTime;
use log::trace;
use serde::Serialize;

/// The rendered bounds of one (mission, operational day) document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DayWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// A day whose window has been resolved, along with the assignments that
/// strictly overlap the window (input order kept)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDay<'a> {
    pub day: OperationalDay,
    pub window: DayWindow,
    pub active: Vec<&'a Assignment>,
}

impl DayWindow {
    /// Resolve the window of `day` for the given assignments (all from the
    /// same mission).
    ///
    /// The assignments are first filtered loosely against the canonical day
    /// bounds, the window is the canonical bounds intersected with the extent
    /// of those assignments, and the assignments are then filtered again
    /// against the window.  Returns `None` when either filter leaves nothing,
    /// meaning the day gets no document.
    pub fn resolve<'a>(
        day: OperationalDay,
        assignments: &'a [Assignment],
    ) -> Option<ResolvedDay<'a>> {
        let canonical_start = day.canonical_start();
        let canonical_end = day.canonical_end();

        // Loose, day-level filter
        let roughly_active: Vec<&Assignment> = assignments
            .iter()
            .filter(|a| a.overlaps(canonical_start, canonical_end))
            .collect();

        let earliest_start = roughly_active.iter().map(|a| a.start()).min()?;
        let latest_end = roughly_active.iter().map(|a| a.end()).max()?;

        let window = DayWindow {
            start: canonical_start.max(earliest_start),
            end: canonical_end.min(latest_end),
        };

        // Tight, window-level filter
        let active: Vec<&Assignment> = assignments
            .iter()
            .filter(|a| a.overlaps(window.start, window.end))
            .collect();

        if active.is_empty() {
            trace!("no assignment overlaps the window of {day}");
            return None;
        }

        Some(ResolvedDay { day, window, active })
    }

    /// Restrict an assignment to the window
    pub fn clip(&self, assignment: &Assignment) -> ClippedAssignment {
        let start = assignment.start().max(self.start).min(self.end);
        let end = assignment.end().min(self.end).max(start);
        ClippedAssignment {
            assignment: assignment.clone(),
            start,
            end,
        }
    }

    /// Whole minutes from the window start to `timestamp` (truncated)
    pub fn minutes_from_start(&self, timestamp: NaiveDateTime) -> i64 {
        (timestamp - self.start).num_minutes()
    }
}

/// An [`Assignment`] restricted to a [`DayWindow`].  The identity fields are
/// those of the original assignment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ClippedAssignment {
    /// The original, unclipped assignment
    pub assignment: Assignment,

    /// `max(assignment.start, window.start)`
    pub start: NaiveDateTime,

    /// `min(assignment.end, window.end)`
    pub end: NaiveDateTime,
}

impl ClippedAssignment {
    pub fn mission(&self) -> &Mission {
        self.assignment.mission()
    }

    pub fn person_id(&self) -> &PersonId {
        self.assignment.person_id()
    }

    pub fn name(&self) -> &str {
        self.assignment.name()
    }

    pub fn phone(&self) -> &str {
        self.assignment.phone()
    }
}

impl ResolvedDay<'_> {
    /// Clip every active assignment to the window
    pub fn clipped(&self) -> Vec<ClippedAssignment> {
        self.active.iter().map(|a| self.window.clip(a)).collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_helpers::at;
    use chrono::NaiveDate;

    fn day(date: &str) -> OperationalDay {
        OperationalDay::from_date(NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap())
    }

    fn assignment(person: &str, start: &str, end: &str) -> Assignment {
        Assignment::from(
            Mission::from("Bar").unwrap(),
            at(start),
            at(end),
            PersonId::from(person).unwrap(),
            "Someone",
            "",
        )
        .unwrap()
    }

    fn assert_within_window(resolved: &ResolvedDay) {
        let canonical_start = resolved.day.canonical_start();
        let canonical_end = resolved.day.canonical_end();
        assert!(resolved.window.start >= canonical_start);
        assert!(resolved.window.end <= canonical_end);
        for clipped in resolved.clipped() {
            assert!(resolved.window.start <= clipped.start);
            assert!(clipped.start <= clipped.end);
            assert!(clipped.end <= resolved.window.end);
        }
    }

    #[test]
    fn window_shrinks_to_activity() {
        let assignments = vec![
            assignment("a@x", "2025-08-01 14:00", "2025-08-01 18:00"),
            assignment("b@x", "2025-08-01 16:00", "2025-08-01 23:30"),
        ];
        let resolved = DayWindow::resolve(day("2025-08-01"), &assignments).unwrap();
        assert_eq!(resolved.window.start, at("2025-08-01 14:00"));
        assert_eq!(resolved.window.end, at("2025-08-01 23:30"));
        assert_eq!(resolved.active.len(), 2);
        assert_within_window(&resolved);
    }

    #[test]
    fn straddling_assignment_is_split_across_days() {
        // 07:00 -> 09:00 belongs partly to the previous operational day
        let assignments = vec![assignment("a@x", "2025-08-01 07:00", "2025-08-01 09:00")];

        let previous = DayWindow::resolve(day("2025-07-31"), &assignments).unwrap();
        assert_eq!(previous.window.start, at("2025-08-01 07:00"));
        assert_eq!(previous.window.end, at("2025-08-01 07:59:59"));
        let clipped = previous.clipped();
        assert_eq!(clipped[0].start, at("2025-08-01 07:00"));
        assert_eq!(clipped[0].end, at("2025-08-01 07:59:59"));
        assert_within_window(&previous);

        let current = DayWindow::resolve(day("2025-08-01"), &assignments).unwrap();
        assert_eq!(current.window.start, at("2025-08-01 08:00"));
        assert_eq!(current.window.end, at("2025-08-01 09:00"));
        let clipped = current.clipped();
        assert_eq!(clipped[0].start, at("2025-08-01 08:00"));
        assert_eq!(clipped[0].end, at("2025-08-01 09:00"));
        assert_within_window(&current);
    }

    #[test]
    fn window_never_exceeds_canonical_bounds() {
        let assignments = vec![
            assignment("a@x", "2025-07-30 12:00", "2025-08-03 12:00"),
            assignment("b@x", "2025-08-01 09:00", "2025-08-01 10:00"),
        ];
        let resolved = DayWindow::resolve(day("2025-08-01"), &assignments).unwrap();
        assert_eq!(resolved.window.start, at("2025-08-01 08:00:00"));
        assert_eq!(resolved.window.end, at("2025-08-02 07:59:59"));
        assert_within_window(&resolved);
    }

    #[test]
    fn day_ending_at_boundary_produces_nothing() {
        // Touches 2025-08-02 by its end timestamp only
        let assignments = vec![assignment("a@x", "2025-08-01 20:00", "2025-08-02 08:00")];
        assert!(DayWindow::resolve(day("2025-08-02"), &assignments).is_none());
    }

    #[test]
    fn day_without_assignments_produces_nothing() {
        let assignments = vec![assignment("a@x", "2025-08-05 10:00", "2025-08-05 12:00")];
        assert!(DayWindow::resolve(day("2025-08-01"), &assignments).is_none());
        assert!(DayWindow::resolve(day("2025-08-01"), &[]).is_none());
    }

    #[test]
    fn early_tail_window_starts_at_earliest_assignment() {
        let assignments = vec![
            assignment("a@x", "2025-08-01 07:00", "2025-08-01 07:59:59"),
            assignment("b@x", "2025-08-01 06:00", "2025-08-01 07:00"),
        ];
        let resolved = DayWindow::resolve(day("2025-07-31"), &assignments).unwrap();
        assert_eq!(resolved.window.start, at("2025-08-01 06:00"));
        assert_eq!(resolved.active.len(), 2);
        assert_within_window(&resolved);
    }

    #[test]
    fn minutes_are_truncated() {
        let window = DayWindow {
            start: at("2025-08-01 08:00:00"),
            end: at("2025-08-02 07:59:59"),
        };
        assert_eq!(window.minutes_from_start(at("2025-08-01 09:30:59")), 90);
        assert_eq!(window.minutes_from_start(window.end), 1439);
    }
}
