// SPDX-License-Identifier: MIT

//!
//! Day plans: the independent (mission, operational day) work items
//!

use crate::{ClippedAssignment, DayWindow, Mission, MissionGroup, OperationalDay, days_to_render};
use log::debug;
use serde::Serialize;

/// Everything needed to lay out one document: the mission, the operational
/// day, the resolved window and the clipped assignments (input order kept).
///
/// Plans share no state with each other and can be rendered in any order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayPlan {
    pub mission: Mission,
    pub day: OperationalDay,
    pub window: DayWindow,
    pub tasks: Vec<ClippedAssignment>,
}

/// The outcome of planning one mission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissionPlan {
    /// One plan per day that has at least one window-active assignment,
    /// ascending by day
    pub plans: Vec<DayPlan>,

    /// Days touched by an assignment but left with nothing to draw
    pub skipped_days: Vec<OperationalDay>,
}

/// Split a mission's assignments into one [`DayPlan`] per operational day
pub fn plan_mission(group: &MissionGroup) -> MissionPlan {
    let mut mission_plan = MissionPlan::default();
    for day in days_to_render(&group.assignments) {
        match DayWindow::resolve(day, &group.assignments) {
            Some(resolved) => mission_plan.plans.push(DayPlan {
                mission: group.mission.clone(),
                day,
                window: resolved.window,
                tasks: resolved.clipped(),
            }),
            None => {
                debug!("{}: nothing to draw on {day}, skipping", group.mission);
                mission_plan.skipped_days.push(day);
            }
        }
    }
    mission_plan
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Assignment, PersonId, group_by_mission, test_helpers::at};

    fn assignment(mission: &str, person: &str, start: &str, end: &str) -> Assignment {
        Assignment::from(
            Mission::from(mission).unwrap(),
            at(start),
            at(end),
            PersonId::from(person).unwrap(),
            "Someone",
            "",
        )
        .unwrap()
    }

    #[test]
    fn one_plan_per_active_day() {
        let groups = group_by_mission(vec![
            assignment("Bar", "a@x", "2025-08-01 07:00", "2025-08-01 09:00"),
            assignment("Bar", "b@x", "2025-08-02 20:00", "2025-08-03 02:00"),
            assignment("Accueil", "a@x", "2025-08-02 10:00", "2025-08-02 12:00"),
        ]);
        let bar = plan_mission(&groups[0]);
        let days: Vec<String> = bar.plans.iter().map(|p| p.day.to_string()).collect();
        assert_eq!(days, vec!["2025-07-31", "2025-08-01", "2025-08-02"]);
        assert!(bar.skipped_days.is_empty());

        let accueil = plan_mission(&groups[1]);
        assert_eq!(accueil.plans.len(), 1);
        assert_eq!(accueil.plans[0].mission.as_str(), "Accueil");
    }

    #[test]
    fn day_reached_only_by_an_end_boundary_is_skipped() {
        let groups = group_by_mission(vec![assignment(
            "Bar",
            "a@x",
            "2025-08-01 20:00",
            "2025-08-02 08:00",
        )]);
        let plan = plan_mission(&groups[0]);
        assert_eq!(plan.plans.len(), 1);
        assert_eq!(plan.skipped_days.len(), 1);
        assert_eq!(plan.skipped_days[0].to_string(), "2025-08-02");
    }

    #[test]
    fn same_person_intervals_are_not_merged() {
        let groups = group_by_mission(vec![
            assignment("Bar", "a@x", "2025-08-01 10:00", "2025-08-01 12:00"),
            assignment("Bar", "a@x", "2025-08-01 14:00", "2025-08-01 16:00"),
        ]);
        let plan = plan_mission(&groups[0]);
        assert_eq!(plan.plans[0].tasks.len(), 2);
    }
}
