// SPDX-License-Identifier: MIT

//!
//! *Part of the wider mission timeline project*
//!
//! This crate defines the basic datatypes and the day-partitioning logic used
//! across the mission timeline project (planner, renderer, command line).
//!
//! The flow through this crate is:
//!
//! - Rows become validated [`Assignment`]s
//! - Assignments are grouped per [`Mission`] ([`group_by_mission`])
//! - Each mission is split into [`OperationalDay`]s (08:00 to 07:59:59 the
//!   next calendar day)
//! - Each day is resolved to a [`DayWindow`] and its assignments are clipped
//!   to it, giving one independent [`DayPlan`] per (mission, day)
//!
//! This crate aims to provide APIs for each type so that if a type is
//! instantiated, the developer can be sure it's valid.
//!

mod assignment;
mod mission;
mod operational_day;
mod person;
mod plan;
mod window;

pub use assignment::*;
pub use mission::*;
pub use operational_day::*;
pub use person::*;
pub use plan::*;
pub use window::*;

#[cfg(test)]
pub(crate) mod test_helpers {
    use chrono::NaiveDateTime;

    /// Parse `YYYY-MM-DD HH:MM` or `YYYY-MM-DD HH:MM:SS`
    pub fn at(timestamp: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S")
            .or_else(|_| NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M"))
            .unwrap()
    }
}
