// SPDX-License-Identifier: MIT

//!
//! The assignment type (one person on one mission for one interval)
//!

use crate::{Mission, PersonId, normalise_phone};
use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors that can arise in relation to an [`Assignment`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssignmentError {
    /// The start must be strictly before the end
    #[error("Assignment start `{start}` is not before its end `{end}`")]
    InvalidInterval {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

/// One person assigned to one mission between `start` and `end`.  Created once
/// from an input row and never mutated.
#[derive(Serialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Assignment {
    /// The mission the person is assigned to
    mission: Mission,

    /// When the assignment begins
    start: NaiveDateTime,

    /// When the assignment ends (always after `start`)
    end: NaiveDateTime,

    /// Who is assigned
    person_id: PersonId,

    /// Display name (e.g. "Ada Lovelace", may be empty)
    name: String,

    /// Phone number without whitespace (may be empty)
    phone: String,
}

impl Assignment {
    /// Create a valid [`Assignment`] if it is possible to do so with the
    /// values passed in
    pub fn from(
        mission: Mission,
        start: NaiveDateTime,
        end: NaiveDateTime,
        person_id: PersonId,
        name: &str,
        phone: &str,
    ) -> Result<Assignment, AssignmentError> {
        if start >= end {
            return Err(AssignmentError::InvalidInterval { start, end });
        }
        Ok(Assignment {
            mission,
            start,
            end,
            person_id,
            name: name.trim().to_string(),
            phone: normalise_phone(Some(phone)),
        })
    }

    pub fn mission(&self) -> &Mission {
        &self.mission
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn person_id(&self) -> &PersonId {
        &self.person_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Whether the assignment strictly overlaps `[start, end]`
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        self.end > start && self.start < end
    }
}

/// Used only by the custom deserialiser (to make it simpler)
#[derive(Deserialize, Debug)]
struct RawAssignment {
    mission: Mission,
    start: NaiveDateTime,
    end: NaiveDateTime,
    person_id: PersonId,
    name: String,
    #[serde(default)]
    phone: String,
}

impl<'de> Deserialize<'de> for Assignment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawAssignment::deserialize(deserializer)?;
        Assignment::from(
            raw.mission,
            raw.start,
            raw.end,
            raw.person_id,
            &raw.name,
            &raw.phone,
        )
        .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_helpers::at;

    fn build(start: &str, end: &str) -> Result<Assignment, AssignmentError> {
        Assignment::from(
            Mission::from("Bar").unwrap(),
            at(start),
            at(end),
            PersonId::from("ada@example.org").unwrap(),
            " Ada Lovelace ",
            "06 00 00 00 00",
        )
    }

    #[test]
    fn from() {
        let assignment = build("2025-08-01 10:00", "2025-08-01 12:00").unwrap();
        assert_eq!(assignment.name(), "Ada Lovelace");
        assert_eq!(assignment.phone(), "0600000000");

        assert_eq!(
            build("2025-08-01 12:00", "2025-08-01 12:00"),
            Err(AssignmentError::InvalidInterval {
                start: at("2025-08-01 12:00"),
                end: at("2025-08-01 12:00"),
            })
        );
        assert!(build("2025-08-01 13:00", "2025-08-01 12:00").is_err());
    }

    #[test]
    fn blank_name_is_allowed() {
        let assignment = Assignment::from(
            Mission::from("Bar").unwrap(),
            at("2025-08-01 10:00"),
            at("2025-08-01 12:00"),
            PersonId::from("ada@example.org").unwrap(),
            "   ",
            "0600",
        )
        .unwrap();
        assert_eq!(assignment.name(), "");
    }

    #[test]
    fn overlaps_is_strict() {
        let assignment = build("2025-08-01 10:00", "2025-08-01 12:00").unwrap();
        assert!(assignment.overlaps(at("2025-08-01 11:00"), at("2025-08-01 13:00")));
        assert!(!assignment.overlaps(at("2025-08-01 12:00"), at("2025-08-01 13:00")));
        assert!(!assignment.overlaps(at("2025-08-01 08:00"), at("2025-08-01 10:00")));
    }

    #[test]
    fn deserialise_validates() {
        let json = r#"{
            "mission": "Bar",
            "start": "2025-08-01T10:00:00",
            "end": "2025-08-01T09:00:00",
            "person_id": "ada@example.org",
            "name": "Ada"
        }"#;
        assert!(serde_json::from_str::<Assignment>(json).is_err());

        let json = json.replace("T09:00:00", "T11:00:00");
        let assignment: Assignment = serde_json::from_str(&json).unwrap();
        assert_eq!(assignment.phone(), "");
    }
}
