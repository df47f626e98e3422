// SPDX-License-Identifier: MIT

//!
//! The mission type, its directory-safe slug, and grouping assignments by
//! mission
//!

use crate::Assignment;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Slug used when a mission name has no character that survives sanitising
pub const FALLBACK_MISSION_SLUG: &str = "mission";

/// Errors that can arise in relation to a [`Mission`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MissionError {
    #[error("Mission cannot be empty")]
    Empty,
}

/// The [`Mission`] type.  The value can be any string apart from one which
/// when trimmed of trailing and leading whitespace is empty.
#[derive(derive_more::Display, Serialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Mission(String);

impl Mission {
    /// Create and initialise a new mission if it will be valid
    pub fn from<S: ToString>(mission: S) -> Result<Self, MissionError> {
        let mission = mission.to_string();
        if mission.trim().is_empty() {
            Err(MissionError::Empty)
        } else {
            Ok(Mission(mission.trim().to_string()))
        }
    }

    /// Get the underlying `&str`
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The directory-safe form of the mission name.
    ///
    /// Lowercases, folds accented characters to their ASCII base letter,
    /// replaces every run of characters outside `[a-z0-9-]` with a single `_`
    /// and strips leading/trailing `_`.
    pub fn slug(&self) -> String {
        let folded: String = self
            .0
            .to_lowercase()
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .collect();

        let mut slug = String::with_capacity(folded.len());
        let mut in_run = false;
        for c in folded.chars() {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
                slug.push(c);
                in_run = false;
            } else if !in_run {
                slug.push('_');
                in_run = true;
            }
        }

        let slug = slug.trim_matches('_');
        if slug.is_empty() {
            FALLBACK_MISSION_SLUG.to_string()
        } else {
            slug.to_string()
        }
    }
}

impl<'de> Deserialize<'de> for Mission {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        Mission::from(string).map_err(serde::de::Error::custom)
    }
}

/// All the assignments of one mission, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionGroup {
    pub mission: Mission,
    pub assignments: Vec<Assignment>,
}

/// Partition assignments by mission.
///
/// Missions come out in order of first appearance and each mission keeps its
/// assignments in input order, so identical input always gives identical
/// groups.
pub fn group_by_mission(assignments: Vec<Assignment>) -> Vec<MissionGroup> {
    let mut groups: Vec<MissionGroup> = Vec::new();
    let mut index_of: HashMap<Mission, usize> = HashMap::new();
    for assignment in assignments {
        match index_of.get(assignment.mission()) {
            Some(&i) => groups[i].assignments.push(assignment),
            None => {
                index_of.insert(assignment.mission().clone(), groups.len());
                groups.push(MissionGroup {
                    mission: assignment.mission().clone(),
                    assignments: vec![assignment],
                });
            }
        }
    }
    groups
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{PersonId, test_helpers::at};

    fn assignment(mission: &str, person: &str) -> Assignment {
        Assignment::from(
            Mission::from(mission).unwrap(),
            at("2025-08-01 10:00"),
            at("2025-08-01 12:00"),
            PersonId::from(person).unwrap(),
            "Ada Lovelace",
            "0600000000",
        )
        .unwrap()
    }

    #[test]
    fn from() {
        assert!(Mission::from("").is_err());
        assert!(Mission::from("   ").is_err());
        assert_eq!(Mission::from(" Bar ").unwrap(), Mission::from("Bar").unwrap());
    }

    #[test]
    fn slug_folds_accents_and_case() {
        let mission = Mission::from("Accueil Général - Entrée Public").unwrap();
        assert_eq!(mission.slug(), "accueil_general_-_entree_public");
    }

    #[test]
    fn slug_collapses_runs_and_strips_edges() {
        let mission = Mission::from("  (Bar)  &  Cuisine!! ").unwrap();
        assert_eq!(mission.slug(), "bar_cuisine");

        let mission = Mission::from("Çà où l'été").unwrap();
        assert_eq!(mission.slug(), "ca_ou_l_ete");
    }

    #[test]
    fn slug_falls_back_when_nothing_survives() {
        let mission = Mission::from("???").unwrap();
        assert_eq!(mission.slug(), FALLBACK_MISSION_SLUG);
    }

    #[test]
    fn grouping_keeps_first_appearance_order() {
        let groups = group_by_mission(vec![
            assignment("Bar", "a@example.org"),
            assignment("Accueil", "b@example.org"),
            assignment("Bar", "c@example.org"),
        ]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].mission.as_str(), "Bar");
        assert_eq!(groups[1].mission.as_str(), "Accueil");
        let people: Vec<&str> = groups[0]
            .assignments
            .iter()
            .map(|a| a.person_id().as_str())
            .collect();
        assert_eq!(people, vec!["a@example.org", "c@example.org"]);
    }
}
