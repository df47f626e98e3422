// SPDX-License-Identifier: MIT

//!
//! Person rows
//!

use crate::{FilledBox, Line, TextOut, colour::Colour};
use mission_timeline_core::{ClippedAssignment, PersonId};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::Debug;

/// The clipped assignments of one person within a document
#[derive(Debug, Clone, PartialEq)]
pub struct PersonRow<'a> {
    pub person_id: &'a PersonId,
    pub tasks: Vec<&'a ClippedAssignment>,
}

impl PersonRow<'_> {
    /// `phone - name`, taken from the person's first assignment
    pub fn label(&self) -> String {
        match self.tasks.first() {
            Some(task) => format!("{} - {}", task.phone(), task.name()),
            None => String::new(),
        }
    }
}

/// Group clipped assignments by person.  Rows are in order of each person's
/// first appearance, and a person's intervals keep their input order (they
/// are never merged).
pub fn group_by_person(tasks: &[ClippedAssignment]) -> Vec<PersonRow<'_>> {
    let mut rows: Vec<PersonRow> = Vec::new();
    let mut index_of: HashMap<&PersonId, usize> = HashMap::new();
    for task in tasks {
        match index_of.get(task.person_id()) {
            Some(&index) => rows[index].tasks.push(task),
            None => {
                index_of.insert(task.person_id(), rows.len());
                rows.push(PersonRow {
                    person_id: task.person_id(),
                    tasks: vec![task],
                });
            }
        }
    }
    rows
}

/// Information needed to draw one bar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarOut {
    pub bar: FilledBox,

    /// `None` when the bar is too narrow for its label
    pub label: Option<TextOut>,
}

/// Information needed to draw one person's row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowOut {
    pub person_id: PersonId,

    /// The slot on the page (0 is the top row)
    pub slot: usize,
    pub colour: Colour,
    pub label: TextOut,
    pub bars: Vec<BarOut>,
    pub separator: Line,
}
