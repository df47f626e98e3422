// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! The run: ingest, plan, lay out, render and write every document
//!

use crate::{
    Config, DocumentError, PlannerError, claim_path, document_path, read_assignments,
    write_document,
};
use log::{error, info, warn};
use mission_timeline_core::{
    Assignment, DayPlan, Mission, MissionGroup, group_by_mission, plan_mission,
};
use mission_timeline_renderer::{LayoutEngine, OutputFormat, render};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// What a run did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Every document written, in the order written
    pub written: Vec<PathBuf>,

    /// Days touched by an assignment that had nothing to draw
    pub skipped_days: usize,

    /// Documents that could not be rendered or written
    pub failures: usize,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failures == 0
    }
}

/// Run with the given config, reading the configured input file
pub fn run(config: &Config) -> Result<RunSummary, PlannerError> {
    config.validate()?;
    let assignments = read_assignments(config.input()?, config)?;
    run_assignments(assignments, config)
}

/// Plan and write the documents for already loaded assignments.  A document
/// that fails is logged and counted, and the run carries on.
pub fn run_assignments(
    assignments: Vec<Assignment>,
    config: &Config,
) -> Result<RunSummary, PlannerError> {
    let engine = LayoutEngine::new(config.layout, config.palette()?);
    let groups = group_by_mission(assignments);
    warn_on_shared_slugs(&groups);

    let mut summary = RunSummary::default();
    let mut claimed = HashSet::new();
    for group in &groups {
        let mission_plan = plan_mission(group);
        summary.skipped_days += mission_plan.skipped_days.len();
        for plan in &mission_plan.plans {
            let path = claim_path(
                document_path(&config.output_dir, &plan.mission, plan.day, config.format),
                &mut claimed,
            );
            match write_plan(&engine, plan, config.format, &path) {
                Ok(()) => {
                    info!("Generated {}", path.display());
                    summary.written.push(path);
                }
                Err(error) => {
                    error!("{} {}: {error}", plan.mission, plan.day);
                    summary.failures += 1;
                }
            }
        }
    }

    info!(
        "{} document(s) written, {} day(s) with nothing to draw, {} failure(s)",
        summary.written.len(),
        summary.skipped_days,
        summary.failures
    );
    Ok(summary)
}

/// Lay out, render and write one document
fn write_plan(
    engine: &LayoutEngine,
    plan: &DayPlan,
    format: OutputFormat,
    path: &Path,
) -> Result<(), DocumentError> {
    let document = engine.layout(plan);
    let bytes = render(&document, format)?;
    write_document(path, &bytes)?;
    Ok(())
}

/// Missions whose names only differ in case, accents or punctuation end up in
/// the same directory (see [`claim_path`] for documents of the same day)
fn warn_on_shared_slugs(groups: &[MissionGroup]) {
    let mut by_slug: HashMap<String, &Mission> = HashMap::new();
    for group in groups {
        let slug = group.mission.slug();
        match by_slug.get(&slug) {
            Some(other) => warn!(
                "Missions `{other}` and `{}` share the directory `{slug}`",
                group.mission
            ),
            None => {
                by_slug.insert(slug, &group.mission);
            }
        }
    }
}
