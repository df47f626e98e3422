// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Reading assignments from a spreadsheet export
//!
//! Both CSV files and workbooks (`.xlsx`, `.xlsm`, `.xls`, `.ods`, first sheet
//! only) are read.  The first row is the header row.  Columns are found by
//! name (see [`ColumnNames`]) so their order doesn't matter, and extra columns
//! are ignored.  Row numbers in errors are spreadsheet rows, so the header is
//! row 1 and the first assignment is row 2.
//!

use crate::{ColumnNames, Config};
use calamine::{Data, DataType, Reader, open_workbook_auto};
use chrono::{DateTime, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info};
use mission_timeline_core::{Assignment, AssignmentError, Mission, PersonId};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Workbook file extensions (anything else is read as CSV)
const WORKBOOK_EXTENSIONS: [&str; 4] = ["xlsx", "xlsm", "xls", "ods"];

/// How date cells in a workbook are turned into text before parsing
const WORKBOOK_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Errors that can arise when reading assignments.  All of them stop the run.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Unable to open {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unable to read workbook {path}: {source}")]
    Workbook {
        path: PathBuf,
        source: calamine::Error,
    },

    #[error("Workbook {0} has no sheets")]
    NoSheet(PathBuf),

    #[error("The `{0}` column is missing")]
    MissingColumn(String),

    #[error("Row {row}: the `{field}` field is empty")]
    MissingField { row: usize, field: String },

    #[error("Row {row}: `{value}` in `{field}` is not a recognised date and time")]
    Timestamp {
        row: usize,
        field: String,
        value: String,
    },

    #[error("Row {row}: {source}")]
    Assignment {
        row: usize,
        source: AssignmentError,
    },
}

/// One row of cells, whatever file it came from
trait Cells {
    fn cell(&self, index: usize) -> Option<&str>;
}

impl Cells for StringRecord {
    fn cell(&self, index: usize) -> Option<&str> {
        self.get(index)
    }
}

impl Cells for Vec<String> {
    fn cell(&self, index: usize) -> Option<&str> {
        self.get(index).map(String::as_str)
    }
}

/// Where each column is in the header row
#[derive(Debug, Clone, Copy)]
struct ColumnIndices {
    mission: usize,
    start: usize,
    end: usize,
    email: usize,
    first_name: usize,
    last_name: usize,
    phone: usize,

    /// Only looked up when rows are filtered by category
    category: Option<usize>,
}

impl ColumnIndices {
    fn from<'a>(
        headers: impl Iterator<Item = &'a str> + Clone,
        names: &ColumnNames,
        filter: bool,
    ) -> Result<Self, IngestError> {
        let find = |name: &str| {
            headers
                .clone()
                .position(|header| header.trim() == name)
                .ok_or_else(|| IngestError::MissingColumn(name.to_string()))
        };
        Ok(Self {
            mission: find(&names.mission)?,
            start: find(&names.start)?,
            end: find(&names.end)?,
            email: find(&names.email)?,
            first_name: find(&names.first_name)?,
            last_name: find(&names.last_name)?,
            phone: find(&names.phone)?,
            category: if filter {
                Some(find(&names.category)?)
            } else {
                None
            },
        })
    }
}

/// Whether a file is read as a workbook rather than as CSV
pub fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| {
            WORKBOOK_EXTENSIONS
                .iter()
                .any(|known| extension.eq_ignore_ascii_case(known))
        })
}

/// Read every assignment in a CSV file or workbook (chosen by extension)
pub fn read_assignments(path: &Path, config: &Config) -> Result<Vec<Assignment>, IngestError> {
    let assignments = if is_workbook(path) {
        read_workbook(path, config)?
    } else {
        let file = File::open(path).map_err(|source| IngestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse_assignments(file, config)?
    };
    info!(
        "Read {} assignment(s) from {}",
        assignments.len(),
        path.display()
    );
    Ok(assignments)
}

/// Parse every assignment from CSV data, in input order.  Rows in the
/// excluded category (if one is configured) are skipped.
pub fn parse_assignments<R: Read>(
    reader: R,
    config: &Config,
) -> Result<Vec<Assignment>, IngestError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let records = reader
        .into_records()
        .map(|record| record.map_err(IngestError::from));
    assignments_from_rows(headers.iter().map(String::as_str), records, config)
}

/// Parse every assignment on the first sheet of a workbook
fn read_workbook(path: &Path, config: &Config) -> Result<Vec<Assignment>, IngestError> {
    let workbook_error = |source| IngestError::Workbook {
        path: path.to_path_buf(),
        source,
    };
    let mut workbook = open_workbook_auto(path).map_err(workbook_error)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::NoSheet(path.to_path_buf()))?
        .map_err(workbook_error)?;

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect::<Vec<String>>());
    let headers = rows.next().unwrap_or_default();
    let records = rows.map(Ok);
    assignments_from_rows(headers.iter().map(String::as_str), records, config)
}

/// The text of a workbook cell as it would appear in a CSV export.  Date cells
/// are written out in full, and whole numbers (e.g. phone numbers typed as
/// numbers) lose their `.0`.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::DateTime(_) => cell
            .as_datetime()
            .map(|timestamp| timestamp.format(WORKBOOK_TIMESTAMP_FORMAT).to_string())
            .unwrap_or_else(|| cell.to_string()),
        Data::Float(value) if value.fract() == 0.0 && value.abs() < 1e15 => {
            format!("{}", *value as i64)
        }
        other => other.to_string(),
    }
}

/// Turn the data rows into assignments, in order, skipping blank rows and rows
/// in the excluded category
fn assignments_from_rows<'a, R: Cells>(
    headers: impl Iterator<Item = &'a str> + Clone,
    records: impl Iterator<Item = Result<R, IngestError>>,
    config: &Config,
) -> Result<Vec<Assignment>, IngestError> {
    let excluded = config.exclude_category.as_deref().map(str::trim);
    let columns = ColumnIndices::from(headers, &config.columns, excluded.is_some())?;

    let mut assignments = Vec::new();
    let mut excluded_count = 0;
    for (index, record) in records.enumerate() {
        let record = record?;
        let row = index + 2;

        if is_blank(&record, &columns) {
            continue;
        }

        if let (Some(excluded), Some(category)) = (excluded, columns.category) {
            if record.cell(category).map(str::trim) == Some(excluded) {
                excluded_count += 1;
                continue;
            }
        }

        assignments.push(parse_row(&record, row, &columns, config)?);
    }

    if excluded_count > 0 {
        debug!("Left out {excluded_count} row(s) in the excluded category");
    }
    Ok(assignments)
}

/// Whether every column that is read is empty (e.g. trailing rows of a sheet)
fn is_blank(record: &impl Cells, columns: &ColumnIndices) -> bool {
    [
        columns.mission,
        columns.start,
        columns.end,
        columns.email,
        columns.first_name,
        columns.last_name,
        columns.phone,
    ]
    .into_iter()
    .all(|index| optional(record, index).is_empty())
}

/// Turn one record into an [`Assignment`]
fn parse_row(
    record: &impl Cells,
    row: usize,
    columns: &ColumnIndices,
    config: &Config,
) -> Result<Assignment, IngestError> {
    let names = &config.columns;
    let missing = |field: &str| IngestError::MissingField {
        row,
        field: field.to_string(),
    };

    let mission = Mission::from(required(record, columns.mission, row, &names.mission)?)
        .map_err(|_| missing(&names.mission))?;
    let start = timestamp(record, columns.start, row, &names.start, config)?;
    let end = timestamp(record, columns.end, row, &names.end, config)?;
    let person_id = PersonId::from(required(record, columns.email, row, &names.email)?)
        .map_err(|_| missing(&names.email))?;
    let name = format!(
        "{} {}",
        optional(record, columns.first_name),
        optional(record, columns.last_name)
    );
    let phone = optional(record, columns.phone);

    Assignment::from(mission, start, end, person_id, &name, phone)
        .map_err(|source| IngestError::Assignment { row, source })
}

/// A cell that must hold something
fn required<'a>(
    record: &'a impl Cells,
    index: usize,
    row: usize,
    field: &str,
) -> Result<&'a str, IngestError> {
    record
        .cell(index)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| IngestError::MissingField {
            row,
            field: field.to_string(),
        })
}

/// A cell that may be blank or absent (short rows)
fn optional(record: &impl Cells, index: usize) -> &str {
    record.cell(index).map(str::trim).unwrap_or_default()
}

fn timestamp(
    record: &impl Cells,
    index: usize,
    row: usize,
    field: &str,
    config: &Config,
) -> Result<NaiveDateTime, IngestError> {
    let value = required(record, index, row, field)?;
    parse_timestamp(value, &config.timestamp_formats).ok_or_else(|| IngestError::Timestamp {
        row,
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Parse a timestamp with the first format that fits, falling back to RFC 3339
/// (whose offset is dropped, keeping the wall-clock time)
pub fn parse_timestamp(value: &str, formats: &[String]) -> Option<NaiveDateTime> {
    formats
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|timestamp| timestamp.naive_local())
        })
}
