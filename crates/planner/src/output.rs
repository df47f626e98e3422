// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Writing documents to disk
//!

use log::{debug, warn};
use mission_timeline_core::{Mission, OperationalDay};
use mission_timeline_renderer::OutputFormat;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can arise when writing a document
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Unable to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unable to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unable to move {from} to {to}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}

/// `<output_dir>/<mission slug>/<YYYY-MM-DD>.<ext>`
pub fn document_path(
    output_dir: &Path,
    mission: &Mission,
    day: OperationalDay,
    format: OutputFormat,
) -> PathBuf {
    output_dir
        .join(mission.slug())
        .join(format!("{day}.{}", format.extension()))
}

/// Reserve `path` for one document of a run.  Missions whose names share a
/// slug can want the same path on the same day; later ones get `_2`, `_3`, ...
/// added to the file name so no document replaces another.
pub fn claim_path(path: PathBuf, claimed: &mut HashSet<PathBuf>) -> PathBuf {
    let mut candidate = path.clone();
    let mut number = 1;
    while claimed.contains(&candidate) {
        number += 1;
        candidate = numbered_path(&path, number);
    }
    if candidate != path {
        warn!(
            "{} is taken by another mission, using {}",
            path.display(),
            candidate.display()
        );
    }
    claimed.insert(candidate.clone());
    candidate
}

/// `dir/name.ext` as `dir/name_<number>.ext`
fn numbered_path(path: &Path, number: usize) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default();
    let file_name = match path.extension() {
        Some(extension) => format!("{stem}_{number}.{}", extension.to_string_lossy()),
        None => format!("{stem}_{number}"),
    };
    path.with_file_name(file_name)
}

/// Write a whole document.  The bytes go to a temporary file next to `path`
/// that is then moved into place, so `path` is never left half written.
/// Missing directories are created.
pub fn write_document(path: &Path, bytes: &[u8]) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let mut temp_path = path.as_os_str().to_owned();
    temp_path.push(".tmp");
    let temp_path = PathBuf::from(temp_path);

    fs::write(&temp_path, bytes).map_err(|source| {
        let _ = fs::remove_file(&temp_path);
        OutputError::Write {
            path: temp_path.clone(),
            source,
        }
    })?;

    fs::rename(&temp_path, path).map_err(|source| {
        let _ = fs::remove_file(&temp_path);
        OutputError::Rename {
            from: temp_path.clone(),
            to: path.to_path_buf(),
            source,
        }
    })?;

    debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn path_layout() {
        let mission = Mission::from("Accueil Général").unwrap();
        let day = OperationalDay::from_date(NaiveDate::from_ymd_opt(2025, 8, 2).unwrap());
        let path = document_path(Path::new("planning"), &mission, day, OutputFormat::Svg);
        assert_eq!(path, PathBuf::from("planning/accueil_general/2025-08-02.svg"));

        let path = document_path(Path::new("out"), &mission, day, OutputFormat::Json);
        assert_eq!(path, PathBuf::from("out/accueil_general/2025-08-02.json"));
    }

    #[test]
    fn claimed_paths_are_numbered() {
        let mut claimed = HashSet::new();
        let path = PathBuf::from("planning/cafe/2025-08-01.svg");
        assert_eq!(claim_path(path.clone(), &mut claimed), path);
        assert_eq!(
            claim_path(path.clone(), &mut claimed),
            PathBuf::from("planning/cafe/2025-08-01_2.svg")
        );
        assert_eq!(
            claim_path(path, &mut claimed),
            PathBuf::from("planning/cafe/2025-08-01_3.svg")
        );

        let other = PathBuf::from("planning/cafe/2025-08-02.svg");
        assert_eq!(claim_path(other.clone(), &mut claimed), other);
    }

    #[test]
    fn write_creates_directories_and_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bar").join("2025-08-01.svg");

        write_document(&path, b"first").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"first");

        // Writing again replaces the document
        write_document(&path, b"second").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"second");

        let names: Vec<String> = fs::read_dir(dir.path().join("bar"))
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["2025-08-01.svg"]);
    }

    #[test]
    fn write_fails_when_directory_cannot_be_created() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("bar");
        fs::write(&blocker, b"a file, not a directory").unwrap();

        let result = write_document(&blocker.join("2025-08-01.svg"), b"svg");
        assert!(matches!(result, Err(OutputError::CreateDir { .. })));
    }
}
