use std::fs;
use std::io::Write;

use serde::{Deserialize, Serialize};
use uuidfix_core::{CorrectionReport, correct};

use crate::error::{FixError, Result};
use crate::targets::Target;

/// Whether corrected content is written back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Rewrite files in place when they change.
    #[default]
    Write,
    /// Report what would change; never touch the file.
    Check,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    NotFound,
    Unchanged,
    Fixed { report: CorrectionReport },
    NeedsFix { report: CorrectionReport },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOutcome {
    pub file: String,
    #[serde(flatten)]
    pub status: FileStatus,
}

impl FileOutcome {
    fn new(target: &Target, status: FileStatus) -> Self {
        Self {
            file: target.name.clone(),
            status,
        }
    }

    pub fn report(&self) -> Option<&CorrectionReport> {
        match &self.status {
            FileStatus::Fixed { report } | FileStatus::NeedsFix { report } => Some(report),
            FileStatus::NotFound | FileStatus::Unchanged => None,
        }
    }
}

/// Correct a single file, emitting one status line per step to `out`.
///
/// A missing file is reported and returned as [`FileStatus::NotFound`], not
/// as an error. Read and write failures are returned as errors. The file is
/// only rewritten (truncate and write, no temp file) when the corrected text
/// differs from what was read.
pub fn process_file(target: &Target, mode: Mode, out: &mut impl Write) -> Result<FileOutcome> {
    let name = &target.name;

    if !target.path.exists() {
        writeln!(out, "File not found: {name}")?;
        return Ok(FileOutcome::new(target, FileStatus::NotFound));
    }

    writeln!(out, "Processing {name}...")?;

    let content = fs::read_to_string(&target.path).map_err(|source| FixError::Read {
        path: target.path.clone(),
        source,
    })?;

    let fixed = correct(&content);

    if fixed.text == content {
        writeln!(out, "No changes needed for {name}")?;
        return Ok(FileOutcome::new(target, FileStatus::Unchanged));
    }

    let status = match mode {
        Mode::Write => {
            fs::write(&target.path, fixed.text.as_bytes()).map_err(|source| FixError::Write {
                path: target.path.clone(),
                source,
            })?;
            log::info!(
                "rewrote {} ({} replacement(s))",
                target.path.display(),
                fixed.report.total()
            );
            writeln!(out, "Fixed UUIDs in {name}")?;
            FileStatus::Fixed {
                report: fixed.report,
            }
        }
        Mode::Check => {
            writeln!(out, "UUIDs need fixing in {name}")?;
            FileStatus::NeedsFix {
                report: fixed.report,
            }
        }
    };

    Ok(FileOutcome::new(target, status))
}
