use std::io::Write;

use serde::{Deserialize, Serialize};
use uuidfix_core::CorrectionReport;

use crate::error::Result;
use crate::process::{FileOutcome, FileStatus, Mode, process_file};
use crate::targets::Target;

/// Outcome of a whole run, in target order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub files: Vec<FileOutcome>,
    pub files_fixed: usize,
    pub files_needing_fix: usize,
    /// Replacement counters summed over every changed file.
    pub totals: CorrectionReport,
}

impl RunSummary {
    fn push(&mut self, outcome: FileOutcome) {
        match &outcome.status {
            FileStatus::Fixed { report } => {
                self.files_fixed += 1;
                self.totals.merge(report);
            }
            FileStatus::NeedsFix { report } => {
                self.files_needing_fix += 1;
                self.totals.merge(report);
            }
            FileStatus::NotFound | FileStatus::Unchanged => {}
        }
        self.files.push(outcome);
    }

    /// True when a check run found at least one file to correct.
    pub fn needs_fix(&self) -> bool {
        self.files_needing_fix > 0
    }

    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Process every target in order.
///
/// Stops at the first read or write failure; targets after it are not touched.
pub fn process_all(targets: &[Target], mode: Mode, out: &mut impl Write) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for target in targets {
        log::debug!("target {} -> {}", target.name, target.path.display());
        let outcome = process_file(target, mode, out)?;
        summary.push(outcome);
    }

    Ok(summary)
}
