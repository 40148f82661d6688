//! `uuidfix-io` is the public entrypoint for correcting malformed UUID prefixes
//! in files on disk.
//!
//! The text passes live in `uuidfix-core`; this crate adds:
//! - target resolution (default file list, base directory)
//! - per-file processing with status lines
//! - a serializable run summary

/// Error type shared by every fallible operation in this crate.
pub mod error;

/// Single-file processing.
pub mod process;

/// Multi-file driver and summary.
pub mod summary;

/// Target list resolution.
pub mod targets;

// Re-export the text passes.
#[doc(hidden)]
pub mod core {
    pub use uuidfix_core::correct::{PREFIX_CONTEXT, SUFFIX_CONTEXT};
    pub use uuidfix_core::{Correction, CorrectionReport, PREFIX_MAP, correct, lookup};
}

/// Convenience prelude for consumers.
pub mod prelude {
    pub use crate::core::{Correction, CorrectionReport, correct};
    pub use crate::error::{FixError, Result};
    pub use crate::process::{FileOutcome, FileStatus, Mode, process_file};
    pub use crate::summary::{RunSummary, process_all};
    pub use crate::targets::{DEFAULT_TARGETS, Target, resolve_targets};
}
