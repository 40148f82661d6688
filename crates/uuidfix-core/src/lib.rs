#![doc = r#"
Positional correction of malformed UUID hex pairs.

Consumers should go through `uuidfix-io`, which adds file handling on top of
the pure text passes defined here.
"#]

pub mod correct;
pub mod mapping;
pub mod report;

pub use correct::{Correction, correct, fix_prefix, fix_suffix};
pub use mapping::{PREFIX_MAP, lookup};
pub use report::CorrectionReport;
