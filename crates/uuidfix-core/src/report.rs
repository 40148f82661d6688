use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Deterministic counters describing what a correction changed.
///
/// Notes:
/// - Contains no wall-clock data, so two runs over the same text produce the
///   same report.
/// - `by_prefix` is keyed by the invalid prefix and sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionReport {
    /// Replacements made by the `<prefix>eebc99` pass.
    pub prefix_fixes: usize,

    /// Replacements made by the `380<prefix>` pass.
    pub suffix_fixes: usize,

    /// Replacements grouped by invalid prefix, across both passes.
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub by_prefix: BTreeMap<String, usize>,
}

impl CorrectionReport {
    pub fn total(&self) -> usize {
        self.prefix_fixes + self.suffix_fixes
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub(crate) fn record(&mut self, prefix: &str) {
        *self.by_prefix.entry(prefix.to_string()).or_insert(0) += 1;
    }

    /// Fold another report into this one.
    pub fn merge(&mut self, other: &CorrectionReport) {
        self.prefix_fixes += other.prefix_fixes;
        self.suffix_fixes += other.suffix_fixes;
        for (prefix, n) in &other.by_prefix {
            *self.by_prefix.entry(prefix.clone()).or_insert(0) += n;
        }
    }
}
