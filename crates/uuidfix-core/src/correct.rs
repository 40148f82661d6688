use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::mapping::{key_alternation, lookup};
use crate::report::CorrectionReport;

/// Literal that follows an invalid prefix at the start of a UUID.
pub const PREFIX_CONTEXT: &str = "eebc99";

/// Literal that precedes an invalid prefix near the end of a UUID.
pub const SUFFIX_CONTEXT: &str = "380";

// Both patterns are built from the table keys, so every match has a mapping.
static PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("({}){PREFIX_CONTEXT}", key_alternation()))
        .expect("prefix pattern built from static table keys")
});

static SUFFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("{SUFFIX_CONTEXT}({})", key_alternation()))
        .expect("suffix pattern built from static table keys")
});

/// Result of running both passes over a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correction<'a> {
    /// Corrected text. Borrowed when neither pass matched anything.
    pub text: Cow<'a, str>,
    pub report: CorrectionReport,
}

impl Correction<'_> {
    pub fn into_text(self) -> String {
        self.text.into_owned()
    }
}

/// Rewrite `<invalid>eebc99` to `<valid>eebc99`.
///
/// Only the two-character prefix changes; the trailing literal is kept.
pub fn fix_prefix<'a>(text: &'a str, report: &mut CorrectionReport) -> Cow<'a, str> {
    PREFIX_RE.replace_all(text, |caps: &Captures<'_>| {
        let invalid = &caps[1];
        match lookup(invalid) {
            Some(valid) => {
                report.prefix_fixes += 1;
                report.record(invalid);
                format!("{valid}{PREFIX_CONTEXT}")
            }
            None => caps[0].to_string(),
        }
    })
}

/// Rewrite `380<invalid>` to `380<valid>`.
pub fn fix_suffix<'a>(text: &'a str, report: &mut CorrectionReport) -> Cow<'a, str> {
    SUFFIX_RE.replace_all(text, |caps: &Captures<'_>| {
        let invalid = &caps[1];
        match lookup(invalid) {
            Some(valid) => {
                report.suffix_fixes += 1;
                report.record(invalid);
                format!("{SUFFIX_CONTEXT}{valid}")
            }
            None => caps[0].to_string(),
        }
    })
}

/// Run the prefix pass, then the suffix pass.
///
/// Replacement pairs are always valid hex, so a second call on the output
/// finds nothing to do.
pub fn correct(text: &str) -> Correction<'_> {
    let mut report = CorrectionReport::default();

    let text = match fix_prefix(text, &mut report) {
        Cow::Borrowed(s) => fix_suffix(s, &mut report),
        Cow::Owned(s) => Cow::Owned(fix_suffix(&s, &mut report).into_owned()),
    };

    log::debug!(
        "prefix pass: {} fix(es), suffix pass: {} fix(es)",
        report.prefix_fixes,
        report.suffix_fixes
    );

    Correction { text, report }
}
