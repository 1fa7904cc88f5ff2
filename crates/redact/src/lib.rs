//! PII redaction for contract text.
//!
//! Redaction runs before every other stage so that personally identifiable
//! information never reaches classification, clause extraction, or any
//! extended-path model call. This is the single mandatory security boundary
//! of the pipeline.
//!
//! The detection is best-effort: a coarse proper-name heuristic (exactly two
//! consecutive capitalized words) plus an email-shaped token pattern. Longer
//! title-case runs ("This Employment Agreement") read as document prose, not
//! names, and are left intact. No locale or Unicode-casing awareness.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Replacement token inserted for every PII match.
pub const REDACTION_MARKER: &str = "[REDACTED]";

/// Sentinel string checked by the request boundary before extended
/// processing. Core triage does not consult it.
pub const PII_SENTINEL: &str = "pii_detected";

/// A named branch of the compound PII pattern.
#[derive(Debug, Clone, Copy)]
pub struct PiiBranch {
    pub name: &'static str,
    pub pattern: &'static str,
}

/// Branch table for the compound pattern, in alternation order.
///
/// Order is significant: branches are joined into a single alternation and
/// scanned leftmost-first with no overlap. The name branch matches maximal
/// capitalized-word runs so a run's length can gate the replacement; only
/// exactly-two-word runs are treated as names.
pub const PII_BRANCHES: &[PiiBranch] = &[
    PiiBranch {
        name: "name_run",
        pattern: r"\b[A-Z][a-z]+(?: [A-Z][a-z]+)+\b",
    },
    PiiBranch {
        name: "email",
        pattern: r"\b[\w.-]+@[\w.-]+\b",
    },
];

static PII_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let alternation = PII_BRANCHES
        .iter()
        .map(|branch| format!("({})", branch.pattern))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&alternation).expect("PII branch table compiles")
});

/// Exactly two capitalized words, the proper-name shape.
fn is_name_pair(candidate: &str) -> bool {
    candidate.split(' ').count() == 2
}

/// Applies the compound PII pattern to raw text.
///
/// Total over any input, including the empty string; never fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct Redactor;

impl Redactor {
    #[must_use]
    pub fn redact(&self, text: &str) -> String {
        PII_PATTERN
            .replace_all(text, |caps: &Captures<'_>| {
                let matched = &caps[0];
                if caps.get(1).is_some() && !is_name_pair(matched) {
                    // Title-case run of three or more words: keep as prose.
                    matched.to_string()
                } else {
                    REDACTION_MARKER.to_string()
                }
            })
            .into_owned()
    }
}

/// Redact with a default [`Redactor`].
#[must_use]
pub fn redact(text: &str) -> String {
    Redactor.redact(text)
}

/// Does sanitized text still carry the abort sentinel?
#[must_use]
pub fn contains_pii_sentinel(text: &str) -> bool {
    text.contains(PII_SENTINEL)
}
