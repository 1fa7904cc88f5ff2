use triage_protocol::Clause;

/// A clause keyword: lowercase match key plus display title.
#[derive(Debug, Clone, Copy)]
pub struct ClauseKeyword {
    pub key: &'static str,
    pub title: &'static str,
}

/// Fixed keyword table. Order drives output order, not priority — clauses
/// are emitted in table order regardless of where they appear in the
/// document.
pub const CLAUSE_KEYWORDS: &[ClauseKeyword] = &[
    ClauseKeyword {
        key: "term",
        title: "Term",
    },
    ClauseKeyword {
        key: "termination",
        title: "Termination",
    },
    ClauseKeyword {
        key: "payment",
        title: "Payment",
    },
    ClauseKeyword {
        key: "liability",
        title: "Liability",
    },
    ClauseKeyword {
        key: "governing law",
        title: "Governing Law",
    },
    ClauseKeyword {
        key: "confidential",
        title: "Confidentiality",
    },
];

/// Context characters kept on each side of a keyword match.
pub const DEFAULT_WINDOW: usize = 80;

/// Placeholder clause emitted when no keyword matches anywhere.
pub const PLACEHOLDER_TITLE: &str = "Summary";
pub const PLACEHOLDER_TEXT: &str = "No obvious clauses detected in demo mode.";

/// Extracts bounded-context snippets around the first occurrence of each
/// clause keyword.
///
/// Matching runs over an ASCII-lowercased copy (byte offsets are preserved,
/// so the snippet slices the original-case text); the keys are ASCII.
/// Overlapping windows between adjacent matches are allowed — there is no
/// deduplication or merging.
#[derive(Debug, Clone, Copy)]
pub struct ClauseExtractor {
    keywords: &'static [ClauseKeyword],
    window: usize,
}

impl ClauseExtractor {
    #[must_use]
    pub const fn new(keywords: &'static [ClauseKeyword], window: usize) -> Self {
        Self { keywords, window }
    }

    #[must_use]
    pub fn extract(&self, text: &str) -> Vec<Clause> {
        let lowered = text.to_ascii_lowercase();
        let mut clauses = Vec::new();

        for keyword in self.keywords {
            let Some(start) = lowered.find(keyword.key) else {
                continue;
            };
            let end = start + keyword.key.len();
            let snippet = window_slice(text, start, end, self.window);
            clauses.push(Clause {
                title: keyword.title.to_string(),
                text: snippet.trim().to_string(),
            });
        }

        if clauses.is_empty() {
            clauses.push(Clause {
                title: PLACEHOLDER_TITLE.to_string(),
                text: PLACEHOLDER_TEXT.to_string(),
            });
        }

        clauses
    }
}

impl Default for ClauseExtractor {
    fn default() -> Self {
        Self::new(CLAUSE_KEYWORDS, DEFAULT_WINDOW)
    }
}

/// Slice `window` characters of context on each side of the matched byte
/// span, clipped to the text boundaries. Character-counted, so multi-byte
/// input cannot split a code point.
fn window_slice(text: &str, match_start: usize, match_end: usize, window: usize) -> &str {
    let start = text[..match_start]
        .char_indices()
        .rev()
        .take(window)
        .last()
        .map_or(match_start, |(idx, _)| idx);
    let end = text[match_end..]
        .char_indices()
        .nth(window)
        .map_or(text.len(), |(idx, _)| match_end + idx);
    &text[start..end]
}
