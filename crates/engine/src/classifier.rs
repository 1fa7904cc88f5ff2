/// One decision-list rule: any keyword present selects the label.
#[derive(Debug, Clone, Copy)]
pub struct ClassifyRule {
    pub keywords: &'static [&'static str],
    pub label: &'static str,
}

/// Ordered decision list for document types.
///
/// First rule with any keyword present wins; a document matching several
/// categories gets the earliest-listed one. This is not a scored classifier.
pub const CLASSIFY_RULES: &[ClassifyRule] = &[
    ClassifyRule {
        keywords: &["non-disclosure", "confidential"],
        label: "NDA",
    },
    ClassifyRule {
        keywords: &["employment", "employee"],
        label: "Employment Agreement",
    },
    ClassifyRule {
        keywords: &["lease", "landlord", "tenant"],
        label: "Lease Agreement",
    },
    ClassifyRule {
        keywords: &["service", "services"],
        label: "Service Agreement",
    },
    ClassifyRule {
        keywords: &["purchase", "supplier"],
        label: "Purchase Agreement",
    },
];

/// Returned when no rule matches; always valid, including for empty input.
pub const FALLBACK_LABEL: &str = "General Contract";

/// Keyword decision list over lowercased text.
#[derive(Debug, Clone, Copy)]
pub struct DocumentClassifier {
    rules: &'static [ClassifyRule],
}

impl DocumentClassifier {
    #[must_use]
    pub const fn new(rules: &'static [ClassifyRule]) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn classify(&self, text: &str) -> &'static str {
        let lowered = text.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|kw| lowered.contains(kw)))
            .map_or(FALLBACK_LABEL, |rule| rule.label)
    }
}

impl Default for DocumentClassifier {
    fn default() -> Self {
        Self::new(CLASSIFY_RULES)
    }
}
