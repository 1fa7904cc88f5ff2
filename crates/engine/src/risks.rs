use triage_protocol::{RiskFinding, RiskLevel};

/// One independent risk heuristic.
///
/// A rule fires when every `requires_all` keyword is present and, when
/// `requires_any` is non-empty, at least one of those is present too.
#[derive(Debug, Clone, Copy)]
pub struct RiskRule {
    pub level: RiskLevel,
    pub description: &'static str,
    pub explanation: &'static str,
    pub requires_all: &'static [&'static str],
    pub requires_any: &'static [&'static str],
}

impl RiskRule {
    fn matches(&self, lowered: &str) -> bool {
        let all_present = self.requires_all.iter().all(|kw| lowered.contains(kw));
        let any_present =
            self.requires_any.is_empty() || self.requires_any.iter().any(|kw| lowered.contains(kw));
        all_present && any_present
    }
}

/// Fixed rule table, in output order. All applicable rules fire — this is
/// not first-match-wins like the classifier.
pub const RISK_RULES: &[RiskRule] = &[
    RiskRule {
        level: RiskLevel::High,
        description: "Potential unlimited liability exposure",
        explanation: "Contract mentions unlimited liability terms.",
        requires_all: &["unlimited", "liability"],
        requires_any: &[],
    },
    RiskRule {
        level: RiskLevel::Medium,
        description: "Indemnification obligations present",
        explanation: "Indemnification clause detected; review scope.",
        requires_all: &[],
        requires_any: &["indemnify", "indemnification"],
    },
    RiskRule {
        level: RiskLevel::Low,
        description: "Specific governing law clause",
        explanation: "Governing law set; confirm jurisdiction fit.",
        requires_all: &["governing law", "california"],
        requires_any: &[],
    },
];

/// Applies the risk rule table over lowercased text.
#[derive(Debug, Clone, Copy)]
pub struct RiskEvaluator {
    rules: &'static [RiskRule],
}

impl RiskEvaluator {
    #[must_use]
    pub const fn new(rules: &'static [RiskRule]) -> Self {
        Self { rules }
    }

    /// An empty result is valid — no default finding is synthesized.
    #[must_use]
    pub fn evaluate(&self, text: &str) -> Vec<RiskFinding> {
        let lowered = text.to_lowercase();
        self.rules
            .iter()
            .filter(|rule| rule.matches(&lowered))
            .map(|rule| RiskFinding {
                level: rule.level,
                description: rule.description.to_string(),
                explanation: rule.explanation.to_string(),
            })
            .collect()
    }
}

impl Default for RiskEvaluator {
    fn default() -> Self {
        Self::new(RISK_RULES)
    }
}
