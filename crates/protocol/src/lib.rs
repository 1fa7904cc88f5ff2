//! Wire-level value objects for the triage pipeline.
//!
//! Everything here is transient: built for one request, serialized, and
//! discarded. No type carries identity or persists across requests.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Severity of a single risk finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

/// A clause snippet: display title plus a bounded context window around the
/// first keyword match. The window is a cheap stand-in for true clause
/// boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    pub title: String,
    pub text: String,
}

/// One entry produced by exactly one risk heuristic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFinding {
    pub level: RiskLevel,
    pub description: String,
    pub explanation: String,
}

/// The complete triage output for one document.
///
/// `clauses` follows the fixed keyword-table order and `risks` the fixed
/// rule order; neither reflects document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageResult {
    #[serde(rename = "type")]
    pub doc_type: String,
    pub clauses: Vec<Clause>,
    pub risks: Vec<RiskFinding>,
}

/// Request-boundary input. The field name is part of the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageRequest {
    pub document_content: String,
}

/// Success envelope returned by the request boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageResponse {
    pub result: TriageResult,
}

/// Client-error payload for boundary rejections (malformed body, PII abort,
/// guardrail violation). The deterministic core never produces one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub code: String,
    pub message: String,
    pub hint: Option<String>,
}

pub fn serialize_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(Into::into)
}
