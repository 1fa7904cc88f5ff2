//! # Triage Engine
//!
//! Deterministic, rule-based contract triage.
//!
//! ## Pipeline
//!
//! ```text
//! Raw text
//!     │
//!     └──> Redactor
//!            └─> Sanitized text
//!                  ├──> Classifier      └─> document type
//!                  ├──> Clause Extractor └─> ordered clause snippets
//!                  └──> Risk Evaluator   └─> ordered risk findings
//! ```
//!
//! The three analysis stages are pure functions of the sanitized text and
//! share no state; sequential execution is the reference behavior. Every
//! operation is total over any input string and never fails.
//!
//! ## Example
//!
//! ```
//! use triage_engine::TriageEngine;
//!
//! let engine = TriageEngine::new();
//! let result = engine.triage("This Service Agreement covers payment terms.");
//! assert_eq!(result.doc_type, "Service Agreement");
//! ```

mod classifier;
mod clauses;
mod engine;
mod risks;

pub use classifier::{DocumentClassifier, ClassifyRule, CLASSIFY_RULES, FALLBACK_LABEL};
pub use clauses::{
    ClauseExtractor, ClauseKeyword, CLAUSE_KEYWORDS, DEFAULT_WINDOW, PLACEHOLDER_TEXT,
    PLACEHOLDER_TITLE,
};
pub use engine::TriageEngine;
pub use risks::{RiskEvaluator, RiskRule, RISK_RULES};
