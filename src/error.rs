//! Typed failures for scenario evaluation and knowledge-base lookups.
//!
//! Every variant maps to a stable machine-readable code via
//! [`FairsplitError::error_code`]; the JSON error envelope in `main` carries
//! that code so callers can branch without parsing messages.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FairsplitError {
    #[error("invalid scenario: {reason}")]
    InvalidScenario { reason: String },

    #[error("missing knowledge entry: {jurisdiction}/{section}/{key}")]
    MissingKnowledgeEntry {
        jurisdiction: &'static str,
        section: &'static str,
        key: String,
    },

    #[error("scenario file {path}: {message}")]
    ScenarioFile { path: String, message: String },
}

impl FairsplitError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidScenario { .. } => "INVALID_SCENARIO",
            Self::MissingKnowledgeEntry { .. } => "MISSING_KNOWLEDGE_ENTRY",
            Self::ScenarioFile { .. } => "SCENARIO_FILE",
        }
    }
}
