//! Structured error types shared across horgg crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`HorggError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (identifiers, sizes, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the horgg sampler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum HorggError {
    /// The degree sequences admit no simple bipartite realization.
    #[error("invalid degree sequence: {0}")]
    InvalidDegreeSequence(ErrorInfo),
    /// The requested number of swaps could not be completed within the attempt budget.
    #[error("max attempts exceeded: {0}")]
    MaxAttemptsExceeded(ErrorInfo),
    /// Malformed edge sets or out of range identifiers.
    #[error("graph error: {0}")]
    Graph(ErrorInfo),
    /// Degree-sequence generation errors.
    #[error("sequence error: {0}")]
    Sequence(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl HorggError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            HorggError::InvalidDegreeSequence(info)
            | HorggError::MaxAttemptsExceeded(info)
            | HorggError::Graph(info)
            | HorggError::Sequence(info)
            | HorggError::Serde(info) => info,
        }
    }

    /// Returns the stable machine readable code of the error.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Whether the error is raised when validating degree sequences.
    pub fn is_invalid_degree_sequence(&self) -> bool {
        matches!(self, HorggError::InvalidDegreeSequence(_))
    }

    /// Whether the error signals an exhausted swap budget.
    pub fn is_max_attempts_exceeded(&self) -> bool {
        matches!(self, HorggError::MaxAttemptsExceeded(_))
    }
}
