// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error types for accesslint-expect

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MatcherError>;

/// Failure reported by the audit engine itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Audit engine failed: {message}")]
pub struct AuditError {
    pub message: String,
}

impl AuditError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum MatcherError {
    #[error(transparent)]
    Audit(#[from] AuditError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No matcher registered under {0}")]
    UnknownMatcher(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    #[error("Invalid selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },
}

/// Outcome of an `expect(...)` assertion that did not hold.
#[derive(Error, Debug)]
pub enum AssertionError {
    /// The matcher ran and the assertion failed; `message` is the rendered report.
    #[error("{message}")]
    Failed { message: String },

    #[error(transparent)]
    Matcher(#[from] MatcherError),
}
