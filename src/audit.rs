// SPDX-License-Identifier: PMPL-1.0-or-later
//! Audit engine contract: what the engine returns for a document.
//!
//! The engine itself lives outside this crate. Anything implementing
//! [`AuditEngine`], including a plain closure over `&Document`, can back
//! the matcher.

use crate::dom::Document;
use crate::error::{AuditError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity of a violation as reported by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Critical,
    Serious,
    Moderate,
    Minor,
}

impl std::fmt::Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Impact::Critical => write!(f, "critical"),
            Impact::Serious => write!(f, "serious"),
            Impact::Moderate => write!(f, "moderate"),
            Impact::Minor => write!(f, "minor"),
        }
    }
}

/// A single accessibility defect tied to one node and one rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    /// Rule identifier (e.g., "img-alt")
    pub rule_id: String,
    /// CSS selector of the offending node. Nodes inside embedded frames
    /// are reported as `<frame path> >>> iframe> <local selector>`.
    pub selector: String,
    /// HTML snippet of the offending node
    pub html: String,
    pub impact: Impact,
    /// Human-readable description
    pub message: String,
}

impl Violation {
    pub fn new(rule_id: &str, selector: &str, impact: Impact, message: &str) -> Self {
        Self {
            rule_id: rule_id.to_string(),
            selector: selector.to_string(),
            html: String::new(),
            impact,
            message: message.to_string(),
        }
    }

    /// Set the HTML snippet
    pub fn with_html(mut self, html: &str) -> Self {
        self.html = html.to_string();
        self
    }
}

/// Result of auditing one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    /// URL of the audited document
    pub url: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    /// Violations in the order the engine reported them
    pub violations: Vec<Violation>,
    /// Number of rules the engine evaluated
    pub rule_count: usize,
}

impl AuditResult {
    pub fn new(url: &str, violations: Vec<Violation>, rule_count: usize) -> Self {
        Self {
            url: url.to_string(),
            timestamp: Utc::now(),
            violations,
            rule_count,
        }
    }

    /// Load a result recorded by an external engine run
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

/// Scans a whole document for violations
pub trait AuditEngine {
    fn run_audit(&self, document: &Document) -> std::result::Result<AuditResult, AuditError>;
}

impl<F> AuditEngine for F
where
    F: Fn(&Document) -> std::result::Result<AuditResult, AuditError>,
{
    fn run_audit(&self, document: &Document) -> std::result::Result<AuditResult, AuditError> {
        self(document)
    }
}
