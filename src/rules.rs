// SPDX-License-Identifier: PMPL-1.0-or-later
//! Rule metadata lookup used to enrich failure reports.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// WCAG conformance level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WcagLevel {
    /// Level A - minimum conformance
    A,
    /// Level AA - standard conformance
    AA,
    /// Level AAA - enhanced conformance
    AAA,
}

impl std::fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WcagLevel::A => write!(f, "A"),
            WcagLevel::AA => write!(f, "AA"),
            WcagLevel::AAA => write!(f, "AAA"),
        }
    }
}

/// Descriptive data about an audit rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleMetadata {
    pub id: String,
    /// WCAG success criteria (e.g., "1.1.1"), possibly empty
    #[serde(default)]
    pub wcag: Vec<String>,
    #[serde(default)]
    pub level: Option<WcagLevel>,
    #[serde(default)]
    pub description: String,
}

impl RuleMetadata {
    pub fn new(id: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            wcag: Vec::new(),
            level: None,
            description: description.to_string(),
        }
    }

    /// Add a WCAG criterion and set the conformance level
    pub fn with_wcag(mut self, criterion: &str, level: WcagLevel) -> Self {
        self.wcag.push(criterion.to_string());
        self.level = Some(level);
        self
    }
}

/// Lookup of rule metadata by rule id
pub trait RuleRegistry {
    fn get_rule_by_id(&self, rule_id: &str) -> Option<&RuleMetadata>;
}

impl RuleRegistry for HashMap<String, RuleMetadata> {
    fn get_rule_by_id(&self, rule_id: &str) -> Option<&RuleMetadata> {
        self.get(rule_id)
    }
}

/// In-memory rule registry
#[derive(Debug, Clone, Default)]
pub struct RuleCatalog {
    rules: BTreeMap<String, RuleMetadata>,
}

impl RuleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a rule, keyed by its id
    pub fn insert(&mut self, rule: RuleMetadata) {
        self.rules.insert(rule.id.clone(), rule);
    }

    /// Load a JSON array of rule metadata
    pub fn from_json(content: &str) -> Result<Self> {
        let rules: Vec<RuleMetadata> = serde_json::from_str(content)?;
        Ok(rules.into_iter().collect())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<RuleMetadata> for RuleCatalog {
    fn from_iter<I: IntoIterator<Item = RuleMetadata>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for rule in iter {
            catalog.insert(rule);
        }
        catalog
    }
}

impl RuleRegistry for RuleCatalog {
    fn get_rule_by_id(&self, rule_id: &str) -> Option<&RuleMetadata> {
        self.rules.get(rule_id)
    }
}
