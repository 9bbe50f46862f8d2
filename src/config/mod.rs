// SPDX-License-Identifier: PMPL-1.0-or-later
//! Project-level configuration for accessibility assertions

use crate::error::{MatcherError, Result};
use crate::matcher::AccessibleMatcherOptions;
use crate::rules::{RuleCatalog, RuleMetadata};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File names searched by [`discover_config`], in order
pub const CONFIG_FILE_NAMES: &[&str] = &["accesslint.toml", "accesslint.yml", "accesslint.yaml"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Rules ignored by every assertion in the project
    pub disabled_rules: Vec<String>,
    /// Extra rule metadata used to enrich failure reports
    pub rules: Vec<RuleMetadata>,
}

impl MatcherConfig {
    /// Per-call options carrying the project-wide disabled rules
    pub fn options(&self) -> AccessibleMatcherOptions {
        if self.disabled_rules.is_empty() {
            return AccessibleMatcherOptions::default();
        }
        AccessibleMatcherOptions::disabling(self.disabled_rules.iter().cloned())
    }

    /// Rule registry seeded with the configured metadata
    pub fn catalog(&self) -> RuleCatalog {
        self.rules.iter().cloned().collect()
    }
}

/// First config file present in `dir`
pub fn discover_config(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

pub fn load_config(path: &Path) -> Result<MatcherConfig> {
    if !path.exists() {
        return Ok(MatcherConfig::default());
    }

    let content = std::fs::read_to_string(path)?;

    if path.extension().and_then(|s| s.to_str()) == Some("toml") {
        toml::from_str(&content)
            .map_err(|e| MatcherError::Config(format!("TOML parse error: {}", e)))
    } else {
        serde_yaml::from_str(&content)
            .map_err(|e| MatcherError::Config(format!("YAML parse error: {}", e)))
    }
}
