// SPDX-License-Identifier: PMPL-1.0-or-later
//! Shared fixtures for integration tests

#![allow(dead_code)]

use accesslint_expect::{AuditEngine, AuditError, AuditResult, Document, RuleCatalog};
use std::cell::Cell;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub const PAGE: &str = "tests/fixtures/page.html";
pub const AUDIT: &str = "tests/fixtures/audit.json";
pub const RULES: &str = "tests/fixtures/rules.json";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn read_fixture(path: &str) -> String {
    std::fs::read_to_string(Path::new(path)).expect("fixture should be readable")
}

pub fn page() -> Document {
    Document::parse_with_url("https://shop.example.test/checkout", &read_fixture(PAGE))
}

pub fn rules() -> RuleCatalog {
    RuleCatalog::from_json(&read_fixture(RULES)).expect("rules fixture should parse")
}

/// Engine replaying a recorded audit and counting how often it ran
pub struct RecordedEngine {
    result: AuditResult,
    calls: Cell<usize>,
}

impl RecordedEngine {
    pub fn new(result: AuditResult) -> Self {
        Self {
            result,
            calls: Cell::new(0),
        }
    }

    pub fn from_fixture() -> Self {
        Self::new(AuditResult::from_json(&read_fixture(AUDIT)).expect("audit fixture should parse"))
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl AuditEngine for RecordedEngine {
    fn run_audit(&self, _document: &Document) -> Result<AuditResult, AuditError> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.result.clone())
    }
}
