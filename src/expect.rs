// SPDX-License-Identifier: PMPL-1.0-or-later
//! Minimal `expect(...)` front end over the extension point.
//!
//! Resolves matchers by name the way a test runner does, applies `.not()`,
//! and turns a [`MatchResult`](crate::report::MatchResult) into an assertion
//! outcome.

use crate::audit::AuditEngine;
use crate::error::{AssertionError, MatcherError};
use crate::matcher::{AccessibleMatcherOptions, MatcherContext, Received, TO_BE_ACCESSIBLE};
use crate::registry;
use crate::rules::RuleRegistry;
use crate::setup;

/// Entry point binding the audit collaborators for a test
#[derive(Clone, Copy)]
pub struct Expect<'a> {
    engine: &'a dyn AuditEngine,
    rules: &'a dyn RuleRegistry,
}

impl<'a> Expect<'a> {
    /// Create the front end, registering the accessibility matchers first
    pub fn new(engine: &'a dyn AuditEngine, rules: &'a dyn RuleRegistry) -> Self {
        setup::register();
        Self { engine, rules }
    }

    /// Start an assertion about `received`
    pub fn that(&self, received: impl Into<Received<'a>>) -> Assertion<'a> {
        Assertion {
            engine: self.engine,
            rules: self.rules,
            received: received.into(),
            is_not: false,
        }
    }
}

/// A pending assertion
pub struct Assertion<'a> {
    engine: &'a dyn AuditEngine,
    rules: &'a dyn RuleRegistry,
    received: Received<'a>,
    is_not: bool,
}

impl<'a> Assertion<'a> {
    /// Negate the assertion
    #[allow(clippy::should_implement_trait)]
    pub fn not(mut self) -> Self {
        self.is_not = !self.is_not;
        self
    }

    pub fn to_be_accessible(
        self,
        options: Option<&AccessibleMatcherOptions>,
    ) -> Result<(), AssertionError> {
        self.run(TO_BE_ACCESSIBLE, options)
    }

    fn run(
        self,
        name: &str,
        options: Option<&AccessibleMatcherOptions>,
    ) -> Result<(), AssertionError> {
        let matcher =
            registry::lookup(name).ok_or_else(|| MatcherError::UnknownMatcher(name.to_string()))?;

        let ctx = MatcherContext {
            is_not: self.is_not,
            engine: self.engine,
            rules: self.rules,
        };
        let result = matcher(&ctx, self.received, options)?;

        if result.pass == self.is_not {
            return Err(AssertionError::Failed {
                message: result.message(),
            });
        }
        Ok(())
    }
}
