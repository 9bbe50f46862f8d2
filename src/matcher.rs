// SPDX-License-Identifier: PMPL-1.0-or-later
//! The `toBeAccessible()` matcher.
//!
//! Pure with respect to its inputs: the only collaborators it touches are the
//! audit engine and the rule registry handed in through [`MatcherContext`].
//! Registering it with the expectation extension point is `setup`'s job.

use crate::audit::AuditEngine;
use crate::dom::{Document, Element};
use crate::error::Result;
use crate::registry::MatcherFn;
use crate::report::{format_match, MatchResult};
use crate::rules::RuleRegistry;
use crate::scope::{scope_violations_to_element, suppress_disabled_rules};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Name the matcher is registered under
pub const TO_BE_ACCESSIBLE: &str = "toBeAccessible";

/// Per-call options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibleMatcherOptions {
    /// Rule ids whose violations are ignored for this call only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_rules: Option<Vec<String>>,
}

impl AccessibleMatcherOptions {
    /// Options disabling the given rules
    pub fn disabling<I, S>(rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            disabled_rules: Some(rules.into_iter().map(Into::into).collect()),
        }
    }
}

/// Collaborators and flags the framework passes to a matcher
#[derive(Clone, Copy)]
pub struct MatcherContext<'a> {
    /// Whether the assertion was negated with `.not()`
    pub is_not: bool,
    pub engine: &'a dyn AuditEngine,
    pub rules: &'a dyn RuleRegistry,
}

/// Whatever the test passed to `expect(...)`
#[derive(Debug, Clone)]
pub enum Received<'a> {
    Element(Element<'a>),
    Document(&'a Document),
    /// Any other host value
    Value(Value),
    Undefined,
}

impl Received<'_> {
    /// Type name as a script host's `typeof` would report it
    pub fn type_name(&self) -> &'static str {
        match self {
            Received::Element(_) | Received::Document(_) => "object",
            Received::Value(Value::Bool(_)) => "boolean",
            Received::Value(Value::Number(_)) => "number",
            Received::Value(Value::String(_)) => "string",
            Received::Value(Value::Null | Value::Array(_) | Value::Object(_)) => "object",
            Received::Undefined => "undefined",
        }
    }
}

impl<'a> From<Element<'a>> for Received<'a> {
    fn from(element: Element<'a>) -> Self {
        Received::Element(element)
    }
}

impl<'a> From<Option<Element<'a>>> for Received<'a> {
    fn from(element: Option<Element<'a>>) -> Self {
        element.map_or(Received::Undefined, Received::Element)
    }
}

impl<'a> From<&'a Document> for Received<'a> {
    fn from(document: &'a Document) -> Self {
        Received::Document(document)
    }
}

impl From<Value> for Received<'_> {
    fn from(value: Value) -> Self {
        Received::Value(value)
    }
}

impl From<&str> for Received<'_> {
    fn from(value: &str) -> Self {
        Received::Value(Value::String(value.to_string()))
    }
}

/// Assert that `received` has no accessibility violations in its subtree.
///
/// Non-elements fail without running the audit. An audit engine error is
/// returned as `Err`; everything else ends up in the [`MatchResult`].
pub fn to_be_accessible<'a>(
    ctx: &MatcherContext<'a>,
    received: Received<'a>,
    options: Option<&AccessibleMatcherOptions>,
) -> Result<MatchResult<'a>> {
    let element = match received {
        Received::Element(element) => element,
        other => {
            let received_type = other.type_name();
            return Ok(MatchResult::new(false, move || {
                format!(
                    "toBeAccessible() expects an Element (e.g. canvasElement), but received {}",
                    received_type
                )
            }));
        }
    };

    let document = element.owner_document();
    debug!("Auditing {} for <{}>", document.url(), element.tag_name());

    let result = ctx.engine.run_audit(document)?;
    let scoped = scope_violations_to_element(&result.violations, &element);
    let in_scope = scoped.len();

    let disabled = options.and_then(|o| o.disabled_rules.as_deref());
    let remaining = suppress_disabled_rules(scoped, disabled);

    debug!(
        "{} violation(s) reported, {} in scope, {} after suppression",
        result.violations.len(),
        in_scope,
        remaining.len()
    );

    Ok(format_match(remaining, ctx.rules))
}

/// Matcher table for manual registration with `registry::extend`
pub fn accesslint_matchers() -> [(&'static str, MatcherFn); 1] {
    [(TO_BE_ACCESSIBLE, to_be_accessible as MatcherFn)]
}
