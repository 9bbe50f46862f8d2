// SPDX-License-Identifier: PMPL-1.0-or-later
//! Narrowing document-wide violations to what the caller asked about.
//!
//! - Scoping keeps violations whose node lies inside a root element
//! - Suppression drops violations for rules the caller disabled
//!
//! Both only ever remove entries: order is preserved and inputs are left
//! untouched.

use crate::audit::Violation;
use crate::dom::Element;
use regex::Regex;
use std::borrow::Cow;
use std::collections::HashSet;

/// Path prefix the engine puts in front of nodes living in embedded frames
const FRAME_PREFIX: &str = r"^.*>>>\s*iframe>\s*";

/// Keep the violations whose node is `root` or one of its descendants.
///
/// Selectors that fail to parse or match nothing are treated as out of scope.
pub fn scope_violations_to_element(
    violations: &[Violation],
    root: &Element<'_>,
) -> Vec<Violation> {
    let frame_prefix = Regex::new(FRAME_PREFIX).expect("valid regex");

    violations
        .iter()
        .filter(|v| resolves_within(&frame_prefix, &v.selector, root))
        .cloned()
        .collect()
}

/// Selector part local to the frame the node lives in.
///
/// Containment is still checked against the root's own document, not the
/// nested frame's.
pub fn local_selector(selector: &str) -> Cow<'_, str> {
    let frame_prefix = Regex::new(FRAME_PREFIX).expect("valid regex");
    strip_frame_prefix(&frame_prefix, selector)
}

fn strip_frame_prefix<'s>(frame_prefix: &Regex, selector: &'s str) -> Cow<'s, str> {
    frame_prefix.replace(selector, "")
}

fn resolves_within(frame_prefix: &Regex, selector: &str, root: &Element<'_>) -> bool {
    let local = strip_frame_prefix(frame_prefix, selector);
    match root.owner_document().query_selector(&local) {
        Ok(Some(node)) => root.contains(&node),
        Ok(None) | Err(_) => false,
    }
}

/// Drop violations whose rule id is in `disabled`.
///
/// An absent or empty list returns `violations` as-is.
pub fn suppress_disabled_rules(
    violations: Vec<Violation>,
    disabled: Option<&[String]>,
) -> Vec<Violation> {
    let disabled: HashSet<&str> = match disabled {
        Some(rules) if !rules.is_empty() => rules.iter().map(String::as_str).collect(),
        _ => return violations,
    };

    violations
        .into_iter()
        .filter(|v| !disabled.contains(v.rule_id.as_str()))
        .collect()
}
