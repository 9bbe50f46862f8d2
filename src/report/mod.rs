// SPDX-License-Identifier: PMPL-1.0-or-later
//! Verdict and failure report for a filtered set of violations.
//!
//! Each violation renders as one block:
//!
//! ```text
//!   img-alt [A] (1.1.1): Images must have alternate text
//!     main > img
//! ```
//!
//! The level and WCAG parts only appear when the rule registry knows them.

use crate::audit::Violation;
use crate::rules::RuleRegistry;
use std::fmt;

/// Message when nothing is in scope. Worded for the negated assertion,
/// which is the only place a passing result's message is shown.
pub const PASS_MESSAGE: &str =
    "Expected element to have accessibility violations, but none were found";

/// What a matcher hands back to the assertion framework
pub struct MatchResult<'a> {
    pub pass: bool,
    message: Box<dyn Fn() -> String + 'a>,
}

impl<'a> MatchResult<'a> {
    pub fn new(pass: bool, message: impl Fn() -> String + 'a) -> Self {
        Self {
            pass,
            message: Box::new(message),
        }
    }

    /// Render the report. Computed on every call, never cached.
    pub fn message(&self) -> String {
        (self.message)()
    }
}

impl fmt::Debug for MatchResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchResult")
            .field("pass", &self.pass)
            .finish_non_exhaustive()
    }
}

/// Decide pass/fail for `violations` and defer building the report
pub fn format_match<'a>(
    violations: Vec<Violation>,
    rules: &'a dyn RuleRegistry,
) -> MatchResult<'a> {
    let pass = violations.is_empty();

    MatchResult::new(pass, move || {
        if violations.is_empty() {
            return PASS_MESSAGE.to_string();
        }

        let summary = violations
            .iter()
            .map(|v| format_violation(v, rules))
            .collect::<Vec<_>>()
            .join("\n\n");

        format!(
            "Expected element to have no accessibility violations, but found {}:\n\n{}",
            violations.len(),
            summary
        )
    })
}

/// Render one violation, enriched with whatever the registry knows
pub fn format_violation(violation: &Violation, rules: &dyn RuleRegistry) -> String {
    let rule = rules.get_rule_by_id(&violation.rule_id);

    let level = rule
        .and_then(|r| r.level)
        .map(|level| format!(" [{}]", level))
        .unwrap_or_default();

    let wcag = match rule {
        Some(r) if !r.wcag.is_empty() => format!(" ({})", r.wcag.join(", ")),
        _ => String::new(),
    };

    format!(
        "  {}{}{}: {}\n    {}",
        violation.rule_id, level, wcag, violation.message, violation.selector
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Impact;
    use crate::rules::{RuleCatalog, RuleMetadata, WcagLevel};
    use std::cell::Cell;

    struct CountingRules {
        catalog: RuleCatalog,
        lookups: Cell<usize>,
    }

    impl RuleRegistry for CountingRules {
        fn get_rule_by_id(&self, rule_id: &str) -> Option<&RuleMetadata> {
            self.lookups.set(self.lookups.get() + 1);
            self.catalog.get_rule_by_id(rule_id)
        }
    }

    fn catalog() -> RuleCatalog {
        vec![
            RuleMetadata::new("img-alt", "Images must have alt text")
                .with_wcag("1.1.1", WcagLevel::A),
            RuleMetadata::new("link-name", "Links must have discernible text")
                .with_wcag("2.4.4", WcagLevel::A)
                .with_wcag("4.1.2", WcagLevel::A),
            RuleMetadata::new("landmark-unique", "Landmarks should be unique"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_pass_message() {
        let rules = RuleCatalog::new();
        let result = format_match(Vec::new(), &rules);
        assert!(result.pass);
        assert_eq!(result.message(), PASS_MESSAGE);
    }

    #[test]
    fn test_failure_message_layout() {
        let rules = catalog();
        let violations = vec![
            Violation::new(
                "img-alt",
                "main > img",
                Impact::Critical,
                "Images must have alternate text",
            ),
            Violation::new(
                "link-name",
                "#footer > a",
                Impact::Serious,
                "Links must have discernible text",
            ),
        ];

        let result = format_match(violations, &rules);
        assert!(!result.pass);
        assert_eq!(
            result.message(),
            "Expected element to have no accessibility violations, but found 2:\n\n\
             \x20 img-alt [A] (1.1.1): Images must have alternate text\n\
             \x20   main > img\n\n\
             \x20 link-name [A] (2.4.4, 4.1.2): Links must have discernible text\n\
             \x20   #footer > a"
        );
    }

    #[test]
    fn test_unknown_rule_degrades() {
        let rules = catalog();
        let violation = Violation::new("made-up-rule", "div", Impact::Minor, "Something is off");
        assert_eq!(
            format_violation(&violation, &rules),
            "  made-up-rule: Something is off\n    div"
        );
    }

    #[test]
    fn test_rule_without_level_or_wcag() {
        let rules = catalog();
        let violation = Violation::new("landmark-unique", "nav", Impact::Moderate, "Duplicate nav");
        assert_eq!(
            format_violation(&violation, &rules),
            "  landmark-unique: Duplicate nav\n    nav"
        );
    }

    #[test]
    fn test_level_and_wcag_render_independently() {
        let rules: RuleCatalog = vec![
            RuleMetadata {
                id: "region".to_string(),
                wcag: vec![],
                level: Some(WcagLevel::AA),
                description: "Content should be inside landmarks".to_string(),
            },
            RuleMetadata {
                id: "color-contrast".to_string(),
                wcag: vec!["1.4.3".into()],
                level: None,
                description: "Text must have sufficient contrast".to_string(),
            },
        ]
        .into_iter()
        .collect();

        let level_only = Violation::new("region", "aside", Impact::Moderate, "Not in a landmark");
        assert_eq!(
            format_violation(&level_only, &rules),
            "  region [AA]: Not in a landmark\n    aside"
        );

        let wcag_only = Violation::new("color-contrast", "p", Impact::Serious, "Low contrast");
        assert_eq!(
            format_violation(&wcag_only, &rules),
            "  color-contrast (1.4.3): Low contrast\n    p"
        );
    }

    #[test]
    fn test_message_is_deferred() {
        let rules = CountingRules {
            catalog: catalog(),
            lookups: Cell::new(0),
        };
        let violations = vec![Violation::new("img-alt", "img", Impact::Critical, "Missing alt")];

        let result = format_match(violations, &rules);
        assert!(!result.pass);
        assert_eq!(rules.lookups.get(), 0);

        let first = result.message();
        assert_eq!(rules.lookups.get(), 1);
        assert_eq!(result.message(), first);
        assert_eq!(rules.lookups.get(), 2);
    }
}
