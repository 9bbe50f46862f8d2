// SPDX-License-Identifier: PMPL-1.0-or-later
//! accesslint-expect - `toBeAccessible()` assertion for accessibility audits
//!
//! Wraps an external audit engine so a test can assert that one element of a
//! document has no accessibility violations. The engine audits the whole
//! document; this crate narrows its findings to the element's subtree,
//! drops rules the caller disabled, and renders a failure report enriched
//! with WCAG metadata from a rule registry.
//!
//! ## Pipeline
//!
//! - **Scope** (`scope`): keep violations whose selector resolves inside the
//!   element, including nodes reported through an embedded-frame path
//! - **Suppress** (`scope`): drop violations for disabled rule ids
//! - **Report** (`report`): pass/fail verdict and a lazily rendered message
//!
//! ## Usage
//!
//! ```no_run
//! use accesslint_expect::{expect::Expect, Document, RuleCatalog};
//! # use accesslint_expect::{AuditResult, AuditError};
//! # let engine = |_: &Document| -> Result<AuditResult, AuditError> { unimplemented!() };
//! let document = Document::parse("<main><img src=\"a.png\"></main>");
//! let rules = RuleCatalog::default();
//! let main = document.query_selector("main").ok().flatten().expect("main element");
//!
//! Expect::new(&engine, &rules).that(main).to_be_accessible(None)?;
//! # Ok::<(), accesslint_expect::AssertionError>(())
//! ```

pub mod audit;
pub mod config;
pub mod dom;
pub mod error;
pub mod expect;
pub mod matcher;
pub mod registry;
pub mod report;
pub mod rules;
pub mod scope;
pub mod setup;

pub use audit::{AuditEngine, AuditResult, Impact, Violation};
pub use config::MatcherConfig;
pub use dom::{Document, Element};
pub use error::{AssertionError, AuditError, DomError, MatcherError, Result};
pub use matcher::{
    accesslint_matchers, to_be_accessible, AccessibleMatcherOptions, MatcherContext, Received,
};
pub use report::MatchResult;
pub use rules::{RuleCatalog, RuleMetadata, RuleRegistry, WcagLevel};
