// SPDX-License-Identifier: PMPL-1.0-or-later
//! Process-wide expectation extension point.
//!
//! Matchers are registered once by name and looked up by the `expect`
//! front end on every assertion. Entries are never removed; registering a
//! name again replaces the previous function.

use crate::error::Result;
use crate::matcher::{AccessibleMatcherOptions, MatcherContext, Received};
use crate::report::MatchResult;
use std::collections::HashMap;
use std::sync::{OnceLock, PoisonError, RwLock};

/// Signature every registered matcher has
pub type MatcherFn = for<'a> fn(
    &MatcherContext<'a>,
    Received<'a>,
    Option<&AccessibleMatcherOptions>,
) -> Result<MatchResult<'a>>;

static EXTENSIONS: OnceLock<RwLock<HashMap<&'static str, MatcherFn>>> = OnceLock::new();

fn extensions() -> &'static RwLock<HashMap<&'static str, MatcherFn>> {
    EXTENSIONS.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Register matchers under their names
pub fn extend(matchers: impl IntoIterator<Item = (&'static str, MatcherFn)>) {
    let mut table = extensions().write().unwrap_or_else(PoisonError::into_inner);
    for (name, matcher) in matchers {
        table.insert(name, matcher);
    }
}

/// Matcher registered under `name`, if any
pub fn lookup(name: &str) -> Option<MatcherFn> {
    extensions()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(name)
        .copied()
}

/// Names of all registered matchers, sorted
pub fn registered_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = extensions()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .keys()
        .copied()
        .collect();
    names.sort_unstable();
    names
}
