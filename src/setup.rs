// SPDX-License-Identifier: PMPL-1.0-or-later
//! One-shot registration of `toBeAccessible` with the extension point.

use crate::matcher::accesslint_matchers;
use crate::registry;
use std::sync::Once;
use tracing::info;

static REGISTER: Once = Once::new();

/// Register the accessibility matchers. Later calls do nothing.
pub fn register() {
    REGISTER.call_once(|| {
        registry::extend(accesslint_matchers());
        info!("Registered matchers: {}", registry::registered_names().join(", "));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::TO_BE_ACCESSIBLE;

    #[test]
    fn test_register_is_idempotent() {
        register();
        register();
        assert!(registry::lookup(TO_BE_ACCESSIBLE).is_some());
    }
}
