// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CSS feature check.
//!
//! The deck relies on a fixed set of modern CSS features; each one is
//! reported on its own and all must be present.

use std::sync::LazyLock;

use regex::Regex;

use crate::check::{Check, CheckContext, CheckItem, CheckResult};

/// Feature patterns with their descriptions, in report order.
#[allow(clippy::expect_used)]
static FEATURE_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r":root\s*\{", "CSS variable system"),
        (r"@media.*max-width", "responsive media query"),
        (r"@keyframes", "CSS animation"),
        (r"backdrop-filter:", "backdrop filter"),
        (r"clip-path:", "clip path"),
        (r"linear-gradient|radial-gradient", "gradients"),
        (r"transform:", "transforms"),
        (r"transition:", "transitions"),
        (r"backdrop-filter: blur", "frosted glass blur"),
        (r"overflow:", "overflow handling"),
    ]
    .into_iter()
    .map(|(pattern, description)| (Regex::new(pattern).expect("valid regex"), description))
    .collect()
});

/// The CSS check validates that the document uses the expected features.
pub struct CssCheck;

impl Check for CssCheck {
    fn name(&self) -> &'static str {
        "css_features"
    }

    fn description(&self) -> &'static str {
        "CSS features"
    }

    fn run(&self, ctx: &CheckContext) -> CheckResult {
        let document = match super::load_document(self.name(), ctx) {
            Ok(doc) => doc,
            Err(result) => return result,
        };

        let items = FEATURE_PATTERNS
            .iter()
            .map(|(pattern, description)| {
                let supported = pattern.is_match(document.as_ref());
                CheckItem::verdict(supported, *description).with_detail(if supported {
                    "supported"
                } else {
                    "not found"
                })
            })
            .collect();

        CheckResult::from_items(self.name(), items)
    }
}

#[cfg(test)]
#[path = "css_tests.rs"]
mod tests;
