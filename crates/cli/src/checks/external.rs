// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! External dependency check.
//!
//! A single-file deployment should not load stylesheets, scripts, images
//! or imports from absolute `http(s)://` URLs.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::check::{Check, CheckContext, CheckItem, CheckResult};

/// Patterns capturing an externally hosted URL.
#[allow(clippy::expect_used)]
static EXTERNAL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r#"(?i)<link[^>]*href=['"](https?://[^'">]+)['"]"#,
        r#"(?i)<script[^>]*src=['"](https?://[^'">]+)['"]"#,
        r#"(?i)<img[^>]*src=['"](https?://[^'">]+)['"]"#,
        r#"(?i)@import\s+['"](https?://[^'">]+)['"]"#,
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).expect("valid regex"))
    .collect()
});

/// The external check flags remotely hosted resources.
pub struct ExternalCheck;

impl Check for ExternalCheck {
    fn name(&self) -> &'static str {
        "external_dependencies"
    }

    fn description(&self) -> &'static str {
        "External dependencies"
    }

    fn run(&self, ctx: &CheckContext) -> CheckResult {
        let document = match super::load_document(self.name(), ctx) {
            Ok(doc) => doc,
            Err(result) => return result,
        };

        let urls = external_urls(document.as_ref());
        if urls.is_empty() {
            return CheckResult::passed(self.name()).with_items(vec![
                CheckItem::pass("no external dependencies").with_detail("single-file deployment"),
            ]);
        }

        tracing::debug!(count = urls.len(), "external resources found");

        let mut items: Vec<CheckItem> = urls
            .into_iter()
            .map(|url| CheckItem::warn("external resource").with_detail(url))
            .collect();
        items.push(
            CheckItem::fail("external dependencies")
                .with_detail("inline these resources so the deployment works offline"),
        );

        CheckResult::from_items(self.name(), items)
    }
}

/// Distinct external URLs referenced by the document, sorted.
pub fn external_urls(content: &str) -> BTreeSet<String> {
    EXTERNAL_PATTERNS
        .iter()
        .flat_map(|pattern| pattern.captures_iter(content))
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
#[path = "external_tests.rs"]
mod tests;
