// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Responsive design check.
//!
//! Requires a device-width viewport and at least one media query. The
//! breakpoints found inside media queries are reported but never fail
//! the check.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::check::{Check, CheckContext, CheckItem, CheckResult};

#[allow(clippy::expect_used)]
static BREAKPOINT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@media.*?(\d+)px").expect("valid regex"));

/// The responsive check validates viewport and media query usage.
pub struct ResponsiveCheck;

impl Check for ResponsiveCheck {
    fn name(&self) -> &'static str {
        "responsive_design"
    }

    fn description(&self) -> &'static str {
        "Responsive design"
    }

    fn run(&self, ctx: &CheckContext) -> CheckResult {
        let document = match super::load_document(self.name(), ctx) {
            Ok(doc) => doc,
            Err(result) => return result,
        };
        let content = document.as_ref();

        let mut items = Vec::new();

        let viewport = content.contains("viewport") && content.contains("width=device-width");
        items.push(
            CheckItem::verdict(viewport, "viewport meta tag").with_detail(if viewport {
                "set"
            } else {
                "missing width=device-width viewport"
            }),
        );

        if content.contains("@media") {
            items.push(CheckItem::pass("media queries").with_detail("implemented"));

            let breakpoints = breakpoints(content);
            if breakpoints.is_empty() {
                items.push(CheckItem::warn("breakpoints").with_detail("could not be parsed"));
            } else {
                items.push(
                    CheckItem::info("breakpoints").with_detail(format_breakpoints(&breakpoints)),
                );

                let mobile = ctx.config.responsive.mobile_breakpoint;
                let label = format!("mobile breakpoint ({mobile}px)");
                items.push(if breakpoints.contains(&u64::from(mobile)) {
                    CheckItem::pass(label).with_detail("set")
                } else {
                    CheckItem::warn(label).with_detail("not set")
                });
            }
        } else {
            items.push(CheckItem::fail("media queries").with_detail("not implemented"));
        }

        CheckResult::from_items(self.name(), items)
    }
}

/// Pixel breakpoints referenced by `@media` rules, deduplicated and sorted.
///
/// Only the first pixel value of each `@media` line is taken.
pub fn breakpoints(content: &str) -> BTreeSet<u64> {
    BREAKPOINT_PATTERN
        .captures_iter(content)
        .filter_map(|c| c.get(1))
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

fn format_breakpoints(breakpoints: &BTreeSet<u64>) -> String {
    let list: Vec<String> = breakpoints.iter().map(|bp| format!("{bp}px")).collect();
    list.join(", ")
}

#[cfg(test)]
#[path = "responsive_tests.rs"]
mod tests;
