// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! File structure check.
//!
//! Required files must exist; missing optional files are only reported.

use crate::check::{Check, CheckContext, CheckItem, CheckResult};

/// The structure check verifies the deployment's file layout.
pub struct StructureCheck;

impl Check for StructureCheck {
    fn name(&self) -> &'static str {
        "file_structure"
    }

    fn description(&self) -> &'static str {
        "File structure"
    }

    fn run(&self, ctx: &CheckContext) -> CheckResult {
        if !ctx.root.is_dir() {
            return CheckResult::failed(
                self.name(),
                CheckItem::fail("deployment directory not found")
                    .with_detail(ctx.root.display().to_string()),
            );
        }

        let files = &ctx.config.files;
        let mut items = Vec::with_capacity(files.required.len() + files.optional.len());

        for name in &files.required {
            let item = if ctx.root.join(name).exists() {
                CheckItem::pass(name).with_detail("present")
            } else {
                CheckItem::fail(name).with_detail("missing")
            };
            items.push(item);
        }

        for name in &files.optional {
            let item = if ctx.root.join(name).exists() {
                CheckItem::pass(name).with_detail("present")
            } else {
                CheckItem::warn(name).with_detail("missing (optional)")
            };
            items.push(item);
        }

        CheckResult::from_items(self.name(), items)
    }
}

#[cfg(test)]
#[path = "structure_tests.rs"]
mod tests;
