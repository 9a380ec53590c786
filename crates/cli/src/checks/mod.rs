// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check registry.
//!
//! All 6 built-in checks are registered here, in run order:
//! - file_structure: required and optional files exist
//! - html_content: document structure, CSS variables, navigation functions, slides
//! - css_features: modern CSS features used by the deck
//! - responsive_design: viewport and media queries
//! - file_sizes: top-level file census (informational)
//! - external_dependencies: no remotely hosted resources

pub mod css;
pub mod external;
pub mod html;
pub mod responsive;
pub mod sizes;
pub mod structure;

use crate::check::{Check, CheckContext, CheckItem, CheckResult};
use crate::document::Document;

/// All registered check names in canonical order.
pub const CHECK_NAMES: &[&str] = &[
    "file_structure",
    "html_content",
    "css_features",
    "responsive_design",
    "file_sizes",
    "external_dependencies",
];

/// Create all registered checks, in run order.
pub fn all_checks() -> Vec<Box<dyn Check>> {
    CHECK_NAMES.iter().filter_map(|name| get_check(name)).collect()
}

/// Get a check by name.
pub fn get_check(name: &str) -> Option<Box<dyn Check>> {
    let check: Box<dyn Check> = match name {
        "file_structure" => Box::new(structure::StructureCheck),
        "html_content" => Box::new(html::HtmlCheck),
        "css_features" => Box::new(css::CssCheck),
        "responsive_design" => Box::new(responsive::ResponsiveCheck),
        "file_sizes" => Box::new(sizes::SizesCheck),
        "external_dependencies" => Box::new(external::ExternalCheck),
        _ => return None,
    };
    Some(check)
}

/// Load the main document, or produce the failed result for `name`.
pub(crate) fn load_document(name: &str, ctx: &CheckContext) -> Result<Document, CheckResult> {
    ctx.document().map_err(|e| {
        tracing::debug!("{name}: {e}");
        CheckResult::failed(
            name,
            CheckItem::fail(format!("{} unreadable", ctx.config.files.document))
                .with_detail(e.to_string()),
        )
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
