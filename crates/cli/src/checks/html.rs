// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTML content check.
//!
//! Every sub-check runs and reports even after an earlier one fails:
//! - structural tags (doctype, lang, charset, viewport, title, body, html)
//! - at least one CSS custom property declaration
//! - enough of the slide navigation functions are defined
//! - the exact number of slide sections

use std::sync::LazyLock;

use regex::Regex;

use crate::check::{Check, CheckContext, CheckItem, CheckResult};
use crate::config::HtmlConfig;

/// Structural patterns, checked in order. The language attribute is
/// handled separately because its expected value is configurable.
#[allow(clippy::expect_used)]
static STRUCTURE_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"<!DOCTYPE html>", "HTML5 doctype"),
        (r#"<meta charset="(?i:utf-8)">"#, "character encoding"),
        (r#"<meta name="viewport""#, "viewport meta tag"),
        (r"<title>.*</title>", "page title"),
        (r"<body", "body tag"),
        (r"</body>", "body closing tag"),
        (r"</html>", "html closing tag"),
    ]
    .into_iter()
    .map(|(pattern, description)| (Regex::new(pattern).expect("valid regex"), description))
    .collect()
});

#[allow(clippy::expect_used)]
static LANG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<html[^>]*\slang="([^"]*)""#).expect("valid regex"));

#[allow(clippy::expect_used)]
static CSS_VARIABLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--[\w-]+:\s*[^;]+;").expect("valid regex"));

#[allow(clippy::expect_used)]
static SLIDE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<section class="slide.*?data-slide="(\d+)".*?</section>"#)
        .expect("valid regex")
});

/// The HTML check validates the main document's structure and content.
pub struct HtmlCheck;

impl Check for HtmlCheck {
    fn name(&self) -> &'static str {
        "html_content"
    }

    fn description(&self) -> &'static str {
        "HTML content"
    }

    fn run(&self, ctx: &CheckContext) -> CheckResult {
        let document = match super::load_document(self.name(), ctx) {
            Ok(doc) => doc,
            Err(result) => return result,
        };
        let content = document.as_ref();
        let config = &ctx.config.html;

        let mut items = Vec::new();

        // Doctype first, then the language attribute, then the rest
        let (doctype, rest) = STRUCTURE_PATTERNS.split_at(1);
        for (pattern, description) in doctype {
            items.push(CheckItem::verdict(pattern.is_match(content), *description));
        }
        items.push(check_language(content, config.language.as_deref()));
        for (pattern, description) in rest {
            items.push(CheckItem::verdict(pattern.is_match(content), *description));
        }

        let variables = count_css_variables(content);
        items.push(
            CheckItem::verdict(variables > 0, "CSS variables").with_detail(if variables > 0 {
                format!("{variables} declared")
            } else {
                "none found".to_string()
            }),
        );

        let found = defined_functions(content, &config.functions);
        items.push(check_functions(&found, config));

        let slides = count_slides(content);
        let slide_item = CheckItem::verdict(slides == config.slides, "slide sections");
        items.push(if slides == config.slides {
            slide_item.with_detail(slides.to_string())
        } else {
            slide_item.with_detail(format!("{} (expected: {})", slides, config.slides))
        });

        tracing::debug!(
            variables,
            functions = found.len(),
            slides,
            "html content scanned"
        );

        CheckResult::from_items(self.name(), items)
    }
}

fn check_language(content: &str, expected: Option<&str>) -> CheckItem {
    let found = LANG_PATTERN
        .captures(content)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .filter(|lang| !lang.is_empty());

    match (found, expected) {
        (Some(lang), Some(expected)) if lang == expected => {
            CheckItem::pass("language attribute").with_detail(lang)
        }
        (Some(lang), Some(expected)) => CheckItem::fail("language attribute")
            .with_detail(format!("{lang} (expected: {expected})")),
        (Some(lang), None) => CheckItem::pass("language attribute").with_detail(lang),
        (None, _) => CheckItem::fail("language attribute"),
    }
}

fn check_functions(found: &[&str], config: &HtmlConfig) -> CheckItem {
    let detail = format!("{}/{}", found.len(), config.functions.len());
    let item = CheckItem::verdict(
        found.len() >= config.min_functions,
        "JavaScript navigation functions",
    );

    if found.len() == config.functions.len() {
        return item.with_detail(detail);
    }

    let missing: Vec<&str> = config
        .functions
        .iter()
        .map(String::as_str)
        .filter(|name| !found.contains(name))
        .collect();
    item.with_detail(format!("{detail} (missing: {})", missing.join(", ")))
}

/// Count CSS custom property declarations (`--name: value;`).
pub fn count_css_variables(content: &str) -> usize {
    CSS_VARIABLE_PATTERN.find_iter(content).count()
}

/// Names from `functions` that the document defines, either as
/// `function name` or as an assignment `name = `.
pub fn defined_functions<'a>(content: &str, functions: &'a [String]) -> Vec<&'a str> {
    functions
        .iter()
        .map(String::as_str)
        .filter(|name| {
            content.contains(&format!("function {name}")) || content.contains(&format!("{name} = "))
        })
        .collect()
}

/// Count `<section class="slide…" data-slide="N">…</section>` blocks.
pub fn count_slides(content: &str) -> usize {
    SLIDE_PATTERN.captures_iter(content).count()
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
