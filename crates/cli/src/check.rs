// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check result types for output formatting.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use crate::config::Config;
use crate::document::Document;
use crate::error::Result;

/// Context passed to all checks during execution.
pub struct CheckContext<'a> {
    /// Deployment directory under validation.
    pub root: &'a Path,
    /// Parsed configuration.
    pub config: &'a Config,
}

impl CheckContext<'_> {
    /// Load the main document named by `files.document`.
    ///
    /// Each content check reads the document on its own so that a missing
    /// or unreadable file fails every check independently.
    pub fn document(&self) -> Result<Document> {
        Document::load(&self.root.join(&self.config.files.document))
    }
}

/// The Check trait defines a single deployment check.
///
/// Object-safe to allow dynamic dispatch via `Box<dyn Check>`.
pub trait Check {
    /// Unique identifier for this check (e.g., "html_content").
    fn name(&self) -> &'static str;

    /// Human-readable description for console output.
    fn description(&self) -> &'static str;

    /// Run the check and return results.
    ///
    /// Implementations should record missing inputs as failed items
    /// rather than panicking.
    fn run(&self, ctx: &CheckContext) -> CheckResult;
}

/// Outcome of a single sub-condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Pass,
    Fail,
    Warn,
    Info,
}

/// One logged sub-condition of a check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckItem {
    pub status: ItemStatus,

    /// What was checked (e.g., "viewport meta tag").
    pub label: String,

    /// Observed value or explanation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl CheckItem {
    pub fn new(status: ItemStatus, label: impl Into<String>) -> Self {
        Self {
            status,
            label: label.into(),
            detail: None,
        }
    }

    pub fn pass(label: impl Into<String>) -> Self {
        Self::new(ItemStatus::Pass, label)
    }

    pub fn fail(label: impl Into<String>) -> Self {
        Self::new(ItemStatus::Fail, label)
    }

    pub fn warn(label: impl Into<String>) -> Self {
        Self::new(ItemStatus::Warn, label)
    }

    pub fn info(label: impl Into<String>) -> Self {
        Self::new(ItemStatus::Info, label)
    }

    /// Pass or fail depending on `ok`.
    pub fn verdict(ok: bool, label: impl Into<String>) -> Self {
        if ok { Self::pass(label) } else { Self::fail(label) }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Result of running a single check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    /// Check identifier (e.g., "file_structure").
    pub name: String,

    /// Whether this check passed.
    pub passed: bool,

    /// True for checks that never affect the overall verdict.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub informational: bool,

    /// Error message if the check aborted unexpectedly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Logged sub-conditions, in evaluation order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<CheckItem>,

    /// File name to byte size (size census only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_sizes: Option<BTreeMap<String, u64>>,

    /// Wall-clock time spent in the check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl CheckResult {
    /// Build a result whose verdict is the AND of every item.
    ///
    /// Warn and info items never fail a check.
    pub fn from_items(name: impl Into<String>, items: Vec<CheckItem>) -> Self {
        let passed = items.iter().all(|i| i.status != ItemStatus::Fail);
        Self {
            name: name.into(),
            passed,
            informational: false,
            error: None,
            items,
            file_sizes: None,
            duration_ms: None,
        }
    }

    /// Create a passing check result.
    pub fn passed(name: impl Into<String>) -> Self {
        Self::from_items(name, Vec::new())
    }

    /// Create a failing check result with a single failed item.
    pub fn failed(name: impl Into<String>, item: CheckItem) -> Self {
        let mut result = Self::from_items(name, vec![item]);
        result.passed = false;
        result
    }

    /// Create a failed result for a check that aborted unexpectedly.
    pub fn errored(name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: false,
            informational: false,
            error: Some(error.into()),
            items: Vec::new(),
            file_sizes: None,
            duration_ms: None,
        }
    }

    /// Create an informational result from a size census.
    pub fn census(name: impl Into<String>, file_sizes: BTreeMap<String, u64>) -> Self {
        Self {
            name: name.into(),
            passed: true,
            informational: true,
            error: None,
            items: Vec::new(),
            file_sizes: Some(file_sizes),
            duration_ms: None,
        }
    }

    /// Attach logged items.
    pub fn with_items(mut self, items: Vec<CheckItem>) -> Self {
        self.items = items;
        self
    }

    /// Whether this result counts toward the overall verdict.
    pub fn is_verdict(&self) -> bool {
        !self.informational
    }
}

/// Aggregated results from all checks.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutput {
    /// Local timestamp (`YYYY-MM-DD HH:MM:SS`).
    pub timestamp: String,

    /// Whether every pass/fail check passed.
    pub passed: bool,

    /// Results for each check, in run order.
    pub checks: Vec<CheckResult>,
}

impl CheckOutput {
    /// Create output from check results.
    pub fn new(timestamp: String, checks: Vec<CheckResult>) -> Self {
        let passed = checks.iter().filter(|c| c.is_verdict()).all(|c| c.passed);
        Self {
            timestamp,
            passed,
            checks,
        }
    }

    /// Names of failing pass/fail checks, in run order.
    pub fn failed_checks(&self) -> impl Iterator<Item = &str> {
        self.checks
            .iter()
            .filter(|c| c.is_verdict() && !c.passed)
            .map(|c| c.name.as_str())
    }

    /// Size census results, if the census ran.
    pub fn file_sizes(&self) -> Option<&BTreeMap<String, u64>> {
        self.checks.iter().find_map(|c| c.file_sizes.as_ref())
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
