// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Markdown deployment report.
//!
//! The report is rendered with `fmt::Write` into a `String` so the same text
//! can be printed to the console and persisted next to the deployment.

use std::fmt::Write;
use std::path::{Path, PathBuf};

use crate::check::CheckOutput;
use crate::error::{Error, Result};
use crate::file_size::group_thousands;

/// Render the markdown report for a completed run.
pub fn render(output: &CheckOutput) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_markdown(&mut out, output);
    out
}

fn write_markdown(out: &mut String, output: &CheckOutput) -> std::fmt::Result {
    writeln!(out, "# GitHub Pages Deployment Validation Report")?;
    writeln!(out, "Generated: {}", output.timestamp)?;
    writeln!(out)?;

    writeln!(out, "## Summary")?;
    for check in output.checks.iter().filter(|c| c.is_verdict()) {
        let status = if check.passed { "✅ PASS" } else { "❌ FAIL" };
        writeln!(out, "- **{}**: {}", check.name, status)?;
    }

    if let Some(sizes) = output.file_sizes() {
        writeln!(out)?;
        writeln!(out, "## File Sizes")?;
        for (name, size) in sizes {
            writeln!(out, "- **{}**: {} bytes", name, group_thousands(*size))?;
        }
    }

    writeln!(out)?;
    writeln!(out, "## Recommendations")?;
    if output.passed {
        writeln!(
            out,
            "🎉 All checks passed. The site is safe to deploy to GitHub Pages!"
        )?;
    } else {
        writeln!(out, "⚠️ Some checks failed. Fix these before deploying:")?;
        for name in output.failed_checks() {
            writeln!(out, "- Fix {} issues", name)?;
        }
    }

    Ok(())
}

/// Write the rendered report into `dir`, overwriting any previous report.
///
/// Returns the path that was written.
pub fn write_report(dir: &Path, file_name: &str, report: &str) -> Result<PathBuf> {
    let path = dir.join(file_name);
    std::fs::write(&path, report).map_err(|source| Error::Io {
        path: path.clone(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = report.len(), "report written");
    Ok(path)
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
