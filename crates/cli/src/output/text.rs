// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! Progress log format:
//! ```text
//! <check description>
//!   PASS <label>: <detail>
//!   FAIL <label>: <detail>
//! ```

use std::io::Write;
use std::path::Path;

use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::check::{CheckItem, CheckOutput, CheckResult, ItemStatus};
use crate::color::scheme;

/// Width of the separator drawn around the report.
const SEPARATOR_WIDTH: usize = 50;

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    out: W,
}

impl TextFormatter<StandardStream> {
    /// Create a formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice) -> Self {
        Self::new(StandardStream::stdout(color_choice))
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the formatter, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write the run header.
    pub fn write_header(&mut self, root: &Path) -> std::io::Result<()> {
        write!(self.out, "Validating deployment: ")?;
        self.out.set_color(&scheme::path())?;
        write!(self.out, "{}", root.display())?;
        self.out.reset()?;
        writeln!(self.out)?;
        self.write_separator()?;
        writeln!(self.out)
    }

    /// Write a single check result (streaming).
    pub fn write_check(&mut self, title: &str, result: &CheckResult) -> std::io::Result<()> {
        self.out.set_color(&scheme::check_name())?;
        write!(self.out, "{}", title)?;
        self.out.reset()?;
        writeln!(self.out)?;

        for item in &result.items {
            self.write_item(item)?;
        }

        if let Some(ref error) = result.error {
            write!(self.out, "  ")?;
            self.write_marker(ItemStatus::Fail)?;
            writeln!(self.out, " check aborted: {}", error)?;
        }

        writeln!(self.out)
    }

    fn write_item(&mut self, item: &CheckItem) -> std::io::Result<()> {
        write!(self.out, "  ")?;
        self.write_marker(item.status)?;
        match item.detail {
            Some(ref detail) => writeln!(self.out, " {}: {}", item.label, detail),
            None => writeln!(self.out, " {}", item.label),
        }
    }

    fn write_marker(&mut self, status: ItemStatus) -> std::io::Result<()> {
        let (spec, text): (ColorSpec, &str) = match status {
            ItemStatus::Pass => (scheme::pass(), "PASS"),
            ItemStatus::Fail => (scheme::fail(), "FAIL"),
            ItemStatus::Warn => (scheme::warn(), "WARN"),
            ItemStatus::Info => (scheme::info(), "INFO"),
        };
        self.out.set_color(&spec)?;
        write!(self.out, "{}", text)?;
        self.out.reset()
    }

    /// Write a horizontal separator line.
    pub fn write_separator(&mut self) -> std::io::Result<()> {
        writeln!(self.out, "{}", "=".repeat(SEPARATOR_WIDTH))
    }

    /// Write the rendered report between separators.
    pub fn write_report(&mut self, report: &str) -> std::io::Result<()> {
        self.write_separator()?;
        writeln!(self.out, "{}", report.trim_end())?;
        writeln!(self.out)
    }

    /// Write where the report was saved.
    pub fn write_saved(&mut self, path: &Path) -> std::io::Result<()> {
        write!(self.out, "Report saved to: ")?;
        self.out.set_color(&scheme::path())?;
        write!(self.out, "{}", path.display())?;
        self.out.reset()?;
        writeln!(self.out)
    }

    /// Write the summary and final verdict.
    pub fn write_summary(&mut self, output: &CheckOutput) -> std::io::Result<()> {
        let verdicts: Vec<_> = output.checks.iter().filter(|c| c.is_verdict()).collect();
        let passed = verdicts.iter().filter(|c| c.passed).count();
        let failed = verdicts.len() - passed;

        self.write_separator()?;
        if failed == 0 {
            writeln!(
                self.out,
                "{} check{} passed",
                passed,
                if passed == 1 { "" } else { "s" }
            )?;
            self.out.set_color(&scheme::pass())?;
            write!(self.out, "Deployment is ready to publish.")?;
        } else {
            writeln!(
                self.out,
                "{} check{} passed, {} failed",
                passed,
                if passed == 1 { "" } else { "s" },
                failed
            )?;
            self.out.set_color(&scheme::fail())?;
            write!(self.out, "Fix the issues above before deploying.")?;
        }
        self.out.reset()?;
        writeln!(self.out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
