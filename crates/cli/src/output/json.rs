// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed).

use std::io::Write;

use chrono::Local;

use crate::check::{CheckOutput, CheckResult};

/// Timestamp format shared by the JSON output and the markdown report.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the complete output as pretty-printed JSON.
    pub fn write(&mut self, output: &CheckOutput) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(output).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

/// Create CheckOutput stamped with the current local time.
pub fn create_output(checks: Vec<CheckResult>) -> CheckOutput {
    CheckOutput::new(Local::now().format(TIMESTAMP_FORMAT).to_string(), checks)
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
