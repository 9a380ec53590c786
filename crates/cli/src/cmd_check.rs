// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check command implementation.

use std::path::{Path, PathBuf};
use std::time::Instant;

use deploycheck::checks;
use deploycheck::cli::{Cli, OutputFormat};
use deploycheck::color::resolve_color;
use deploycheck::config::{self, Config};
use deploycheck::discovery;
use deploycheck::error::ExitCode;
use deploycheck::output::json::{self, JsonFormatter};
use deploycheck::output::text::TextFormatter;
use deploycheck::report;
use deploycheck::runner::CheckRunner;

/// Run every check against the deployment directory.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let total_start = Instant::now();

    let cwd = std::env::current_dir()?;
    let root = cli.root(&cwd);

    let config = match discovery::resolve_config(cli.config.as_deref(), &root)? {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            config::load_with_warnings(&path)?
        }
        None => {
            tracing::debug!("no config found, using defaults");
            Config::default()
        }
    };

    let checks = checks::all_checks();
    let runner = CheckRunner::new(&root, &config);

    let output = match cli.output {
        OutputFormat::Text => {
            let mut formatter = TextFormatter::stdout(resolve_color(cli.color, cli.no_color));
            formatter.write_header(&root)?;

            let mut write_error = None;
            let results = runner.run_with(&checks, |check, result| {
                if write_error.is_none()
                    && let Err(e) = formatter.write_check(check.description(), result)
                {
                    write_error = Some(e);
                }
            });
            if let Some(e) = write_error {
                return Err(e.into());
            }

            let output = json::create_output(results);
            let rendered = report::render(&output);
            formatter.write_report(&rendered)?;
            if let Some(path) = save_report(&root, &config, &rendered) {
                formatter.write_saved(&path)?;
            }
            formatter.write_summary(&output)?;
            output
        }
        OutputFormat::Json => {
            let output = json::create_output(runner.run(&checks));
            save_report(&root, &config, &report::render(&output));
            JsonFormatter::new(std::io::stdout().lock()).write(&output)?;
            output
        }
    };

    tracing::debug!(
        passed = output.passed,
        total_ms = total_start.elapsed().as_millis() as u64,
        "validation finished"
    );

    if output.passed {
        Ok(ExitCode::Success)
    } else {
        Ok(ExitCode::CheckFailed)
    }
}

/// Persist the report, reporting failures without affecting the verdict.
fn save_report(root: &Path, config: &Config, rendered: &str) -> Option<PathBuf> {
    match report::write_report(root, &config.report.file, rendered) {
        Ok(path) => Some(path),
        Err(e) => {
            tracing::warn!("failed to save report: {}", e);
            eprintln!("deploycheck: failed to save report: {}", e);
            None
        }
    }
}
