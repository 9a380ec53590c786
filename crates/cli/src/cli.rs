// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

/// Validate a single-page GitHub Pages deployment before publishing
#[derive(Parser)]
#[command(name = "deploycheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Deployment directory to validate (default: current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "DEPLOYCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Force color output
    #[arg(long, conflicts_with = "no_color")]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Resolve the deployment directory against `cwd`.
    pub fn root(&self, cwd: &Path) -> PathBuf {
        match self.path {
            Some(ref path) if path.is_absolute() => path.clone(),
            Some(ref path) => cwd.join(path),
            None => cwd.to_path_buf(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Progress log followed by the markdown report
    #[default]
    Text,
    /// Machine-readable results on stdout
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
