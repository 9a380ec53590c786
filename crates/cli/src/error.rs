// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Library errors and their process exit codes.

use std::path::PathBuf;

/// Errors raised while loading configuration or deployment files.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// deploycheck.toml is missing, malformed, or unsupported.
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("io error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The main document is not valid UTF-8.
    #[error("not valid UTF-8: {}", .path.display())]
    NotUtf8 { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Every pass/fail check passed
    Success = 0,
    /// At least one check failed
    CheckFailed = 1,
    /// Invalid configuration, reported before any check runs
    ConfigError = 2,
    /// Failure outside the checks (unreadable config, broken stdout)
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. } => ExitCode::ConfigError,
            Error::Io { .. } | Error::NotUtf8 { .. } => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
