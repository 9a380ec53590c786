// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Loading of the deployment's main document.
//!
//! Single-file decks often inline fonts and images as base64, so there is
//! no size cap; large documents are only logged.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Size at which a document is logged as large (1MB).
pub const LARGE_FILE_WARN: u64 = 1024 * 1024;

/// The main HTML document, decoded as text.
#[derive(Debug)]
pub struct Document {
    /// Path the document was read from.
    pub path: PathBuf,

    /// Document text.
    pub text: String,
}

impl Document {
    /// Read `path` and decode it as UTF-8.
    pub fn load(path: &Path) -> Result<Self> {
        let io_err = |source| Error::Io {
            path: path.to_path_buf(),
            source,
        };

        let bytes = std::fs::read(path).map_err(io_err)?;
        if bytes.len() as u64 > LARGE_FILE_WARN {
            tracing::info!(
                path = %path.display(),
                size_mb = bytes.len() as f64 / 1_000_000.0,
                "reading large document"
            );
        }

        let text = String::from_utf8(bytes).map_err(|_| Error::NotUtf8 {
            path: path.to_path_buf(),
        })?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "loaded document");

        Ok(Self {
            path: path.to_path_buf(),
            text,
        })
    }
}

impl AsRef<str> for Document {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
