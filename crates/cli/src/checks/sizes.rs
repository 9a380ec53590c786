// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! File size census.
//!
//! Records the size of every top-level file in the deployment directory.
//! Informational only: the census never fails a deployment, but an
//! unreadable directory is reported as an error.

use std::collections::BTreeMap;
use std::path::Path;

use crate::check::{Check, CheckContext, CheckItem, CheckResult};
use crate::error::{Error, Result};
use crate::file_size::human_size;

/// The sizes check records file sizes for the report.
pub struct SizesCheck;

impl Check for SizesCheck {
    fn name(&self) -> &'static str {
        "file_sizes"
    }

    fn description(&self) -> &'static str {
        "File sizes"
    }

    fn run(&self, ctx: &CheckContext) -> CheckResult {
        let sizes = match file_sizes(ctx.root) {
            Ok(sizes) => sizes,
            Err(e) => return CheckResult::errored(self.name(), e.to_string()),
        };

        let items = sizes
            .iter()
            .map(|(name, size)| CheckItem::info(name).with_detail(human_size(*size)))
            .collect();

        CheckResult::census(self.name(), sizes).with_items(items)
    }
}

/// Sizes of the regular files directly inside `dir` (non-recursive).
pub fn file_sizes(dir: &Path) -> Result<BTreeMap<String, u64>> {
    let io_err = |source| Error::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut sizes = BTreeMap::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let metadata = match std::fs::metadata(entry.path()) {
            Ok(m) => m,
            Err(e) => {
                tracing::debug!("skipping {}: {}", entry.path().display(), e);
                continue;
            }
        };
        if metadata.is_file() {
            sizes.insert(
                entry.file_name().to_string_lossy().into_owned(),
                metadata.len(),
            );
        }
    }

    Ok(sizes)
}

#[cfg(test)]
#[path = "sizes_tests.rs"]
mod tests;
