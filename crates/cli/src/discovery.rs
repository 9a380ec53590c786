// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery.
//!
//! Looks for deploycheck.toml in the deployment directory, then in its
//! parents up to the enclosing git root. Without a git root, parents are
//! never searched.

use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE_NAME;
use crate::error::{Error, Result};

/// Find deploycheck.toml in `start_dir`, or in a parent inside the same
/// git work tree.
///
/// Outside a git work tree only `start_dir` itself is searched.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let local = start_dir.join(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }

    let git_root = start_dir
        .ancestors()
        .find(|dir| dir.join(".git").exists())?;

    start_dir
        .ancestors()
        .skip(1)
        .take_while(|dir| dir.starts_with(git_root))
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|path| path.is_file())
}

/// Resolve config path from CLI arg, env var, or discovery.
///
/// Priority:
/// 1. CLI flag `-C`/`--config` (handled by clap with env = "DEPLOYCHECK_CONFIG")
/// 2. Discovery from the deployment directory up to the git root
/// 3. None (use defaults)
pub fn resolve_config(explicit: Option<&Path>, root: &Path) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) => {
            if path.is_file() {
                Ok(Some(path.to_path_buf()))
            } else {
                Err(Error::Config {
                    message: format!("config file not found: {}", path.display()),
                    path: Some(path.to_path_buf()),
                })
            }
        }
        None => Ok(find_config(root)),
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
