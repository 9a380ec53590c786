// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles deploycheck.toml parsing with version validation and unknown key
//! warnings. Every section is optional; the defaults describe the stock
//! GitHub Pages slide deck layout.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Config file name looked up in the deployment directory and its parents.
pub const CONFIG_FILE_NAME: &str = "deploycheck.toml";

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "files", "html", "responsive", "report"];

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Captures every top-level key so unknown ones can be reported.
#[derive(Deserialize)]
struct FlexibleConfig {
    #[serde(flatten)]
    keys: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Expected deployment files.
    #[serde(default)]
    pub files: FilesConfig,

    /// HTML content expectations.
    #[serde(default)]
    pub html: HtmlConfig,

    /// Responsive design expectations.
    #[serde(default)]
    pub responsive: ResponsiveConfig,

    /// Report output settings.
    #[serde(default)]
    pub report: ReportConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            files: FilesConfig::default(),
            html: HtmlConfig::default(),
            responsive: ResponsiveConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

/// Deployment file layout.
#[derive(Debug, Clone, Deserialize)]
pub struct FilesConfig {
    /// Main document inspected by the content checks.
    #[serde(default = "FilesConfig::default_document")]
    pub document: String,

    /// Files that must exist.
    #[serde(default = "FilesConfig::default_required")]
    pub required: Vec<String>,

    /// Files reported when missing, without failing the check.
    #[serde(default = "FilesConfig::default_optional")]
    pub optional: Vec<String>,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            document: Self::default_document(),
            required: Self::default_required(),
            optional: Self::default_optional(),
        }
    }
}

impl FilesConfig {
    fn default_document() -> String {
        "index.html".to_string()
    }

    fn default_required() -> Vec<String> {
        vec![
            "index.html".to_string(),
            "README.md".to_string(),
            ".nojekyll".to_string(),
        ]
    }

    fn default_optional() -> Vec<String> {
        vec![
            "GITHUB_PAGES_DEPLOYMENT.md".to_string(),
            "deployment_test.js".to_string(),
        ]
    }
}

/// HTML content check configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    /// Required value of the `<html lang>` attribute (None = any non-empty value).
    #[serde(default)]
    pub language: Option<String>,

    /// Exact number of slide sections (default: 8).
    #[serde(default = "HtmlConfig::default_slides")]
    pub slides: usize,

    /// Navigation functions the document should define.
    #[serde(default = "HtmlConfig::default_functions")]
    pub functions: Vec<String>,

    /// Minimum number of `functions` that must be found (default: 4).
    #[serde(default = "HtmlConfig::default_min_functions")]
    pub min_functions: usize,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            language: None,
            slides: Self::default_slides(),
            functions: Self::default_functions(),
            min_functions: Self::default_min_functions(),
        }
    }
}

impl HtmlConfig {
    fn default_slides() -> usize {
        8
    }

    fn default_functions() -> Vec<String> {
        [
            "changeSlide",
            "goToSlide",
            "showSlide",
            "updateNavigation",
            "createProgressIndicator",
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }

    fn default_min_functions() -> usize {
        4
    }
}

/// Responsive design check configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponsiveConfig {
    /// Breakpoint (px) expected for mobile layouts; informational only.
    #[serde(default = "ResponsiveConfig::default_mobile_breakpoint")]
    pub mobile_breakpoint: u32,
}

impl Default for ResponsiveConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: Self::default_mobile_breakpoint(),
        }
    }
}

impl ResponsiveConfig {
    fn default_mobile_breakpoint() -> u32 {
        768
    }
}

/// Report output configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Report file name, written into the deployment directory.
    #[serde(default = "ReportConfig::default_file")]
    pub file: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            file: Self::default_file(),
        }
    }
}

impl ReportConfig {
    fn default_file() -> String {
        "deployment_validation_report.md".to_string()
    }
}

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    for key in unknown_keys(&content, path)? {
        warn_unknown_key(path, &key);
    }

    parse(&content, path)
}

/// Parse config from string content.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let version_check: VersionOnly = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    let version = version_check.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    let config: Config = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if config.html.min_functions > config.html.functions.len() {
        return Err(Error::Config {
            message: format!(
                "html.min_functions ({}) exceeds the number of html.functions ({})",
                config.html.min_functions,
                config.html.functions.len()
            ),
            path: Some(path.to_path_buf()),
        });
    }

    Ok(config)
}

/// Top-level keys that deploycheck does not recognize.
pub fn unknown_keys(content: &str, path: &Path) -> Result<Vec<String>> {
    let flexible: FlexibleConfig = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    Ok(flexible
        .keys
        .into_keys()
        .filter(|key| !KNOWN_KEYS.contains(&key.as_str()))
        .collect())
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "deploycheck: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
