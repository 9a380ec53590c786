//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running the deploycheck binary against
//! temporary deployment directories.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Trait for converting into a string predicate.
/// Allows passing `&str` (as contains) or any `Predicate<str>`.
pub trait IntoStrPredicate<P: Predicate<str>> {
    fn into_predicate(self) -> P;
}

impl IntoStrPredicate<predicates::str::ContainsPredicate> for &str {
    fn into_predicate(self) -> predicates::str::ContainsPredicate {
        predicates::str::contains(self)
    }
}

impl<P: Predicate<str>> IntoStrPredicate<P> for P {
    fn into_predicate(self) -> P {
        self
    }
}

/// Returns a Command configured to run the deploycheck binary
pub fn deploycheck_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("deploycheck"));
    // Keep the host environment from leaking into specs.
    cmd.env_remove("DEPLOYCHECK_CONFIG")
        .env_remove("DEPLOYCHECK_LOG")
        .env_remove("COLOR");
    cmd
}

/// Create a validation builder for text output
pub fn cli() -> RunBuilder<Text> {
    RunBuilder::new()
}

/// Typestate markers for output mode
pub struct Text;
pub struct Json;

/// Fluent builder around a single deploycheck invocation
pub struct RunBuilder<Mode = Text> {
    dir: Option<PathBuf>,
    args: Vec<String>,
    envs: Vec<(String, String)>,
    _mode: PhantomData<Mode>,
}

#[allow(dead_code)]
impl RunBuilder<Text> {
    fn new() -> Self {
        Self {
            dir: None,
            args: Vec::new(),
            envs: Vec::new(),
            _mode: PhantomData,
        }
    }

    pub fn json(self) -> RunBuilder<Json> {
        RunBuilder {
            dir: self.dir,
            args: self.args,
            envs: self.envs,
            _mode: PhantomData,
        }
    }

    pub fn passes(self) -> RunAssert {
        run_exits(self.command(), 0)
    }

    pub fn fails(self) -> RunAssert {
        run_exits(self.command(), 1)
    }

    pub fn exits(self, code: i32) -> RunAssert {
        run_exits(self.command(), code)
    }
}

impl RunBuilder<Json> {
    pub fn passes(self) -> ChecksJson {
        let output = run_exits(self.command(), 0);
        ChecksJson::new(&output.output.stdout)
    }

    pub fn fails(self) -> ChecksJson {
        let output = run_exits(self.command(), 1);
        ChecksJson::new(&output.output.stdout)
    }
}

#[allow(dead_code)]
impl<Mode: 'static> RunBuilder<Mode> {
    /// Set working directory
    pub fn pwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.dir = Some(path.into());
        self
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    fn command(self) -> Command {
        let is_json = std::any::TypeId::of::<Mode>() == std::any::TypeId::of::<Json>();
        let mut cmd = deploycheck_cmd();

        if is_json {
            cmd.args(["-o", "json"]);
        }
        cmd.args(&self.args);

        if let Some(dir) = self.dir {
            cmd.current_dir(dir);
        }
        for (key, value) in self.envs {
            cmd.env(key, value);
        }
        cmd
    }
}

fn run_exits(mut cmd: Command, code: i32) -> RunAssert {
    let output = cmd.output().expect("command should run");
    assert_eq!(
        output.status.code(),
        Some(code),
        "expected exit code {}, got {:?}\nstdout: {}\nstderr: {}",
        code,
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    RunAssert { output }
}

/// All checks JSON output
pub struct ChecksJson {
    root: serde_json::Value,
}

#[allow(dead_code)]
impl ChecksJson {
    fn new(stdout: &[u8]) -> Self {
        let root: serde_json::Value = serde_json::from_slice(stdout).expect("valid JSON");
        Self { root }
    }

    /// Get the root JSON value
    pub fn value(&self) -> &serde_json::Value {
        &self.root
    }

    /// Get all checks as array
    pub fn checks(&self) -> &Vec<serde_json::Value> {
        self.root.get("checks").and_then(|v| v.as_array()).unwrap()
    }

    /// Get a single check by name, panicking if absent
    pub fn check(&self, name: &str) -> &serde_json::Value {
        self.checks()
            .iter()
            .find(|c| c.get("name").and_then(|n| n.as_str()) == Some(name))
            .unwrap_or_else(|| panic!("check '{}' not found in output", name))
    }

    /// Whether the named check passed
    pub fn passed(&self, name: &str) -> bool {
        self.check(name)["passed"].as_bool().unwrap()
    }
}

pub struct RunAssert {
    output: std::process::Output,
}

#[allow(dead_code)]
impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Assert stdout matches predicate.
    pub fn stdout_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            predicate.into_predicate().eval(&stdout),
            "stdout predicate failed:\n{}",
            stdout
        );
        self
    }

    /// Assert stdout does not match predicate.
    pub fn stdout_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            !predicate.into_predicate().eval(&stdout),
            "stdout should NOT match predicate:\n{}",
            stdout
        );
        self
    }

    /// Assert stderr matches predicate.
    pub fn stderr_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(
            predicate.into_predicate().eval(&stderr),
            "stderr predicate failed:\n{}",
            stderr
        );
        self
    }

    /// Assert stderr does not match predicate.
    pub fn stderr_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(
            !predicate.into_predicate().eval(&stderr),
            "stderr should NOT match predicate:\n{}",
            stderr
        );
        self
    }
}

// =============================================================================
// Site
// =============================================================================

const DOCUMENT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Ink and Vermillion</title>
    <style>
        :root { --ink-black: #1a1a1a; --warm-gold: #d4a017; }
        body { overflow: hidden; background: linear-gradient(135deg, #111, #333); }
        .slide { transition: opacity 0.5s ease; transform: scale(1); clip-path: circle(50%); }
        .navigation { backdrop-filter: blur(10px); }
        @keyframes fadeIn { from { opacity: 0; } to { opacity: 1; } }
        @media (max-width: 768px) { .slide { padding: 1rem; } }
    </style>
</head>
<body>
{SLIDES}
    <script>
        function changeSlide(direction) {}
        function goToSlide(index) {}
        function showSlide(index) {}
        function updateNavigation() {}
        function createProgressIndicator() {}
    </script>
</body>
</html>
"#;

/// A slide deck satisfying every content check, with `slides` sections.
pub fn deck(slides: usize) -> String {
    let sections: Vec<String> = (1..=slides)
        .map(|n| format!("    <section class=\"slide\" data-slide=\"{n}\"><h2>{n}</h2></section>"))
        .collect();
    DOCUMENT_TEMPLATE.replace("{SLIDES}", &sections.join("\n"))
}

/// Temporary deployment directory with helper methods.
///
/// ```ignore
/// let site = Site::valid();
/// site.remove("README.md");
/// cli().pwd(site.path()).fails();
/// ```
pub struct Site {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl Site {
    /// Create an empty directory with no files
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Create a complete deployment that passes every check
    pub fn valid() -> Self {
        let site = Self::empty();
        site.file("index.html", &deck(8));
        site.file("README.md", "# Deck\n");
        site.file(".nojekyll", "");
        site.file("GITHUB_PAGES_DEPLOYMENT.md", "# Deploying\n");
        site.file("deployment_test.js", "console.log('ok');\n");
        site
    }

    /// Get the deployment path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write deploycheck.toml (auto-prefixes with `version = 1` if not present)
    pub fn config(&self, content: &str) {
        let content = if content.contains("version") {
            content.to_string()
        } else {
            format!("version = 1\n{}", content)
        };
        self.file("deploycheck.toml", &content);
    }

    /// Write a file, creating parent directories
    pub fn file(&self, path: &str, content: &str) {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }

    /// Delete a file
    pub fn remove(&self, path: &str) {
        std::fs::remove_file(self.dir.path().join(path)).unwrap();
    }

    /// Read a file back
    pub fn read(&self, path: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(path)).unwrap()
    }
}
