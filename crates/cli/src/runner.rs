// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential check runner with error recovery.
//!
//! Runs checks one after another in registry order, isolating panics so
//! one broken check doesn't prevent the remaining checks from running.

use std::any::Any;
use std::path::Path;
use std::time::Instant;

use crate::check::{Check, CheckContext, CheckResult};
use crate::config::Config;

/// The check runner executes checks in sequence.
pub struct CheckRunner<'a> {
    root: &'a Path,
    config: &'a Config,
}

impl<'a> CheckRunner<'a> {
    pub fn new(root: &'a Path, config: &'a Config) -> Self {
        Self { root, config }
    }

    /// Run all provided checks and return results in the same order.
    pub fn run(&self, checks: &[Box<dyn Check>]) -> Vec<CheckResult> {
        self.run_with(checks, |_, _| {})
    }

    /// Run all provided checks, handing each check and its result to
    /// `on_result` as soon as the check finishes.
    ///
    /// A panicking check is recorded as a failed result carrying the
    /// panic message.
    pub fn run_with(
        &self,
        checks: &[Box<dyn Check>],
        mut on_result: impl FnMut(&dyn Check, &CheckResult),
    ) -> Vec<CheckResult> {
        let ctx = CheckContext {
            root: self.root,
            config: self.config,
        };

        let mut results = Vec::with_capacity(checks.len());
        for check in checks {
            let check_start = Instant::now();
            let mut result =
                match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| check.run(&ctx))) {
                    Ok(result) => result,
                    Err(payload) => {
                        let message = panic_message(payload.as_ref());
                        tracing::warn!("{} check failed: {}", check.name(), message);
                        CheckResult::errored(check.name(), message)
                    }
                };
            let duration_ms = check_start.elapsed().as_millis() as u64;
            result.duration_ms = Some(duration_ms);

            tracing::debug!(
                check = check.name(),
                passed = result.passed,
                duration_ms,
                "check finished"
            );

            on_result(check.as_ref(), &result);
            results.push(result);
        }

        results
    }
}

/// Extract the message from a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "check panicked".to_string()
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
