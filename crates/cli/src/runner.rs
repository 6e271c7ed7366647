// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential category runner with per-file error recovery.
//!
//! Lints every existing file in a category, accumulating totals and
//! evaluating pass/fail against the category's thresholds. An engine
//! failure on one file marks the category failed but does not stop
//! iteration over the remaining files.

use crate::category::{Category, CategoryOutcome, CategoryResult};
use crate::discovery::FixtureSet;
use crate::engine::LintEngine;

/// The suite runner evaluates categories one at a time.
pub struct SuiteRunner<'a> {
    engine: &'a dyn LintEngine,
    fixtures: &'a FixtureSet,
}

impl<'a> SuiteRunner<'a> {
    pub fn new(engine: &'a dyn LintEngine, fixtures: &'a FixtureSet) -> Self {
        Self { engine, fixtures }
    }

    /// Run every category in table order.
    pub fn run(&self, categories: &[Category]) -> Vec<CategoryOutcome> {
        categories.iter().map(|c| self.run_category(c)).collect()
    }

    /// Run one category against the discovered fixture set.
    ///
    /// The file list is first filtered to files that were actually
    /// discovered; a category with nothing left is skipped entirely and
    /// contributes nothing to the overall verdict.
    pub fn run_category(&self, category: &Category) -> CategoryOutcome {
        let files: Vec<_> = category
            .files
            .iter()
            .filter(|f| self.fixtures.contains(f))
            .collect();

        if files.is_empty() {
            tracing::debug!("category {}: no fixture files present, skipped", category.name);
            return CategoryOutcome::skipped(&category.name);
        }

        let mut result = CategoryResult::new(&category.name);

        for file in files {
            match self.engine.lint(&self.fixtures.resolve(file)) {
                Ok(file_result) => result.record(file_result),
                Err(err) => {
                    // One bad file does not abort the category.
                    tracing::warn!("category {}: {}", category.name, err);
                    result.record_failure();
                }
            }
        }

        CategoryOutcome::evaluated(category, result)
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
