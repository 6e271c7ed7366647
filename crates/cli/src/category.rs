//! Category model and result accumulation.

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::config::CategoryConfig;
use crate::engine::FileLintResult;

/// A named group of fixture files sharing lint-outcome thresholds.
/// Immutable, built from the config table at startup.
#[derive(Debug, Clone)]
pub struct Category {
    pub name: String,
    pub description: String,
    /// Fixture files, relative to the fixture root.
    pub files: Vec<PathBuf>,
    pub max_errors: usize,
    pub max_warnings: usize,
    /// Rule ids expected somewhere in the category. Coverage hint, not a gate.
    pub expected_rules: Vec<String>,
}

impl From<CategoryConfig> for Category {
    fn from(config: CategoryConfig) -> Self {
        Self {
            name: config.name,
            description: config.description,
            files: config.files,
            max_errors: config.max_errors,
            max_warnings: config.max_warnings,
            expected_rules: config.expected_rules,
        }
    }
}

/// Accumulated lint totals for one category.
///
/// Built incrementally as files are linted; totals always equal the sum
/// over the recorded per-file results.
#[derive(Debug, Default)]
pub struct CategoryResult {
    pub name: String,
    pub total_errors: usize,
    pub total_warnings: usize,
    /// Distinct rule ids observed across all files.
    pub rules_seen: BTreeSet<String>,
    pub files: Vec<FileLintResult>,
    /// Files the engine failed on. Any failure fails the category.
    pub engine_failures: usize,
}

impl CategoryResult {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Fold one file's lint results into the totals.
    pub fn record(&mut self, result: FileLintResult) {
        self.total_errors += result.error_count;
        self.total_warnings += result.warning_count;
        for finding in &result.findings {
            if let Some(rule) = &finding.rule_id {
                self.rules_seen.insert(rule.clone());
            }
        }
        self.files.push(result);
    }

    /// Record an engine failure for one file.
    pub fn record_failure(&mut self) {
        self.engine_failures += 1;
    }

    /// Whether the totals satisfy the category's thresholds.
    pub fn meets(&self, category: &Category) -> bool {
        self.engine_failures == 0
            && self.total_errors <= category.max_errors
            && self.total_warnings <= category.max_warnings
    }

    /// Expected rules never observed. Advisory only.
    pub fn missing_rules(&self, category: &Category) -> Vec<String> {
        category
            .expected_rules
            .iter()
            .filter(|rule| !self.rules_seen.contains(*rule))
            .cloned()
            .collect()
    }
}

/// Verdict for one category.
#[derive(Debug)]
pub struct CategoryOutcome {
    pub passed: bool,
    /// Skipped categories (no fixture files present) contribute nothing
    /// to the overall verdict.
    pub skipped: bool,
    /// Expected rules never observed, for display only.
    pub missing_rules: Vec<String>,
    pub result: CategoryResult,
}

impl CategoryOutcome {
    /// Outcome for a category with no existing fixture files.
    pub fn skipped(name: impl Into<String>) -> Self {
        Self {
            passed: true,
            skipped: true,
            missing_rules: Vec::new(),
            result: CategoryResult::new(name),
        }
    }

    /// Outcome for an evaluated category.
    pub fn evaluated(category: &Category, result: CategoryResult) -> Self {
        Self {
            passed: result.meets(category),
            skipped: false,
            missing_rules: result.missing_rules(category),
            result,
        }
    }
}

#[cfg(test)]
#[path = "category_tests.rs"]
mod tests;
