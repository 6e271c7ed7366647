//! Suite report aggregation.
//!
//! Folds category outcomes into an overall verdict plus display-only
//! aggregates. The aggregates (summed counts, rule union) never feed
//! back into any decision.

use std::collections::BTreeSet;

use chrono::{SecondsFormat, Utc};

use crate::category::CategoryOutcome;
use crate::error::ExitCode;

/// Aggregated results for a whole suite run.
#[derive(Debug)]
pub struct SuiteReport {
    /// ISO 8601 timestamp.
    pub timestamp: String,

    /// Logical AND of every evaluated category verdict.
    /// Vacuously true when every category was skipped.
    pub passed: bool,

    /// Summed error count across evaluated categories.
    pub total_errors: usize,

    /// Summed warning count across evaluated categories.
    pub total_warnings: usize,

    /// Union of distinct rule ids observed.
    pub rules_seen: BTreeSet<String>,

    /// Categories that were evaluated.
    pub evaluated: usize,

    /// Categories skipped for lack of fixture files.
    pub skipped: usize,

    pub outcomes: Vec<CategoryOutcome>,
}

impl SuiteReport {
    pub fn new(outcomes: Vec<CategoryOutcome>) -> Self {
        Self::with_timestamp(
            Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            outcomes,
        )
    }

    pub fn with_timestamp(timestamp: String, outcomes: Vec<CategoryOutcome>) -> Self {
        let mut passed = true;
        let mut total_errors = 0;
        let mut total_warnings = 0;
        let mut rules_seen = BTreeSet::new();
        let mut evaluated = 0;
        let mut skipped = 0;

        for outcome in &outcomes {
            if outcome.skipped {
                skipped += 1;
                continue;
            }
            evaluated += 1;
            passed &= outcome.passed;
            total_errors += outcome.result.total_errors;
            total_warnings += outcome.result.total_warnings;
            rules_seen.extend(outcome.result.rules_seen.iter().cloned());
        }

        Self {
            timestamp,
            passed,
            total_errors,
            total_warnings,
            rules_seen,
            evaluated,
            skipped,
            outcomes,
        }
    }

    /// Process exit code: 0 iff every evaluated category passed.
    pub fn exit_code(&self) -> ExitCode {
        if self.passed {
            ExitCode::Success
        } else {
            ExitCode::Failure
        }
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
