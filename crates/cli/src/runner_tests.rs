// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unit tests for the suite runner, including the threshold scenarios
//! from the category contract.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::*;
use crate::category::Category;
use crate::engine::{FileLintResult, Finding, LintEngine, Severity};
use crate::error::{Error, Result};

/// Mock engine backed by a map from file name to a canned result.
/// Files mapped to `None` simulate an engine failure.
struct MockEngine {
    results: HashMap<PathBuf, Option<FileLintResult>>,
}

impl MockEngine {
    fn new() -> Self {
        Self {
            results: HashMap::new(),
        }
    }

    fn with_result(mut self, name: &str, errors: usize, warnings: usize, rules: &[&str]) -> Self {
        let findings = rules
            .iter()
            .map(|rule| Finding {
                severity: Severity::Warning,
                line: 1,
                message: "finding".to_string(),
                rule_id: Some(rule.to_string()),
            })
            .collect();
        self.results.insert(
            PathBuf::from(name),
            Some(FileLintResult {
                path: PathBuf::from(name),
                error_count: errors,
                warning_count: warnings,
                findings,
            }),
        );
        self
    }

    fn with_failure(mut self, name: &str) -> Self {
        self.results.insert(PathBuf::from(name), None);
        self
    }
}

impl LintEngine for MockEngine {
    fn lint(&self, path: &Path) -> Result<FileLintResult> {
        // Runner resolves against the fixture root; match on file name.
        let name = path.file_name().map(PathBuf::from).unwrap_or_default();
        match self.results.get(&name) {
            Some(Some(result)) => Ok(result.clone()),
            _ => Err(Error::Engine {
                path: path.to_path_buf(),
                message: "mock failure".to_string(),
            }),
        }
    }
}

fn fixtures(files: &[&str]) -> FixtureSet {
    let mut set = FixtureSet::new("fixtures");
    for file in files {
        set.insert(PathBuf::from(file));
    }
    set
}

fn category(files: &[&str], max_errors: usize, max_warnings: usize) -> Category {
    Category {
        name: "basic".to_string(),
        description: String::new(),
        files: files.iter().map(PathBuf::from).collect(),
        max_errors,
        max_warnings,
        expected_rules: Vec::new(),
    }
}

#[test]
fn category_within_thresholds_passes() {
    // A yields 0/3, B yields 0/2 against max 0 errors, 10 warnings.
    let engine = MockEngine::new()
        .with_result("a.js", 0, 3, &[])
        .with_result("b.js", 0, 2, &[]);
    let set = fixtures(&["a.js", "b.js"]);
    let runner = SuiteRunner::new(&engine, &set);

    let outcome = runner.run_category(&category(&["a.js", "b.js"], 0, 10));

    assert!(!outcome.skipped);
    assert!(outcome.passed);
    assert_eq!(outcome.result.total_errors, 0);
    assert_eq!(outcome.result.total_warnings, 5);
}

#[test]
fn one_error_over_threshold_fails() {
    // Same category but B yields 1 error: totals 1/5 against max 0.
    let engine = MockEngine::new()
        .with_result("a.js", 0, 3, &[])
        .with_result("b.js", 1, 2, &[]);
    let set = fixtures(&["a.js", "b.js"]);
    let runner = SuiteRunner::new(&engine, &set);

    let outcome = runner.run_category(&category(&["a.js", "b.js"], 0, 10));

    assert!(!outcome.passed);
    assert_eq!(outcome.result.total_errors, 1);
    assert_eq!(outcome.result.total_warnings, 5);
}

#[test]
fn engine_failure_fails_category_but_continues() {
    // Engine fails on A; B succeeds clean. Category fails anyway.
    let engine = MockEngine::new().with_result("b.js", 0, 0, &[]);
    let set = fixtures(&["a.js", "b.js"]);
    let runner = SuiteRunner::new(&engine, &set);

    let outcome = runner.run_category(&category(&["a.js", "b.js"], 0, 10));

    assert!(!outcome.passed);
    assert_eq!(outcome.result.engine_failures, 1);
    // B was still linted after A failed.
    assert_eq!(outcome.result.files.len(), 1);
    assert_eq!(outcome.result.files[0].path.file_name().unwrap(), "b.js");
}

#[test]
fn explicit_failure_entry_fails_category() {
    let engine = MockEngine::new()
        .with_failure("a.js")
        .with_result("b.js", 0, 0, &[]);
    let set = fixtures(&["a.js", "b.js"]);
    let runner = SuiteRunner::new(&engine, &set);

    let outcome = runner.run_category(&category(&["a.js", "b.js"], 5, 5));
    assert!(!outcome.passed);
}

#[test]
fn missing_files_are_excluded_from_evaluation() {
    let engine = MockEngine::new().with_result("a.js", 0, 1, &[]);
    // Only a.js was discovered; gone.js is absent from the fixture set.
    let set = fixtures(&["a.js"]);
    let runner = SuiteRunner::new(&engine, &set);

    let outcome = runner.run_category(&category(&["a.js", "gone.js"], 0, 10));

    assert!(outcome.passed);
    assert_eq!(outcome.result.files.len(), 1);
}

#[test]
fn all_missing_files_skips_category() {
    let engine = MockEngine::new();
    let set = fixtures(&[]);
    let runner = SuiteRunner::new(&engine, &set);

    let outcome = runner.run_category(&category(&["gone.js"], 0, 0));

    assert!(outcome.skipped);
    assert!(outcome.result.files.is_empty());
}

#[test]
fn empty_file_list_skips_category() {
    let engine = MockEngine::new();
    let set = fixtures(&["a.js"]);
    let runner = SuiteRunner::new(&engine, &set);

    let outcome = runner.run_category(&category(&[], 0, 0));
    assert!(outcome.skipped);
}

#[test]
fn run_evaluates_categories_in_order() {
    let engine = MockEngine::new()
        .with_result("a.js", 0, 0, &[])
        .with_result("b.js", 2, 0, &[]);
    let set = fixtures(&["a.js", "b.js"]);
    let runner = SuiteRunner::new(&engine, &set);

    let mut pass = category(&["a.js"], 0, 0);
    pass.name = "pass".to_string();
    let mut fail = category(&["b.js"], 0, 0);
    fail.name = "fail".to_string();
    let mut skip = category(&["gone.js"], 0, 0);
    skip.name = "skip".to_string();

    let outcomes = runner.run(&[pass, fail, skip]);

    assert_eq!(outcomes.len(), 3);
    assert!(outcomes[0].passed);
    assert!(!outcomes[1].passed);
    assert!(outcomes[2].skipped);
    assert_eq!(outcomes[0].result.name, "pass");
    assert_eq!(outcomes[2].result.name, "skip");
}

#[test]
fn rules_accumulate_across_files() {
    let engine = MockEngine::new()
        .with_result("a.js", 0, 1, &["no-undef"])
        .with_result("b.js", 0, 1, &["semi", "no-undef"]);
    let set = fixtures(&["a.js", "b.js"]);
    let runner = SuiteRunner::new(&engine, &set);

    let mut cat = category(&["a.js", "b.js"], 0, 10);
    cat.expected_rules = vec!["no-undef".to_string(), "eqeqeq".to_string()];

    let outcome = runner.run_category(&cat);

    assert_eq!(outcome.result.rules_seen.len(), 2);
    // eqeqeq never appeared: advisory, does not affect the verdict.
    assert_eq!(outcome.missing_rules, vec!["eqeqeq"]);
    assert!(outcome.passed);
}
