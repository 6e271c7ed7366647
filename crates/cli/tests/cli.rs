// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end CLI tests using a stub lint engine script.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn lintsuite() -> Command {
    Command::cargo_bin("lintsuite").unwrap()
}

#[test]
fn help_prints_usage_and_exits_zero() {
    lintsuite()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--category"))
        .stdout(predicate::str::contains("--verbose"));
}

#[test]
fn missing_config_exits_one() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();

    lintsuite()
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("lintsuite.toml"));
}

#[cfg(unix)]
mod suite {
    use std::os::unix::fs::PermissionsExt;

    use super::*;

    /// A suite with one stub engine script and two fixture files.
    /// The engine reports per-file results by matching on the file name.
    fn write_suite(dir: &Path, a_report: &str, b_report: &str) {
        fs::create_dir(dir.join(".git")).unwrap();
        fs::create_dir_all(dir.join("fixtures/sub")).unwrap();
        fs::write(dir.join("fixtures/a.js"), "var x = 1\n").unwrap();
        fs::write(dir.join("fixtures/sub/b.js"), "var y = 2\n").unwrap();

        let engine = dir.join("engine.sh");
        fs::write(
            &engine,
            format!(
                "#!/bin/sh\ncase \"$1\" in\n*a.js) cat <<'EOF'\n{}\nEOF\n;;\n*) cat <<'EOF'\n{}\nEOF\n;;\nesac\n",
                a_report, b_report
            ),
        )
        .unwrap();
        fs::set_permissions(&engine, fs::Permissions::from_mode(0o755)).unwrap();

        fs::write(
            dir.join("lintsuite.toml"),
            r#"
version = 1

[fixtures]
root = "fixtures"
extensions = ["js"]

[engine]
command = "./engine.sh"

[[category]]
name = "basic"
description = "Plain script fixtures"
files = ["a.js", "sub/b.js"]
max_errors = 0
max_warnings = 10
expected_rules = ["no-undef"]

[[category]]
name = "absent"
files = ["missing.js"]
"#,
        )
        .unwrap();
    }

    const CLEAN: &str = r#"[{"errorCount": 0, "warningCount": 2, "messages": [
      {"severity": 1, "line": 1, "message": "w", "ruleId": "no-undef"}]}]"#;
    const ERRORS: &str = r#"[{"errorCount": 1, "warningCount": 0, "messages": [
      {"severity": 2, "line": 1, "message": "e", "ruleId": "semi"}]}]"#;

    #[test]
    fn passing_suite_exits_zero() {
        let dir = TempDir::new().unwrap();
        write_suite(dir.path(), CLEAN, CLEAN);

        lintsuite()
            .current_dir(dir.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("basic: PASS"))
            .stdout(predicate::str::contains("absent: SKIP"))
            .stdout(predicate::str::contains("1 category passed, 1 skipped"));
    }

    #[test]
    fn threshold_violation_exits_one() {
        let dir = TempDir::new().unwrap();
        write_suite(dir.path(), CLEAN, ERRORS);

        lintsuite()
            .current_dir(dir.path())
            .assert()
            .code(1)
            .stdout(predicate::str::contains("basic: FAIL"));
    }

    #[test]
    fn category_filter_narrows_execution() {
        let dir = TempDir::new().unwrap();
        write_suite(dir.path(), CLEAN, ERRORS);

        // The failing category is filtered out; only "absent" runs (skipped).
        lintsuite()
            .current_dir(dir.path())
            .arg("--category=absent")
            .assert()
            .success()
            .stdout(predicate::str::contains("absent: SKIP"))
            .stdout(predicate::str::contains("basic").not());
    }

    #[test]
    fn unknown_category_exits_one() {
        let dir = TempDir::new().unwrap();
        write_suite(dir.path(), CLEAN, CLEAN);

        lintsuite()
            .current_dir(dir.path())
            .arg("--category=nope")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("unknown category: nope"));
    }

    #[test]
    fn verbose_prints_finding_detail() {
        let dir = TempDir::new().unwrap();
        write_suite(dir.path(), CLEAN, CLEAN);

        lintsuite()
            .current_dir(dir.path())
            .arg("--verbose")
            .assert()
            .success()
            .stdout(predicate::str::contains("no-undef"));
    }

    #[test]
    fn missing_expected_rule_is_advisory() {
        let dir = TempDir::new().unwrap();
        // Neither report mentions no-undef; category still passes.
        const NO_RULES: &str =
            r#"[{"errorCount": 0, "warningCount": 0, "messages": []}]"#;
        write_suite(dir.path(), NO_RULES, NO_RULES);

        lintsuite()
            .current_dir(dir.path())
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "missing expected rule: no-undef (advisory)",
            ));
    }
}
