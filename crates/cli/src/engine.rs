// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lint engine adapter.
//!
//! The engine is an external collaborator: given a file path and a static
//! configuration file location, it returns an error count, a warning count,
//! and an ordered sequence of findings. `ProcessEngine` spawns the configured
//! command once per file and parses its JSON report from stdout.

use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Deserialize;

use crate::config::EngineConfig;
use crate::error::{Error, Result};

/// Finding severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

/// A single reported issue from the lint engine.
#[derive(Debug, Clone)]
pub struct Finding {
    pub severity: Severity,
    /// One-based line number.
    pub line: u32,
    pub message: String,
    pub rule_id: Option<String>,
}

/// Lint results for one fixture file. Read-only after creation.
#[derive(Debug, Clone)]
pub struct FileLintResult {
    pub path: PathBuf,
    pub error_count: usize,
    pub warning_count: usize,
    pub findings: Vec<Finding>,
}

/// The lint engine seam.
///
/// Object-safe to allow substituting a mock in runner tests. Calls are
/// synchronous from the pipeline's point of view: `lint` blocks until the
/// engine has produced a full report for the file.
pub trait LintEngine {
    /// Lint a single file, returning counts and findings.
    fn lint(&self, path: &Path) -> Result<FileLintResult>;
}

/// Wire format of the engine's JSON report: an array of per-file entries.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReportEntry {
    #[serde(default)]
    error_count: usize,

    #[serde(default)]
    warning_count: usize,

    #[serde(default)]
    messages: Vec<ReportMessage>,
}

/// One finding in the wire format. Severity 2 is an error, 1 a warning.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReportMessage {
    severity: i64,

    #[serde(default = "default_line")]
    line: u32,

    message: String,

    #[serde(default)]
    rule_id: Option<String>,
}

fn default_line() -> u32 {
    1
}

/// Production engine: runs the configured lint command as a subprocess.
#[derive(Debug)]
pub struct ProcessEngine {
    command: String,
    args: Vec<String>,
    engine_config: Option<PathBuf>,
}

impl ProcessEngine {
    /// Build the engine from config, resolving paths against `root`.
    ///
    /// A missing engine configuration file is fatal here rather than a
    /// per-file recoverable error: nothing useful can run without it.
    pub fn from_config(config: &EngineConfig, root: &Path) -> Result<Self> {
        let engine_config = match &config.config {
            Some(path) => {
                let resolved = if path.is_absolute() {
                    path.clone()
                } else {
                    root.join(path)
                };
                if !resolved.exists() {
                    return Err(Error::Config {
                        message: format!("engine config not found: {}", resolved.display()),
                        path: Some(resolved),
                    });
                }
                Some(resolved)
            }
            None => None,
        };

        Ok(Self {
            command: config.command.clone(),
            args: config.args.clone(),
            engine_config,
        })
    }
}

impl LintEngine for ProcessEngine {
    fn lint(&self, path: &Path) -> Result<FileLintResult> {
        let mut cmd = Command::new(&self.command);
        cmd.args(&self.args);
        if let Some(config) = &self.engine_config {
            cmd.arg("--config").arg(config);
        }
        cmd.arg(path);

        let output = cmd.output().map_err(|e| Error::Engine {
            path: path.to_path_buf(),
            message: format!("failed to run {}: {}", self.command, e),
        })?;

        // Lint engines exit nonzero when they find errors. Only an
        // unparseable report counts as an adapter failure.
        parse_report(&output.stdout, path)
    }
}

/// Parse the engine's JSON report into a single-file result.
///
/// Reports may contain multiple entries (engines batch by invocation);
/// counts and findings are folded into one result for the linted file.
pub(crate) fn parse_report(stdout: &[u8], path: &Path) -> Result<FileLintResult> {
    let entries: Vec<ReportEntry> = serde_json::from_slice(stdout).map_err(|e| Error::Engine {
        path: path.to_path_buf(),
        message: format!("unparseable report: {}", e),
    })?;

    let mut result = FileLintResult {
        path: path.to_path_buf(),
        error_count: 0,
        warning_count: 0,
        findings: Vec::new(),
    };

    for entry in entries {
        result.error_count += entry.error_count;
        result.warning_count += entry.warning_count;
        for msg in entry.messages {
            let severity = if msg.severity >= 2 {
                Severity::Error
            } else {
                Severity::Warning
            };
            result.findings.push(Finding {
                severity,
                line: msg.line,
                message: msg.message,
                rule_id: msg.rule_id,
            });
        }
    }

    Ok(result)
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
