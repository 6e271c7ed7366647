//! Text report formatter.
//!
//! One line per category:
//! ```text
//! <category>: PASS|FAIL|SKIP (errors E/maxE, warnings W/maxW)
//!   <file>: <counts>
//! ```
//! Verbose mode prints every finding with file:line attribution.

use std::io::Write;

use termcolor::{ColorChoice, StandardStream, WriteColor};

use super::FormatOptions;
use crate::category::{Category, CategoryOutcome};
use crate::color::scheme;
use crate::engine::{FileLintResult, Finding};
use crate::report::SuiteReport;

/// Text formatter with color support.
pub struct TextFormatter {
    stdout: StandardStream,
    options: FormatOptions,
}

impl TextFormatter {
    pub fn new(color_choice: ColorChoice, options: FormatOptions) -> Self {
        Self {
            stdout: StandardStream::stdout(color_choice),
            options,
        }
    }

    /// Write one category line plus detail.
    pub fn write_category(
        &mut self,
        category: &Category,
        outcome: &CategoryOutcome,
    ) -> std::io::Result<()> {
        self.stdout.set_color(&scheme::category_name())?;
        write!(self.stdout, "{}", outcome.result.name)?;
        self.stdout.reset()?;
        write!(self.stdout, ": ")?;

        if outcome.skipped {
            self.stdout.set_color(&scheme::skip())?;
            write!(self.stdout, "SKIP")?;
            self.stdout.reset()?;
            writeln!(self.stdout, " (no fixture files)")?;
            return Ok(());
        }

        if outcome.passed {
            self.stdout.set_color(&scheme::pass())?;
            write!(self.stdout, "PASS")?;
        } else {
            self.stdout.set_color(&scheme::fail())?;
            write!(self.stdout, "FAIL")?;
        }
        self.stdout.reset()?;
        writeln!(
            self.stdout,
            " (errors {}/{}, warnings {}/{})",
            outcome.result.total_errors,
            category.max_errors,
            outcome.result.total_warnings,
            category.max_warnings
        )?;

        if self.options.verbose && !category.description.is_empty() {
            writeln!(self.stdout, "  {}", category.description)?;
        }

        if outcome.result.engine_failures > 0 {
            writeln!(
                self.stdout,
                "  engine failed on {} file(s)",
                outcome.result.engine_failures
            )?;
        }

        // Per-file detail on failure, or always in verbose mode.
        if !outcome.passed || self.options.verbose {
            for file in &outcome.result.files {
                self.write_file(file)?;
            }
        }

        // Advisory only: missing expected rules never fail a category.
        for rule in &outcome.missing_rules {
            writeln!(self.stdout, "  missing expected rule: {} (advisory)", rule)?;
        }

        Ok(())
    }

    fn write_file(&mut self, file: &FileLintResult) -> std::io::Result<()> {
        if !self.options.verbose {
            // Compact: one line per file with findings.
            if file.error_count > 0 || file.warning_count > 0 {
                write!(self.stdout, "  ")?;
                self.stdout.set_color(&scheme::path())?;
                write!(self.stdout, "{}", file.path.display())?;
                self.stdout.reset()?;
                writeln!(self.stdout, ": {}", format_counts(file))?;
            }
            return Ok(());
        }

        for finding in &file.findings {
            self.write_finding(file, finding)?;
        }
        Ok(())
    }

    fn write_finding(
        &mut self,
        file: &FileLintResult,
        finding: &Finding,
    ) -> std::io::Result<()> {
        write!(self.stdout, "  ")?;
        self.stdout.set_color(&scheme::path())?;
        write!(self.stdout, "{}", file.path.display())?;
        self.stdout.reset()?;
        write!(self.stdout, ":")?;
        self.stdout.set_color(&scheme::line_number())?;
        write!(self.stdout, "{}", finding.line)?;
        self.stdout.reset()?;
        writeln!(self.stdout, ": {}", format_finding_desc(finding))?;
        Ok(())
    }

    /// Write the summary lines.
    pub fn write_summary(&mut self, report: &SuiteReport) -> std::io::Result<()> {
        let failed = report
            .outcomes
            .iter()
            .filter(|o| !o.skipped && !o.passed)
            .count();
        let passed = report.evaluated - failed;

        if failed == 0 {
            writeln!(
                self.stdout,
                "{} categor{} passed{}",
                passed,
                if passed == 1 { "y" } else { "ies" },
                format_skipped(report.skipped)
            )?;
        } else {
            writeln!(
                self.stdout,
                "{} categor{} passed, {} failed{}",
                passed,
                if passed == 1 { "y" } else { "ies" },
                failed,
                format_skipped(report.skipped)
            )?;
        }

        writeln!(
            self.stdout,
            "totals: {} error{}, {} warning{}, {} distinct rule{}",
            report.total_errors,
            if report.total_errors == 1 { "" } else { "s" },
            report.total_warnings,
            if report.total_warnings == 1 { "" } else { "s" },
            report.rules_seen.len(),
            if report.rules_seen.len() == 1 { "" } else { "s" },
        )?;

        Ok(())
    }
}

/// Format a finding description: `[severity] message (rule)`.
pub(crate) fn format_finding_desc(finding: &Finding) -> String {
    match &finding.rule_id {
        Some(rule) => format!("[{}] {} ({})", finding.severity.label(), finding.message, rule),
        None => format!("[{}] {}", finding.severity.label(), finding.message),
    }
}

/// Format a file's counts: `1 error, 2 warnings`.
pub(crate) fn format_counts(file: &FileLintResult) -> String {
    format!(
        "{} error{}, {} warning{}",
        file.error_count,
        if file.error_count == 1 { "" } else { "s" },
        file.warning_count,
        if file.warning_count == 1 { "" } else { "s" },
    )
}

fn format_skipped(skipped: usize) -> String {
    if skipped == 0 {
        String::new()
    } else {
        format!(", {} skipped", skipped)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
