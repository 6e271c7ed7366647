// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

/// Runs a lint engine over fixture suites and checks per-category thresholds
#[derive(Parser)]
#[command(name = "lintsuite")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "LINTSUITE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Run only the named category
    #[arg(long, value_name = "NAME")]
    pub category: Option<String>,

    /// Print every finding, not just failure summaries
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
