// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Suite run implementation: config → discovery → runner → report.

use std::path::PathBuf;

use termcolor::ColorChoice;

use lintsuite::category::Category;
use lintsuite::cli::Cli;
use lintsuite::color::resolve_color;
use lintsuite::config;
use lintsuite::discovery;
use lintsuite::engine::ProcessEngine;
use lintsuite::error::{Error, ExitCode};
use lintsuite::output::FormatOptions;
use lintsuite::output::text::TextFormatter;
use lintsuite::report::SuiteReport;
use lintsuite::runner::SuiteRunner;

/// Run the suite and return the process exit code.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;

    let config_path =
        config::resolve_config(cli.config.as_deref(), &cwd)?.ok_or_else(|| Error::Config {
            message: format!("no {} found", config::CONFIG_FILE_NAME),
            path: None,
        })?;

    // Paths in the config are relative to its directory.
    let root = config_path
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(|| cwd.clone());

    tracing::debug!("loading config from {}", config_path.display());
    let config = config::load(&config_path)?;

    let mut categories: Vec<Category> = config
        .categories
        .iter()
        .cloned()
        .map(Category::from)
        .collect();

    if let Some(name) = &cli.category {
        categories.retain(|c| &c.name == name);
        if categories.is_empty() {
            return Err(Error::Argument(format!("unknown category: {}", name)).into());
        }
    }

    let fixture_root = root.join(&config.fixtures.root);
    let fixtures = discovery::discover(&fixture_root, &config.fixtures.extensions)?;
    tracing::debug!(
        "discovered {} fixture files ({} walk errors)",
        fixtures.len(),
        fixtures.stats.errors
    );

    // Adapter construction failure is fatal; per-file failures are not.
    let engine = ProcessEngine::from_config(&config.engine, &root)?;

    let runner = SuiteRunner::new(&engine, &fixtures);
    let outcomes = runner.run(&categories);
    let report = SuiteReport::new(outcomes);

    let color_choice = if cli.no_color {
        ColorChoice::Never
    } else if cli.color {
        ColorChoice::Always
    } else {
        resolve_color()
    };

    let mut formatter = TextFormatter::new(
        color_choice,
        FormatOptions {
            verbose: cli.verbose,
        },
    );
    for (category, outcome) in categories.iter().zip(report.outcomes.iter()) {
        formatter.write_category(category, outcome)?;
    }
    formatter.write_summary(&report)?;

    Ok(report.exit_code())
}
