pub mod category;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod output;
pub mod report;
pub mod runner;

pub use category::{Category, CategoryOutcome, CategoryResult};
pub use cli::Cli;
pub use config::SuiteConfig;
pub use discovery::{DiscoveryStats, FixtureSet};
pub use engine::{FileLintResult, Finding, LintEngine, ProcessEngine, Severity};
pub use error::{Error, ExitCode, Result};
pub use report::SuiteReport;
pub use runner::SuiteRunner;
