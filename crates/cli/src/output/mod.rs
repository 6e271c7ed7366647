//! Output formatting for suite reports.

pub mod text;

/// Output formatting options.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// Print every finding, not just failure summaries.
    pub verbose: bool,
}

impl FormatOptions {
    /// Create options with full finding detail.
    pub fn verbose() -> Self {
        Self { verbose: true }
    }
}
