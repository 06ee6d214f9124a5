//! Desktop client configuration.

use std::path::PathBuf;

/// Settings chosen at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopConfig {
    /// Directory generated invoices are written into.
    pub output_dir: PathBuf,
}

impl DesktopConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

impl Default for DesktopConfig {
    /// The current working directory.
    fn default() -> Self {
        Self::new(".")
    }
}
