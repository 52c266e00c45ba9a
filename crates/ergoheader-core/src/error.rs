//! Error types for ergoheader-core
//!
//! Errors only come from loading configuration and parsing event scripts.
//! The page-side controllers never fail: a missing DOM element is recorded
//! in an [`AttachReport`] and the dependent behavior is skipped.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for ergoheader operations
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // IO Errors
    // ===================
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    // ===================
    // Parse Errors
    // ===================
    #[error("Failed to parse TOML in {path}: {message}")]
    TomlParse {
        path: PathBuf,
        message: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Script line {line}: {message}")]
    ScriptParse { line: usize, message: String },

    // ===================
    // Config Errors
    // ===================
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl CoreError {
    pub fn script(line: usize, message: impl Into<String>) -> Self {
        CoreError::ScriptParse {
            line,
            message: message.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        CoreError::InvalidConfig {
            message: message.into(),
        }
    }
}

/// Record of DOM elements that were looked up while attaching behavior
///
/// Enables graceful degradation: each missing element disables the
/// behavior that depends on it instead of failing the page.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AttachReport {
    /// Selectors that matched nothing
    pub missing: Vec<&'static str>,
    pub header_attached: bool,
    pub menu_attached: bool,
    /// Number of mobile nav links that received a close handler
    pub links_bound: usize,
}

impl AttachReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_missing(&mut self, selector: &'static str) {
        if !self.missing.contains(&selector) {
            self.missing.push(selector);
        }
    }

    /// True when both controllers are live
    pub fn is_complete(&self) -> bool {
        self.header_attached && self.menu_attached
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_report_dedupes_missing() {
        let mut report = AttachReport::new();
        report.add_missing(".minimized-logo");
        report.add_missing(".minimized-logo");
        assert_eq!(report.missing, vec![".minimized-logo"]);
        assert!(!report.is_complete());
    }

    #[test]
    fn test_attach_report_complete_needs_both_controllers() {
        let mut report = AttachReport::new();
        report.header_attached = true;
        assert!(!report.is_complete());

        report.menu_attached = true;
        report.add_missing(".close-icon");
        assert!(report.is_complete());
    }

    #[test]
    fn test_script_error_display() {
        let err = CoreError::script(4, "unknown command 'jump'");
        assert_eq!(err.to_string(), "Script line 4: unknown command 'jump'");
    }
}
