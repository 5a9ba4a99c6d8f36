//! Structured error types for rankctl-core library.
//!
//! Uses `thiserror` for better API surface and error composition.
//! Binary crates (rankctl-cli) can still use `anyhow` for convenience,
//! but library consumers get structured, composable errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for rankctl-core operations
#[derive(Error, Debug)]
pub enum RankError {
    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {reason}")]
    Config { reason: String },

    /// A status or category value outside the enumerated domain
    #[error("Unknown {domain} value '{value}'")]
    UnknownValue { domain: String, value: String },

    /// Record lookup by id failed
    #[error("No record with id '{id}'")]
    UnknownRecord { id: String },

    /// Tool lookup by id or name failed
    #[error("No tool matching '{tool}'")]
    UnknownTool { tool: String },

    /// Bulk operation invoked with nothing selected
    #[error("Selection is empty; nothing to {operation}")]
    EmptySelection { operation: String },

    /// Bulk operation invoked while another is still running
    #[error("A {operation} operation is already running")]
    DispatchBusy { operation: String },

    /// Subscription plan limit reached
    #[error("The {tier} plan allows at most {limit} {resource}")]
    PlanLimit {
        tier: String,
        resource: String,
        limit: u32,
    },

    /// Report export failed
    #[error("Failed to export reports to {path:?}: {reason}")]
    Export { path: PathBuf, reason: String },
}

/// Result type alias for rankctl-core operations
pub type Result<T> = std::result::Result<T, RankError>;

impl RankError {
    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Create an unknown value error
    pub fn unknown_value(domain: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnknownValue {
            domain: domain.into(),
            value: value.into(),
        }
    }

    /// Create an unknown record error
    pub fn unknown_record(id: impl Into<String>) -> Self {
        Self::UnknownRecord { id: id.into() }
    }

    /// Create an unknown tool error
    pub fn unknown_tool(tool: impl Into<String>) -> Self {
        Self::UnknownTool { tool: tool.into() }
    }

    /// Create an empty selection error
    pub fn empty_selection(operation: impl Into<String>) -> Self {
        Self::EmptySelection {
            operation: operation.into(),
        }
    }

    /// Create a dispatch busy error
    pub fn dispatch_busy(operation: impl Into<String>) -> Self {
        Self::DispatchBusy {
            operation: operation.into(),
        }
    }

    /// Create a plan limit error
    pub fn plan_limit(tier: impl Into<String>, resource: impl Into<String>, limit: u32) -> Self {
        Self::PlanLimit {
            tier: tier.into(),
            resource: resource.into(),
            limit,
        }
    }

    /// Create an export error
    pub fn export(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Export {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RankError::plan_limit("free", "projects", 5);
        assert_eq!(err.to_string(), "The free plan allows at most 5 projects");

        let err = RankError::dispatch_busy("submit");
        assert_eq!(err.to_string(), "A submit operation is already running");

        let err = RankError::unknown_value("status", "archived");
        assert!(err.to_string().contains("status"));
        assert!(err.to_string().contains("archived"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let rank_err: RankError = io_err.into();

        assert!(matches!(rank_err, RankError::Io { .. }));
    }
}
