//! Error types for paydash.
//!
//! The dashboard itself has no fallible operations; everything here belongs
//! to the surfaces around it: configuration, command-line lookups and the
//! terminal host.

use thiserror::Error;

/// The main error type for paydash operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Lookup Errors ===
    /// A tab identifier outside the closed set was supplied.
    #[error("unknown tab '{name}' (expected one of: overview, demographics, causes, housing, solutions)")]
    UnknownTab {
        /// The identifier that was given.
        name: String,
    },

    /// A dataset name that does not exist was supplied.
    #[error("unknown dataset '{name}'")]
    UnknownDataset {
        /// The name that was given.
        name: String,
    },

    // === Terminal Errors ===
    /// A terminal operation failed.
    #[error("terminal error while trying to {operation}: {source}")]
    Terminal {
        /// What the host was doing.
        operation: &'static str,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for paydash operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an unknown tab error.
    #[must_use]
    pub fn unknown_tab(name: impl Into<String>) -> Self {
        Self::UnknownTab { name: name.into() }
    }

    /// Wrap an I/O error raised by the terminal host.
    #[must_use]
    pub fn terminal(operation: &'static str, source: std::io::Error) -> Self {
        Self::Terminal { operation, source }
    }

    /// Check if this error came from an unrecognized identifier.
    #[must_use]
    pub fn is_lookup_error(&self) -> bool {
        matches!(self, Self::UnknownTab { .. } | Self::UnknownDataset { .. })
    }
}
