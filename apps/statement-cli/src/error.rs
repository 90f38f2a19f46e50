//! # CLI Error Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Configuration        Sheet loading          Sheet contents             │
//! │  ─────────────        ─────────────          ──────────────             │
//! │  InvalidConfig        SheetLoadFailed        UnknownMovie               │
//! │  InvalidArgument      SheetParseFailed       DuplicateMovie             │
//! │  ConfigLoadFailed                            InvalidEntry (CoreError)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rental_core::CoreError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid CLI configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failed to read or parse the config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Bad command-line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // =========================================================================
    // Sheet Errors
    // =========================================================================
    /// Failed to read the rental sheet.
    #[error("Failed to read rental sheet: {0}")]
    SheetLoadFailed(String),

    /// Rental sheet is not valid TOML/JSON or has the wrong shape.
    #[error("Failed to parse rental sheet: {0}")]
    SheetParseFailed(String),

    /// A rental or recategorize entry names a movie the sheet doesn't list.
    #[error("{entry} refers to unknown movie '{title}'")]
    UnknownMovie { entry: String, title: String },

    /// Two movies share a title.
    #[error("Movie '{0}' is listed more than once")]
    DuplicateMovie(String),

    /// A sheet entry was rejected by the domain rules.
    #[error("{entry}: {source}")]
    InvalidEntry {
        entry: String,
        #[source]
        source: CoreError,
    },

    /// Statement rendering failed.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<toml::de::Error> for CliError {
    fn from(err: toml::de::Error) -> Self {
        CliError::SheetParseFailed(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::SheetParseFailed(err.to_string())
    }
}
