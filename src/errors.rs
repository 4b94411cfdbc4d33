//! Shared error types for index calculation.
//!
//! Per-parameter problems (unknown symbols, non-positive limits in summed
//! indices) are not errors: they are recorded as [`Exclusion`]s on the result
//! and logged. Only structural problems surface as [`Error`].
//!
//! [`Exclusion`]: crate::indices::Exclusion

use crate::indices::IndexKind;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for wqindex operations
#[derive(Debug, Error)]
pub enum Error {
    /// A standard cannot be used by a formula that structurally requires it
    #[error("Invalid standard for {symbol} in {index}: {reason}")]
    InvalidStandard {
        index: IndexKind,
        symbol: String,
        reason: String,
    },

    /// Ratio requested against a non-positive maximum allowable concentration
    #[error("Cannot compute ratio against MAC {mac}: MAC must be greater than zero")]
    InvalidRatio { mac: f64 },

    /// No standards table is loaded at all
    #[error("No water quality standards are loaded")]
    NoStandards,

    /// Unsupported concentration unit
    #[error("Invalid unit: {unit}. Valid units are: {valid}")]
    UnknownUnit { unit: String, valid: String },

    /// Unknown index name
    #[error("Unknown index: {0}")]
    UnknownIndex(String),

    /// Sample table problems
    #[error("Input error: {message}")]
    Input {
        message: String,
        path: Option<PathBuf>,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),


    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    /// CSV errors
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Workbook read errors
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    /// Workbook write errors
    #[error("Workbook write error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
}

impl Error {
    /// Create an invalid-standard error for one parameter
    pub fn invalid_standard(
        index: IndexKind,
        symbol: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidStandard {
            index,
            symbol: symbol.into(),
            reason: reason.into(),
        }
    }

    /// Create an input error
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input {
            message: message.into(),
            path: None,
        }
    }

    /// Create an input error with path context
    pub fn input_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Input {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Whether the user can fix this error by editing input or configuration
    pub fn is_user_fixable(&self) -> bool {
        matches!(
            self,
            Self::InvalidStandard { .. }
                | Self::InvalidRatio { .. }
                | Self::UnknownUnit { .. }
                | Self::UnknownIndex(_)
                | Self::Input { .. }
                | Self::Configuration(_)
                | Self::Toml(_)
                | Self::Csv(_)
                | Self::Spreadsheet(_)
        )
    }
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;
