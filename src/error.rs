//! Error types for loading MSE histories and drawing them.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for plotting operations.
pub type PlotResult<T> = Result<T, PlotError>;

/// Errors that can occur while loading, rendering or showing a history.
#[derive(Debug, Error)]
pub enum PlotError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV structure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required header is absent
    #[error("missing required column '{column}'")]
    MissingColumn { column: String },

    /// A row holds a value that is not a number
    #[error("invalid value on line {line}: {source}")]
    InvalidRow {
        line: u64,
        #[source]
        source: csv::Error,
    },

    /// No plottable row in the input
    #[error("no plottable rows in '{}'", path.display())]
    EmptyHistory { path: PathBuf },

    /// Drawing backend failure
    #[error("render error: {0}")]
    Render(String),
}

impl PlotError {
    /// Create a missing column error
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    /// Create a render error from any backend error
    pub fn render(err: impl std::fmt::Display) -> Self {
        Self::Render(err.to_string())
    }
}
