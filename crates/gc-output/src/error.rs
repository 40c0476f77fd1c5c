//! Error types for gc-output.

use thiserror::Error;

/// Errors from export writing and post-hoc density validation.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("density export parse error: {0}")]
    Parse(String),

    #[error("density export columns {got:?} do not match the configured processors {expected:?}")]
    ColumnMismatch {
        expected: Vec<String>,
        got: Vec<String>,
    },

    #[error("density export has {got} rows, the in-memory history has {expected}")]
    RowCountMismatch { expected: usize, got: usize },

    #[error("density mismatch at timeStep {time_step}, column {column}: recorded {recorded}, persisted {persisted}")]
    DensityMismatch {
        time_step: u64,
        column: String,
        recorded: f64,
        persisted: f64,
    },
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
