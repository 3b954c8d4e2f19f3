// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum CountWordsError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<CountWordsError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

pub type Result<T> = std::result::Result<T, CountWordsError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// One or more per-file tasks failed. Carries the first underlying
    /// failure; no partial result is produced.
    #[error("word aggregation failed: {failed} file task(s) failed")]
    AggregateFailure {
        failed: usize,
        #[source]
        source: Box<CountWordsError>,
    },

    #[error("run cancelled before completion")]
    Cancelled,
}

pub type ApplicationResult<T> = std::result::Result<T, ApplicationError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("File not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Thread pool creation failed: {details}")]
    ThreadPoolCreation { details: String },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<CountWordsError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CountWordsError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| CountWordsError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
