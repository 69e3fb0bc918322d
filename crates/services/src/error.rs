//! Shared error types for the services crate.

use thiserror::Error;

use diagnostic_core::engine::EngineError;
use storage::repository::StorageError;

/// Errors emitted by `AssistantService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AssistantError {
    #[error("assistant is not configured")]
    Disabled,
    #[error("assistant returned an empty response")]
    EmptyResponse,
    #[error("assistant request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `DiagnosticService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DiagnosticError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
