//! Editor error types

use sfm_core::FieldError;
use sfm_graph::GraphError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by edit sessions.
///
/// None of these are fatal: the operation is aborted and the model is left
/// exactly as it was.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("No trigger selected")]
    NoActiveTrigger,

    #[error(transparent)]
    InvalidNumericField(#[from] FieldError),

    #[error("Trigger not found: {0}")]
    TriggerNotFound(usize),

    #[error("Statement not found: {0}")]
    StatementNotFound(usize),

    #[error("Wizard entry not found: {0}")]
    EntryNotFound(usize),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for editor operations
pub type EditorResult<T> = Result<T, EditorError>;
