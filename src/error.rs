//! Blur Error Types
//!
//! Centralized error handling. Every variant's display string is also the
//! user-visible notification text, so errors are converted exactly once at
//! the boundary of the triggering action.

use thiserror::Error;

/// Central error type for Blur
#[derive(Error, Debug)]
pub enum BlurError {
    #[error("No focused UI element!")]
    NoFocusedElement,

    #[error("No text selected!")]
    NoSelectedText,

    #[error("No text in clipboard!")]
    NoClipboardContent,

    #[error("Completion service error: {0}")]
    Remote(String),

    #[error("Could not replace the selected text!")]
    WriteBack,

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Blur operations
pub type BlurResult<T> = Result<T, BlurError>;
