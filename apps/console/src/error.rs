//! # Console Error Type
//!
//! Unified error type for the terminal app.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Console                            │
//! │                                                                         │
//! │  Menu action handler  →  ConsoleResult<()>                              │
//! │         │                                                               │
//! │         ├── Core / Validation ──► printed as "Error: ..." → back to menu│
//! │         │                                                               │
//! │         ├── InputClosed ────────► treated like choosing Exit           │
//! │         │                                                               │
//! │         └── Io / Config ────────► bubbles up to main, process exits    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use rental_core::{CoreError, ValidationError};
use thiserror::Error;

/// Result type alias for console operations.
pub type ConsoleResult<T> = Result<T, ConsoleError>;

#[derive(Debug, Error)]
pub enum ConsoleError {
    // =========================================================================
    // Recoverable (shown to the user)
    // =========================================================================
    /// A rental desk operation was rejected.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Typed-in value failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    // =========================================================================
    // Input / Output
    // =========================================================================
    /// Standard input reached end of file.
    #[error("Input closed")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // =========================================================================
    // Configuration
    // =========================================================================
    /// Explicitly requested config file does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// Config file is not valid TOML for our schema.
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config parsed but contains unusable values.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ConsoleError {
    /// Whether the menu loop can print this error and carry on.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ConsoleError::Core(_) | ConsoleError::Validation(_))
    }
}
