//! Error types with rich context

use thiserror::Error;

use crate::option_key::OptionKey;
use crate::policy::{SenderScope, SendersCategory};

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // ─────────────────────────────────────────────────────────────
    // Sender Policy Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid option key {key} for {category} senders")]
    InvalidOptionKey {
        key: OptionKey,
        category: SendersCategory,
    },

    #[error("Unexpected sender scope: {scope}")]
    UnexpectedSenderScope { scope: SenderScope },

    #[error("At least one option should be selected")]
    EmptySelection,

    #[error("Unknown option key: {key}")]
    UnknownOptionKey { key: String },

    // ─────────────────────────────────────────────────────────────
    // Store Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Mode not found: {id}")]
    ModeNotFound { id: String },

    #[error("Policy store error: {message}")]
    Store { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to initialize logging: {message}")]
    LoggingInit { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn invalid_option_key(key: OptionKey, category: SendersCategory) -> Self {
        Self::InvalidOptionKey { key, category }
    }

    pub fn unknown_option_key(key: impl Into<String>) -> Self {
        Self::UnknownOptionKey { key: key.into() }
    }

    pub fn mode_not_found(id: impl Into<String>) -> Self {
        Self::ModeNotFound { id: id.into() }
    }

    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn logging_init(message: impl Into<String>) -> Self {
        Self::LoggingInit {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// Recoverable errors come from user input or the environment; the
    /// caller can report them and carry on.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::UnknownOptionKey { .. }
                | Error::ModeNotFound { .. }
                | Error::Config { .. }
        )
    }

    /// Check if this error is a programming error in how the screen is wired
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::InvalidOptionKey { .. }
                | Error::UnexpectedSenderScope { .. }
                | Error::EmptySelection
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}
