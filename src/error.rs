//! Error handling for tld-sweep

use thiserror::Error;

/// Main error type for tld-sweep
///
/// Only fatal conditions are represented here. A DNS lookup that fails for a
/// single TLD is an outcome, not an error (see [`crate::types::LookupOutcome`]).
#[derive(Error, Debug, Clone)]
pub enum TldSweepError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Network error: {message}")]
    Network {
        message: String,
        status_code: Option<u16>,
        url: Option<String>,
    },

    #[error("IO error: {message}")]
    Io { message: String },
}

impl TldSweepError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a network error
    pub fn network(
        message: impl Into<String>,
        status_code: Option<u16>,
        url: Option<String>,
    ) -> Self {
        Self::Network {
            message: message.into(),
            status_code,
            url,
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// The line printed to stdout before the process exits with status 1.
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => format!("Error: {}", message),
            Self::Validation { message } => message.clone(),
            Self::Network { message, status_code, .. } => match status_code {
                Some(code) => format!("{} (HTTP {})", message, code),
                None => message.clone(),
            },
            Self::Io { message } => message.clone(),
        }
    }
}

impl From<reqwest::Error> for TldSweepError {
    fn from(err: reqwest::Error) -> Self {
        use crate::tld::registry::{FETCH_FAILED_MESSAGE, READ_FAILED_MESSAGE};

        if err.is_body() || err.is_decode() {
            Self::io(READ_FAILED_MESSAGE)
        } else {
            Self::network(
                FETCH_FAILED_MESSAGE,
                err.status().map(|s| s.as_u16()),
                err.url().map(|u| u.to_string()),
            )
        }
    }
}

impl From<std::io::Error> for TldSweepError {
    fn from(err: std::io::Error) -> Self {
        Self::io(format!("Error: {}", err))
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TldSweepError>;

#[macro_export]
macro_rules! validation_error {
    ($msg:expr) => {
        $crate::error::TldSweepError::validation($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::TldSweepError::validation(format!($fmt, $($arg)*))
    };
}
