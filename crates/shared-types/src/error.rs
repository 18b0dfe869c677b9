use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of client-side failures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    /// Transport failure: the request never completed.
    Network,
    /// The server answered with a non-2xx status or a business error body.
    Server,
    /// A 2xx response whose body did not match the expected schema.
    Decode,
    /// A required field was missing before the request was ever sent.
    Validation,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::Network => write!(f, "Network"),
            AppErrorKind::Server => write!(f, "Server"),
            AppErrorKind::Decode => write!(f, "Decode"),
            AppErrorKind::Validation => write!(f, "Validation"),
        }
    }
}

/// Structured error returned by every backend call.
///
/// Pages surface `message` directly; `kind` exists so callers can
/// distinguish "the network is down" from "the server said no".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

impl AppError {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Network,
            message: message.into(),
        }
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Server,
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Decode,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Validation,
            message: message.into(),
        }
    }

    /// Message suitable for a toast. Falls back to a generic line when the
    /// server produced nothing readable.
    pub fn friendly_message(&self) -> String {
        if self.message.trim().is_empty() {
            "Something went wrong. Please try again.".to_string()
        } else {
            self.message.clone()
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}
