//! Error types module
//!
//! All errors surfaced to the HTTP layer are unified under the `AppError`
//! enum. Each variant self-describes its HTTP status code, the generic
//! client-facing message, and the log level for the server-side record.
//! Client-visible text never carries internal detail, store identifiers, or
//! backend error strings.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Error level - for unexpected failures
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Missing required fields: {0:?}")]
    MissingFields(Vec<String>),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status code to return
    pub fn http_status_code(&self) -> u16 {
        match self {
            AppError::MissingFields(_) => 400,
            AppError::Storage(_) => 500,
            AppError::Internal(_) => 500,
        }
    }

    /// Client-facing message. Deliberately generic; the full error text is
    /// logged server-side only.
    pub fn client_message(&self) -> &'static str {
        match self {
            AppError::MissingFields(_) => "Missing required fields",
            AppError::Storage(_) | AppError::Internal(_) => "Internal Server Error",
        }
    }

    /// Log level for this error
    pub fn log_level(&self) -> LogLevel {
        match self {
            AppError::MissingFields(_) => LogLevel::Debug,
            AppError::Storage(_) | AppError::Internal(_) => LogLevel::Error,
        }
    }
}
