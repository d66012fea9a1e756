use crate::api::error::ApiError;
use crate::logging::LogLevel;

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Pick the log level for a failed fetch. The view treats every variant
    /// the same way; only the diagnostic severity differs.
    pub fn classify_fetch_error(&self, error: &ApiError) -> LogLevel {
        match error {
            // Critical: Auth and malformed responses
            ApiError::Http { status, .. } if *status == 401 => LogLevel::Error,
            ApiError::Http { status, .. } if *status == 403 => LogLevel::Error,
            ApiError::Decode(_) => LogLevel::Error,

            // Temporary server issues
            ApiError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Network issues - usually the service is not running
            _ => LogLevel::Warn,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}
