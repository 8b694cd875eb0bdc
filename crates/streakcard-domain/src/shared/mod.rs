use serde::{Deserialize, Serialize};

mod clock;

pub use clock::{Clock, FixedClock, SystemClock};

/// Error codes for structured error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Platform dispatch (2xxx)
    UnsupportedPlatform = 2001,

    // Activity data (4xxx)
    MalformedCalendar = 4001,
    SerializationError = 4004,

    // Infrastructure (5xxx)
    InfrastructureError = 5001,
    UpstreamUnavailable = 5002,

    // Validation (6xxx)
    ValidationError = 6001,
    MissingRequiredField = 6003,
}

impl ErrorCode {
    /// Get error code as integer
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ErrorCode::UpstreamUnavailable | ErrorCode::MalformedCalendar => {
                ErrorSeverity::Warning
            }

            ErrorCode::UnsupportedPlatform
            | ErrorCode::ValidationError
            | ErrorCode::MissingRequiredField => ErrorSeverity::Info,

            ErrorCode::InfrastructureError | ErrorCode::SerializationError => {
                ErrorSeverity::Error
            }
        }
    }

    /// Errors that only degrade a single platform tile to zero
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ErrorCode::UpstreamUnavailable
                | ErrorCode::MalformedCalendar
                | ErrorCode::UnsupportedPlatform
        )
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Malformed calendar: {0}")]
    MalformedCalendar(String),

    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl DomainError {
    /// Get error code
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::UpstreamUnavailable(_) => ErrorCode::UpstreamUnavailable,
            DomainError::MalformedCalendar(_) => ErrorCode::MalformedCalendar,
            DomainError::UnsupportedPlatform(_) => ErrorCode::UnsupportedPlatform,
            DomainError::Validation(_) => ErrorCode::ValidationError,
            DomainError::MissingField(_) => ErrorCode::MissingRequiredField,
            DomainError::Serialization(_) => ErrorCode::SerializationError,
            DomainError::Infrastructure(_) => ErrorCode::InfrastructureError,
        }
    }

    /// Get error message
    pub fn message(&self) -> &str {
        match self {
            DomainError::UpstreamUnavailable(msg)
            | DomainError::MalformedCalendar(msg)
            | DomainError::UnsupportedPlatform(msg)
            | DomainError::Validation(msg)
            | DomainError::MissingField(msg)
            | DomainError::Serialization(msg)
            | DomainError::Infrastructure(msg) => msg,
        }
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        self.code().severity()
    }

    /// Check if error is recoverable
    pub fn is_recoverable(&self) -> bool {
        self.code().is_recoverable()
    }

    /// Format error with code
    pub fn format_with_code(&self) -> String {
        format!("[{}] {}", self.code().code(), self)
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Serialization(err.to_string())
    }
}
