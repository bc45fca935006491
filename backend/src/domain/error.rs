//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! responses; the serialised form is the client-facing error body
//! `{"error": "...", "code": "...", "field": "..."}`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::TraceId;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input failed a validation rule.
    ValidationError,
    /// The requested resource does not exist.
    NotFound,
    /// A body-carrying request was not declared as JSON.
    InvalidContentType,
    /// An unexpected fault occurred; details stay server-side.
    InternalError,
}

impl ErrorCode {
    /// Wire representation of the code.
    ///
    /// # Examples
    /// ```
    /// use profiles_backend::domain::ErrorCode;
    ///
    /// assert_eq!(ErrorCode::NotFound.as_str(), "NOT_FOUND");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::NotFound => "NOT_FOUND",
            Self::InvalidContentType => "INVALID_CONTENT_TYPE",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Message used when no specific message is available, and the only
    /// message clients ever see for [`ErrorCode::InternalError`].
    #[must_use]
    pub const fn default_message(self) -> &'static str {
        match self {
            Self::ValidationError => "Validation failed",
            Self::NotFound => "Not Found",
            Self::InvalidContentType => "Content-Type must be application/json",
            Self::InternalError => "Internal Server Error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain error payload.
///
/// ## Invariants
/// - `message` is never blank; [`Error::new`] falls back to the code's
///   default message.
/// - `field` names the offending input for validation failures.
///
/// # Examples
/// ```
/// use profiles_backend::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("User", "user_1");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.message(), "User with identifier 'user_1' not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ErrorDto", into = "ErrorDto")]
pub struct Error {
    code: ErrorCode,
    message: String,
    field: Option<String>,
    trace_id: Option<String>,
}

/// Validation errors emitted by [`Error::try_new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorValidationError {
    /// The message was empty once trimmed.
    #[error("error message must not be empty")]
    EmptyMessage,
}

impl Error {
    /// Create an error, capturing the current trace identifier if one is in
    /// scope.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::try_new(code, message)
            .unwrap_or_else(|_| Self::build(code, code.default_message().to_owned()))
    }

    /// Fallible constructor that rejects blank messages.
    pub fn try_new(code: ErrorCode, message: impl Into<String>) -> Result<Self, ErrorValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ErrorValidationError::EmptyMessage);
        }
        Ok(Self::build(code, message))
    }

    fn build(code: ErrorCode, message: String) -> Self {
        Self {
            code,
            message,
            field: None,
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    /// Validation failure tied to one offending input field.
    pub fn validation(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message).with_field(field)
    }

    /// Validation failure that cannot be pinned to a single field, such as an
    /// unparseable request body.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    /// Missing resource, formatted as `<resource> with identifier '<id>' not found`.
    pub fn not_found(resource: &str, identifier: &str) -> Self {
        Self::new(
            ErrorCode::NotFound,
            format!("{resource} with identifier '{identifier}' not found"),
        )
    }

    /// Request body was not declared as JSON.
    pub fn invalid_content_type() -> Self {
        let code = ErrorCode::InvalidContentType;
        Self::new(code, code.default_message())
    }

    /// Unexpected fault. The message is for logs only.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Attach the offending field name.
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Attach an explicit trace identifier.
    #[must_use]
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// Stable machine-readable error code.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Offending input field, when known.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Correlation identifier of the request that produced the error.
    #[must_use]
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Copy safe to return to clients: internal errors lose their message
    /// and field.
    #[must_use]
    pub fn redacted(&self) -> Self {
        if self.code == ErrorCode::InternalError {
            Self {
                code: self.code,
                message: self.code.default_message().to_owned(),
                field: None,
                trace_id: self.trace_id.clone(),
            }
        } else {
            self.clone()
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{} ({}: {})", self.message, self.code, field),
            None => write!(f, "{} ({})", self.message, self.code),
        }
    }
}

impl std::error::Error for Error {}

/// Client-facing error body. The trace identifier travels in the
/// `trace-id` response header instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorDto {
    error: String,
    code: ErrorCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    field: Option<String>,
}

impl From<Error> for ErrorDto {
    fn from(value: Error) -> Self {
        Self {
            error: value.message,
            code: value.code,
            field: value.field,
        }
    }
}

impl TryFrom<ErrorDto> for Error {
    type Error = ErrorValidationError;

    fn try_from(value: ErrorDto) -> Result<Self, Self::Error> {
        let ErrorDto { error, code, field } = value;
        let mut parsed = Error::try_new(code, error)?;
        parsed.field = field;
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests;
