//! Schema stand-ins for the domain error payload.
//!
//! `crate::domain::Error` serialises itself but carries no utoipa derive, so
//! the shapes below are registered under the domain type names instead.

use utoipa::ToSchema;

/// Mirror of [`crate::domain::ErrorCode`] as it appears on the wire.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// Input failed a validation rule or the body was unreadable.
    #[schema(rename = "VALIDATION_ERROR")]
    ValidationError,
    /// The requested resource does not exist.
    #[schema(rename = "NOT_FOUND")]
    NotFound,
    /// A body-carrying request was not sent as JSON.
    #[schema(rename = "INVALID_CONTENT_TYPE")]
    InvalidContentType,
    /// An unexpected error occurred on the server.
    #[schema(rename = "INTERNAL_ERROR")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// The correlation identifier is returned in the `trace-id` header rather
/// than the body.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Human-readable message returned to clients.
    #[schema(example = "Invalid email format")]
    error: String,
    /// Stable machine-readable error code.
    #[schema(example = "VALIDATION_ERROR")]
    code: ErrorCodeSchema,
    /// Offending input field for validation failures.
    #[schema(example = "email")]
    field: Option<String>,
}
