//! Shared validation helpers for inbound HTTP adapters.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, web};
use tracing::debug;

use crate::domain::{Error, UserId, UserValidationError};

/// Largest JSON request body accepted, in bytes.
pub const MAX_JSON_BODY_BYTES: usize = 10 * 1024 * 1024;

fn map_json_error(err: &JsonPayloadError) -> Error {
    match err {
        JsonPayloadError::Overflow { limit } | JsonPayloadError::OverflowKnownLength { limit, .. } => {
            Error::invalid_request(format!("Request body exceeds {limit} bytes"))
        }
        JsonPayloadError::ContentType => Error::invalid_content_type(),
        JsonPayloadError::Deserialize(source) => {
            Error::invalid_request(format!("Invalid JSON body: {source}"))
        }
        other => Error::invalid_request(format!("Invalid JSON body: {other}")),
    }
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, path = req.path(), "rejected JSON payload");
    map_json_error(&err).into()
}

/// JSON extractor configuration shared by every handler.
///
/// Bodies are capped at [`MAX_JSON_BODY_BYTES`]; unreadable bodies become
/// `VALIDATION_ERROR` responses in the standard error shape.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use profiles_backend::inbound::http::validation::json_config;
///
/// let app = App::new().app_data(json_config());
/// ```
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_JSON_BODY_BYTES)
        .error_handler(json_error_handler)
}

/// Parse a path segment into a [`UserId`], rejecting blank values.
pub(crate) fn parse_user_id(raw: String) -> Result<UserId, Error> {
    UserId::new(raw).map_err(|err: UserValidationError| {
        Error::validation(err.to_string(), err.field())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_user_ids_are_rejected(#[case] raw: &str) {
        let err = parse_user_id(raw.to_owned()).expect_err("blank id");
        assert_eq!(err.code(), ErrorCode::ValidationError);
        assert_eq!(err.message(), "User ID is required");
        assert_eq!(err.field(), Some("id"));
    }

    #[rstest]
    fn non_blank_user_ids_are_kept_verbatim() {
        let id = parse_user_id("user_1_abc".to_owned()).expect("valid id");
        assert_eq!(id.as_ref(), "user_1_abc");
    }

    #[rstest]
    fn overflow_reports_the_limit() {
        let err = map_json_error(&JsonPayloadError::Overflow {
            limit: MAX_JSON_BODY_BYTES,
        });
        assert_eq!(err.code(), ErrorCode::ValidationError);
        assert!(err.message().contains(&MAX_JSON_BODY_BYTES.to_string()));
        assert_eq!(err.field(), None);
    }

    #[rstest]
    fn malformed_json_is_a_validation_error() {
        let source = serde_json::from_str::<serde_json::Value>("{").expect_err("malformed");
        let err = map_json_error(&JsonPayloadError::Deserialize(source));
        assert_eq!(err.code(), ErrorCode::ValidationError);
        assert!(err.message().starts_with("Invalid JSON body"));
    }

    #[rstest]
    fn wrong_content_type_maps_to_content_type_error() {
        let err = map_json_error(&JsonPayloadError::ContentType);
        assert_eq!(err.code(), ErrorCode::InvalidContentType);
    }
}
