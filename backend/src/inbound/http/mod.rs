//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

use actix_web::{HttpResponse, Scope, web};

use crate::domain::{Error, ErrorCode};

pub use error::ApiResult;

/// Scope mounting the user profile handlers under `/api`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use profiles_backend::inbound::http::api_scope;
///
/// let app = App::new().service(api_scope());
/// ```
pub fn api_scope() -> Scope {
    web::scope("/api")
        .service(users::create_user)
        .service(users::list_users)
        .service(users::get_user)
        .service(users::update_preferences)
}

/// Fallback for unmatched routes, answering `404` in the standard error shape.
pub async fn route_not_found() -> ApiResult<HttpResponse> {
    let code = ErrorCode::NotFound;
    Err(Error::new(code, code.default_message()))
}
