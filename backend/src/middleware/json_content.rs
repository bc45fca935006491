//! Guard rejecting body-carrying requests that are not declared as JSON.
//!
//! `POST`, `PUT`, and `PATCH` requests must send a `Content-Type` containing
//! `application/json`; anything else is answered with `400` and the
//! `INVALID_CONTENT_TYPE` error body before routing happens.

use std::task::{Context, Poll};

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::{Method, header};
use actix_web::{Error, ResponseError};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::debug;

use crate::domain::Error as DomainError;

const JSON_MEDIA_TYPE: &str = "application/json";

fn requires_json(method: &Method) -> bool {
    matches!(*method, Method::POST | Method::PUT | Method::PATCH)
}

fn declares_json(req: &ServiceRequest) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.to_ascii_lowercase().contains(JSON_MEDIA_TYPE))
}

/// Middleware enforcing JSON request bodies.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use profiles_backend::middleware::RequireJson;
///
/// let app = App::new().wrap(RequireJson);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct RequireJson;

impl<S, B> Transform<S, ServiceRequest> for RequireJson
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJsonMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJsonMiddleware { service }))
    }
}

/// Service wrapper produced by [`RequireJson`].
pub struct RequireJsonMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequireJsonMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if requires_json(req.method()) && !declares_json(&req) {
            debug!(method = %req.method(), path = req.path(), "rejected non-JSON body");
            let response = DomainError::invalid_content_type().error_response();
            let res = req.into_response(response).map_into_right_body();
            return Box::pin(async move { Ok(res) });
        }

        let fut = self.service.call(req);
        Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
    }
}
