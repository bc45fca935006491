//! Health endpoints: a status summary and a readiness probe.
//! Document endpoints in OpenAPI via Utoipa.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use actix_web::{HttpResponse, get, http::header, web};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Shared health state for status and readiness checks.
pub struct HealthState {
    ready: AtomicBool,
    started: Instant,
    environment: String,
    clock: Arc<dyn Clock>,
}

impl HealthState {
    /// Create a health state that is not yet ready.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use profiles_backend::inbound::http::health::HealthState;
    ///
    /// let state = HealthState::new("development", Arc::new(DefaultClock));
    /// assert!(!state.is_ready());
    /// state.mark_ready();
    /// assert!(state.is_ready());
    /// ```
    pub fn new(environment: impl Into<String>, clock: Arc<dyn Clock>) -> Self {
        Self {
            ready: AtomicBool::new(false),
            started: Instant::now(),
            environment: environment.into(),
            clock,
        }
    }

    /// Mark the service as ready.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Return readiness state.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    fn report(&self) -> HealthReport {
        HealthReport {
            status: "healthy".to_owned(),
            timestamp: self.clock.utc(),
            uptime: self.started.elapsed().as_secs_f64(),
            environment: self.environment.clone(),
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthReport {
    /// Always `healthy` while the process serves requests.
    #[schema(example = "healthy")]
    pub status: String,
    /// Time the report was produced.
    pub timestamp: DateTime<Utc>,
    /// Seconds since the server state was created.
    #[schema(example = 12.5)]
    pub uptime: f64,
    /// Deployment environment name.
    #[schema(example = "development")]
    pub environment: String,
}

/// Status summary with uptime and environment.
#[utoipa::path(
    get,
    path = "/health",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is running", body = HealthReport)
    )
)]
#[get("/health")]
pub async fn health(state: web::Data<HealthState>) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(state.report())
}

/// Readiness probe. Return 200 once the listener is bound; return 503 otherwise.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic"),
        (status = 503, description = "Server is not ready")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    let mut response = if state.is_ready() {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    response
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use chrono::{Local, TimeZone};
    use rstest::{fixture, rstest};

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn local(&self) -> DateTime<Local> {
            self.0.with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[fixture]
    fn state() -> web::Data<HealthState> {
        let now = Utc
            .with_ymd_and_hms(2024, 6, 1, 9, 30, 0)
            .single()
            .expect("valid timestamp");
        web::Data::new(HealthState::new("test", Arc::new(FixedClock(now))))
    }

    #[rstest]
    #[actix_web::test]
    async fn health_reports_status_and_environment(state: web::Data<HealthState>) {
        let app =
            test::init_service(App::new().app_data(state).service(health)).await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/health").to_request())
            .await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers().get(header::CACHE_CONTROL).map(|v| v.as_bytes()),
            Some(&b"no-store"[..])
        );
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["environment"], "test");
        assert_eq!(body["timestamp"], "2024-06-01T09:30:00Z");
        assert!(body["uptime"].as_f64().is_some_and(|secs| secs >= 0.0));
    }

    #[rstest]
    #[actix_web::test]
    async fn readiness_flips_after_mark_ready(state: web::Data<HealthState>) {
        let app =
            test::init_service(App::new().app_data(state.clone()).service(ready)).await;

        let before =
            test::call_service(&app, test::TestRequest::get().uri("/health/ready").to_request())
                .await;
        assert_eq!(before.status(), StatusCode::SERVICE_UNAVAILABLE);

        state.mark_ready();
        let after =
            test::call_service(&app, test::TestRequest::get().uri("/health/ready").to_request())
                .await;
        assert_eq!(after.status(), StatusCode::OK);
    }
}
