//! Aggregated OpenAPI document for the profile service.
//!
//! [`ApiDoc`] collects:
//!
//! - **Paths**: every user profile and health endpoint from the inbound layer
//! - **Schemas**: request/response DTOs plus the domain error wrappers
//!   ([`ErrorSchema`], [`ErrorCodeSchema`]) that keep domain types free of
//!   utoipa derives
//!
//! The document is served by Swagger UI at `/docs` and exported via
//! `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::health::HealthReport;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::users::{
    CreateUserRequest, NotificationsDto, NotificationsPatchDto, PreferencesDto,
    PreferencesPatchRequest, ThemeDto, UserProfileResponse,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User profiles API",
        description = "Create, read, list, and update in-memory user profiles."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_preferences,
        crate::inbound::http::health::health,
        crate::inbound::http::health::ready,
    ),
    components(schemas(
        CreateUserRequest,
        UserProfileResponse,
        PreferencesDto,
        PreferencesPatchRequest,
        NotificationsDto,
        NotificationsPatchDto,
        ThemeDto,
        HealthReport,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "users", description = "User profile operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
