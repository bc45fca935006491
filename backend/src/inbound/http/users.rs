//! User profile HTTP handlers.
//!
//! ```text
//! POST  /api/users {"email":"a@b.c","name":"Ada","isActive":true,"preferences":{...}}
//! GET   /api/users
//! GET   /api/users/{id}
//! PATCH /api/users/{id}/preferences {"theme":"dark"}
//! ```

use actix_web::{HttpResponse, get, patch, post, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{
    NotificationSettings, NotificationSettingsPatch, PreferencesPatch, Theme, UserDraft,
    UserPreferences, UserProfile,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_user_id;

/// Display theme on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ThemeDto {
    Light,
    Dark,
    Auto,
}

impl From<ThemeDto> for Theme {
    fn from(value: ThemeDto) -> Self {
        match value {
            ThemeDto::Light => Self::Light,
            ThemeDto::Dark => Self::Dark,
            ThemeDto::Auto => Self::Auto,
        }
    }
}

impl From<Theme> for ThemeDto {
    fn from(value: Theme) -> Self {
        match value {
            Theme::Light => Self::Light,
            Theme::Dark => Self::Dark,
            Theme::Auto => Self::Auto,
        }
    }
}

/// Notification channel toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct NotificationsDto {
    pub email: bool,
    pub push: bool,
    pub sms: bool,
}

/// Full preferences as stored on a profile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct PreferencesDto {
    pub theme: ThemeDto,
    #[schema(example = "en")]
    pub language: String,
    pub notifications: NotificationsDto,
}

impl From<PreferencesDto> for UserPreferences {
    fn from(value: PreferencesDto) -> Self {
        Self {
            theme: value.theme.into(),
            language: value.language,
            notifications: NotificationSettings {
                email: value.notifications.email,
                push: value.notifications.push,
                sms: value.notifications.sms,
            },
        }
    }
}

impl From<&UserPreferences> for PreferencesDto {
    fn from(value: &UserPreferences) -> Self {
        Self {
            theme: value.theme.into(),
            language: value.language.clone(),
            notifications: NotificationsDto {
                email: value.notifications.email,
                push: value.notifications.push,
                sms: value.notifications.sms,
            },
        }
    }
}

/// Request body for `POST /api/users`.
///
/// Fields are captured as raw JSON so the domain rules, not the body parser,
/// decide which field is wrong and in what order.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[serde(default)]
    #[schema(value_type = String, example = "test@example.com")]
    pub email: Option<serde_json::Value>,
    #[serde(default)]
    #[schema(value_type = String, example = "Test User")]
    pub name: Option<serde_json::Value>,
    #[serde(default)]
    #[schema(value_type = bool, example = true)]
    pub is_active: Option<serde_json::Value>,
    #[serde(default)]
    #[schema(value_type = PreferencesDto)]
    pub preferences: Option<serde_json::Value>,
}

impl From<CreateUserRequest> for UserDraft {
    fn from(value: CreateUserRequest) -> Self {
        let preferences = value.preferences.and_then(|raw| {
            serde_json::from_value::<PreferencesDto>(raw)
                .inspect_err(|error| debug!(%error, "rejecting malformed preferences"))
                .ok()
        });
        Self {
            email: value.email,
            name: value.name,
            is_active: value.is_active,
            preferences: preferences.map(UserPreferences::from),
        }
    }
}

/// Partial notification toggles; omitted flags are kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct NotificationsPatchDto {
    #[serde(default)]
    pub email: Option<bool>,
    #[serde(default)]
    pub push: Option<bool>,
    #[serde(default)]
    pub sms: Option<bool>,
}

/// Request body for `PATCH /api/users/{id}/preferences`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct PreferencesPatchRequest {
    #[serde(default)]
    pub theme: Option<ThemeDto>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub notifications: Option<NotificationsPatchDto>,
}

impl From<PreferencesPatchRequest> for PreferencesPatch {
    fn from(value: PreferencesPatchRequest) -> Self {
        Self {
            theme: value.theme.map(Theme::from),
            language: value.language,
            notifications: value.notifications.map(|n| NotificationSettingsPatch {
                email: n.email,
                push: n.push,
                sms: n.sms,
            }),
        }
    }
}

/// Response payload for a user profile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileResponse {
    #[schema(example = "user_1717171717171_k3j4h5g6f")]
    pub id: String,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
    pub preferences: PreferencesDto,
}

impl From<UserProfile> for UserProfileResponse {
    fn from(value: UserProfile) -> Self {
        Self {
            id: value.id().to_string(),
            email: value.email().to_owned(),
            name: value.name().to_owned(),
            created_at: value.created_at(),
            is_active: value.is_active(),
            preferences: PreferencesDto::from(value.preferences()),
        }
    }
}

/// Create a user profile.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "Profile created", body = UserProfileResponse),
        (status = 400, description = "Validation failed or body not JSON", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let profile = state
        .users
        .create_user(UserDraft::from(payload.into_inner()))
        .await?;
    Ok(HttpResponse::Created().json(UserProfileResponse::from(profile)))
}

/// List active user profiles.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Active profiles", body = [UserProfileResponse]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listActiveUsers"
)]
#[get("/users")]
pub async fn list_users(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<UserProfileResponse>>> {
    let users = state.users_query.list_active_users().await?;
    Ok(web::Json(
        users.into_iter().map(UserProfileResponse::from).collect(),
    ))
}

/// Fetch one user profile.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Profile", body = UserProfileResponse),
        (status = 400, description = "Blank identifier", body = ErrorSchema),
        (status = 404, description = "No such user", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserProfileResponse>> {
    let id = parse_user_id(path.into_inner())?;
    let profile = state.users_query.get_user(&id).await?;
    Ok(web::Json(UserProfileResponse::from(profile)))
}

/// Merge a partial preferences update into a profile.
#[utoipa::path(
    patch,
    path = "/api/users/{id}/preferences",
    params(("id" = String, Path, description = "User identifier")),
    request_body = PreferencesPatchRequest,
    responses(
        (status = 200, description = "Updated profile", body = UserProfileResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "No such user", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUserPreferences"
)]
#[patch("/users/{id}/preferences")]
pub async fn update_preferences(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<PreferencesPatchRequest>,
) -> ApiResult<web::Json<UserProfileResponse>> {
    let id = parse_user_id(path.into_inner())?;
    let profile = state
        .users
        .update_preferences(&id, PreferencesPatch::from(payload.into_inner()))
        .await?;
    Ok(web::Json(UserProfileResponse::from(profile)))
}
