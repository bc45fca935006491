//! Domain primitives, ports, and services for user profiles.
//!
//! Purpose: define strongly typed profile entities, the validation rules that
//! guard them, and the service that orchestrates create, lookup, listing, and
//! preference updates. Nothing in here knows about HTTP.
//!
//! Public surface:
//! - Error / ErrorCode: API error payload and its stable identifiers.
//! - UserProfile / UserDraft / UserId: the profile aggregate and its inputs.
//! - UserPreferences / PreferencesPatch: mutable preferences and their merge.
//! - UserProfileService: driving-port implementation over a repository.

pub mod error;
pub mod example_user;
pub mod limits;
pub mod ports;
pub mod preferences;
pub mod trace_id;
pub mod user;
pub mod user_profile_service;


pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::example_user::example_user_draft;
pub use self::preferences::{
    NotificationSettings, NotificationSettingsPatch, PreferencesPatch, Theme,
    UserPreferences,
};
pub use self::trace_id::TraceId;
pub use self::user::{UserDraft, UserId, UserProfile, UserValidationError, ValidatedUser};
pub use self::user_profile_service::UserProfileService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use profiles_backend::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<()> {
///     Err(Error::not_found("User", "user_1"))
/// }
/// # assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
