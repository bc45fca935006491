//! Driving port for user profile reads.

use async_trait::async_trait;

use crate::domain::{Error, UserId, UserProfile};

/// Domain use-case port for reading user profiles.
#[async_trait]
pub trait UserProfileQuery: Send + Sync {
    /// Return the profile stored under `id`.
    ///
    /// Fails with [`crate::domain::ErrorCode::NotFound`] for unknown ids.
    async fn get_user(&self, id: &UserId) -> Result<UserProfile, Error>;

    /// Return every active profile.
    async fn list_active_users(&self) -> Result<Vec<UserProfile>, Error>;
}
