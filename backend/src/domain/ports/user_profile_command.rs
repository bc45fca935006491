//! Driving port for user profile mutations.
//!
//! Inbound adapters call this port to create profiles and change
//! preferences without knowing how profiles are stored.

use async_trait::async_trait;

use crate::domain::{Error, PreferencesPatch, UserDraft, UserId, UserProfile};

/// Domain use-case port for changing user profiles.
#[async_trait]
pub trait UserProfileCommand: Send + Sync {
    /// Validate `draft` and store it as a new profile.
    ///
    /// Fails with [`crate::domain::ErrorCode::ValidationError`] naming the
    /// offending field; nothing is stored on failure.
    async fn create_user(&self, draft: UserDraft) -> Result<UserProfile, Error>;

    /// Merge `patch` into the preferences of profile `id`.
    ///
    /// Fails with [`crate::domain::ErrorCode::NotFound`] for unknown ids.
    async fn update_preferences(
        &self,
        id: &UserId,
        patch: PreferencesPatch,
    ) -> Result<UserProfile, Error>;
}
