//! Port for user profile storage.
//!
//! The [`UserProfileRepository`] trait is the driven side of the profile
//! service. Adapters must apply each call atomically: in particular
//! [`UserProfileRepository::update_preferences`] is a read-modify-write that
//! callers rely on never observing a torn profile.

use async_trait::async_trait;

use crate::domain::{PreferencesPatch, UserId, UserProfile};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user profile repository adapters.
    pub enum UserProfileRepositoryError {
        /// A profile with the same identifier is already stored.
        DuplicateId { id: String } =>
            "user profile {id} already exists",
        /// The backing store could not serve the request.
        Unavailable { message: String } =>
            "user profile store unavailable: {message}",
    }
}

/// Port for storing and reading user profiles.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserProfileRepository: Send + Sync {
    /// Store a new profile.
    ///
    /// Fails with [`UserProfileRepositoryError::DuplicateId`] when the
    /// identifier is taken; the existing profile is left untouched.
    async fn insert(&self, profile: &UserProfile) -> Result<(), UserProfileRepositoryError>;

    /// Fetch a profile by identifier.
    async fn find_by_id(
        &self,
        id: &UserId,
    ) -> Result<Option<UserProfile>, UserProfileRepositoryError>;

    /// Merge `patch` into the stored preferences and return the new profile.
    ///
    /// Returns `None` when no profile has this identifier.
    async fn update_preferences(
        &self,
        id: &UserId,
        patch: &PreferencesPatch,
    ) -> Result<Option<UserProfile>, UserProfileRepositoryError>;

    /// All profiles whose active flag is set. Order is adapter-defined.
    async fn list_active(&self) -> Result<Vec<UserProfile>, UserProfileRepositoryError>;
}
