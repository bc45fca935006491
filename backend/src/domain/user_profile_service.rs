//! User profile domain service.
//!
//! Implements the [`UserProfileCommand`] and [`UserProfileQuery`] driving
//! ports on top of any [`UserProfileRepository`]. Validation happens before
//! the repository is touched, so a rejected draft never produces a write.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info, warn};

use crate::domain::ports::{
    UserProfileCommand, UserProfileQuery, UserProfileRepository, UserProfileRepositoryError,
};
use crate::domain::{
    Error, PreferencesPatch, UserDraft, UserId, UserProfile, UserValidationError,
};

/// Resource name used in not-found messages.
const USER_RESOURCE: &str = "User";

/// Fresh identifiers to try before giving up on a create.
const MAX_ID_ATTEMPTS: u32 = 3;

/// User profile service implementing the driving ports.
#[derive(Clone)]
pub struct UserProfileService<R> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> UserProfileService<R> {
    /// Create a service over `repository`, stamping creation times from
    /// `clock`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use profiles_backend::domain::UserProfileService;
    /// use profiles_backend::outbound::memory::InMemoryUserProfileRepository;
    ///
    /// let service = UserProfileService::new(
    ///     Arc::new(InMemoryUserProfileRepository::new()),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = service;
    /// ```
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }
}

fn map_validation_error(error: UserValidationError) -> Error {
    Error::validation(error.to_string(), error.field())
}

fn map_repository_error(error: UserProfileRepositoryError) -> Error {
    Error::internal(format!("user profile repository error: {error}"))
}

fn not_found(id: &UserId) -> Error {
    Error::not_found(USER_RESOURCE, id.as_ref())
}

#[async_trait]
impl<R> UserProfileCommand for UserProfileService<R>
where
    R: UserProfileRepository,
{
    async fn create_user(&self, draft: UserDraft) -> Result<UserProfile, Error> {
        let user = draft.validate().map_err(map_validation_error)?;
        let created_at = self.clock.utc();

        for attempt in 1..=MAX_ID_ATTEMPTS {
            let id = UserId::generate(created_at, &mut rand::thread_rng());
            let profile = UserProfile::new(id, created_at, user.clone());
            match self.repository.insert(&profile).await {
                Ok(()) => {
                    info!(user_id = %profile.id(), "user profile created");
                    return Ok(profile);
                }
                Err(UserProfileRepositoryError::DuplicateId { id }) => {
                    warn!(user_id = %id, attempt, "generated user id already taken");
                }
                Err(error) => return Err(map_repository_error(error)),
            }
        }

        Err(Error::internal(format!(
            "no unique user id after {MAX_ID_ATTEMPTS} attempts"
        )))
    }

    async fn update_preferences(
        &self,
        id: &UserId,
        patch: PreferencesPatch,
    ) -> Result<UserProfile, Error> {
        let updated = self
            .repository
            .update_preferences(id, &patch)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(id))?;
        info!(user_id = %id, "user preferences updated");
        Ok(updated)
    }
}

#[async_trait]
impl<R> UserProfileQuery for UserProfileService<R>
where
    R: UserProfileRepository,
{
    async fn get_user(&self, id: &UserId) -> Result<UserProfile, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(id))
    }

    async fn list_active_users(&self) -> Result<Vec<UserProfile>, Error> {
        let users = self
            .repository
            .list_active()
            .await
            .map_err(map_repository_error)?;
        debug!(count = users.len(), "listed active users");
        Ok(users)
    }
}
