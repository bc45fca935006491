//! `UserProfileRepository` backed by a lock-guarded map.
//!
//! Every operation takes the lock once, so a preferences merge is a single
//! read-modify-write that concurrent readers never see half-applied. Data is
//! lost when the process exits.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{UserProfileRepository, UserProfileRepositoryError};
use crate::domain::{PreferencesPatch, UserId, UserProfile};

/// In-memory implementation of the `UserProfileRepository` port.
#[derive(Debug, Default)]
pub struct InMemoryUserProfileRepository {
    profiles: RwLock<HashMap<UserId, UserProfile>>,
}

impl InMemoryUserProfileRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn map_poison_error<T>(_: PoisonError<T>) -> UserProfileRepositoryError {
    UserProfileRepositoryError::unavailable("profile map lock poisoned")
}

#[async_trait]
impl UserProfileRepository for InMemoryUserProfileRepository {
    async fn insert(&self, profile: &UserProfile) -> Result<(), UserProfileRepositoryError> {
        let mut profiles = self.profiles.write().map_err(map_poison_error)?;
        match profiles.entry(profile.id().clone()) {
            Entry::Occupied(_) => Err(UserProfileRepositoryError::duplicate_id(
                profile.id().as_ref(),
            )),
            Entry::Vacant(slot) => {
                slot.insert(profile.clone());
                debug!(user_id = %profile.id(), "profile stored");
                Ok(())
            }
        }
    }

    async fn find_by_id(
        &self,
        id: &UserId,
    ) -> Result<Option<UserProfile>, UserProfileRepositoryError> {
        let profiles = self.profiles.read().map_err(map_poison_error)?;
        Ok(profiles.get(id).cloned())
    }

    async fn update_preferences(
        &self,
        id: &UserId,
        patch: &PreferencesPatch,
    ) -> Result<Option<UserProfile>, UserProfileRepositoryError> {
        let mut profiles = self.profiles.write().map_err(map_poison_error)?;
        let Some(profile) = profiles.get_mut(id) else {
            return Ok(None);
        };
        let merged = profile.preferences().merged_with(patch);
        *profile = profile.clone().with_preferences(merged);
        Ok(Some(profile.clone()))
    }

    async fn list_active(&self) -> Result<Vec<UserProfile>, UserProfileRepositoryError> {
        let profiles = self.profiles.read().map_err(map_poison_error)?;
        let mut active: Vec<UserProfile> = profiles
            .values()
            .filter(|profile| profile.is_active())
            .cloned()
            .collect();
        active.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().cmp(b.id()))
        });
        Ok(active)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{DateTime, Duration, TimeZone, Utc};
    use rstest::{fixture, rstest};
    use serde_json::json;

    use super::*;
    use crate::domain::{
        NotificationSettings, NotificationSettingsPatch, Theme, UserDraft, UserPreferences,
    };

    fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    fn profile(id: &str, active: bool, offset_secs: i64) -> UserProfile {
        let draft = UserDraft {
            email: Some(json!(format!("{id}@example.com"))),
            name: Some(json!(format!("User {id}"))),
            is_active: Some(json!(active)),
            preferences: Some(UserPreferences {
                theme: Theme::Light,
                language: "en".to_owned(),
                notifications: NotificationSettings {
                    email: true,
                    push: false,
                    sms: false,
                },
            }),
        };
        UserProfile::new(
            UserId::new(id).expect("user id"),
            base_time() + Duration::seconds(offset_secs),
            draft.validate().expect("valid draft"),
        )
    }

    #[fixture]
    fn repo() -> InMemoryUserProfileRepository {
        InMemoryUserProfileRepository::new()
    }

    #[rstest]
    #[tokio::test]
    async fn inserted_profile_can_be_found(repo: InMemoryUserProfileRepository) {
        let stored = profile("user_a", true, 0);
        repo.insert(&stored).await.expect("insert succeeds");

        let found = repo.find_by_id(stored.id()).await.expect("lookup succeeds");

        assert_eq!(found, Some(stored));
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_id_is_absent(repo: InMemoryUserProfileRepository) {
        let id = UserId::new("missing").expect("user id");
        assert_eq!(repo.find_by_id(&id).await.expect("lookup succeeds"), None);
    }

    #[rstest]
    #[tokio::test]
    async fn duplicate_insert_keeps_original(repo: InMemoryUserProfileRepository) {
        let original = profile("user_a", true, 0);
        let clash = profile("user_a", false, 10);
        repo.insert(&original).await.expect("first insert");

        let err = repo.insert(&clash).await.expect_err("duplicate rejected");

        assert_eq!(err, UserProfileRepositoryError::duplicate_id("user_a"));
        let found = repo.find_by_id(original.id()).await.expect("lookup succeeds");
        assert_eq!(found, Some(original));
    }

    #[rstest]
    #[tokio::test]
    async fn list_active_filters_and_orders_by_creation(repo: InMemoryUserProfileRepository) {
        for stored in [
            profile("user_c", true, 20),
            profile("user_inactive", false, 5),
            profile("user_b", true, 0),
            profile("user_a", true, 20),
        ] {
            repo.insert(&stored).await.expect("insert succeeds");
        }

        let ids: Vec<String> = repo
            .list_active()
            .await
            .expect("list succeeds")
            .iter()
            .map(|p| p.id().to_string())
            .collect();

        assert_eq!(ids, ["user_b", "user_a", "user_c"]);
    }

    #[rstest]
    #[tokio::test]
    async fn list_active_on_empty_store_is_empty(repo: InMemoryUserProfileRepository) {
        assert!(repo.list_active().await.expect("list succeeds").is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn update_merges_and_persists(repo: InMemoryUserProfileRepository) {
        let stored = profile("user_a", true, 0);
        repo.insert(&stored).await.expect("insert succeeds");
        let patch = PreferencesPatch {
            theme: Some(Theme::Dark),
            notifications: Some(NotificationSettingsPatch {
                push: Some(true),
                ..NotificationSettingsPatch::default()
            }),
            ..PreferencesPatch::default()
        };

        let updated = repo
            .update_preferences(stored.id(), &patch)
            .await
            .expect("update succeeds")
            .expect("profile exists");

        assert_eq!(updated.preferences().theme, Theme::Dark);
        assert_eq!(updated.preferences().language, "en");
        assert!(updated.preferences().notifications.email);
        assert!(updated.preferences().notifications.push);
        assert_eq!(updated.created_at(), stored.created_at());
        let reread = repo.find_by_id(stored.id()).await.expect("lookup succeeds");
        assert_eq!(reread, Some(updated));
    }

    #[rstest]
    #[tokio::test]
    async fn update_of_unknown_id_is_none(repo: InMemoryUserProfileRepository) {
        let id = UserId::new("ghost").expect("user id");
        let result = repo
            .update_preferences(&id, &PreferencesPatch::default())
            .await
            .expect("update succeeds");
        assert_eq!(result, None);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_flag_updates_are_not_lost() {
        let repo = Arc::new(InMemoryUserProfileRepository::new());
        let stored = profile("user_a", true, 0);
        repo.insert(&stored).await.expect("insert succeeds");

        let patches = [
            NotificationSettingsPatch {
                email: Some(false),
                ..NotificationSettingsPatch::default()
            },
            NotificationSettingsPatch {
                push: Some(true),
                ..NotificationSettingsPatch::default()
            },
            NotificationSettingsPatch {
                sms: Some(true),
                ..NotificationSettingsPatch::default()
            },
        ];
        let tasks: Vec<_> = patches
            .into_iter()
            .map(|flags| {
                let repo = Arc::clone(&repo);
                let id = stored.id().clone();
                tokio::spawn(async move {
                    let patch = PreferencesPatch {
                        notifications: Some(flags),
                        ..PreferencesPatch::default()
                    };
                    repo.update_preferences(&id, &patch).await
                })
            })
            .collect();
        for task in tasks {
            task.await
                .expect("task joins")
                .expect("update succeeds")
                .expect("profile exists");
        }

        let final_profile = repo
            .find_by_id(stored.id())
            .await
            .expect("lookup succeeds")
            .expect("profile exists");
        assert_eq!(
            final_profile.preferences().notifications,
            NotificationSettings {
                email: false,
                push: true,
                sms: true,
            }
        );
    }
}
