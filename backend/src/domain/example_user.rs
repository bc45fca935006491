//! Demonstration profile seeded at startup when enabled.

use serde_json::Value;

use super::{NotificationSettings, Theme, UserDraft, UserPreferences};

/// Draft for the demonstration profile.
///
/// # Examples
/// ```
/// use profiles_backend::domain::example_user_draft;
///
/// let user = example_user_draft().validate().expect("example user is valid");
/// # let _ = user;
/// ```
#[must_use]
pub fn example_user_draft() -> UserDraft {
    UserDraft {
        email: Some(Value::from("example@company.com")),
        name: Some(Value::from("Example User")),
        is_active: Some(Value::Bool(true)),
        preferences: Some(UserPreferences {
            theme: Theme::Light,
            language: "en".to_owned(),
            notifications: NotificationSettings {
                email: true,
                push: false,
                sms: false,
            },
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_draft_is_active_with_light_theme() {
        let draft = example_user_draft();
        let user = draft.validate().expect("example user is valid");
        let profile = crate::domain::UserProfile::new(
            crate::domain::UserId::new("user_example").expect("id"),
            chrono::Utc::now(),
            user,
        );
        assert_eq!(profile.name(), "Example User");
        assert_eq!(profile.preferences().theme, Theme::Light);
        assert!(profile.is_active());
    }
}
