//! User preferences and their partial-update semantics.
//!
//! Preferences are the only mutable part of a profile. Updates arrive as a
//! [`PreferencesPatch`]: fields present in the patch overwrite, absent fields
//! are retained, and notification flags merge one flag at a time.

use std::fmt;

/// Display theme chosen by the user.
///
/// # Examples
///
/// ```
/// # use profiles_backend::domain::Theme;
/// assert_eq!(Theme::Auto.as_str(), "auto");
/// assert_eq!(Theme::default().to_string(), "light");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    /// Light colour scheme.
    #[default]
    Light,
    /// Dark colour scheme.
    Dark,
    /// Follow the client's system setting.
    Auto,
}

impl Theme {
    /// Wire representation of the theme.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Independent notification channel toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NotificationSettings {
    /// Email notifications.
    pub email: bool,
    /// Push notifications.
    pub push: bool,
    /// SMS notifications.
    pub sms: bool,
}

/// A user's display and notification preferences.
///
/// # Examples
///
/// ```
/// # use profiles_backend::domain::{NotificationSettings, Theme, UserPreferences};
/// let prefs = UserPreferences {
///     theme: Theme::Light,
///     language: "en".to_owned(),
///     notifications: NotificationSettings::default(),
/// };
/// assert!(!prefs.notifications.sms);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPreferences {
    /// Display theme.
    pub theme: Theme,
    /// Preferred language code, e.g. `en`.
    pub language: String,
    /// Notification channel toggles.
    pub notifications: NotificationSettings,
}

impl UserPreferences {
    /// Return a copy with `patch` merged over these preferences.
    ///
    /// # Examples
    ///
    /// ```
    /// # use profiles_backend::domain::{
    /// #     NotificationSettings, NotificationSettingsPatch, PreferencesPatch, Theme,
    /// #     UserPreferences,
    /// # };
    /// let prefs = UserPreferences {
    ///     theme: Theme::Light,
    ///     language: "en".to_owned(),
    ///     notifications: NotificationSettings { email: true, push: false, sms: false },
    /// };
    /// let patch = PreferencesPatch {
    ///     theme: Some(Theme::Dark),
    ///     notifications: Some(NotificationSettingsPatch {
    ///         push: Some(true),
    ///         ..NotificationSettingsPatch::default()
    ///     }),
    ///     ..PreferencesPatch::default()
    /// };
    ///
    /// let merged = prefs.merged_with(&patch);
    /// assert_eq!(merged.theme, Theme::Dark);
    /// assert_eq!(merged.language, "en");
    /// assert!(merged.notifications.email && merged.notifications.push);
    /// ```
    #[must_use]
    pub fn merged_with(&self, patch: &PreferencesPatch) -> Self {
        Self {
            theme: patch.theme.unwrap_or(self.theme),
            language: patch
                .language
                .clone()
                .unwrap_or_else(|| self.language.clone()),
            notifications: patch
                .notifications
                .map_or(self.notifications, |n| n.apply_to(self.notifications)),
        }
    }
}

/// Partial notification settings; `None` keeps the stored flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NotificationSettingsPatch {
    /// Replacement email flag.
    pub email: Option<bool>,
    /// Replacement push flag.
    pub push: Option<bool>,
    /// Replacement SMS flag.
    pub sms: Option<bool>,
}

impl NotificationSettingsPatch {
    fn apply_to(self, current: NotificationSettings) -> NotificationSettings {
        NotificationSettings {
            email: self.email.unwrap_or(current.email),
            push: self.push.unwrap_or(current.push),
            sms: self.sms.unwrap_or(current.sms),
        }
    }
}

/// Partial preferences update. Absent fields, including a wholly absent
/// `notifications`, leave the stored value untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreferencesPatch {
    /// Replacement theme.
    pub theme: Option<Theme>,
    /// Replacement language code.
    pub language: Option<String>,
    /// Per-flag notification changes.
    pub notifications: Option<NotificationSettingsPatch>,
}

impl From<NotificationSettings> for NotificationSettingsPatch {
    fn from(value: NotificationSettings) -> Self {
        Self {
            email: Some(value.email),
            push: Some(value.push),
            sms: Some(value.sms),
        }
    }
}
