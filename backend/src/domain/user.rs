//! User profile data model and creation-time validation.

use std::fmt;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde_json::Value;

use super::UserPreferences;

const ID_PREFIX: &str = "user";
const ID_SUFFIX_LEN: usize = 9;
const ID_SUFFIX_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Validation failures for a [`UserDraft`], in rule priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// Email is missing, empty, or lacks `@`.
    #[error("Invalid email format")]
    InvalidEmail,
    /// Name is missing or blank once trimmed.
    #[error("Name is required")]
    MissingName,
    /// The active flag is missing or not a JSON boolean.
    #[error("isActive must be a boolean")]
    NonBooleanActive,
    /// Preferences are missing or not a complete preferences object.
    #[error("Invalid preferences")]
    InvalidPreferences,
    /// An identifier was blank.
    #[error("User ID is required")]
    MissingId,
}

impl UserValidationError {
    /// Wire name of the offending input field.
    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            Self::InvalidEmail => "email",
            Self::MissingName => "name",
            Self::NonBooleanActive => "isActive",
            Self::InvalidPreferences => "preferences",
            Self::MissingId => "id",
        }
    }
}

/// Opaque, store-assigned user identifier.
///
/// Generated identifiers look like `user_1718000000000_k3j9x0a1b`: creation
/// time in milliseconds followed by a random base36 suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(String);

impl UserId {
    /// Wrap a caller-supplied identifier, rejecting blank input.
    ///
    /// # Examples
    /// ```
    /// use profiles_backend::domain::UserId;
    ///
    /// assert!(UserId::new("user_1_abc").is_ok());
    /// assert!(UserId::new("  ").is_err());
    /// ```
    pub fn new(id: impl Into<String>) -> Result<Self, UserValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(UserValidationError::MissingId);
        }
        Ok(Self(id))
    }

    /// Mint a fresh identifier for a profile created at `now`.
    pub fn generate<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> Self {
        let suffix: String = (0..ID_SUFFIX_LEN)
            .map(|_| {
                let index = rng.gen_range(0..ID_SUFFIX_ALPHABET.len());
                ID_SUFFIX_ALPHABET.get(index).map_or('0', |byte| char::from(*byte))
            })
            .collect();
        Self(format!("{ID_PREFIX}_{}_{suffix}", now.timestamp_millis()))
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Unvalidated input for creating a profile.
///
/// The scalar fields stay raw JSON values so a wrongly typed input (a number
/// for `email`, a string for `isActive`) fails its own rule instead of the
/// body parse.
#[derive(Debug, Clone, PartialEq)]
pub struct UserDraft {
    /// Contact address; must be a string containing `@`.
    pub email: Option<Value>,
    /// Full name; must be a string that is not blank.
    pub name: Option<Value>,
    /// Active flag; must be a JSON boolean.
    pub is_active: Option<Value>,
    /// Initial preferences; `None` when absent or malformed.
    pub preferences: Option<UserPreferences>,
}

/// Draft that passed every validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUser {
    email: String,
    name: String,
    is_active: bool,
    preferences: UserPreferences,
}

impl UserDraft {
    /// Apply the validation rules in priority order; the first failure wins.
    ///
    /// # Examples
    /// ```
    /// use profiles_backend::domain::{
    ///     NotificationSettings, Theme, UserDraft, UserPreferences, UserValidationError,
    /// };
    /// use serde_json::json;
    ///
    /// let draft = UserDraft {
    ///     email: Some(json!("invalid-email")),
    ///     name: Some(json!("")),
    ///     is_active: Some(json!(true)),
    ///     preferences: Some(UserPreferences {
    ///         theme: Theme::Light,
    ///         language: "en".to_owned(),
    ///         notifications: NotificationSettings::default(),
    ///     }),
    /// };
    /// assert_eq!(draft.validate(), Err(UserValidationError::InvalidEmail));
    /// ```
    pub fn validate(self) -> Result<ValidatedUser, UserValidationError> {
        let email = self
            .email
            .as_ref()
            .and_then(Value::as_str)
            .filter(|email| email.contains('@'))
            .ok_or(UserValidationError::InvalidEmail)?;
        let name = self
            .name
            .as_ref()
            .and_then(Value::as_str)
            .filter(|name| !name.trim().is_empty())
            .ok_or(UserValidationError::MissingName)?;
        let is_active = self
            .is_active
            .as_ref()
            .and_then(Value::as_bool)
            .ok_or(UserValidationError::NonBooleanActive)?;
        let preferences = self
            .preferences
            .ok_or(UserValidationError::InvalidPreferences)?;

        Ok(ValidatedUser {
            email: email.to_owned(),
            name: name.to_owned(),
            is_active,
            preferences,
        })
    }
}

/// Stored user profile.
///
/// ## Invariants
/// - `id` and `created_at` are assigned once by the store.
/// - Only `preferences` changes after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    id: UserId,
    email: String,
    name: String,
    created_at: DateTime<Utc>,
    is_active: bool,
    preferences: UserPreferences,
}

impl UserProfile {
    /// Assemble a profile from validated input and store-assigned identity.
    #[must_use]
    pub fn new(id: UserId, created_at: DateTime<Utc>, user: ValidatedUser) -> Self {
        let ValidatedUser {
            email,
            name,
            is_active,
            preferences,
        } = user;
        Self {
            id,
            email,
            name,
            created_at,
            is_active,
            preferences,
        }
    }

    /// Store-assigned identifier.
    #[must_use]
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Contact address.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Full name as supplied at creation.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Creation timestamp.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Whether the profile appears in the active listing.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Current preferences.
    #[must_use]
    pub fn preferences(&self) -> &UserPreferences {
        &self.preferences
    }

    /// Same profile with preferences replaced.
    #[must_use]
    pub fn with_preferences(self, preferences: UserPreferences) -> Self {
        Self {
            preferences,
            ..self
        }
    }
}
