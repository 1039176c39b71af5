//! # User models for the mock directory
//!
//! Defines the two representations of a registered user:
//!
//! ## [`UserRecord`]
//!
//! A complete entry in the persisted user directory (`users` key). It is a
//! [`UserProfile`] plus the plaintext `password` the account was created with.
//! Passwords are compared verbatim; this directory is a stand-in for a real
//! backend and offers no security.
//!
//! ## [`UserProfile`]
//!
//! The password-less view that is stored as the active session (`user` key) and
//! handed to the presentation layer. [`UserProfile::display_name`] and
//! [`UserProfile::initials`] cover the avatar fallbacks.
//!
//! ## [`ProfileUpdate`]
//!
//! A shallow patch applied by the profile editor. `None` leaves a field as it
//! is; for optional fields an empty string clears the value. `name` and `email`
//! are required, so empty values for them are ignored.
//!
//! All types serialise with camelCase field names (`createdAt`, `socialLinks`).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Provider name → profile URL.
pub type SocialLinks = BTreeMap<String, String>;

/// Social providers offered by the profile editor.
pub const SOCIAL_PROVIDERS: [&str; 4] = ["linkedin", "github", "twitter", "instagram"];

/// User information safe to keep in the session and show in the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Data URI or URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub social_links: SocialLinks,
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    /// Two upper-cased characters for an avatar placeholder.
    pub fn initials(&self) -> String {
        self.display_name()
            .chars()
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// The link for `provider`, if one is set and non-empty.
    pub fn social_link(&self, provider: &str) -> Option<&str> {
        self.social_links
            .get(provider)
            .map(String::as_str)
            .filter(|link| !link.is_empty())
    }
}

/// Full directory entry, including the password.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(flatten)]
    pub profile: UserProfile,
    pub password: String,
}

impl UserRecord {
    pub fn new(
        id: String,
        email: &str,
        password: &str,
        name: &str,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            profile: UserProfile {
                id,
                email: email.to_string(),
                name: name.to_string(),
                title: None,
                avatar: None,
                location: None,
                website: None,
                bio: None,
                social_links: SocialLinks::new(),
                created_at,
            },
            password: password.to_string(),
        }
    }

    /// Strip the password.
    pub fn into_profile(self) -> UserProfile {
        self.profile
    }
}

/// Shallow patch for a user's profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    /// Id of the user being updated.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Replaces the whole map when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_links: Option<SocialLinks>,
}

impl ProfileUpdate {
    /// An update for `id` that changes nothing yet.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// The new email, if this update changes it.
    pub fn new_email(&self) -> Option<&str> {
        self.email.as_deref().filter(|email| !email.is_empty())
    }

    /// Merge this update into `profile`.
    pub fn apply_to(&self, profile: &mut UserProfile) {
        if let Some(name) = self.name.as_deref().filter(|name| !name.is_empty()) {
            profile.name = name.to_string();
        }
        if let Some(email) = self.new_email() {
            profile.email = email.to_string();
        }
        merge_optional(&mut profile.title, &self.title);
        merge_optional(&mut profile.avatar, &self.avatar);
        merge_optional(&mut profile.location, &self.location);
        merge_optional(&mut profile.website, &self.website);
        merge_optional(&mut profile.bio, &self.bio);
        if let Some(links) = &self.social_links {
            profile.social_links = links
                .iter()
                .filter(|(_, url)| !url.is_empty())
                .map(|(provider, url)| (provider.clone(), url.clone()))
                .collect();
        }
    }
}

fn merge_optional(field: &mut Option<String>, update: &Option<String>) {
    if let Some(value) = update {
        *field = Some(value.clone()).filter(|v| !v.is_empty());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> UserRecord {
        let created_at = DateTime::parse_from_rfc3339("2024-03-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        UserRecord::new(
            "user-1".to_string(),
            "ada@example.com",
            "hunter22",
            "Ada Lovelace",
            created_at,
        )
    }

    #[test]
    fn test_record_layout() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["id"], "user-1");
        assert_eq!(value["email"], "ada@example.com");
        assert_eq!(value["password"], "hunter22");
        assert_eq!(value["createdAt"], "2024-03-01T12:00:00Z");
        assert!(value.get("socialLinks").is_none());
        assert!(value.get("title").is_none());

        let back: UserRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn test_profile_has_no_password() {
        let value = serde_json::to_value(sample().into_profile()).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["name"], "Ada Lovelace");
    }

    #[test]
    fn test_display_name_and_initials() {
        let mut profile = sample().into_profile();
        assert_eq!(profile.display_name(), "Ada Lovelace");
        assert_eq!(profile.initials(), "AD");

        profile.name.clear();
        assert_eq!(profile.display_name(), "ada@example.com");
        assert_eq!(profile.initials(), "AD");
    }

    #[test]
    fn test_apply_merges_fields() {
        let mut profile = sample().into_profile();
        profile.bio = Some("Analyst".to_string());
        profile.avatar = Some("data:image/png;base64,AAAA".to_string());

        let update = ProfileUpdate {
            title: Some("Engineer".to_string()),
            avatar: Some(String::new()),
            name: Some(String::new()),
            social_links: Some(SocialLinks::from([
                ("github".to_string(), "https://github.com/ada".to_string()),
                ("twitter".to_string(), String::new()),
            ])),
            ..ProfileUpdate::new("user-1")
        };
        update.apply_to(&mut profile);

        assert_eq!(profile.title.as_deref(), Some("Engineer"));
        // Absent fields survive
        assert_eq!(profile.bio.as_deref(), Some("Analyst"));
        // Empty optional values clear, empty required values are ignored
        assert!(profile.avatar.is_none());
        assert_eq!(profile.name, "Ada Lovelace");
        assert_eq!(profile.social_link("github"), Some("https://github.com/ada"));
        assert_eq!(profile.social_link("twitter"), None);
    }
}
