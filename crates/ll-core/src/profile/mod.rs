//! User profile domain models
//!
//! The profile screen's fields and the email notification toggles. All fields
//! are independently optional; absent preference keys read back as the
//! defaults below.

use serde::{Deserialize, Serialize};

/// A user's profile as edited on the profile screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Raw digits, no formatting mask.
    pub phone: String,
    /// Locally picked image reference; `None` renders initials instead.
    pub avatar_uri: Option<String>,
    pub notifications: NotificationPrefs,
}

/// Email notification toggles, all on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPrefs {
    pub order_statuses: bool,
    pub password_changes: bool,
    pub special_offers: bool,
    pub newsletter: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            order_statuses: true,
            password_changes: true,
            special_offers: true,
            newsletter: true,
        }
    }
}

impl UserProfile {
    /// Upper-cased first letters of first and last name, for the avatar
    /// placeholder when no image is set.
    pub fn initials(&self) -> String {
        let mut initials = String::new();
        if let Some(first) = self.first_name.chars().next() {
            initials.extend(first.to_uppercase());
        }
        if let Some(last) = self.last_name.chars().next() {
            initials.extend(last.to_uppercase());
        }
        initials
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_empty_fields_with_all_notifications_on() {
        let profile = UserProfile::default();

        assert!(profile.first_name.is_empty());
        assert!(profile.avatar_uri.is_none());
        assert!(profile.notifications.order_statuses);
        assert!(profile.notifications.password_changes);
        assert!(profile.notifications.special_offers);
        assert!(profile.notifications.newsletter);
    }

    #[test]
    fn initials_come_from_both_names_upper_cased() {
        let profile = UserProfile {
            first_name: "tilly".into(),
            last_name: "jones".into(),
            ..Default::default()
        };

        assert_eq!(profile.initials(), "TJ");
    }

    #[test]
    fn initials_handle_missing_names() {
        let profile = UserProfile {
            first_name: "ada".into(),
            ..Default::default()
        };

        assert_eq!(profile.initials(), "A");
        assert_eq!(UserProfile::default().initials(), "");
    }
}
