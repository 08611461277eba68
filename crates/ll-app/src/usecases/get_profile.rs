use std::sync::Arc;

use ll_core::ports::preferences::keys;
use ll_core::ports::PreferenceStorePort;
use ll_core::profile::UserProfile;

/// Use case for loading the profile screen's fields.
///
/// Each field is read independently; an absent key, a failed read, or an
/// unparsable boolean all fall back to the field's default. An avatar stored
/// as the empty string reads back as `None` (that is how a removed avatar is
/// persisted).
pub struct GetProfile {
    prefs: Arc<dyn PreferenceStorePort>,
}

impl GetProfile {
    pub fn new(prefs: Arc<dyn PreferenceStorePort>) -> Self {
        Self { prefs }
    }

    pub async fn execute(&self) -> UserProfile {
        let mut profile = UserProfile::default();

        if let Some(value) = self.read(keys::FIRST_NAME).await {
            profile.first_name = value;
        }
        if let Some(value) = self.read(keys::LAST_NAME).await {
            profile.last_name = value;
        }
        if let Some(value) = self.read(keys::EMAIL).await {
            profile.email = value;
        }
        if let Some(value) = self.read(keys::PHONE).await {
            profile.phone = value;
        }
        profile.avatar_uri = self.read(keys::AVATAR).await.filter(|uri| !uri.is_empty());

        profile.notifications.order_statuses = self.read_flag(keys::ORDER_STATUSES).await;
        profile.notifications.password_changes = self.read_flag(keys::PASSWORD_CHANGES).await;
        profile.notifications.special_offers = self.read_flag(keys::SPECIAL_OFFERS).await;
        profile.notifications.newsletter = self.read_flag(keys::NEWSLETTER).await;

        profile
    }

    async fn read(&self, key: &str) -> Option<String> {
        self.prefs.get(key).await.ok().flatten()
    }

    async fn read_flag(&self, key: &str) -> bool {
        match self.read(key).await {
            Some(value) => serde_json::from_str(&value).unwrap_or(true),
            None => true,
        }
    }
}
