use std::sync::Arc;

use anyhow::Result;
use ll_core::ports::preferences::keys;
use ll_core::ports::PreferenceStorePort;
use ll_core::profile::UserProfile;

/// Use case for the profile screen's save action.
///
/// Each field is an independent `set`; the store offers no transaction
/// across keys, so a mid-sequence failure aborts the remainder and leaves a
/// partial save. That weak consistency is accepted behavior, not repaired
/// here. A removed avatar is persisted as the empty string.
pub struct SaveProfile {
    prefs: Arc<dyn PreferenceStorePort>,
}

impl SaveProfile {
    pub fn new(prefs: Arc<dyn PreferenceStorePort>) -> Self {
        Self { prefs }
    }

    pub async fn execute(&self, profile: &UserProfile) -> Result<()> {
        self.prefs
            .set(keys::AVATAR, profile.avatar_uri.as_deref().unwrap_or(""))
            .await?;
        self.prefs.set(keys::FIRST_NAME, &profile.first_name).await?;
        self.prefs.set(keys::LAST_NAME, &profile.last_name).await?;
        self.prefs.set(keys::EMAIL, &profile.email).await?;
        self.prefs.set(keys::PHONE, &profile.phone).await?;

        self.set_flag(keys::ORDER_STATUSES, profile.notifications.order_statuses)
            .await?;
        self.set_flag(keys::PASSWORD_CHANGES, profile.notifications.password_changes)
            .await?;
        self.set_flag(keys::SPECIAL_OFFERS, profile.notifications.special_offers)
            .await?;
        self.set_flag(keys::NEWSLETTER, profile.notifications.newsletter)
            .await
    }

    async fn set_flag(&self, key: &str, value: bool) -> Result<()> {
        self.prefs.set(key, &serde_json::to_string(&value)?).await
    }
}
