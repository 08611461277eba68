//! Preference store port
//!
//! A durable string-to-string key-value store for small user settings
//! (onboarding flag, profile fields, notification toggles). Semantics are
//! per-key last-write-wins; there is no atomicity across keys, so a
//! multi-field save that fails midway leaves a partial update.

use async_trait::async_trait;

/// Well-known preference keys. Boolean values are JSON-encoded strings.
pub mod keys {
    pub const IS_ONBOARDED: &str = "isOnboarded";
    pub const FIRST_NAME: &str = "userFirstName";
    pub const LAST_NAME: &str = "userLastName";
    pub const EMAIL: &str = "userEmail";
    pub const PHONE: &str = "userPhone";
    pub const AVATAR: &str = "userAvatar";
    pub const ORDER_STATUSES: &str = "userOrderStatuses";
    pub const PASSWORD_CHANGES: &str = "userPasswordChanges";
    pub const SPECIAL_OFFERS: &str = "userSpecialOffers";
    pub const NEWSLETTER: &str = "userNewsletter";

    /// Every key the app writes; logout wipes all of them.
    pub const ALL: [&str; 10] = [
        IS_ONBOARDED,
        FIRST_NAME,
        LAST_NAME,
        EMAIL,
        PHONE,
        AVATAR,
        ORDER_STATUSES,
        PASSWORD_CHANGES,
        SPECIAL_OFFERS,
        NEWSLETTER,
    ];
}

#[async_trait]
pub trait PreferenceStorePort: Send + Sync {
    /// Read a value; absent keys are `Ok(None)`, not an error.
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;

    async fn remove(&self, key: &str) -> anyhow::Result<()>;

    /// Wipe the entire store (logout).
    async fn clear(&self) -> anyhow::Result<()>;
}
