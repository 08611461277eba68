use std::sync::Arc;

use anyhow::Result;
use ll_core::ports::preferences::keys;
use ll_core::ports::PreferenceStorePort;

/// Use case for the profile screen's "remove avatar" action.
///
/// Takes effect immediately, independent of the save button; the profile
/// falls back to rendering initials.
pub struct RemoveAvatar {
    prefs: Arc<dyn PreferenceStorePort>,
}

impl RemoveAvatar {
    pub fn new(prefs: Arc<dyn PreferenceStorePort>) -> Self {
        Self { prefs }
    }

    pub async fn execute(&self) -> Result<()> {
        self.prefs.remove(keys::AVATAR).await
    }
}
