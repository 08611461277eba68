use std::sync::Arc;

use anyhow::Result;
use ll_core::ports::preferences::keys;
use ll_core::ports::PreferenceStorePort;

/// Use case for completing the onboarding flow.
///
/// Persists the collected first name and email, then marks onboarding as
/// done. The flag is written last so a crash mid-sequence never produces an
/// onboarded session without its profile fields.
pub struct CompleteOnboarding {
    prefs: Arc<dyn PreferenceStorePort>,
}

impl CompleteOnboarding {
    pub fn new(prefs: Arc<dyn PreferenceStorePort>) -> Self {
        Self { prefs }
    }

    pub async fn execute(&self, first_name: &str, email: &str) -> Result<()> {
        self.prefs.set(keys::FIRST_NAME, first_name).await?;
        self.prefs.set(keys::EMAIL, email).await?;
        self.prefs.set(keys::IS_ONBOARDED, "true").await
    }
}
