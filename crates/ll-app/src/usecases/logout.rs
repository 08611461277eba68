use std::sync::Arc;

use anyhow::Result;
use ll_core::ports::PreferenceStorePort;

/// Use case for logging out.
///
/// Wipes the entire preference store, onboarding flag included; the next
/// session resolution lands back on onboarding. Full reset, not selective.
pub struct Logout {
    prefs: Arc<dyn PreferenceStorePort>,
}

impl Logout {
    pub fn new(prefs: Arc<dyn PreferenceStorePort>) -> Self {
        Self { prefs }
    }

    pub async fn execute(&self) -> Result<()> {
        self.prefs.clear().await
    }
}
