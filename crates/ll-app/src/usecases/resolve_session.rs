use std::sync::Arc;

use ll_core::ports::preferences::keys;
use ll_core::ports::PreferenceStorePort;
use ll_core::session::SessionGate;
use tracing::warn;

/// Use case for resolving the initial screen on app launch.
///
/// Reads the persisted onboarding flag once and resolves a fresh
/// [`SessionGate`]. If the read fails the gate stays in `Unknown` and the
/// caller keeps showing the splash placeholder; no error is surfaced and no
/// retry is scheduled.
pub struct ResolveSession {
    prefs: Arc<dyn PreferenceStorePort>,
}

impl ResolveSession {
    pub fn new(prefs: Arc<dyn PreferenceStorePort>) -> Self {
        Self { prefs }
    }

    pub async fn execute(&self) -> SessionGate {
        let mut gate = SessionGate::new();

        match self.prefs.get(keys::IS_ONBOARDED).await {
            Ok(value) => gate.resolve(value.as_deref() == Some("true")),
            Err(e) => {
                warn!("onboarding flag read failed, staying on splash: {e:#}");
            }
        }

        gate
    }
}
