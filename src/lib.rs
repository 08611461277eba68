//! # Little Lemon
//!
//! Composition root for the Little Lemon app: wires the infrastructure
//! adapters (SQLite menu cache, file preference store, HTTP menu client)
//! into the use-case layer and hands the shell an assembled [`App`].

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use ll_infra::db::{init_db_pool, DieselMenuRepository};
use ll_infra::{FilePreferenceStore, HttpMenuClient};

pub use ll_app::{App, AppDeps};
pub use ll_core::{AppConfig, MenuFilter, MenuItem, Screen, SessionGate, UserProfile};

/// Assemble the app against the platform data directory.
pub fn bootstrap(config: AppConfig) -> Result<App> {
    let data_dir = ll_infra::fs::app_data_dir()?;
    bootstrap_at(&data_dir, config)
}

/// Assemble the app with all local state under `data_dir`.
pub fn bootstrap_at(data_dir: &Path, config: AppConfig) -> Result<App> {
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("create app data dir failed: {}", data_dir.display()))?;

    let db_path = data_dir.join(&config.storage.database_file);
    let db_url = db_path.to_str().context("database path is not valid UTF-8")?;
    let pool = init_db_pool(db_url)?;

    let prefs_path = data_dir.join(&config.storage.preferences_file);

    let deps = AppDeps {
        prefs: Arc::new(FilePreferenceStore::new(prefs_path)),
        menu_repo: Arc::new(DieselMenuRepository::new(pool)),
        remote_menu: Arc::new(HttpMenuClient::new(config.remote.menu_url)),
    };

    Ok(App::new(deps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn bootstrapped_app_starts_on_onboarding_and_advances_to_home() {
        let temp_dir = TempDir::new().unwrap();
        let app = bootstrap_at(temp_dir.path(), AppConfig::default()).unwrap();

        let gate = app.resolve_session().execute().await;
        assert_eq!(gate.screen(), Screen::Onboarding);

        app.complete_onboarding()
            .execute("Tilly", "tilly@example.com")
            .await
            .unwrap();

        let gate = app.resolve_session().execute().await;
        assert_eq!(gate.screen(), Screen::Home);
    }
}
