//! End-to-end flows over the real adapters: SQLite menu cache and file
//! preference store, with a stubbed remote menu source.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use ll_app::{App, AppDeps};
use ll_core::menu::{MenuFilter, MenuItem};
use ll_core::ports::{RemoteMenuError, RemoteMenuPort};
use ll_core::profile::UserProfile;
use ll_core::session::Screen;
use ll_infra::db::{init_db_pool, DieselMenuRepository};
use ll_infra::FilePreferenceStore;
use tempfile::TempDir;

struct FixedRemoteMenu {
    items: Vec<MenuItem>,
    fail: bool,
    calls: AtomicUsize,
}

impl FixedRemoteMenu {
    fn returning(items: Vec<MenuItem>) -> Self {
        Self {
            items,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            items: Vec::new(),
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteMenuPort for FixedRemoteMenu {
    async fn fetch_menu(&self) -> Result<Vec<MenuItem>, RemoteMenuError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(RemoteMenuError::Network("connection refused".to_string()));
        }
        Ok(self.items.clone())
    }
}

fn capstone_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new(
            "Greek Salad",
            12.5,
            "Crispy lettuce, peppers, olives and feta.",
            "greekSalad.jpg",
            "starters",
        ),
        MenuItem::new("Bruschetta", 7.99, "Grilled bread.", "bruschetta.jpg", "starters"),
        MenuItem::new("Grilled Fish", 20.0, "Fresh catch.", "grilledFish.jpg", "mains"),
        MenuItem::new("Pasta", 18.99, "Penne with tomatoes.", "pasta.jpg", "mains"),
        MenuItem::new("Lemon Dessert", 6.3, "Family recipe.", "lemonDessert.jpg", "desserts"),
    ]
}

fn wire_app(temp_dir: &TempDir, remote: Arc<FixedRemoteMenu>) -> App {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let db_path = temp_dir.path().join("little_lemon.db");
    let pool = init_db_pool(db_path.to_str().unwrap()).unwrap();

    App::new(AppDeps {
        prefs: Arc::new(FilePreferenceStore::new(
            temp_dir.path().join("preferences.json"),
        )),
        menu_repo: Arc::new(DieselMenuRepository::new(pool)),
        remote_menu: remote,
    })
}

#[tokio::test]
async fn cold_start_fetches_once_then_serves_from_cache() {
    let temp_dir = TempDir::new().unwrap();
    let remote = Arc::new(FixedRemoteMenu::returning(capstone_menu()));
    let app = wire_app(&temp_dir, remote.clone());

    let first = app.bootstrap_menu().execute().await;
    assert_eq!(first.len(), 5);
    assert_eq!(remote.calls(), 1);

    let second = app.bootstrap_menu().execute().await;
    assert_eq!(second, first);
    assert_eq!(remote.calls(), 1, "cache hit must not refetch");
}

#[tokio::test]
async fn fetch_failure_leaves_an_empty_menu_without_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let remote = Arc::new(FixedRemoteMenu::failing());
    let app = wire_app(&temp_dir, remote.clone());

    let items = app.bootstrap_menu().execute().await;

    assert!(items.is_empty());
    assert!(app.browse_menu().execute(&MenuFilter::new()).await.is_empty());
}

#[tokio::test]
async fn browse_applies_category_toggle_and_search_over_the_cache() {
    let temp_dir = TempDir::new().unwrap();
    let remote = Arc::new(FixedRemoteMenu::returning(capstone_menu()));
    let app = wire_app(&temp_dir, remote);

    app.bootstrap_menu().execute().await;

    let filter = MenuFilter::new().toggle_category("Starters").with_query("greek");
    let items = app.browse_menu().execute(&filter).await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Greek Salad");
    assert_eq!(items[0].category, "starters");

    let items = app.browse_menu().execute(&filter.clone().with_query("pizza")).await;
    assert!(items.is_empty());

    // Toggling the selected category off restores the full list.
    let filter = filter.with_query("").toggle_category("Starters");
    let items = app.browse_menu().execute(&filter).await;
    assert_eq!(items.len(), 5);
}

#[tokio::test]
async fn onboarding_profile_and_logout_cycle() {
    let temp_dir = TempDir::new().unwrap();
    let remote = Arc::new(FixedRemoteMenu::returning(capstone_menu()));
    let app = wire_app(&temp_dir, remote);

    // Fresh install: no flag, gate resolves to onboarding.
    let gate = app.resolve_session().execute().await;
    assert_eq!(gate.screen(), Screen::Onboarding);

    app.complete_onboarding()
        .execute("Tilly", "tilly@example.com")
        .await
        .unwrap();

    let gate = app.resolve_session().execute().await;
    assert_eq!(gate.screen(), Screen::Home);

    // Onboarding already seeded the first name and email.
    let profile = app.get_profile().execute().await;
    assert_eq!(profile.first_name, "Tilly");
    assert_eq!(profile.email, "tilly@example.com");

    let edited = UserProfile {
        last_name: "Jones".into(),
        phone: "5551234567".into(),
        ..profile
    };
    app.save_profile().execute(&edited).await.unwrap();

    let reloaded = app.get_profile().execute().await;
    assert_eq!(reloaded.last_name, "Jones");
    assert_eq!(reloaded.initials(), "TJ");

    // Logout wipes everything; the gate falls back to onboarding and the
    // profile reads as defaults again.
    app.logout().execute().await.unwrap();

    let gate = app.resolve_session().execute().await;
    assert_eq!(gate.screen(), Screen::Onboarding);
    assert_eq!(app.get_profile().execute().await, UserProfile::default());
}
