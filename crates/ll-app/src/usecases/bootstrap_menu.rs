use std::sync::Arc;

use ll_core::menu::MenuItem;
use ll_core::ports::{MenuRepositoryPort, RemoteMenuPort};
use tracing::{info, info_span, warn, Instrument};

/// Use case for the cold-start menu synchronization policy.
///
/// ## Behavior
/// - Serve from the cache when it already has items.
/// - On an empty cache, fetch the remote document once, populate the cache,
///   and serve the freshly cached rows.
/// - Every failure (cache read, network, non-2xx status, malformed body,
///   cache write) degrades to an empty list. Nothing is surfaced as an error
///   state and nothing is retried; the loading indicator simply clears.
///
/// There is no refresh or TTL: a populated cache is served until the store
/// is cleared externally.
pub struct BootstrapMenu {
    menu_repo: Arc<dyn MenuRepositoryPort>,
    remote_menu: Arc<dyn RemoteMenuPort>,
}

impl BootstrapMenu {
    pub fn new(menu_repo: Arc<dyn MenuRepositoryPort>, remote_menu: Arc<dyn RemoteMenuPort>) -> Self {
        Self {
            menu_repo,
            remote_menu,
        }
    }

    pub async fn execute(&self) -> Vec<MenuItem> {
        let span = info_span!("usecase.bootstrap_menu.execute");

        async {
            let cached = match self.menu_repo.load().await {
                Ok(items) => items,
                Err(e) => {
                    // A broken cache is shown as "no menu", not as an error,
                    // and does not trigger a fetch.
                    warn!("menu cache read failed: {e}");
                    return Vec::new();
                }
            };

            if !cached.is_empty() {
                info!(items = cached.len(), "serving menu from cache");
                return cached;
            }

            let fetched = match self.remote_menu.fetch_menu().await {
                Ok(items) => items,
                Err(e) => {
                    warn!("menu fetch failed: {e}");
                    return Vec::new();
                }
            };

            if let Err(e) = self.menu_repo.populate(&fetched).await {
                warn!("menu cache write failed: {e}");
                return Vec::new();
            }

            match self.menu_repo.load().await {
                Ok(items) => {
                    info!(items = items.len(), "menu fetched and cached");
                    items
                }
                Err(e) => {
                    warn!("menu cache read-back failed: {e}");
                    Vec::new()
                }
            }
        }
        .instrument(span)
        .await
    }
}
