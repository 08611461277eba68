use std::sync::Arc;

use ll_core::menu::{MenuFilter, MenuItem};
use ll_core::ports::MenuRepositoryPort;
use tracing::warn;

/// Use case for listing the menu under the current category/search filter.
///
/// Loads the cached items and applies the filter; a cache read failure
/// degrades to an empty list. Recomputed on every category or keystroke
/// change, as a fresh O(n) scan over tens of items.
pub struct BrowseMenu {
    menu_repo: Arc<dyn MenuRepositoryPort>,
}

impl BrowseMenu {
    pub fn new(menu_repo: Arc<dyn MenuRepositoryPort>) -> Self {
        Self { menu_repo }
    }

    pub async fn execute(&self, filter: &MenuFilter) -> Vec<MenuItem> {
        let items = match self.menu_repo.load().await {
            Ok(items) => items,
            Err(e) => {
                warn!("menu cache read failed: {e}");
                return Vec::new();
            }
        };

        filter.apply(&items)
    }
}
