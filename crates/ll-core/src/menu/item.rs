use serde::{Deserialize, Serialize};

/// A single dish on the menu.
///
/// Items are created only when the remote menu document is fetched and cached;
/// the app itself never edits or deletes them. `name` doubles as the display
/// list key and is assumed unique within a category (not enforced).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    /// Non-negative by data contract.
    pub price: f64,
    /// May be empty.
    pub description: String,
    /// Filename fragment; joined with the configured image base URL for display.
    pub image: String,
    /// Lower-case category token, e.g. "starters".
    pub category: String,
}

impl MenuItem {
    pub fn new(
        name: impl Into<String>,
        price: f64,
        description: impl Into<String>,
        image: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            description: description.into(),
            image: image.into(),
            category: category.into(),
        }
    }
}
