use super::MenuItem;

/// Immutable view state for the home screen's menu list.
///
/// Holds at most one selected category and a free-text query. The displayed
/// list is always recomputed from the cached items and this value; nothing is
/// mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuFilter {
    category: Option<String>,
    query: String,
}

impl MenuFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Select a category, or clear the selection when `label` is already
    /// the selected one. Zero or one category is active at a time.
    pub fn toggle_category(self, label: &str) -> Self {
        let category = if self.category.as_deref() == Some(label) {
            None
        } else {
            Some(label.to_string())
        };
        Self { category, ..self }
    }

    /// Replace the search query.
    pub fn with_query(self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..self
        }
    }

    /// Derive the displayed list from `items`.
    ///
    /// An item is included iff no category is selected or its token equals the
    /// lower-cased selection, and its name contains the query as a
    /// case-insensitive substring. The relative order of `items` is preserved.
    ///
    /// Every call is a fresh O(n) scan over the cached set; n is tens of
    /// items, so there is no pagination or debouncing here.
    pub fn apply(&self, items: &[MenuItem]) -> Vec<MenuItem> {
        let query = self.query.to_lowercase();
        let category = self.category.as_ref().map(|c| c.to_lowercase());

        items
            .iter()
            .filter(|item| match &category {
                Some(token) => item.category == *token,
                None => true,
            })
            .filter(|item| item.name.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }
}
