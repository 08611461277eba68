//! Menu cache port
//!
//! The durable on-device copy of the menu list. Populated at most once per
//! install (until the store is cleared externally); there is no refresh,
//! invalidation, or TTL.

use async_trait::async_trait;

use crate::menu::MenuItem;
use crate::ports::errors::MenuRepositoryError;

#[async_trait]
pub trait MenuRepositoryPort: Send + Sync {
    /// All cached items in insertion order. Callers must not rely on any
    /// category or price ordering.
    async fn load(&self) -> Result<Vec<MenuItem>, MenuRepositoryError>;

    async fn is_empty(&self) -> Result<bool, MenuRepositoryError>;

    /// Insert the fetched items into an empty cache.
    ///
    /// Populating a non-empty cache fails with
    /// [`MenuRepositoryError::AlreadyPopulated`] and leaves the existing rows
    /// untouched; it never appends or duplicates.
    async fn populate(&self, items: &[MenuItem]) -> Result<(), MenuRepositoryError>;
}
