//! Remote menu source port
//!
//! External HTTP collaborator serving the menu document. One fixed URL, no
//! auth, no pagination; implementations do not retry.

use async_trait::async_trait;

use crate::menu::MenuItem;
use crate::ports::errors::RemoteMenuError;

#[async_trait]
pub trait RemoteMenuPort: Send + Sync {
    /// Fetch and decode the `menu` array of the remote document.
    async fn fetch_menu(&self) -> Result<Vec<MenuItem>, RemoteMenuError>;
}
