//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and infrastructure
//! implementations, keeping the core business logic independent of storage
//! and network details.

pub mod errors;
pub mod menu_repository;
pub mod preferences;
pub mod remote_menu;

pub use errors::{MenuRepositoryError, RemoteMenuError};
pub use menu_repository::MenuRepositoryPort;
pub use preferences::PreferenceStorePort;
pub use remote_menu::RemoteMenuPort;
