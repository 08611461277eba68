mod app_config;

pub use app_config::{AppConfig, ImageConfig, RemoteConfig, StorageConfig};
