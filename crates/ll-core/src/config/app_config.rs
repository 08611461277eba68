//! Application configuration domain model

use serde::{Deserialize, Serialize};

/// Application configuration
///
/// Defaults point at the fixed production endpoints; tests and the
/// composition root may override individual sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Remote menu source settings
    pub remote: RemoteConfig,

    /// Menu image settings
    pub images: ImageConfig,

    /// Local storage settings
    pub storage: StorageConfig,
}

/// Remote menu source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// URL of the JSON menu document
    pub menu_url: String,
}

/// Menu image configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageConfig {
    /// Base URL that item image filenames are resolved against
    pub base_url: String,
}

/// Local storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// SQLite database filename inside the app data directory
    pub database_file: String,

    /// Preference store filename inside the app data directory
    pub preferences_file: String,
}

impl ImageConfig {
    /// Display URL for a menu item's `image` filename fragment.
    pub fn item_url(&self, filename: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), filename)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            remote: RemoteConfig {
                menu_url:
                    "https://raw.githubusercontent.com/Meta-Mobile-Developer-PC/Working-With-Data-API/main/capstone.json"
                        .to_string(),
            },
            images: ImageConfig {
                base_url:
                    "https://raw.githubusercontent.com/Meta-Mobile-Developer-PC/Working-With-Data-API/main/images"
                        .to_string(),
            },
            storage: StorageConfig {
                database_file: "little_lemon.db".to_string(),
                preferences_file: "preferences.json".to_string(),
            },
        }
    }
}
