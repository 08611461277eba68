pub mod db;
pub mod fs;
pub mod http;
pub mod preferences;

pub use http::HttpMenuClient;
pub use preferences::FilePreferenceStore;
