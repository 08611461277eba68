mod menu_client;

pub use menu_client::HttpMenuClient;
