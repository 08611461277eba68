//! HTTP client for the remote menu source
//!
//! One GET against the fixed document URL, no auth, no retry. The document
//! shape is `{ "menu": [ {name, price, description, image, category}, ... ] }`.

use async_trait::async_trait;
use log::info;
use serde::Deserialize;

use ll_core::menu::MenuItem;
use ll_core::ports::{RemoteMenuError, RemoteMenuPort};

#[derive(Debug, Deserialize)]
struct MenuDocument {
    menu: Vec<MenuItem>,
}

pub struct HttpMenuClient {
    url: String,
    client: reqwest::Client,
}

impl HttpMenuClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl RemoteMenuPort for HttpMenuClient {
    async fn fetch_menu(&self) -> Result<Vec<MenuItem>, RemoteMenuError> {
        info!("Fetching menu from: {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| RemoteMenuError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(RemoteMenuError::Status(response.status().as_u16()));
        }

        let document: MenuDocument = response
            .json()
            .await
            .map_err(|e| RemoteMenuError::Malformed(e.to_string()))?;

        info!("Fetched menu with {} items", document.menu.len());
        Ok(document.menu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MENU_BODY: &str = r#"{
        "menu": [
            {
                "name": "Greek Salad",
                "price": 12.5,
                "description": "Crispy lettuce, peppers, olives and feta.",
                "image": "greekSalad.jpg",
                "category": "starters"
            },
            {
                "name": "Grilled Fish",
                "price": 20.0,
                "description": "Fresh catch.",
                "image": "grilledFish.jpg",
                "category": "mains"
            }
        ]
    }"#;

    #[tokio::test]
    async fn fetches_and_decodes_the_menu_array() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/capstone.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(MENU_BODY)
            .create_async()
            .await;

        let client = HttpMenuClient::new(format!("{}/capstone.json", server.url()));
        let items = client.fetch_menu().await.unwrap();

        mock.assert_async().await;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Greek Salad");
        assert_eq!(items[0].category, "starters");
        assert_eq!(items[1].price, 20.0);
    }

    #[tokio::test]
    async fn non_success_status_is_reported_as_status_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/capstone.json")
            .with_status(503)
            .create_async()
            .await;

        let client = HttpMenuClient::new(format!("{}/capstone.json", server.url()));
        let result = client.fetch_menu().await;

        assert!(matches!(result, Err(RemoteMenuError::Status(503))));
    }

    #[tokio::test]
    async fn malformed_body_is_reported_as_malformed() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/capstone.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("{\"menu\": \"not an array\"}")
            .create_async()
            .await;

        let client = HttpMenuClient::new(format!("{}/capstone.json", server.url()));
        let result = client.fetch_menu().await;

        assert!(matches!(result, Err(RemoteMenuError::Malformed(_))));
    }

    #[tokio::test]
    async fn unreachable_host_is_reported_as_network_error() {
        let client = HttpMenuClient::new("http://127.0.0.1:1/capstone.json");
        let result = client.fetch_menu().await;

        assert!(matches!(result, Err(RemoteMenuError::Network(_))));
    }
}
