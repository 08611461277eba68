//! Shared mock ports for use case unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use ll_core::menu::MenuItem;
use ll_core::ports::{
    MenuRepositoryError, MenuRepositoryPort, PreferenceStorePort, RemoteMenuError, RemoteMenuPort,
};

pub(crate) struct MemoryPreferenceStore {
    map: Mutex<HashMap<String, String>>,
    fail_reads: bool,
    fail_set_on: Option<String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self {
            map: Mutex::new(HashMap::new()),
            fail_reads: false,
            fail_set_on: None,
        }
    }

    /// A store whose reads always fail.
    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::new()
        }
    }

    /// A store that rejects writes to one specific key.
    pub fn failing_set_on(key: &str) -> Self {
        Self {
            fail_set_on: Some(key.to_string()),
            ..Self::new()
        }
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.map
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    pub fn snapshot(&self) -> HashMap<String, String> {
        self.map.lock().unwrap().clone()
    }
}

#[async_trait]
impl PreferenceStorePort for MemoryPreferenceStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        if self.fail_reads {
            return Err(anyhow::anyhow!("preference store unavailable"));
        }
        Ok(self.map.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        if self.fail_set_on.as_deref() == Some(key) {
            return Err(anyhow::anyhow!("write rejected for key {key}"));
        }
        self.insert(key, value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> anyhow::Result<()> {
        self.map.lock().unwrap().remove(key);
        Ok(())
    }

    async fn clear(&self) -> anyhow::Result<()> {
        self.map.lock().unwrap().clear();
        Ok(())
    }
}

pub(crate) struct InMemoryMenuRepository {
    items: Mutex<Vec<MenuItem>>,
    fail_loads: bool,
    populate_calls: AtomicUsize,
}

impl InMemoryMenuRepository {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
            fail_loads: false,
            populate_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_items(items: Vec<MenuItem>) -> Self {
        let repo = Self::new();
        *repo.items.lock().unwrap() = items;
        repo
    }

    pub fn failing_loads() -> Self {
        Self {
            fail_loads: true,
            ..Self::new()
        }
    }

    pub fn populate_calls(&self) -> usize {
        self.populate_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MenuRepositoryPort for InMemoryMenuRepository {
    async fn load(&self) -> Result<Vec<MenuItem>, MenuRepositoryError> {
        if self.fail_loads {
            return Err(MenuRepositoryError::Storage("cache offline".to_string()));
        }
        Ok(self.items.lock().unwrap().clone())
    }

    async fn is_empty(&self) -> Result<bool, MenuRepositoryError> {
        Ok(self.items.lock().unwrap().is_empty())
    }

    async fn populate(&self, items: &[MenuItem]) -> Result<(), MenuRepositoryError> {
        self.populate_calls.fetch_add(1, Ordering::SeqCst);
        let mut cached = self.items.lock().unwrap();
        if !cached.is_empty() {
            return Err(MenuRepositoryError::AlreadyPopulated);
        }
        cached.extend_from_slice(items);
        Ok(())
    }
}

pub(crate) enum RemoteResponse {
    Items(Vec<MenuItem>),
    NetworkError,
}

pub(crate) struct StubRemoteMenu {
    response: RemoteResponse,
    calls: AtomicUsize,
}

impl StubRemoteMenu {
    pub fn returning(items: Vec<MenuItem>) -> Self {
        Self {
            response: RemoteResponse::Items(items),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            response: RemoteResponse::NetworkError,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteMenuPort for StubRemoteMenu {
    async fn fetch_menu(&self) -> Result<Vec<MenuItem>, RemoteMenuError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            RemoteResponse::Items(items) => Ok(items.clone()),
            RemoteResponse::NetworkError => {
                Err(RemoteMenuError::Network("connection refused".to_string()))
            }
        }
    }
}

pub(crate) fn greek_salad() -> MenuItem {
    MenuItem::new(
        "Greek Salad",
        12.5,
        "Crispy lettuce, peppers, olives and feta.",
        "greekSalad.jpg",
        "starters",
    )
}

pub(crate) fn sample_menu() -> Vec<MenuItem> {
    vec![
        greek_salad(),
        MenuItem::new("Bruschetta", 7.99, "Grilled bread.", "bruschetta.jpg", "starters"),
        MenuItem::new("Grilled Fish", 20.0, "Fresh catch.", "grilledFish.jpg", "mains"),
        MenuItem::new("Lemon Dessert", 6.3, "Family recipe.", "lemonDessert.jpg", "desserts"),
    ]
}
