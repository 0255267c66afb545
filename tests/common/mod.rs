#![allow(dead_code)]

use finboard::adapters::{MemoryStore, RecordingNavigator};
use finboard::domain::ports::KeyValueStore;
use finboard::{ApiClient, Session, TokenStorage};
use httpmock::MockServer;
use std::sync::Arc;

pub struct TestContext {
    pub client: ApiClient,
    pub store: Arc<MemoryStore>,
    pub navigator: Arc<RecordingNavigator>,
}

impl TestContext {
    pub fn new(server: &MockServer) -> Self {
        let store = Arc::new(MemoryStore::new());
        let navigator = Arc::new(RecordingNavigator::new());
        let client = ApiClient::new(
            server.url("/api"),
            TokenStorage::new(store.clone()),
            navigator.clone(),
        )
        .expect("client");
        Self {
            client,
            store,
            navigator,
        }
    }

    pub fn with_tokens(server: &MockServer, access: Option<&str>, refresh: Option<&str>) -> Self {
        let ctx = Self::new(server);
        if let Some(access) = access {
            ctx.store.set("access_token", access).unwrap();
        }
        if let Some(refresh) = refresh {
            ctx.store.set("refresh_token", refresh).unwrap();
        }
        ctx
    }

    pub fn session(&self) -> Session {
        Session::new(self.client.clone())
    }

    pub fn access_token(&self) -> Option<String> {
        self.store.get("access_token").unwrap()
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.store.get("refresh_token").unwrap()
    }
}

pub fn user_json() -> serde_json::Value {
    serde_json::json!({
        "id": "7b1c2f2e-0000-4000-8000-000000000001",
        "username": "maria",
        "email": "maria@example.com",
        "first_name": "Maria",
        "last_name": "Silva"
    })
}

pub fn account_json(id: &str, name: &str, balance: f64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "type": "CHECKING",
        "type_display": "Conta Corrente",
        "initial_balance": "0.00",
        "current_balance": balance,
        "created_at": "2024-05-01T10:00:00Z"
    })
}

pub fn category_json(id: &str, name: &str, entry_type: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "type": entry_type,
        "type_display": entry_type,
        "icon": "🏷",
        "is_system": false,
        "transactions_count": 0
    })
}
