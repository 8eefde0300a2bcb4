#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use vtrade_auth::auth::{AuthError, IdentityProvider, KeyValueStore, OAuthAccessToken};

/// One storage call, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOp {
    Get(String),
    Set(String, String),
    Delete(String),
}

/// In-memory store that records every call.
#[derive(Default)]
pub struct RecordingStore {
    values: Mutex<HashMap<String, String>>,
    ops: Mutex<Vec<StoreOp>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .lock()
            .expect("store lock poisoned")
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .expect("store lock poisoned")
            .get(key)
            .cloned()
    }

    pub fn ops(&self) -> Vec<StoreOp> {
        self.ops.lock().expect("store lock poisoned").clone()
    }

    pub fn writes(&self) -> Vec<StoreOp> {
        self.ops()
            .into_iter()
            .filter(|op| !matches!(op, StoreOp::Get(_)))
            .collect()
    }

    fn record(&self, op: StoreOp) {
        self.ops.lock().expect("store lock poisoned").push(op);
    }
}

impl KeyValueStore for RecordingStore {
    fn get(&self, key: &str) -> Result<Option<String>, AuthError> {
        self.record(StoreOp::Get(key.to_string()));
        Ok(self.value(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
        self.record(StoreOp::Set(key.to_string(), value.to_string()));
        self.values
            .lock()
            .expect("store lock poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), AuthError> {
        self.record(StoreOp::Delete(key.to_string()));
        self.values.lock().expect("store lock poisoned").remove(key);
        Ok(())
    }
}

/// Store whose every call fails.
pub struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, AuthError> {
        Err(AuthError::Io("disk unavailable".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), AuthError> {
        Err(AuthError::Io("disk unavailable".to_string()))
    }

    fn delete(&self, _key: &str) -> Result<(), AuthError> {
        Err(AuthError::Io("disk unavailable".to_string()))
    }
}

/// Identity provider that replays a fixed outcome and records requested scopes.
pub struct ScriptedProvider {
    outcome: Result<String, ()>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl ScriptedProvider {
    pub fn granting(access_token: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(access_token.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn denying() -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().expect("provider lock poisoned").clone()
    }
}

#[async_trait]
impl IdentityProvider for ScriptedProvider {
    async fn authorize(&self, scopes: &[&str]) -> Result<OAuthAccessToken, AuthError> {
        self.calls
            .lock()
            .expect("provider lock poisoned")
            .push(scopes.iter().map(|s| (*s).to_string()).collect());
        match &self.outcome {
            Ok(token) => Ok(OAuthAccessToken::new(token.clone())),
            Err(()) => Err(AuthError::AccessDenied),
        }
    }
}

pub fn user_json() -> serde_json::Value {
    serde_json::json!({
        "pk": 1,
        "username": "ada",
        "email": "ada@example.com",
        "first_name": "Ada",
        "last_name": "Lovelace"
    })
}
