//! Hand-written fakes for the network and store ports.
//!
//! Available to this crate's tests and, through the `test-utils` feature,
//! to downstream crates.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::endpoints::EndpointDescriptor;
use crate::ports::{
    LocalDataSource, NetworkEngine, NetworkError, NetworkResult, StoreError, StoreResult,
};

/// Canned outcome for a path served by [`FakeEngine`].
#[derive(Debug, Clone)]
pub enum CannedResponse {
    /// 2xx with this JSON body.
    Json(serde_json::Value),
    /// Non-success status.
    Status(u16),
    /// Transport failure with this message.
    Fault(String),
}

/// A fake network engine that serves canned responses by exact path.
#[derive(Debug, Default)]
pub struct FakeEngine {
    responses: Mutex<HashMap<String, CannedResponse>>,
    calls: AtomicUsize,
}

impl FakeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `response` for requests to `path`.
    #[must_use]
    pub fn with_response(self, path: &str, response: CannedResponse) -> Self {
        self.set_response(path, response);
        self
    }

    pub fn set_response(&self, path: &str, response: CannedResponse) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.to_string(), response);
    }

    /// Number of `execute` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NetworkEngine for FakeEngine {
    async fn execute<T: DeserializeOwned + Send>(
        &self,
        endpoint: &EndpointDescriptor,
    ) -> NetworkResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let canned = self
            .responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&endpoint.path)
            .cloned()
            .unwrap_or(CannedResponse::Status(404));

        match canned {
            CannedResponse::Json(json) => serde_json::from_value(json)
                .map_err(|e| NetworkError::DecodingFailed(e.to_string())),
            CannedResponse::Status(status) => Err(NetworkError::HttpError {
                status,
                message: format!("status {status}"),
            }),
            CannedResponse::Fault(message) => Err(NetworkError::NetworkFault(message.into())),
        }
    }
}

/// An in-memory store holding JSON values by key.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, serde_json::Value>>,
    fail_saves: AtomicBool,
    saves: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `key` with a raw JSON document.
    #[must_use]
    pub fn with_entry(self, key: &str, value: serde_json::Value) -> Self {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value);
        self
    }

    /// Make every subsequent `save` fail with `WriteFailed`.
    #[must_use]
    pub fn failing_saves(self) -> Self {
        self.fail_saves.store(true, Ordering::SeqCst);
        self
    }

    pub fn get(&self, key: &str) -> Option<serde_json::Value> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Number of successful saves so far.
    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LocalDataSource for MemoryStore {
    async fn load<T: DeserializeOwned + Send>(&self, key: &str) -> StoreResult<T> {
        let value = self.get(key).ok_or_else(|| StoreError::NotFound {
            key: key.to_string(),
        })?;
        serde_json::from_value(value).map_err(|e| StoreError::DecodingFailed {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }

    async fn save<T: Serialize + Sync>(&self, key: &str, value: &T) -> StoreResult<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StoreError::WriteFailed {
                path: format!("memory://{key}").into(),
                reason: "saves disabled".to_string(),
            });
        }
        let json = serde_json::to_value(value).map_err(|e| StoreError::EncodingFailed {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), json);
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// JSON for a complete wire-shape user.
pub fn user_json(id: u64, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "username": format!("user{id}"),
        "email": format!("user{id}@example.org"),
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": "Gwenborough",
            "zipcode": "92998-3874",
            "geo": { "lat": "-37.3159", "lng": "81.1496" }
        },
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org",
        "company": {
            "name": "Romaguera-Crona",
            "catchPhrase": "Multi-layered client-server neural-net",
            "bs": "harness real-time e-markets"
        }
    })
}
