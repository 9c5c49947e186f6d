// src/infrastructure/flash_store.rs
use crate::application::ApplicationResult;
use crate::application::error::ApplicationError;
use crate::application::ports::{flash::FlashStore, time::Clock};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

struct FlashEntry {
    message: String,
    expires_at: DateTime<Utc>,
}

/// Process-local flash messages keyed by random tokens.
///
/// Entries nobody collects are dropped once `ttl` has passed.
pub struct InMemoryFlashStore {
    entries: Mutex<HashMap<String, FlashEntry>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl InMemoryFlashStore {
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
            clock,
        }
    }

    fn lock(&self) -> ApplicationResult<MutexGuard<'_, HashMap<String, FlashEntry>>> {
        self.entries
            .lock()
            .map_err(|_| ApplicationError::infrastructure("flash store lock poisoned"))
    }

    pub fn pending(&self) -> usize {
        self.entries.lock().map(|guard| guard.len()).unwrap_or(0)
    }
}

#[async_trait]
impl FlashStore for InMemoryFlashStore {
    async fn put(&self, message: String) -> ApplicationResult<String> {
        let now = self.clock.now();
        let token = Uuid::new_v4().simple().to_string();

        let mut guard = self.lock()?;
        guard.retain(|_, entry| entry.expires_at > now);
        guard.insert(
            token.clone(),
            FlashEntry {
                message,
                expires_at: now + self.ttl,
            },
        );
        Ok(token)
    }

    async fn take(&self, token: &str) -> ApplicationResult<Option<String>> {
        let now = self.clock.now();
        let entry = self.lock()?.remove(token);
        Ok(entry
            .filter(|entry| entry.expires_at > now)
            .map(|entry| entry.message))
    }
}
