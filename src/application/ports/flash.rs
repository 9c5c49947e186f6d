// src/application/ports/flash.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

/// Single-consumption storage for status messages shown after a redirect.
#[async_trait]
pub trait FlashStore: Send + Sync {
    /// Store `message` and return the token the next request must present.
    async fn put(&self, message: String) -> ApplicationResult<String>;
    /// Remove and return the message for `token`, if it is still there.
    async fn take(&self, token: &str) -> ApplicationResult<Option<String>>;
}
