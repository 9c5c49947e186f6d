// src/application/ports/view.rs
use crate::application::ApplicationResult;
use serde::Serialize;
use serde_json::{Map, Value};

/// A named view plus the values bound into it.
///
/// A missing key is how a view learns that a value is absent.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub name: &'static str,
    pub model: Map<String, Value>,
}

impl View {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            model: Map::new(),
        }
    }

    /// Bind `value` under `key`. Values that fail to serialize are skipped.
    pub fn with(mut self, key: &str, value: impl Serialize) -> Self {
        match serde_json::to_value(value) {
            Ok(value) => {
                self.model.insert(key.to_string(), value);
            }
            Err(err) => tracing::warn!(key, error = %err, "dropping unserializable view value"),
        }
        self
    }

    /// Bind `value` under `key` only when it is present.
    pub fn with_optional<T: Serialize>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.model.get(key)
    }
}

pub trait ViewRenderer: Send + Sync {
    fn render(&self, view: &View) -> ApplicationResult<String>;
}
