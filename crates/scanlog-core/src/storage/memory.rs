//! In-memory storage backend for tests and hosts without a filesystem.

use std::collections::HashMap;

use serde_json::Value;

use super::traits::KeyValueStore;
use crate::error::Result;

#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: HashMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<Value> {
        self.documents.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &Value) -> Result<()> {
        self.documents.insert(key.to_string(), value.clone());
        Ok(())
    }
}
