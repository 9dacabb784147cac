use serde_json::Value;
use std::collections::BTreeMap;

/// Reusable schemas emitted under `components.schemas`.
#[derive(Debug, Clone, Default)]
pub struct ComponentStore {
    schemas: BTreeMap<String, Value>,
}

impl ComponentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the schema called `name`.
    pub fn set(&mut self, name: impl Into<String>, schema: Value) {
        self.schemas.insert(name.into(), schema);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schemas.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    #[must_use]
    pub fn schemas(&self) -> &BTreeMap<String, Value> {
        &self.schemas
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
