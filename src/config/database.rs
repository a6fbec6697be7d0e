//! Database connection settings.
//!
//! The storage layer owns the real shape of this file, so the loader keeps
//! the JSON object as-is and lets the database code pull a typed view out of
//! it with [`DatabaseConfig::extract`].

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct DatabaseConfig(Map<String, Value>);

impl DatabaseConfig {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decode the stored object into a type owned by the database layer.
    pub fn extract<T: DeserializeOwned>(&self) -> Result<T> {
        let value = serde_json::from_value(Value::Object(self.0.clone()))?;
        Ok(value)
    }
}

impl From<Map<String, Value>> for DatabaseConfig {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
