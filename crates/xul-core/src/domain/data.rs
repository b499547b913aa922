//! Runtime data context for attribute bindings.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::{attributes, error::DomainError};

/// Key → value mapping that dotted-path bindings are resolved against.
///
/// One context is built per render pass and shared by reference through the
/// whole call tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DataContext {
    values: Map<String, Value>,
}

impl DataContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a context from a JSON value; the root must be an object.
    pub fn from_value(value: Value) -> Result<Self, DomainError> {
        match value {
            Value::Object(values) => Ok(Self { values }),
            other => Err(DomainError::InvalidDataContext(format!(
                "expected an object at the root, found {}",
                kind_of(&other)
            ))),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Resolve a dotted path such as `user.address.city`.
    pub fn resolve(&self, path: &str) -> Option<&Value> {
        attributes::resolve_binding(self, path)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
