use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Node;

/// A domain object submitted for representation.
///
/// The core is agnostic to what the payload contains — representation
/// handlers decide which parts of `data` appear on the wire and in what
/// shape. The `entity_type` string is the registry lookup key; it is stated
/// explicitly rather than derived from any language-level type name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub entity_type: String,
    pub data: Value,
}

impl Instance {
    /// Creates an instance from an entity type and a JSON payload.
    pub fn new(entity_type: impl Into<String>, data: Value) -> Self {
        Self {
            entity_type: entity_type.into(),
            data,
        }
    }

    /// Creates an instance by serializing any `Serialize` value into the
    /// payload. This is the usual path for callers with concrete domain
    /// structs.
    pub fn from_serialize<T: Serialize>(
        entity_type: impl Into<String>,
        value: &T,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            entity_type: entity_type.into(),
            data: serde_json::to_value(value)?,
        })
    }

    /// Extract a string value from `data` using a JSON pointer (e.g., "/title").
    pub fn get_str(&self, pointer: &str) -> Option<&str> {
        self.data.pointer(pointer).and_then(|v| v.as_str())
    }

    /// Extract a boolean value from `data` using a JSON pointer.
    pub fn get_bool(&self, pointer: &str) -> Option<bool> {
        self.data.pointer(pointer).and_then(|v| v.as_bool())
    }

    /// Extract a numeric value from `data` using a JSON pointer.
    pub fn get_number(&self, pointer: &str) -> Option<f64> {
        self.data.pointer(pointer).and_then(|v| v.as_f64())
    }

    /// Lifts a payload field into a tree node, ready to embed in a
    /// representation. A missing pointer yields an explicit JSON null.
    pub fn field(&self, pointer: &str) -> Node {
        Node::Value(self.data.pointer(pointer).cloned().unwrap_or(Value::Null))
    }
}
