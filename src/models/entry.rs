use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FetchError;

/// One record of a feed. The shape is not enforced: whatever the remote
/// source returned is kept and fields are looked up by name at render time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entry(Value);

impl Entry {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Display text of `name`. Absent, null and structured values render empty.
    pub fn field(&self, name: &str) -> String {
        match self.0.get(name) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => String::new(),
        }
    }

    pub fn raw(&self) -> &Value {
        &self.0
    }
}

/// Ordered entries exactly as the source returned them
pub type Collection = Vec<Entry>;

/// Turns a raw JSON document into a collection. Only arrays are feeds.
pub fn collection_from_value(value: Value) -> Result<Collection, FetchError> {
    match value {
        Value::Array(items) => Ok(items.into_iter().map(Entry::new).collect()),
        other => Err(FetchError::Shape(format!(
            "expected a JSON array, got {}",
            kind_of(&other)
        ))),
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
