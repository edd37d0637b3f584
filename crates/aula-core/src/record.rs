//! Document record type.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One retrieved record from a named collection.
///
/// The provider-assigned primary key is merged with the stored field
/// set: `id` plus a flat map of the document's own fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Provider-assigned primary key.
    pub id: String,

    /// The stored fields of the document.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl DocumentRecord {
    /// Create a record from an id and a field map.
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Returns the value of a field, if present.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Returns a field as a string slice, if present and textual.
    pub fn text_field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }
}
