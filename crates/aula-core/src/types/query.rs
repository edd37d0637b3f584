//! Query parameter types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An equality filter on a single document field.
///
/// The only filter kind this backend slice uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldFilter {
    /// Field name to match on.
    pub field: String,
    /// Value the field must equal.
    pub equals: Value,
}

impl FieldFilter {
    /// Create an equality filter.
    pub fn equals(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            equals: value.into(),
        }
    }
}

/// Sort direction for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// The sort key a query requests.
///
/// The returned sequence follows this key; the provider performs the
/// ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortKey {
    /// Field name to order by.
    pub field: String,
    /// Direction of the ordering.
    pub direction: SortDirection,
}

impl SortKey {
    /// Ascending sort on the given field.
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Descending sort on the given field.
    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn filter_serializes_value() {
        let filter = FieldFilter::equals("category", "Math");
        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(json, json!({ "field": "category", "equals": "Math" }));
    }

    #[test]
    fn sort_key_shorthand() {
        let key = SortKey::ascending("title");
        assert_eq!(key.field, "title");
        assert_eq!(key.direction, SortDirection::Ascending);
    }
}
