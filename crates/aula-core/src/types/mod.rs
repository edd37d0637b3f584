//! Core value types for backend queries.
//!
//! These types enforce invariants at construction time, ensuring
//! invalid states are unrepresentable.

mod collection_id;
mod query;

pub use collection_id::CollectionId;
pub use query::{FieldFilter, SortDirection, SortKey};
