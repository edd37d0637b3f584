//! Document store trait.

use async_trait::async_trait;

use crate::record::DocumentRecord;
use crate::types::{CollectionId, FieldFilter, SortKey};
use crate::Result;

/// The hosted document backend.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Query a collection.
    ///
    /// Returns the matching records in the order requested by `order`;
    /// the provider performs both filtering and sorting.
    async fn query(
        &self,
        collection: &CollectionId,
        filter: Option<&FieldFilter>,
        order: &SortKey,
    ) -> Result<Vec<DocumentRecord>>;
}
