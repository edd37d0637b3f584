//! aula-core - Core types and traits for the aula backend client.

pub mod auth;
pub mod error;
pub mod record;
pub mod traits;
pub mod types;

pub use auth::{AuthEvent, AuthSubscription, AuthUser};
pub use error::{ApiError, Error, InvalidInputError, TransportError};
pub use record::DocumentRecord;
pub use traits::{DocumentStore, IdentityProvider};
pub use types::{CollectionId, FieldFilter, SortDirection, SortKey};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
