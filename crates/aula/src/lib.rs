//! aula - Session tracking and backend gateway.
//!
//! Two cooperating pieces over one injected provider handle:
//!
//! - [`SessionTracker`] subscribes to the provider's auth-state stream
//!   and republishes it as locally observable [`SessionState`].
//! - [`Gateway`] wraps the backend calls (sign-in, sign-out, password
//!   reset, two collection fetches) and normalizes every outcome into
//!   a result UI code can inspect without fault-handling branches.

pub mod gateway;
pub mod session;

pub use gateway::{Fault, Gateway, GatewayResult};
pub use session::{SessionState, SessionTracker};

pub use aula_core::{
    ApiError, AuthEvent, AuthSubscription, AuthUser, CollectionId, DocumentRecord, DocumentStore,
    Error, FieldFilter, IdentityProvider, SortDirection, SortKey,
};
