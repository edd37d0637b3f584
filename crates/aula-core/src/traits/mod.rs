//! Core traits for the external backend.

mod documents;
mod identity;

pub use documents::DocumentStore;
pub use identity::IdentityProvider;
