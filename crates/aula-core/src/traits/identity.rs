//! Identity provider trait.

use async_trait::async_trait;

use crate::auth::{AuthSubscription, AuthUser};
use crate::Result;

/// The hosted identity service.
///
/// Authentication faults surface as [`Error::Api`](crate::Error::Api)
/// carrying the provider's short fault code; sign-out faults are not
/// guaranteed to carry a code.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Authenticate with email and password.
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser>;

    /// End the current session.
    async fn sign_out(&self) -> Result<()>;

    /// Request a password-reset mail for the given address.
    async fn send_password_reset(&self, email: &str) -> Result<()>;

    /// Register a listener on the auth-state notification stream.
    ///
    /// Each call is an independent registration. Dropping the returned
    /// subscription deregisters it.
    fn subscribe(&self) -> AuthSubscription;
}
