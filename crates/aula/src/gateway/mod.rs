//! Backend gateway.
//!
//! Wraps the provider's calls into a uniform, never-panicking result:
//! every operation returns either its payload or a [`Fault`] carrying
//! a human-readable message, so UI code only ever inspects one field.

mod messages;

use std::fmt;

use tracing::{debug, instrument, warn};

use aula_core::auth::AuthUser;
use aula_core::record::DocumentRecord;
use aula_core::traits::{DocumentStore, IdentityProvider};
use aula_core::types::{CollectionId, FieldFilter, SortKey};
use aula_core::Error;

use messages::{auth_message, GENERIC_FAULT_MESSAGE};

/// Collection holding the class documents.
const CLASSES: &str = "classes";

/// Collection holding the seminar documents.
const SEMINARS: &str = "seminars";

const FIELD_CATEGORY: &str = "category";
const FIELD_TITLE: &str = "title";
const FIELD_DATE: &str = "date";

/// A normalized, user-facing fault message.
///
/// The only error shape gateway callers ever see; provider error types
/// never cross this boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fault(String);

impl Fault {
    fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// Returns the message text.
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for Fault {}

/// Result of one gateway call: exactly one of payload or fault.
pub type GatewayResult<T> = std::result::Result<T, Fault>;

/// Extracts the provider fault code from an error, if any.
///
/// Transport failures carry no body code; the provider's own SDKs file
/// them under `network-request-failed`, so the same mapping applies.
fn fault_code(err: &Error) -> Option<&str> {
    match err {
        Error::Api(api) => api.code.as_deref(),
        Error::Transport(_) => Some("network-request-failed"),
        Error::InvalidInput(_) => None,
    }
}

/// Maps an auth operation error through the fault-code table.
fn auth_fault(err: &Error) -> Fault {
    match fault_code(err) {
        Some(code) => Fault::new(auth_message(code)),
        None => Fault::new(GENERIC_FAULT_MESSAGE),
    }
}

/// The backend gateway over an injected provider instance.
///
/// Cheap to construct; holds the provider by value, so providers meant
/// to be shared with a [`SessionTracker`](crate::SessionTracker) should
/// be handle types (`Clone` over an internal `Arc`).
#[derive(Debug, Clone)]
pub struct Gateway<P> {
    provider: P,
    classes: CollectionId,
    seminars: CollectionId,
}

impl<P> Gateway<P> {
    /// Create a gateway over the given provider.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            classes: CollectionId::new(CLASSES).expect("static collection name"),
            seminars: CollectionId::new(SEMINARS).expect("static collection name"),
        }
    }

    /// Returns the wrapped provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }
}

impl<P: IdentityProvider> Gateway<P> {
    /// Sign in with email and password.
    ///
    /// Provider fault codes map through the fixed message table;
    /// unknown codes yield the generic message.
    #[instrument(skip(self, password))]
    pub async fn sign_in(&self, email: &str, password: &str) -> GatewayResult<AuthUser> {
        if email.trim().is_empty() {
            return Err(Fault::new(auth_message("invalid-email")));
        }
        if password.is_empty() {
            return Err(Fault::new(auth_message("invalid-credential")));
        }

        match self.provider.sign_in(email, password).await {
            Ok(user) => {
                debug!(uid = %user.uid, "Sign-in succeeded");
                Ok(user)
            }
            Err(err) => {
                warn!(error = %err, "Sign-in failed");
                Err(auth_fault(&err))
            }
        }
    }

    /// Sign out the current user.
    ///
    /// Faults surface their raw message text, without the code mapping
    /// the other auth operations use.
    #[instrument(skip(self))]
    pub async fn sign_out(&self) -> GatewayResult<()> {
        match self.provider.sign_out().await {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!(error = %err, "Sign-out failed");
                Err(Fault::new(err.to_string()))
            }
        }
    }

    /// Request a password-reset mail.
    #[instrument(skip(self))]
    pub async fn reset_password(&self, email: &str) -> GatewayResult<()> {
        if email.trim().is_empty() {
            return Err(Fault::new(auth_message("invalid-email")));
        }

        match self.provider.send_password_reset(email).await {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!(error = %err, "Password reset failed");
                Err(auth_fault(&err))
            }
        }
    }
}

impl<P: DocumentStore> Gateway<P> {
    /// Fetch the classes in a category, ordered by title ascending.
    ///
    /// On a fault the error carries the message and no records; callers
    /// wanting the empty-list shape use `unwrap_or_default()`.
    #[instrument(skip(self))]
    pub async fn classes_by_category(&self, category: &str) -> GatewayResult<Vec<DocumentRecord>> {
        let filter = FieldFilter::equals(FIELD_CATEGORY, category);
        let order = SortKey::ascending(FIELD_TITLE);

        self.provider
            .query(&self.classes, Some(&filter), &order)
            .await
            .map_err(|err| {
                warn!(error = %err, "Fetching classes failed");
                Fault::new(err.to_string())
            })
    }

    /// Fetch all seminars, ordered by date ascending.
    #[instrument(skip(self))]
    pub async fn seminars(&self) -> GatewayResult<Vec<DocumentRecord>> {
        let order = SortKey::ascending(FIELD_DATE);

        self.provider
            .query(&self.seminars, None, &order)
            .await
            .map_err(|err| {
                warn!(error = %err, "Fetching seminars failed");
                Fault::new(err.to_string())
            })
    }
}
