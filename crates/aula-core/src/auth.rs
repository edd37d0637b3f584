//! Authentication state types.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The provider's identity record for a signed-in user.
///
/// Opaque beyond the fields below; interpretation of anything else is
/// left to the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    /// Provider-assigned user id.
    pub uid: String,

    /// Email address, if the provider reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Display name, if set on the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl AuthUser {
    /// Create an identity record with just a uid.
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            email: None,
            display_name: None,
        }
    }
}

/// One notification from the provider's auth-state stream.
#[derive(Debug)]
pub enum AuthEvent {
    /// The signed-in identity changed: a user, or none after sign-out.
    Changed(Option<AuthUser>),

    /// The provider reported a fault on the notification stream.
    Failed(Error),
}

/// A registration on the provider's auth-state stream.
///
/// Yields [`AuthEvent`]s in the order the provider delivers them.
/// Dropping the subscription deregisters the listener; no further
/// events are observed after the drop.
pub struct AuthSubscription {
    inner: Pin<Box<dyn Stream<Item = AuthEvent> + Send>>,
}

impl AuthSubscription {
    /// Wrap a provider event stream.
    pub fn new(stream: impl Stream<Item = AuthEvent> + Send + 'static) -> Self {
        Self {
            inner: Box::pin(stream),
        }
    }
}

impl Stream for AuthSubscription {
    type Item = AuthEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}

impl std::fmt::Debug for AuthSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSubscription").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;

    #[test]
    fn auth_user_camel_case_wire_names() {
        let user = AuthUser {
            uid: "u1".to_string(),
            email: Some("a@example.com".to_string()),
            display_name: Some("Alice".to_string()),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["displayName"], "Alice");
    }

    #[tokio::test]
    async fn subscription_yields_in_stream_order() {
        let events = futures_util::stream::iter(vec![
            AuthEvent::Changed(None),
            AuthEvent::Changed(Some(AuthUser::new("u1"))),
        ]);
        let mut sub = AuthSubscription::new(events);

        assert!(matches!(sub.next().await, Some(AuthEvent::Changed(None))));
        match sub.next().await {
            Some(AuthEvent::Changed(Some(user))) => assert_eq!(user.uid, "u1"),
            other => panic!("unexpected event: {:?}", other),
        }
        assert!(sub.next().await.is_none());
    }
}
