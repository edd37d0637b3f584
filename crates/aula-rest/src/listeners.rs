//! Auth-state listener registry.

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;
use tracing::trace;

use aula_core::auth::{AuthEvent, AuthSubscription, AuthUser};

/// Registry of auth-state listeners.
///
/// Each registration gets its own channel, so one slow consumer never
/// reorders or drops events for another. Dropped subscriptions are
/// pruned on the next emit.
#[derive(Debug, Clone, Default)]
pub(crate) struct Listeners {
    senders: Arc<Mutex<Vec<mpsc::UnboundedSender<AuthEvent>>>>,
}

impl Listeners {
    /// Register a listener.
    ///
    /// The subscription yields `snapshot` first, then live events in
    /// emission order. Registration happens under the same lock emits
    /// take, so no event lands between the snapshot and the live feed.
    pub fn subscribe(&self, snapshot: Option<AuthUser>) -> AuthSubscription {
        let (tx, mut rx) = mpsc::unbounded_channel();

        {
            let mut senders = self.senders.lock().expect("listener registry poisoned");
            // Queued ahead of any event emitted after registration.
            let _ = tx.send(AuthEvent::Changed(snapshot));
            senders.push(tx);
        }

        AuthSubscription::new(async_stream::stream! {
            while let Some(event) = rx.recv().await {
                yield event;
            }
        })
    }

    /// Notify every live listener that the signed-in identity changed.
    pub fn emit_changed(&self, user: Option<AuthUser>) {
        let mut senders = self.senders.lock().expect("listener registry poisoned");
        senders.retain(|tx| tx.send(AuthEvent::Changed(user.clone())).is_ok());
        trace!(listeners = senders.len(), "auth state change delivered");
    }
}
