//! Session tracking.
//!
//! Mirrors the provider's auth-state notification stream into a local
//! observable cell. A single consumer task applies events in delivery
//! order; the cell itself is a `tokio::sync::watch` channel, so any
//! number of render-loop style observers can follow it.

use futures_util::StreamExt;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use aula_core::auth::{AuthEvent, AuthUser};
use aula_core::traits::IdentityProvider;

/// The locally observable session state.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    /// The signed-in identity, or `None`.
    pub user: Option<AuthUser>,

    /// True until the first provider notification arrives. Once false,
    /// never reverts for the lifetime of one tracker.
    pub loading: bool,

    /// The most recent stream fault, cleared by the next change
    /// notification.
    pub error: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
            error: None,
        }
    }
}

impl SessionState {
    fn apply(&mut self, event: AuthEvent) {
        match event {
            AuthEvent::Changed(user) => {
                trace!(signed_in = user.is_some(), "auth state changed");
                self.user = user;
                self.error = None;
            }
            AuthEvent::Failed(err) => {
                debug!(error = %err, "auth state stream fault");
                self.error = Some(err.to_string());
            }
        }
        self.loading = false;
    }
}

/// Tracks the provider's auth state as locally observable state.
///
/// Spawning registers exactly one listener with the provider; the
/// tracker is a pure pass-through of the provider's event order.
/// [`stop`](SessionTracker::stop) (or drop) deregisters the listener;
/// no state update is observable after that.
#[derive(Debug)]
pub struct SessionTracker {
    rx: watch::Receiver<SessionState>,
    task: Option<JoinHandle<()>>,
}

impl SessionTracker {
    /// Register with the provider and start tracking.
    pub fn spawn<P: IdentityProvider + ?Sized>(provider: &P) -> Self {
        let mut subscription = provider.subscribe();
        let (tx, rx) = watch::channel(SessionState::default());

        let task = tokio::spawn(async move {
            while let Some(event) = subscription.next().await {
                tx.send_modify(|state| state.apply(event));
            }
        });

        Self {
            rx,
            task: Some(task),
        }
    }

    /// Returns a snapshot of the current session state.
    pub fn state(&self) -> SessionState {
        self.rx.borrow().clone()
    }

    /// Waits until the next event has been applied.
    ///
    /// Returns false once tracking has ended (the subscription closed
    /// or [`stop`](SessionTracker::stop) was called).
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }

    /// Returns an independent observer of the session state.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.rx.clone()
    }

    /// Deregister from the provider.
    ///
    /// Idempotent; the first call tears the subscription down and later
    /// calls are no-ops. Provider notifications delivered afterwards
    /// produce no observable update.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            debug!("session tracker stopped");
            task.abort();
        }
    }
}

impl Drop for SessionTracker {
    fn drop(&mut self) {
        self.stop();
    }
}
