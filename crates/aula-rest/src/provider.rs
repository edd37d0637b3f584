//! REST-backed provider implementation.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use aula_core::auth::{AuthSubscription, AuthUser};
use aula_core::record::DocumentRecord;
use aula_core::traits::{DocumentStore, IdentityProvider};
use aula_core::types::{CollectionId, FieldFilter, SortKey};
use aula_core::Result;

use crate::api::client::ApiClient;
use crate::api::endpoints::{
    query_method, QueryRequest, QueryResponse, SendOobCodeRequest, SendOobCodeResponse,
    SignInRequest, SignInResponse, OOB_PASSWORD_RESET, SEND_OOB_CODE, SIGN_IN,
};
use crate::config::Config;

/// The signed-in account held by the provider.
struct ActiveSession {
    user: AuthUser,
    id_token: String,
}

struct ProviderInner {
    config: Config,
    client: ApiClient,
    // Short critical sections only; never held across an await.
    session: RwLock<Option<ActiveSession>>,
    listeners: crate::listeners::Listeners,
}

/// A network-backed identity-and-document provider.
///
/// Cheap to clone (internal `Arc`); one instance is meant to be shared
/// between the gateway and the session tracker.
#[derive(Clone)]
pub struct RestProvider {
    inner: Arc<ProviderInner>,
}

impl RestProvider {
    /// Create a provider for the given configuration.
    pub fn new(config: Config) -> Self {
        let client = ApiClient::new(config.clone());
        Self {
            inner: Arc::new(ProviderInner {
                config,
                client,
                session: RwLock::new(None),
                listeners: crate::listeners::Listeners::default(),
            }),
        }
    }

    /// Returns the currently signed-in user, if any.
    pub fn current_user(&self) -> Option<AuthUser> {
        self.inner
            .session
            .read()
            .expect("session lock poisoned")
            .as_ref()
            .map(|s| s.user.clone())
    }

    fn current_token(&self) -> Option<String> {
        self.inner
            .session
            .read()
            .expect("session lock poisoned")
            .as_ref()
            .map(|s| s.id_token.clone())
    }
}

#[async_trait]
impl IdentityProvider for RestProvider {
    #[instrument(skip(self, password))]
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser> {
        info!("Signing in");

        let request = SignInRequest {
            email,
            password,
            return_secure_token: true,
        };

        let response: SignInResponse = self.inner.client.procedure(SIGN_IN, &request).await?;

        let user = AuthUser {
            uid: response.local_id,
            email: response.email,
            display_name: response.display_name,
        };

        {
            let mut session = self.inner.session.write().expect("session lock poisoned");
            *session = Some(ActiveSession {
                user: user.clone(),
                id_token: response.id_token,
            });
        }

        debug!(uid = %user.uid, "Signed in");
        self.inner.listeners.emit_changed(Some(user.clone()));

        Ok(user)
    }

    // The protocol has no server-side sign-out call; ending the session
    // means discarding the local token and notifying listeners.
    #[instrument(skip(self))]
    async fn sign_out(&self) -> Result<()> {
        info!("Signing out");

        let had_session = {
            let mut session = self.inner.session.write().expect("session lock poisoned");
            session.take().is_some()
        };

        if had_session {
            self.inner.listeners.emit_changed(None);
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn send_password_reset(&self, email: &str) -> Result<()> {
        debug!("Requesting password reset mail");

        let request = SendOobCodeRequest {
            request_type: OOB_PASSWORD_RESET,
            email,
        };

        let _: SendOobCodeResponse = self.inner.client.procedure(SEND_OOB_CODE, &request).await?;

        Ok(())
    }

    fn subscribe(&self) -> AuthSubscription {
        self.inner.listeners.subscribe(self.current_user())
    }
}

#[async_trait]
impl DocumentStore for RestProvider {
    #[instrument(skip(self, filter, order))]
    async fn query(
        &self,
        collection: &CollectionId,
        filter: Option<&FieldFilter>,
        order: &SortKey,
    ) -> Result<Vec<DocumentRecord>> {
        debug!("Querying collection");

        let method = query_method(self.inner.config.project_id(), collection.as_str());
        let request = QueryRequest {
            filter,
            order_by: order,
        };

        let response: QueryResponse = match self.current_token() {
            Some(token) => {
                self.inner
                    .client
                    .procedure_authed(&method, &request, &token)
                    .await?
            }
            None => self.inner.client.procedure(&method, &request).await?,
        };

        Ok(response
            .documents
            .into_iter()
            .map(|d| DocumentRecord::new(d.id, d.fields))
            .collect())
    }
}
