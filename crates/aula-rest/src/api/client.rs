//! HTTP client for the hosted backend API.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, instrument, trace};

use aula_core::error::{ApiError, Error, TransportError};

use super::endpoints::ApiErrorResponse;
use crate::config::Config;

/// Maps a reqwest failure into the transport error taxonomy.
pub(crate) fn transport(err: reqwest::Error) -> Error {
    let transport = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(transport)
}

/// HTTP client for API requests.
#[derive(Debug, Clone)]
pub(crate) struct ApiClient {
    client: reqwest::Client,
    config: Config,
}

impl ApiClient {
    /// Create a new client for the given configuration.
    pub fn new(config: Config) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("aula/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self { client, config }
    }

    /// Make an unauthenticated API call (POST request).
    #[instrument(skip(self, body))]
    pub async fn procedure<B, R>(&self, method: &str, body: &B) -> Result<R, Error>
    where
        B: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        let url = self.config.method_url(method);
        debug!(method, "API procedure");
        trace!(?body, "request body");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.config.api_key())])
            .json(body)
            .send()
            .await
            .map_err(transport)?;

        self.handle_response(response).await
    }

    /// Make an authenticated API call (POST request with bearer token).
    #[instrument(skip(self, body, token))]
    pub async fn procedure_authed<B, R>(
        &self,
        method: &str,
        body: &B,
        token: &str,
    ) -> Result<R, Error>
    where
        B: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        let url = self.config.method_url(method);
        debug!(method, "API authenticated procedure");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.config.api_key())])
            .json(body)
            .headers(self.auth_headers(token))
            .send()
            .await
            .map_err(transport)?;

        self.handle_response(response).await
    }

    /// Create authorization headers for authenticated requests.
    fn auth_headers(&self, token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let auth_value = format!("Bearer {}", token);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth_value).expect("invalid token characters"),
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    /// Handle an API response, parsing the body or error.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R, Error> {
        let status = response.status();
        trace!(status = %status, "API response");

        if status.is_success() {
            let body = response.json::<R>().await.map_err(transport)?;
            Ok(body)
        } else {
            let error = self.parse_error_response(response).await;
            Err(Error::Api(error))
        }
    }

    /// Parse an error response body into an [`ApiError`].
    async fn parse_error_response(&self, response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();

        match response.json::<ApiErrorResponse>().await {
            Ok(body) => ApiError::new(status, body.error.code, body.error.message),
            Err(_) => ApiError::new(status, None, None),
        }
    }
}
