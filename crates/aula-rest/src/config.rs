//! Client configuration.

use url::Url;

use aula_core::error::{Error, InvalidInputError};
use aula_core::Result;

/// Default service endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.aulabase.io";

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "AULA_API_KEY";

/// Environment variable holding the project id.
pub const ENV_PROJECT_ID: &str = "AULA_PROJECT_ID";

/// Environment variable overriding the service endpoint.
pub const ENV_ENDPOINT: &str = "AULA_ENDPOINT";

/// Configuration for a [`RestProvider`](crate::RestProvider).
///
/// Both `api_key` and `project_id` are required; construction fails
/// with every missing key named in one error.
#[derive(Debug, Clone)]
pub struct Config {
    api_key: String,
    project_id: String,
    endpoint: Url,
}

impl Config {
    /// Create a configuration against the default endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error naming every required key that is empty.
    pub fn new(api_key: impl Into<String>, project_id: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        let project_id = project_id.into();

        let missing: Vec<&str> = [
            ("api_key", api_key.trim().is_empty()),
            ("project_id", project_id.trim().is_empty()),
        ]
        .iter()
        .filter(|(_, empty)| *empty)
        .map(|(name, _)| *name)
        .collect();

        if !missing.is_empty() {
            return Err(InvalidInputError::Config {
                message: format!("missing required keys: {}", missing.join(", ")),
            }
            .into());
        }

        let endpoint = Url::parse(DEFAULT_ENDPOINT).map_err(|e| InvalidInputError::Config {
            message: format!("invalid default endpoint: {}", e),
        })?;

        Ok(Self {
            api_key,
            project_id,
            endpoint,
        })
    }

    /// Read the configuration from the environment.
    ///
    /// Uses [`ENV_API_KEY`], [`ENV_PROJECT_ID`] and, when set,
    /// [`ENV_ENDPOINT`].
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(ENV_API_KEY).unwrap_or_default();
        let project_id = std::env::var(ENV_PROJECT_ID).unwrap_or_default();

        let mut config = Self::new(api_key, project_id)?;
        if let Ok(endpoint) = std::env::var(ENV_ENDPOINT) {
            config = config.with_endpoint(&endpoint)?;
        }
        Ok(config)
    }

    /// Replace the service endpoint, validating the URL.
    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self> {
        self.endpoint = Url::parse(endpoint).map_err(|e| {
            Error::from(InvalidInputError::Config {
                message: format!("invalid endpoint '{}': {}", endpoint, e),
            })
        })?;
        Ok(self)
    }

    /// Returns the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the project id.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Returns the full URL for a v1 API method.
    pub fn method_url(&self, method: &str) -> String {
        let base = self.endpoint.as_str().trim_end_matches('/');
        format!("{}/v1/{}", base, method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_all_missing_keys_together() {
        let err = Config::new("", "").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("api_key"), "got: {}", msg);
        assert!(msg.contains("project_id"), "got: {}", msg);
    }

    #[test]
    fn builds_method_urls_without_double_slash() {
        let config = Config::new("key", "demo").unwrap();
        assert_eq!(
            config.method_url("accounts:signInWithPassword"),
            "https://api.aulabase.io/v1/accounts:signInWithPassword"
        );
    }

    #[test]
    fn endpoint_override_is_validated() {
        let config = Config::new("key", "demo").unwrap();
        assert!(config.clone().with_endpoint("http://127.0.0.1:9099").is_ok());
        assert!(config.with_endpoint("not a url").is_err());
    }
}
