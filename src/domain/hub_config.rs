use std::fmt;

use url::Url;

use crate::domain::AppError;

const DEFAULT_ENDPOINT: &str = "https://huggingface.co";
const ENDPOINT_ENV: &str = "HF_ENDPOINT";

/// Hub API connection settings.
#[derive(Debug, Clone)]
pub struct HubConfig {
    /// Base URL of the hub (API and git remotes live under it).
    pub endpoint: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self { endpoint: default_endpoint(), timeout_secs: default_timeout() }
    }
}

impl HubConfig {
    /// Build the configuration, honoring `HF_ENDPOINT` when set.
    pub fn from_env() -> Result<Self, AppError> {
        match std::env::var(ENDPOINT_ENV) {
            Ok(value) if !value.trim().is_empty() => Self::with_endpoint(value.trim()),
            _ => Ok(Self::default()),
        }
    }

    pub fn with_endpoint(endpoint: &str) -> Result<Self, AppError> {
        let endpoint = Url::parse(endpoint).map_err(|e| {
            AppError::config_error(format!("Invalid hub endpoint '{}': {}", endpoint, e))
        })?;
        let config = Self { endpoint, ..Self::default() };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if !matches!(self.endpoint.scheme(), "http" | "https") {
            return Err(AppError::config_error(format!(
                "Hub endpoint must use http or https, got '{}'",
                self.endpoint
            )));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("Hub timeout must be greater than zero"));
        }
        Ok(())
    }

    /// Resolve an API path (e.g. `api/repos/create`) against the endpoint.
    pub fn api_url(&self, path: &str) -> Result<Url, AppError> {
        let base = self.endpoint.as_str().trim_end_matches('/');
        Url::parse(&format!("{}/{}", base, path.trim_start_matches('/')))
            .map_err(|e| AppError::config_error(format!("Invalid hub URL for '{}': {}", path, e)))
    }
}

fn default_endpoint() -> Url {
    Url::parse(DEFAULT_ENDPOINT).expect("default hub endpoint is a valid URL")
}

fn default_timeout() -> u64 {
    30
}

/// Access token for the hub.
#[derive(Clone, PartialEq, Eq)]
pub struct HubCredentials {
    token: String,
}

impl HubCredentials {
    pub fn new<S: Into<String>>(token: S) -> Self {
        Self { token: token.into() }
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for HubCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HubCredentials").field("token", &"[REDACTED]").finish()
    }
}
