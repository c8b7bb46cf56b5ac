//! Hub API client implementation using reqwest.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, HubConfig, HubCredentials, RepoId};
use crate::ports::{HubClient, HubIdentity};

const CREATE_REPO_PATH: &str = "api/repos/create";
const WHOAMI_PATH: &str = "api/whoami-v2";
const DEFAULT_STATUS_MESSAGE: &str = "Hub API request failed";

/// HTTP transport for the hub API.
///
/// This client performs a single request per call and never retries.
#[derive(Clone)]
pub struct HttpHubClient {
    credentials: HubCredentials,
    config: HubConfig,
    client: Client,
}

impl std::fmt::Debug for HttpHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpHubClient")
            .field("endpoint", &self.config.endpoint)
            .field("credentials", &self.credentials)
            .finish()
    }
}

impl HttpHubClient {
    /// Create a new HTTP client with the given credentials and configuration.
    pub fn new(credentials: HubCredentials, config: HubConfig) -> Result<Self, AppError> {
        config.validate()?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::HubApi {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self { credentials, config, client })
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.credentials.token())
    }

    fn repo_url(&self, repo_id: &RepoId) -> Result<Url, AppError> {
        self.config.api_url(&repo_id.to_string())
    }

    fn send(&self, request: reqwest::blocking::RequestBuilder) -> Result<Response, AppError> {
        request
            .header(AUTHORIZATION, self.bearer())
            .send()
            .map_err(|e| AppError::HubApi { message: format!("HTTP request failed: {}", e), status: None })
    }
}

#[derive(Debug, Serialize)]
struct CreateRepoRequest<'a> {
    #[serde(rename = "type")]
    repo_type: &'a str,
    name: &'a str,
    organization: &'a str,
    private: bool,
}

#[derive(Debug, Deserialize)]
struct CreateRepoResponse {
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WhoamiResponse {
    name: String,
    #[serde(default)]
    fullname: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    match parsed.get("error") {
        Some(serde_json::Value::String(msg)) => return Some(msg.clone()),
        Some(error) => {
            if let Some(msg) = error.get("message").and_then(|message| message.as_str()) {
                return Some(msg.to_string());
            }
        }
        None => {}
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

fn status_error(status: StatusCode, body_text: &str) -> AppError {
    let message = extract_error_message(body_text).unwrap_or_else(|| {
        if !body_text.trim().is_empty() {
            body_text.trim().to_string()
        } else if status == StatusCode::UNAUTHORIZED {
            "Invalid or expired token".to_string()
        } else if status.is_server_error() {
            "Server error".to_string()
        } else {
            DEFAULT_STATUS_MESSAGE.to_string()
        }
    });

    AppError::HubApi { message, status: Some(status.as_u16()) }
}

fn parse_url(raw: &str, status: StatusCode) -> Result<Url, AppError> {
    Url::parse(raw).map_err(|e| AppError::HubApi {
        message: format!("Hub returned an invalid repository URL '{}': {}", raw, e),
        status: Some(status.as_u16()),
    })
}

impl HubClient for HttpHubClient {
    fn create_repo(&self, repo_id: &RepoId, private: bool) -> Result<Url, AppError> {
        let body = CreateRepoRequest {
            repo_type: "model",
            name: repo_id.name(),
            organization: repo_id.organization(),
            private,
        };

        let response = self.send(
            self.client
                .post(self.config.api_url(CREATE_REPO_PATH)?)
                .header(CONTENT_TYPE, "application/json")
                .json(&body),
        )?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if status.is_success() || status == StatusCode::CONFLICT {
            if status == StatusCode::CONFLICT {
                tracing::info!(repo = %repo_id, "repository already exists, reusing it");
            }
            let url = serde_json::from_str::<CreateRepoResponse>(&body_text)
                .ok()
                .and_then(|parsed| parsed.url)
                .filter(|url| !url.trim().is_empty());
            return match url {
                Some(url) => parse_url(&url, status),
                None => self.repo_url(repo_id),
            };
        }

        Err(status_error(status, &body_text))
    }

    fn whoami(&self) -> Result<HubIdentity, AppError> {
        let response = self.send(self.client.get(self.config.api_url(WHOAMI_PATH)?))?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if !status.is_success() {
            return Err(status_error(status, &body_text));
        }

        let parsed: WhoamiResponse =
            serde_json::from_str(&body_text).map_err(|e| AppError::HubApi {
                message: format!("Failed to parse response: {}", e),
                status: Some(status.as_u16()),
            })?;

        Ok(HubIdentity { name: parsed.name, fullname: parsed.fullname, email: parsed.email })
    }
}
