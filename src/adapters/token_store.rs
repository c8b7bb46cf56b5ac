//! Hub token lookup.
//!
//! Mirrors where the Hugging Face tooling stores tokens: the `HF_TOKEN` /
//! `HUGGING_FACE_HUB_TOKEN` variables first, then the token file under
//! `$HF_HOME` (default `~/.cache/huggingface`), then the legacy
//! `~/.huggingface/token`.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::domain::{AppError, HubCredentials};

const TOKEN_ENV_VARS: [&str; 2] = ["HF_TOKEN", "HUGGING_FACE_HUB_TOKEN"];

#[derive(Debug, Clone, Default)]
pub struct HfTokenStore {
    env_token: Option<String>,
    token_files: Vec<PathBuf>,
}

impl HfTokenStore {
    pub fn new(env_token: Option<String>, token_files: Vec<PathBuf>) -> Self {
        Self { env_token, token_files }
    }

    pub fn from_env() -> Self {
        let env_token = TOKEN_ENV_VARS
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty());

        let home = std::env::var_os("HOME").map(PathBuf::from);
        let hf_home = std::env::var_os("HF_HOME")
            .map(PathBuf::from)
            .or_else(|| home.as_ref().map(|home| home.join(".cache").join("huggingface")));

        let mut token_files = Vec::new();
        if let Some(hf_home) = hf_home {
            token_files.push(hf_home.join("token"));
        }
        if let Some(home) = home {
            token_files.push(home.join(".huggingface").join("token"));
        }

        Self { env_token, token_files }
    }

    /// Return the first non-empty token, if any.
    pub fn load(&self) -> Result<Option<HubCredentials>, AppError> {
        if let Some(token) = &self.env_token {
            return Ok(Some(HubCredentials::new(token.clone())));
        }

        for path in &self.token_files {
            match fs::read_to_string(path) {
                Ok(content) => {
                    let token = content.trim();
                    if !token.is_empty() {
                        tracing::debug!(path = %path.display(), "using stored hub token");
                        return Ok(Some(HubCredentials::new(token)));
                    }
                }
                Err(err) if err.kind() == io::ErrorKind::NotFound => {}
                Err(err) => return Err(AppError::Io(err)),
            }
        }

        Ok(None)
    }

    /// Like [`load`](Self::load), but a missing token is an error.
    pub fn require(&self) -> Result<HubCredentials, AppError> {
        self.load()?.ok_or(AppError::AuthenticationMissing)
    }
}
