//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::adapters::{GitCommandAdapter, HfTokenStore, HttpHubClient};
use crate::app::{AppContext, commands::publish};
use crate::domain::publish::{DEFAULT_CONFIG_FILE, working_copy_dir};
use crate::domain::{HubConfig, PublishRequest, RepoId};

pub use crate::domain::{AppError, CardWrite, PublishOutcome};

/// Inputs for one publish run, as given on the command line.
#[derive(Debug, Clone)]
pub struct PublishOptions {
    /// Run label, used for logging only.
    pub run_id: String,
    /// Run directory holding the trained model and its configuration.
    pub local_dir: PathBuf,
    /// Target repository, `organization/name`.
    pub repo_id: String,
    pub commit_message: String,
    /// YAML configuration file name inside the run directory.
    pub config_file_name: String,
    /// Authenticate git transport with the stored token.
    pub use_auth_token: bool,
    /// Parent directory for the local working copy.
    pub local_repo_path: PathBuf,
}

impl PublishOptions {
    pub fn new(
        run_id: impl Into<String>,
        repo_id: impl Into<String>,
        commit_message: impl Into<String>,
    ) -> Self {
        Self {
            run_id: run_id.into(),
            local_dir: PathBuf::from("./"),
            repo_id: repo_id.into(),
            commit_message: commit_message.into(),
            config_file_name: DEFAULT_CONFIG_FILE.to_string(),
            use_auth_token: true,
            local_repo_path: PathBuf::from("hub"),
        }
    }
}

/// Publish a run using the token and hub endpoint from the environment.
pub fn publish(options: PublishOptions) -> Result<PublishOutcome, AppError> {
    let tokens = HfTokenStore::from_env();
    let config = HubConfig::from_env()?;
    publish_with(options, &tokens, config)
}

/// Publish a run with explicit token lookup and hub configuration.
pub fn publish_with(
    options: PublishOptions,
    tokens: &HfTokenStore,
    config: HubConfig,
) -> Result<PublishOutcome, AppError> {
    let repo_id = RepoId::parse(&options.repo_id)?;
    let credentials = tokens.require()?;

    let working_copy = working_copy_dir(&options.local_repo_path, &repo_id);
    let git = GitCommandAdapter::new(working_copy).with_secret(credentials.token());
    let hub = HttpHubClient::new(credentials.clone(), config)?;
    let ctx = AppContext::new(hub, git, Some(credentials));

    let request = PublishRequest {
        run_id: options.run_id,
        source_dir: options.local_dir,
        repo_id,
        commit_message: options.commit_message,
        config_file_name: options.config_file_name,
        use_auth_token: options.use_auth_token,
    };

    publish::execute(&ctx, &request)
}
