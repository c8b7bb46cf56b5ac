use std::path::{Path, PathBuf};

use url::Url;

use crate::domain::RepoId;

/// Converted configuration written into the working copy.
pub const CONFIG_JSON: &str = "config.json";
/// Model card file name.
pub const README: &str = "README.md";
pub const DEFAULT_CONFIG_FILE: &str = "configuration.yaml";

/// Local working copy location for a repository: `{parent}/{name}`.
pub fn working_copy_dir(parent: &Path, repo_id: &RepoId) -> PathBuf {
    parent.join(repo_id.name())
}

/// Everything the publish workflow needs to know about one run.
#[derive(Debug, Clone)]
pub struct PublishRequest {
    /// Run label, used for logging only.
    pub run_id: String,
    /// Local run directory whose top-level entries are published.
    pub source_dir: PathBuf,
    pub repo_id: RepoId,
    pub commit_message: String,
    /// YAML configuration file name inside the run directory.
    pub config_file_name: String,
    /// Embed credentials in the clone URL and configure the hub identity.
    pub use_auth_token: bool,
}

/// What happened to the model card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardWrite {
    /// A newly generated card was written.
    Generated,
    /// An existing README was kept as-is.
    Preserved,
}

/// Result of a successful publish.
#[derive(Debug, Clone)]
pub struct PublishOutcome {
    pub repo_url: Url,
    /// New commit SHA, or `None` when nothing changed.
    pub commit: Option<String>,
    pub card: CardWrite,
    /// Number of top-level run entries copied into the working copy.
    pub copied: usize,
}
