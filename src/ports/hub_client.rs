//! Model hub API port definition.

use url::Url;

use crate::domain::{AppError, RepoId};

/// Account behind the configured token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubIdentity {
    /// Account handle.
    pub name: String,
    /// Display name, if set.
    pub fullname: Option<String>,
    /// Primary email, if visible to the token.
    pub email: Option<String>,
}

impl HubIdentity {
    /// Name to use as git `user.name`.
    pub fn display_name(&self) -> &str {
        self.fullname.as_deref().filter(|n| !n.trim().is_empty()).unwrap_or(&self.name)
    }
}

/// Port for model hub operations.
pub trait HubClient {
    /// Create a model repository, reusing it when it already exists.
    ///
    /// Returns the repository's canonical URL.
    fn create_repo(&self, repo_id: &RepoId, private: bool) -> Result<Url, AppError>;

    /// Look up the account that owns the token.
    fn whoami(&self) -> Result<HubIdentity, AppError>;
}
