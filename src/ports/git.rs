use std::path::Path;

use url::Url;

use crate::domain::AppError;

/// Port for git operations on one working copy.
///
/// Implementations are bound to the working copy directory; `clone_from`
/// creates it.
pub trait Git {
    /// Working copy directory.
    fn root(&self) -> &Path;

    /// Whether the working copy directory is a git repository.
    fn is_repository(&self) -> bool;

    /// Clone `url` into the working copy directory.
    fn clone_from(&self, url: &Url) -> Result<(), AppError>;

    /// URL configured for the `origin` remote.
    fn remote_url(&self) -> Result<String, AppError>;

    /// Enable the git-lfs filters and hooks for this working copy only.
    fn install_lfs(&self) -> Result<(), AppError>;

    /// Set a local config value (e.g. `user.name`).
    fn set_config(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Whether `origin` has at least one branch.
    fn remote_has_branches(&self) -> Result<bool, AppError>;

    /// Pull from `origin`, rebasing local commits on top.
    fn pull_rebase(&self) -> Result<(), AppError>;

    /// Stage every change in the working copy.
    fn add_all(&self) -> Result<(), AppError>;

    /// Whether the index differs from HEAD.
    fn has_staged_changes(&self) -> Result<bool, AppError>;

    /// Commit staged changes and return the new HEAD SHA.
    fn commit(&self, message: &str) -> Result<String, AppError>;

    /// Push the current branch to `origin`.
    fn push(&self) -> Result<(), AppError>;
}
