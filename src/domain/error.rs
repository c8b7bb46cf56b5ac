use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for mlpush operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Repository identifier is not of the form `organization/name`.
    #[error(
        "Invalid repository id '{0}': expected 'organization/name' using alphanumerics, '-', '_' or '.'"
    )]
    InvalidRepoId(String),

    /// Source configuration document missing or malformed.
    #[error("Failed to read configuration {}: {details}", path.display())]
    ConfigRead { path: PathBuf, details: String },

    /// Converted configuration could not be written.
    #[error("Failed to write configuration {}: {details}", path.display())]
    ConfigWrite { path: PathBuf, details: String },

    /// Configuration has no entry under `behaviors`.
    #[error("Configuration {} has no entry under 'behaviors'", path.display())]
    MissingBehavior { path: PathBuf },

    /// A required field is missing from a behavior entry.
    #[error("Behavior '{behavior}' is missing required field '{field}'")]
    MissingField { behavior: String, field: String },

    /// Model card template failed to render.
    #[error("Failed to render {template}: {details}")]
    Template { template: String, details: String },

    /// No hub token could be found.
    #[error(
        "No Hugging Face token found. Set HF_TOKEN or run 'huggingface-cli login' to store one."
    )]
    AuthenticationMissing,

    /// Hub API request failed.
    #[error("Hub API error{}: {message}", status.map(|s| format!(" ({s})")).unwrap_or_default())]
    HubApi { message: String, status: Option<u16> },

    /// Git execution failed.
    #[error("Git error running '{command}': {details}")]
    GitError { command: String, details: String },

    /// Working copy directory holds unrelated content.
    #[error("Cannot clone into {}: directory is not empty and is not a git repository", .0.display())]
    WorkingCopyNotEmpty(PathBuf),

    /// Working copy belongs to a different remote.
    #[error("Working copy {} tracks '{found}', expected '{expected}'", path.display())]
    WorkingCopyMismatch { path: PathBuf, expected: String, found: String },

    /// git-lfs is missing or could not be enabled in the working copy.
    #[error("git-lfs is required to publish large files (install it from https://git-lfs.com): {0}")]
    LfsUnavailable(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn git<C: Into<String>, D: ToString>(command: C, details: D) -> Self {
        AppError::GitError { command: command.into(), details: details.to_string() }
    }
}
